//! Host adapter connecting widget notifications to the position mapper.
//!
//! The toolkit-specific widget owns a [`VirtualJoystick`] and forwards its
//! resize/press/move/release notifications here; this type mutates the
//! controller state, invokes observers synchronously, and reports whether
//! the widget needs a redraw. No inheritance from a widget base type is
//! involved; the widget composes this adapter and draws from its state.

use tracing::{debug, trace};

use crate::axis::AxisValue;
use crate::config::JoystickConfig;
use crate::dof::DegreeOfFreedom;
use crate::geometry::{
    circle_contains, compute_radii, map_position, recenter, rest_position, Point, Radii,
};
use crate::state::ControllerState;

/// Observer invoked when the handle is pressed.
pub type PressedObserver = Box<dyn FnMut()>;

/// Observer invoked with the reported axis pair after each drag mapping.
///
/// The pair is the raw recentred pointer offset, not the clamped handle
/// position (see [`VirtualJoystick::handle_move`]).
pub type ValueObserver = Box<dyn FnMut(i32, i32)>;

/// Toolkit-agnostic joystick controller.
///
/// Sequential, single-threaded by construction: the host's event-dispatch
/// thread is the only caller, and every observer fires synchronously before
/// the notification method returns.
pub struct VirtualJoystick {
    state: ControllerState,
    radii: Radii,
    width: i32,
    height: i32,
    pressed_observers: Vec<PressedObserver>,
    value_observers: Vec<ValueObserver>,
}

impl VirtualJoystick {
    /// Create a controller with the construction defaults: handle at center,
    /// all axes free, back-to-center enabled, zero size until the first
    /// resize notification.
    pub fn new() -> Self {
        Self {
            state: ControllerState::new(),
            radii: Radii::default(),
            width: 0,
            height: 0,
            pressed_observers: Vec::new(),
            value_observers: Vec::new(),
        }
    }

    /// Create a controller with settings applied from configuration.
    pub fn from_config(config: &JoystickConfig) -> Self {
        let mut joystick = Self::new();
        joystick.state.dof = config.mode;
        joystick.state.back_to_center = config.back_to_center;
        joystick
    }

    /// Register an observer for handle presses.
    pub fn on_pressed(&mut self, observer: impl FnMut() + 'static) {
        self.pressed_observers.push(Box::new(observer));
    }

    /// Register an observer for value changes during a drag.
    pub fn on_value_changed(&mut self, observer: impl FnMut(i32, i32) + 'static) {
        self.value_observers.push(Box::new(observer));
    }

    /// Host notification: the widget was resized.
    ///
    /// Recomputes both radii from the new size and recenters the handle.
    /// The toolkit repaints after a resize on its own, so no redraw flag is
    /// returned.
    pub fn handle_resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.radii = compute_radii(width, height);
        self.state.handle = rest_position(self.radii.travel);
        debug!(
            "Joystick resized to {}x{}: travel radius {}, handle radius {}",
            width, height, self.radii.travel, self.radii.handle
        );
    }

    /// Host notification: the pointer was pressed at `pos` (top-left widget
    /// coordinates).
    ///
    /// Notifies `pressed` observers when the press lands on the handle.
    ///
    /// # Returns
    /// `true` if the widget should redraw; the widget repaints on every
    /// press.
    pub fn handle_press(&mut self, pos: Point) -> bool {
        let offset = recenter(pos, self.width, self.height);

        if circle_contains(offset, self.radii.handle) {
            debug!("Joystick handle pressed at ({}, {})", offset.x, offset.y);
            for observer in &mut self.pressed_observers {
                observer();
            }
        }

        true
    }

    /// Host notification: the pointer moved to `pos` (top-left widget
    /// coordinates).
    ///
    /// Ignored unless the primary button is held. Otherwise maps the
    /// recentred offset through the current degree of freedom, stores the
    /// new handle position and saturated axis values, and notifies
    /// `value_changed` observers.
    ///
    /// Observers receive the raw recentred offset, reported even when the
    /// handle itself was clamped to the travel boundary; its magnitude can
    /// therefore exceed the travel radius. The bounded [0, 255] values are
    /// available from [`value_x`](Self::value_x) /
    /// [`value_y`](Self::value_y).
    ///
    /// # Returns
    /// `true` if the widget should redraw.
    pub fn handle_move(&mut self, pos: Point, primary_held: bool) -> bool {
        if !primary_held {
            return false;
        }

        let offset = recenter(pos, self.width, self.height);
        let mapped = map_position(offset, self.state.dof, self.radii.travel, self.state.handle);

        self.state.handle = mapped.handle;
        self.state.value_x = AxisValue::from_offset(mapped.reported_x, self.radii.travel);
        self.state.value_y = AxisValue::from_offset(mapped.reported_y, self.radii.travel);

        trace!(
            "Joystick moved: raw ({}, {}) -> handle ({}, {})",
            mapped.reported_x, mapped.reported_y, mapped.handle.x, mapped.handle.y
        );

        for observer in &mut self.value_observers {
            observer(mapped.reported_x, mapped.reported_y);
        }

        true
    }

    /// Host notification: the pointer was released.
    ///
    /// Snaps the handle (and the stored axis values) back to rest when
    /// back-to-center is enabled; otherwise the handle stays where the drag
    /// left it.
    ///
    /// # Returns
    /// `true` if the widget should redraw.
    pub fn handle_release(&mut self) -> bool {
        if !self.state.back_to_center {
            return false;
        }

        self.state.handle = rest_position(self.radii.travel);
        self.state.value_x = AxisValue::REST;
        self.state.value_y = AxisValue::REST;
        debug!("Joystick released, handle back to center");

        true
    }

    /// Current X-axis value.
    pub fn value_x(&self) -> AxisValue {
        self.state.value_x
    }

    /// Current Y-axis value.
    pub fn value_y(&self) -> AxisValue {
        self.state.value_y
    }

    /// Set the X-axis value directly.
    ///
    /// # Returns
    /// `true` if the value changed and the widget should redraw.
    pub fn set_value_x(&mut self, value: AxisValue) -> bool {
        let changed = self.state.value_x != value;
        self.state.value_x = value;
        changed
    }

    /// Set the Y-axis value directly.
    ///
    /// # Returns
    /// `true` if the value changed and the widget should redraw.
    pub fn set_value_y(&mut self, value: AxisValue) -> bool {
        let changed = self.state.value_y != value;
        self.state.value_y = value;
        changed
    }

    /// Degree of freedom currently allowed.
    pub fn dof(&self) -> DegreeOfFreedom {
        self.state.dof
    }

    /// Set the degree of freedom. The widget should redraw afterwards.
    pub fn set_dof(&mut self, dof: DegreeOfFreedom) {
        self.state.dof = dof;
    }

    /// Whether the handle snaps back to center on release.
    pub fn back_to_center(&self) -> bool {
        self.state.back_to_center
    }

    /// Enable or disable snapping back to center on release.
    pub fn set_back_to_center(&mut self, enable: bool) {
        self.state.back_to_center = enable;
    }

    /// Current handle position, relative to the widget center.
    pub fn handle_position(&self) -> Point {
        self.state.handle
    }

    /// Radii derived from the last resize.
    pub fn radii(&self) -> Radii {
        self.radii
    }

    /// The full controller state, for hosts that draw from it directly.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self::new()
    }
}
