//! Controller state owned by the hosting widget.

use crate::axis::AxisValue;
use crate::dof::DegreeOfFreedom;
use crate::geometry::Point;

/// State for the joystick control.
///
/// Mutated only by the move mapping (drag) and by the release reset; the
/// hosting widget owns exactly one instance.
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Current handle position, relative to the widget center.
    pub handle: Point,
    /// Degree of freedom currently allowed.
    pub dof: DegreeOfFreedom,
    /// Whether the handle snaps back to center when the pointer is released.
    pub back_to_center: bool,
    /// Stored X-axis value, saturated to [0, 255].
    pub value_x: AxisValue,
    /// Stored Y-axis value, saturated to [0, 255].
    pub value_y: AxisValue,
}

impl ControllerState {
    /// Construction defaults: handle at center, all axes free, snapping back
    /// to center on release.
    pub fn new() -> Self {
        Self {
            handle: Point::ORIGIN,
            dof: DegreeOfFreedom::All,
            back_to_center: true,
            value_x: AxisValue::REST,
            value_y: AxisValue::REST,
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}
