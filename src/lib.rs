//! Toolkit-agnostic core for a virtual on-screen joystick control.
//!
//! The control mirrors an electronic thumbstick: the user drags a handle
//! inside a circular travel boundary, each axis reports a byte value in
//! [0, 255] with rest at the midpoint, and the handle optionally snaps back
//! to center on release. The degree of freedom can restrict movement to one
//! axis or disable it entirely.
//!
//! The crate carries no rendering or event loop. A toolkit-specific widget
//! owns a [`VirtualJoystick`] and forwards pointer and resize notifications
//! to it; the pure mapping math lives in [`geometry`] and is usable on its
//! own.
//!
//! ```
//! use virtual_joystick::{Point, VirtualJoystick};
//!
//! let mut joystick = VirtualJoystick::new();
//! joystick.on_value_changed(|x, y| println!("axes moved: {x}, {y}"));
//!
//! joystick.handle_resize(300, 200);
//! joystick.handle_press(Point { x: 150, y: 100 });
//! let redraw = joystick.handle_move(Point { x: 190, y: 100 }, true);
//! assert!(redraw);
//! assert_eq!(joystick.handle_position(), Point { x: 40, y: 0 });
//! ```

pub mod axis;
pub mod config;
pub mod controller;
pub mod dof;
pub mod geometry;
pub mod state;

pub use axis::AxisValue;
pub use config::{ConfigError, JoystickConfig};
pub use controller::{PressedObserver, ValueObserver, VirtualJoystick};
pub use dof::DegreeOfFreedom;
pub use geometry::{
    circle_contains, compute_radii, map_position, recenter, rest_position, Mapped, Point, Radii,
};
pub use state::ControllerState;
