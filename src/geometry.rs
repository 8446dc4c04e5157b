//! Pure position-mapping and sizing math for the joystick control.
//!
//! This module is the canonical implementation of the pointer-to-handle
//! mapping: it takes a pointer offset already expressed relative to the
//! widget center and produces the clamped handle position for the current
//! degree of freedom.
//!
//! # Radial clamping
//!
//! Movement with all axes enabled is clamped radially (circular boundary),
//! not per-axis (square boundary). Inside the travel circle the handle
//! follows the pointer exactly; outside it, the handle sits on the circle
//! along the ray from the center through the pointer.
//!
//! All functions here are total: out-of-range inputs degrade via clamping,
//! never through error signaling.

use crate::dof::DegreeOfFreedom;

/// Pixel offset relative to the widget center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The widget center, which is also the handle's rest position.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Euclidean distance from the origin.
    pub fn magnitude(self) -> f64 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        (x * x + y * y).sqrt()
    }
}

/// Radii derived from the widget size.
///
/// `travel` bounds how far the handle may move from center; `handle` is the
/// handle's own radius, used by the host for hit-testing and drawing only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Radii {
    pub travel: i32,
    pub handle: i32,
}

/// Result of mapping one pointer position.
///
/// `reported_x`/`reported_y` are the raw recentred pointer offsets, NOT the
/// clamped handle coordinates: observers receive the pre-clamp values even
/// when the handle is pinned to the boundary, so their magnitude can exceed
/// the travel radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapped {
    pub handle: Point,
    pub reported_x: i32,
    pub reported_y: i32,
}

/// Map a recentred pointer offset to a handle position.
///
/// # Arguments
/// * `raw_offset` - Pointer position relative to the widget center; may be
///   anywhere on screen
/// * `dof` - Degree of freedom currently allowed
/// * `travel_radius` - Outer travel boundary radius (>= 0)
/// * `prev_handle` - Handle position before this move; returned unchanged
///   when `dof` disables all movement
///
/// # Returns
/// The new handle position plus the reported axis pair.
///
/// # Example
/// ```
/// use virtual_joystick::{map_position, DegreeOfFreedom, Point};
///
/// // Outside the circle: clamped to the boundary along the pointer ray
/// let m = map_position(
///     Point { x: 100, y: 0 },
///     DegreeOfFreedom::All,
///     50,
///     Point::ORIGIN,
/// );
/// assert_eq!(m.handle, Point { x: 50, y: 0 });
/// assert_eq!((m.reported_x, m.reported_y), (100, 0));
/// ```
pub fn map_position(
    raw_offset: Point,
    dof: DegreeOfFreedom,
    travel_radius: i32,
    prev_handle: Point,
) -> Mapped {
    let handle = match dof {
        DegreeOfFreedom::All => clamp_to_circle(raw_offset, travel_radius),
        DegreeOfFreedom::XOnly => Point {
            x: clamp_axis(raw_offset.x, travel_radius),
            y: 0,
        },
        DegreeOfFreedom::YOnly => Point {
            x: 0,
            y: clamp_axis(raw_offset.y, travel_radius),
        },
        DegreeOfFreedom::None => prev_handle,
    };

    Mapped {
        handle,
        reported_x: raw_offset.x,
        reported_y: raw_offset.y,
    }
}

/// Clamp a point to the circle of the given radius around the origin.
///
/// Interior points are preserved exactly; exterior points are scaled back
/// along their ray to the boundary. Direct magnitude scaling keeps this a
/// total function; the zero-distance case short-circuits to the origin so
/// no division or inverse trigonometry can hit an undefined domain.
fn clamp_to_circle(point: Point, radius: i32) -> Point {
    if circle_contains(point, radius) {
        return point;
    }

    let magnitude = point.magnitude();
    if magnitude == 0.0 {
        // Distance 0 is always inside a non-negative radius, so this branch
        // only triggers for a degenerate negative radius. Never divide by it.
        return Point::ORIGIN;
    }

    let scale = f64::from(radius) / magnitude;
    Point {
        x: (f64::from(point.x) * scale).round() as i32,
        y: (f64::from(point.y) * scale).round() as i32,
    }
}

/// Clamp a single axis offset to `[-radius, +radius]`.
///
/// Values strictly inside the range pass through unchanged; anything at or
/// beyond the boundary pins to the signed extreme.
fn clamp_axis(offset: i32, radius: i32) -> i32 {
    if offset > -radius && offset < radius {
        offset
    } else if offset > 0 {
        radius
    } else {
        -radius
    }
}

/// Handle rest position: the travel boundary's center.
///
/// The rest position is the origin regardless of the travel radius; the
/// parameter exists because callers resolve it alongside the radius on
/// release.
pub const fn rest_position(_travel_radius: i32) -> Point {
    Point::ORIGIN
}

/// Derive the travel and handle radii from the widget size.
///
/// The travel radius is `min(width, height) / 2 - min(width, height) / 6`
/// using integer floor division, and the handle radius is half of that.
/// Invoked by the host on every resize.
///
/// # Example
/// ```
/// use virtual_joystick::compute_radii;
///
/// let radii = compute_radii(300, 200);
/// assert_eq!(radii.travel, 67);
/// assert_eq!(radii.handle, 33);
/// ```
pub fn compute_radii(width: i32, height: i32) -> Radii {
    let side = width.min(height).max(0);
    let travel = side / 2 - side / 6;
    Radii {
        travel,
        handle: travel / 2,
    }
}

/// Whether a point lies inside or on the circle of the given radius.
///
/// Pure integer test (`x² + y² <= r²`), widened to avoid overflow for
/// off-screen pointer positions.
pub fn circle_contains(point: Point, radius: i32) -> bool {
    let x = i64::from(point.x);
    let y = i64::from(point.y);
    let r = i64::from(radius);
    x * x + y * y <= r * r
}

/// Translate top-left widget coordinates to center-relative coordinates.
pub fn recenter(pos: Point, width: i32, height: i32) -> Point {
    Point {
        x: pos.x - width / 2,
        y: pos.y - height / 2,
    }
}
