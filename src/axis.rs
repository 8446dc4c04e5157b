//! Bounded axis values in the electronic-joystick [0, 255] range.
//!
//! The control mirrors a physical thumbstick whose axes report a byte value
//! with the rest position at the midpoint. Assignments saturate at the range
//! ends instead of wrapping, so an over-travel offset pins to 0 or 255.

/// A joystick axis value, bounded to [0, 255] with saturation on assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AxisValue(u8);

impl AxisValue {
    /// Rest value: the midpoint of the travel range.
    pub const REST: AxisValue = AxisValue(127);

    /// Build from an arbitrary integer, saturating to [0, 255].
    pub fn saturating_from(value: i32) -> Self {
        AxisValue(value.clamp(0, 255) as u8)
    }

    /// Map a centered offset in `[-travel_radius, +travel_radius]` linearly
    /// onto [0, 255].
    ///
    /// Offsets beyond the travel radius saturate at the range ends. A zero
    /// radius has no travel to scale against and yields [`AxisValue::REST`].
    pub fn from_offset(offset: i32, travel_radius: i32) -> Self {
        if travel_radius <= 0 {
            return Self::REST;
        }
        let scaled = (i64::from(offset) + i64::from(travel_radius)) * 255
            / (2 * i64::from(travel_radius));
        AxisValue(scaled.clamp(0, 255) as u8)
    }

    /// The raw byte value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for AxisValue {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_saturating_from_clamps_both_ends() {
        assert_eq!(AxisValue::saturating_from(-1).get(), 0);
        assert_eq!(AxisValue::saturating_from(-10_000).get(), 0);
        assert_eq!(AxisValue::saturating_from(256).get(), 255);
        assert_eq!(AxisValue::saturating_from(10_000).get(), 255);
        assert_eq!(AxisValue::saturating_from(128).get(), 128);
    }

    #[test]
    fn test_from_offset_endpoints() {
        assert_eq!(AxisValue::from_offset(-50, 50).get(), 0);
        assert_eq!(AxisValue::from_offset(50, 50).get(), 255);
        assert_eq!(AxisValue::from_offset(0, 50).get(), 127);
    }

    #[test]
    fn test_from_offset_saturates_beyond_travel() {
        assert_eq!(AxisValue::from_offset(300, 50).get(), 255);
        assert_eq!(AxisValue::from_offset(-300, 50).get(), 0);
    }

    #[test]
    fn test_from_offset_zero_radius_is_rest() {
        assert_eq!(AxisValue::from_offset(0, 0), AxisValue::REST);
        assert_eq!(AxisValue::from_offset(40, 0), AxisValue::REST);
    }

    proptest! {
        #[test]
        fn prop_from_offset_center_is_rest(radius in 1i32..=100_000) {
            prop_assert_eq!(AxisValue::from_offset(0, radius).get(), 127);
        }

        #[test]
        fn prop_from_offset_monotonic(
            a in -1000i32..=1000,
            b in -1000i32..=1000,
            radius in 1i32..=500,
        ) {
            prop_assume!(a <= b);
            prop_assert!(
                AxisValue::from_offset(a, radius) <= AxisValue::from_offset(b, radius)
            );
        }
    }
}
