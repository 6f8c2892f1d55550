//! Fixed-point conversion helpers.

use super::{Channel, SensorValue, Telemetry};

/// Fixed-point number type used for telemetry conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Converts a split reading into a fixed-point number.
pub fn sensor_value_to_fixed(value: SensorValue) -> Fixed {
    Fixed::from_num(value.val1) + Fixed::from_num(value.val2) / Fixed::from_num(1_000_000)
}

/// Converts the cached reading for `channel` into a fixed-point number.
pub fn telemetry_fixed(telemetry: &Telemetry, channel: Channel) -> Option<Fixed> {
    telemetry.value(channel).map(sensor_value_to_fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_convert_exactly() {
        let value = SensorValue::new(3, 0);
        assert_eq!(sensor_value_to_fixed(value), Fixed::from_num(3));
    }

    #[test]
    fn half_values_convert_exactly() {
        let value = SensorValue::new(-1, -500_000);
        assert_eq!(sensor_value_to_fixed(value), Fixed::from_num(-1.5));
    }

    #[test]
    fn missing_reading_has_no_fixed_value() {
        let telemetry = Telemetry::default();
        assert_eq!(telemetry_fixed(&telemetry, Channel::Voltage), None);
    }
}
