//! Integer scaling from raw register units to [`SensorValue`].

use super::SensorValue;

/// 0 deg C in milli-kelvin.
const ZERO_CELSIUS_MILLI_KELVIN: i64 = 273_150;

/// Converts millivolts to volts.
pub const fn voltage_value(raw_mv: u16) -> SensorValue {
    milli_value(raw_mv as i32)
}

/// Converts signed milliamps to amps.
pub const fn current_value(raw_ma: i16) -> SensorValue {
    milli_value(raw_ma as i32)
}

/// Converts milliamp-hours to amp-hours.
pub const fn capacity_value(raw_mah: u16) -> SensorValue {
    milli_value(raw_mah as i32)
}

/// Converts 0.1 K to degrees Celsius.
pub const fn temperature_value(raw_deci_kelvin: u16) -> SensorValue {
    let milli_kelvin = raw_deci_kelvin as i64 * 100;
    SensorValue::from_micro((milli_kelvin - ZERO_CELSIUS_MILLI_KELVIN) * 1_000)
}

/// Passes a percentage through unscaled.
pub const fn percent_value(raw_percent: u16) -> SensorValue {
    SensorValue::new(raw_percent as i32, 0)
}

const fn milli_value(milli: i32) -> SensorValue {
    SensorValue::new(milli / 1000, (milli % 1000) * 1000)
}
