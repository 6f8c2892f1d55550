//! Telemetry channels and the cached readings behind them.

pub(crate) mod scale;
#[cfg(feature = "fixed")]
pub(crate) mod fixed;

pub use scale::{
    capacity_value,
    current_value,
    percent_value,
    temperature_value,
    voltage_value,
};

use crate::register::Command;

/// Telemetry channels exposed by the gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Every channel below; fetch only.
    All,
    /// Cell-pack voltage (V).
    Voltage,
    /// Average current (A), negative while discharging.
    AverageCurrent,
    /// Standby current (A).
    StandbyCurrent,
    /// Internal die temperature (deg C).
    InternalTemperature,
    /// State of charge (%).
    StateOfCharge,
    /// State of health (%).
    StateOfHealth,
    /// Full charge capacity (Ah).
    FullChargeCapacity,
    /// Remaining capacity (Ah).
    RemainingCapacity,
    /// Nominal available capacity (Ah).
    NominalAvailableCapacity,
    /// Full available capacity (Ah).
    FullAvailableCapacity,
}

impl Channel {
    /// Every single-register channel, in register order.
    pub const READINGS: [Self; 10] = [
        Self::Voltage,
        Self::NominalAvailableCapacity,
        Self::FullAvailableCapacity,
        Self::RemainingCapacity,
        Self::FullChargeCapacity,
        Self::AverageCurrent,
        Self::StandbyCurrent,
        Self::StateOfHealth,
        Self::StateOfCharge,
        Self::InternalTemperature,
    ];

    /// Returns the command register backing this channel.
    pub(crate) const fn command(self) -> Option<Command> {
        match self {
            Self::All => None,
            Self::Voltage => Some(Command::Voltage),
            Self::AverageCurrent => Some(Command::AverageCurrent),
            Self::StandbyCurrent => Some(Command::StandbyCurrent),
            Self::InternalTemperature => Some(Command::InternalTemperature),
            Self::StateOfCharge => Some(Command::StateOfCharge),
            Self::StateOfHealth => Some(Command::StateOfHealth),
            Self::FullChargeCapacity => Some(Command::FullChargeCapacity),
            Self::RemainingCapacity => Some(Command::RemainingCapacity),
            Self::NominalAvailableCapacity => Some(Command::NominalAvailableCapacity),
            Self::FullAvailableCapacity => Some(Command::FullAvailableCapacity),
        }
    }
}

/// Reading split into an integer part and a fractional part in millionths.
///
/// Both parts carry the sign of the reading, e.g. -1.5 is `{ val1: -1, val2: -500_000 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorValue {
    /// Integer part.
    pub val1: i32,
    /// Fractional part in millionths.
    pub val2: i32,
}

impl SensorValue {
    /// Creates a value from its integer and micro parts.
    pub const fn new(val1: i32, val2: i32) -> Self {
        Self { val1, val2 }
    }

    /// Splits a reading expressed in millionths.
    pub const fn from_micro(micro: i64) -> Self {
        Self {
            val1: (micro / 1_000_000) as i32,
            val2: (micro % 1_000_000) as i32,
        }
    }

    /// Returns the reading in millionths.
    pub const fn as_micro(self) -> i64 {
        self.val1 as i64 * 1_000_000 + self.val2 as i64
    }
}

/// Raw register values from the last successful fetch, one per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Telemetry {
    /// Voltage in mV.
    pub voltage: Option<u16>,
    /// Average current in mA.
    pub average_current: Option<i16>,
    /// Standby current in mA.
    pub standby_current: Option<i16>,
    /// Internal temperature in 0.1 K.
    pub internal_temperature: Option<u16>,
    /// State of charge in percent.
    pub state_of_charge: Option<u16>,
    /// State of health in percent.
    pub state_of_health: Option<u16>,
    /// Full charge capacity in mAh.
    pub full_charge_capacity: Option<u16>,
    /// Remaining capacity in mAh.
    pub remaining_capacity: Option<u16>,
    /// Nominal available capacity in mAh.
    pub nominal_available_capacity: Option<u16>,
    /// Full available capacity in mAh.
    pub full_available_capacity: Option<u16>,
}

impl Telemetry {
    /// Stores a raw register value for `channel`. `All` is ignored.
    pub(crate) fn store(&mut self, channel: Channel, raw: u16) {
        match channel {
            Channel::All => {}
            Channel::Voltage => self.voltage = Some(raw),
            Channel::AverageCurrent => self.average_current = Some(raw as i16),
            Channel::StandbyCurrent => self.standby_current = Some(raw as i16),
            Channel::InternalTemperature => self.internal_temperature = Some(raw),
            Channel::StateOfCharge => self.state_of_charge = Some(raw),
            Channel::StateOfHealth => self.state_of_health = Some(raw),
            Channel::FullChargeCapacity => self.full_charge_capacity = Some(raw),
            Channel::RemainingCapacity => self.remaining_capacity = Some(raw),
            Channel::NominalAvailableCapacity => self.nominal_available_capacity = Some(raw),
            Channel::FullAvailableCapacity => self.full_available_capacity = Some(raw),
        }
    }

    /// Converts the cached reading for `channel`, if one was fetched.
    pub fn value(&self, channel: Channel) -> Option<SensorValue> {
        match channel {
            Channel::All => None,
            Channel::Voltage => self.voltage.map(voltage_value),
            Channel::AverageCurrent => self.average_current.map(current_value),
            Channel::StandbyCurrent => self.standby_current.map(current_value),
            Channel::InternalTemperature => self.internal_temperature.map(temperature_value),
            Channel::StateOfCharge => self.state_of_charge.map(percent_value),
            Channel::StateOfHealth => self.state_of_health.map(percent_value),
            Channel::FullChargeCapacity => self.full_charge_capacity.map(capacity_value),
            Channel::RemainingCapacity => self.remaining_capacity.map(capacity_value),
            Channel::NominalAvailableCapacity => {
                self.nominal_available_capacity.map(capacity_value)
            }
            Channel::FullAvailableCapacity => self.full_available_capacity.map(capacity_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reading_has_a_register() {
        for channel in Channel::READINGS {
            assert!(channel.command().is_some());
        }
        assert_eq!(Channel::All.command(), None);
    }

    #[test]
    fn value_is_none_before_store() {
        let telemetry = Telemetry::default();
        assert_eq!(telemetry.value(Channel::Voltage), None);
    }

    #[test]
    fn stored_current_is_signed() {
        let mut telemetry = Telemetry::default();
        telemetry.store(Channel::AverageCurrent, (-250i16) as u16);
        assert_eq!(telemetry.average_current, Some(-250));
        assert_eq!(
            telemetry.value(Channel::AverageCurrent),
            Some(SensorValue::new(0, -250_000))
        );
    }

    #[test]
    fn get_all_is_not_a_reading() {
        let mut telemetry = Telemetry::default();
        telemetry.store(Channel::All, 42);
        assert_eq!(telemetry, Telemetry::default());
        assert_eq!(telemetry.value(Channel::All), None);
    }

    #[test]
    fn micro_round_trip_keeps_sign() {
        let value = SensorValue::from_micro(-3_150_000);
        assert_eq!(value, SensorValue::new(-3, -150_000));
        assert_eq!(value.as_micro(), -3_150_000);
    }
}
