//! Calibration configuration for the bq27520.

pub(crate) mod field;
pub(crate) mod lazy;

pub use field::CalibrationField;
pub use lazy::LazyConfigure;

/// When the calibration sequence runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigureMode {
    /// Run calibration from `init`, right after the device type check.
    AtInit,
    /// Defer calibration to the first telemetry fetch. Attempted exactly once.
    OnFirstFetch,
}

/// Immutable calibration target for the gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GaugeConfig {
    /// Design capacity in mAh.
    pub design_capacity_mah: u16,
    /// Terminate voltage in mV. Final voltage is programmed to the same value.
    pub terminate_voltage_mv: u16,
    /// When the calibration sequence runs.
    pub mode: ConfigureMode,
    /// Read back the checksum register after each commit and compare.
    pub verify_checksum: bool,
}

impl GaugeConfig {
    /// Creates a configuration that calibrates at init without read-back.
    pub const fn new(design_capacity_mah: u16, terminate_voltage_mv: u16) -> Self {
        Self {
            design_capacity_mah,
            terminate_voltage_mv,
            mode: ConfigureMode::AtInit,
            verify_checksum: false,
        }
    }

    /// Sets when the calibration sequence runs.
    #[must_use]
    pub const fn with_mode(mut self, mode: ConfigureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables checksum read-back after each commit.
    #[must_use]
    pub const fn with_checksum_verify(mut self, enable: bool) -> Self {
        self.verify_checksum = enable;
        self
    }

    /// Returns the 16-bit value programmed for `field`.
    pub const fn value_for(self, field: CalibrationField) -> u16 {
        match field {
            CalibrationField::DesignCapacity => self.design_capacity_mah,
            CalibrationField::TerminateVoltage | CalibrationField::FinalVoltage => {
                self.terminate_voltage_mv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_voltage_follows_terminate_voltage() {
        let config = GaugeConfig::new(1500, 3000);
        assert_eq!(config.value_for(CalibrationField::DesignCapacity), 1500);
        assert_eq!(config.value_for(CalibrationField::TerminateVoltage), 3000);
        assert_eq!(config.value_for(CalibrationField::FinalVoltage), 3000);
    }

    #[test]
    fn builders_only_touch_their_field() {
        let config = GaugeConfig::new(1200, 3200)
            .with_mode(ConfigureMode::OnFirstFetch)
            .with_checksum_verify(true);
        assert_eq!(config.design_capacity_mah, 1200);
        assert_eq!(config.terminate_voltage_mv, 3200);
        assert_eq!(config.mode, ConfigureMode::OnFirstFetch);
        assert!(config.verify_checksum);
    }
}
