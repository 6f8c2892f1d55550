//! Data-flash fields rewritten by the calibration sequence.

use crate::flash::{block_data_address, block_select};
use crate::register::subclass;

/// Calibration fields, in the order the engine programs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationField {
    /// Design Capacity (Data subclass, offset 10).
    DesignCapacity,
    /// Terminate Voltage (IT Cfg subclass, offset 55).
    TerminateVoltage,
    /// Final Voltage (Discharge subclass, offset 14).
    FinalVoltage,
}

impl CalibrationField {
    /// Programming order.
    pub const ALL: [Self; 3] = [
        Self::DesignCapacity,
        Self::TerminateVoltage,
        Self::FinalVoltage,
    ];

    /// Returns the data-flash subclass id.
    pub const fn subclass(self) -> u8 {
        match self {
            Self::DesignCapacity => subclass::DATA,
            Self::TerminateVoltage => subclass::IT_CFG,
            Self::FinalVoltage => subclass::DISCHARGE,
        }
    }

    /// Returns the byte offset within the subclass.
    pub const fn offset(self) -> u8 {
        match self {
            Self::DesignCapacity => 10,
            Self::TerminateVoltage => 55,
            Self::FinalVoltage => 14,
        }
    }

    /// Returns the block index written to DataFlashBlock().
    pub const fn block(self) -> u8 {
        block_select(self.offset())
    }

    /// Returns the block-data register receiving the MSB; the LSB goes to the next one.
    pub const fn data_address(self) -> u8 {
        block_data_address(self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_to_expected_subclasses() {
        assert_eq!(CalibrationField::DesignCapacity.subclass(), 0x30);
        assert_eq!(CalibrationField::TerminateVoltage.subclass(), 0x50);
        assert_eq!(CalibrationField::FinalVoltage.subclass(), 0x31);
    }

    #[test]
    fn only_terminate_voltage_lives_in_block_one() {
        assert_eq!(CalibrationField::DesignCapacity.block(), 0);
        assert_eq!(CalibrationField::TerminateVoltage.block(), 1);
        assert_eq!(CalibrationField::FinalVoltage.block(), 0);
    }

    #[test]
    fn data_addresses_are_offset_mod_32() {
        assert_eq!(CalibrationField::DesignCapacity.data_address(), 0x4A);
        assert_eq!(CalibrationField::TerminateVoltage.data_address(), 0x57);
        assert_eq!(CalibrationField::FinalVoltage.data_address(), 0x4E);
    }
}
