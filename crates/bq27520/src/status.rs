//! CONTROL_STATUS decoding.

use crate::register::control_status;

/// Decoded CONTROL_STATUS word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlStatus {
    /// Raw 16-bit status word.
    pub raw: u16,
    /// Gauge is in FULL ACCESS SEALED state.
    pub full_access_sealed: bool,
    /// Gauge is in SEALED state.
    pub sealed: bool,
    /// A valid data flash checksum has been generated.
    pub checksum_valid: bool,
    /// Coulomb counter calibration is running.
    pub cc_calibrating: bool,
    /// Board calibration is running.
    pub board_calibrating: bool,
    /// Initialization has completed.
    pub init_complete: bool,
    /// HIBERNATE has been requested.
    pub hibernate: bool,
    /// Gauge is in SLEEP mode.
    pub sleep: bool,
}

impl ControlStatus {
    pub(crate) const fn from_word(raw: u16) -> Self {
        Self {
            raw,
            full_access_sealed: (raw & control_status::FAS) != 0,
            sealed: (raw & control_status::SS) != 0,
            checksum_valid: (raw & control_status::CSV) != 0,
            cc_calibrating: (raw & control_status::CCA) != 0,
            board_calibrating: (raw & control_status::BCA) != 0,
            init_complete: (raw & control_status::INITCOMP) != 0,
            hibernate: (raw & control_status::HIBERNATE) != 0,
            sleep: (raw & control_status::SLEEP) != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sealed_and_init_bits() {
        let status = ControlStatus::from_word(0x2080);
        assert!(status.sealed);
        assert!(status.init_complete);
        assert!(!status.full_access_sealed);
        assert!(!status.checksum_valid);
    }

    #[test]
    fn zero_word_has_no_flags() {
        assert_eq!(ControlStatus::from_word(0), ControlStatus::default());
    }
}
