//! Error type for the bq27520 driver.

/// Error type for bq27520 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C read or write failed).
    Bus,
    /// The device type reported by the gauge is not a bq27520.
    WrongDevice,
    /// The checksum read back after a data-flash commit does not match the one written.
    ChecksumMismatch,
    /// The requested telemetry channel is not supported or has not been fetched.
    UnsupportedChannel,
}

impl Error {
    /// Returns `true` for bus-level failures.
    pub const fn is_transport(self) -> bool {
        matches!(self, Self::Bus)
    }

    /// Returns `true` when the gauge answered but not the way the protocol expects.
    pub const fn is_protocol(self) -> bool {
        matches!(self, Self::WrongDevice | Self::ChecksumMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_is_disjoint() {
        assert!(Error::Bus.is_transport());
        assert!(!Error::Bus.is_protocol());
        assert!(Error::WrongDevice.is_protocol());
        assert!(Error::ChecksumMismatch.is_protocol());
        assert!(!Error::UnsupportedChannel.is_transport());
        assert!(!Error::UnsupportedChannel.is_protocol());
    }
}
