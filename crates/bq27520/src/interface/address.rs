//! I2C address definitions for the bq27520.

/// bq27520 I2C addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bq27520Address {
    /// Factory address: 0x55.
    Default,
}

impl Bq27520Address {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Default => 0x55,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        assert_eq!(Bq27520Address::Default.addr(), 0x55);
    }
}
