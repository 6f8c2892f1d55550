//! I2C interface adapter for the bq27520.

use embedded_hal_async::i2c::I2c;

use super::Bq27520Address;
use super::{Interface, sealed};
use crate::error::Error;

/// I2C interface configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    pub(crate) address: u8,
}

impl I2cConfig {
    /// Creates a new I2C configuration for the provided address.
    pub const fn new(address: u8) -> Self {
        Self { address }
    }

    /// Sets the I2C address.
    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Returns the configured 7-bit address.
    pub const fn address(self) -> u8 {
        self.address
    }
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::new(Bq27520Address::Default.addr())
    }
}

/// I2C register interface.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new I2C interface with the given bus and 7-bit address.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit I2C address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.i2c
            .write_read(self.address, &[reg], buffer)
            .await
            .map_err(|_| Error::Bus)
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let buffer = [reg, value];
        self.i2c
            .write(self.address, &buffer)
            .await
            .map_err(|_| Error::Bus)
    }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}
