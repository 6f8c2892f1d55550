//! Interface abstraction for register I/O.

pub(crate) mod address;
pub(crate) mod i2c;

pub use address::Bq27520Address;
pub use i2c::{I2cConfig, I2cInterface};

use crate::error::Error;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Minimal async register I/O for the device core.
///
/// Every call is one blocking bus round trip; implementations never retry.
#[allow(async_fn_in_trait)]
pub trait Interface: sealed::Sealed {
    /// Reads `buffer.len()` bytes starting at `reg`.
    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error>;
    /// Writes a single byte to `reg`.
    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;
}
