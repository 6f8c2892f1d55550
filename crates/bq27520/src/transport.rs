//! Register transport for the bq27520 command set.
//!
//! Owns no state beyond the interface itself. Every call is a bus round trip;
//! failures are reported as [`Error::Bus`] and never retried here.

use embedded_hal_async::delay::DelayNs;

use crate::error::Error;
use crate::interface::Interface;
use crate::register::{Command, extended};

/// Settle time between the control byte latches and after block reads.
pub(crate) const SETTLE_DELAY_NS: u32 = 5_000_000;

pub(crate) struct Transport<I> {
    interface: I,
}

impl<I> Transport<I>
where
    I: Interface,
{
    pub(crate) const fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Reads a 16-bit command register (little-endian on the wire).
    pub(crate) async fn read_command16(&mut self, addr: u8) -> Result<u16, Error> {
        let mut buffer = [0u8; 2];
        self.interface.read_regs(addr, &mut buffer).await?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Reads an 8-bit command register.
    pub(crate) async fn read_command8(&mut self, addr: u8) -> Result<u8, Error> {
        let mut buffer = [0u8; 1];
        self.interface.read_regs(addr, &mut buffer).await?;
        Ok(buffer[0])
    }

    /// Writes one byte to a command register.
    pub(crate) async fn write_command8(&mut self, addr: u8, value: u8) -> Result<(), Error> {
        self.interface.write_reg(addr, value).await
    }

    /// Writes one byte directly into the block-data window.
    pub(crate) async fn write_data8(&mut self, addr: u8, value: u8) -> Result<(), Error> {
        self.interface.write_reg(addr, value).await
    }

    /// Issues a control sub-command: low byte, settle, high byte.
    ///
    /// The gauge needs the delay between the two latches before it starts
    /// executing the sub-command.
    pub(crate) async fn write_control_subcommand<D: DelayNs>(
        &mut self,
        delay: &mut D,
        subcommand: u16,
    ) -> Result<(), Error> {
        let [low, high] = subcommand.to_le_bytes();
        self.interface
            .write_reg(Command::ControlLow.addr(), low)
            .await?;
        delay.delay_ns(SETTLE_DELAY_NS).await;
        self.interface
            .write_reg(Command::ControlHigh.addr(), high)
            .await
    }

    /// Issues a control sub-command and reads back its 16-bit response.
    pub(crate) async fn read_control<D: DelayNs>(
        &mut self,
        delay: &mut D,
        subcommand: u16,
    ) -> Result<u16, Error> {
        self.write_control_subcommand(delay, subcommand).await?;
        self.read_command16(Command::ControlLow.addr()).await
    }

    /// Reads `buffer.len()` bytes of block data starting at `block_select % 32`.
    pub(crate) async fn read_block<D: DelayNs>(
        &mut self,
        delay: &mut D,
        block_select: u8,
        buffer: &mut [u8],
    ) -> Result<(), Error> {
        let addr = extended::BLOCK_DATA_START + (block_select % 32);
        self.interface.read_regs(addr, buffer).await?;
        delay.delay_ns(SETTLE_DELAY_NS).await;
        Ok(())
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::testing::{MockDelay, MockInterface};

    #[test]
    fn read_command16_is_little_endian() {
        let interface = MockInterface::default()
            .with_reg(Command::Voltage.addr(), 0x34)
            .with_reg(Command::Voltage.addr() + 1, 0x12);
        let mut transport = Transport::new(interface);

        let value = block_on(transport.read_command16(Command::Voltage.addr())).expect("read");

        assert_eq!(value, 0x1234);
    }

    #[test]
    fn control_subcommand_writes_low_then_high_with_settle() {
        let mut transport = Transport::new(MockInterface::default());
        let mut delay = MockDelay::default();

        block_on(transport.write_control_subcommand(&mut delay, 0x3672)).expect("control");

        assert_eq!(transport.interface().writes(), [(0x00, 0x72), (0x01, 0x36)]);
        assert_eq!(delay.durations(), [SETTLE_DELAY_NS]);
    }

    #[test]
    fn control_subcommand_skips_high_byte_when_low_fails() {
        let interface = MockInterface::default().fail_write(Command::ControlLow.addr(), 1);
        let mut transport = Transport::new(interface);
        let mut delay = MockDelay::default();

        let result = block_on(transport.write_control_subcommand(&mut delay, 0x0041));

        assert_eq!(result, Err(Error::Bus));
        assert!(transport.interface().writes().is_empty());
        assert!(delay.durations().is_empty());
    }

    #[test]
    fn read_block_offsets_by_block_select_and_settles() {
        let mut interface = MockInterface::default();
        interface.set_reg(extended::BLOCK_DATA_START + 1, 0xAA);
        interface.set_reg(extended::BLOCK_DATA_START + 2, 0xBB);
        let mut transport = Transport::new(interface);
        let mut delay = MockDelay::default();

        let mut buffer = [0u8; 2];
        block_on(transport.read_block(&mut delay, 33, &mut buffer)).expect("block");

        assert_eq!(buffer, [0xAA, 0xBB]);
        assert_eq!(delay.durations(), [SETTLE_DELAY_NS]);
    }

    #[test]
    fn read_control_returns_device_response() {
        let interface = MockInterface::default().with_control_response(0x0001, 0x0520);
        let mut transport = Transport::new(interface);
        let mut delay = MockDelay::default();

        let id = block_on(transport.read_control(&mut delay, 0x0001)).expect("device type");

        assert_eq!(id, 0x0520);
    }
}
