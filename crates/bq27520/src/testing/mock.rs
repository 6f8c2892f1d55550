extern crate std;

use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::error::Error;
use crate::interface::{Interface, sealed};
use crate::register::Command;

#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    writes: Vec<(u8, u8)>,
    reads: Vec<(u8, usize)>,
    control_responses: Vec<(u16, u16)>,
    pending_control_low: u8,
    write_failures: Vec<(u8, usize)>,
    write_counts: [usize; 256],
    read_failures: Vec<u8>,
    pinned: Vec<(u8, u8)>,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            writes: Vec::new(),
            reads: Vec::new(),
            control_responses: Vec::new(),
            pending_control_low: 0,
            write_failures: Vec::new(),
            write_counts: [0usize; 256],
            read_failures: Vec::new(),
            pinned: Vec::new(),
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    /// Stores a little-endian word at `reg`/`reg + 1`.
    pub(crate) fn with_reg16(mut self, reg: u8, value: u16) -> Self {
        let [low, high] = value.to_le_bytes();
        self.set_reg(reg, low);
        self.set_reg(reg.wrapping_add(1), high);
        self
    }

    /// Latches `response` into the control register once `subcommand` is written.
    pub(crate) fn with_control_response(mut self, subcommand: u16, response: u16) -> Self {
        self.control_responses.push((subcommand, response));
        self
    }

    /// Fails the `occurrence`-th (1-based) write to `reg`.
    pub(crate) fn fail_write(mut self, reg: u8, occurrence: usize) -> Self {
        self.write_failures.push((reg, occurrence));
        self
    }

    /// Fails every read starting at `reg`.
    pub(crate) fn fail_reads(mut self, reg: u8) -> Self {
        self.read_failures.push(reg);
        self
    }

    /// Keeps `reg` reading back `value` no matter what is written to it.
    pub(crate) fn pin_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self.pinned.push((reg, value));
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    /// Successful writes, in bus order.
    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Successful reads as `(start register, length)`, in bus order.
    pub(crate) fn reads(&self) -> &[(u8, usize)] {
        &self.reads
    }

    fn latch_control(&mut self, high: u8) {
        let subcommand = u16::from_le_bytes([self.pending_control_low, high]);
        if let Some(&(_, response)) = self
            .control_responses
            .iter()
            .find(|(candidate, _)| *candidate == subcommand)
        {
            let [low, high] = response.to_le_bytes();
            self.regs[Command::ControlLow.addr() as usize] = low;
            self.regs[Command::ControlHigh.addr() as usize] = high;
        }
    }
}

impl Interface for MockInterface {
    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if self.read_failures.contains(&reg) {
            return Err(Error::Bus);
        }
        for (offset, slot) in buffer.iter_mut().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            *slot = self.regs[addr as usize];
        }
        self.reads.push((reg, buffer.len()));
        Ok(())
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.write_counts[reg as usize] += 1;
        let count = self.write_counts[reg as usize];
        if self
            .write_failures
            .iter()
            .any(|&(failing, occurrence)| failing == reg && occurrence == count)
        {
            return Err(Error::Bus);
        }

        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        if let Some(&(_, pinned)) = self.pinned.iter().find(|(candidate, _)| *candidate == reg) {
            self.regs[reg as usize] = pinned;
        }

        if reg == Command::ControlLow.addr() {
            self.pending_control_low = value;
        } else if reg == Command::ControlHigh.addr() {
            self.latch_control(value);
        }
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    history: Vec<u32>,
}

impl MockDelay {
    /// Every requested duration in nanoseconds, in call order.
    pub(crate) fn durations(&self) -> &[u32] {
        &self.history
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.history.push(ns);
    }
}
