//! Data-flash calibration sequence.
//!
//! Unseals the gauge, rewrites Design Capacity, Terminate Voltage and Final
//! Voltage one block at a time, commits each block checksum, soft-resets so
//! the gauge reloads flash, then seals it again. The sequence is strictly
//! ordered; the first bus failure aborts it. Whatever the outcome, the engine
//! issues the seal sub-command before returning.

use embedded_hal_async::delay::DelayNs;

use crate::config::{CalibrationField, GaugeConfig};
use crate::error::Error;
use crate::flash::{BLOCK_LEN, DataFlashBlock, split_be};
use crate::interface::Interface;
use crate::register::{control, extended};
use crate::transport::{SETTLE_DELAY_NS, Transport};

/// Time the gauge needs after a soft reset to reload data flash.
pub(crate) const RESET_DELAY_NS: u32 = 100_000_000;

/// Block select used for every checksum re-read.
const CHECKSUM_BLOCK_SELECT: u8 = 0;

/// Step of the calibration sequence.
///
/// After a failed run the engine stays in the step that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineState {
    /// No calibration run has started.
    Idle,
    /// Writing the two unseal key words.
    Unsealing,
    /// Unsealed; enabling block data flash control.
    Unsealed,
    /// Writing DataFlashClass() and DataFlashBlock() for a field.
    SelectingSubclass(CalibrationField),
    /// Writing the big-endian field value into the block window.
    WritingField(CalibrationField),
    /// Re-reading the block window and computing its checksum.
    RecomputingChecksum(CalibrationField),
    /// Writing (and optionally verifying) the block checksum.
    CommittingChecksum(CalibrationField),
    /// Soft reset issued, waiting for the gauge to reload.
    Resetting,
    /// Issuing the seal sub-command.
    Sealing,
    /// Calibration applied and gauge sealed.
    Sealed,
}

pub(crate) struct ConfigEngine<'a, I> {
    transport: &'a mut Transport<I>,
    config: GaugeConfig,
    state: EngineState,
}

impl<'a, I> ConfigEngine<'a, I>
where
    I: Interface,
{
    pub(crate) fn new(transport: &'a mut Transport<I>, config: GaugeConfig) -> Self {
        Self {
            transport,
            config,
            state: EngineState::Idle,
        }
    }

    pub(crate) const fn state(&self) -> EngineState {
        self.state
    }

    /// Runs the whole sequence. The seal sub-command is attempted on every path.
    pub(crate) async fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        if let Err(err) = self.calibrate(delay).await {
            warn!("calibration failed in {:?}: {:?}", self.state, err);
            if let Err(seal_err) = self
                .transport
                .write_control_subcommand(delay, control::SEALED)
                .await
            {
                error!("reseal after failed calibration failed: {:?}", seal_err);
            }
            return Err(err);
        }

        self.transition(EngineState::Sealing);
        self.transport
            .write_control_subcommand(delay, control::SEALED)
            .await?;
        self.transition(EngineState::Sealed);
        info!(
            "calibration applied: design capacity {} mAh, terminate voltage {} mV",
            self.config.design_capacity_mah,
            self.config.terminate_voltage_mv
        );
        Ok(())
    }

    async fn calibrate<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.transition(EngineState::Unsealing);
        self.transport
            .write_control_subcommand(delay, control::UNSEAL_KEY_0)
            .await?;
        self.transport
            .write_control_subcommand(delay, control::UNSEAL_KEY_1)
            .await?;

        self.transition(EngineState::Unsealed);
        self.transport
            .write_command8(extended::BLOCK_DATA_CONTROL, 0x00)
            .await?;

        for field in CalibrationField::ALL {
            self.write_field(delay, field).await?;
        }

        self.transition(EngineState::Resetting);
        self.transport
            .write_control_subcommand(delay, control::RESET)
            .await?;
        delay.delay_ns(RESET_DELAY_NS).await;
        Ok(())
    }

    async fn write_field<D: DelayNs>(
        &mut self,
        delay: &mut D,
        field: CalibrationField,
    ) -> Result<(), Error> {
        self.transition(EngineState::SelectingSubclass(field));
        self.transport
            .write_command8(extended::DATA_CLASS, field.subclass())
            .await?;
        self.transport
            .write_command8(extended::DATA_BLOCK, field.block())
            .await?;

        self.transition(EngineState::WritingField(field));
        let [msb, lsb] = split_be(self.config.value_for(field));
        let addr = field.data_address();
        self.transport.write_data8(addr, msb).await?;
        self.transport.write_data8(addr + 1, lsb).await?;

        self.transition(EngineState::RecomputingChecksum(field));
        let checksum = self.read_checksum_block(delay, field).await?.checksum();

        self.transition(EngineState::CommittingChecksum(field));
        self.transport
            .write_command8(extended::BLOCK_DATA_CHECKSUM, checksum)
            .await?;

        if self.config.verify_checksum {
            delay.delay_ns(SETTLE_DELAY_NS).await;
            let readback = self
                .transport
                .read_command8(extended::BLOCK_DATA_CHECKSUM)
                .await?;
            if readback != checksum {
                error!(
                    "checksum mismatch for {:?}: wrote {:#x}, read {:#x}",
                    field, checksum, readback
                );
                return Err(Error::ChecksumMismatch);
            }
        }
        Ok(())
    }

    /// Re-reads the window the checksum is computed over.
    ///
    /// The window is always read from the block 0 base, even for fields that
    /// were written through block 1; the returned block is labelled with the
    /// block actually read.
    async fn read_checksum_block<D: DelayNs>(
        &mut self,
        delay: &mut D,
        field: CalibrationField,
    ) -> Result<DataFlashBlock, Error> {
        let mut data = [0u8; BLOCK_LEN];
        self.transport
            .read_block(delay, CHECKSUM_BLOCK_SELECT, &mut data)
            .await?;
        Ok(DataFlashBlock::new(
            field.subclass(),
            CHECKSUM_BLOCK_SELECT,
            data,
        ))
    }

    fn transition(&mut self, next: EngineState) {
        debug!("calibration: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
