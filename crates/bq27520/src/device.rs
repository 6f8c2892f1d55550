//! Device core operations for the bq27520.

use embedded_hal_async::delay::DelayNs;

use crate::config::{ConfigureMode, GaugeConfig, LazyConfigure};
use crate::data::{Channel, SensorValue, Telemetry};
use crate::engine::{ConfigEngine, EngineState};
use crate::error::Error;
use crate::interface::Interface;
use crate::register::{control, device_type};
use crate::status::ControlStatus;
use crate::transport::Transport;

pub(crate) struct DeviceCore<I> {
    transport: Transport<I>,
    config: GaugeConfig,
    telemetry: Telemetry,
    lazy: LazyConfigure,
    engine_state: EngineState,
    verified: bool,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) fn new(interface: I, config: GaugeConfig) -> Self {
        Self {
            transport: Transport::new(interface),
            config,
            telemetry: Telemetry::default(),
            lazy: LazyConfigure::NotStarted,
            engine_state: EngineState::Idle,
            verified: false,
        }
    }

    pub(crate) const fn config(&self) -> GaugeConfig {
        self.config
    }

    pub(crate) const fn telemetry(&self) -> Telemetry {
        self.telemetry
    }

    pub(crate) const fn lazy_state(&self) -> LazyConfigure {
        self.lazy
    }

    pub(crate) const fn engine_state(&self) -> EngineState {
        self.engine_state
    }

    pub(crate) async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.verify_device(delay).await?;
        match self.config.mode {
            ConfigureMode::AtInit => self.configure(delay).await,
            ConfigureMode::OnFirstFetch => {
                debug!("calibration deferred to first fetch");
                Ok(())
            }
        }
    }

    pub(crate) async fn device_type<D: DelayNs>(&mut self, delay: &mut D) -> Result<u16, Error> {
        self.transport
            .read_control(delay, control::DEVICE_TYPE)
            .await
    }

    pub(crate) async fn verify_device<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.verified = false;
        let id = self.device_type(delay).await?;
        if id != device_type::EXPECTED {
            error!(
                "unexpected device type {:#x}, expected {:#x}",
                id,
                device_type::EXPECTED
            );
            return Err(Error::WrongDevice);
        }
        self.verified = true;
        Ok(())
    }

    pub(crate) async fn firmware_version<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<u16, Error> {
        self.transport.read_control(delay, control::FW_VERSION).await
    }

    pub(crate) async fn control_status<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<ControlStatus, Error> {
        let raw = self
            .transport
            .read_control(delay, control::CONTROL_STATUS)
            .await?;
        Ok(ControlStatus::from_word(raw))
    }

    /// Runs the calibration sequence and marks the one-shot flag.
    ///
    /// Refuses with [`Error::WrongDevice`], without touching the bus, until
    /// the device type has been verified.
    pub(crate) async fn configure<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        if !self.verified {
            warn!("calibration refused: device type not verified");
            return Err(Error::WrongDevice);
        }
        let mut engine = ConfigEngine::new(&mut self.transport, self.config);
        let result = engine.run(delay).await;
        self.engine_state = engine.state();
        self.lazy.record(result.is_ok());
        result
    }

    /// Fetches one channel (or all of them) into the telemetry cache.
    ///
    /// With [`ConfigureMode::OnFirstFetch`] the first call runs calibration
    /// once and returns its error, if any; later calls never retry it. An
    /// unverified device fails every fetch with [`Error::WrongDevice`].
    pub(crate) async fn sample_fetch<D: DelayNs>(
        &mut self,
        delay: &mut D,
        channel: Channel,
    ) -> Result<(), Error> {
        if self.config.mode == ConfigureMode::OnFirstFetch && self.lazy.should_run() {
            self.configure(delay).await?;
        }

        match channel {
            Channel::All => {
                for reading in Channel::READINGS {
                    self.fetch_one(reading).await?;
                }
                Ok(())
            }
            single => self.fetch_one(single).await,
        }
    }

    pub(crate) fn channel_get(&self, channel: Channel) -> Result<SensorValue, Error> {
        self.telemetry
            .value(channel)
            .ok_or(Error::UnsupportedChannel)
    }

    pub(crate) fn release(self) -> I {
        self.transport.release()
    }

    async fn fetch_one(&mut self, channel: Channel) -> Result<(), Error> {
        let command = channel.command().ok_or(Error::UnsupportedChannel)?;
        let raw = self.transport.read_command16(command.addr()).await?;
        trace!("fetched {:?}: {:#x}", channel, raw);
        self.telemetry.store(channel, raw);
        Ok(())
    }
}
