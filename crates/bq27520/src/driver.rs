//! bq27520 driver implementation.
//!
//! Thin public facade over the device core. Every bus operation takes the
//! caller's delay provider; the driver owns no timer.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::config::{GaugeConfig, LazyConfigure};
use crate::data::{Channel, SensorValue, Telemetry};
use crate::device::DeviceCore;
use crate::engine::EngineState;
use crate::error::Error;
use crate::interface::Interface;
use crate::interface::{I2cConfig, I2cInterface};
use crate::status::ControlStatus;

/// bq27520 fuel gauge driver.
pub struct Bq27520<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the bq27520 driver.
pub type Bq27520I2c<I2C> = Bq27520<I2cInterface<I2C>>;

impl<I2C> Bq27520<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver at the factory address.
    pub fn new_i2c(i2c: I2C, config: GaugeConfig) -> Self {
        Self::with_i2c_config(i2c, config, I2cConfig::default())
    }

    /// Creates a new I2C-based driver with a custom interface configuration.
    pub fn with_i2c_config(i2c: I2C, config: GaugeConfig, i2c_config: I2cConfig) -> Self {
        let interface = I2cInterface::new(i2c, i2c_config.address);
        Self::new(interface, config)
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<I> Bq27520<I>
where
    I: Interface,
{
    /// Creates a driver over an already constructed interface.
    pub fn new(interface: I, config: GaugeConfig) -> Self {
        Self {
            core: DeviceCore::new(interface, config),
        }
    }

    /// Returns the calibration configuration.
    pub const fn config(&self) -> GaugeConfig {
        self.core.config()
    }

    /// Returns the raw readings from the last successful fetches.
    pub const fn telemetry(&self) -> Telemetry {
        self.core.telemetry()
    }

    /// Returns whether calibration has been attempted.
    pub const fn lazy_state(&self) -> LazyConfigure {
        self.core.lazy_state()
    }

    /// Returns the step the last calibration run reached.
    pub const fn engine_state(&self) -> EngineState {
        self.core.engine_state()
    }

    /// Verifies the device type and, in [`ConfigureMode::AtInit`](crate::ConfigureMode::AtInit)
    /// mode, applies the calibration.
    ///
    /// A wrong device type fails with [`Error::WrongDevice`] before any
    /// data-flash access.
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.init(delay).await
    }

    /// Reads the DEVICE_TYPE control word.
    pub async fn device_type<D: DelayNs>(&mut self, delay: &mut D) -> Result<u16, Error> {
        self.core.device_type(delay).await
    }

    /// Reads the FW_VERSION control word.
    pub async fn firmware_version<D: DelayNs>(&mut self, delay: &mut D) -> Result<u16, Error> {
        self.core.firmware_version(delay).await
    }

    /// Reads and decodes CONTROL_STATUS.
    pub async fn control_status<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<ControlStatus, Error> {
        self.core.control_status(delay).await
    }

    /// Runs the data-flash calibration sequence now.
    ///
    /// Fails with [`Error::WrongDevice`] until [`init`](Self::init) has
    /// verified the device type. Once started, the gauge is resealed whether
    /// or not the sequence succeeds.
    pub async fn configure<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.configure(delay).await
    }

    /// Refreshes one channel, or every channel with [`Channel::All`].
    ///
    /// In [`ConfigureMode::OnFirstFetch`](crate::ConfigureMode::OnFirstFetch)
    /// mode the first call also runs the calibration and reports its failure.
    /// Calibration is never retried after that.
    pub async fn sample_fetch<D: DelayNs>(
        &mut self,
        delay: &mut D,
        channel: Channel,
    ) -> Result<(), Error> {
        self.core.sample_fetch(delay, channel).await
    }

    /// Returns the cached reading for `channel` in physical units.
    ///
    /// Fails with [`Error::UnsupportedChannel`] for [`Channel::All`] or a
    /// channel that has not been fetched yet.
    pub fn channel_get(&self, channel: Channel) -> Result<SensorValue, Error> {
        self.core.channel_get(channel)
    }

    /// Releases the interface, consuming the driver.
    pub fn release_interface(self) -> I {
        self.core.release()
    }
}
