//! Async `#![no_std]` driver for the
//! [bq27520](https://www.ti.com/product/BQ27520-G4) single-cell battery fuel
//! gauge from Texas Instruments.
//!
//! Besides reading telemetry, the driver can calibrate the gauge for a
//! specific cell: it unseals the gauge, rewrites Design Capacity, Terminate
//! Voltage and Final Voltage in data flash, commits each block checksum,
//! soft-resets the gauge and seals it again.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_bq27520::{Bq27520I2c, Channel, GaugeConfig};
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::i2c::I2c;
//! #
//! # async fn example<I2C: I2c, D: DelayNs>(i2c: I2C, delay: &mut D) -> Result<(), ph_bq27520::Error> {
//! let config = GaugeConfig::new(1500, 3000);
//! let mut gauge: Bq27520I2c<I2C> = Bq27520I2c::new_i2c(i2c, config);
//! gauge.init(delay).await?;
//!
//! gauge.sample_fetch(delay, Channel::All).await?;
//! let volts = gauge.channel_get(Channel::Voltage)?;
//! # let _ = volts;
//! # Ok(())
//! # }
//! ```
//!
//! # Deferred calibration
//!
//! With [`ConfigureMode::OnFirstFetch`] `init` only checks the device type and
//! the calibration runs on the first [`Bq27520::sample_fetch`]. It is attempted
//! exactly once: a failure is reported by that fetch and later fetches only
//! read telemetry.
//!
//! # Units
//!
//! [`Bq27520::channel_get`] returns a [`SensorValue`] split into an integer
//! part and millionths: volts, amps, amp-hours, degrees C or percent. The raw
//! register values are kept in [`Telemetry`].
//!
//! # Logging
//!
//! Enable either the `defmt` or the `log` feature to get diagnostics from the
//! calibration sequence. They are mutually exclusive.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature to convert readings into `I32F32` numbers.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

// Declared first: the logging macros are textually scoped.
mod fmt;

mod config;
mod data;
mod device;
mod driver;
mod engine;
mod error;
mod flash;
mod interface;
mod register;
mod status;
mod transport;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Bq27520Address;
pub use interface::Interface;
pub use interface::{I2cConfig, I2cInterface};

// Configuration
pub use config::{CalibrationField, ConfigureMode, GaugeConfig, LazyConfigure};

// Driver
pub use driver::{Bq27520, Bq27520I2c};
pub use engine::EngineState;
pub use error::Error;
pub use status::ControlStatus;

// Data types
pub use data::{Channel, SensorValue, Telemetry};
pub use data::{capacity_value, current_value, percent_value, temperature_value, voltage_value};

// Data flash
pub use flash::{
    BLOCK_LEN,
    DataFlashBlock,
    block_data_address,
    block_select,
    compute_checksum,
    split_be,
};

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{Fixed, sensor_value_to_fixed, telemetry_fixed};
