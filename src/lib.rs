//! SCD40 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the Sensirion SCD40
//! CO2, temperature and humidity sensor, built on top of the
//! [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Periodic measurement mode with the sensor's fixed 5 s cadence
//! - Absolute humidity derived from temperature and relative humidity
//! - Opt-in CRC-8 validation of received words
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for bus access
//! - [`OutputPin`] to enable the sensor's power rail
//! - [`DelayNs`] for the settle and measurement delays
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and emits
//!   driver logs
//!
//! # Example
//!
//! ```ignore
//! let mut scd40 = Scd40::new(i2c, AlwaysOn, delay);
//! scd40.initialize()?;
//! loop {
//!     let reading = scd40.get_sensing_information()?;
//!     scd40.wait();
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod checksum;
pub mod error;
pub mod power;
pub mod reading;
pub mod scd40;

pub use error::{Scd40Error, ShortFrame};
pub use power::AlwaysOn;
pub use reading::{RawMeasurement, Reading};
pub use scd40::{ADDRESS, Command, INIT_DELAY_MS, MEASUREMENT_INTERVAL_MS, Scd40};
