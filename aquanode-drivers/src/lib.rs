//! Device drivers for AquaNode sensor boards
//!
//! Built on `embedded-hal` 1.0 so the same code runs on the STM32 HAL and
//! against test doubles. Every driver implements the matching port from
//! `aquanode_core::ports`, which is how the transmission cycle reaches it.
//!
//! - [`Amg8833`]: 8x8 Grid-EYE thermal camera over I2C
//! - [`OneWire`]: bit-banged one-wire master on an open-drain pin
//! - [`Ds18b20`]: water-temperature probe on a [`OneWire`] bus
//!
//! Mandated settling and conversion delays go through an injected
//! [`DelayNs`](embedded_hal::delay::DelayNs), never a busy loop of our own.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod amg8833;
pub mod ds18b20;
pub mod onewire;

#[cfg(test)]
mod mock;

pub use amg8833::{Amg8833, Amg8833Error};
pub use ds18b20::{Ds18b20, Ds18b20Error};
pub use onewire::OneWire;
