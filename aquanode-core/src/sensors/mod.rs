//! Sensor Readers
//!
//! ## Overview
//!
//! Each reader turns a raw transducer sample into a calibrated physical
//! quantity plus a validity flag:
//!
//! - **pH**: ADC counts → mV → pH, compensated towards neutral
//! - **TDS**: ADC counts → mV → conductivity → ppm, with a probe-presence
//!   heuristic and a water-quality class
//! - **Water temperature**: DS18B20 scratchpad → °C
//! - **Environment**: plain value type filled by the board's sensor port
//!
//! ## Validity
//!
//! A disconnected analog probe is not an error. The reader returns a reading
//! with `is_valid == false` and a safe default value, and the caller decides
//! whether to encode it. Bus failures, on the other hand, propagate as
//! `SensorError`.
//!
//! ```rust
//! use aquanode_core::sensors::{counts_to_millivolts, PhSensor};
//!
//! let ph = PhSensor::default();
//! let voltage = counts_to_millivolts(2048);
//! let value = ph.convert(voltage, 25.0);
//! assert!(value > 9.3 && value < 9.5);
//! ```

pub mod environment;
pub mod ph;
pub mod tds;
pub mod water_temperature;

pub use environment::EnvironmentReading;
pub use ph::{PhClass, PhReading, PhSensor};
pub use tds::{TdsReading, TdsSensor, WaterQuality};
pub use water_temperature::decode_scratchpad;

use crate::constants::adc::{ADC_RESOLUTION, ADC_VREF_MV};

/// Linear ADC scale: `counts * Vref / resolution`
#[inline]
pub fn counts_to_millivolts(counts: u16) -> f32 {
    counts as f32 * ADC_VREF_MV / ADC_RESOLUTION
}
