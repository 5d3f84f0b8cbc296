//! Signal conditioning and uplink encoding for AquaNode water-quality nodes
//!
//! Turns raw ADC counts, I2C register blocks and one-wire scratchpads into
//! calibrated pH, TDS, temperature and thermal-image statistics, and packs
//! them into a bounded LoRaWAN payload whose shape depends on the radio
//! region.
//!
//! Key constraints:
//! - Runs on an STM32WL-class MCU next to the LoRaWAN stack
//! - No heap allocation; fixed-size buffers only
//! - Single cooperative execution context, no interior locking
//!
//! ```rust
//! use aquanode_core::adc::{MultiChannelAdc, ScanResult, SharedScan};
//! use aquanode_core::time::FixedTime;
//! use aquanode_core::{PhSensor, SensorResult, TdsSensor, WaterQuality};
//!
//! struct Board;
//! impl MultiChannelAdc for Board {
//!     fn scan(&mut self) -> SensorResult<ScanResult> {
//!         Ok([400, 0, 2048, 0])
//!     }
//! }
//!
//! let clock = FixedTime::new(0);
//! let mut adc = SharedScan::new(Board, &clock);
//!
//! let ph = PhSensor::default().read(&mut adc, 25.0)?;
//! let tds = TdsSensor::default().read(&mut adc, 25.0)?;
//!
//! assert!(ph.is_valid);
//! assert_eq!(tds.quality, WaterQuality::Excellent);
//! # Ok::<(), aquanode_core::SensorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod adc;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod errors;
pub mod node;
pub mod payload;
pub mod ports;
pub mod sensors;
pub mod thermal;
pub mod time;

// Public API
pub use adc::{ChannelSampler, MultiChannelAdc, SharedScan};
pub use calibration::{PhCalibration, ReferencePoint, TdsCalibration};
pub use config::{GeoPosition, NodeConfig};
pub use errors::{
    CalibrationError, CalibrationResult, ConfigError, ConfigResult, EncodeError, EncodeResult,
    SensorError, SensorResult,
};
pub use node::{CycleReadings, CycleReport, Node, NodeParts, TxTimer};
pub use payload::{EncodedPayload, PayloadEncoder, PayloadInputs, Region};
pub use ports::{EnvironmentSensor, Radio, SendOutcome, ThermalCamera, WaterTemperatureProbe};
pub use sensors::{
    EnvironmentReading, PhClass, PhReading, PhSensor, TdsReading, TdsSensor, WaterQuality,
};
pub use thermal::{ThermalFrame, ThermalStats};
pub use time::{TimeSource, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
