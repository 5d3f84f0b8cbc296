//! Error Types for the Sensor and Payload Pipeline
//!
//! ## Design Philosophy
//!
//! The node runs one cooperative loop on a small MCU, so errors follow the
//! same rules as everything else on the hot path:
//!
//! 1. **Small Size**: variants carry a handful of scalars at most.
//! 2. **No Heap Allocation**: messages are `&'static str`.
//! 3. **Copy Semantics**: errors are returned by value and logged, never boxed.
//!
//! ## Error Categories
//!
//! ### Bus / Transport
//! `SensorError::Bus` and `SensorError::NotPresent` come from ADC, I2C and
//! one-wire collaborators. They are surfaced to the caller unchanged. Nothing
//! in this crate retries a transaction.
//!
//! ### Out-of-range / Disconnected
//! Disconnected pH and TDS probes are *not* errors. They produce a reading with
//! `is_valid == false` and a safe default value. Only physically impossible
//! values from digital sensors (a DS18B20 reporting 300 °C) become
//! `SensorError::OutOfRange`.
//!
//! ### Calibration Input
//! `CalibrationError` rejects degenerate calibration requests synchronously.
//! The previous profile is left untouched. Profiles built by hand or loaded
//! from storage go through the same checks before a reader accepts them.
//!
//! ### Encoding Capacity
//! `EncodeError` reports a destination buffer that cannot hold even the
//! smallest encoding, or an entry that would overflow the payload bound.
//!
//! ### Configuration
//! `ConfigError` is returned by `NodeConfig::validate` before the node
//! starts its cycle.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use aquanode_core::{CalibrationError, PhSensor};
//!
//! let mut ph = PhSensor::default();
//! match ph.calibrate_two_point(1810.0, 1800.0) {
//!     Ok(()) => {}
//!     Err(CalibrationError::InsufficientSeparation { .. }) => {
//!         // Buffers too close together, keep the old profile
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for sensor reads
pub type SensorResult<T> = Result<T, SensorError>;

/// Result type for calibration requests
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures while acquiring a reading
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Bus transaction failed (ADC conversion, I2C transfer, one-wire slot)
    #[error("Bus transaction failed: {source_name}")]
    Bus {
        /// Which collaborator failed
        source_name: &'static str,
    },

    /// Device did not answer its presence check
    #[error("Sensor not present: {sensor}")]
    NotPresent {
        /// Sensor that failed to respond
        sensor: &'static str,
    },

    /// Decoded value outside the sensor's physical range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Decoded value
        value: f32,
        /// Lowest value the sensor can report
        min: f32,
        /// Highest value the sensor can report
        max: f32,
    },

    /// Driver used before a successful initialization
    #[error("Sensor not initialized")]
    NotInitialized,
}

/// Rejected calibration requests
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// Voltage must lie in (0, Vref]
    #[error("Calibration voltage {voltage_mv} mV outside (0, {vref_mv}]")]
    VoltageOutOfRange {
        /// Offending voltage
        voltage_mv: f32,
        /// ADC reference voltage
        vref_mv: f32,
    },

    /// Two reference points too close to derive a slope
    #[error("Calibration points {separation_mv} mV apart, need {required_mv} mV")]
    InsufficientSeparation {
        /// Measured separation
        separation_mv: f32,
        /// Minimum separation
        required_mv: f32,
    },

    /// Reference solution value outside what the sensor can measure
    #[error("Reference value {value} outside (0, {max}]")]
    ReferenceOutOfRange {
        /// Offending reference value
        value: f32,
        /// Largest accepted reference value
        max: f32,
    },

    /// Profile parameter that would make the conversion degenerate
    #[error("Calibration parameter {name} = {value} is not usable")]
    InvalidParameter {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f32,
    },
}

/// Failures while building an outbound buffer
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EncodeError {
    /// Destination cannot hold even the smallest encoding
    #[error("Buffer too small: need {required} bytes, have {available}")]
    BufferTooSmall {
        /// Minimum bytes needed
        required: usize,
        /// Bytes available
        available: usize,
    },

    /// Entry would push the payload past its bound
    #[error("Payload capacity exceeded: {used} + {requested} > {capacity}")]
    CapacityExceeded {
        /// Bytes already written
        used: usize,
        /// Bytes the entry needs
        requested: usize,
        /// Payload bound
        capacity: usize,
    },
}

/// Node configuration that cannot be run
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Periodic uplinks need a non-zero interval
    #[error("Transmit interval must be non-zero")]
    ZeroTxInterval,

    /// Payload bound outside (0, 242]
    #[error("Payload length {len} outside (0, {max}]")]
    InvalidPayloadLength {
        /// Configured bound
        len: usize,
        /// Largest LoRaWAN application payload
        max: usize,
    },

    /// Latitude or longitude outside the globe
    #[error("Position ({latitude}, {longitude}) is not a valid coordinate")]
    InvalidPosition {
        /// Configured latitude
        latitude: f32,
        /// Configured longitude
        longitude: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Bus { source_name } => defmt::write!(fmt, "Bus failure: {}", source_name),
            Self::NotPresent { sensor } => defmt::write!(fmt, "Not present: {}", sensor),
            Self::OutOfRange { value, min, max } => {
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max)
            }
            Self::NotInitialized => defmt::write!(fmt, "Not initialized"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CalibrationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::VoltageOutOfRange { voltage_mv, vref_mv } => {
                defmt::write!(fmt, "Voltage {} mV outside (0, {}]", voltage_mv, vref_mv)
            }
            Self::InsufficientSeparation { separation_mv, required_mv } => {
                defmt::write!(fmt, "Separation {} mV < {} mV", separation_mv, required_mv)
            }
            Self::ReferenceOutOfRange { value, max } => {
                defmt::write!(fmt, "Reference {} outside (0, {}]", value, max)
            }
            Self::InvalidParameter { name, value } => {
                defmt::write!(fmt, "Parameter {} = {} not usable", name, value)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EncodeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::BufferTooSmall { required, available } => {
                defmt::write!(fmt, "Need {} bytes, have {}", required, available)
            }
            Self::CapacityExceeded { used, requested, capacity } => {
                defmt::write!(fmt, "{} + {} > {}", used, requested, capacity)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroTxInterval => defmt::write!(fmt, "Zero transmit interval"),
            Self::InvalidPayloadLength { len, max } => {
                defmt::write!(fmt, "Payload length {} outside (0, {}]", len, max)
            }
            Self::InvalidPosition { latitude, longitude } => {
                defmt::write!(fmt, "Invalid position ({}, {})", latitude, longitude)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        assert!(core::mem::size_of::<SensorError>() <= 24);
        assert!(core::mem::size_of::<CalibrationError>() <= 24);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_render() {
        let err = EncodeError::BufferTooSmall { required: 64, available: 10 };
        assert_eq!(err.to_string(), "Buffer too small: need 64 bytes, have 10");
    }
}
