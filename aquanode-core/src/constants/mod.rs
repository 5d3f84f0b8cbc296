//! Constants for AquaNode Core
//!
//! Centralized, documented constants for the water-quality node. Every
//! numeric literal with physical meaning lives here.
//!
//! ## Organization
//!
//! - **ADC**: reference voltage, resolution, scan ranks and debounce
//! - **Water**: pH and TDS probe calibration defaults and limits
//! - **Thermal**: AMG8833 register map, timing and wire encodings
//! - **One-Wire**: slot timings and DS18B20 commands
//! - **Payload**: uplink channel map and LPP type tags
//! - **Time**: scheduling defaults

/// ADC front-end parameters shared by the analog probes.
pub mod adc;

/// One-wire slot timings and DS18B20 commands.
pub mod onewire;

/// Uplink channel map and LPP type tags.
pub mod payload;

/// AMG8833 register map, timing and encodings.
pub mod thermal;

/// Scheduling defaults.
pub mod time;

/// pH and TDS probe calibration defaults and limits.
pub mod water;

pub use adc::{ADC_RESOLUTION, ADC_SCAN_TTL_MS, ADC_VREF_MV};
pub use payload::LORAWAN_MAX_APP_PAYLOAD;
pub use thermal::{THERMAL_GRID_HEIGHT, THERMAL_GRID_WIDTH, THERMAL_PIXEL_COUNT};
pub use time::DEFAULT_TX_INTERVAL_MS;
