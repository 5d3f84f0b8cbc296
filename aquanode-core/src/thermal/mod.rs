//! Thermal Camera Aggregation
//!
//! ## Overview
//!
//! The AMG8833 reports an 8x8 grid of 12-bit signed pixel temperatures at
//! 0.25 °C/LSB. This module holds the decoded frame, its statistics and the
//! two wire encodings. Bus access lives in `aquanode-drivers`.
//!
//! ## Wire encodings
//!
//! | format | size | per pixel                                   |
//! |--------|------|---------------------------------------------|
//! | A      | 128  | raw i16, little-endian, 0.25 °C/LSB          |
//! | B      | 64   | `round((clamp(°C, -20, 80) + 20) * 2.55)`     |
//!
//! Both use row-major pixel order. The encoder picks A when the budget allows
//! and silently downgrades to B otherwise.
//!
//! ```rust
//! use aquanode_core::thermal::{encode_for_transmission, ThermalFrame, ThermalStats};
//!
//! let frame = ThermalFrame::uniform(100);
//! let stats = ThermalStats::from_frame(&frame);
//! assert_eq!(stats.avg, 25.0);
//!
//! let mut out = [0u8; 64];
//! let written = encode_for_transmission(&frame, &mut out).unwrap();
//! assert_eq!(written, 64);
//! assert!(out.iter().all(|&b| b == 115));
//! ```

pub mod encoding;
pub mod frame;
pub mod stats;

pub use encoding::{
    compress_pixel, decode_full, decompress_pixel, encode_for_transmission, ThermalEncoding,
};
pub use frame::ThermalFrame;
pub use stats::ThermalStats;
