//! AMG8833 Grid-EYE Parameters
//!
//! Register map, timing and wire-encoding constants for the 8x8 infrared
//! array. Source: Panasonic AMG88xx datasheet.

/// Pixels per row.
pub const THERMAL_GRID_WIDTH: usize = 8;

/// Pixel rows.
pub const THERMAL_GRID_HEIGHT: usize = 8;

/// Pixels per frame.
pub const THERMAL_PIXEL_COUNT: usize = THERMAL_GRID_WIDTH * THERMAL_GRID_HEIGHT;

/// Temperature represented by one pixel LSB (°C).
pub const THERMAL_CELSIUS_PER_LSB: f32 = 0.25;

/// Size of the pixel register block (two bytes per pixel).
pub const THERMAL_FRAME_BYTES: usize = THERMAL_PIXEL_COUNT * 2;

/// Format A: raw little-endian i16 per pixel.
pub const THERMAL_FULL_ENCODING_BYTES: usize = THERMAL_FRAME_BYTES;

/// Format B: one byte per pixel.
pub const THERMAL_COMPRESSED_ENCODING_BYTES: usize = THERMAL_PIXEL_COUNT;

/// Temperature mapped to Format B count 0 (°C).
pub const THERMAL_COMPRESS_MIN_C: f32 = -20.0;

/// Temperature mapped to Format B count 255 (°C).
pub const THERMAL_COMPRESS_MAX_C: f32 = 80.0;

/// Format B counts per °C (255 / 100).
pub const THERMAL_COMPRESS_SCALE: f32 = 2.55;

// ===== I2C =====

/// 7-bit bus address with AD_SELECT tied high.
pub const AMG8833_ADDRESS: u8 = 0x69;

/// Power control register.
pub const AMG8833_REG_POWER_CTRL: u8 = 0x00;

/// Reset register.
pub const AMG8833_REG_RESET: u8 = 0x01;

/// Frame rate register.
pub const AMG8833_REG_FRAME_RATE: u8 = 0x02;

/// Status register.
pub const AMG8833_REG_STATUS: u8 = 0x04;

/// First pixel register (pixel 0, low byte).
pub const AMG8833_REG_PIXEL_BASE: u8 = 0x80;

/// Power control value for normal mode.
pub const AMG8833_MODE_NORMAL: u8 = 0x00;

/// Power control value for sleep mode.
pub const AMG8833_MODE_SLEEP: u8 = 0x10;

/// Reset register value for an initial reset.
pub const AMG8833_INITIAL_RESET: u8 = 0x3F;

/// Frame rate register value for 10 frames per second.
pub const AMG8833_FPS_10: u8 = 0x00;

// ===== MANDATED DELAYS (ms) =====

/// Settling after software reset.
pub const AMG8833_RESET_SETTLE_MS: u32 = 100;

/// Thermistor stabilization after mode and frame-rate configuration.
pub const AMG8833_CONFIG_SETTLE_MS: u32 = 100;

/// Settling after leaving sleep mode.
pub const AMG8833_WAKE_SETTLE_MS: u32 = 50;

/// Stabilization between a successful presence probe and the pixel read.
pub const AMG8833_CAPTURE_SETTLE_MS: u32 = 100;
