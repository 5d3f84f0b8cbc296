//! ADC Front-End Parameters
//!
//! The analog probes (pH, TDS) share one 12-bit ADC that converts four
//! ranked channels per scan.

/// ADC reference voltage (mV).
///
/// Also the upper bound for calibration voltages.
pub const ADC_VREF_MV: f32 = 3300.0;

/// Full-scale count of the 12-bit converter.
pub const ADC_RESOLUTION: f32 = 4095.0;

/// Channels converted by one scan.
pub const ADC_CHANNEL_COUNT: usize = 4;

/// Minimum spacing between two physical scans (ms).
///
/// Calls inside this window reuse the cached scan so the pH and TDS readers
/// never trigger back-to-back conversions.
pub const ADC_SCAN_TTL_MS: u64 = 50;

/// Scan rank of the TDS probe (PB3 / ADC_IN2).
pub const TDS_CHANNEL_RANK: usize = 0;

/// Scan rank of the pH probe (PB1 / ADC_IN5).
pub const PH_CHANNEL_RANK: usize = 2;
