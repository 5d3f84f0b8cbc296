//! Scheduling Constants

/// Default uplink period (ms).
///
/// Matches the stock LoRaWAN application timer. Duty-cycle limits in EU868
/// still apply on top of this.
pub const DEFAULT_TX_INTERVAL_MS: u64 = 10_000;
