//! Shared multi-channel ADC scan
//!
//! The pH and TDS probes sit on different ranks of the same regular-group
//! conversion. One physical scan converts all four ranks, and both readers
//! take their channel from it.
//!
//! ## Debounce
//!
//! A scan result is reused for `ADC_SCAN_TTL_MS` after the scan was
//! *attempted*. A failed scan is cached as well, so a flaky converter is not
//! hammered by every reader in the same cycle. `force_refresh` drops the
//! cache.
//!
//! ## Ownership
//!
//! `SharedScan` is owned by whoever drives the cycle and lent to readers as
//! `&mut impl ChannelSampler`. Exclusive borrowing replaces the global
//! channel array of a C port: two readers cannot observe a scan mid-update.

use crate::constants::adc::{ADC_CHANNEL_COUNT, ADC_SCAN_TTL_MS};
use crate::errors::{SensorError, SensorResult};
use crate::time::{elapsed_ms, TimeSource, Timestamp};

/// Raw counts of one scan, indexed by rank
pub type ScanResult = [u16; ADC_CHANNEL_COUNT];

/// Hardware that converts all ranks in one blocking call
pub trait MultiChannelAdc {
    /// Start a conversion sequence and collect every rank
    fn scan(&mut self) -> SensorResult<ScanResult>;
}

/// Anything that can hand out one ADC channel
pub trait ChannelSampler {
    /// Raw count for `channel` (scan rank)
    fn sample(&mut self, channel: usize) -> SensorResult<u16>;
}

/// Time-debounced cache in front of a [`MultiChannelAdc`]
pub struct SharedScan<A, T> {
    adc: A,
    clock: T,
    ttl_ms: u64,
    cached: Option<(Timestamp, SensorResult<ScanResult>)>,
}

impl<A: MultiChannelAdc, T: TimeSource> SharedScan<A, T> {
    /// Wrap `adc` with the standard 50 ms debounce
    pub fn new(adc: A, clock: T) -> Self {
        Self::with_ttl(adc, clock, ADC_SCAN_TTL_MS)
    }

    /// Wrap `adc` with a custom debounce window
    pub fn with_ttl(adc: A, clock: T, ttl_ms: u64) -> Self {
        Self { adc, clock, ttl_ms, cached: None }
    }

    /// All ranks, rescanning only when the cached scan has expired
    pub fn channels(&mut self) -> SensorResult<ScanResult> {
        let now = self.clock.now();

        if let Some((taken_at, result)) = self.cached {
            if elapsed_ms(taken_at, now) < self.ttl_ms {
                return result;
            }
        }

        let result = self.adc.scan();
        if let Err(err) = result {
            log_warn!("ADC scan failed: {}", err);
        }
        self.cached = Some((now, result));
        result
    }

    /// Discard the cached scan so the next access converts again
    pub fn force_refresh(&mut self) {
        self.cached = None;
    }

    /// Debounce window in milliseconds
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Underlying converter
    pub fn adc(&self) -> &A {
        &self.adc
    }

    /// Release the converter and clock
    pub fn into_parts(self) -> (A, T) {
        (self.adc, self.clock)
    }
}

impl<A: MultiChannelAdc, T: TimeSource> ChannelSampler for SharedScan<A, T> {
    fn sample(&mut self, channel: usize) -> SensorResult<u16> {
        let counts = self.channels()?;
        counts
            .get(channel)
            .copied()
            .ok_or(SensorError::NotPresent { sensor: "adc rank" })
    }
}

impl<S: ChannelSampler + ?Sized> ChannelSampler for &mut S {
    fn sample(&mut self, channel: usize) -> SensorResult<u16> {
        (**self).sample(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedTime;

    struct CountingAdc {
        scans: u32,
        fail: bool,
    }

    impl MultiChannelAdc for CountingAdc {
        fn scan(&mut self) -> SensorResult<ScanResult> {
            self.scans += 1;
            if self.fail {
                return Err(SensorError::Bus { source_name: "adc" });
            }
            let n = self.scans as u16;
            Ok([n, n + 1, n + 2, n + 3])
        }
    }

    #[test]
    fn scans_are_debounced() {
        let clock = FixedTime::new(1_000);
        let mut scan = SharedScan::new(CountingAdc { scans: 0, fail: false }, &clock);

        assert_eq!(scan.sample(0).unwrap(), 1);
        clock.advance(49);
        assert_eq!(scan.sample(2).unwrap(), 3);
        assert_eq!(scan.adc().scans, 1);

        clock.advance(1);
        assert_eq!(scan.sample(0).unwrap(), 2);
        assert_eq!(scan.adc().scans, 2);
    }

    #[test]
    fn failures_are_cached_for_the_window() {
        let clock = FixedTime::new(0);
        let mut scan = SharedScan::new(CountingAdc { scans: 0, fail: true }, &clock);

        assert!(scan.sample(0).is_err());
        assert!(scan.sample(2).is_err());
        assert_eq!(scan.adc().scans, 1);

        scan.force_refresh();
        assert!(scan.sample(0).is_err());
        assert_eq!(scan.adc().scans, 2);
    }

    #[test]
    fn force_refresh_rescans() {
        let clock = FixedTime::new(0);
        let mut scan = SharedScan::new(CountingAdc { scans: 0, fail: false }, &clock);

        scan.sample(0).unwrap();
        scan.force_refresh();
        assert_eq!(scan.sample(0).unwrap(), 2);
    }

    #[test]
    fn unknown_rank_is_rejected() {
        let clock = FixedTime::new(0);
        let mut scan = SharedScan::new(CountingAdc { scans: 0, fail: false }, &clock);
        assert_eq!(
            scan.sample(ADC_CHANNEL_COUNT),
            Err(SensorError::NotPresent { sensor: "adc rank" })
        );
    }
}
