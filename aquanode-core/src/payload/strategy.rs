//! Region-selected payload strategies
//!
//! The base channels (environment, water chemistry, position) are common to
//! every region and written by the encoder. A strategy appends whatever the
//! region can afford on top of them.

use super::encoder::PayloadInputs;
use super::lpp::EncodedPayload;
use crate::constants::payload::*;
use crate::constants::thermal::{THERMAL_GRID_HEIGHT, THERMAL_GRID_WIDTH, THERMAL_PIXEL_COUNT};
use crate::errors::EncodeResult;

/// Extra channels appended after the base set
pub trait PayloadStrategy: Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Append region-specific channels to `payload`
    fn append_extended(&self, payload: &mut EncodedPayload, inputs: &PayloadInputs<'_>);
}

/// Log a rejected entry, `true` if it was written
pub(crate) fn record(result: EncodeResult<()>, channel: u8) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log_warn!("Channel {} dropped: {}", channel, err);
            false
        }
    }
}

/// Thermal statistics travel offset so sub-zero scenes stay positive
fn add_thermal_stat(payload: &mut EncodedPayload, channel: u8, celsius: f32) -> bool {
    record(payload.add_temperature(channel, celsius + THERMAL_STAT_OFFSET_C), channel)
}

/// Quality code, thermal statistics and the compressed image
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPayload;

impl PayloadStrategy for FullPayload {
    fn name(&self) -> &'static str {
        "full"
    }

    fn append_extended(&self, payload: &mut EncodedPayload, inputs: &PayloadInputs<'_>) {
        record(
            payload.add_digital_input(CH_WATER_QUALITY, inputs.water_quality().code()),
            CH_WATER_QUALITY,
        );

        let Some(thermal) = inputs.thermal.as_ref().filter(|t| !t.compressed.is_empty()) else {
            return;
        };

        add_thermal_stat(payload, CH_THERMAL_MIN, thermal.stats.min);
        add_thermal_stat(payload, CH_THERMAL_MAX, thermal.stats.max);
        add_thermal_stat(payload, CH_THERMAL_AVG, thermal.stats.avg);

        if thermal.compressed.len() != THERMAL_PIXEL_COUNT {
            return;
        }

        record(
            payload.add_digital_input(CH_THERMAL_WIDTH, THERMAL_GRID_WIDTH as u8),
            CH_THERMAL_WIDTH,
        );
        record(
            payload.add_digital_input(CH_THERMAL_HEIGHT, THERMAL_GRID_HEIGHT as u8),
            CH_THERMAL_HEIGHT,
        );

        let mut sent = 0usize;
        for (channel, &byte) in (CH_THERMAL_PIXEL_BASE..).zip(thermal.compressed.iter()) {
            if payload.add_digital_input(channel, byte).is_err() {
                break;
            }
            sent += 1;
        }
        if sent < THERMAL_PIXEL_COUNT {
            log_warn!("Thermal image truncated: {} of {} pixels fit", sent, THERMAL_PIXEL_COUNT);
        }
    }
}

/// Quality code and thermal average only
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactPayload;

impl PayloadStrategy for CompactPayload {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn append_extended(&self, payload: &mut EncodedPayload, inputs: &PayloadInputs<'_>) {
        record(
            payload.add_digital_input(CH_COMPACT_WATER_QUALITY, inputs.water_quality().code()),
            CH_COMPACT_WATER_QUALITY,
        );

        if let Some(thermal) = inputs.thermal.as_ref().filter(|t| !t.compressed.is_empty()) {
            add_thermal_stat(payload, CH_COMPACT_THERMAL_AVG, thermal.stats.avg);
        }
    }
}
