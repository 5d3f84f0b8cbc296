//! Uplink payload assembly
//!
//! Writes the base channels every region carries, then hands over to the
//! region's [`PayloadStrategy`]. Invalid readings are left out. A reading
//! that does not fit is logged and skipped; encoding itself never fails.

use super::lpp::EncodedPayload;
use super::region::Region;
use super::strategy::{record, PayloadStrategy};
use crate::config::GeoPosition;
use crate::constants::payload::*;
use crate::sensors::{EnvironmentReading, PhReading, TdsReading, TdsSensor, WaterQuality};
use crate::thermal::ThermalStats;

/// Thermal data for one uplink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalSummary<'a> {
    /// Statistics of the captured frame
    pub stats: ThermalStats,
    /// Format B image, empty when encoding failed
    pub compressed: &'a [u8],
}

/// Everything one uplink can carry
///
/// `None` marks a sensor whose read failed this cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadInputs<'a> {
    /// Pressure, air temperature, humidity
    pub environment: Option<EnvironmentReading>,
    /// Water temperature (°C)
    pub water_temperature_c: Option<f32>,
    /// pH reading, encoded only when valid
    pub ph: Option<PhReading>,
    /// TDS reading, encoded only when valid
    pub tds: Option<TdsReading>,
    /// Static node position
    pub position: GeoPosition,
    /// Thermal capture
    pub thermal: Option<ThermalSummary<'a>>,
}

impl PayloadInputs<'_> {
    /// Inputs carrying only a position
    pub fn new(position: GeoPosition) -> Self {
        Self {
            environment: None,
            water_temperature_c: None,
            ph: None,
            tds: None,
            position,
            thermal: None,
        }
    }

    /// Quality band to report, `NoSensor` without a usable TDS reading
    pub fn water_quality(&self) -> WaterQuality {
        match &self.tds {
            Some(tds) if TdsSensor::is_reading_valid(tds) => tds.quality,
            _ => WaterQuality::NoSensor,
        }
    }
}

/// Region-aware payload builder
#[derive(Clone, Copy)]
pub struct PayloadEncoder {
    strategy: &'static dyn PayloadStrategy,
    limit: usize,
}

impl core::fmt::Debug for PayloadEncoder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PayloadEncoder")
            .field("strategy", &self.strategy.name())
            .field("limit", &self.limit)
            .finish()
    }
}

impl PayloadEncoder {
    /// Encoder with an explicit strategy and size bound
    pub fn new(strategy: &'static dyn PayloadStrategy, limit: usize) -> Self {
        Self { strategy, limit }
    }

    /// Encoder for `region` at the region's maximum payload size
    pub fn for_region(region: Region) -> Self {
        Self::new(region.strategy(), region.max_payload_len())
    }

    /// Tighter size bound, e.g. for a slow data rate
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Active strategy name
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Build the payload for one uplink
    pub fn encode(&self, inputs: &PayloadInputs<'_>) -> EncodedPayload {
        let mut payload = EncodedPayload::new(self.limit);

        if let Some(env) = &inputs.environment {
            record(payload.add_barometric_pressure(CH_PRESSURE, env.pressure_hpa), CH_PRESSURE);
            record(
                payload.add_temperature(CH_AMBIENT_TEMPERATURE, env.temperature_c),
                CH_AMBIENT_TEMPERATURE,
            );
            record(payload.add_relative_humidity(CH_HUMIDITY, env.humidity_pct), CH_HUMIDITY);
        }

        if let Some(celsius) = inputs.water_temperature_c {
            record(payload.add_temperature(CH_WATER_TEMPERATURE, celsius), CH_WATER_TEMPERATURE);
        }

        if let Some(ph) = inputs.ph.as_ref().filter(|r| r.is_valid) {
            record(payload.add_analog_input(CH_PH, ph.ph), CH_PH);
        }

        if let Some(tds) = inputs.tds.as_ref().filter(|r| TdsSensor::is_reading_valid(r)) {
            record(payload.add_concentration(CH_TDS, tds.tds_ppm), CH_TDS);
        }

        record(payload.add_analog_input(CH_LATITUDE, inputs.position.latitude), CH_LATITUDE);
        record(payload.add_analog_input(CH_LONGITUDE, inputs.position.longitude), CH_LONGITUDE);

        self.strategy.append_extended(&mut payload, inputs);

        log_info!(
            "Payload ({}): {} bytes, {} entries dropped",
            self.strategy.name(),
            payload.len(),
            payload.dropped()
        );
        payload
    }
}

impl Default for PayloadEncoder {
    fn default() -> Self {
        Self::for_region(Region::default())
    }
}
