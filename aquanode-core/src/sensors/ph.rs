//! pH probe reader
//!
//! Converts the pH rank of the shared ADC scan into a temperature-compensated
//! pH value. Compensation pulls the reading towards neutral by 0.3 % per °C
//! away from 25 °C.

use crate::adc::ChannelSampler;
use crate::calibration::PhCalibration;
use crate::constants::adc::PH_CHANNEL_RANK;
use crate::constants::water::*;
use crate::errors::{CalibrationResult, SensorResult};

use super::counts_to_millivolts;

/// Coarse acidity label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhClass {
    /// pH < 6.5
    Acidic,
    /// 6.5 ≤ pH ≤ 7.5
    Neutral,
    /// pH > 7.5
    Alkaline,
    /// Outside [0, 14]
    Invalid,
}

impl PhClass {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Acidic => "Acidic",
            Self::Neutral => "Neutral",
            Self::Alkaline => "Alkaline",
            Self::Invalid => "Invalid",
        }
    }
}

/// One pH measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhReading {
    /// Raw ADC count
    pub raw_count: u16,
    /// Probe output (mV)
    pub voltage_mv: f32,
    /// Compensated pH, 7.0 when invalid
    pub ph: f32,
    /// Temperature used for compensation (°C)
    pub temperature_c: f32,
    /// False when the count is outside the connected-probe window
    pub is_valid: bool,
}

impl PhReading {
    /// Classification of the reported value
    pub fn class(&self) -> PhClass {
        PhSensor::classify(self.ph)
    }
}

/// pH reader with its own calibration profile
#[derive(Debug, Clone, Default)]
pub struct PhSensor {
    calibration: PhCalibration,
}

impl PhSensor {
    /// Reader using a stored profile, rejected if it fails [`PhCalibration::validate`]
    pub fn with_calibration(calibration: PhCalibration) -> CalibrationResult<Self> {
        calibration.validate().map_err(|err| {
            log_warn!("pH profile rejected: {}", err);
            err
        })?;
        Ok(Self { calibration })
    }

    /// Raw count from the pH rank
    pub fn read_raw(&self, adc: &mut impl ChannelSampler) -> SensorResult<u16> {
        adc.sample(PH_CHANNEL_RANK)
    }

    /// Whether a raw count can come from a connected probe
    pub fn is_count_valid(counts: u16) -> bool {
        (PH_MIN_VALID_ADC..=PH_MAX_VALID_ADC).contains(&counts)
    }

    /// Voltage to compensated pH, clamped to [0, 14]
    pub fn convert(&self, voltage_mv: f32, temperature_c: f32) -> f32 {
        let cal = &self.calibration;
        let mut ph = PH_MAX - (voltage_mv - PH_ZERO_POINT_MV) / cal.slope;

        if temperature_c.is_finite() {
            ph += (PH_NEUTRAL - ph) * cal.temp_coefficient * (temperature_c - cal.reference_temp_c);
        }

        ph.clamp(PH_MIN, PH_MAX)
    }

    /// Full measurement at `temperature_c`
    pub fn read(&self, adc: &mut impl ChannelSampler, temperature_c: f32) -> SensorResult<PhReading> {
        let raw_count = self.read_raw(adc)?;
        let voltage_mv = counts_to_millivolts(raw_count);
        let is_valid = Self::is_count_valid(raw_count);

        let ph = if is_valid {
            self.convert(voltage_mv, temperature_c)
        } else {
            log_warn!("pH probe out of range: raw {}", raw_count);
            PH_NEUTRAL
        };

        Ok(PhReading { raw_count, voltage_mv, ph, temperature_c, is_valid })
    }

    /// Measurement at the reference temperature
    pub fn read_default(&self, adc: &mut impl ChannelSampler) -> SensorResult<PhReading> {
        self.read(adc, PH_REFERENCE_TEMP_C)
    }

    /// Label for a pH value
    pub fn classify(ph: f32) -> PhClass {
        if !(PH_MIN..=PH_MAX).contains(&ph) {
            PhClass::Invalid
        } else if ph < PH_ACIDIC_BELOW {
            PhClass::Acidic
        } else if ph > PH_ALKALINE_ABOVE {
            PhClass::Alkaline
        } else {
            PhClass::Neutral
        }
    }

    /// See [`PhCalibration::calibrate_single_point`]
    pub fn calibrate_single_point(&mut self, neutral_mv: f32) -> CalibrationResult<()> {
        self.calibration.calibrate_single_point(neutral_mv).map_err(|err| {
            log_warn!("pH single-point calibration rejected: {}", err);
            err
        })
    }

    /// See [`PhCalibration::calibrate_two_point`]
    pub fn calibrate_two_point(&mut self, acid_mv: f32, neutral_mv: f32) -> CalibrationResult<()> {
        self.calibration.calibrate_two_point(acid_mv, neutral_mv).map_err(|err| {
            log_warn!("pH two-point calibration rejected: {}", err);
            err
        })
    }

    /// Active profile
    pub fn calibration(&self) -> &PhCalibration {
        &self.calibration
    }

    /// Back to factory defaults
    pub fn reset_calibration(&mut self) {
        self.calibration.reset();
    }
}
