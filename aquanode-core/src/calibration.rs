//! Calibration profiles for the analog water probes
//!
//! Each probe owns exactly one profile. Profiles change only through the
//! `calibrate_*` methods, and every method validates its whole input before
//! touching a field, so a rejected request leaves the previous model intact.
//!
//! ## pH model
//!
//! The conversion is `pH = 14 - (mV - 500) / slope`. The neutral voltage is
//! recorded by calibration but does not enter that formula, so a single-point
//! calibration changes the stored profile without moving readings.
//!
//! Two-point calibration with the acid voltage above the neutral one yields a
//! negative slope. The formula then reads near 14 for every usable voltage
//! and the clamp hides it. Probes with that polarity need a neutral-voltage
//! based model that has not been written yet.
//!
//! ## TDS model
//!
//! Conductivity scales linearly with the probe voltage through the cell
//! constant `k_value`. Single-point calibration solves for `k_value` from a
//! reference solution of known TDS.
//!
//! ## Stored profiles
//!
//! A profile built by hand or deserialized is checked with `validate` before
//! a reader takes it. The pH slope must be finite and at least as steep as
//! the flattest slope a two-point calibration can produce, the TDS cell
//! constant finite and positive, and every other parameter finite.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::adc::ADC_VREF_MV;
use crate::constants::water::*;
use crate::errors::{CalibrationError, CalibrationResult};

/// One (voltage, reference value) pair captured during calibration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferencePoint {
    /// Probe output in the reference solution (mV)
    pub voltage_mv: f32,
    /// Known value of the reference solution (pH or ppm)
    pub reference_value: f32,
}

/// Reject voltages outside (0, Vref]
///
/// NaN fails both comparisons and is rejected too.
fn check_voltage(voltage_mv: f32) -> CalibrationResult<()> {
    if voltage_mv > 0.0 && voltage_mv <= ADC_VREF_MV {
        Ok(())
    } else {
        Err(CalibrationError::VoltageOutOfRange { voltage_mv, vref_mv: ADC_VREF_MV })
    }
}

fn check_finite(name: &'static str, value: f32) -> CalibrationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalibrationError::InvalidParameter { name, value })
    }
}

fn check_coefficient(name: &'static str, value: f32) -> CalibrationResult<()> {
    if (0.0..=MAX_TEMP_COEFFICIENT).contains(&value) {
        Ok(())
    } else {
        Err(CalibrationError::InvalidParameter { name, value })
    }
}

/// Linear pH model parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PhCalibrationFields"))]
pub struct PhCalibration {
    /// mV per pH unit, magnitude at least 50 mV / 3 pH
    pub slope: f32,
    /// Probe output at pH 7.0 (mV)
    pub neutral_voltage_mv: f32,
    /// Probe output at pH 4.0 (mV), 0 until a two-point calibration
    pub acid_voltage_mv: f32,
    /// Pull towards neutral per °C away from the reference
    pub temp_coefficient: f32,
    /// Temperature at which no compensation applies (°C)
    pub reference_temp_c: f32,
    /// Set by any successful calibration
    pub is_calibrated: bool,
}

impl Default for PhCalibration {
    fn default() -> Self {
        Self {
            slope: PH_DEFAULT_SLOPE,
            neutral_voltage_mv: PH_DEFAULT_NEUTRAL_VOLTAGE_MV,
            acid_voltage_mv: 0.0,
            temp_coefficient: PH_TEMP_COEFFICIENT,
            reference_temp_c: PH_REFERENCE_TEMP_C,
            is_calibrated: false,
        }
    }
}

impl PhCalibration {
    /// Record the probe output in a pH 7.0 buffer
    ///
    /// After a two-point calibration the new neutral point must stay at least
    /// 50 mV away from the stored acid point, otherwise the pair would no
    /// longer define a usable slope.
    pub fn calibrate_single_point(&mut self, neutral_mv: f32) -> CalibrationResult<()> {
        check_voltage(neutral_mv)?;

        if self.acid_voltage_mv > 0.0 {
            check_separation(self.acid_voltage_mv, neutral_mv)?;
        }

        self.neutral_voltage_mv = neutral_mv;
        self.is_calibrated = true;
        Ok(())
    }

    /// Derive slope and neutral point from pH 4.0 and pH 7.0 buffers
    pub fn calibrate_two_point(&mut self, acid_mv: f32, neutral_mv: f32) -> CalibrationResult<()> {
        check_voltage(acid_mv)?;
        check_voltage(neutral_mv)?;
        check_separation(acid_mv, neutral_mv)?;

        self.slope = (acid_mv - neutral_mv) / (PH_ACID - PH_NEUTRAL);
        self.neutral_voltage_mv = neutral_mv;
        self.acid_voltage_mv = acid_mv;
        self.is_calibrated = true;
        Ok(())
    }

    /// Reference points captured so far
    ///
    /// The acid point is `None` until a two-point calibration succeeds.
    pub fn reference_points(&self) -> (ReferencePoint, Option<ReferencePoint>) {
        let neutral = ReferencePoint {
            voltage_mv: self.neutral_voltage_mv,
            reference_value: PH_NEUTRAL,
        };
        let acid = (self.acid_voltage_mv > 0.0).then_some(ReferencePoint {
            voltage_mv: self.acid_voltage_mv,
            reference_value: PH_ACID,
        });
        (neutral, acid)
    }

    /// Reject a profile the conversion cannot use
    pub fn validate(&self) -> CalibrationResult<()> {
        // 1 mV slack so a calibration at exactly the minimum separation survives rounding
        let span_mv = libm::fabsf(self.slope) * (PH_NEUTRAL - PH_ACID);
        let steep_enough = span_mv >= PH_MIN_CALIBRATION_SEPARATION_MV - 1.0;
        if !(self.slope.is_finite() && steep_enough) {
            return Err(CalibrationError::InvalidParameter { name: "slope", value: self.slope });
        }
        check_finite("neutral_voltage_mv", self.neutral_voltage_mv)?;
        check_finite("acid_voltage_mv", self.acid_voltage_mv)?;
        check_coefficient("temp_coefficient", self.temp_coefficient)?;
        check_finite("reference_temp_c", self.reference_temp_c)
    }

    /// Restore factory defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PhCalibrationFields {
    slope: f32,
    neutral_voltage_mv: f32,
    acid_voltage_mv: f32,
    temp_coefficient: f32,
    reference_temp_c: f32,
    is_calibrated: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<PhCalibrationFields> for PhCalibration {
    type Error = CalibrationError;

    fn try_from(fields: PhCalibrationFields) -> CalibrationResult<Self> {
        let calibration = Self {
            slope: fields.slope,
            neutral_voltage_mv: fields.neutral_voltage_mv,
            acid_voltage_mv: fields.acid_voltage_mv,
            temp_coefficient: fields.temp_coefficient,
            reference_temp_c: fields.reference_temp_c,
            is_calibrated: fields.is_calibrated,
        };
        calibration.validate()?;
        Ok(calibration)
    }
}

fn check_separation(a_mv: f32, b_mv: f32) -> CalibrationResult<()> {
    let separation_mv = libm::fabsf(a_mv - b_mv);
    if separation_mv < PH_MIN_CALIBRATION_SEPARATION_MV {
        return Err(CalibrationError::InsufficientSeparation {
            separation_mv,
            required_mv: PH_MIN_CALIBRATION_SEPARATION_MV,
        });
    }
    Ok(())
}

/// Conductivity cell parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TdsCalibrationFields"))]
pub struct TdsCalibration {
    /// Cell constant, finite and positive
    pub k_value: f32,
    /// Voltage subtracted before scaling (mV)
    pub offset_mv: f32,
    /// Conductivity change per °C
    pub temp_coefficient: f32,
    /// Temperature at which no compensation applies (°C)
    pub reference_temp_c: f32,
    /// Set by a successful calibration
    pub is_calibrated: bool,
}

impl Default for TdsCalibration {
    fn default() -> Self {
        Self {
            k_value: TDS_DEFAULT_K_VALUE,
            offset_mv: TDS_DEFAULT_OFFSET_MV,
            temp_coefficient: TDS_TEMP_COEFFICIENT,
            reference_temp_c: TDS_REFERENCE_TEMP_C,
            is_calibrated: false,
        }
    }
}

impl TdsCalibration {
    /// Solve the cell constant from a reference solution
    ///
    /// `known_tds_ppm` must lie in (0, 2000] and `voltage_mv` in (0, Vref].
    pub fn calibrate(&mut self, known_tds_ppm: f32, voltage_mv: f32) -> CalibrationResult<()> {
        if !(known_tds_ppm > 0.0 && known_tds_ppm <= TDS_MAX_PPM) {
            return Err(CalibrationError::ReferenceOutOfRange {
                value: known_tds_ppm,
                max: TDS_MAX_PPM,
            });
        }
        check_voltage(voltage_mv)?;

        let conductivity = known_tds_ppm / TDS_CONVERSION_FACTOR;
        let expected_mv = conductivity / TDS_FULL_SCALE_CONDUCTIVITY * ADC_VREF_MV;
        self.k_value = expected_mv / voltage_mv;
        self.is_calibrated = true;
        Ok(())
    }

    /// Reject a profile the conversion cannot use
    pub fn validate(&self) -> CalibrationResult<()> {
        if !(self.k_value.is_finite() && self.k_value > 0.0) {
            return Err(CalibrationError::InvalidParameter { name: "k_value", value: self.k_value });
        }
        check_finite("offset_mv", self.offset_mv)?;
        check_coefficient("temp_coefficient", self.temp_coefficient)?;
        check_finite("reference_temp_c", self.reference_temp_c)
    }

    /// Restore factory defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TdsCalibrationFields {
    k_value: f32,
    offset_mv: f32,
    temp_coefficient: f32,
    reference_temp_c: f32,
    is_calibrated: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<TdsCalibrationFields> for TdsCalibration {
    type Error = CalibrationError;

    fn try_from(fields: TdsCalibrationFields) -> CalibrationResult<Self> {
        let calibration = Self {
            k_value: fields.k_value,
            offset_mv: fields.offset_mv,
            temp_coefficient: fields.temp_coefficient,
            reference_temp_c: fields.reference_temp_c,
            is_calibrated: fields.is_calibrated,
        };
        calibration.validate()?;
        Ok(calibration)
    }
}
