//! Conductivity / TDS probe reader
//!
//! ## Conversion
//!
//! ```text
//! conductivity = ((mV - offset) / Vref) * 2000 * k / (1 + 0.02 * (T - 25))   [0, 3000] µS/cm
//! tds          = conductivity * 0.5                                          [0, 2000] ppm
//! ```
//!
//! ## Probe presence
//!
//! The TDS input floats to mid-scale when the probe is unplugged. The bands
//! below are checked in order and must not be reordered:
//!
//! | raw count       | verdict      |
//! |-----------------|--------------|
//! | 0               | disconnected |
//! | 1200..=2400     | disconnected |
//! | ..=800          | connected    |
//! | 2500..          | connected    |
//! | 801..1200       | connected    |
//! | 2401..2500      | disconnected |

use crate::adc::ChannelSampler;
use crate::calibration::TdsCalibration;
use crate::constants::adc::{ADC_VREF_MV, TDS_CHANNEL_RANK};
use crate::constants::water::*;
use crate::errors::{CalibrationResult, SensorResult};

use super::counts_to_millivolts;

/// Drinking-water quality band derived from TDS
///
/// Discriminants are the codes sent over the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum WaterQuality {
    /// Probe disconnected
    NoSensor = 0,
    /// ≤ 300 ppm
    Excellent = 1,
    /// ≤ 600 ppm
    Good = 2,
    /// ≤ 900 ppm
    Fair = 3,
    /// ≤ 1200 ppm
    Poor = 4,
    /// ≤ 2000 ppm
    Unacceptable = 5,
    /// > 2000 ppm
    Dangerous = 6,
}

impl WaterQuality {
    /// Band for a TDS value, inclusive upper bounds
    pub fn from_tds(tds_ppm: f32) -> Self {
        if tds_ppm <= TDS_EXCELLENT_MAX {
            Self::Excellent
        } else if tds_ppm <= TDS_GOOD_MAX {
            Self::Good
        } else if tds_ppm <= TDS_FAIR_MAX {
            Self::Fair
        } else if tds_ppm <= TDS_POOR_MAX {
            Self::Poor
        } else if tds_ppm <= TDS_UNACCEPTABLE_MAX {
            Self::Unacceptable
        } else {
            Self::Dangerous
        }
    }

    /// Wire code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::NoSensor => "No Sensor",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unacceptable => "Unacceptable",
            Self::Dangerous => "Dangerous",
        }
    }
}

/// One conductivity measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdsReading {
    /// Raw ADC count
    pub raw_count: u16,
    /// Probe output (mV)
    pub voltage_mv: f32,
    /// Compensated conductivity (µS/cm), 0 when invalid
    pub conductivity_us_cm: f32,
    /// Total dissolved solids (ppm), 0 when invalid
    pub tds_ppm: f32,
    /// Temperature used for compensation (°C)
    pub temperature_c: f32,
    /// False when the probe looks disconnected
    pub is_valid: bool,
    /// Quality band, `NoSensor` when invalid
    pub quality: WaterQuality,
}

/// TDS reader with its own calibration profile
#[derive(Debug, Clone, Default)]
pub struct TdsSensor {
    calibration: TdsCalibration,
}

impl TdsSensor {
    /// Reader using a stored profile, rejected if it fails [`TdsCalibration::validate`]
    pub fn with_calibration(calibration: TdsCalibration) -> CalibrationResult<Self> {
        calibration.validate().map_err(|err| {
            log_warn!("TDS profile rejected: {}", err);
            err
        })?;
        Ok(Self { calibration })
    }

    /// Raw count from the TDS rank
    pub fn read_raw(&self, adc: &mut impl ChannelSampler) -> SensorResult<u16> {
        adc.sample(TDS_CHANNEL_RANK)
    }

    /// Probe-presence heuristic, see the module table
    pub fn is_probe_connected(counts: u16) -> bool {
        if counts == 0 {
            return false;
        }
        if (TDS_FLOATING_ADC_MIN..=TDS_FLOATING_ADC_MAX).contains(&counts) {
            return false;
        }
        if counts <= TDS_CLEAN_WATER_ADC_MAX || counts >= TDS_CONDUCTIVE_WATER_ADC_MIN {
            return true;
        }
        counts < TDS_FLOATING_ADC_MIN
    }

    /// Voltage to compensated conductivity (µS/cm)
    pub fn conductivity(&self, voltage_mv: f32, temperature_c: f32) -> f32 {
        let cal = &self.calibration;
        let raw = ((voltage_mv - cal.offset_mv) / ADC_VREF_MV) * TDS_FULL_SCALE_CONDUCTIVITY * cal.k_value;

        let compensation = 1.0 + cal.temp_coefficient * (temperature_c - cal.reference_temp_c);
        let compensated = if compensation > 0.0 && compensation.is_finite() {
            raw / compensation
        } else {
            raw
        };

        if compensated.is_nan() {
            return CONDUCTIVITY_MIN;
        }
        compensated.clamp(CONDUCTIVITY_MIN, CONDUCTIVITY_MAX)
    }

    /// Conductivity to TDS (ppm)
    pub fn tds_from_conductivity(conductivity_us_cm: f32) -> f32 {
        (conductivity_us_cm * TDS_CONVERSION_FACTOR).clamp(TDS_MIN_PPM, TDS_MAX_PPM)
    }

    /// Full measurement at `temperature_c`
    pub fn read(&self, adc: &mut impl ChannelSampler, temperature_c: f32) -> SensorResult<TdsReading> {
        let raw_count = self.read_raw(adc)?;
        let voltage_mv = counts_to_millivolts(raw_count);

        if !Self::is_probe_connected(raw_count) {
            log_warn!("TDS probe disconnected: raw {}", raw_count);
            return Ok(TdsReading {
                raw_count,
                voltage_mv,
                conductivity_us_cm: 0.0,
                tds_ppm: 0.0,
                temperature_c,
                is_valid: false,
                quality: WaterQuality::NoSensor,
            });
        }

        let conductivity_us_cm = self.conductivity(voltage_mv, temperature_c);
        let tds_ppm = Self::tds_from_conductivity(conductivity_us_cm);

        Ok(TdsReading {
            raw_count,
            voltage_mv,
            conductivity_us_cm,
            tds_ppm,
            temperature_c,
            is_valid: true,
            quality: WaterQuality::from_tds(tds_ppm),
        })
    }

    /// Measurement at the reference temperature
    pub fn read_default(&self, adc: &mut impl ChannelSampler) -> SensorResult<TdsReading> {
        self.read(adc, TDS_REFERENCE_TEMP_C)
    }

    /// Valid flag plus TDS inside the measurable range
    pub fn is_reading_valid(reading: &TdsReading) -> bool {
        reading.is_valid && (TDS_MIN_PPM..=TDS_MAX_PPM).contains(&reading.tds_ppm)
    }

    /// See [`TdsCalibration::calibrate`]
    pub fn calibrate(&mut self, known_tds_ppm: f32, voltage_mv: f32) -> CalibrationResult<()> {
        self.calibration.calibrate(known_tds_ppm, voltage_mv).map_err(|err| {
            log_warn!("TDS calibration rejected: {}", err);
            err
        })
    }

    /// Active profile
    pub fn calibration(&self) -> &TdsCalibration {
        &self.calibration
    }

    /// Back to factory defaults
    pub fn reset_calibration(&mut self) {
        self.calibration.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct FixedChannel(u16);

    impl ChannelSampler for FixedChannel {
        fn sample(&mut self, channel: usize) -> SensorResult<u16> {
            assert_eq!(channel, TDS_CHANNEL_RANK);
            Ok(self.0)
        }
    }

    #[test]
    fn connectivity_bands() {
        assert!(!TdsSensor::is_probe_connected(0));
        assert!(TdsSensor::is_probe_connected(1));
        assert!(TdsSensor::is_probe_connected(400));
        assert!(TdsSensor::is_probe_connected(800));
        assert!(TdsSensor::is_probe_connected(1000));
        assert!(TdsSensor::is_probe_connected(1199));
        assert!(!TdsSensor::is_probe_connected(1200));
        assert!(!TdsSensor::is_probe_connected(1800));
        assert!(!TdsSensor::is_probe_connected(2400));
        assert!(!TdsSensor::is_probe_connected(2450));
        assert!(TdsSensor::is_probe_connected(2500));
        assert!(TdsSensor::is_probe_connected(2600));
    }

    #[test]
    fn quality_boundaries() {
        assert_eq!(WaterQuality::from_tds(0.0), WaterQuality::Excellent);
        assert_eq!(WaterQuality::from_tds(300.0), WaterQuality::Excellent);
        assert_eq!(WaterQuality::from_tds(300.01), WaterQuality::Good);
        assert_eq!(WaterQuality::from_tds(600.0), WaterQuality::Good);
        assert_eq!(WaterQuality::from_tds(900.0), WaterQuality::Fair);
        assert_eq!(WaterQuality::from_tds(1200.0), WaterQuality::Poor);
        assert_eq!(WaterQuality::from_tds(2000.0), WaterQuality::Unacceptable);
        assert_eq!(WaterQuality::from_tds(2000.01), WaterQuality::Dangerous);
        assert_eq!(WaterQuality::NoSensor.code(), 0);
        assert_eq!(WaterQuality::Dangerous.code(), 6);
    }

    #[test]
    fn clean_water_reading() {
        let sensor = TdsSensor::default();
        let reading = sensor.read_default(&mut FixedChannel(400)).unwrap();

        // 400 counts -> 322.3 mV -> 195.4 µS/cm -> 97.7 ppm
        assert!(reading.is_valid);
        assert!((reading.conductivity_us_cm - 195.36).abs() < 0.1);
        assert!((reading.tds_ppm - 97.68).abs() < 0.1);
        assert_eq!(reading.quality, WaterQuality::Excellent);
        assert!(TdsSensor::is_reading_valid(&reading));
    }

    #[test]
    fn warm_water_reads_lower() {
        let sensor = TdsSensor::default();
        let at_ref = sensor.conductivity(1000.0, 25.0);
        let warm = sensor.conductivity(1000.0, 35.0);
        assert!((warm - at_ref / 1.2).abs() < 1e-3);
    }

    #[test]
    fn floating_input_reports_no_sensor() {
        let reading = TdsSensor::default().read(&mut FixedChannel(1800), 20.0).unwrap();
        assert!(!reading.is_valid);
        assert_eq!(reading.tds_ppm, 0.0);
        assert_eq!(reading.conductivity_us_cm, 0.0);
        assert_eq!(reading.quality, WaterQuality::NoSensor);
        assert!(!TdsSensor::is_reading_valid(&reading));
    }

    #[test]
    fn conductive_water_clamps() {
        let mut sensor = TdsSensor::default();
        sensor.calibrate(2000.0, 1000.0).unwrap();
        let reading = sensor.read_default(&mut FixedChannel(4000)).unwrap();
        assert_eq!(reading.conductivity_us_cm, 3000.0);
        assert_eq!(reading.tds_ppm, 1500.0);
    }

    #[test]
    fn degenerate_profile_is_refused() {
        let broken = TdsCalibration { k_value: f32::NAN, ..Default::default() };
        assert!(TdsSensor::with_calibration(broken).is_err());

        let doubled = TdsCalibration { k_value: 2.0, ..Default::default() };
        let sensor = TdsSensor::with_calibration(doubled).unwrap();
        let base = TdsSensor::default().conductivity(1000.0, 25.0);
        assert!((sensor.conductivity(1000.0, 25.0) - 2.0 * base).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn tds_stays_in_range(
            counts in 0u16..=4095,
            temp in -55.0f32..=125.0,
            known in 1.0f32..=2000.0,
            cal_mv in 1.0f32..=3300.0,
        ) {
            let mut sensor = TdsSensor::default();
            sensor.calibrate(known, cal_mv).unwrap();
            let reading = sensor.read(&mut FixedChannel(counts), temp).unwrap();
            prop_assert!((0.0..=3000.0).contains(&reading.conductivity_us_cm));
            prop_assert!((0.0..=2000.0).contains(&reading.tds_ppm));
        }
    }
}
