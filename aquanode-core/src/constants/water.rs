//! Water Chemistry Calibration Constants
//!
//! Defaults and limits for the analog pH probe (DFRobot SEN0161 class) and
//! the conductivity/TDS probe. Values match the probe vendors' application
//! notes and WHO drinking-water guidance.

// ===== pH PROBE =====

/// pH of the neutral calibration buffer.
pub const PH_NEUTRAL: f32 = 7.0;

/// pH of the acid calibration buffer.
pub const PH_ACID: f32 = 4.0;

/// Default probe slope (mV per pH unit).
pub const PH_DEFAULT_SLOPE: f32 = 250.0;

/// Default probe output at pH 7.0 (mV).
pub const PH_DEFAULT_NEUTRAL_VOLTAGE_MV: f32 = 1800.0;

/// Probe output that maps to pH 14 in the linear model (mV).
pub const PH_ZERO_POINT_MV: f32 = 500.0;

/// Fractional pull towards neutral per °C away from the reference.
pub const PH_TEMP_COEFFICIENT: f32 = 0.003;

/// Reference temperature for pH compensation (°C).
pub const PH_REFERENCE_TEMP_C: f32 = 25.0;

/// Largest temperature coefficient a stored profile may carry (per °C).
pub const MAX_TEMP_COEFFICIENT: f32 = 1.0;

/// Lowest ADC count produced by a connected probe.
pub const PH_MIN_VALID_ADC: u16 = 100;

/// Highest ADC count produced by a connected probe.
pub const PH_MAX_VALID_ADC: u16 = 3900;

/// Bottom of the pH scale.
pub const PH_MIN: f32 = 0.0;

/// Top of the pH scale.
pub const PH_MAX: f32 = 14.0;

/// Readings below this are classed acidic.
pub const PH_ACIDIC_BELOW: f32 = 6.5;

/// Readings above this are classed alkaline.
pub const PH_ALKALINE_ABOVE: f32 = 7.5;

/// Minimum separation between two-point calibration voltages (mV).
pub const PH_MIN_CALIBRATION_SEPARATION_MV: f32 = 50.0;

// ===== CONDUCTIVITY / TDS PROBE =====

/// Default cell constant.
pub const TDS_DEFAULT_K_VALUE: f32 = 1.0;

/// Default voltage offset (mV).
pub const TDS_DEFAULT_OFFSET_MV: f32 = 0.0;

/// Conductivity at full-scale voltage with k = 1 (µS/cm).
pub const TDS_FULL_SCALE_CONDUCTIVITY: f32 = 2000.0;

/// Conductivity rise per °C (2 %/°C).
pub const TDS_TEMP_COEFFICIENT: f32 = 0.02;

/// Reference temperature for conductivity compensation (°C).
pub const TDS_REFERENCE_TEMP_C: f32 = 25.0;

/// ppm per µS/cm. Varies 0.4..0.8 with water composition.
pub const TDS_CONVERSION_FACTOR: f32 = 0.5;

/// Lowest reported conductivity (µS/cm).
pub const CONDUCTIVITY_MIN: f32 = 0.0;

/// Highest reported conductivity (µS/cm).
pub const CONDUCTIVITY_MAX: f32 = 3000.0;

/// Lowest reported TDS (ppm).
pub const TDS_MIN_PPM: f32 = 0.0;

/// Highest reported TDS (ppm).
pub const TDS_MAX_PPM: f32 = 2000.0;

/// Upper bound of the excellent band (ppm).
pub const TDS_EXCELLENT_MAX: f32 = 300.0;

/// Upper bound of the good band (ppm).
pub const TDS_GOOD_MAX: f32 = 600.0;

/// Upper bound of the fair band (ppm).
pub const TDS_FAIR_MAX: f32 = 900.0;

/// Upper bound of the poor band (ppm).
pub const TDS_POOR_MAX: f32 = 1200.0;

/// Upper bound of the unacceptable band (ppm).
pub const TDS_UNACCEPTABLE_MAX: f32 = 2000.0;

/// An unconnected TDS input floats inside this band (inclusive).
pub const TDS_FLOATING_ADC_MIN: u16 = 1200;

/// Upper edge of the floating-input band.
pub const TDS_FLOATING_ADC_MAX: u16 = 2400;

/// Counts at or below this come from a probe in clean water.
pub const TDS_CLEAN_WATER_ADC_MAX: u16 = 800;

/// Counts at or above this come from a probe in conductive water.
pub const TDS_CONDUCTIVE_WATER_ADC_MIN: u16 = 2500;
