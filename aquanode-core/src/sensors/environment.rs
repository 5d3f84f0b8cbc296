//! Ambient environment reading (barometric pressure, air temperature,
//! relative humidity) from the board's combined environmental sensor.

/// One environmental sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvironmentReading {
    /// Barometric pressure (hPa)
    pub pressure_hpa: f32,
    /// Air temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
}
