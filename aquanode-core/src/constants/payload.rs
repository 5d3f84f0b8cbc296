//! Uplink Payload Layout
//!
//! Channel assignments and type tags for the Cayenne-LPP style uplink. The
//! channel numbers are part of the decoder contract on the network server and
//! must not be renumbered.

// ===== LPP TYPE TAGS =====

/// Digital input, 1 byte unsigned.
pub const LPP_DIGITAL_INPUT: u8 = 0;

/// Analog input, 2 bytes signed, 0.01 per LSB.
pub const LPP_ANALOG_INPUT: u8 = 2;

/// Temperature, 2 bytes signed, 0.1 °C per LSB.
pub const LPP_TEMPERATURE: u8 = 103;

/// Relative humidity, 2 bytes unsigned, 0.5 % per LSB.
pub const LPP_RELATIVE_HUMIDITY: u8 = 104;

/// Barometric pressure, 2 bytes unsigned, 0.1 hPa per LSB.
pub const LPP_BAROMETRIC_PRESSURE: u8 = 115;

/// Concentration, 2 bytes unsigned, 1 ppm per LSB.
pub const LPP_CONCENTRATION: u8 = 125;

/// Digital input value width.
pub const LPP_DIGITAL_INPUT_SIZE: usize = 1;

/// Analog input value width.
pub const LPP_ANALOG_INPUT_SIZE: usize = 2;

/// Temperature value width.
pub const LPP_TEMPERATURE_SIZE: usize = 2;

/// Relative humidity value width.
pub const LPP_RELATIVE_HUMIDITY_SIZE: usize = 2;

/// Barometric pressure value width.
pub const LPP_BAROMETRIC_PRESSURE_SIZE: usize = 2;

/// Concentration value width.
pub const LPP_CONCENTRATION_SIZE: usize = 2;

/// Channel id + type tag.
pub const LPP_HEADER_SIZE: usize = 2;

// ===== ALWAYS-PRESENT CHANNELS =====

/// Barometric pressure from the environment sensor.
pub const CH_PRESSURE: u8 = 1;

/// Air temperature from the environment sensor.
pub const CH_AMBIENT_TEMPERATURE: u8 = 2;

/// Relative humidity from the environment sensor.
pub const CH_HUMIDITY: u8 = 3;

/// Water temperature from the DS18B20.
pub const CH_WATER_TEMPERATURE: u8 = 4;

/// Compensated pH.
pub const CH_PH: u8 = 5;

/// Total dissolved solids, sent as a concentration.
pub const CH_TDS: u8 = 6;

/// Node latitude.
pub const CH_LATITUDE: u8 = 7;

/// Node longitude.
pub const CH_LONGITUDE: u8 = 8;

// ===== FULL STRATEGY =====

/// Water quality class.
pub const CH_WATER_QUALITY: u8 = 9;

/// Coldest thermal pixel.
pub const CH_THERMAL_MIN: u8 = 10;

/// Hottest thermal pixel.
pub const CH_THERMAL_MAX: u8 = 11;

/// Mean thermal pixel.
pub const CH_THERMAL_AVG: u8 = 12;

/// Thermal grid width.
pub const CH_THERMAL_WIDTH: u8 = 20;

/// Thermal grid height.
pub const CH_THERMAL_HEIGHT: u8 = 21;

/// First per-pixel channel; pixel `i` travels on `CH_THERMAL_PIXEL_BASE + i`.
pub const CH_THERMAL_PIXEL_BASE: u8 = 30;

// ===== COMPACT STRATEGY =====

/// Water quality class (compact strategy).
pub const CH_COMPACT_WATER_QUALITY: u8 = 18;

/// Mean thermal pixel (compact strategy).
pub const CH_COMPACT_THERMAL_AVG: u8 = 19;

/// Offset added to thermal statistics so sub-zero scenes stay positive (°C).
pub const THERMAL_STAT_OFFSET_C: f32 = 100.0;

// ===== LORAWAN =====

/// Largest application payload the radio stack accepts (bytes).
pub const LORAWAN_MAX_APP_PAYLOAD: usize = 242;

/// Default uplink port.
pub const LORAWAN_DEFAULT_APP_PORT: u8 = 2;
