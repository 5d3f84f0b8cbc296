//! DS18B20 scratchpad decoding
//!
//! The bus driver lives in `aquanode-drivers`; this is the pure conversion
//! step so it can be checked without hardware.

use crate::constants::onewire::{DS18B20_CELSIUS_PER_LSB, DS18B20_MAX_C, DS18B20_MIN_C};
use crate::errors::{SensorError, SensorResult};

/// Temperature from the first two scratchpad bytes
///
/// Values outside the sensor's physical range are read errors, usually a
/// corrupted scratchpad transfer.
pub fn decode_scratchpad(lsb: u8, msb: u8) -> SensorResult<f32> {
    let raw = i16::from_le_bytes([lsb, msb]);
    let celsius = raw as f32 * DS18B20_CELSIUS_PER_LSB;

    if !(DS18B20_MIN_C..=DS18B20_MAX_C).contains(&celsius) {
        return Err(SensorError::OutOfRange {
            value: celsius,
            min: DS18B20_MIN_C,
            max: DS18B20_MAX_C,
        });
    }
    Ok(celsius)
}
