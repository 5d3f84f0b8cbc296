//! Cayenne-LPP Style Payload Buffer
//!
//! ## Wire Format
//!
//! Every entry is a channel byte, a type byte and a fixed-width big-endian
//! value:
//!
//! ```text
//! ┌─────────┬──────────┬──────────────────────┐
//! │ channel │ type tag │ value (1 or 2 bytes) │
//! └─────────┴──────────┴──────────────────────┘
//!
//! type  tag  width  value
//! ----  ---  -----  ---------------------------
//! DI      0      1  raw byte
//! AI      2      2  i16, value × 100
//! TEMP  103      2  i16, °C × 10
//! RH    104      2  u16, % × 2
//! BARO  115      2  u16, hPa × 10
//! CONC  125      2  u16, ppm
//! ```
//!
//! Humidity uses two bytes so that `% × 2` never wraps; the network-side
//! decoder for this node expects that width. TDS travels as a concentration
//! rather than an analog input so the full 0..=2000 ppm range fits.
//!
//! ## Capacity
//!
//! The buffer never grows past its limit. An entry that does not fit is
//! rejected whole with [`EncodeError::CapacityExceeded`] and nothing is
//! written, so the bytes already present stay a well-formed payload.
//!
//! Scaled values are rounded and then saturated to the field width. A
//! saturated value is logged since the receiver cannot tell it apart from a
//! real reading at the limit.

use heapless::Vec;

use crate::constants::payload::*;
use crate::errors::{EncodeError, EncodeResult};

/// Backing storage bound, the largest LoRaWAN application payload
pub const PAYLOAD_CAPACITY: usize = LORAWAN_MAX_APP_PAYLOAD;

/// Width of the value field for `type_tag`, `None` for unknown tags
pub fn value_width(type_tag: u8) -> Option<usize> {
    match type_tag {
        LPP_DIGITAL_INPUT => Some(LPP_DIGITAL_INPUT_SIZE),
        LPP_ANALOG_INPUT => Some(LPP_ANALOG_INPUT_SIZE),
        LPP_TEMPERATURE => Some(LPP_TEMPERATURE_SIZE),
        LPP_RELATIVE_HUMIDITY => Some(LPP_RELATIVE_HUMIDITY_SIZE),
        LPP_BAROMETRIC_PRESSURE => Some(LPP_BAROMETRIC_PRESSURE_SIZE),
        LPP_CONCENTRATION => Some(LPP_CONCENTRATION_SIZE),
        _ => None,
    }
}

fn scale_i16(value: f32, factor: f32, what: &'static str) -> i16 {
    let scaled = libm::roundf(value * factor);
    if !(i16::MIN as f32..=i16::MAX as f32).contains(&scaled) {
        log_warn!("{} value {} saturated", what, value);
    }
    // `as` saturates and maps NaN to 0
    scaled as i16
}

fn scale_u16(value: f32, factor: f32, what: &'static str) -> u16 {
    let scaled = libm::roundf(value * factor);
    if !(0.0..=u16::MAX as f32).contains(&scaled) {
        log_warn!("{} value {} saturated", what, value);
    }
    scaled as u16
}

/// One decoded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LppEntry<'a> {
    /// Channel id
    pub channel: u8,
    /// Type tag
    pub type_tag: u8,
    /// Raw big-endian value bytes
    pub value: &'a [u8],
}

impl LppEntry<'_> {
    /// Value as a signed 16-bit integer (AI, TEMP)
    pub fn as_i16(&self) -> Option<i16> {
        match *self.value {
            [hi, lo] => Some(i16::from_be_bytes([hi, lo])),
            _ => None,
        }
    }

    /// Value as an unsigned 16-bit integer (RH, BARO, CONC)
    pub fn as_u16(&self) -> Option<u16> {
        match *self.value {
            [hi, lo] => Some(u16::from_be_bytes([hi, lo])),
            _ => None,
        }
    }

    /// Value as a single byte (DI)
    pub fn as_u8(&self) -> Option<u8> {
        match *self.value {
            [b] => Some(b),
            _ => None,
        }
    }
}

/// Bounded, channel-tagged uplink payload
///
/// Built fresh for every transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedPayload {
    bytes: Vec<u8, PAYLOAD_CAPACITY>,
    limit: usize,
    dropped: usize,
}

impl Default for EncodedPayload {
    fn default() -> Self {
        Self::new(PAYLOAD_CAPACITY)
    }
}

impl EncodedPayload {
    /// Empty payload bounded by `limit` bytes (at most 242)
    pub fn new(limit: usize) -> Self {
        Self { bytes: Vec::new(), limit: limit.min(PAYLOAD_CAPACITY), dropped: 0 }
    }

    /// Append one raw entry
    pub fn push_entry(&mut self, channel: u8, type_tag: u8, value: &[u8]) -> EncodeResult<()> {
        let requested = LPP_HEADER_SIZE + value.len();
        if self.bytes.len() + requested > self.limit {
            self.dropped += 1;
            return Err(EncodeError::CapacityExceeded {
                used: self.bytes.len(),
                requested,
                capacity: self.limit,
            });
        }

        // Cannot fail: limit <= PAYLOAD_CAPACITY was checked above
        let _ = self.bytes.push(channel);
        let _ = self.bytes.push(type_tag);
        let _ = self.bytes.extend_from_slice(value);
        Ok(())
    }

    /// Digital input, one raw byte
    pub fn add_digital_input(&mut self, channel: u8, value: u8) -> EncodeResult<()> {
        self.push_entry(channel, LPP_DIGITAL_INPUT, &[value])
    }

    /// Analog input with 0.01 resolution
    pub fn add_analog_input(&mut self, channel: u8, value: f32) -> EncodeResult<()> {
        let v = scale_i16(value, 100.0, "analog");
        self.push_entry(channel, LPP_ANALOG_INPUT, &v.to_be_bytes())
    }

    /// Temperature with 0.1 °C resolution
    pub fn add_temperature(&mut self, channel: u8, celsius: f32) -> EncodeResult<()> {
        let v = scale_i16(celsius, 10.0, "temperature");
        self.push_entry(channel, LPP_TEMPERATURE, &v.to_be_bytes())
    }

    /// Relative humidity with 0.5 % resolution
    pub fn add_relative_humidity(&mut self, channel: u8, percent: f32) -> EncodeResult<()> {
        let v = scale_u16(percent, 2.0, "humidity");
        self.push_entry(channel, LPP_RELATIVE_HUMIDITY, &v.to_be_bytes())
    }

    /// Barometric pressure with 0.1 hPa resolution
    pub fn add_barometric_pressure(&mut self, channel: u8, hpa: f32) -> EncodeResult<()> {
        let v = scale_u16(hpa, 10.0, "pressure");
        self.push_entry(channel, LPP_BAROMETRIC_PRESSURE, &v.to_be_bytes())
    }

    /// Concentration in whole ppm
    pub fn add_concentration(&mut self, channel: u8, ppm: f32) -> EncodeResult<()> {
        let v = scale_u16(ppm, 1.0, "concentration");
        self.push_entry(channel, LPP_CONCENTRATION, &v.to_be_bytes())
    }

    /// Encoded bytes, ready for the radio
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes used
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// No entries yet
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Size bound
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes still free
    pub fn remaining(&self) -> usize {
        self.limit - self.bytes.len()
    }

    /// Entries rejected for lack of space
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Walk the entries back out of the buffer
    pub fn entries(&self) -> Entries<'_> {
        Entries { rest: &self.bytes }
    }

    /// First entry on `channel`
    pub fn find(&self, channel: u8) -> Option<LppEntry<'_>> {
        self.entries().find(|e| e.channel == channel)
    }
}

/// Iterator over the entries of an encoded buffer
///
/// Stops at the first truncated entry or unknown type tag.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    rest: &'a [u8],
}

impl<'a> Entries<'a> {
    /// Iterate entries of an arbitrary LPP buffer
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = LppEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&channel, rest) = self.rest.split_first()?;
        let (&type_tag, rest) = rest.split_first()?;
        let width = value_width(type_tag)?;
        if rest.len() < width {
            return None;
        }
        let (value, rest) = rest.split_at(width);
        self.rest = rest;
        Some(LppEntry { channel, type_tag, value })
    }
}
