//! Thermal wire encodings
//!
//! Format A is a verbatim copy of the pixel registers. Format B trades
//! resolution (~0.4 °C per step) for half the airtime.

use super::frame::ThermalFrame;
use crate::constants::thermal::*;
use crate::errors::{EncodeError, EncodeResult};

/// Encoding chosen for a given byte budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThermalEncoding {
    /// Format A, 128 bytes
    Full,
    /// Format B, 64 bytes
    Compressed,
}

impl ThermalEncoding {
    /// Best encoding that fits `budget`, `None` if neither does
    pub fn for_budget(budget: usize) -> Option<Self> {
        if budget >= THERMAL_FULL_ENCODING_BYTES {
            Some(Self::Full)
        } else if budget >= THERMAL_COMPRESSED_ENCODING_BYTES {
            Some(Self::Compressed)
        } else {
            None
        }
    }

    /// Bytes written by this encoding
    pub fn encoded_len(self) -> usize {
        match self {
            Self::Full => THERMAL_FULL_ENCODING_BYTES,
            Self::Compressed => THERMAL_COMPRESSED_ENCODING_BYTES,
        }
    }
}

/// Format B byte for one pixel
#[inline]
pub fn compress_pixel(celsius: f32) -> u8 {
    let clamped = celsius.clamp(THERMAL_COMPRESS_MIN_C, THERMAL_COMPRESS_MAX_C);
    let scaled = libm::roundf((clamped - THERMAL_COMPRESS_MIN_C) * THERMAL_COMPRESS_SCALE);
    scaled as u8
}

/// Approximate temperature of a Format B byte
#[inline]
pub fn decompress_pixel(byte: u8) -> f32 {
    byte as f32 / THERMAL_COMPRESS_SCALE + THERMAL_COMPRESS_MIN_C
}

/// Encode `frame` into `out`, using the whole slice as the budget
///
/// Returns the number of bytes written. A budget below 64 bytes cannot hold
/// either format and is reported as [`EncodeError::BufferTooSmall`].
pub fn encode_for_transmission(frame: &ThermalFrame, out: &mut [u8]) -> EncodeResult<usize> {
    let encoding = ThermalEncoding::for_budget(out.len()).ok_or(EncodeError::BufferTooSmall {
        required: THERMAL_COMPRESSED_ENCODING_BYTES,
        available: out.len(),
    })?;

    match encoding {
        ThermalEncoding::Full => {
            for (dst, raw) in out.chunks_exact_mut(2).zip(frame.raw().iter()) {
                dst.copy_from_slice(&raw.to_le_bytes());
            }
        }
        ThermalEncoding::Compressed => {
            for (dst, &c) in out.iter_mut().zip(frame.celsius().iter()) {
                *dst = compress_pixel(c);
            }
        }
    }

    Ok(encoding.encoded_len())
}

/// Frame back from a Format A buffer
pub fn decode_full(bytes: &[u8]) -> EncodeResult<ThermalFrame> {
    let block: &[u8; THERMAL_FRAME_BYTES] = bytes
        .get(..THERMAL_FRAME_BYTES)
        .and_then(|b| b.try_into().ok())
        .ok_or(EncodeError::BufferTooSmall {
            required: THERMAL_FRAME_BYTES,
            available: bytes.len(),
        })?;
    Ok(ThermalFrame::from_register_block(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn budget_selects_format() {
        assert_eq!(ThermalEncoding::for_budget(242), Some(ThermalEncoding::Full));
        assert_eq!(ThermalEncoding::for_budget(128), Some(ThermalEncoding::Full));
        assert_eq!(ThermalEncoding::for_budget(127), Some(ThermalEncoding::Compressed));
        assert_eq!(ThermalEncoding::for_budget(64), Some(ThermalEncoding::Compressed));
        assert_eq!(ThermalEncoding::for_budget(63), None);
    }

    #[test]
    fn compressed_uniform_frame() {
        let frame = ThermalFrame::uniform(100);
        let mut out = [0u8; 100];
        assert_eq!(encode_for_transmission(&frame, &mut out), Ok(64));
        assert!(out[..64].iter().all(|&b| b == 115));
        assert!(out[64..].iter().all(|&b| b == 0));
    }

    #[test]
    fn compression_clamps() {
        assert_eq!(compress_pixel(-40.0), 0);
        assert_eq!(compress_pixel(-20.0), 0);
        assert_eq!(compress_pixel(80.0), 255);
        assert_eq!(compress_pixel(200.0), 255);
        assert!((decompress_pixel(115) - 25.098).abs() < 0.01);
    }

    #[test]
    fn tiny_budget_fails() {
        let mut out = [0u8; 10];
        assert_eq!(
            encode_for_transmission(&ThermalFrame::default(), &mut out),
            Err(EncodeError::BufferTooSmall { required: 64, available: 10 })
        );
    }

    #[test]
    fn short_full_buffer_is_rejected() {
        assert!(decode_full(&[0u8; 127]).is_err());
    }

    proptest! {
        #[test]
        fn full_format_round_trips(raw in prop::array::uniform32(-2048i16..=2047)) {
            let mut pixels = [0i16; THERMAL_PIXEL_COUNT];
            pixels[..32].copy_from_slice(&raw);
            pixels[32..].copy_from_slice(&raw);
            pixels[63] = raw[0].wrapping_neg();
            let frame = ThermalFrame::from_raw(pixels);

            let mut out = [0u8; THERMAL_FULL_ENCODING_BYTES];
            prop_assert_eq!(encode_for_transmission(&frame, &mut out), Ok(128));
            let decoded = decode_full(&out).unwrap();
            prop_assert_eq!(decoded.raw(), frame.raw());
        }

        #[test]
        fn compression_is_monotonic(a in -40.0f32..=120.0, b in -40.0f32..=120.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compress_pixel(lo) <= compress_pixel(hi));
        }

        #[test]
        fn hotter_frame_compresses_hotter(base in -80i16..=320, delta in 0i16..=40) {
            let cool = ThermalFrame::uniform(base);
            let warm = ThermalFrame::uniform(base + delta);
            let (mut a, mut b) = ([0u8; 64], [0u8; 64]);
            encode_for_transmission(&cool, &mut a).unwrap();
            encode_for_transmission(&warm, &mut b).unwrap();

            let total = |bytes: &[u8; 64]| bytes.iter().map(|&x| x as u32).sum::<u32>();
            prop_assert!(total(&a) <= total(&b));
        }
    }
}
