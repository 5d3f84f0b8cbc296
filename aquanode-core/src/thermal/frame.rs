//! Decoded 8x8 thermal frame

use crate::constants::thermal::{
    THERMAL_CELSIUS_PER_LSB, THERMAL_FRAME_BYTES, THERMAL_GRID_WIDTH, THERMAL_PIXEL_COUNT,
};

/// One full capture, row-major
///
/// Captures replace the whole frame; there are no partial updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalFrame {
    raw: [i16; THERMAL_PIXEL_COUNT],
    celsius: [f32; THERMAL_PIXEL_COUNT],
}

impl ThermalFrame {
    /// Frame from raw pixel counts
    pub fn from_raw(raw: [i16; THERMAL_PIXEL_COUNT]) -> Self {
        let mut celsius = [0.0f32; THERMAL_PIXEL_COUNT];
        for (c, &r) in celsius.iter_mut().zip(raw.iter()) {
            *c = r as f32 * THERMAL_CELSIUS_PER_LSB;
        }
        Self { raw, celsius }
    }

    /// Frame from the 128-byte pixel register block (LSB first per pixel)
    pub fn from_register_block(block: &[u8; THERMAL_FRAME_BYTES]) -> Self {
        let mut raw = [0i16; THERMAL_PIXEL_COUNT];
        for (r, pair) in raw.iter_mut().zip(block.chunks_exact(2)) {
            *r = i16::from_le_bytes([pair[0], pair[1]]);
        }
        Self::from_raw(raw)
    }

    /// Every pixel at the same raw count
    pub fn uniform(raw: i16) -> Self {
        Self::from_raw([raw; THERMAL_PIXEL_COUNT])
    }

    /// Raw counts
    pub fn raw(&self) -> &[i16; THERMAL_PIXEL_COUNT] {
        &self.raw
    }

    /// Pixel temperatures (°C)
    pub fn celsius(&self) -> &[f32; THERMAL_PIXEL_COUNT] {
        &self.celsius
    }

    /// Temperature at `(row, col)`, `None` outside the grid
    pub fn pixel(&self, row: usize, col: usize) -> Option<f32> {
        if col >= THERMAL_GRID_WIDTH {
            return None;
        }
        self.celsius.get(row * THERMAL_GRID_WIDTH + col).copied()
    }
}

impl Default for ThermalFrame {
    fn default() -> Self {
        Self::uniform(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_register_block() {
        let mut block = [0u8; THERMAL_FRAME_BYTES];
        block[0] = 0x64; // pixel 0 = 100
        block[2] = 0xFC; // pixel 1 = -4
        block[3] = 0xFF;
        block[126] = 0x00; // pixel 63 = 0x0100 = 256
        block[127] = 0x01;

        let frame = ThermalFrame::from_register_block(&block);
        assert_eq!(frame.raw()[0], 100);
        assert_eq!(frame.celsius()[0], 25.0);
        assert_eq!(frame.celsius()[1], -1.0);
        assert_eq!(frame.raw()[63], 256);
        assert_eq!(frame.pixel(7, 7), Some(64.0));
    }

    #[test]
    fn pixel_is_row_major() {
        let mut raw = [0i16; THERMAL_PIXEL_COUNT];
        raw[8 + 3] = 40;
        let frame = ThermalFrame::from_raw(raw);
        assert_eq!(frame.pixel(1, 3), Some(10.0));
        assert_eq!(frame.pixel(0, 8), None);
        assert_eq!(frame.pixel(8, 0), None);
    }
}
