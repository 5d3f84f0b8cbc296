//! Frame statistics

use super::frame::ThermalFrame;
use crate::constants::thermal::THERMAL_PIXEL_COUNT;

/// Min, max and mean of one frame (°C)
///
/// Recomputed for every capture, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermalStats {
    /// Coldest pixel
    pub min: f32,
    /// Hottest pixel
    pub max: f32,
    /// Arithmetic mean
    pub avg: f32,
}

impl ThermalStats {
    /// Single linear scan over the frame
    pub fn from_frame(frame: &ThermalFrame) -> Self {
        let pixels = frame.celsius();
        let mut min = pixels[0];
        let mut max = pixels[0];
        let mut sum = 0.0f32;

        for &c in pixels.iter() {
            if c < min {
                min = c;
            }
            if c > max {
                max = c;
            }
            sum += c;
        }

        Self { min, max, avg: sum / THERMAL_PIXEL_COUNT as f32 }
    }

    /// Hottest minus coldest pixel
    pub fn spread(&self) -> f32 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_frame() {
        let stats = ThermalStats::from_frame(&ThermalFrame::uniform(100));
        assert_eq!(stats, ThermalStats { min: 25.0, max: 25.0, avg: 25.0 });
        assert_eq!(stats.spread(), 0.0);
    }

    #[test]
    fn hot_spot() {
        let mut raw = [80i16; THERMAL_PIXEL_COUNT];
        raw[27] = 160;
        raw[0] = -8;
        let stats = ThermalStats::from_frame(&ThermalFrame::from_raw(raw));

        assert_eq!(stats.min, -2.0);
        assert_eq!(stats.max, 40.0);
        // (62 * 20 + 40 - 2) / 64
        assert!((stats.avg - 19.968_75).abs() < 1e-4);
    }
}
