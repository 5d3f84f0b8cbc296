//! Canned readings and frames

use aquanode_core::{constants::thermal::THERMAL_PIXEL_COUNT, EnvironmentReading, ThermalFrame};

/// Indoor bench conditions
pub fn lab_environment() -> EnvironmentReading {
    EnvironmentReading { pressure_hpa: 1013.2, temperature_c: 22.4, humidity_pct: 48.5 }
}

/// Pond surface seen from above: cool water, one warm pixel block
pub fn pond_with_warm_corner() -> ThermalFrame {
    let mut raw = [72i16; THERMAL_PIXEL_COUNT]; // 18 °C
    for row in 0..2 {
        for col in 0..2 {
            raw[row * 8 + col] = 140; // 35 °C
        }
    }
    ThermalFrame::from_raw(raw)
}

/// Frame with a gradient across columns, −20 °C .. +50 °C
pub fn column_gradient() -> ThermalFrame {
    let mut raw = [0i16; THERMAL_PIXEL_COUNT];
    for (i, px) in raw.iter_mut().enumerate() {
        let col = (i % 8) as i16;
        *px = -80 + col * 40;
    }
    ThermalFrame::from_raw(raw)
}
