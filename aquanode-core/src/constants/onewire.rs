//! One-Wire and DS18B20 Timing
//!
//! Slot timings are bus-protocol requirements. The slave samples the line at
//! fixed offsets from the falling edge, so none of these may be shortened or
//! reordered. Source: Maxim DS18B20 datasheet, standard-speed slots.

/// Reset pulse: master holds the line low (µs).
pub const ONEWIRE_RESET_LOW_US: u32 = 480;

/// Delay after releasing the line before sampling presence (µs).
pub const ONEWIRE_PRESENCE_SAMPLE_US: u32 = 70;

/// Remainder of the presence window (µs).
pub const ONEWIRE_PRESENCE_RECOVERY_US: u32 = 410;

/// Write-1 slot: time the line is held low (µs).
pub const ONEWIRE_WRITE_ONE_LOW_US: u32 = 6;

/// Write-1 slot: time the line is released (µs).
pub const ONEWIRE_WRITE_ONE_RELEASE_US: u32 = 64;

/// Write-0 slot: time the line is held low (µs).
pub const ONEWIRE_WRITE_ZERO_LOW_US: u32 = 60;

/// Write-0 slot: recovery after release (µs).
pub const ONEWIRE_WRITE_ZERO_RELEASE_US: u32 = 10;

/// Read slot: initiating low pulse (µs).
pub const ONEWIRE_READ_LOW_US: u32 = 3;

/// Read slot: sample point after release (µs).
pub const ONEWIRE_READ_SAMPLE_US: u32 = 10;

/// Read slot: recovery before the next slot (µs).
pub const ONEWIRE_READ_RECOVERY_US: u32 = 53;

// ===== DS18B20 =====

/// Skip ROM: address the only device on the bus.
pub const DS18B20_CMD_SKIP_ROM: u8 = 0xCC;

/// Convert T: start a temperature conversion.
pub const DS18B20_CMD_CONVERT_T: u8 = 0x44;

/// Read Scratchpad: stream the 9-byte scratchpad.
pub const DS18B20_CMD_READ_SCRATCHPAD: u8 = 0xBE;

/// Bus settling before the first presence probe (ms).
pub const DS18B20_POWER_UP_MS: u32 = 500;

/// Wait after Convert T. The datasheet maximum for 12-bit is 750 ms.
pub const DS18B20_CONVERSION_MS: u32 = 800;

/// °C per LSB at 12-bit resolution.
pub const DS18B20_CELSIUS_PER_LSB: f32 = 0.0625;

/// Lowest temperature the sensor reports (°C).
pub const DS18B20_MIN_C: f32 = -55.0;

/// Highest temperature the sensor reports (°C).
pub const DS18B20_MAX_C: f32 = 125.0;
