//! Hardware ports
//!
//! The collaborators the transmission cycle talks to. Implementations live
//! in `aquanode-drivers` (real devices) or in test mocks. All calls are
//! synchronous and block the single execution context for as long as the
//! underlying bus transaction or mandated delay takes.

use crate::errors::SensorResult;
use crate::sensors::EnvironmentReading;
use crate::thermal::ThermalFrame;

/// Combined pressure / temperature / humidity sensor
pub trait EnvironmentSensor {
    /// One sample of all three quantities
    fn read_environment(&mut self) -> SensorResult<EnvironmentReading>;
}

/// Digital water-temperature probe
pub trait WaterTemperatureProbe {
    /// Temperature in °C, or an error when the probe is absent or misread
    fn read_temperature(&mut self) -> SensorResult<f32>;
}

/// 8x8 infrared array with a power-saving mode
pub trait ThermalCamera {
    /// Leave sleep mode, including the post-wake settling delay
    fn wake(&mut self) -> SensorResult<()>;

    /// Probe the device and read one full frame
    fn capture(&mut self) -> SensorResult<ThermalFrame>;

    /// Enter sleep mode
    fn sleep(&mut self) -> SensorResult<()>;
}

/// Result of handing a payload to the radio stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// Accepted for transmission
    Sent,
    /// Duty cycle busy, next slot in this many milliseconds
    RetryAfter(u32),
    /// Rejected
    Failed,
}

impl SendOutcome {
    /// Accepted for transmission
    pub fn is_sent(self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// LoRaWAN stack send primitive
///
/// Retries are the scheduler's business; the stack only reports.
pub trait Radio {
    /// Queue `payload` on `port`
    fn send(&mut self, port: u8, payload: &[u8], confirmed: bool) -> SendOutcome;
}

impl<T: EnvironmentSensor + ?Sized> EnvironmentSensor for &mut T {
    fn read_environment(&mut self) -> SensorResult<EnvironmentReading> {
        (**self).read_environment()
    }
}

impl<T: WaterTemperatureProbe + ?Sized> WaterTemperatureProbe for &mut T {
    fn read_temperature(&mut self) -> SensorResult<f32> {
        (**self).read_temperature()
    }
}

impl<T: ThermalCamera + ?Sized> ThermalCamera for &mut T {
    fn wake(&mut self) -> SensorResult<()> {
        (**self).wake()
    }

    fn capture(&mut self) -> SensorResult<ThermalFrame> {
        (**self).capture()
    }

    fn sleep(&mut self) -> SensorResult<()> {
        (**self).sleep()
    }
}

impl<T: Radio + ?Sized> Radio for &mut T {
    fn send(&mut self, port: u8, payload: &[u8], confirmed: bool) -> SendOutcome {
        (**self).send(port, payload, confirmed)
    }
}
