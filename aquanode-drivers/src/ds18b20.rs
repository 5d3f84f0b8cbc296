//! DS18B20 water-temperature probe
//!
//! Single device on the bus, addressed with Skip ROM. A read takes roughly
//! 850 ms, dominated by the 12-bit conversion wait.
//!
//! If the probe does not answer the presence pulse at start-up, or before a
//! conversion, the driver marks itself non-functional and every read fails
//! fast with `NotPresent` until [`Ds18b20::init`] succeeds again.

use aquanode_core::constants::onewire::*;
use aquanode_core::ports::WaterTemperatureProbe;
use aquanode_core::sensors::decode_scratchpad;
use aquanode_core::{SensorError, SensorResult};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use thiserror_no_std::Error;

use crate::onewire::OneWire;

/// DS18B20 failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ds18b20Error<E> {
    /// GPIO error while driving the bus
    #[error("one-wire pin error")]
    Pin(E),

    /// No presence pulse, or the driver is non-functional
    #[error("DS18B20 not present")]
    NotPresent,

    /// Decoded temperature outside [-55, 125] °C
    #[error("DS18B20 reading {celsius} C out of range")]
    OutOfRange {
        /// Decoded value
        celsius: f32,
    },
}

impl<E> From<Ds18b20Error<E>> for SensorError {
    fn from(err: Ds18b20Error<E>) -> Self {
        match err {
            Ds18b20Error::Pin(_) => SensorError::Bus { source_name: "one-wire" },
            Ds18b20Error::NotPresent => SensorError::NotPresent { sensor: "DS18B20" },
            Ds18b20Error::OutOfRange { celsius } => SensorError::OutOfRange {
                value: celsius,
                min: DS18B20_MIN_C,
                max: DS18B20_MAX_C,
            },
        }
    }
}

/// DS18B20 on a dedicated one-wire bus
pub struct Ds18b20<P, D> {
    bus: OneWire<P, D>,
    functional: bool,
}

impl<P, D, E> Ds18b20<P, D>
where
    P: InputPin + OutputPin + ErrorType<Error = E>,
    D: DelayNs,
{
    /// Driver on `bus`; call [`init`](Self::init) before reading
    pub fn new(bus: OneWire<P, D>) -> Self {
        Self { bus, functional: false }
    }

    /// Let the bus settle, then probe for the device
    ///
    /// Returns whether the probe answered. Absence is not an error here;
    /// it only disables subsequent reads.
    pub fn init(&mut self) -> Result<bool, Ds18b20Error<E>> {
        self.bus.delay_ms(DS18B20_POWER_UP_MS);
        self.functional = self.bus.reset().map_err(Ds18b20Error::Pin)?;
        Ok(self.functional)
    }

    /// Whether the last presence probe succeeded
    pub fn is_functional(&self) -> bool {
        self.functional
    }

    /// Convert and read one temperature (°C)
    pub fn read_celsius(&mut self) -> Result<f32, Ds18b20Error<E>> {
        if !self.functional {
            return Err(Ds18b20Error::NotPresent);
        }

        if !self.bus.reset().map_err(Ds18b20Error::Pin)? {
            self.functional = false;
            return Err(Ds18b20Error::NotPresent);
        }
        self.command(DS18B20_CMD_CONVERT_T)?;
        self.bus.delay_ms(DS18B20_CONVERSION_MS);

        if !self.bus.reset().map_err(Ds18b20Error::Pin)? {
            return Err(Ds18b20Error::NotPresent);
        }
        self.command(DS18B20_CMD_READ_SCRATCHPAD)?;

        let lsb = self.bus.read_byte().map_err(Ds18b20Error::Pin)?;
        let msb = self.bus.read_byte().map_err(Ds18b20Error::Pin)?;

        decode_scratchpad(lsb, msb).map_err(|err| match err {
            SensorError::OutOfRange { value, .. } => Ds18b20Error::OutOfRange { celsius: value },
            _ => Ds18b20Error::NotPresent,
        })
    }

    fn command(&mut self, cmd: u8) -> Result<(), Ds18b20Error<E>> {
        self.bus.write_byte(DS18B20_CMD_SKIP_ROM).map_err(Ds18b20Error::Pin)?;
        self.bus.write_byte(cmd).map_err(Ds18b20Error::Pin)
    }

    /// Give back the bus
    pub fn release(self) -> OneWire<P, D> {
        self.bus
    }
}

impl<P, D, E> WaterTemperatureProbe for Ds18b20<P, D>
where
    P: InputPin + OutputPin + ErrorType<Error = E>,
    D: DelayNs,
{
    fn read_temperature(&mut self) -> SensorResult<f32> {
        self.read_celsius().map_err(SensorError::from)
    }
}
