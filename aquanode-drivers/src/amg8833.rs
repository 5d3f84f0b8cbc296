//! AMG8833 Grid-EYE thermal camera
//!
//! ## Start-up
//!
//! ```text
//! RESET ← 0x3F   (initial reset)      wait 100 ms
//! PCTL  ← 0x00   (normal mode)
//! FPSC  ← 0x00   (10 fps)             wait 100 ms
//! ```
//!
//! ## Capture
//!
//! A capture first reads the status register as a presence probe, waits
//! 100 ms for the thermistor to settle and then reads all 64 pixel
//! registers (128 bytes from 0x80) in a single transaction.
//!
//! Between uplinks the camera sleeps (PCTL ← 0x10). Waking takes 50 ms.
//! None of these delays are tunable; shorter waits return stale or zeroed
//! frames.

use aquanode_core::constants::thermal::*;
use aquanode_core::ports::ThermalCamera;
use aquanode_core::{SensorError, SensorResult, ThermalFrame};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use thiserror_no_std::Error;

/// AMG8833 failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Amg8833Error<E> {
    /// I2C transfer failed
    #[error("I2C transfer failed")]
    I2c(E),

    /// Status register probe got no answer
    #[error("AMG8833 not present")]
    NotPresent,

    /// Capture attempted before `init`
    #[error("AMG8833 not initialized")]
    NotInitialized,
}

impl<E> From<Amg8833Error<E>> for SensorError {
    fn from(err: Amg8833Error<E>) -> Self {
        match err {
            Amg8833Error::I2c(_) => SensorError::Bus { source_name: "i2c" },
            Amg8833Error::NotPresent => SensorError::NotPresent { sensor: "AMG8833" },
            Amg8833Error::NotInitialized => SensorError::NotInitialized,
        }
    }
}

/// AMG8833 on an I2C bus
pub struct Amg8833<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    initialized: bool,
}

impl<I2C: I2c, D: DelayNs> Amg8833<I2C, D> {
    /// Driver at the default address (0x69)
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, AMG8833_ADDRESS)
    }

    /// Driver at a custom address (0x68 with AD_SELECT low)
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address, initialized: false }
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Amg8833Error<I2C::Error>> {
        self.i2c.write(self.address, &[register, value]).map_err(Amg8833Error::I2c)
    }

    /// Reset and start continuous sampling at 10 fps
    pub fn init(&mut self) -> Result<(), Amg8833Error<I2C::Error>> {
        self.initialized = false;

        self.write_register(AMG8833_REG_RESET, AMG8833_INITIAL_RESET)?;
        self.delay.delay_ms(AMG8833_RESET_SETTLE_MS);

        self.write_register(AMG8833_REG_POWER_CTRL, AMG8833_MODE_NORMAL)?;
        self.write_register(AMG8833_REG_FRAME_RATE, AMG8833_FPS_10)?;
        self.delay.delay_ms(AMG8833_CONFIG_SETTLE_MS);

        self.initialized = true;
        Ok(())
    }

    /// Whether `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Status register read as a presence probe
    pub fn is_present(&mut self) -> bool {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(self.address, &[AMG8833_REG_STATUS], &mut status)
            .is_ok()
    }

    /// Probe, settle and read one frame
    pub fn read_frame(&mut self) -> Result<ThermalFrame, Amg8833Error<I2C::Error>> {
        if !self.initialized {
            return Err(Amg8833Error::NotInitialized);
        }
        if !self.is_present() {
            return Err(Amg8833Error::NotPresent);
        }
        self.delay.delay_ms(AMG8833_CAPTURE_SETTLE_MS);

        let mut block = [0u8; THERMAL_FRAME_BYTES];
        self.i2c
            .write_read(self.address, &[AMG8833_REG_PIXEL_BASE], &mut block)
            .map_err(Amg8833Error::I2c)?;

        Ok(ThermalFrame::from_register_block(&block))
    }

    /// Enter sleep mode
    pub fn enter_sleep(&mut self) -> Result<(), Amg8833Error<I2C::Error>> {
        self.write_register(AMG8833_REG_POWER_CTRL, AMG8833_MODE_SLEEP)
    }

    /// Return to normal mode and wait for it to settle
    pub fn wake_up(&mut self) -> Result<(), Amg8833Error<I2C::Error>> {
        self.write_register(AMG8833_REG_POWER_CTRL, AMG8833_MODE_NORMAL)?;
        self.delay.delay_ms(AMG8833_WAKE_SETTLE_MS);
        Ok(())
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C: I2c, D: DelayNs> ThermalCamera for Amg8833<I2C, D> {
    fn wake(&mut self) -> SensorResult<()> {
        self.wake_up().map_err(SensorError::from)
    }

    fn capture(&mut self) -> SensorResult<ThermalFrame> {
        self.read_frame().map_err(SensorError::from)
    }

    fn sleep(&mut self) -> SensorResult<()> {
        self.enter_sleep().map_err(SensorError::from)
    }
}
