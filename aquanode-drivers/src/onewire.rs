//! Bit-banged one-wire master
//!
//! Drives a single open-drain line: `set_low` pulls the bus down,
//! `set_high` releases it to the external pull-up. Standard-speed slot
//! timings come from `aquanode_core::constants::onewire` and must be kept
//! exactly; the slave samples at fixed offsets from each falling edge.
//!
//! ```text
//! reset     ▔▔╲______480µs______╱▔▔70µs▔▔[sample]▔▔▔410µs▔▔▔
//! write 1   ▔▔╲_6µs_╱▔▔▔▔▔▔▔64µs▔▔▔▔▔▔▔▔
//! write 0   ▔▔╲_____60µs_____╱▔10µs▔
//! read      ▔▔╲3µs╱▔10µs▔[sample]▔▔▔53µs▔▔▔
//! ```
//!
//! Bytes go out and come back least-significant bit first.

use aquanode_core::constants::onewire::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// One-wire bus on an open-drain pin
pub struct OneWire<P, D> {
    pin: P,
    delay: D,
}

impl<P, D, E> OneWire<P, D>
where
    P: InputPin + OutputPin + ErrorType<Error = E>,
    D: DelayNs,
{
    /// Take ownership of the pin and a delay source
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Reset pulse; `true` when a device answered with a presence pulse
    pub fn reset(&mut self) -> Result<bool, E> {
        self.pin.set_low()?;
        self.delay.delay_us(ONEWIRE_RESET_LOW_US);
        self.pin.set_high()?;
        self.delay.delay_us(ONEWIRE_PRESENCE_SAMPLE_US);
        let present = self.pin.is_low()?;
        self.delay.delay_us(ONEWIRE_PRESENCE_RECOVERY_US);
        Ok(present)
    }

    /// One write slot
    pub fn write_bit(&mut self, bit: bool) -> Result<(), E> {
        let (low_us, release_us) = if bit {
            (ONEWIRE_WRITE_ONE_LOW_US, ONEWIRE_WRITE_ONE_RELEASE_US)
        } else {
            (ONEWIRE_WRITE_ZERO_LOW_US, ONEWIRE_WRITE_ZERO_RELEASE_US)
        };

        self.pin.set_low()?;
        self.delay.delay_us(low_us);
        self.pin.set_high()?;
        self.delay.delay_us(release_us);
        Ok(())
    }

    /// One read slot
    pub fn read_bit(&mut self) -> Result<bool, E> {
        self.pin.set_low()?;
        self.delay.delay_us(ONEWIRE_READ_LOW_US);
        self.pin.set_high()?;
        self.delay.delay_us(ONEWIRE_READ_SAMPLE_US);
        let bit = self.pin.is_high()?;
        self.delay.delay_us(ONEWIRE_READ_RECOVERY_US);
        Ok(bit)
    }

    /// Eight write slots, LSB first
    pub fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        for i in 0..8 {
            self.write_bit((byte >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Eight read slots, LSB first
    pub fn read_byte(&mut self) -> Result<u8, E> {
        let mut byte = 0u8;
        for i in 0..8 {
            if self.read_bit()? {
                byte |= 1 << i;
            }
        }
        Ok(byte)
    }

    /// Millisecond wait on the bus's delay source
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{event_log, Event, MockDelay, ScriptedPin};

    #[test]
    fn reset_timing_and_presence() {
        let log = event_log();
        let mut pin = ScriptedPin::new(log.clone());
        pin.presence(true).presence(false);
        let mut bus = OneWire::new(pin, MockDelay::new(log.clone()));

        assert_eq!(bus.reset(), Ok(true));
        assert_eq!(
            *log.borrow(),
            [
                Event::Low,
                Event::DelayUs(480),
                Event::Release,
                Event::DelayUs(70),
                Event::Sample,
                Event::DelayUs(410),
            ]
        );

        assert_eq!(bus.reset(), Ok(false));
    }

    #[test]
    fn write_slots() {
        let log = event_log();
        let mut bus = OneWire::new(ScriptedPin::new(log.clone()), MockDelay::new(log.clone()));

        bus.write_bit(true).unwrap();
        bus.write_bit(false).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Low,
                Event::DelayUs(6),
                Event::Release,
                Event::DelayUs(64),
                Event::Low,
                Event::DelayUs(60),
                Event::Release,
                Event::DelayUs(10),
            ]
        );
    }

    #[test]
    fn byte_goes_out_lsb_first() {
        let log = event_log();
        let mut bus = OneWire::new(ScriptedPin::new(log.clone()), MockDelay::new(log.clone()));

        bus.write_byte(0xCC).unwrap();
        let low_times: Vec<u32> = log
            .borrow()
            .windows(2)
            .filter_map(|w| match w {
                [Event::Low, Event::DelayUs(us)] => Some(*us),
                _ => None,
            })
            .collect();

        // 0xCC = 0b1100_1100
        assert_eq!(low_times, [60, 60, 6, 6, 60, 60, 6, 6]);
    }

    #[test]
    fn read_slot_samples_after_release() {
        let log = event_log();
        let mut pin = ScriptedPin::new(log.clone());
        pin.byte(0xA5);
        let mut bus = OneWire::new(pin, MockDelay::new(log.clone()));

        assert_eq!(bus.read_byte(), Ok(0xA5));
        assert_eq!(
            log.borrow()[..6],
            [
                Event::Low,
                Event::DelayUs(3),
                Event::Release,
                Event::DelayUs(10),
                Event::Sample,
                Event::DelayUs(53),
            ]
        );
    }
}
