//! Hand-written embedded-hal doubles
//!
//! Pin and delay share one event log so tests can check slot timing and
//! ordering together.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, InputPin, OutputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType as I2cErrorType, I2c, NoAcknowledgeSource, Operation};

/// Something that happened on the bus or the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Low,
    Release,
    Sample,
    DelayUs(u32),
    DelayMs(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Delay that only records
#[derive(Debug, Clone)]
pub struct MockDelay {
    pub log: EventLog,
}

impl MockDelay {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }

    pub fn total_ms(&self) -> u32 {
        self.log
            .borrow()
            .iter()
            .map(|e| match e {
                Event::DelayMs(ms) => *ms,
                _ => 0,
            })
            .sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayUs(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

/// Open-drain pin whose input levels come from a script
///
/// An empty script reads as a released (high) line.
#[derive(Debug)]
pub struct ScriptedPin {
    pub log: EventLog,
    pub levels: VecDeque<bool>,
}

impl ScriptedPin {
    pub fn new(log: EventLog) -> Self {
        Self { log, levels: VecDeque::new() }
    }

    /// Device pulls the line low during the presence window
    pub fn presence(&mut self, present: bool) -> &mut Self {
        self.levels.push_back(!present);
        self
    }

    /// Device answers eight read slots with `byte`, LSB first
    pub fn byte(&mut self, byte: u8) -> &mut Self {
        for bit in 0..8 {
            self.levels.push_back((byte >> bit) & 1 == 1);
        }
        self
    }

    fn sample(&mut self) -> bool {
        self.log.borrow_mut().push(Event::Sample);
        self.levels.pop_front().unwrap_or(true)
    }
}

impl PinErrorType for ScriptedPin {
    type Error = Infallible;
}

impl OutputPin for ScriptedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Release);
        Ok(())
    }
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.sample())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.sample())
    }
}

/// Register-file I2C device
#[derive(Debug)]
pub struct MockI2c {
    pub address: u8,
    pub registers: [u8; 256],
    pub present: bool,
    pub writes: Vec<Vec<u8>>,
    pointer: u8,
}

impl MockI2c {
    pub fn new(address: u8) -> Self {
        Self { address, registers: [0; 256], present: true, writes: Vec::new(), pointer: 0 }
    }
}

impl I2cErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if !self.present || address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    self.writes.push(bytes.to_vec());
                    if let Some((&reg, data)) = bytes.split_first() {
                        self.pointer = reg;
                        for (offset, &b) in data.iter().enumerate() {
                            self.registers[reg as usize + offset] = b;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for (offset, b) in buf.iter_mut().enumerate() {
                        *b = self.registers[self.pointer as usize + offset];
                    }
                }
            }
        }
        Ok(())
    }
}
