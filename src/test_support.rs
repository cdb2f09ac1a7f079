//! Builds the per-pin `embedded-hal-mock` expectations produced by a sequence of bus transfers, and a
//! recording pin type for checking the order of transitions across pins.
extern crate std;
use core::{cell::RefCell, convert::Infallible};
use std::{rc::Rc, vec::Vec};

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_mock::eh1::{
    delay::{CheckedDelay, Transaction as DelayTransaction},
    digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
};

use crate::{driver::parallel::ParallelConnection, BitMode, Timing, LCD_CMD_FUNCTIONSET};

fn level(high: bool) -> PinTransaction {
    PinTransaction::set(if high { PinState::High } else { PinState::Low })
}

pub(crate) struct BusExpectations {
    bit_mode: BitMode,
    timing: Timing,
    rs: Vec<PinTransaction>,
    enable: Vec<PinTransaction>,
    data: Vec<Vec<PinTransaction>>,
    delays: Vec<DelayTransaction>,
}

impl BusExpectations {
    /// Expectations for a bus using the default timing profile.
    pub fn new(bit_mode: BitMode) -> Self {
        Self {
            bit_mode,
            timing: Timing::default(),
            rs: Vec::new(),
            enable: Vec::new(),
            data: (0..bit_mode.data_pin_count()).map(|_| Vec::new()).collect(),
            delays: Vec::new(),
        }
    }

    /// Must be called before any transfer is added.
    pub fn with_timing(&mut self, timing: Timing) -> &mut Self {
        self.timing = timing;
        self
    }

    pub fn wait(&mut self, us: u32) -> &mut Self {
        self.delays.push(DelayTransaction::delay_us(us));
        self
    }

    pub fn control_lines_low(&mut self) -> &mut Self {
        self.rs.push(level(false));
        self.enable.push(level(false));
        self
    }

    pub fn pulse(&mut self) -> &mut Self {
        self.enable.push(level(false));
        self.enable.push(level(true));
        self.enable.push(level(false));
        let timing = self.timing;
        self.wait(timing.enable_pulse_us)
            .wait(timing.enable_pulse_us)
            .wait(timing.settle_us)
    }

    fn data_bits(&mut self, value: u8, width: usize) -> &mut Self {
        for (index, pin) in self.data.iter_mut().take(width).enumerate() {
            pin.push(level((value >> index) & 0x01 != 0));
        }
        self.pulse()
    }

    pub fn nibble(&mut self, value: u8) -> &mut Self {
        self.data_bits(value, 4)
    }

    pub fn byte(&mut self, value: u8) -> &mut Self {
        self.data_bits(value, 8)
    }

    pub fn send(&mut self, value: u8, rs: bool) -> &mut Self {
        self.rs.push(level(rs));
        match self.bit_mode {
            BitMode::FourBit => self.nibble(value >> 4).nibble(value & 0x0F),
            BitMode::EightBit => self.byte(value),
        }
    }

    pub fn command(&mut self, value: u8) -> &mut Self {
        self.send(value, false)
    }

    /// A command followed by the long wait used for clear and home.
    pub fn long_command(&mut self, value: u8) -> &mut Self {
        let wait_us = self.timing.long_command_us;
        self.command(value).wait(wait_us)
    }

    pub fn data(&mut self, value: u8) -> &mut Self {
        self.send(value, true)
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        for byte in text.bytes() {
            self.data(byte);
        }
        self
    }

    /// The power-on wait, reset dance and final function set performed by the bus.
    pub fn bus_reset(&mut self, function: u8) -> &mut Self {
        let power_on_us = self.timing.power_on_us;
        self.wait(power_on_us).control_lines_low();
        match self.bit_mode {
            BitMode::FourBit => {
                self.nibble(0x03)
                    .wait(5_000)
                    .nibble(0x03)
                    .wait(5_000)
                    .nibble(0x03)
                    .wait(2_000)
                    .nibble(0x02);
            }
            BitMode::EightBit => {
                self.command(LCD_CMD_FUNCTIONSET | function)
                    .wait(5_000)
                    .command(LCD_CMD_FUNCTIONSET | function)
                    .wait(2_000)
                    .command(LCD_CMD_FUNCTIONSET | function);
            }
        }
        self.command(LCD_CMD_FUNCTIONSET | function)
    }

    /// The complete display init: bus reset, display on, clear, entry mode.
    pub fn display_init(&mut self, function: u8) -> &mut Self {
        self.bus_reset(function)
            .command(0x0C)
            .long_command(0x01)
            .command(0x06)
    }

    pub fn build(&self) -> BusMocks {
        BusMocks {
            rs: PinMock::new(&self.rs),
            enable: PinMock::new(&self.enable),
            data: self.data.iter().map(|pin| PinMock::new(pin)).collect(),
            delay: CheckedDelay::new(&self.delays),
        }
    }
}

pub(crate) struct BusMocks {
    pub rs: PinMock,
    pub enable: PinMock,
    pub data: Vec<PinMock>,
    pub delay: CheckedDelay,
}

impl BusMocks {
    /// A connection driving clones of the mocks, so expectations can be checked afterwards.
    pub fn connection(&self) -> ParallelConnection<PinMock> {
        let d = &self.data;
        if d.len() == 8 {
            ParallelConnection::eight_bit(
                self.rs.clone(),
                self.enable.clone(),
                [
                    d[0].clone(),
                    d[1].clone(),
                    d[2].clone(),
                    d[3].clone(),
                    d[4].clone(),
                    d[5].clone(),
                    d[6].clone(),
                    d[7].clone(),
                ],
            )
        } else {
            ParallelConnection::four_bit(
                self.rs.clone(),
                self.enable.clone(),
                [d[0].clone(), d[1].clone(), d[2].clone(), d[3].clone()],
            )
        }
    }

    pub fn delay(&self) -> CheckedDelay {
        self.delay.clone()
    }

    pub fn done(&mut self) {
        self.rs.done();
        self.enable.done();
        for pin in self.data.iter_mut() {
            pin.done();
        }
        self.delay.done();
    }
}

/// Identifies a bus line in a `PinLog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Rs,
    Enable,
    Data(u8),
}

/// Output pin that appends every level change to a log shared by all pins of a connection.
pub(crate) struct RecordingPin {
    line: Line,
    log: Rc<RefCell<Vec<(Line, bool)>>>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.line, true));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct PinLog {
    log: Rc<RefCell<Vec<(Line, bool)>>>,
}

impl PinLog {
    fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin {
            line,
            log: self.log.clone(),
        }
    }

    pub fn four_bit_connection(&self) -> ParallelConnection<RecordingPin> {
        ParallelConnection::four_bit(
            self.pin(Line::Rs),
            self.pin(Line::Enable),
            [0, 1, 2, 3].map(|bit| self.pin(Line::Data(bit))),
        )
    }

    pub fn eight_bit_connection(&self) -> ParallelConnection<RecordingPin> {
        ParallelConnection::eight_bit(
            self.pin(Line::Rs),
            self.pin(Line::Enable),
            [0, 1, 2, 3, 4, 5, 6, 7].map(|bit| self.pin(Line::Data(bit))),
        )
    }

    pub fn entries(&self) -> Vec<(Line, bool)> {
        self.log.borrow().clone()
    }
}

/// Builds the log a correct bus is expected to produce: data lines settle before each enable strobe.
#[derive(Default)]
pub(crate) struct ExpectedLog {
    entries: Vec<(Line, bool)>,
}

impl ExpectedLog {
    pub fn set(&mut self, line: Line, high: bool) -> &mut Self {
        self.entries.push((line, high));
        self
    }

    /// `width` data bits of `value`, lowest first, then the enable strobe.
    pub fn transfer(&mut self, value: u8, width: u8) -> &mut Self {
        for bit in 0..width {
            self.set(Line::Data(bit), (value >> bit) & 0x01 != 0);
        }
        self.set(Line::Enable, false)
            .set(Line::Enable, true)
            .set(Line::Enable, false)
    }

    pub fn entries(&self) -> Vec<(Line, bool)> {
        self.entries.clone()
    }
}
