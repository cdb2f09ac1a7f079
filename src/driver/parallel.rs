use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};

use crate::{
    bit_configurations::FunctionSetBits, driver::DeviceHardwareTrait, BitMode, CharSize,
    CharacterDisplayError, DeviceSetupConfig, LcdDisplayType, Timing, LCD_CMD_FUNCTIONSET,
};

// waits between the repeated reset writes of the power-on sequence
const RESET_WAIT_LONG_US: u32 = 5_000;
const RESET_WAIT_SHORT_US: u32 = 2_000;

/// Data lines wired to the controller. A 4-bit bus uses D4-D7, an 8-bit bus uses D0-D7, listed
/// from the least significant bit.
pub enum DataPins<PIN> {
    FourBit([PIN; 4]),
    EightBit([PIN; 8]),
}

/// The GPIO pins connecting the MCU to the HD44780 controller. The RW line is expected to be
/// tied to ground since the driver never reads from the controller.
pub struct ParallelConnection<PIN>
where
    PIN: OutputPin,
{
    rs: PIN,
    enable: PIN,
    data: DataPins<PIN>,
}

impl<PIN> ParallelConnection<PIN>
where
    PIN: OutputPin,
{
    /// Connection using a 4-bit data bus. `data` holds the pins wired to D4, D5, D6 and D7.
    pub fn four_bit(rs: PIN, enable: PIN, data: [PIN; 4]) -> Self {
        Self {
            rs,
            enable,
            data: DataPins::FourBit(data),
        }
    }

    /// Connection using an 8-bit data bus. `data` holds the pins wired to D0 through D7.
    pub fn eight_bit(rs: PIN, enable: PIN, data: [PIN; 8]) -> Self {
        Self {
            rs,
            enable,
            data: DataPins::EightBit(data),
        }
    }

    pub fn bit_mode(&self) -> BitMode {
        match self.data {
            DataPins::FourBit(_) => BitMode::FourBit,
            DataPins::EightBit(_) => BitMode::EightBit,
        }
    }

    fn data_pins_mut(&mut self) -> &mut [PIN] {
        match &mut self.data {
            DataPins::FourBit(pins) => pins,
            DataPins::EightBit(pins) => pins,
        }
    }
}

/// Bit-banged HD44780 bus driving the controller directly from GPIO pins.
pub struct ParallelBus<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    config: DeviceSetupConfig<PIN, DELAY>,
}

impl<PIN, DELAY> ParallelBus<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Puts the low `width` bits of `value` on the data pins, bit `i` on pin `i`, then latches them.
    fn push_bits(
        &mut self,
        value: u8,
        width: usize,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        for (index, pin) in self
            .config
            .connection
            .data_pins_mut()
            .iter_mut()
            .take(width)
            .enumerate()
        {
            pin.set_state(PinState::from((value >> index) & 0x01 != 0))
                .map_err(CharacterDisplayError::PinError)?;
        }
        self.pulse_enable()
    }
}

impl<PIN, DELAY> DeviceHardwareTrait<PIN, DELAY> for ParallelBus<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    fn new(config: DeviceSetupConfig<PIN, DELAY>) -> Self {
        Self { config }
    }

    fn lcd_type(&self) -> LcdDisplayType {
        self.config.lcd_type
    }

    fn char_size(&self) -> CharSize {
        self.config.char_size
    }

    fn bit_mode(&self) -> BitMode {
        self.config.connection.bit_mode()
    }

    fn timing(&self) -> Timing {
        self.config.timing
    }

    fn delay(&mut self) -> &mut DELAY {
        &mut self.config.delay
    }

    fn init(&mut self) -> Result<FunctionSetBits, CharacterDisplayError<PIN::Error>> {
        let lcd_type = self.config.lcd_type;
        if !lcd_type.is_valid() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Invalid display geometry: {}", lcd_type);
            return Err(CharacterDisplayError::InvalidArgument);
        }
        let bit_mode = self.bit_mode();
        let function = FunctionSetBits::for_display(bit_mode, lcd_type.rows(), self.char_size());

        // at least 40 ms after VCC rises above 2.7 V before sending commands
        let power_on_us = self.config.timing.power_on_us;
        self.config.delay.delay_us(power_on_us);

        // pull RS and enable low to begin commands
        self.config
            .connection
            .rs
            .set_low()
            .map_err(CharacterDisplayError::PinError)?;
        self.config
            .connection
            .enable
            .set_low()
            .map_err(CharacterDisplayError::PinError)?;

        match bit_mode {
            BitMode::FourBit => {
                // HD44780 datasheet figure 24: the controller starts in 8-bit mode
                self.write_nibble(0x03)?;
                self.config.delay.delay_us(RESET_WAIT_LONG_US);
                self.write_nibble(0x03)?;
                self.config.delay.delay_us(RESET_WAIT_LONG_US);
                self.write_nibble(0x03)?;
                self.config.delay.delay_us(RESET_WAIT_SHORT_US);
                // switch to the 4-bit interface
                self.write_nibble(0x02)?;
            }
            BitMode::EightBit => {
                // HD44780 datasheet figure 23
                self.send(LCD_CMD_FUNCTIONSET | function.0, false)?;
                self.config.delay.delay_us(RESET_WAIT_LONG_US);
                self.send(LCD_CMD_FUNCTIONSET | function.0, false)?;
                self.config.delay.delay_us(RESET_WAIT_SHORT_US);
                self.send(LCD_CMD_FUNCTIONSET | function.0, false)?;
            }
        }

        // number of lines and font size
        self.send(LCD_CMD_FUNCTIONSET | function.0, false)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("HD44780 bus ready: {}, function set {:#x}", bit_mode, function.0);
        Ok(function)
    }

    fn set_rs(&mut self, value: bool) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.config
            .connection
            .rs
            .set_state(PinState::from(value))
            .map_err(CharacterDisplayError::PinError)
    }

    fn pulse_enable(&mut self) -> Result<(), CharacterDisplayError<PIN::Error>> {
        let timing = self.config.timing;
        let enable = &mut self.config.connection.enable;
        enable.set_low().map_err(CharacterDisplayError::PinError)?;
        self.config.delay.delay_us(timing.enable_pulse_us);
        enable.set_high().map_err(CharacterDisplayError::PinError)?;
        // enable pulse must be >450 ns
        self.config.delay.delay_us(timing.enable_pulse_us);
        enable.set_low().map_err(CharacterDisplayError::PinError)?;
        // commands need >37 us to settle
        self.config.delay.delay_us(timing.settle_us);
        Ok(())
    }

    fn write_nibble(&mut self, value: u8) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.push_bits(value, 4)
    }

    fn write_byte(&mut self, value: u8) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.push_bits(value, 8)
    }
}
