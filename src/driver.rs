pub mod parallel;
pub mod standard;

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    bit_configurations::FunctionSetBits, BitMode, CharSize, CharacterDisplayError,
    DeviceSetupConfig, LcdDisplayType, Timing,
};

/// Trait for device hardware implementations. Embodies the bus-level functionality needed to move
/// command and data bytes into a HD44780 controller. The display logic only ever talks to the
/// controller through this trait, so the pin toggling backend can be swapped out.
pub trait DeviceHardwareTrait<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    fn new(config: DeviceSetupConfig<PIN, DELAY>) -> Self;

    /// returns LCD type
    fn lcd_type(&self) -> LcdDisplayType;

    /// returns the glyph size the display was configured with
    fn char_size(&self) -> CharSize;

    /// returns the width of the data bus
    fn bit_mode(&self) -> BitMode;

    /// returns the timing profile used for bus transfers
    fn timing(&self) -> Timing;

    /// return a mutable reference to the delay object
    fn delay(&mut self) -> &mut DELAY;

    /// Validates the configuration and runs the power-on reset sequence, leaving the controller
    /// in the requested bus width with the final function set applied. On `Ok`, returns the
    /// function set value that was sent. No pin is touched when the configuration is rejected.
    fn init(&mut self) -> Result<FunctionSetBits, CharacterDisplayError<PIN::Error>>;

    /// Sets the RS pin. A value of `false` selects the instruction register, `true` the data register.
    fn set_rs(&mut self, value: bool) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Strobes the enable pin so the controller latches the RS and data lines.
    fn pulse_enable(&mut self) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Writes the lower nibble of `value` to the data pins and strobes enable. Only meaningful
    /// on a 4-bit bus.
    fn write_nibble(&mut self, value: u8) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Writes all 8 bits of `value` to the data pins and strobes enable. Only meaningful on an
    /// 8-bit bus.
    fn write_byte(&mut self, value: u8) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Sends a full byte to the controller. If `rs_setting` is `true`, the byte is written to the data
    /// register, either the CGRAM or DDRAM, depending on prior command sent. If `rs_setting` is `false`,
    /// the byte is written to the command register. On a 4-bit bus the high nibble goes first.
    fn send(&mut self, value: u8, rs_setting: bool) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.set_rs(rs_setting)?;
        match self.bit_mode() {
            BitMode::EightBit => self.write_byte(value),
            BitMode::FourBit => self
                .write_nibble(value >> 4)
                .and_then(|_| self.write_nibble(value & 0x0F)),
        }
    }

    /// Sends each byte of `data` in order with the same `rs_setting`.
    fn write_bytes(
        &mut self,
        rs_setting: bool,
        data: &[u8],
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        for &byte in data {
            self.send(byte, rs_setting)?;
        }
        Ok(())
    }
}

/// Trait for display actions. Embodies the display commands that can be performed on the device.
/// Works with the `DeviceHardwareTrait` to perform the actions on the device to effect the desired
/// display operation.
pub trait DisplayActionsTrait<PIN, DELAY, DEVICE>: Default
where
    PIN: OutputPin,
    DELAY: DelayNs,
    DEVICE: DeviceHardwareTrait<PIN, DELAY>,
{
    /// Resets the device and brings the display state to its power-on defaults. Must be called once
    /// before any other operation.
    fn init(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Send a raw command byte.
    fn command(
        &mut self,
        device: &mut DEVICE,
        value: u8,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Send a raw data byte, written to CGRAM or DDRAM depending on the last address command.
    fn write(
        &mut self,
        device: &mut DEVICE,
        value: u8,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Clear the display
    fn clear(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the cursor to the home position.
    fn home(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the cursor position at specified column and row. Columns and rows are zero-indexed.
    fn set_cursor(
        &mut self,
        device: &mut DEVICE,
        col: u8,
        row: u8,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the cursor visibility.
    fn show_cursor(
        &mut self,
        device: &mut DEVICE,
        show_cursor: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the cursor blinking.
    fn blink_cursor(
        &mut self,
        device: &mut DEVICE,
        blink_cursor: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the display visibility.
    fn show_display(
        &mut self,
        device: &mut DEVICE,
        show_display: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Scroll display left.
    fn scroll_left(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Scroll display right.
    fn scroll_right(&mut self, device: &mut DEVICE)
        -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the text flow direction to left to right.
    fn left_to_right(
        &mut self,
        device: &mut DEVICE,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the text flow direction to right to left.
    fn right_to_left(
        &mut self,
        device: &mut DEVICE,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Set the auto scroll mode.
    fn autoscroll(
        &mut self,
        device: &mut DEVICE,
        autoscroll: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// Prints a string to the LCD at the current cursor position.
    fn print(
        &mut self,
        device: &mut DEVICE,
        text: &str,
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;

    /// creates a new custom character
    fn create_char(
        &mut self,
        device: &mut DEVICE,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<(), CharacterDisplayError<PIN::Error>>;
}
