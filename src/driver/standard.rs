use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    bit_configurations::{DisplayControlBits, EntryModeBits, FunctionSetBits},
    driver::{DeviceHardwareTrait, DisplayActionsTrait},
    CharacterDisplayError, LCD_CMD_CLEARDISPLAY, LCD_CMD_CURSORSHIFT, LCD_CMD_DISPLAYCONTROL,
    LCD_CMD_ENTRYMODESET, LCD_CMD_RETURNHOME, LCD_CMD_SETCGRAMADDR, LCD_CMD_SETDDRAMADDR,
    LCD_FLAG_DISPLAYMOVE, LCD_FLAG_MOVELEFT, LCD_FLAG_MOVERIGHT,
};

/// `StandardCharacterDisplayHandler` implements the `DisplayActionsTrait` for a HD44780 controller.
/// The controller cannot be read back, so this struct keeps the authoritative copy of the function
/// set, display control and entry mode registers. Every change to a shadow register is flushed
/// to the controller before the method returns. Row addresses come from the device's display type,
/// so `set_cursor` is usable before `init`.
#[derive(Default)]
pub struct StandardCharacterDisplayHandler {
    display_function: FunctionSetBits,
    display_control: DisplayControlBits,
    display_mode: EntryModeBits,
}

impl StandardCharacterDisplayHandler {
    pub fn display_function(&self) -> u8 {
        self.display_function.0
    }

    pub fn display_control(&self) -> u8 {
        self.display_control.0
    }

    pub fn display_mode(&self) -> u8 {
        self.display_mode.0
    }
}

impl<PIN, DELAY, DEVICE> DisplayActionsTrait<PIN, DELAY, DEVICE> for StandardCharacterDisplayHandler
where
    PIN: OutputPin,
    DELAY: DelayNs,
    DEVICE: DeviceHardwareTrait<PIN, DELAY>,
{
    fn init(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.display_function = device.init()?;

        // turn the display on with no cursor or blinking default
        self.display_control = DisplayControlBits(0);
        DisplayActionsTrait::<PIN, DELAY, DEVICE>::show_display(self, device, true)?;

        DisplayActionsTrait::<PIN, DELAY, DEVICE>::clear(self, device)?;

        // default text direction is left to right, no display shift
        self.display_mode = EntryModeBits(0);
        self.display_mode.set_entry_left(true);
        device.send(LCD_CMD_ENTRYMODESET | self.display_mode.0, false)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Display initialized: {}", device.lcd_type());
        Ok(())
    }

    fn command(
        &mut self,
        device: &mut DEVICE,
        value: u8,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        device.send(value, false)
    }

    fn write(
        &mut self,
        device: &mut DEVICE,
        value: u8,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        device.send(value, true)
    }

    fn clear(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>> {
        device.send(LCD_CMD_CLEARDISPLAY, false)?;
        // this command takes a long time
        let wait_us = device.timing().long_command_us;
        device.delay().delay_us(wait_us);
        Ok(())
    }

    fn home(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>> {
        device.send(LCD_CMD_RETURNHOME, false)?;
        // this command takes a long time
        let wait_us = device.timing().long_command_us;
        device.delay().delay_us(wait_us);
        Ok(())
    }

    fn set_cursor(
        &mut self,
        device: &mut DEVICE,
        col: u8,
        row: u8,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        let lcd_type = device.lcd_type();
        let row_offsets = lcd_type.row_offsets();

        // out of range rows land on the last usable row
        let max_lines = row_offsets.len() as u8;
        let mut row = row;
        if row >= max_lines {
            row = max_lines - 1;
        }
        if row >= lcd_type.rows() {
            row = lcd_type.rows().saturating_sub(1);
        }

        device.send(
            LCD_CMD_SETDDRAMADDR | col.wrapping_add(row_offsets[row as usize]),
            false,
        )
    }

    fn show_cursor(
        &mut self,
        device: &mut DEVICE,
        show_cursor: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.display_control.set_cursor_on(show_cursor);
        device.send(LCD_CMD_DISPLAYCONTROL | self.display_control.0, false)
    }

    fn blink_cursor(
        &mut self,
        device: &mut DEVICE,
        blink_cursor: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.display_control.set_blink_on(blink_cursor);
        device.send(LCD_CMD_DISPLAYCONTROL | self.display_control.0, false)
    }

    fn show_display(
        &mut self,
        device: &mut DEVICE,
        show_display: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.display_control.set_display_on(show_display);
        device.send(LCD_CMD_DISPLAYCONTROL | self.display_control.0, false)
    }

    fn scroll_left(&mut self, device: &mut DEVICE) -> Result<(), CharacterDisplayError<PIN::Error>> {
        device.send(
            LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYMOVE | LCD_FLAG_MOVELEFT,
            false,
        )
    }

    fn scroll_right(
        &mut self,
        device: &mut DEVICE,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        device.send(
            LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYMOVE | LCD_FLAG_MOVERIGHT,
            false,
        )
    }

    fn left_to_right(
        &mut self,
        device: &mut DEVICE,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.display_mode.set_entry_left(true);
        device.send(LCD_CMD_ENTRYMODESET | self.display_mode.0, false)
    }

    fn right_to_left(
        &mut self,
        device: &mut DEVICE,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.display_mode.set_entry_left(false);
        device.send(LCD_CMD_ENTRYMODESET | self.display_mode.0, false)
    }

    fn autoscroll(
        &mut self,
        device: &mut DEVICE,
        autoscroll: bool,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.display_mode.set_shift_increment(autoscroll);
        device.send(LCD_CMD_ENTRYMODESET | self.display_mode.0, false)
    }

    fn print(
        &mut self,
        device: &mut DEVICE,
        text: &str,
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Printing: {}", text);
        device.write_bytes(true, text.as_bytes())
    }

    fn create_char(
        &mut self,
        device: &mut DEVICE,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<(), CharacterDisplayError<PIN::Error>> {
        // only 8 CGRAM slots, 0-7
        device.send(LCD_CMD_SETCGRAMADDR | ((location & 0x7) << 3), false)?;
        device.write_bytes(true, &charmap)
    }
}
