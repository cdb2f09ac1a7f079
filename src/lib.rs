//! This Rust `embedded-hal`-based library is a simple way to control a [HD44780](https://en.wikipedia.org/wiki/Hitachi_HD44780_LCD_controller)
//! compatible character display wired directly to the GPIO pins of a microcontroller, in an embedded, `no_std` environment.
//! Both bus widths of the controller are supported:
//!
//! - **4-bit mode** - RS, enable and the D4-D7 data lines. This is the most common wiring since it only needs 6 pins.
//! - **8-bit mode** - RS, enable and all of the D0-D7 data lines. Each byte is transferred with a single enable pulse.
//!
//! The RW line of the display is expected to be tied to ground. The driver never reads from the controller, so all
//! timing is handled with fixed delays.
//!
//! Key features include:
//! - Convenient high-level API for controlling the display
//! - Support for custom characters
//! - `core::fmt::Write` implementation for easy use with the `write!` macro
//! - Compatible with the `embedded-hal` traits v1.0 and later
//! - Selectable timing profiles, from the very conservative defaults to datasheet minimums
//! - Optional support for the `defmt` and `ufmt` logging frameworks
//!
//! ## Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! parallel-character-display = { version = "0.1", features = ["defmt"] }
//! ```
//! The `features = ["defmt"]` line is optional and enables the `defmt` feature, which allows the library's errors to be used with the `defmt` logging
//! framework and emits debug logging during initialization. Another optional feature is `features = ["ufmt"]`, which enables the `ufmt` feature,
//! allowing the `uwriteln!` and `uwrite!` macros to be used.
//!
//! Then describe how the display is wired:
//! ```rust
//! use parallel_character_display::{CharacterDisplayParallel, LcdDisplayType, ParallelConnection};
//!
//! // board setup
//! let (rs, en, d4, d5, d6, d7) = ...; // OutputPin implementations, all of the same type
//! let delay = ...; // DelayNs implementation
//!
//! let connection = ParallelConnection::four_bit(rs, en, [d4, d5, d6, d7]);
//! let mut lcd = CharacterDisplayParallel::new(connection, LcdDisplayType::Lcd16x2, delay);
//! ```
//! Most HALs provide a type-erased pin (e.g. `AnyPin` or `ErasedPin`) which can be used so that all pins share a single type.
//! When creating the display object, you can choose the display type from the `LcdDisplayType` enum. The display type should match the physical
//! display you are using. This display type configures the number of rows and columns, and the internal row offsets for the display.
//!
//! Initialize the display:
//! ```rust
//! if let Err(e) = lcd.init() {
//!    panic!("Error initializing LCD: {}", e);
//! }
//! ```
//! Use the display:
//! ```rust
//! // set up the display
//! lcd.clear()?.home()?;
//! // print a message
//! lcd.print("Hello, world!")?;
//! // can also use the `core::fmt::write!` macro
//! use core::fmt::Write;
//!
//! write!(lcd, "Hello, world!")?;
//! ```
//! The various methods for controlling the LCD are also available. Each returns a `Result` that wraps the display object in `Ok()`, allowing for easy chaining
//! of commands. For example:
//! ```rust
//! lcd.clear()?.set_cursor(0, 1)?.cursor()?.blink()?.print("Hello, world!")?;
//! ```
//! ### Timing
//! The default timing profile waits 1 ms around every enable pulse and 2 seconds after `clear` and `home`. This works with even the slowest
//! controller clones, but is slow. Displays that follow the HD44780 datasheet can use a faster profile:
//! ```rust
//! use parallel_character_display::{DeviceSetupConfig, Timing};
//!
//! let config = DeviceSetupConfig::new(connection, LcdDisplayType::Lcd20x4, delay).with_timing(Timing::datasheet());
//! let mut lcd = CharacterDisplayParallel::new_with_config(config);
//! ```
#![no_std]
#![allow(non_upper_case_globals)]
use core::{fmt::Display, marker::PhantomData};

use embedded_hal::{delay::DelayNs, digital::OutputPin};

pub mod bit_configurations;
pub mod driver;
#[cfg(test)]
mod test_support;

use driver::{
    parallel::ParallelBus, standard::StandardCharacterDisplayHandler, DeviceHardwareTrait,
    DisplayActionsTrait,
};
pub use driver::parallel::ParallelConnection;

/// HD44780 based character display bit-banged over GPIO pins.
pub type CharacterDisplayParallel<PIN, DELAY> = BaseCharacterDisplay<
    PIN,
    DELAY,
    ParallelBus<PIN, DELAY>,
    StandardCharacterDisplayHandler,
>;

// commands
pub const LCD_CMD_CLEARDISPLAY: u8 = 0x01; //  Clear display, set cursor position to zero
pub const LCD_CMD_RETURNHOME: u8 = 0x02; //  Set cursor position to zero
pub const LCD_CMD_ENTRYMODESET: u8 = 0x04; //  Sets the entry mode
pub const LCD_CMD_DISPLAYCONTROL: u8 = 0x08; //  Controls the display; does stuff like turning it off and on
pub const LCD_CMD_CURSORSHIFT: u8 = 0x10; //  Lets you move the cursor
pub const LCD_CMD_FUNCTIONSET: u8 = 0x20; //  Used to send the function to set to the display
pub const LCD_CMD_SETCGRAMADDR: u8 = 0x40; //  Used to set the CGRAM (character generator RAM) with characters
pub const LCD_CMD_SETDDRAMADDR: u8 = 0x80; //  Used to set the DDRAM (Display Data RAM)

// flags for display entry mode
pub const LCD_FLAG_ENTRYRIGHT: u8 = 0x00; //  Used to set text to flow from right to left
pub const LCD_FLAG_ENTRYLEFT: u8 = 0x02; //  Used to set text to flow from left to right
pub const LCD_FLAG_ENTRYSHIFTINCREMENT: u8 = 0x01; //  Used to 'right justify' text from the cursor
pub const LCD_FLAG_ENTRYSHIFTDECREMENT: u8 = 0x00; //  Used to 'left justify' text from the cursor

// flags for display on/off control
pub const LCD_FLAG_DISPLAYON: u8 = 0x04; //  Turns the display on
pub const LCD_FLAG_DISPLAYOFF: u8 = 0x00; //  Turns the display off
pub const LCD_FLAG_CURSORON: u8 = 0x02; //  Turns the cursor on
pub const LCD_FLAG_CURSOROFF: u8 = 0x00; //  Turns the cursor off
pub const LCD_FLAG_BLINKON: u8 = 0x01; //  Turns on the blinking cursor
pub const LCD_FLAG_BLINKOFF: u8 = 0x00; //  Turns off the blinking cursor

// flags for display/cursor shift
pub const LCD_FLAG_DISPLAYMOVE: u8 = 0x08; //  Flag for moving the display
pub const LCD_FLAG_CURSORMOVE: u8 = 0x00; //  Flag for moving the cursor
pub const LCD_FLAG_MOVERIGHT: u8 = 0x04; //  Flag for moving right
pub const LCD_FLAG_MOVELEFT: u8 = 0x00; //  Flag for moving left

// flags for function set
pub const LCD_FLAG_8BITMODE: u8 = 0x10; //  LCD 8 bit mode
pub const LCD_FLAG_4BITMODE: u8 = 0x00; //  LCD 4 bit mode
pub const LCD_FLAG_2LINE: u8 = 0x08; //  LCD 2 line mode
pub const LCD_FLAG_1LINE: u8 = 0x00; //  LCD 1 line mode
pub const LCD_FLAG_5x10_DOTS: u8 = 0x04; //  10 pixel high font mode
pub const LCD_FLAG_5x8_DOTS: u8 = 0x00; //  8 pixel high font mode

#[derive(Debug, PartialEq, Copy, Clone)]
/// Errors that can occur when driving the display
pub enum CharacterDisplayError<E> {
    /// Error returned from the underlying GPIO pin implementation
    PinError(E),
    /// The display configuration is not usable, e.g. zero rows or columns
    InvalidArgument,
    /// Formatting error
    FormattingError(core::fmt::Error),
}

impl<E> From<core::fmt::Error> for CharacterDisplayError<E> {
    fn from(err: core::fmt::Error) -> Self {
        CharacterDisplayError::FormattingError(err)
    }
}

impl<E> From<&CharacterDisplayError<E>> for &'static str {
    fn from(err: &CharacterDisplayError<E>) -> Self {
        match err {
            CharacterDisplayError::PinError(_) => "GPIO pin error",
            CharacterDisplayError::InvalidArgument => "Invalid argument",
            CharacterDisplayError::FormattingError(_) => "Formatting error",
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for CharacterDisplayError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl<E> ufmt::uDisplay for CharacterDisplayError<E> {
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl<E> Display for CharacterDisplayError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// The type of LCD display. This is used to determine the number of rows and columns, and the row offsets.
pub enum LcdDisplayType {
    /// 20x4 display
    Lcd20x4,
    /// 20x2 display
    Lcd20x2,
    /// 16x1 display
    Lcd16x1,
    /// 16x2 display
    Lcd16x2,
    /// 16x4 display
    Lcd16x4,
    /// 8x2 display
    Lcd8x2,
    /// 40x2 display
    Lcd40x2,
    /// Any other geometry driven by a single controller. Both values must be non-zero.
    Custom { cols: u8, rows: u8 },
}

#[cfg(feature = "defmt")]
impl defmt::Format for LcdDisplayType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}x{}", self.cols(), self.rows());
    }
}

#[cfg(feature = "ufmt")]
impl ufmt::uDisplay for LcdDisplayType {
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uwrite!(w, "{}x{}", self.cols(), self.rows())
    }
}

impl Display for LcdDisplayType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.cols(), self.rows())
    }
}

impl LcdDisplayType {
    /// Get the number of rows for the display type
    pub const fn rows(&self) -> u8 {
        match self {
            LcdDisplayType::Lcd20x4 => 4,
            LcdDisplayType::Lcd20x2 => 2,
            LcdDisplayType::Lcd16x1 => 1,
            LcdDisplayType::Lcd16x2 => 2,
            LcdDisplayType::Lcd16x4 => 4,
            LcdDisplayType::Lcd8x2 => 2,
            LcdDisplayType::Lcd40x2 => 2,
            LcdDisplayType::Custom { rows, .. } => *rows,
        }
    }

    /// Get the number of columns for the display type
    pub const fn cols(&self) -> u8 {
        match self {
            LcdDisplayType::Lcd20x4 => 20,
            LcdDisplayType::Lcd20x2 => 20,
            LcdDisplayType::Lcd16x1 => 16,
            LcdDisplayType::Lcd16x2 => 16,
            LcdDisplayType::Lcd16x4 => 16,
            LcdDisplayType::Lcd8x2 => 8,
            LcdDisplayType::Lcd40x2 => 40,
            LcdDisplayType::Custom { cols, .. } => *cols,
        }
    }

    /// Get the DDRAM start address of each row. This always returns an array of length 4. Rows 2 and 3
    /// continue rows 0 and 1 after `cols` characters.
    pub const fn row_offsets(&self) -> [u8; 4] {
        let cols = self.cols();
        [0x00, 0x40, cols, 0x40_u8.wrapping_add(cols)]
    }

    /// A display needs at least one row and one column.
    pub const fn is_valid(&self) -> bool {
        self.rows() > 0 && self.cols() > 0
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Width of the data bus between the MCU and the controller.
pub enum BitMode {
    /// D4-D7 only, every byte is sent as two nibbles
    FourBit,
    /// D0-D7, every byte is sent in one transfer
    EightBit,
}

impl BitMode {
    /// Number of data pins used by the bus.
    pub const fn data_pin_count(&self) -> usize {
        match self {
            BitMode::FourBit => 4,
            BitMode::EightBit => 8,
        }
    }
}

impl From<&BitMode> for &'static str {
    fn from(bit_mode: &BitMode) -> Self {
        match bit_mode {
            BitMode::FourBit => "4-bit",
            BitMode::EightBit => "8-bit",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BitMode {
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

impl Display for BitMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
/// Character glyph size. The 5x10 font is only available on single line displays, and is ignored otherwise.
pub enum CharSize {
    #[default]
    Dots5x8,
    Dots5x10,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Delays used when talking to the controller. All values are in microseconds.
pub struct Timing {
    /// wait after power-on before the first command
    pub power_on_us: u32,
    /// length of each phase of the enable pulse
    pub enable_pulse_us: u32,
    /// wait after the enable pulse for the command to execute
    pub settle_us: u32,
    /// extra wait after `clear` and `home`
    pub long_command_us: u32,
}

impl Timing {
    /// Very slow timing that tolerates controller clones well outside of the datasheet. This is the default.
    pub const fn conservative() -> Self {
        Self {
            power_on_us: 40_000,
            enable_pulse_us: 1_000,
            settle_us: 1_000,
            long_command_us: 2_000_000,
        }
    }

    /// Timing close to the minimums in the HD44780 datasheet.
    pub const fn datasheet() -> Self {
        Self {
            power_on_us: 40_000,
            enable_pulse_us: 1,
            settle_us: 50,
            long_command_us: 1_520,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::conservative()
    }
}

/// Everything needed to drive a display: the pin connection, the display geometry, the font, the
/// timing profile and the delay provider.
pub struct DeviceSetupConfig<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    pub(crate) lcd_type: LcdDisplayType,
    pub(crate) char_size: CharSize,
    pub(crate) timing: Timing,
    pub(crate) connection: ParallelConnection<PIN>,
    pub(crate) delay: DELAY,
}

impl<PIN, DELAY> DeviceSetupConfig<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a configuration with the 5x8 font and the conservative timing profile.
    pub fn new(connection: ParallelConnection<PIN>, lcd_type: LcdDisplayType, delay: DELAY) -> Self {
        Self {
            lcd_type,
            char_size: CharSize::default(),
            timing: Timing::default(),
            connection,
            delay,
        }
    }

    pub fn with_char_size(mut self, char_size: CharSize) -> Self {
        self.char_size = char_size;
        self
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }
}

pub struct BaseCharacterDisplay<PIN, DELAY, DEVICE, ACTIONS>
where
    PIN: OutputPin,
    DELAY: DelayNs,
    DEVICE: DeviceHardwareTrait<PIN, DELAY>,
    ACTIONS: DisplayActionsTrait<PIN, DELAY, DEVICE>,
{
    device: DEVICE,
    actions: ACTIONS,
    _marker: PhantomData<(PIN, DELAY)>,
}

impl<PIN, DELAY, DEVICE, ACTIONS> BaseCharacterDisplay<PIN, DELAY, DEVICE, ACTIONS>
where
    PIN: OutputPin,
    DELAY: DelayNs,
    DEVICE: DeviceHardwareTrait<PIN, DELAY>,
    ACTIONS: DisplayActionsTrait<PIN, DELAY, DEVICE>,
{
    /// Create a new character display object with the default font and timing.
    pub fn new(connection: ParallelConnection<PIN>, lcd_type: LcdDisplayType, delay: DELAY) -> Self {
        Self::new_with_config(DeviceSetupConfig::new(connection, lcd_type, delay))
    }

    /// Create a new character display object from a full configuration.
    pub fn new_with_config(config: DeviceSetupConfig<PIN, DELAY>) -> Self {
        Self {
            device: DEVICE::new(config),
            actions: ACTIONS::default(),
            _marker: PhantomData,
        }
    }

    /// Initialize the display. This must be called before using the display.
    pub fn init(&mut self) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.actions.init(&mut self.device)
    }

    /// returns the `LcdDisplayType` used to create the display
    pub fn display_type(&self) -> LcdDisplayType {
        self.device.lcd_type()
    }

    /// returns the width of the data bus
    pub fn bit_mode(&self) -> BitMode {
        self.device.bit_mode()
    }

    /// returns the DDRAM address of the first column of each row
    pub fn row_offsets(&self) -> [u8; 4] {
        self.device.lcd_type().row_offsets()
    }

    /// Sends a raw command byte to the controller. Normally users do not need to call this directly.
    pub fn command(&mut self, value: u8) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.command(&mut self.device, value)?;
        Ok(self)
    }

    /// Writes a data byte to either the CGRAM or DDRAM, depending on the last address command sent.
    pub fn write(&mut self, value: u8) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.write(&mut self.device, value)?;
        Ok(self)
    }

    /// Sends each byte of `data` in order, as data if `rs_setting` is `true` and as commands otherwise.
    pub fn write_bytes(
        &mut self,
        rs_setting: bool,
        data: &[u8],
    ) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.device.write_bytes(rs_setting, data)?;
        Ok(self)
    }

    //--------------------------------------------------------------------------------------------------
    // high level commands, for the user!
    //--------------------------------------------------------------------------------------------------

    /// Clear the display
    pub fn clear(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.clear(&mut self.device)?;
        Ok(self)
    }

    /// Set the cursor to the home position.
    pub fn home(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.home(&mut self.device)?;
        Ok(self)
    }

    /// Set the cursor position at specified column and row. Columns and rows are zero-indexed.
    /// Rows past the last row of the display are clamped to the last row.
    pub fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.set_cursor(&mut self.device, col, row)?;
        Ok(self)
    }

    /// Set the cursor visibility.
    pub fn show_cursor(
        &mut self,
        show_cursor: bool,
    ) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.show_cursor(&mut self.device, show_cursor)?;
        Ok(self)
    }

    /// Show the underline cursor.
    pub fn cursor(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.show_cursor(true)
    }

    /// Hide the underline cursor.
    pub fn no_cursor(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.show_cursor(false)
    }

    /// Set the cursor blinking.
    pub fn blink_cursor(
        &mut self,
        blink_cursor: bool,
    ) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.blink_cursor(&mut self.device, blink_cursor)?;
        Ok(self)
    }

    pub fn blink(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.blink_cursor(true)
    }

    pub fn no_blink(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.blink_cursor(false)
    }

    /// Set the display visibility. The display memory is kept while the display is off.
    pub fn show_display(
        &mut self,
        show_display: bool,
    ) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.show_display(&mut self.device, show_display)?;
        Ok(self)
    }

    pub fn display(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.show_display(true)
    }

    pub fn no_display(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.show_display(false)
    }

    /// Scroll the display to the left.
    pub fn scroll_display_left(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.scroll_left(&mut self.device)?;
        Ok(self)
    }

    /// Scroll the display to the right.
    pub fn scroll_display_right(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.scroll_right(&mut self.device)?;
        Ok(self)
    }

    /// Set the text flow direction to left to right.
    pub fn left_to_right(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.left_to_right(&mut self.device)?;
        Ok(self)
    }

    /// Set the text flow direction to right to left.
    pub fn right_to_left(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.right_to_left(&mut self.device)?;
        Ok(self)
    }

    /// Set the auto scroll mode. When on, each written character shifts the display instead of
    /// moving the cursor.
    pub fn set_autoscroll(
        &mut self,
        autoscroll: bool,
    ) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.autoscroll(&mut self.device, autoscroll)?;
        Ok(self)
    }

    pub fn autoscroll(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.set_autoscroll(true)
    }

    pub fn no_autoscroll(&mut self) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.set_autoscroll(false)
    }

    /// Create a new custom character in one of the 8 CGRAM slots. Only the low 3 bits of `location`
    /// are used. Leaves the controller addressing CGRAM, so call `set_cursor` or `home` before printing.
    pub fn create_char(
        &mut self,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions
            .create_char(&mut self.device, location, charmap)?;
        Ok(self)
    }

    /// Prints a string to the LCD at the current cursor position. Text running past the end of a row
    /// is not wrapped.
    pub fn print(&mut self, text: &str) -> Result<&mut Self, CharacterDisplayError<PIN::Error>> {
        self.actions.print(&mut self.device, text)?;
        Ok(self)
    }
}

impl<PIN, DELAY, DEVICE> BaseCharacterDisplay<PIN, DELAY, DEVICE, StandardCharacterDisplayHandler>
where
    PIN: OutputPin,
    DELAY: DelayNs,
    DEVICE: DeviceHardwareTrait<PIN, DELAY>,
{
    /// returns the last function set value sent to the controller
    pub fn display_function(&self) -> u8 {
        self.actions.display_function()
    }

    /// returns the current display on/off control flags
    pub fn display_control(&self) -> u8 {
        self.actions.display_control()
    }

    /// returns the current entry mode flags
    pub fn display_mode(&self) -> u8 {
        self.actions.display_mode()
    }
}

/// Implement the `core::fmt::Write` trait for the display, allowing it to be used with the `write!` macro.
/// This is a convenience method for printing to the display.
impl<PIN, DELAY, DEVICE, ACTIONS> core::fmt::Write for BaseCharacterDisplay<PIN, DELAY, DEVICE, ACTIONS>
where
    PIN: OutputPin,
    DELAY: DelayNs,
    DEVICE: DeviceHardwareTrait<PIN, DELAY>,
    ACTIONS: DisplayActionsTrait<PIN, DELAY, DEVICE>,
{
    fn write_str(&mut self, s: &str) -> Result<(), core::fmt::Error> {
        if let Err(_e) = self.print(s) {
            return Err(core::fmt::Error);
        }
        Ok(())
    }
}

#[cfg(feature = "ufmt")]
/// Implement the `ufmt::uWrite` trait for the display, allowing it to be used with the `uwriteln!` and `uwrite!` macros.
impl<PIN, DELAY, DEVICE, ACTIONS> ufmt::uWrite for BaseCharacterDisplay<PIN, DELAY, DEVICE, ACTIONS>
where
    PIN: OutputPin,
    DELAY: DelayNs,
    DEVICE: DeviceHardwareTrait<PIN, DELAY>,
    ACTIONS: DisplayActionsTrait<PIN, DELAY, DEVICE>,
{
    fn write_str(&mut self, s: &str) -> Result<(), CharacterDisplayError<PIN::Error>> {
        self.print(s)?;
        Ok(())
    }

    type Error = CharacterDisplayError<PIN::Error>;
}
