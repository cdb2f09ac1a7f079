use bitfield::bitfield;

use crate::{BitMode, CharSize};

// Shadow of the HD44780 function set register (DL, N, F bits)
bitfield! {
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct FunctionSetBits(u8);
    impl Debug;
    pub eight_bit_mode, set_eight_bit_mode: 4;
    pub two_line, set_two_line: 3;
    pub font_5x10, set_font_5x10: 2;
}

// Shadow of the HD44780 display on/off control register (D, C, B bits)
bitfield! {
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct DisplayControlBits(u8);
    impl Debug;
    pub display_on, set_display_on: 2;
    pub cursor_on, set_cursor_on: 1;
    pub blink_on, set_blink_on: 0;
}

// Shadow of the HD44780 entry mode register (I/D, S bits)
bitfield! {
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct EntryModeBits(u8);
    impl Debug;
    pub entry_left, set_entry_left: 1;
    pub shift_increment, set_shift_increment: 0;
}

impl FunctionSetBits {
    /// Builds the function set value for the given bus width and geometry. The 5x10 font is only
    /// honored on single line displays.
    pub fn for_display(bit_mode: BitMode, rows: u8, char_size: CharSize) -> Self {
        let mut bits = FunctionSetBits(0);
        bits.set_eight_bit_mode(bit_mode == BitMode::EightBit);
        bits.set_two_line(rows > 1);
        bits.set_font_5x10(char_size == CharSize::Dots5x10 && rows == 1);
        bits
    }
}
