use core::ffi::{CStr, c_char, c_void};
use core::ptr;

use crate::audio::{Channel, Waveform};
use crate::callbacks::Callbacks;
use crate::font::{CustomFont, FontMode};

/// Everything the Monotron hardware can do for an application.
///
/// The ROM implements this through the callback table (see [`Firmware`]). Simulators and
/// tests implement it directly. Every method hands back whatever the host reports, unchanged.
pub trait Host {
    /// Write one byte to the screen (and serial). Returns the host's status code.
    fn putchar(&mut self, ch: u8) -> i32;

    /// Write a null-terminated string.
    fn puts(&mut self, s: &CStr) -> i32;

    /// Block until a character is available. Returns the character or [`EOF`](crate::EOF).
    fn readc(&mut self) -> i32;

    /// Block until the next vertical blanking interval.
    fn wfvbi(&mut self);

    /// Non-zero if [`readc`](Host::readc) would not block.
    fn kbhit(&mut self) -> i32;

    /// Row and column are not range checked.
    fn move_cursor(&mut self, row: u8, col: u8);

    fn play(&mut self, frequency: u32, channel: Channel, waveform: Waveform, volume: u8) -> i32;

    /// `font` is `Some` exactly when `mode` is [`FontMode::Custom`]. The callback table
    /// drops a custom switch that arrives without a font.
    fn change_font(&mut self, mode: FontMode, font: Option<&'static CustomFont>);

    /// Raw joystick bits, see [`crate::input`].
    fn get_joystick(&mut self) -> u8;
}

/// A [`Host`] backed by the callback table the ROM passed to the entry point.
///
/// Each call forwards the table's context handle and the arguments to the matching entry.
/// Nothing is validated.
pub struct Firmware<'a> {
    table: &'a Callbacks,
}

impl<'a> Firmware<'a> {
    /// Bind a callback table.
    ///
    /// # Safety
    ///
    /// Every function pointer in `table` must be callable with `table.context` for as long as
    /// this value lives.
    pub unsafe fn new(table: &'a Callbacks) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a Callbacks {
        self.table
    }
}

impl Host for Firmware<'_> {
    #[inline(always)]
    fn putchar(&mut self, ch: u8) -> i32 {
        unsafe { (self.table.putchar)(self.table.context, ch as c_char) }
    }

    #[inline(always)]
    fn puts(&mut self, s: &CStr) -> i32 {
        unsafe { (self.table.puts)(self.table.context, s.as_ptr()) }
    }

    #[inline(always)]
    fn readc(&mut self) -> i32 {
        unsafe { (self.table.readc)(self.table.context) }
    }

    #[inline(always)]
    fn wfvbi(&mut self) {
        unsafe { (self.table.wfvbi)(self.table.context) }
    }

    #[inline(always)]
    fn kbhit(&mut self) -> i32 {
        unsafe { (self.table.kbhit)(self.table.context) }
    }

    #[inline(always)]
    fn move_cursor(&mut self, row: u8, col: u8) {
        unsafe { (self.table.move_cursor)(self.table.context, row, col) }
    }

    #[inline(always)]
    fn play(&mut self, frequency: u32, channel: Channel, waveform: Waveform, volume: u8) -> i32 {
        unsafe {
            (self.table.play)(self.table.context, frequency, channel as u8, waveform as u8, volume)
        }
    }

    #[inline(always)]
    fn change_font(&mut self, mode: FontMode, font: Option<&'static CustomFont>) {
        let p_font = match font {
            Some(font) => font as *const CustomFont as *const c_void,
            None => ptr::null(),
        };
        unsafe { (self.table.change_font)(self.table.context, mode as u32, p_font) }
    }

    #[inline(always)]
    fn get_joystick(&mut self) -> u8 {
        unsafe { (self.table.get_joystick)(self.table.context) }
    }
}
