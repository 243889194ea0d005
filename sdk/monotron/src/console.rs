use core::ffi::CStr;

use log::trace;

use crate::audio::{Channel, Waveform};
use crate::font::{CustomFont, FontMode};
use crate::host::Host;
use crate::itoa::{ITOA_LEN, itoa};
use crate::rand::Rand;
use crate::sixel;

/// The application's handle on the machine.
///
/// Built once by [`boot::start`](crate::boot::start) and passed to `main`. Every I/O method
/// forwards straight to the [`Host`] and returns its result untouched.
pub struct Console<'a> {
    host: &'a mut dyn Host,
    rand: Rand,
}

impl<'a> Console<'a> {
    pub fn new(host: &'a mut dyn Host) -> Self {
        Self { host, rand: Rand::new() }
    }

    #[inline(always)]
    pub fn putchar(&mut self, ch: u8) -> i32 {
        self.host.putchar(ch)
    }

    #[inline(always)]
    pub fn puts(&mut self, s: &CStr) -> i32 {
        self.host.puts(s)
    }

    /// Blocking read. Returns a character or [`EOF`](crate::EOF).
    #[inline(always)]
    pub fn getchar(&mut self) -> i32 {
        self.host.readc()
    }

    /// [`getchar`](Console::getchar) as a byte. [`EOF`](crate::EOF), or any other status
    /// that is not a byte, is `None`.
    pub fn read_key(&mut self) -> Option<u8> {
        u8::try_from(self.host.readc()).ok()
    }

    /// Non-zero if a character is waiting. Never blocks.
    #[inline(always)]
    pub fn kbhit(&mut self) -> i32 {
        self.host.kbhit()
    }

    /// Wait for the vertical blanking interval.
    #[inline(always)]
    pub fn wfvbi(&mut self) {
        self.host.wfvbi()
    }

    /// Sleep for a number of frames. See [`FRAMES_PER_SECOND`](crate::FRAMES_PER_SECOND).
    pub fn wait_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.host.wfvbi();
        }
    }

    #[inline(always)]
    pub fn move_cursor(&mut self, row: u8, col: u8) {
        self.host.move_cursor(row, col)
    }

    #[inline(always)]
    pub fn play(&mut self, frequency: u32, channel: Channel, waveform: Waveform, volume: u8) -> i32 {
        self.host.play(frequency, channel, waveform, volume)
    }

    /// Switch to the code page 850 font.
    pub fn font_normal(&mut self) {
        trace!("font -> normal");
        self.host.change_font(FontMode::Normal, None)
    }

    /// Switch to the teletext font, needed for sixels.
    pub fn font_teletext(&mut self) {
        trace!("font -> teletext");
        self.host.change_font(FontMode::Teletext, None)
    }

    /// Switch to a font in RAM. The firmware reads it in place.
    pub fn font_custom(&mut self, font: &'static CustomFont) {
        trace!("font -> custom @ {:p}", font);
        self.host.change_font(FontMode::Custom, Some(font))
    }

    #[inline(always)]
    pub fn get_joystick(&mut self) -> u8 {
        self.host.get_joystick()
    }

    /// Write a connected sixel. Assumes the teletext font is selected.
    pub fn put_connected_sixel(&mut self, pattern: u8) -> i32 {
        self.host.putchar(sixel::connected(pattern))
    }

    /// Write a separated sixel. Assumes the teletext font is selected.
    pub fn put_separated_sixel(&mut self, pattern: u8) -> i32 {
        self.host.putchar(sixel::separated(pattern))
    }

    /// Write `n` in decimal. Returns the status of the first failing `putchar`, or of the
    /// last one if none failed.
    pub fn put_int(&mut self, n: i32) -> i32 {
        let mut buf = [0; ITOA_LEN];
        let mut status = 0;
        for &b in itoa(n, &mut buf).as_bytes() {
            status = self.host.putchar(b);
            if status < 0 {
                break;
            }
        }
        status
    }

    /// Next pseudo-random value in `0..RAND_MAX`.
    pub fn rand(&mut self) -> i32 {
        self.rand.rand()
    }

    pub fn srand(&mut self, seed: u32) {
        self.rand.srand(seed)
    }
}

impl core::fmt::Write for Console<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for &b in s.as_bytes() {
            if self.host.putchar(b) < 0 {
                return Err(core::fmt::Error);
            }
        }
        Ok(())
    }
}
