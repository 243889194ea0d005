//! # Callback Table
//!
//! The binary contract between the Monotron ROM and an application. The ROM fills in a
//! [`Callbacks`] and passes a pointer to it to the application's entry point (see
//! [`crate::boot`]). Field order and signatures are fixed on both sides:
//!
//! | Field          | Signature                                              |
//! |----------------|--------------------------------------------------------|
//! | `context`      | opaque, passed back as the first argument of each call |
//! | `putchar`      | `(ctx, char) -> i32`                                   |
//! | `puts`         | `(ctx, *const char) -> i32`                            |
//! | `readc`        | `(ctx) -> i32`                                         |
//! | `wfvbi`        | `(ctx)`                                                |
//! | `kbhit`        | `(ctx) -> i32`                                         |
//! | `move_cursor`  | `(ctx, row: u8, col: u8)`                              |
//! | `play`         | `(ctx, freq: u32, channel: u8, waveform: u8, vol: u8) -> i32` |
//! | `change_font`  | `(ctx, mode: u32, *const font)`                        |
//! | `get_joystick` | `(ctx) -> u8`                                          |
//!
//! Applications never call these directly; [`Firmware`](crate::Firmware) does. Hosts written
//! in Rust build a table from any [`Host`] with [`Callbacks::from_host`].

use core::ffi::{CStr, c_char, c_void};

use log::warn;

use crate::audio::{Channel, Waveform};
use crate::font::{CustomFont, FontMode};
use crate::host::Host;

/// Opaque host pointer handed back to every callback.
pub type Context = *mut c_void;

#[repr(C)]
pub struct Callbacks {
    pub context: Context,
    pub putchar: unsafe extern "C" fn(Context, c_char) -> i32,
    pub puts: unsafe extern "C" fn(Context, *const c_char) -> i32,
    pub readc: unsafe extern "C" fn(Context) -> i32,
    pub wfvbi: unsafe extern "C" fn(Context),
    pub kbhit: unsafe extern "C" fn(Context) -> i32,
    pub move_cursor: unsafe extern "C" fn(Context, u8, u8),
    pub play: unsafe extern "C" fn(Context, u32, u8, u8, u8) -> i32,
    pub change_font: unsafe extern "C" fn(Context, u32, *const c_void),
    pub get_joystick: unsafe extern "C" fn(Context) -> u8,
}

impl Callbacks {
    /// Build a table whose entries dispatch to `host`.
    ///
    /// The table stores a raw pointer to `host`; it must not be used after `host` moves or
    /// is dropped.
    pub fn from_host<H: Host>(host: &mut H) -> Self {
        Self {
            context: host as *mut H as Context,
            putchar: putchar::<H>,
            puts: puts::<H>,
            readc: readc::<H>,
            wfvbi: wfvbi::<H>,
            kbhit: kbhit::<H>,
            move_cursor: move_cursor::<H>,
            play: play::<H>,
            change_font: change_font::<H>,
            get_joystick: get_joystick::<H>,
        }
    }
}

impl core::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks").field("context", &self.context).finish_non_exhaustive()
    }
}

#[inline(always)]
unsafe fn host<'a, H: Host>(context: Context) -> &'a mut H {
    unsafe { &mut *(context as *mut H) }
}

unsafe extern "C" fn putchar<H: Host>(context: Context, ch: c_char) -> i32 {
    unsafe { host::<H>(context) }.putchar(ch as u8)
}

unsafe extern "C" fn puts<H: Host>(context: Context, s: *const c_char) -> i32 {
    let s = unsafe { CStr::from_ptr(s) };
    unsafe { host::<H>(context) }.puts(s)
}

unsafe extern "C" fn readc<H: Host>(context: Context) -> i32 {
    unsafe { host::<H>(context) }.readc()
}

unsafe extern "C" fn wfvbi<H: Host>(context: Context) {
    unsafe { host::<H>(context) }.wfvbi()
}

unsafe extern "C" fn kbhit<H: Host>(context: Context) -> i32 {
    unsafe { host::<H>(context) }.kbhit()
}

unsafe extern "C" fn move_cursor<H: Host>(context: Context, row: u8, col: u8) {
    unsafe { host::<H>(context) }.move_cursor(row, col)
}

unsafe extern "C" fn play<H: Host>(
    context: Context,
    frequency: u32,
    channel: u8,
    waveform: u8,
    volume: u8,
) -> i32 {
    let (channel, waveform) = match (Channel::try_from(channel), Waveform::try_from(waveform)) {
        (Ok(channel), Ok(waveform)) => (channel, waveform),
        _ => {
            warn!("play: bad channel {channel} or waveform {waveform}");
            return -1;
        }
    };
    unsafe { host::<H>(context) }.play(frequency, channel, waveform, volume)
}

unsafe extern "C" fn change_font<H: Host>(context: Context, mode: u32, p_font: *const c_void) {
    let mode = match FontMode::try_from(mode) {
        Ok(mode) => mode,
        Err(mode) => {
            warn!("change_font: unknown mode {mode}");
            return;
        }
    };
    let font = match mode {
        FontMode::Custom if p_font.is_null() => {
            warn!("change_font: custom mode without a font");
            return;
        }
        // the application guarantees the payload outlives custom mode
        FontMode::Custom => Some(unsafe { &*(p_font as *const CustomFont) }),
        _ => None,
    };
    unsafe { host::<H>(context) }.change_font(mode, font)
}

unsafe extern "C" fn get_joystick<H: Host>(context: Context) -> u8 {
    unsafe { host::<H>(context) }.get_joystick()
}
