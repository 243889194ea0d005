use std::ffi::CStr;
use std::io::{self, Read, Write};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, unbounded};
use monotron::audio::{Channel, Waveform};
use monotron::font::{CustomFont, FontMode};
use monotron::sixel::{self, Sixel};
use monotron::{EOF, FRAMES_PER_SECOND, Host};
use tracing::{debug, error, info, trace};

/// Plays the part of the Monotron ROM on an ANSI terminal.
///
/// Keyboard input arrives on a channel fed by [`spawn_stdin`]; once the sender hangs up,
/// reads return EOF.
pub struct Terminal<W: Write> {
    out: W,
    keys: Receiver<u8>,
    font: FontMode,
    joystick: u8,
    frame: Duration,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, keys: Receiver<u8>) -> Self {
        Self {
            out,
            keys,
            font: FontMode::Normal,
            joystick: 0,
            frame: Duration::from_secs(1) / FRAMES_PER_SECOND,
        }
    }

    /// Fixed joystick state reported to the application.
    pub fn with_joystick(mut self, state: u8) -> Self {
        self.joystick = state;
        self
    }

    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            error!("flush: {e}");
        }
    }

    fn emit(&mut self, ch: u8) -> io::Result<()> {
        let mut utf8 = [0; 4];
        let s = render(self.font, ch).encode_utf8(&mut utf8);
        self.out.write_all(s.as_bytes())
    }
}

/// Read stdin byte by byte on a helper thread.
pub fn spawn_stdin() -> Receiver<u8> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for byte in io::stdin().lock().bytes() {
            match byte {
                Ok(b) => {
                    if tx.send(b).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("stdin: {e}");
                    break;
                }
            }
        }
        debug!("stdin closed");
    });
    rx
}

/// How a byte looks on screen under the given font.
///
/// Teletext sixels become Unicode block sextants. Everything else is shown as Latin-1, which
/// is close enough to code page 850 for the printable ASCII range.
pub fn render(font: FontMode, ch: u8) -> char {
    if font == FontMode::Teletext {
        if let Some((dots, _style)) = sixel::decode(ch) {
            return sextant(dots);
        }
    }
    char::from(ch)
}

/// Unicode "BLOCK SEXTANT" for a pattern. The block skips the two half-block patterns, which
/// already exist as ▌ and ▐.
pub fn sextant(dots: Sixel) -> char {
    match dots.bits() {
        0 => ' ',
        0b01_01_01 => '▌',
        0b10_10_10 => '▐',
        0b11_11_11 => '█',
        n => {
            let mut offset = u32::from(n) - 1;
            if n > 0b01_01_01 {
                offset -= 1;
            }
            if n > 0b10_10_10 {
                offset -= 1;
            }
            char::from_u32(0x1FB00 + offset).unwrap_or('?')
        }
    }
}

impl<W: Write> Host for Terminal<W> {
    fn putchar(&mut self, ch: u8) -> i32 {
        match self.emit(ch) {
            Ok(()) => i32::from(ch),
            Err(e) => {
                error!("putchar: {e}");
                EOF
            }
        }
    }

    fn puts(&mut self, s: &CStr) -> i32 {
        for &b in s.to_bytes() {
            if let Err(e) = self.emit(b) {
                error!("puts: {e}");
                return EOF;
            }
        }
        0
    }

    fn readc(&mut self) -> i32 {
        self.flush();
        match self.keys.recv() {
            Ok(b) => i32::from(b),
            Err(_) => EOF,
        }
    }

    fn wfvbi(&mut self) {
        self.flush();
        thread::sleep(self.frame);
    }

    fn kbhit(&mut self) -> i32 {
        i32::from(!self.keys.is_empty())
    }

    fn move_cursor(&mut self, row: u8, col: u8) {
        trace!(row, col, "move_cursor");
        // ANSI positions are 1-based
        if let Err(e) = write!(self.out, "\x1b[{};{}H", u16::from(row) + 1, u16::from(col) + 1) {
            error!("move_cursor: {e}");
        }
    }

    fn play(&mut self, frequency: u32, channel: Channel, waveform: Waveform, volume: u8) -> i32 {
        info!(frequency, ?channel, ?waveform, volume, "play");
        0
    }

    fn change_font(&mut self, mode: FontMode, font: Option<&'static CustomFont>) {
        debug!(?mode, custom = font.is_some(), "change_font");
        self.font = mode;
    }

    fn get_joystick(&mut self) -> u8 {
        self.joystick
    }
}
