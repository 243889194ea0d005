#![allow(dead_code)]

use std::ffi::CStr;

use monotron::Host;
use monotron::audio::{Channel, Waveform};
use monotron::font::{CustomFont, FontMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Putchar(u8),
    Puts(Vec<u8>),
    Readc,
    Wfvbi,
    Kbhit,
    MoveCursor(u8, u8),
    Play(u32, Channel, Waveform, u8),
    ChangeFont(FontMode, Option<*const CustomFont>),
    GetJoystick,
}

/// Host double that records every call and answers with canned values.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    /// Returned by putchar, puts, kbhit and play.
    pub status: i32,
    /// Returned by readc, front first. Empty means EOF.
    pub input: Vec<i32>,
    pub joystick: u8,
}

impl Recorder {
    pub fn answering(status: i32) -> Self {
        Self { status, ..Self::default() }
    }

    /// Bytes written through putchar, in order.
    pub fn written(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Putchar(ch) => Some(*ch),
                _ => None,
            })
            .collect()
    }
}

impl Host for Recorder {
    fn putchar(&mut self, ch: u8) -> i32 {
        self.calls.push(Call::Putchar(ch));
        self.status
    }

    fn puts(&mut self, s: &CStr) -> i32 {
        self.calls.push(Call::Puts(s.to_bytes().to_vec()));
        self.status
    }

    fn readc(&mut self) -> i32 {
        self.calls.push(Call::Readc);
        if self.input.is_empty() { monotron::EOF } else { self.input.remove(0) }
    }

    fn wfvbi(&mut self) {
        self.calls.push(Call::Wfvbi);
    }

    fn kbhit(&mut self) -> i32 {
        self.calls.push(Call::Kbhit);
        self.status
    }

    fn move_cursor(&mut self, row: u8, col: u8) {
        self.calls.push(Call::MoveCursor(row, col));
    }

    fn play(&mut self, frequency: u32, channel: Channel, waveform: Waveform, volume: u8) -> i32 {
        self.calls.push(Call::Play(frequency, channel, waveform, volume));
        self.status
    }

    fn change_font(&mut self, mode: FontMode, font: Option<&'static CustomFont>) {
        self.calls.push(Call::ChangeFont(mode, font.map(|f| f as *const CustomFont)));
    }

    fn get_joystick(&mut self) -> u8 {
        self.calls.push(Call::GetJoystick);
        self.joystick
    }
}
