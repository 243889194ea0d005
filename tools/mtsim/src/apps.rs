//! Small applications built into the simulator. Each is an ordinary Monotron `main`.

use core::fmt::Write;

use clap::ValueEnum;
use monotron::audio::{Channel, Waveform};
use monotron::boot::Main;
use monotron::input::fire_pressed;
use monotron::Console;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum App {
    /// Echo keyboard input until EOF
    Echo,
    /// Draw every sixel in both styles
    Sixels,
    /// Random sixels and tones until a key or fire is pressed
    Noise,
}

impl App {
    pub fn main(self) -> Main {
        match self {
            App::Echo => echo,
            App::Sixels => sixels,
            App::Noise => noise,
        }
    }
}

fn echo(console: &mut Console<'_>) -> i32 {
    console.puts(c"Type away. EOF quits.\n");
    let mut count = 0;
    while let Some(key) = console.read_key() {
        if console.putchar(key) < 0 {
            return 1;
        }
        count += 1;
    }
    let _ = writeln!(console, "\n{count} bytes");
    0
}

fn sixels(console: &mut Console<'_>) -> i32 {
    console.font_teletext();
    for (row, put) in [Console::put_connected_sixel, Console::put_separated_sixel].into_iter().enumerate() {
        console.move_cursor(row as u8 * 3, 0);
        for pattern in 0..64 {
            put(console, pattern);
            console.putchar(b' ');
        }
    }
    console.font_normal();
    if console.putchar(b'\n') < 0 { 1 } else { 0 }
}

const NOISE_ROWS: u8 = 16;
const NOISE_COLS: u8 = 32;

fn noise(console: &mut Console<'_>) -> i32 {
    console.font_teletext();
    let mut frames = 0;
    'frames: loop {
        for row in 0..NOISE_ROWS {
            if console.kbhit() != 0 || fire_pressed(console.get_joystick()) {
                break 'frames;
            }
            console.move_cursor(row, 0);
            for _ in 0..NOISE_COLS {
                let pattern = console.rand() as u8;
                console.put_connected_sixel(pattern);
            }
            let frequency = 200 + (console.rand() as u32 % 800);
            console.play(frequency, Channel::Channel0, Waveform::Square, 64);
            console.wfvbi();
            frames += 1;
        }
    }
    console.play(0, Channel::Channel0, Waveform::Square, 0);
    console.font_normal();
    let _ = writeln!(console, "\n{frames} frames");
    0
}
