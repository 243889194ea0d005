//! # Monotron SDK
//!
//! The Rust SDK for writing applications for the [Monotron](https://github.com/thejpster/monotron)
//! home computer.
//!
//! The Monotron ROM loads your application into RAM and calls its entry point with a table
//! of callbacks ([`Callbacks`]). Everything the hardware can do (text, cursor, sound, fonts,
//! joystick) goes through that table. This crate binds the table for you and hands your
//! `main` a [`Console`].
//!
//! ## Quick Start
//!
//! ```ignore
//! #![no_std]
//! #![no_main]
//!
//! use core::fmt::Write;
//! use monotron::{Console, entry};
//!
//! entry!(main);
//!
//! fn main(console: &mut Console<'_>) -> i32 {
//!     let _ = writeln!(console, "Hello, Monotron!");
//!     loop {
//!         console.wfvbi(); // 60 Hz
//!         if console.kbhit() != 0 {
//!             return console.getchar();
//!         }
//!     }
//! }
//! ```
//!
//! ## Teletext Graphics
//!
//! The teletext font holds 2×3 block "sixels" in `0x80..=0xFF`. Select the font, then write
//! a 6-bit pattern in either style:
//!
//! ```ignore
//! use monotron::sixel::Sixel;
//!
//! console.font_teletext();
//! console.put_connected_sixel(0b11_00_11);
//! console.put_separated_sixel(Sixel::dot(1, 0).bits());
//! ```
//!
//! ## Input
//!
//! The joystick is an Atari-style 9-pin stick, read fresh every time:
//!
//! ```ignore
//! use monotron::input::{is_up, fire_pressed};
//!
//! let state = console.get_joystick();
//! if is_up(state) && fire_pressed(state) { /* ... */ }
//! ```
//!
//! ## Hardware Overview
//!
//! | Feature | Spec |
//! |---------|------|
//! | CPU | Cortex-M4F @ 80 MHz |
//! | Display | 800×600 VGA, 48×36 text cells of 8×16 pixels |
//! | Fonts | Code page 850, Teletext, or 4 KiB custom font in RAM |
//! | Audio | 3 channels, 8-bit mono output |
//! | Input | Serial @ 115200 bps, 9-pin Atari joystick |

#![cfg_attr(not(test), no_std)]

pub mod audio;
pub mod boot;
pub mod callbacks;
pub mod console;
pub mod font;
pub mod host;
pub mod input;
pub mod itoa;
pub mod rand;
pub mod sixel;

pub use callbacks::Callbacks;
pub use console::Console;
pub use host::{Firmware, Host};

/// Returned by [`Console::getchar`] when there is no more input.
pub const EOF: i32 = -1;

/// Rate at which [`Console::wfvbi`] returns.
pub const FRAMES_PER_SECOND: u32 = 60;
