//! # Audio
//!
//! The Monotron synthesizer has three independent channels, each playing one of four
//! waveforms. Notes are started with [`Console::play`](crate::Console::play) and keep
//! sounding until replaced or silenced with volume 0.
//!
//! ```ignore
//! use monotron::audio::{Channel, Waveform};
//!
//! console.play(440, Channel::Channel0, Waveform::Square, 255);
//! ```
//!
//! Both enums are narrowed to a single byte on their way through the callback table.

/// One of the three synthesizer voices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    Channel0 = 0,
    Channel1 = 1,
    Channel2 = 2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Waveform {
    Square = 0,
    Sine = 1,
    Sawtooth = 2,
    Noise = 3,
}

/// Loudest volume a channel accepts. 0 silences it.
pub const MAX_VOLUME: u8 = u8::MAX;

impl TryFrom<u8> for Channel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::Channel0),
            1 => Ok(Channel::Channel1),
            2 => Ok(Channel::Channel2),
            other => Err(other),
        }
    }
}

impl TryFrom<u8> for Waveform {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Waveform::Square),
            1 => Ok(Waveform::Sine),
            2 => Ok(Waveform::Sawtooth),
            3 => Ok(Waveform::Noise),
            other => Err(other),
        }
    }
}
