//! # Sixels
//!
//! A sixel is a 2×3 block of dots drawn as a single character cell in the teletext font.
//! Each dot is one bit of a 6-bit pattern:
//!
//! ```text
//! +---+---+
//! | 0 | 1 |
//! +---+---+
//! | 2 | 3 |
//! +---+---+
//! | 4 | 5 |
//! +---+---+
//! ```
//!
//! The font carries every pattern twice: "connected" dots fill their cell, "separated" dots
//! leave a gutter around each one. The glyph codes are:
//!
//! | Style       | Patterns `0..=31` | Patterns `32..=63` |
//! |-------------|-------------------|--------------------|
//! | Connected   | `0x80..=0x9F`     | `0xC0..=0xDF`      |
//! | Separated   | `0xA0..=0xBF`     | `0xE0..=0xFF`      |
//!
//! These only look right while [`FontMode::Teletext`](crate::font::FontMode) is selected.

use bit_field::BitField;

const CONNECTED_LOW: u8 = 0x80;
const CONNECTED_HIGH: u8 = 0xC0;
const SEPARATED_LOW: u8 = 0xA0;
const SEPARATED_HIGH: u8 = 0xE0;

const PATTERN_MASK: u8 = 0b0011_1111;
/// Patterns at or above this land in the upper glyph range.
const HIGH_SPLIT: u8 = 32;

/// Bit index of a dot, if `row`/`col` lies inside the 3×2 cell.
const fn cell(row: usize, col: usize) -> Option<usize> {
    if row < 3 && col < 2 { Some(row * 2 + col) } else { None }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SixelStyle {
    Connected,
    Separated,
}

/// A 6-bit dot pattern. Bits above 5 are always clear.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Sixel(u8);

impl Sixel {
    pub const EMPTY: Sixel = Sixel(0);
    pub const FULL: Sixel = Sixel(PATTERN_MASK);

    /// Build from a raw pattern, dropping bits 6 and 7.
    #[inline]
    pub const fn new(pattern: u8) -> Self {
        Sixel(pattern & PATTERN_MASK)
    }

    /// A single dot at `row` (0-2), `col` (0-1). Cells outside the grid give [`Sixel::EMPTY`].
    pub const fn dot(row: usize, col: usize) -> Self {
        match cell(row, col) {
            Some(bit) => Sixel(1 << bit),
            None => Sixel::EMPTY,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `false` for cells outside the grid.
    pub fn is_set(self, row: usize, col: usize) -> bool {
        cell(row, col).is_some_and(|bit| self.0.get_bit(bit))
    }

    /// Set or clear one dot. Cells outside the grid leave the pattern unchanged.
    pub fn with(mut self, row: usize, col: usize, on: bool) -> Self {
        if let Some(bit) = cell(row, col) {
            self.0.set_bit(bit, on);
        }
        self
    }

    /// Glyph code for this pattern in the given style.
    pub const fn glyph(self, style: SixelStyle) -> u8 {
        let (low, high) = match style {
            SixelStyle::Connected => (CONNECTED_LOW, CONNECTED_HIGH),
            SixelStyle::Separated => (SEPARATED_LOW, SEPARATED_HIGH),
        };
        if self.0 >= HIGH_SPLIT {
            self.0 - HIGH_SPLIT + high
        } else {
            self.0 + low
        }
    }
}

/// Teletext glyph for `pattern` drawn with connected dots. Bits 6 and 7 are ignored.
#[inline]
pub const fn connected(pattern: u8) -> u8 {
    Sixel::new(pattern).glyph(SixelStyle::Connected)
}

/// Teletext glyph for `pattern` drawn with separated dots. Bits 6 and 7 are ignored.
#[inline]
pub const fn separated(pattern: u8) -> u8 {
    Sixel::new(pattern).glyph(SixelStyle::Separated)
}

/// Recover the pattern and style behind a teletext glyph code.
///
/// Returns `None` for anything below `0x80`, which the teletext font uses for text.
pub fn decode(glyph: u8) -> Option<(Sixel, SixelStyle)> {
    // bit 7 marks a sixel, bit 5 the style, bit 6 the upper half of the pattern
    if !glyph.get_bit(7) {
        return None;
    }
    let style = if glyph.get_bit(5) { SixelStyle::Separated } else { SixelStyle::Connected };
    let mut pattern = glyph.get_bits(0..5);
    pattern.set_bit(5, glyph.get_bit(6));
    Some((Sixel(pattern), style))
}
