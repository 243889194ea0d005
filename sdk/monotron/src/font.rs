//! # Fonts
//!
//! The display renders every text cell through one of three glyph tables. Only one is active
//! at a time, and switching is a call into the firmware:
//!
//! | Mode       | Value | Glyphs                                              |
//! |------------|-------|-----------------------------------------------------|
//! | `Normal`   | 0     | Code page 850, built into the ROM                   |
//! | `Teletext` | 1     | Teletext mosaics; sixels live in `0x80..=0xFF`      |
//! | `Custom`   | 2     | Your own [`CustomFont`], read live from RAM         |
//!
//! The firmware does not copy a custom font. It must stay put for as long as custom mode is
//! selected, which is why [`Console::font_custom`](crate::Console::font_custom) takes a
//! `&'static CustomFont`.

/// Glyph table selector, as understood by the firmware's `change_font` callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum FontMode {
    Normal = 0,
    Teletext = 1,
    Custom = 2,
}

impl TryFrom<u32> for FontMode {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FontMode::Normal),
            1 => Ok(FontMode::Teletext),
            2 => Ok(FontMode::Custom),
            other => Err(other),
        }
    }
}

/// Rows per glyph. Each row is one byte, MSB is the leftmost pixel.
pub const GLYPH_HEIGHT: usize = 16;
pub const GLYPH_COUNT: usize = 256;
/// Size of a custom font payload.
pub const FONT_BYTES: usize = GLYPH_HEIGHT * GLYPH_COUNT;

/// 256 glyphs of 8×16 pixels, indexed by character code.
#[derive(Clone, PartialEq, Eq)]
#[repr(C)]
pub struct CustomFont {
    glyphs: [[u8; GLYPH_HEIGHT]; GLYPH_COUNT],
}

impl CustomFont {
    /// A font where every glyph is blank.
    pub const fn blank() -> Self {
        Self { glyphs: [[0; GLYPH_HEIGHT]; GLYPH_COUNT] }
    }

    /// Reinterpret a raw 4096-byte payload.
    pub const fn from_bytes(bytes: &[u8; FONT_BYTES]) -> Self {
        let mut glyphs = [[0; GLYPH_HEIGHT]; GLYPH_COUNT];
        let mut i = 0;
        while i < FONT_BYTES {
            glyphs[i / GLYPH_HEIGHT][i % GLYPH_HEIGHT] = bytes[i];
            i += 1;
        }
        Self { glyphs }
    }

    #[inline]
    pub fn glyph(&self, code: u8) -> &[u8; GLYPH_HEIGHT] {
        &self.glyphs[code as usize]
    }

    #[inline]
    pub fn glyph_mut(&mut self, code: u8) -> &mut [u8; GLYPH_HEIGHT] {
        &mut self.glyphs[code as usize]
    }

    /// The payload exactly as the firmware reads it.
    pub fn as_bytes(&self) -> &[u8; FONT_BYTES] {
        // SAFETY: repr(C) over a nested u8 array has no padding and the sizes match.
        unsafe { &*(self.glyphs.as_ptr() as *const [u8; FONT_BYTES]) }
    }
}

impl core::fmt::Debug for CustomFont {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomFont").field("bytes", &FONT_BYTES).finish()
    }
}
