//! Hex color strings as used by the options object (`"#dddddd"`).

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Color(hex & 0x00ff_ffff)
    }

    #[inline]
    pub const fn hex(self) -> u32 {
        self.0
    }

    /// Channels in [0, 1] exactly as written (sRGB encoded).
    pub fn to_srgb(self) -> [f32; 3] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b]
    }

    /// Channels decoded to linear light for shading.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parse `#` followed by up to six hex digits into a number.
///
/// Digits are read as a plain base-16 integer, so `"#fff"` is `0xfff`, not
/// `0xffffff`. Stricter than a browser's `parseInt(s.substr(1), 16)`: extra
/// digits (`"#ddddddff"`) and trailing junk (`"#dddzzz"`) are errors rather
/// than truncated to a valid prefix.
pub fn parse_hex_color(s: &str) -> Result<u32, ColorError> {
    let digits = s
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
    if digits.is_empty() {
        return Err(ColorError::Empty(s.to_string()));
    }
    if digits.len() > 6 {
        return Err(ColorError::TooLong(s.to_string()));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigits(s.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidDigits(s.to_string()))
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s).map(Color::from_hex)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
