//! CSS colour values

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static RGB_FUNCTION: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(?:\d+(?:\.\d*)?|\.\d+)\s*)?\)$",
    )
    .ok()
});

/// An opaque RGB colour as found in CSS values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CssColor {
    /// Create an RGB colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rgb(r, g, b)`, `rgba(r, g, b, a)`, `#rgb` or `#rrggbb`
    ///
    /// The alpha channel of `rgba()` is accepted but dropped.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Some(hex) = value.strip_prefix('#') {
            return Self::from_hex(hex);
        }

        let caps = RGB_FUNCTION.as_ref()?.captures(value)?;
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        Some(Self::rgb(channel(1)?, channel(2)?, channel(3)?))
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self::rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Convert to a lower-case `#rrggbb` string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Convert a CSS colour value to `#rrggbb`, `None` if it is not an RGB colour
///
/// # Examples
/// ```
/// use sheetgrid_core::css_color_to_hex;
///
/// assert_eq!(css_color_to_hex("rgb(255, 0, 0)").as_deref(), Some("#ff0000"));
/// assert_eq!(css_color_to_hex("red"), None);
/// ```
pub fn css_color_to_hex(value: &str) -> Option<String> {
    CssColor::parse(value).map(|c| c.to_hex())
}
