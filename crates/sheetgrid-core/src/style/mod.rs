//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`StyleProperty`] - The fixed set of styleable CSS properties
//! - [`StyleMap`] - Computed or sparse property values
//! - [`DefaultStyleTable`] - Accepted default values and the sparse/computed conversion
//! - [`CssColor`] - CSS colour values

mod color;
mod defaults;
mod map;

pub use color::{css_color_to_hex, CssColor};
pub use defaults::DefaultStyleTable;
pub use map::StyleMap;

use std::fmt;

/// A styleable cell property
///
/// Variant order is the fixed order used when rendering or iterating styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StyleProperty {
    /// `font-family`
    FontFamily,
    /// `font-size`
    FontSize,
    /// `font-weight`
    FontWeight,
    /// `font-style`
    FontStyle,
    /// `color`
    Color,
    /// `background-color`
    BackgroundColor,
    /// `vertical-align`
    VerticalAlign,
    /// `text-align`
    TextAlign,
}

impl StyleProperty {
    /// All properties, in iteration order
    pub const ALL: [StyleProperty; 8] = [
        StyleProperty::FontFamily,
        StyleProperty::FontSize,
        StyleProperty::FontWeight,
        StyleProperty::FontStyle,
        StyleProperty::Color,
        StyleProperty::BackgroundColor,
        StyleProperty::VerticalAlign,
        StyleProperty::TextAlign,
    ];

    /// The CSS property name
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::FontStyle => "font-style",
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::VerticalAlign => "vertical-align",
            StyleProperty::TextAlign => "text-align",
        }
    }

    /// Look up a property by CSS name (ASCII case-insensitive)
    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.css_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}
