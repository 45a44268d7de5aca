//! Style property maps

use std::collections::BTreeMap;

use super::StyleProperty;

/// A mapping from style properties to CSS values
///
/// The same type holds both *computed* styles (every property present) and
/// *sparse* styles (only non-default properties). Properties outside
/// [`StyleProperty`] are kept verbatim as pass-through entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")
)]
pub struct StyleMap {
    known: BTreeMap<StyleProperty, String>,
    passthrough: BTreeMap<String, String>,
}

impl StyleMap {
    /// Create an empty style map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with<S: Into<String>>(mut self, property: StyleProperty, value: S) -> Self {
        self.set(property, value);
        self
    }

    /// Get a property value
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.known.get(&property).map(String::as_str)
    }

    /// Set a property value
    pub fn set<S: Into<String>>(&mut self, property: StyleProperty, value: S) {
        self.known.insert(property, value.into());
    }

    /// Remove a property, returning its value
    pub fn remove(&mut self, property: StyleProperty) -> Option<String> {
        self.known.remove(&property)
    }

    /// Get a value by CSS property name, including pass-through entries
    pub fn get_css(&self, name: &str) -> Option<&str> {
        match StyleProperty::from_css_name(name) {
            Some(property) => self.get(property),
            None => self
                .passthrough
                .get(&name.to_ascii_lowercase())
                .map(String::as_str),
        }
    }

    /// Set a value by CSS property name
    ///
    /// Names outside the fixed property set are stored as pass-through.
    pub fn set_css<S: Into<String>>(&mut self, name: &str, value: S) {
        match StyleProperty::from_css_name(name) {
            Some(property) => self.set(property, value),
            None => {
                self.passthrough
                    .insert(name.to_ascii_lowercase(), value.into());
            }
        }
    }

    /// Known properties in fixed order
    pub fn properties(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.known.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Pass-through entries in name order
    pub fn passthrough(&self) -> impl Iterator<Item = (&str, &str)> {
        self.passthrough
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All entries as (CSS name, value): known properties first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties()
            .map(|(p, v)| (p.css_name(), v))
            .chain(self.passthrough())
    }

    /// Number of entries, pass-through included
    pub fn len(&self) -> usize {
        self.known.len() + self.passthrough.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.passthrough.is_empty()
    }

    /// Parse an inline CSS declaration list such as `color: red; font-size: 14px`
    ///
    /// Declarations are split on `;` outside parentheses and quotes, then at
    /// the first `:`. Names are lower-cased; names and values are trimmed.
    /// Declarations without a name or value are skipped, later declarations
    /// override earlier ones, and nothing here is fatal.
    ///
    /// # Examples
    /// ```
    /// use sheetgrid_core::{StyleMap, StyleProperty};
    ///
    /// let style = StyleMap::parse_declarations("color: rgb(255,0,0); border: none");
    /// assert_eq!(style.get(StyleProperty::Color), Some("rgb(255,0,0)"));
    /// assert_eq!(style.get_css("border"), Some("none"));
    /// ```
    pub fn parse_declarations(css: &str) -> Self {
        let mut style = Self::new();

        for declaration in split_declarations(css) {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.set_css(name, value);
        }

        style
    }

    /// Render as an inline CSS declaration list (`name: value; ...`)
    pub fn to_declarations(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Rewrite logical `text-align` values to their physical equivalents
    /// (`start` -> `left`, `end` -> `right`)
    pub fn canonicalize_text_align(&mut self) {
        if let Some(value) = self.known.get_mut(&StyleProperty::TextAlign) {
            match value.as_str() {
                "start" => *value = "left".to_string(),
                "end" => *value = "right".to_string(),
                _ => {}
            }
        }
    }

    pub(crate) fn retain_known<F>(&mut self, mut keep: F)
    where
        F: FnMut(StyleProperty, &str) -> bool,
    {
        self.known.retain(|p, v| keep(*p, v));
    }
}

impl From<BTreeMap<String, String>> for StyleMap {
    fn from(entries: BTreeMap<String, String>) -> Self {
        let mut style = Self::new();
        for (name, value) in entries {
            style.set_css(&name, value);
        }
        style
    }
}

impl From<StyleMap> for BTreeMap<String, String> {
    fn from(style: StyleMap) -> Self {
        style
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl FromIterator<(StyleProperty, String)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, String)>>(iter: I) -> Self {
        Self {
            known: iter.into_iter().collect(),
            passthrough: BTreeMap::new(),
        }
    }
}

/// Split on `;` that are not inside parentheses or quotes
fn split_declarations(css: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in css.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&css[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&css[start..]);

    parts
}
