//! Default style values and sparse/computed conversion

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::{StyleMap, StyleProperty};

static STANDARD: Lazy<DefaultStyleTable> = Lazy::new(|| {
    DefaultStyleTable::new()
        .with_defaults(StyleProperty::FontFamily, &["Arial"])
        .with_defaults(StyleProperty::FontSize, &["12px"])
        .with_defaults(StyleProperty::FontWeight, &["normal", "400"])
        .with_defaults(StyleProperty::FontStyle, &["normal"])
        .with_defaults(StyleProperty::Color, &["rgb(0, 0, 0)", "black", "#000000"])
        .with_defaults(
            StyleProperty::BackgroundColor,
            &[
                "rgb(255, 255, 255)",
                "white",
                "#ffffff",
                "transparent",
                "rgba(0, 0, 0, 0)",
            ],
        )
        .with_defaults(StyleProperty::VerticalAlign, &["bottom"])
        .with_defaults(StyleProperty::TextAlign, &["left", "start"])
});

/// Accepted default representations per style property
///
/// Each property lists one or more strings that all mean "default" (CSS
/// synonyms such as `start` and `left`). The first entry is the canonical
/// default used when filling in a computed style. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultStyleTable {
    defaults: BTreeMap<StyleProperty, Vec<String>>,
}

impl DefaultStyleTable {
    /// Create an empty table (no property has a default)
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide standard table
    ///
    /// | property | defaults |
    /// |---|---|
    /// | font-family | `Arial` |
    /// | font-size | `12px` |
    /// | font-weight | `normal`, `400` |
    /// | font-style | `normal` |
    /// | color | `rgb(0, 0, 0)`, `black`, `#000000` |
    /// | background-color | `rgb(255, 255, 255)`, `white`, `#ffffff`, `transparent`, `rgba(0, 0, 0, 0)` |
    /// | vertical-align | `bottom` |
    /// | text-align | `left`, `start` |
    pub fn standard() -> &'static DefaultStyleTable {
        &STANDARD
    }

    /// Replace the accepted defaults of one property (first = canonical)
    pub fn with_defaults(mut self, property: StyleProperty, values: &[&str]) -> Self {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        if values.is_empty() {
            self.defaults.remove(&property);
        } else {
            self.defaults.insert(property, values);
        }
        self
    }

    /// The canonical default of a property
    pub fn canonical(&self, property: StyleProperty) -> Option<&str> {
        self.defaults
            .get(&property)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All accepted defaults of a property
    pub fn accepted(&self, property: StyleProperty) -> &[String] {
        self.defaults
            .get(&property)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `value` is one of the accepted defaults of `property`
    pub fn is_default(&self, property: StyleProperty, value: &str) -> bool {
        self.accepted(property).iter().any(|d| d == value)
    }

    /// Keep only the properties whose value differs from every accepted default
    ///
    /// Pass-through entries (properties outside the fixed set) are kept as is.
    ///
    /// # Examples
    /// ```
    /// use sheetgrid_core::{DefaultStyleTable, StyleMap, StyleProperty};
    ///
    /// let defaults = DefaultStyleTable::standard();
    /// let computed = defaults
    ///     .to_computed(&StyleMap::new())
    ///     .with(StyleProperty::Color, "rgb(255, 0, 0)")
    ///     .with(StyleProperty::TextAlign, "start");
    ///
    /// let sparse = defaults.to_sparse(&computed);
    /// assert_eq!(sparse.len(), 1);
    /// assert_eq!(sparse.get(StyleProperty::Color), Some("rgb(255, 0, 0)"));
    /// ```
    pub fn to_sparse(&self, computed: &StyleMap) -> StyleMap {
        let mut sparse = computed.clone();
        sparse.retain_known(|property, value| !self.is_default(property, value));
        sparse
    }

    /// Fill every property missing from `sparse` with its canonical default
    ///
    /// Properties without a default in this table stay absent.
    pub fn to_computed(&self, sparse: &StyleMap) -> StyleMap {
        let mut computed = sparse.clone();
        for property in StyleProperty::ALL {
            if computed.get(property).is_none() {
                if let Some(default) = self.canonical(property) {
                    computed.set(property, default);
                }
            }
        }
        computed
    }
}
