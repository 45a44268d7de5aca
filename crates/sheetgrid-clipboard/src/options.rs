//! Import options

use sheetgrid_core::DefaultStyleTable;

/// Options for importing clipboard content
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Prefer the HTML payload when present (default: true)
    ///
    /// When false only the plain-text payload is used and no style is kept.
    pub include_style: bool,
    /// Retry as plain text when the HTML payload is malformed (default: true)
    pub fallback_to_text: bool,
    /// Rewrite `text-align: start|end` to `left|right` (default: true)
    pub canonicalize_alignment: bool,
    /// Records a consumer should apply per batch (default: 500)
    pub batch_size: usize,
    /// Default style values stripped from pasted cells
    pub defaults: DefaultStyleTable,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            include_style: true,
            fallback_to_text: true,
            canonicalize_alignment: true,
            batch_size: 500,
            defaults: DefaultStyleTable::standard().clone(),
        }
    }
}

impl ImportOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the HTML payload is preferred
    pub fn with_include_style(mut self, include_style: bool) -> Self {
        self.include_style = include_style;
        self
    }

    /// Set whether malformed HTML falls back to plain text
    pub fn with_fallback_to_text(mut self, fallback: bool) -> Self {
        self.fallback_to_text = fallback;
        self
    }

    /// Set whether logical text alignment is canonicalized
    pub fn with_canonicalize_alignment(mut self, canonicalize: bool) -> Self {
        self.canonicalize_alignment = canonicalize;
        self
    }

    /// Set the batch size (at least 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the default style table
    pub fn with_defaults(mut self, defaults: DefaultStyleTable) -> Self {
        self.defaults = defaults;
        self
    }
}
