//! Clipboard payload dispatch

use sheetgrid_core::{Coordinate, GridStore};

use crate::error::ClipboardResult;
use crate::html::HtmlImporter;
use crate::options::ImportOptions;
use crate::record::PasteOutcome;
use crate::text::TextImporter;

/// The flavours offered by one clipboard paste
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipboardPayload {
    /// `text/plain` flavour
    pub text: Option<String>,
    /// `text/html` flavour
    pub html: Option<String>,
}

impl ClipboardPayload {
    /// Payload with only a plain-text flavour
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
            html: None,
        }
    }

    /// Payload with only an HTML flavour
    pub fn html<S: Into<String>>(html: S) -> Self {
        Self {
            text: None,
            html: Some(html.into()),
        }
    }

    /// Add a plain-text flavour
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Whether neither flavour is present
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.html.is_none()
    }
}

/// Import the best flavour of `payload` at `anchor`
///
/// HTML is used when present and `options.include_style` is set, otherwise
/// the plain text. Malformed HTML is retried as plain text when
/// `options.fallback_to_text` is set and a text flavour exists; the grid is
/// untouched by the failed attempt. An empty payload pastes nothing.
pub fn import_payload(
    grid: &mut GridStore,
    payload: &ClipboardPayload,
    anchor: Coordinate,
    options: &ImportOptions,
) -> ClipboardResult<PasteOutcome> {
    if options.include_style {
        if let Some(html) = payload.html.as_deref() {
            match HtmlImporter::import(grid, html, anchor, options) {
                Err(e) if e.is_malformed() && options.fallback_to_text => {
                    if let Some(text) = payload.text.as_deref() {
                        log::warn!("{}; pasting plain text instead", e);
                        return TextImporter::import(grid, text, anchor);
                    }
                    return Err(e);
                }
                result => return result,
            }
        }
    }

    match payload.text.as_deref() {
        Some(text) => TextImporter::import(grid, text, anchor),
        None => {
            log::debug!("nothing to paste at {}", anchor);
            Ok(PasteOutcome::default())
        }
    }
}
