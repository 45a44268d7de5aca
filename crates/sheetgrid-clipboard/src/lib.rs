//! # sheetgrid-clipboard
//!
//! Clipboard import and export for sheetgrid.
//!
//! Imports turn a plain-text or HTML-table payload into [`PasteRecord`]s
//! placed relative to an anchor cell, growing the [`GridStore`] once per
//! paste. Exports render a range of cells back into both formats.
//!
//! [`GridStore`]: sheetgrid_core::GridStore

mod error;
mod export;
mod html;
mod options;
mod payload;
mod record;
mod text;

pub use error::{ClipboardError, ClipboardResult};
pub use export::{CellSource, ClipboardContent, ClipboardExporter};
pub use html::HtmlImporter;
pub use options::ImportOptions;
pub use payload::{import_payload, ClipboardPayload};
pub use record::{ColumnWidth, PasteOutcome, PasteRecord};
pub use text::TextImporter;
