//! # sheetgrid
//!
//! Spreadsheet grid addressing and clipboard import.
//!
//! Sheetgrid keeps the logical state of a spreadsheet grid (which cells exist,
//! what they contain) separate from any presentation layer, and turns
//! clipboard payloads into placement records for it.
//!
//! ## Features
//!
//! - Bijective A1-style cell keys (`A1`, `Z9`, `AA10`, ...)
//! - Idempotent grid growth that never re-emits an existing cell
//! - Sparse cell styles normalized against a table of CSS defaults
//! - Paste from plain text (tab-separated) or HTML tables
//! - Copy ranges back out as text and HTML
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! let anchor = Coordinate::new(1, 1).unwrap();
//!
//! let payload = ClipboardPayload::text("Name\tQty\nwidget\t3");
//! let outcome = sheet.paste(&payload, anchor, &ImportOptions::default()).unwrap();
//! assert_eq!(outcome.records.len(), 4);
//!
//! assert_eq!(sheet.text("B2").unwrap(), Some("3"));
//!
//! let content = sheet.copy(&CellRange::parse("A1:B1").unwrap());
//! assert_eq!(content.text, "Name\tQty");
//! ```

pub mod prelude;
mod sheet;

pub use sheet::{Cell, Sheet};

// Re-export core types
pub use sheetgrid_core::{
    css_color_to_hex, decode_column, decode_key, encode_column, encode_key,
    is_cell_range_reference, is_cell_reference, CellKey, CellRange, Coordinate, CssColor,
    DefaultStyleTable, Error, GridBounds, GridStore, Growth, GrowthItem, Result, StyleMap,
    StyleProperty, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT, MAX_COLUMNS, MAX_ROWS,
};

// Re-export clipboard types
pub use sheetgrid_clipboard::{
    import_payload, CellSource, ClipboardContent, ClipboardError, ClipboardExporter,
    ClipboardPayload, ClipboardResult, ColumnWidth, HtmlImporter, ImportOptions, PasteOutcome,
    PasteRecord, TextImporter,
};
