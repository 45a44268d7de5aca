//! Prelude module - common imports for sheetgrid users
//!
//! ```rust
//! use sheetgrid::prelude::*;
//! ```

pub use crate::{
    // Addressing
    CellKey,
    CellRange,
    Coordinate,

    // Clipboard
    CellSource,
    ClipboardContent,
    ClipboardError,
    ClipboardPayload,
    ClipboardResult,
    ColumnWidth,
    ImportOptions,
    PasteOutcome,
    PasteRecord,

    // Error types
    Error,
    Result,

    // Grid
    GridBounds,
    GridStore,
    Growth,
    Sheet,

    // Style types
    DefaultStyleTable,
    StyleMap,
    StyleProperty,
};
