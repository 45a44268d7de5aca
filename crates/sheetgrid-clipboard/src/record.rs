//! Paste records and outcomes

use sheetgrid_core::{CellKey, Coordinate, Error, GridStore, Growth, StyleMap, MAX_COLUMNS, MAX_ROWS};

use crate::error::ClipboardResult;

/// One pasted cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasteRecord {
    /// Target cell
    pub coordinate: Coordinate,
    /// Cell text
    pub text: String,
    /// Sparse style (non-default properties only)
    pub style: StyleMap,
}

impl PasteRecord {
    /// Create a record
    pub fn new<S: Into<String>>(coordinate: Coordinate, text: S, style: StyleMap) -> Self {
        Self {
            coordinate,
            text: text.into(),
            style,
        }
    }

    /// Key of the target cell
    pub fn key(&self) -> CellKey {
        self.coordinate.key()
    }
}

/// A column width hint from an HTML `<col width>` element
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnWidth {
    /// Target column (1-based)
    pub column: u32,
    /// Width in CSS pixels
    pub width: f64,
}

/// Result of one paste operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasteOutcome {
    /// Pasted cells in row-major order, each coordinate at most once
    pub records: Vec<PasteRecord>,
    /// Column width hints
    pub column_widths: Vec<ColumnWidth>,
    /// Columns in the payload (measured on its first row)
    pub columns: u32,
    /// Rows in the payload
    pub rows: u32,
    /// Cells introduced in the grid by this paste, if it grew
    pub growth: Option<Growth>,
}

impl PasteOutcome {
    /// Whether nothing was pasted
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in chunks of at most `batch_size`
    pub fn batches(&self, batch_size: usize) -> std::slice::Chunks<'_, PasteRecord> {
        self.records.chunks(batch_size.max(1))
    }
}

/// Coordinate `(columns, rows)` away from `origin`, or `CapacityExceeded`
pub(crate) fn place(origin: Coordinate, columns: usize, rows: usize) -> ClipboardResult<Coordinate> {
    let column = origin.column() as u64 + columns as u64;
    let row = origin.row() as u64 + rows as u64;
    if column > MAX_COLUMNS as u64 || row > MAX_ROWS as u64 {
        return Err(capacity_exceeded(column, row).into());
    }
    Ok(Coordinate::new(column as u32, row as u32)?)
}

/// Grow `grid` to `(anchor.column + columns, anchor.row + rows)`
pub(crate) fn reserve(
    grid: &mut GridStore,
    anchor: Coordinate,
    columns: usize,
    rows: usize,
) -> ClipboardResult<Growth> {
    let column = anchor.column() as u64 + columns as u64;
    let row = anchor.row() as u64 + rows as u64;
    if column > MAX_COLUMNS as u64 || row > MAX_ROWS as u64 {
        return Err(capacity_exceeded(column, row).into());
    }
    Ok(grid.ensure_capacity(column as u32, row as u32)?)
}

fn capacity_exceeded(column: u64, row: u64) -> Error {
    Error::CapacityExceeded {
        column: u32::try_from(column).unwrap_or(u32::MAX),
        row: u32::try_from(row).unwrap_or(u32::MAX),
        max_columns: MAX_COLUMNS,
        max_rows: MAX_ROWS,
    }
}
