//! Plain-text import

use sheetgrid_core::{Coordinate, GridStore, StyleMap};

use crate::error::ClipboardResult;
use crate::record::{place, reserve, PasteOutcome, PasteRecord};

/// Imports tab-separated plain text
pub struct TextImporter;

impl TextImporter {
    /// Paste `text` with its first field on `anchor`
    ///
    /// Lines are separated by `\n` or `\r\n` (a trailing terminator does not
    /// add a row) and fields by `\t`. The column count is measured on the
    /// first line only. The grid is grown once, to
    /// `(anchor.column + columns, anchor.row + rows)`, before the outcome is
    /// returned; if any cell would fall outside the supported range nothing
    /// is grown and `CapacityExceeded` is returned. Plain text never carries
    /// style.
    ///
    /// # Examples
    /// ```
    /// use sheetgrid_clipboard::TextImporter;
    /// use sheetgrid_core::{Coordinate, GridStore};
    ///
    /// let mut grid = GridStore::new();
    /// let anchor = Coordinate::new(1, 1).unwrap();
    /// let outcome = TextImporter::import(&mut grid, "A\tB\nC\tD", anchor).unwrap();
    ///
    /// let keys: Vec<String> = outcome.records.iter().map(|r| r.key().to_string()).collect();
    /// assert_eq!(keys, ["A1", "B1", "A2", "B2"]);
    /// ```
    pub fn import(
        grid: &mut GridStore,
        text: &str,
        anchor: Coordinate,
    ) -> ClipboardResult<PasteOutcome> {
        let lines: Vec<&str> = text.lines().collect();
        let Some(first) = lines.first() else {
            return Ok(PasteOutcome::default());
        };

        let columns = first.split('\t').count();
        let rows = lines.len();

        let mut records = Vec::with_capacity(columns * rows);
        for (row, line) in lines.iter().enumerate() {
            let mut width = 0;
            for (column, field) in line.split('\t').enumerate() {
                let coordinate = place(anchor, column, row)?;
                records.push(PasteRecord::new(coordinate, field, StyleMap::new()));
                width += 1;
            }
            if width > columns {
                log::warn!(
                    "line {} has {} fields, first line has {}",
                    row + 1,
                    width,
                    columns
                );
            }
        }

        let growth = reserve(grid, anchor, columns, rows)?;

        log::debug!(
            "pasted {} text cells ({} columns x {} rows) at {}",
            records.len(),
            columns,
            rows,
            anchor
        );

        Ok(PasteOutcome {
            records,
            column_widths: Vec::new(),
            columns: columns as u32,
            rows: rows as u32,
            growth: Some(growth),
        })
    }
}
