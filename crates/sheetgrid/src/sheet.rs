//! Sheet session

use std::collections::BTreeMap;

use ahash::AHashMap;
use sheetgrid_clipboard::{
    import_payload, CellSource, ClipboardContent, ClipboardExporter, ClipboardPayload,
    ClipboardResult, ImportOptions, PasteOutcome, PasteRecord,
};
use sheetgrid_core::{
    CellRange, Coordinate, DefaultStyleTable, GridStore, Result, StyleMap, DEFAULT_COLUMN_COUNT,
    DEFAULT_ROW_COUNT,
};

/// Contents of one cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Cell text
    pub text: String,
    /// Sparse style (non-default properties only)
    pub style: StyleMap,
}

/// One open document: a grid, its cell contents and column widths
///
/// Each sheet owns its own [`GridStore`]. Pastes against one sheet must be
/// serialized by the caller (`paste` takes `&mut self`).
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Grid bounds and realized cells
    grid: GridStore,
    /// Cell contents keyed by coordinate
    cells: AHashMap<Coordinate, Cell>,
    /// Custom column widths in CSS pixels
    column_widths: BTreeMap<u32, f64>,
    /// Defaults used to sparsify and compute styles
    defaults: DefaultStyleTable,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheet {
    /// Create a sheet with the default grid size
    pub fn new() -> Self {
        let grid = GridStore::with_size(DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT)
            .unwrap_or_default();
        Self::with_grid(grid)
    }

    /// Create a sheet over an existing grid
    pub fn with_grid(grid: GridStore) -> Self {
        Self {
            grid,
            cells: AHashMap::new(),
            column_widths: BTreeMap::new(),
            defaults: DefaultStyleTable::standard().clone(),
        }
    }

    /// Replace the default style table
    pub fn with_defaults(mut self, defaults: DefaultStyleTable) -> Self {
        self.defaults = defaults;
        self
    }

    /// The grid
    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// The default style table
    pub fn defaults(&self) -> &DefaultStyleTable {
        &self.defaults
    }

    // === Cell Access ===

    /// Get a cell by key (e.g., "A1")
    pub fn cell(&self, key: &str) -> Result<Option<&Cell>> {
        let coordinate: Coordinate = key.parse()?;
        Ok(self.cell_at(coordinate))
    }

    /// Get a cell by coordinate
    pub fn cell_at(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells.get(&coordinate)
    }

    /// Get the text of a cell by key
    pub fn text(&self, key: &str) -> Result<Option<&str>> {
        Ok(self.cell(key)?.map(|c| c.text.as_str()))
    }

    /// Number of cells with contents
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounding range of all cells with contents
    pub fn used_range(&self) -> Option<CellRange> {
        let mut coordinates = self.cells.keys();
        let first = *coordinates.next()?;
        let (mut start, mut end) = (first, first);
        for c in coordinates {
            start = Coordinate::new(start.column().min(c.column()), start.row().min(c.row())).ok()?;
            end = Coordinate::new(end.column().max(c.column()), end.row().max(c.row())).ok()?;
        }
        Some(CellRange::new(start, end))
    }

    // === Cell Modification ===

    /// Set the text of a cell by key, keeping its style
    ///
    /// The grid grows to cover the cell.
    pub fn set_cell<S: Into<String>>(&mut self, key: &str, text: S) -> Result<()> {
        let coordinate: Coordinate = key.parse()?;
        self.set_cell_at(coordinate, text)
    }

    /// Set the text of a cell by coordinate, keeping its style
    pub fn set_cell_at<S: Into<String>>(&mut self, coordinate: Coordinate, text: S) -> Result<()> {
        self.grid
            .ensure_capacity(coordinate.column(), coordinate.row())?;
        self.cells.entry(coordinate).or_default().text = text.into();
        Ok(())
    }

    /// Set the style of a cell by key
    ///
    /// `style` may be computed or sparse; default values are dropped.
    pub fn set_cell_style(&mut self, key: &str, style: &StyleMap) -> Result<()> {
        let coordinate: Coordinate = key.parse()?;
        self.grid
            .ensure_capacity(coordinate.column(), coordinate.row())?;
        self.cells.entry(coordinate).or_default().style = self.defaults.to_sparse(style);
        Ok(())
    }

    /// Remove a cell's contents; the grid does not shrink
    pub fn clear_cell(&mut self, key: &str) -> Result<Option<Cell>> {
        let coordinate: Coordinate = key.parse()?;
        Ok(self.cells.remove(&coordinate))
    }

    // === Column Widths ===

    /// Custom width of a column, if set
    pub fn column_width(&self, column: u32) -> Option<f64> {
        self.column_widths.get(&column).copied()
    }

    /// Set the width of a column
    pub fn set_column_width(&mut self, column: u32, width: f64) {
        self.column_widths.insert(column, width);
    }

    /// All custom column widths
    pub fn column_widths(&self) -> &BTreeMap<u32, f64> {
        &self.column_widths
    }

    // === Clipboard ===

    /// Paste a clipboard payload at `anchor`
    ///
    /// Pasted cells replace previous contents. Records are applied in
    /// batches of `options.batch_size`, then width hints. Rows wider than
    /// the first one grow the grid further so that every pasted cell is
    /// inside it.
    pub fn paste(
        &mut self,
        payload: &ClipboardPayload,
        anchor: Coordinate,
        options: &ImportOptions,
    ) -> ClipboardResult<PasteOutcome> {
        let outcome = import_payload(&mut self.grid, payload, anchor, options)?;

        let furthest = outcome.records.iter().fold((0, 0), |(column, row), record| {
            (
                column.max(record.coordinate.column()),
                row.max(record.coordinate.row()),
            )
        });
        if furthest.0 > 0 && !self.grid.bounds().covers(furthest.0, furthest.1) {
            let extra = self.grid.ensure_capacity(furthest.0, furthest.1)?;
            log::debug!("ragged paste grew the grid by {} more cells", extra.len());
        }

        for (i, batch) in outcome.batches(options.batch_size).enumerate() {
            log::trace!("applying paste batch {} ({} records)", i + 1, batch.len());
            self.apply(batch);
        }
        for hint in &outcome.column_widths {
            self.column_widths.insert(hint.column, hint.width);
        }

        log::debug!(
            "pasted {} cells at {}, grid is now {}x{}",
            outcome.records.len(),
            anchor,
            self.grid.bounds().columns,
            self.grid.bounds().rows
        );
        Ok(outcome)
    }

    fn apply(&mut self, records: &[PasteRecord]) {
        for record in records {
            self.cells.insert(
                record.coordinate,
                Cell {
                    text: record.text.clone(),
                    style: record.style.clone(),
                },
            );
        }
    }

    /// Copy a range as plain text and HTML
    pub fn copy(&self, range: &CellRange) -> ClipboardContent {
        ClipboardExporter::export(self, range, &self.defaults)
    }
}

impl CellSource for Sheet {
    fn cell_text(&self, coordinate: Coordinate) -> Option<String> {
        self.cells.get(&coordinate).map(|c| c.text.clone())
    }

    fn computed_style(&self, coordinate: Coordinate) -> StyleMap {
        match self.cells.get(&coordinate) {
            Some(cell) => self.defaults.to_computed(&cell.style),
            None => self.defaults.to_computed(&StyleMap::new()),
        }
    }
}
