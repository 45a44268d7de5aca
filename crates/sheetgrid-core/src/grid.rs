//! Grid store
//!
//! The logical grid of a sheet. The materialized cells are always the full
//! rectangle `1..=columns x 1..=rows`, so the store keeps only the bounds.
//! Growth is idempotent and only ever reports coordinates that did not
//! exist before.

use std::ops::RangeInclusive;

use crate::cell::{CellKey, CellRange, Coordinate};
use crate::error::{Error, Result};
use crate::{MAX_COLUMNS, MAX_ROWS};

/// The furthest materialized column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridBounds {
    /// Number of materialized columns
    pub columns: u32,
    /// Number of materialized rows
    pub rows: u32,
}

impl GridBounds {
    /// Create bounds of `columns` x `rows`
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Whether the bounds already cover `(column, row)`
    pub fn covers(&self, column: u32, row: u32) -> bool {
        column <= self.columns && row <= self.rows
    }
}

/// One entry of a growth descriptor, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthItem {
    /// A new column header
    ColumnHeader(u32),
    /// A new row header
    RowHeader(u32),
    /// A newly introduced cell
    Cell(Coordinate),
}

/// The coordinates introduced by one capacity increase
///
/// A grid that grows from `old` to `new` bounds gains three regions:
///
/// ```text
///            1 .. old.columns   old.columns+1 .. new.columns
///          +------------------+-----------------------------+
/// 1        |     existing     |   top-right (new columns)   |
/// old.rows |                  |                             |
///          +------------------+-----------------------------+
/// new rows |           bottom (all columns, new rows)       |
///          +------------------------------------------------+
/// ```
///
/// The split keeps cells that already exist out of the descriptor when only
/// one axis grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    /// Bounds before the growth
    pub previous: GridBounds,
    /// Bounds after the growth
    pub bounds: GridBounds,
}

impl Growth {
    fn unchanged(bounds: GridBounds) -> Self {
        Self {
            previous: bounds,
            bounds,
        }
    }

    /// Newly added column headers
    pub fn new_columns(&self) -> RangeInclusive<u32> {
        self.previous.columns + 1..=self.bounds.columns
    }

    /// Newly added row headers
    pub fn new_rows(&self) -> RangeInclusive<u32> {
        self.previous.rows + 1..=self.bounds.rows
    }

    /// New columns across the rows that already existed
    pub fn top_right(&self) -> Option<CellRange> {
        CellRange::from_bounds(
            self.previous.columns + 1,
            1,
            self.bounds.columns,
            self.previous.rows,
        )
    }

    /// Every column of the rows that are new
    pub fn bottom(&self) -> Option<CellRange> {
        CellRange::from_bounds(1, self.previous.rows + 1, self.bounds.columns, self.bounds.rows)
    }

    /// All newly introduced cells: the top-right block, then the bottom block
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let top_right = self.top_right().into_iter().flat_map(|r| r.cells());
        let bottom = self.bottom().into_iter().flat_map(|r| r.cells());
        top_right.chain(bottom)
    }

    /// Headers and cells in presentation order
    ///
    /// Column headers, then the top-right block, then row headers, then the
    /// bottom block.
    pub fn items(&self) -> impl Iterator<Item = GrowthItem> {
        let columns = self.new_columns().map(GrowthItem::ColumnHeader);
        let top_right = self
            .top_right()
            .into_iter()
            .flat_map(|r| r.cells())
            .map(GrowthItem::Cell);
        let rows = self.new_rows().map(GrowthItem::RowHeader);
        let bottom = self
            .bottom()
            .into_iter()
            .flat_map(|r| r.cells())
            .map(GrowthItem::Cell);
        columns.chain(top_right).chain(rows).chain(bottom)
    }

    /// Number of newly introduced cells
    pub fn len(&self) -> u64 {
        let top_right = self.top_right().map_or(0, |r| r.cell_count());
        let bottom = self.bottom().map_or(0, |r| r.cell_count());
        top_right + bottom
    }

    /// Whether the growth introduced nothing
    pub fn is_empty(&self) -> bool {
        self.previous == self.bounds
    }
}

/// Logical grid state of one open sheet
///
/// A cell is realized exactly when the bounds cover it. Bounds only ever grow.
#[derive(Debug, Clone, Default)]
pub struct GridStore {
    bounds: GridBounds,
}

impl GridStore {
    /// Create an empty grid (0 x 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid already grown to `columns` x `rows`
    pub fn with_size(columns: u32, rows: u32) -> Result<Self> {
        let mut grid = Self::new();
        grid.ensure_capacity(columns, rows)?;
        Ok(grid)
    }

    /// Current bounds
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Number of materialized cells
    pub fn realized_count(&self) -> u64 {
        self.bounds.columns as u64 * self.bounds.rows as u64
    }

    /// Whether a cell has been materialized
    pub fn has(&self, coordinate: &Coordinate) -> bool {
        self.bounds.covers(coordinate.column(), coordinate.row())
    }

    /// Whether the cell with this key has been materialized
    pub fn contains_key(&self, key: &CellKey) -> bool {
        self.has(&key.coordinate())
    }

    /// Grow the grid so that it covers `(column, row)`
    ///
    /// Returns a descriptor of exactly the cells that did not exist before.
    /// Calling again with the same or a smaller target returns an empty
    /// descriptor. Targets beyond [`MAX_COLUMNS`]/[`MAX_ROWS`] fail with
    /// [`Error::CapacityExceeded`] and leave the grid untouched.
    ///
    /// # Examples
    /// ```
    /// use sheetgrid_core::GridStore;
    ///
    /// let mut grid = GridStore::new();
    /// grid.ensure_capacity(2, 2).unwrap();
    ///
    /// // Only the new third column is reported
    /// let growth = grid.ensure_capacity(3, 2).unwrap();
    /// let keys: Vec<String> = growth.cells().map(|c| c.to_string()).collect();
    /// assert_eq!(keys, ["C1", "C2"]);
    /// ```
    pub fn ensure_capacity(&mut self, column: u32, row: u32) -> Result<Growth> {
        if column == 0 || row == 0 {
            return Err(Error::invalid(format!(
                "grid capacity must be at least 1 x 1, got {} x {}",
                column, row
            )));
        }
        if column > MAX_COLUMNS || row > MAX_ROWS {
            return Err(Error::CapacityExceeded {
                column,
                row,
                max_columns: MAX_COLUMNS,
                max_rows: MAX_ROWS,
            });
        }

        if self.bounds.covers(column, row) {
            return Ok(Growth::unchanged(self.bounds));
        }

        let growth = Growth {
            previous: self.bounds,
            bounds: GridBounds::new(self.bounds.columns.max(column), self.bounds.rows.max(row)),
        };

        self.bounds = growth.bounds;

        log::debug!(
            "grid grew from {}x{} to {}x{} ({} new cells)",
            growth.previous.columns,
            growth.previous.rows,
            growth.bounds.columns,
            growth.bounds.rows,
            growth.len()
        );

        Ok(growth)
    }
}
