//! # sheetgrid-core
//!
//! Core data structures for the sheetgrid clipboard engine.
//!
//! This crate provides the fundamental types used throughout sheetgrid:
//! - [`Coordinate`] and [`CellKey`] - Bijective A1-style cell addressing
//! - [`CellRange`] - Rectangular blocks of coordinates
//! - [`GridStore`] - The growable grid and its realized cells
//! - [`StyleMap`] and [`DefaultStyleTable`] - Sparse/computed cell styles
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_core::{Coordinate, GridStore};
//!
//! let key = Coordinate::new(27, 3).unwrap().key();
//! assert_eq!(key.as_str(), "AA3");
//!
//! let mut grid = GridStore::new();
//! let growth = grid.ensure_capacity(2, 2).unwrap();
//! assert_eq!(growth.len(), 4);
//!
//! // Growing to the same size again is a no-op
//! assert!(grid.ensure_capacity(2, 2).unwrap().is_empty());
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod style;

// Re-exports for convenience
pub use cell::{
    decode_column, decode_key, encode_column, encode_key, is_cell_range_reference,
    is_cell_reference, CellKey, CellRange, Coordinate,
};
pub use error::{Error, Result};
pub use grid::{GridBounds, GridStore, Growth, GrowthItem};
pub use style::{css_color_to_hex, CssColor, DefaultStyleTable, StyleMap, StyleProperty};

/// Maximum number of rows in a grid (common spreadsheet limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a grid (common spreadsheet limit)
pub const MAX_COLUMNS: u32 = 16_384;

/// Number of columns in a freshly opened sheet
pub const DEFAULT_COLUMN_COUNT: u32 = 26;

/// Number of rows in a freshly opened sheet
pub const DEFAULT_ROW_COUNT: u32 = 65;
