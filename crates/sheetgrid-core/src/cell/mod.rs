//! Cell addressing
//!
//! This module contains:
//! - [`Coordinate`] - A cell's 1-based (column, row) location
//! - [`CellKey`] - The A1-style key of a coordinate (e.g., "B7")
//! - [`CellRange`] - A rectangular block of cells (e.g., "A1:B10")

mod address;
mod range;

pub use address::{
    decode_column, decode_key, encode_column, encode_key, is_cell_reference, CellKey, Coordinate,
};
pub use range::{is_cell_range_reference, CellRange, CellRangeIterator};
