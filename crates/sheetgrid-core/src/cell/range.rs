//! Rectangular cell ranges

use super::address::{decode_key, Coordinate};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start coordinate (top-left)
    pub start: Coordinate,
    /// End coordinate (bottom-right)
    pub end: Coordinate,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        // Normalize so start is top-left and end is bottom-right
        let (start_row, end_row) = if start.row() <= end.row() {
            (start.row(), end.row())
        } else {
            (end.row(), start.row())
        };

        let (start_col, end_col) = if start.column() <= end.column() {
            (start.column(), end.column())
        } else {
            (end.column(), start.column())
        };

        Self {
            start: Coordinate::from_parts(start_col, start_row),
            end: Coordinate::from_parts(end_col, end_row),
        }
    }

    /// Create a single-cell range
    pub fn single(coordinate: Coordinate) -> Self {
        Self {
            start: coordinate,
            end: coordinate,
        }
    }

    /// Build a range from 1-based inclusive bounds, `None` if it would be empty
    pub(crate) fn from_bounds(
        first_col: u32,
        first_row: u32,
        last_col: u32,
        last_row: u32,
    ) -> Option<Self> {
        if first_col == 0 || first_row == 0 || first_col > last_col || first_row > last_row {
            return None;
        }
        Some(Self {
            start: Coordinate::from_parts(first_col, first_row),
            end: Coordinate::from_parts(last_col, last_row),
        })
    }

    /// Parse a range from `A1:B10` notation
    ///
    /// Whitespace around the colon is allowed and a single key is a
    /// one-cell range.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some((start, end)) = s.split_once(':') {
            let start = decode_key(start.trim_end())
                .map_err(|e| Error::invalid(format!("invalid range '{}': {}", s, e)))?;
            let end = decode_key(end.trim_start())
                .map_err(|e| Error::invalid(format!("invalid range '{}': {}", s, e)))?;
            Ok(Self::new(start, end))
        } else {
            Ok(Self::single(decode_key(s)?))
        }
    }

    /// Check if a coordinate is within this range
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.row() >= self.start.row()
            && coordinate.row() <= self.end.row()
            && coordinate.column() >= self.start.column()
            && coordinate.column() <= self.end.column()
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row() - self.start.row() + 1
    }

    /// Get the number of columns in the range
    pub fn column_count(&self) -> u32 {
        self.end.column() - self.start.column() + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.column_count() as u64
    }

    /// Iterate over all coordinates in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row(),
            current_col: self.start.column(),
            remaining: self.cell_count(),
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Whether `s` looks like a range reference such as `A1:B2` or `A1 : B2`
pub fn is_cell_range_reference(s: &str) -> bool {
    s.contains(':') && CellRange::parse(s).is_ok() && s.trim() == s
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u32,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let coordinate = Coordinate::from_parts(self.current_col, self.current_row);
        self.remaining -= 1;

        // Move to next cell
        self.current_col += 1;
        if self.current_col > self.range.end.column() {
            self.current_col = self.range.start.column();
            self.current_row += 1;
        }

        Some(coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_COLUMNS, MAX_ROWS};

    fn at(column: u32, row: u32) -> Coordinate {
        Coordinate::new(column, row).unwrap()
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(range.start, at(1, 1));
        assert_eq!(range.end, at(2, 2));

        // Single cell
        let range = CellRange::parse("C3").unwrap();
        assert_eq!(range.start, at(3, 3));
        assert_eq!(range.end, at(3, 3));

        // Spaces around the colon, reversed corners
        let range = CellRange::parse("D4 : B2").unwrap();
        assert_eq!(range.start, at(2, 2));
        assert_eq!(range.end, at(4, 4));

        assert!(CellRange::parse("A1:").is_err());
        assert!(CellRange::parse("A1:B").is_err());
    }

    #[test]
    fn test_cell_range_contains() {
        let range = CellRange::parse("B2:D4").unwrap();

        assert!(range.contains(&at(2, 2))); // B2
        assert!(range.contains(&at(4, 4))); // D4
        assert!(range.contains(&at(3, 3))); // C3

        assert!(!range.contains(&at(1, 1))); // A1
        assert!(!range.contains(&at(2, 5))); // B5
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], at(1, 1)); // A1
        assert_eq!(cells[1], at(2, 1)); // B1
        assert_eq!(cells[2], at(1, 2)); // A2
        assert_eq!(cells[3], at(2, 2)); // B2
        assert_eq!(range.cells().len(), 4);
    }

    #[test]
    fn test_size_hint_of_full_range() {
        let range = CellRange::new(at(1, 1), at(MAX_COLUMNS, MAX_ROWS));
        let expected = usize::try_from(range.cell_count()).unwrap_or(usize::MAX);

        let mut cells = range.cells();
        assert_eq!(cells.size_hint(), (expected, Some(expected)));
        assert_eq!(cells.next(), Some(at(1, 1)));
        let rest = usize::try_from(range.cell_count() - 1).unwrap_or(usize::MAX);
        assert_eq!(cells.size_hint(), (rest, Some(rest)));
    }

    #[test]
    fn test_cell_range_display() {
        assert_eq!(CellRange::parse("B2:AA10").unwrap().to_string(), "B2:AA10");
        assert_eq!(CellRange::single(at(1, 1)).to_string(), "A1");
    }

    #[test]
    fn test_from_bounds() {
        assert!(CellRange::from_bounds(3, 1, 2, 5).is_none());
        assert!(CellRange::from_bounds(1, 0, 2, 5).is_none());
        let range = CellRange::from_bounds(1, 3, 2, 5).unwrap();
        assert_eq!(range.cell_count(), 6);
    }

    #[test]
    fn test_is_cell_range_reference() {
        assert!(is_cell_range_reference("A1:B2"));
        assert!(is_cell_range_reference("BC45 : DE67"));
        assert!(!is_cell_range_reference("A1"));
        assert!(!is_cell_range_reference("A1:"));
    }
}
