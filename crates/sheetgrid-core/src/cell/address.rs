//! Coordinate codec
//!
//! Columns are written in bijective base-26: `A`..`Z` are 1..26, `AA` follows
//! `Z`, and there is no zero digit. Rows are plain decimal numbers without
//! leading zeros, so every key maps to exactly one coordinate.

use crate::error::{Error, Result};
use crate::{MAX_COLUMNS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A 1-based cell coordinate
///
/// Both axes are in `1..=MAX_COLUMNS` / `1..=MAX_ROWS`; the only way to
/// build one is through a validating constructor, so [`Coordinate::key`]
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    column: u32,
    row: u32,
}

impl Coordinate {
    /// Create a coordinate, rejecting zero or out-of-range axes
    ///
    /// # Examples
    /// ```
    /// use sheetgrid_core::Coordinate;
    ///
    /// let c = Coordinate::new(2, 7).unwrap();
    /// assert_eq!(c.to_string(), "B7");
    /// assert!(Coordinate::new(0, 1).is_err());
    /// ```
    pub fn new(column: u32, row: u32) -> Result<Self> {
        check_column(column)?;
        check_row(row)?;
        Ok(Self { column, row })
    }

    /// Build a coordinate from axes the caller has already range-checked
    pub(crate) const fn from_parts(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Column (1-based, A = 1)
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Row (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// The A1-style key of this coordinate
    pub fn key(&self) -> CellKey {
        CellKey {
            key: format!("{}{}", column_letters(self.column), self.row),
            coordinate: *self,
        }
    }

    /// Offset this coordinate, failing if the result leaves the supported range
    pub fn offset(&self, columns: u32, rows: u32) -> Result<Self> {
        let column = self
            .column
            .checked_add(columns)
            .ok_or_else(|| Error::invalid("column offset overflows"))?;
        let row = self
            .row
            .checked_add(rows)
            .ok_or_else(|| Error::invalid("row offset overflows"))?;
        Self::new(column, row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.column), self.row)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode_key(s)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    column: u32,
    row: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.column, raw.row)
    }
}

/// An A1-style cell key (e.g., "AA12")
///
/// Always the canonical encoding of a valid [`Coordinate`], which it keeps
/// alongside the text. Keys order by their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CellKey {
    key: String,
    coordinate: Coordinate,
}

impl CellKey {
    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The coordinate this key encodes
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Consume the key, returning the owned string
    pub fn into_string(self) -> String {
        self.key
    }
}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl AsRef<str> for CellKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl FromStr for CellKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode_key(s).map(|c| c.key())
    }
}

impl TryFrom<String> for CellKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        let coordinate = decode_key(&s)?;
        Ok(CellKey { key: s, coordinate })
    }
}

impl From<CellKey> for String {
    fn from(key: CellKey) -> Self {
        key.key
    }
}

impl From<Coordinate> for CellKey {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.key()
    }
}

/// Convert a column number to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// # Examples
/// ```
/// use sheetgrid_core::encode_column;
///
/// assert_eq!(encode_column(26).unwrap(), "Z");
/// assert_eq!(encode_column(27).unwrap(), "AA");
/// assert!(encode_column(0).is_err());
/// ```
pub fn encode_column(column: u32) -> Result<String> {
    check_column(column)?;
    Ok(column_letters(column))
}

/// Encode a (column, row) pair as a key, e.g. `(27, 12)` -> `"AA12"`
pub fn encode_key(column: u32, row: u32) -> Result<CellKey> {
    Coordinate::new(column, row).map(|c| c.key())
}

/// Convert column letters back to a column number (A = 1, Z = 26, AA = 27, etc.)
pub fn decode_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::invalid("empty column letters"));
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return Err(Error::invalid(format!("invalid column letter '{}'", c)));
        }
        column = column * 26 + (c as u32 - 'A' as u32 + 1);
        if column > MAX_COLUMNS {
            return Err(Error::invalid(format!(
                "column '{}' beyond the last column ({})",
                letters, MAX_COLUMNS
            )));
        }
    }

    Ok(column)
}

/// Decode a key of the form `[A-Z]+[0-9]+` into its coordinate
///
/// # Examples
/// ```
/// use sheetgrid_core::decode_key;
///
/// let c = decode_key("AA12").unwrap();
/// assert_eq!((c.column(), c.row()), (27, 12));
/// assert!(decode_key("a1").is_err());
/// assert!(decode_key("A01").is_err());
/// ```
pub fn decode_key(key: &str) -> Result<Coordinate> {
    let split = key
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(key.len());
    let (letters, digits) = key.split_at(split);

    if letters.is_empty() {
        return Err(Error::invalid(format!("no column letters in '{}'", key)));
    }
    if digits.is_empty() {
        return Err(Error::invalid(format!("no row number in '{}'", key)));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid(format!("invalid row number in '{}'", key)));
    }
    if digits.starts_with('0') {
        return Err(Error::invalid(format!(
            "row number must be >= 1 without leading zeros in '{}'",
            key
        )));
    }

    let column = decode_column(letters)?;
    let row: u32 = digits
        .parse()
        .map_err(|_| Error::invalid(format!("row number out of range in '{}'", key)))?;
    check_row(row)?;

    Ok(Coordinate::from_parts(column, row))
}

/// Whether `s` looks like a single cell key (`[A-Z]+[0-9]+`)
pub fn is_cell_reference(s: &str) -> bool {
    decode_key(s).is_ok()
}

fn column_letters(column: u32) -> String {
    let mut result = String::new();
    let mut n = column;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

fn check_column(column: u32) -> Result<()> {
    if column == 0 || column > MAX_COLUMNS {
        return Err(Error::invalid(format!(
            "column {} outside 1..={}",
            column, MAX_COLUMNS
        )));
    }
    Ok(())
}

fn check_row(row: u32) -> Result<()> {
    if row == 0 || row > MAX_ROWS {
        return Err(Error::invalid(format!("row {} outside 1..={}", row, MAX_ROWS)));
    }
    Ok(())
}
