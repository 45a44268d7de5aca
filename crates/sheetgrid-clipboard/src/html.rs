//! HTML table import

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use sheetgrid_core::{Coordinate, GridStore, StyleMap, MAX_COLUMNS};

use crate::error::{ClipboardError, ClipboardResult};
use crate::options::ImportOptions;
use crate::record::{place, reserve, ColumnWidth, PasteOutcome, PasteRecord};

/// Imports HTML `<table>` fragments, as put on the clipboard by spreadsheets
/// and browsers
pub struct HtmlImporter;

impl HtmlImporter {
    /// Paste the rows of an HTML table relative to `anchor`
    ///
    /// The cell in table row `r` and column `c` (both 1-based) lands on
    /// `(anchor.column + c, anchor.row + r)`. The column count is taken from
    /// the first `<tr>`; the grid is grown once to
    /// `(anchor.column + columns, anchor.row + rows)`. Inline `style`
    /// attributes are reduced to their non-default properties. `<col width>`
    /// elements become [`ColumnWidth`] hints.
    ///
    /// A fragment without any `<table>` or `<tr>` is `MalformedInput`; an
    /// empty `<table>` pastes nothing and does not grow the grid.
    ///
    /// # Examples
    /// ```
    /// use sheetgrid_clipboard::{HtmlImporter, ImportOptions};
    /// use sheetgrid_core::{Coordinate, GridStore, StyleProperty};
    ///
    /// let html = r#"<table><tr><td style="color: rgb(255,0,0)">X</td></tr></table>"#;
    /// let mut grid = GridStore::new();
    /// let anchor = Coordinate::new(3, 4).unwrap();
    /// let outcome = HtmlImporter::import(&mut grid, html, anchor, &ImportOptions::default()).unwrap();
    ///
    /// let record = &outcome.records[0];
    /// assert_eq!(record.key().as_str(), "D5");
    /// assert_eq!(record.style.get(StyleProperty::Color), Some("rgb(255,0,0)"));
    /// ```
    pub fn import(
        grid: &mut GridStore,
        html: &str,
        anchor: Coordinate,
        options: &ImportOptions,
    ) -> ClipboardResult<PasteOutcome> {
        let table = TableScanner::scan(html)?;
        let column_widths = table.column_widths(anchor);

        let Some(first) = table.rows.first() else {
            if !table.saw_table {
                return Err(ClipboardError::malformed("no table rows in HTML fragment"));
            }
            log::debug!("pasted empty HTML table at {}", anchor);
            return Ok(PasteOutcome {
                column_widths,
                ..Default::default()
            });
        };

        let columns = first.len();
        let rows = table.rows.len();

        let mut records = Vec::with_capacity(columns * rows);
        for (r, row) in table.rows.iter().enumerate() {
            if row.len() > columns {
                log::warn!(
                    "table row {} has {} cells, first row has {}",
                    r + 1,
                    row.len(),
                    columns
                );
            }
            for (c, cell) in row.iter().enumerate() {
                let coordinate = place(anchor, c + 1, r + 1)?;
                let style = cell_style(cell.style.as_deref(), options);
                records.push(PasteRecord::new(coordinate, cell.text(), style));
            }
        }

        let growth = reserve(grid, anchor, columns, rows)?;

        log::debug!(
            "pasted {} HTML cells ({} columns x {} rows, {} width hints) at {}",
            records.len(),
            columns,
            rows,
            column_widths.len(),
            anchor
        );

        Ok(PasteOutcome {
            records,
            column_widths,
            columns: columns as u32,
            rows: rows as u32,
            growth: Some(growth),
        })
    }
}

fn cell_style(css: Option<&str>, options: &ImportOptions) -> StyleMap {
    let Some(css) = css else {
        return StyleMap::new();
    };
    let mut style = StyleMap::parse_declarations(css);
    if options.canonicalize_alignment {
        style.canonicalize_text_align();
    }
    options.defaults.to_sparse(&style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Table,
    Row,
    Cell,
    Break,
    Col,
    Other,
}

impl Tag {
    fn of(name: &[u8]) -> Self {
        if name.eq_ignore_ascii_case(b"table") {
            Tag::Table
        } else if name.eq_ignore_ascii_case(b"tr") {
            Tag::Row
        } else if name.eq_ignore_ascii_case(b"td") || name.eq_ignore_ascii_case(b"th") {
            Tag::Cell
        } else if name.eq_ignore_ascii_case(b"br") {
            Tag::Break
        } else if name.eq_ignore_ascii_case(b"col") {
            Tag::Col
        } else {
            Tag::Other
        }
    }
}

/// Text and style of one `<td>` while it is being read
///
/// Whitespace written literally in the markup at either edge of the cell is
/// layout and gets dropped. Whitespace from character references such as
/// `&#32;` or from `<br>` is content and stays.
#[derive(Debug, Default)]
struct RawCell {
    text: String,
    style: Option<String>,
    /// Content other than markup whitespace has been seen
    started: bool,
    /// Bytes of markup whitespace at the end of `text`
    trailing: usize,
}

impl RawCell {
    fn new(style: Option<String>) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Append `decoded`, the unescaped form of the markup text `raw`
    fn push_text(&mut self, raw: &[u8], decoded: &str) {
        let leading = raw.iter().take_while(|b| b.is_ascii_whitespace()).count();
        if leading == raw.len() {
            if self.started {
                self.text.push_str(decoded);
                self.trailing += decoded.len();
            }
            return;
        }
        let trailing = raw.iter().rev().take_while(|b| b.is_ascii_whitespace()).count();

        // Literal whitespace survives unescaping byte for byte at both ends
        let body = if self.started { decoded } else { &decoded[leading..] };
        self.text.push_str(body);
        self.started = true;
        self.trailing = trailing;
    }

    /// Append content that is never trimmed (`<br>`, CDATA)
    fn push_content(&mut self, content: &str) {
        self.text.push_str(content);
        self.started = true;
        self.trailing = 0;
    }

    fn text(&self) -> &str {
        &self.text[..self.text.len() - self.trailing]
    }
}

/// Table structure collected from an HTML fragment
#[derive(Debug, Default)]
struct TableScanner {
    saw_table: bool,
    rows: Vec<Vec<RawCell>>,
    /// (1-based column index, width in pixels)
    widths: Vec<(usize, f64)>,
    next_col: usize,
    row: Option<Vec<RawCell>>,
    cell: Option<RawCell>,
}

impl TableScanner {
    fn scan(html: &str) -> ClipboardResult<Self> {
        let mut reader = Reader::from_str(html);
        reader.trim_text(false);
        reader.check_end_names(false);

        let mut scanner = Self::default();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => scanner.open(&e, false),
                Ok(Event::Empty(e)) => scanner.open(&e, true),
                Ok(Event::End(e)) => match Tag::of(e.local_name().as_ref()) {
                    Tag::Table | Tag::Row => {
                        scanner.close_cell();
                        scanner.close_row();
                    }
                    Tag::Cell => scanner.close_cell(),
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if let Some(cell) = scanner.cell.as_mut() {
                        let text = e.unescape().map_err(|err| {
                            ClipboardError::malformed(format!(
                                "undecodable text in table row {}: {}",
                                scanner.rows.len() + 1,
                                err
                            ))
                        })?;
                        cell.push_text(&e, &text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(cell) = scanner.cell.as_mut() {
                        let text = std::str::from_utf8(&e).map_err(|err| {
                            ClipboardError::malformed(format!(
                                "undecodable text in table row {}: {}",
                                scanner.rows.len() + 1,
                                err
                            ))
                        })?;
                        cell.push_content(text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ClipboardError::malformed(format!(
                        "HTML error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        scanner.close_cell();
        scanner.close_row();
        Ok(scanner)
    }

    fn open(&mut self, e: &BytesStart<'_>, empty: bool) {
        match Tag::of(e.local_name().as_ref()) {
            Tag::Table => self.saw_table = true,
            Tag::Row => {
                self.close_cell();
                self.close_row();
                self.row = Some(Vec::new());
            }
            Tag::Cell => {
                self.close_cell();
                if self.row.is_none() {
                    log::warn!("ignoring table cell outside of a row");
                    return;
                }
                self.cell = Some(RawCell::new(attribute(e, b"style")));
                if empty {
                    self.close_cell();
                }
            }
            Tag::Break => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.push_content("\n");
                }
            }
            Tag::Col => self.add_col(e),
            Tag::Other => {}
        }
    }

    fn add_col(&mut self, e: &BytesStart<'_>) {
        let span = attribute(e, b"span")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        let width = attribute(e, b"width").and_then(|w| parse_width(&w));

        match width {
            Some(width) => {
                for i in 0..span {
                    self.widths.push((self.next_col + i + 1, width));
                }
            }
            None => log::warn!("ignoring <col> without a usable width"),
        }
        self.next_col += span;
    }

    fn close_cell(&mut self) {
        if let Some(cell) = self.cell.take() {
            if let Some(row) = self.row.as_mut() {
                row.push(cell);
            }
        }
    }

    fn close_row(&mut self) {
        if let Some(row) = self.row.take() {
            self.rows.push(row);
        }
    }

    fn column_widths(&self, anchor: Coordinate) -> Vec<ColumnWidth> {
        self.widths
            .iter()
            .filter_map(|&(index, width)| {
                let column = anchor.column() as u64 + index as u64;
                if column > MAX_COLUMNS as u64 {
                    log::warn!("ignoring width hint for column {} beyond the grid", column);
                    return None;
                }
                Some(ColumnWidth {
                    column: column as u32,
                    width,
                })
            })
            .collect()
    }
}

/// Value of an attribute, matched case-insensitively
fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.html_attributes()
        .flatten()
        .find(|attr| attr.key.as_ref().eq_ignore_ascii_case(name))
        .and_then(|attr| match attr.unescape_value() {
            Ok(value) => Some(value.into_owned()),
            Err(err) => {
                log::warn!("ignoring undecodable attribute value: {}", err);
                None
            }
        })
}

/// Width in CSS pixels: `120`, `120px` or `64.5`
fn parse_width(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
}
