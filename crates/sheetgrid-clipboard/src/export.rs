//! Clipboard export
//!
//! Renders a range of cells into the two clipboard flavours the importers
//! understand: tab-separated text and an HTML `<table>` with inline styles.

use std::fmt::Write;

use quick_xml::escape::escape;
use sheetgrid_core::{CellRange, Coordinate, DefaultStyleTable, StyleMap};

/// Read access to cell contents for export
pub trait CellSource {
    /// Text of the cell at `coordinate`, if any
    fn cell_text(&self, coordinate: Coordinate) -> Option<String>;

    /// Computed style of the cell at `coordinate`
    ///
    /// Implementations holding sparse styles may return them as-is; defaults
    /// are stripped before rendering either way.
    fn computed_style(&self, _coordinate: Coordinate) -> StyleMap {
        StyleMap::new()
    }
}

/// Both clipboard flavours for one copied range
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipboardContent {
    /// Tab-separated text, rows joined by `\n`
    ///
    /// Tabs and line breaks inside a cell are written as spaces, so this
    /// flavour keeps the shape of the range but not such texts exactly.
    pub text: String,
    /// HTML table with sparse inline styles
    pub html: String,
}

/// Renders cell ranges for the clipboard
pub struct ClipboardExporter;

impl ClipboardExporter {
    /// Export `range` from `source` as text and HTML
    ///
    /// # Examples
    /// ```
    /// use std::collections::HashMap;
    /// use sheetgrid_clipboard::{CellSource, ClipboardExporter};
    /// use sheetgrid_core::{CellRange, Coordinate, DefaultStyleTable};
    ///
    /// struct Cells(HashMap<Coordinate, String>);
    ///
    /// impl CellSource for Cells {
    ///     fn cell_text(&self, coordinate: Coordinate) -> Option<String> {
    ///         self.0.get(&coordinate).cloned()
    ///     }
    /// }
    ///
    /// let mut cells = HashMap::new();
    /// cells.insert(Coordinate::new(1, 1).unwrap(), "a".to_string());
    /// cells.insert(Coordinate::new(2, 1).unwrap(), "b".to_string());
    ///
    /// let range = CellRange::parse("A1:B1").unwrap();
    /// let content = ClipboardExporter::export(&Cells(cells), &range, DefaultStyleTable::standard());
    /// assert_eq!(content.text, "a\tb");
    /// assert_eq!(content.html, "<table><tr><td>a</td><td>b</td></tr></table>");
    /// ```
    pub fn export<S: CellSource + ?Sized>(
        source: &S,
        range: &CellRange,
        defaults: &DefaultStyleTable,
    ) -> ClipboardContent {
        let content = ClipboardContent {
            text: Self::to_text(source, range),
            html: Self::to_html(source, range, defaults),
        };
        log::debug!("exported {} cells from {}", range.cell_count(), range);
        content
    }

    /// Tab-separated text for `range`; missing cells are empty fields
    ///
    /// Tabs and line breaks inside a cell become spaces so every cell stays
    /// one field.
    pub fn to_text<S: CellSource + ?Sized>(source: &S, range: &CellRange) -> String {
        let mut lines = Vec::with_capacity(range.row_count() as usize);
        for row in rows(range) {
            let fields: Vec<String> = row
                .map(|coordinate| text_field(&source.cell_text(coordinate).unwrap_or_default()))
                .collect();
            lines.push(fields.join("\t"));
        }
        lines.join("\n")
    }

    /// HTML table for `range`, one `<tr>` per row
    ///
    /// Only non-default style properties are written to `style`. Line breaks
    /// in cell text become `<br>`; carriage returns and whitespace at the
    /// edges of a cell are written as character references so that
    /// [`HtmlImporter`](crate::HtmlImporter) reads back the exact text.
    pub fn to_html<S: CellSource + ?Sized>(
        source: &S,
        range: &CellRange,
        defaults: &DefaultStyleTable,
    ) -> String {
        let mut html = String::from("<table>");
        for row in rows(range) {
            html.push_str("<tr>");
            for coordinate in row {
                let style = defaults.to_sparse(&source.computed_style(coordinate));
                if style.is_empty() {
                    html.push_str("<td>");
                } else {
                    html.push_str("<td style=\"");
                    html.push_str(&escape(style.to_declarations().as_str()));
                    html.push_str("\">");
                }
                let text = source.cell_text(coordinate).unwrap_or_default();
                push_cell_text(&mut html, &text);
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }
}

/// One tab-separated field
fn text_field(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

/// Cell text as HTML content
fn push_cell_text(html: &mut String, text: &str) {
    let edge = |c: char| c.is_ascii_whitespace() && c != '\n';
    let body = text.trim_start_matches(edge);
    let leading = &text[..text.len() - body.len()];
    let trimmed = body.trim_end_matches(edge);
    let trailing = &body[trimmed.len()..];

    push_char_refs(html, leading);
    for (i, line) in trimmed.split('\n').enumerate() {
        if i > 0 {
            html.push_str("<br>");
        }
        html.push_str(&escape(line).replace('\r', "&#13;"));
    }
    push_char_refs(html, trailing);
}

fn push_char_refs(html: &mut String, chars: &str) {
    for c in chars.chars() {
        let _ = write!(html, "&#{};", c as u32);
    }
}

/// Coordinates of `range`, one iterator per row
fn rows(range: &CellRange) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
    let start = range.start;
    let columns = range.column_count();
    (0..range.row_count()).map(move |r| {
        (0..columns).filter_map(move |c| start.offset(c, r).ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HtmlImporter, ImportOptions, TextImporter};
    use pretty_assertions::assert_eq;
    use sheetgrid_core::{GridStore, StyleProperty};
    use std::collections::HashMap;

    #[derive(Default)]
    struct Cells {
        text: HashMap<Coordinate, String>,
        style: HashMap<Coordinate, StyleMap>,
    }

    impl Cells {
        fn set(&mut self, key: &str, text: &str) {
            let coordinate: Coordinate = key.parse().unwrap();
            self.text.insert(coordinate, text.to_string());
        }

        fn style(&mut self, key: &str, style: StyleMap) {
            let coordinate: Coordinate = key.parse().unwrap();
            self.style.insert(coordinate, style);
        }
    }

    impl CellSource for Cells {
        fn cell_text(&self, coordinate: Coordinate) -> Option<String> {
            self.text.get(&coordinate).cloned()
        }

        fn computed_style(&self, coordinate: Coordinate) -> StyleMap {
            let sparse = self.style.get(&coordinate).cloned().unwrap_or_default();
            DefaultStyleTable::standard().to_computed(&sparse)
        }
    }

    #[test]
    fn test_text_with_gaps() {
        let mut cells = Cells::default();
        cells.set("B2", "x");
        cells.set("D3", "y");

        let range = CellRange::parse("B2:D3").unwrap();
        assert_eq!(ClipboardExporter::to_text(&cells, &range), "x\t\t\n\t\ty");
    }

    #[test]
    fn test_html_escapes_and_strips_defaults() {
        let mut cells = Cells::default();
        cells.set("A1", "a < b & \"c\"");
        cells.set("B1", "one\ntwo");
        cells.style("A1", StyleMap::new().with(StyleProperty::FontWeight, "bold"));

        let range = CellRange::parse("A1:B1").unwrap();
        let html = ClipboardExporter::to_html(&cells, &range, DefaultStyleTable::standard());
        assert_eq!(
            html,
            "<table><tr><td style=\"font-weight: bold\">a &lt; b &amp; &quot;c&quot;</td>\
             <td>one<br>two</td></tr></table>"
        );
    }

    #[test]
    fn test_html_keeps_edge_whitespace_and_breaks() {
        let mut cells = Cells::default();
        cells.set("A1", "  padded ");
        cells.set("B1", "two\nlines\n");
        cells.set("C1", "\tcr\r\n");
        cells.set("D1", " ");

        let range = CellRange::parse("A1:D1").unwrap();
        let html = ClipboardExporter::to_html(&cells, &range, DefaultStyleTable::standard());
        assert_eq!(
            html,
            "<table><tr><td>&#32;&#32;padded&#32;</td><td>two<br>lines<br></td>\
             <td>&#9;cr&#13;<br></td><td>&#32;</td></tr></table>"
        );

        let mut grid = GridStore::new();
        let anchor = Coordinate::new(1, 1).unwrap();
        let outcome = HtmlImporter::import(&mut grid, &html, anchor, &ImportOptions::default()).unwrap();
        let texts: Vec<&str> = outcome.records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["  padded ", "two\nlines\n", "\tcr\r\n", " "]);
    }

    #[test]
    fn test_text_keeps_one_field_per_cell() {
        let mut cells = Cells::default();
        cells.set("A1", "two\nlines");
        cells.set("B1", "a\tb");
        cells.set("A2", "c");

        let range = CellRange::parse("A1:B2").unwrap();
        let text = ClipboardExporter::to_text(&cells, &range);
        assert_eq!(text, "two lines\ta b\nc\t");

        let mut grid = GridStore::new();
        let outcome = TextImporter::import(&mut grid, &text, range.start).unwrap();
        assert_eq!((outcome.columns, outcome.rows), (2, 2));
        assert_eq!(outcome.records.len(), 4);
    }

    #[test]
    fn test_html_reimports_to_same_cells() {
        let mut cells = Cells::default();
        cells.set("B2", "Name");
        cells.set("C2", "Qty & price");
        cells.set("B3", "widget");
        cells.set("C3", "3");
        cells.style(
            "C2",
            StyleMap::new()
                .with(StyleProperty::Color, "rgb(255, 0, 0)")
                .with(StyleProperty::TextAlign, "center"),
        );

        let range = CellRange::parse("B2:C3").unwrap();
        let content = ClipboardExporter::export(&cells, &range, DefaultStyleTable::standard());

        // HTML cells land one column and one row past the anchor
        let anchor = Coordinate::new(1, 1).unwrap();
        let mut grid = GridStore::new();
        let outcome =
            HtmlImporter::import(&mut grid, &content.html, anchor, &ImportOptions::default())
                .unwrap();

        for record in &outcome.records {
            assert_eq!(Some(&record.text), cells.text.get(&record.coordinate));
            let expected = cells.style.get(&record.coordinate).cloned().unwrap_or_default();
            assert_eq!(record.style, expected);
        }
        assert_eq!(outcome.records.len(), 4);
    }

    #[test]
    fn test_text_reimports_to_same_cells() {
        let mut cells = Cells::default();
        cells.set("A1", "1");
        cells.set("B1", "2");
        cells.set("A2", "3");

        let range = CellRange::parse("A1:B2").unwrap();
        let text = ClipboardExporter::to_text(&cells, &range);

        let mut grid = GridStore::new();
        let outcome = TextImporter::import(&mut grid, &text, range.start).unwrap();
        let texts: Vec<&str> = outcome.records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "2", "3", ""]);
    }
}
