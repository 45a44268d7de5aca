//! End-to-end paste and copy tests (paste -> read cells -> copy -> paste again)

use pretty_assertions::assert_eq;
use sheetgrid::prelude::*;
use sheetgrid::MAX_COLUMNS;

fn at(column: u32, row: u32) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

/// Tab-separated text lands with its first field on the anchor
#[test]
fn test_paste_plain_text() {
    let mut sheet = Sheet::with_grid(GridStore::new());
    let outcome = sheet
        .paste(&ClipboardPayload::text("A\tB\nC\tD"), at(1, 1), &ImportOptions::default())
        .unwrap();

    let records: Vec<(u32, u32, &str)> = outcome
        .records
        .iter()
        .map(|r| (r.coordinate.column(), r.coordinate.row(), r.text.as_str()))
        .collect();
    assert_eq!(records, vec![(1, 1, "A"), (2, 1, "B"), (1, 2, "C"), (2, 2, "D")]);
    assert!(outcome.records.iter().all(|r| r.style.is_empty()));

    let bounds = sheet.grid().bounds();
    assert!(bounds.columns >= 2 && bounds.rows >= 2);
    assert_eq!(sheet.text("B2").unwrap(), Some("D"));
}

/// HTML cells land one column and one row past the anchor, with sparse styles
#[test]
fn test_paste_html_table() {
    let mut sheet = Sheet::with_grid(GridStore::new());
    let html = r#"<table><tr><td style="color: rgb(255,0,0)">X</td></tr></table>"#;
    let outcome = sheet
        .paste(&ClipboardPayload::html(html), at(3, 4), &ImportOptions::default())
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].coordinate, at(4, 5));
    assert_eq!(outcome.records[0].text, "X");
    assert_eq!(
        outcome.records[0].style,
        StyleMap::new().with(StyleProperty::Color, "rgb(255,0,0)")
    );
    assert!(outcome.column_widths.is_empty());

    let cell = sheet.cell("D5").unwrap().unwrap();
    assert_eq!(cell.text, "X");
}

/// An empty table is not an error and does not grow the grid
#[test]
fn test_paste_empty_table() {
    let mut sheet = Sheet::new();
    let before = sheet.grid().bounds();
    let outcome = sheet
        .paste(&ClipboardPayload::html("<table></table>"), at(30, 80), &ImportOptions::default())
        .unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(sheet.grid().bounds(), before);
    assert_eq!(sheet.cell_count(), 0);
}

/// A paste that would leave the supported range changes nothing
#[test]
fn test_paste_beyond_capacity() {
    let mut sheet = Sheet::new();
    let before = sheet.grid().bounds();
    let err = sheet
        .paste(
            &ClipboardPayload::text("a\tb"),
            at(MAX_COLUMNS, 1),
            &ImportOptions::default(),
        )
        .unwrap_err();

    assert!(err.is_capacity_exceeded());
    assert_eq!(sheet.grid().bounds(), before);
    assert_eq!(sheet.cell_count(), 0);
}

/// Growing past the default size only adds the new region
#[test]
fn test_paste_growth_descriptor() {
    let mut sheet = Sheet::new();
    let text = (0..3).map(|_| "x\ty").collect::<Vec<_>>().join("\n");
    let outcome = sheet
        .paste(&ClipboardPayload::text(text), at(26, 64), &ImportOptions::default())
        .unwrap();

    let growth = outcome.growth.unwrap();
    assert_eq!(growth.previous, GridBounds::new(26, 65));
    assert_eq!(growth.bounds, GridBounds::new(28, 67));
    assert_eq!(growth.new_columns(), 27..=28);
    assert_eq!(growth.new_rows(), 66..=67);
    // 2 new columns across 65 rows, then 2 new rows across 28 columns
    assert_eq!(growth.len(), 2 * 65 + 2 * 28);
}

/// Copying a styled range and pasting its HTML reproduces text and style
#[test]
fn test_copy_then_paste_html() {
    let mut source = Sheet::new();
    source.set_cell("B2", "Item").unwrap();
    source.set_cell("C2", "Price").unwrap();
    source.set_cell("B3", "Tea & cake").unwrap();
    source.set_cell("C3", "4.50").unwrap();
    source
        .set_cell_style(
            "C2",
            &StyleMap::new()
                .with(StyleProperty::FontWeight, "bold")
                .with(StyleProperty::BackgroundColor, "#ffff00"),
        )
        .unwrap();
    source
        .set_cell_style("C3", &StyleMap::new().with(StyleProperty::TextAlign, "right"))
        .unwrap();

    let content = source.copy(&CellRange::parse("B2:C3").unwrap());
    assert_eq!(content.text, "Item\tPrice\nTea & cake\t4.50");

    let mut target = Sheet::new();
    target
        .paste(
            &ClipboardPayload::html(content.html.as_str()).with_text(content.text.as_str()),
            at(1, 1),
            &ImportOptions::default(),
        )
        .unwrap();

    for key in ["B2", "C2", "B3", "C3"] {
        assert_eq!(target.cell(key).unwrap(), source.cell(key).unwrap(), "{}", key);
    }
}

/// Shift-paste: only the text flavour is used
#[test]
fn test_paste_without_style() {
    let mut sheet = Sheet::new();
    let payload = ClipboardPayload::html(
        r#"<table><tr><td style="font-weight: bold">a</td></tr></table>"#,
    )
    .with_text("a");
    let options = ImportOptions::default().with_include_style(false);
    sheet.paste(&payload, at(1, 1), &options).unwrap();

    let cell = sheet.cell("A1").unwrap().unwrap();
    assert!(cell.style.is_empty());
    assert!(sheet.cell("B2").unwrap().is_none());
}

/// Edge whitespace, carriage returns and trailing line breaks survive HTML copy -> paste
#[test]
fn test_copy_then_paste_keeps_whitespace() {
    let mut source = Sheet::new();
    source.set_cell("A1", "  padded ").unwrap();
    source.set_cell("B1", "two\r\nlines\n").unwrap();
    source.set_cell("A2", "caf\u{e9} & \u{e4}").unwrap();

    let content = source.copy(&CellRange::parse("A1:B2").unwrap());
    assert_eq!(content.text, "  padded \ttwo  lines \ncaf\u{e9} & \u{e4}\t");

    let mut target = Sheet::new();
    target
        .paste(&ClipboardPayload::html(content.html), at(26, 1), &ImportOptions::default())
        .unwrap();

    assert_eq!(target.text("AA2").unwrap(), Some("  padded "));
    assert_eq!(target.text("AB2").unwrap(), Some("two\r\nlines\n"));
    assert_eq!(target.text("AA3").unwrap(), Some("caf\u{e9} & \u{e4}"));
    assert_eq!(target.text("AB3").unwrap(), Some(""));
}

/// Named HTML entities from other applications decode to their characters
#[test]
fn test_paste_html_named_entities() {
    let mut sheet = Sheet::new();
    let html = "<table><tr><td>caf&eacute; &auml;</td><td>&copy;&nbsp;2024</td></tr></table>";
    sheet
        .paste(&ClipboardPayload::html(html), at(1, 1), &ImportOptions::default())
        .unwrap();

    assert_eq!(sheet.text("B2").unwrap(), Some("caf\u{e9} \u{e4}"));
    assert_eq!(sheet.text("C2").unwrap(), Some("\u{a9}\u{a0}2024"));
}
