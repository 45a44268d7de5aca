// Property-based tests for paste placement and grid growth.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::HashSet;

use proptest::prelude::*;
use sheetgrid::{
    CellRange, ClipboardPayload, Coordinate, GridStore, ImportOptions, Sheet, TextImporter,
};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Cell text without tabs or line breaks
fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r"[a-zA-Z0-9 .,&<>]{1,12}",
        1 => Just("".to_string()),
    ]
}

/// Cell text with markup characters, edge whitespace and line breaks
fn arb_cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r#"[ \t\r\na-zA-Z0-9.,&<>"']{1,12}"#,
        1 => Just("".to_string()),
    ]
}

/// Rectangular block of fields (at least two columns, so no line is empty)
fn arb_block() -> impl Strategy<Value = Vec<Vec<String>>> {
    (2usize..5, 1usize..5).prop_flat_map(|(columns, rows)| {
        prop::collection::vec(prop::collection::vec(arb_field(), columns), rows)
    })
}

fn arb_cell_block() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..5, 1usize..5).prop_flat_map(|(columns, rows)| {
        prop::collection::vec(prop::collection::vec(arb_cell_text(), columns), rows)
    })
}

fn arb_anchor() -> impl Strategy<Value = Coordinate> {
    (1u32..60, 1u32..120).prop_map(|(c, r)| Coordinate::new(c, r).unwrap())
}

fn to_tsv(block: &[Vec<String>]) -> String {
    block
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    /// Every pasted coordinate is unique, row-major and realized in the grid
    #[test]
    fn text_paste_places_each_field_once(block in arb_block(), anchor in arb_anchor()) {
        let mut grid = GridStore::new();
        let outcome = TextImporter::import(&mut grid, &to_tsv(&block), anchor).unwrap();

        let expected: usize = block.iter().map(Vec::len).sum();
        prop_assert_eq!(outcome.records.len(), expected);

        let mut seen = HashSet::new();
        let mut previous: Option<(u32, u32)> = None;
        for record in &outcome.records {
            prop_assert!(seen.insert(record.coordinate));
            prop_assert!(grid.has(&record.coordinate));
            let position = (record.coordinate.row(), record.coordinate.column());
            if let Some(previous) = previous {
                prop_assert!(position > previous);
            }
            previous = Some(position);
        }
    }

    /// Bounds never shrink across a sequence of pastes
    #[test]
    fn bounds_are_monotonic(pastes in prop::collection::vec((arb_block(), arb_anchor()), 1..6)) {
        let mut sheet = Sheet::with_grid(GridStore::new());
        let mut last = sheet.grid().bounds();

        for (block, anchor) in pastes {
            let outcome = sheet
                .paste(&ClipboardPayload::text(to_tsv(&block)), anchor, &ImportOptions::default())
                .unwrap();
            let bounds = sheet.grid().bounds();
            prop_assert!(bounds.columns >= last.columns);
            prop_assert!(bounds.rows >= last.rows);
            prop_assert_eq!(
                sheet.grid().realized_count(),
                bounds.columns as u64 * bounds.rows as u64
            );
            if let Some(growth) = outcome.growth {
                prop_assert_eq!(growth.previous, last);
            }
            last = bounds;
        }
    }

    /// Copying cells as HTML and pasting them again lands the exact same texts
    #[test]
    fn html_copy_paste_preserves_text(block in arb_cell_block(), anchor in arb_anchor()) {
        let mut source = Sheet::new();
        for (r, row) in block.iter().enumerate() {
            for (c, field) in row.iter().enumerate() {
                let coordinate = anchor.offset(c as u32, r as u32).unwrap();
                source.set_cell_at(coordinate, field.as_str()).unwrap();
            }
        }

        let last = Coordinate::new(
            anchor.column() + block[0].len() as u32 - 1,
            anchor.row() + block.len() as u32 - 1,
        )
        .unwrap();
        let content = source.copy(&CellRange::new(anchor, last));

        let mut target = Sheet::new();
        let origin = Coordinate::new(anchor.column().max(2) - 1, anchor.row().max(2) - 1).unwrap();
        let outcome = target
            .paste(&ClipboardPayload::html(content.html), origin, &ImportOptions::default())
            .unwrap();

        prop_assert_eq!(outcome.records.len(), block.iter().map(Vec::len).sum::<usize>());
        for (r, row) in block.iter().enumerate() {
            for (c, field) in row.iter().enumerate() {
                let coordinate = Coordinate::new(
                    origin.column() + 1 + c as u32,
                    origin.row() + 1 + r as u32,
                )
                .unwrap();
                let text = target.cell_at(coordinate).map(|cell| cell.text.clone());
                prop_assert_eq!(text.as_deref(), Some(field.as_str()));
            }
        }
    }
}
