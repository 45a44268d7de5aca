//! Sheetgrid CLI - cell keys and clipboard paste previews

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetgrid::prelude::*;
use sheetgrid::{decode_key, encode_key};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetgrid")]
#[command(author, version, about = "Cell key and clipboard paste tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the key of a cell (e.g. `key 27 3` prints AA3)
    Key {
        /// Column number (1-based)
        column: u32,

        /// Row number (1-based)
        row: u32,
    },

    /// Print the column and row of a cell key
    Decode {
        /// Cell key such as B7
        key: String,
    },

    /// Paste a clipboard payload into an empty sheet and print the records
    Paste {
        /// Payload file (`-` for stdin)
        input: PathBuf,

        /// Treat the payload as an HTML table
        #[arg(long, conflicts_with = "plain")]
        html: bool,

        /// Treat the payload as tab-separated text
        #[arg(long)]
        plain: bool,

        /// Anchor cell
        #[arg(short, long, default_value = "A1")]
        at: String,

        /// Print records as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Key { column, row } => {
            let key = encode_key(column, row)
                .with_context(|| format!("Invalid cell ({}, {})", column, row))?;
            println!("{}", key);
            Ok(())
        }
        Commands::Decode { key } => {
            let coordinate =
                decode_key(&key).with_context(|| format!("Invalid cell key '{}'", key))?;
            println!("{} {}", coordinate.column(), coordinate.row());
            Ok(())
        }
        Commands::Paste {
            input,
            html,
            plain,
            at,
            json,
        } => paste(&input, html, plain, &at, json),
    }
}

fn paste(input: &Path, html: bool, plain: bool, at: &str, json: bool) -> Result<()> {
    let content = read_input(input)?;
    let anchor = decode_key(at).with_context(|| format!("Invalid anchor '{}'", at))?;

    let as_html = html || (!plain && looks_like_html(&content));
    let payload = if as_html {
        ClipboardPayload::html(content)
    } else {
        ClipboardPayload::text(content)
    };

    let mut sheet = Sheet::new();
    let outcome = sheet
        .paste(&payload, anchor, &ImportOptions::default())
        .with_context(|| format!("Failed to paste '{}'", input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &outcome.records {
        if json {
            let line = serde_json::to_string(record).context("Failed to encode record")?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(
                out,
                "{}\t{}\t{}",
                record.key(),
                record.text.escape_default(),
                record.style.to_declarations()
            )?;
        }
    }
    for hint in &outcome.column_widths {
        if json {
            let line = serde_json::to_string(hint).context("Failed to encode width hint")?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "# column {} width {}px", hint.column, hint.width)?;
        }
    }

    let bounds = sheet.grid().bounds();
    eprintln!(
        "Pasted {} cells ({} x {}) at {}; grid is {} x {}",
        outcome.records.len(),
        outcome.columns,
        outcome.rows,
        anchor,
        bounds.columns,
        bounds.rows
    );

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read '{}'", input.display()))
    }
}

/// Whether the payload contains table markup
fn looks_like_html(content: &str) -> bool {
    let lower = content.to_ascii_lowercase();
    lower.contains("<table") || lower.contains("<tr")
}
