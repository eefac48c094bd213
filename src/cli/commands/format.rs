//! Format command implementation.
//!
//! Offline preview of what `sync` would send: every row is formatted with the
//! configured alias tables and printed. Nothing is read from or written to
//! Notion.

use colored::Colorize;
use serde::Serialize;

use crate::cli::FormatArgs;
use crate::config::{load_config, resolve_config_path};
use crate::error::Result;
use crate::model::{FormattedEntry, MissingField};
use crate::source::read_rows;
use crate::sync::format_entry;

#[derive(Serialize)]
#[serde(untagged)]
enum RowPreview {
    Entry { row: usize, entry: FormattedEntry },
    Invalid { row: usize, missing_field: String },
}

/// Execute the format command.
///
/// # Errors
///
/// Returns an error if the config or input cannot be read.
pub fn execute(args: &FormatArgs, json: bool) -> Result<()> {
    let config_path = resolve_config_path(args.config.as_deref())?;
    let tables = load_config(&config_path)?.venue_tables();
    let rows = read_rows(&args.input)?;

    let previews: Vec<RowPreview> = rows
        .iter()
        .map(|row| match format_entry(&row.record, &tables) {
            Ok(formatted) => RowPreview::Entry {
                row: row.line,
                entry: if args.full {
                    formatted.full
                } else {
                    formatted.filtered
                },
            },
            Err(MissingField { field }) => RowPreview::Invalid {
                row: row.line,
                missing_field: field,
            },
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string(&previews)?);
        return Ok(());
    }

    for preview in &previews {
        match preview {
            RowPreview::Entry { row, entry } => {
                let title = entry
                    .get("Title")
                    .and_then(|f| f.value.as_text())
                    .unwrap_or("<untitled>");
                println!("{} {}", format!("[{row}]").dimmed(), title.bold());
                for (field, typed) in entry.iter() {
                    println!(
                        "  {:<10} {} {}",
                        field.name(),
                        typed.value,
                        format!("({})", typed.kind).dimmed()
                    );
                }
            }
            RowPreview::Invalid { row, missing_field } => {
                println!(
                    "{} {}",
                    format!("[{row}]").dimmed(),
                    format!("missing field '{missing_field}'").red()
                );
            }
        }
    }
    Ok(())
}
