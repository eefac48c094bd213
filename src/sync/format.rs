//! Entry formatting.
//!
//! Turns a raw export row into the canonical field set. The full entry keeps
//! every column, empty or not, and is what reconciliation compares against.
//! The filtered entry drops empty columns and is what gets written remotely.

use tracing::warn;

use crate::model::{
    columns, EntryField, FormattedEntry, MissingField, RawRecord, TypedField, VenueTables,
};

use super::date::{is_canonical_date, normalize_date};
use super::venue::{resolve_venues, strip_braces};

/// Status given to every synced paper.
pub const DEFAULT_STATUS: &str = "to-be-read";

/// Both variants of a formatted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// All nine fields, empty ones included
    pub full: FormattedEntry,
    /// Only the non-empty fields
    pub filtered: FormattedEntry,
}

/// Format one source record.
///
/// Pure: the result depends only on the record and the alias tables.
///
/// # Errors
///
/// Returns [`MissingField`] when a column needed for this record is absent.
/// No partial entry is produced in that case.
pub fn format_entry(record: &RawRecord, tables: &VenueTables) -> Result<Formatted, MissingField> {
    let resolution = resolve_venues(record, tables)?;

    let date = normalize_date(record);
    if !is_canonical_date(&date) {
        warn!(date, "Date is not in YYYY-MM-DD form");
    }

    let authors: Vec<String> = record
        .require(columns::AUTHORS)?
        .trim()
        .split(',')
        .map(str::to_string)
        .collect();
    let title = strip_braces(record.require(columns::TITLE)?.trim());
    let labels = split_list(record.require(columns::LABELS)?);
    let folders = split_list(record.require(columns::FOLDERS)?);
    let item_type = record.require(columns::ITEM_TYPE)?.trim();

    let full = FormattedEntry::new()
        .with(EntryField::ItemType, TypedField::select(item_type))
        .with(EntryField::Authors, TypedField::multi_select(authors))
        .with(EntryField::Title, TypedField::title(title))
        .with(EntryField::Venues, TypedField::multi_select(resolution.venues))
        .with(EntryField::Date, TypedField::date(date))
        .with(EntryField::Link, TypedField::url(resolution.link))
        .with(EntryField::Labels, TypedField::multi_select(labels))
        .with(EntryField::Folders, TypedField::multi_select(folders))
        .with(EntryField::Status, TypedField::select(DEFAULT_STATUS));

    let filtered = full.filtered();
    Ok(Formatted { full, filtered })
}

/// Split a `;`-joined cell into trimmed items. A blank cell gives no items.
fn split_list(cell: &str) -> Vec<String> {
    let items: Vec<String> = cell
        .trim()
        .split(';')
        .map(|s| s.trim().to_string())
        .collect();
    if items.len() == 1 && items[0].is_empty() {
        return Vec::new();
    }
    items
}
