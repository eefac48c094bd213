//! Field-level reconciliation between a source entry and its remote page.
//!
//! Only the remote page's columns are walked. Columns the remote side owns
//! (dates, venues, status, hand-maintained extras) are never compared, and
//! list columns are checked one way only: everything the source has must be
//! present remotely, but remote-only items (extra labels added by hand) are
//! left alone.

use tracing::{debug, info};

use crate::model::{FieldValue, FormattedEntry, RemoteRecord, RemoteValue};

/// Remote columns excluded from comparison.
pub const IGNORED_FIELDS: [&str; 6] = ["id", "Institutions", "Date", "Code", "Venues", "Status"];

/// Result of comparing a single remote column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldComparison {
    /// Values agree
    Match,
    /// Values differ; the page needs an update
    Mismatch {
        source: FieldValue,
        remote: RemoteValue,
    },
    /// The remote column has no counterpart in the source entry
    FieldMissingLocally,
    /// The remote column holds no value, so there is nothing to compare
    Unset,
}

/// Compare one remote column against the source entry.
#[must_use]
pub fn compare_field(entry: &FormattedEntry, name: &str, remote: &RemoteValue) -> FieldComparison {
    if matches!(remote, RemoteValue::Empty) {
        return FieldComparison::Unset;
    }
    let Some(field) = entry.get(name) else {
        return FieldComparison::FieldMissingLocally;
    };

    let agrees = match (remote, &field.value) {
        (RemoteValue::Text(r), FieldValue::Text(s)) => r == s,
        (RemoteValue::Text(_), FieldValue::List(_)) => false,
        // Empty source items are never written, so they cannot be expected remotely.
        (RemoteValue::List(r), FieldValue::List(s)) => {
            s.iter().filter(|x| !x.is_empty()).all(|x| r.contains(x))
        }
        // Not produced by the nine entry fields; a scalar counts as a one-item list.
        (RemoteValue::List(r), FieldValue::Text(s)) => s.is_empty() || r.contains(s),
        (RemoteValue::Empty, _) => true,
    };

    if agrees {
        FieldComparison::Match
    } else {
        FieldComparison::Mismatch {
            source: field.value.clone(),
            remote: remote.clone(),
        }
    }
}

/// Whether a matched page already reflects the source entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Identical,
    /// The first differing column
    Update { field: String },
}

impl Decision {
    #[must_use]
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }
}

/// Decide whether `page` must be updated from `entry` (the full variant).
///
/// Stops at the first mismatching column.
#[must_use]
pub fn check_identical(entry: &FormattedEntry, page: &RemoteRecord) -> Decision {
    for (name, remote) in &page.fields {
        if IGNORED_FIELDS.contains(&name.as_str()) {
            continue;
        }
        match compare_field(entry, name, remote) {
            FieldComparison::Match | FieldComparison::Unset => {}
            FieldComparison::FieldMissingLocally => {
                info!(field = %name, value = %remote, "Field set remotely but missing in the export");
            }
            FieldComparison::Mismatch { source, remote } => {
                debug!(field = %name, %source, %remote, "Mismatching field");
                return Decision::Update {
                    field: name.clone(),
                };
            }
        }
    }
    Decision::Identical
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryField, TypedField};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn entry() -> FormattedEntry {
        FormattedEntry::new()
            .with(EntryField::ItemType, TypedField::select("Journal Article"))
            .with(EntryField::Authors, TypedField::multi_select(strings(&["A", " B"])))
            .with(EntryField::Title, TypedField::title("Paper"))
            .with(EntryField::Venues, TypedField::multi_select(strings(&["Nature"])))
            .with(EntryField::Date, TypedField::date("2020-01-01"))
            .with(EntryField::Link, TypedField::url(""))
            .with(EntryField::Labels, TypedField::multi_select(strings(&["ml"])))
            .with(EntryField::Folders, TypedField::multi_select(vec![]))
            .with(EntryField::Status, TypedField::select("to-be-read"))
    }

    fn page() -> RemoteRecord {
        RemoteRecord::new("page-1")
            .with("Item type", RemoteValue::Text("Journal Article".into()))
            .with("Authors", RemoteValue::List(strings(&["A", " B"])))
            .with("Title", RemoteValue::Text("Paper".into()))
            .with("Venues", RemoteValue::List(strings(&["Science"])))
            .with("Date", RemoteValue::Text("1999-01-01".into()))
            .with("Link", RemoteValue::Empty)
            .with("Labels", RemoteValue::List(strings(&["ml"])))
            .with("Folders", RemoteValue::List(vec![]))
            .with("Status", RemoteValue::Text("Reading".into()))
    }

    #[test]
    fn test_identical() {
        assert_eq!(check_identical(&entry(), &page()), Decision::Identical);
    }

    #[test]
    fn test_ignored_fields_never_trigger_update() {
        let page = page()
            .with("Code", RemoteValue::Text("github.com/x".into()))
            .with("Institutions", RemoteValue::List(strings(&["MIT"])));
        assert!(check_identical(&entry(), &page).is_identical());
    }

    #[test]
    fn test_scalar_mismatch() {
        let page = page().with("Item type", RemoteValue::Text("Preprint Manuscript".into()));
        assert_eq!(
            check_identical(&entry(), &page),
            Decision::Update {
                field: "Item type".into()
            }
        );
    }

    #[test]
    fn test_remote_extra_list_items_tolerated() {
        let page = page().with("Labels", RemoteValue::List(strings(&["ml", "hand-added"])));
        assert!(check_identical(&entry(), &page).is_identical());
    }

    #[test]
    fn test_source_list_item_missing_remotely() {
        let page = page().with("Labels", RemoteValue::List(vec![]));
        assert_eq!(
            check_identical(&entry(), &page),
            Decision::Update {
                field: "Labels".into()
            }
        );
    }

    #[test]
    fn test_empty_source_list_matches_unset_remote_list() {
        // An empty Authors cell formats as [""] and is never sent; the page
        // then reports every multi-select column as an empty list.
        let entry = entry()
            .with(EntryField::Authors, TypedField::multi_select(strings(&[""])))
            .with(EntryField::Labels, TypedField::multi_select(vec![]));
        let page = page()
            .with("Authors", RemoteValue::List(vec![]))
            .with("Labels", RemoteValue::List(vec![]))
            .with("Folders", RemoteValue::List(vec![]));
        assert_eq!(
            compare_field(&entry, "Authors", &RemoteValue::List(vec![])),
            FieldComparison::Match
        );
        assert!(check_identical(&entry, &page).is_identical());
    }

    #[test]
    fn test_scalar_source_against_remote_list() {
        let remote = RemoteValue::List(strings(&["Paper"]));
        assert_eq!(compare_field(&entry(), "Title", &remote), FieldComparison::Match);
        let remote = RemoteValue::List(vec![]);
        assert!(matches!(
            compare_field(&entry(), "Title", &remote),
            FieldComparison::Mismatch { .. }
        ));
        let blank = entry().with(EntryField::Title, TypedField::title(""));
        assert_eq!(compare_field(&blank, "Title", &remote), FieldComparison::Match);
    }

    #[test]
    fn test_field_missing_locally_is_informational() {
        let page = page().with("Notes", RemoteValue::Text("great paper".into()));
        assert_eq!(
            compare_field(&entry(), "Notes", &RemoteValue::Text("x".into())),
            FieldComparison::FieldMissingLocally
        );
        assert!(check_identical(&entry(), &page).is_identical());
    }

    #[test]
    fn test_list_field_missing_locally_is_informational() {
        let page = page().with("Tags", RemoteValue::List(strings(&["x"])));
        assert!(check_identical(&entry(), &page).is_identical());
    }

    #[test]
    fn test_unset_remote_value_skipped() {
        let entry = entry().with(EntryField::Link, TypedField::url("https://x"));
        assert_eq!(
            compare_field(&entry, "Link", &RemoteValue::Empty),
            FieldComparison::Unset
        );
        assert!(check_identical(&entry, &page()).is_identical());
    }

    #[test]
    fn test_type_disagreement_is_mismatch() {
        assert!(matches!(
            compare_field(&entry(), "Authors", &RemoteValue::Text("A, B".into())),
            FieldComparison::Mismatch { .. }
        ));
    }

    #[test]
    fn test_short_circuits_on_first_mismatch() {
        let page = page()
            .with("Item type", RemoteValue::Text("Book".into()))
            .with("Title", RemoteValue::Text("Another".into()));
        assert_eq!(
            check_identical(&entry(), &page),
            Decision::Update {
                field: "Item type".into()
            }
        );
    }
}
