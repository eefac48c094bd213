//! Date normalisation.
//!
//! Paperpile exports dates as full dates, year-month, bare years, or not at
//! all. The remote Date column wants `YYYY-MM-DD`.

use chrono::NaiveDate;

use crate::model::{columns, RawRecord};

/// Used when the record carries no date information at all.
pub const DEFAULT_DATE: &str = "2000-01-01";

/// Coerce the record's date columns into `YYYY-MM-DD`.
///
/// `Date published` wins over `Publication year`. Timestamps are cut to
/// their date part, year-month values get day `01`, and a bare year is
/// replaced by `Publication year` + `-01-01`.
#[must_use]
pub fn normalize_date(record: &RawRecord) -> String {
    let year = record
        .get(columns::PUBLICATION_YEAR)
        .map(str::trim)
        .filter(|y| !y.is_empty());

    let mut date = match record
        .get(columns::DATE_PUBLISHED)
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        Some(published) => published.to_string(),
        None => year.map(|y| format!("{y}-01-01")).unwrap_or_default(),
    };

    if date.chars().count() > 10 {
        date = date.chars().take(10).collect();
    }

    match date.chars().count() {
        // Re-read the year column rather than reusing the bare value. Without
        // a year column the bare value itself is completed.
        4 => date = format!("{}-01-01", year.unwrap_or(date.as_str())),
        7 => date.push_str("-01"),
        _ => {}
    }

    if date.is_empty() {
        date = DEFAULT_DATE.to_string();
    }
    date
}

/// Whether `date` is a real calendar date in `YYYY-MM-DD` form.
#[must_use]
pub fn is_canonical_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
