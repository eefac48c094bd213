//! Venue resolution.
//!
//! Maps the venue-identifying columns of a record (journal, proceedings,
//! archive prefix, book title) to short venue labels, and picks the
//! canonical link. arXiv links are privileged: when any URL points to arXiv
//! it becomes the link and `"arXiv"` is appended to the venues.

use tracing::debug;

use crate::model::{columns, MissingField, RawRecord, VenueAlias, VenueTables};

/// Raw venue text longer than this is cut when used as a literal label.
pub const MAX_VENUE_CHARS: usize = 100;

pub const ARXIV_VENUE: &str = "arXiv";
pub const OPENREVIEW_VENUE: &str = "OpenReview";

/// Venues and link chosen for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueResolution {
    pub venues: Vec<String>,
    pub link: String,
}

/// Find the alias a free-text venue refers to.
///
/// Case-insensitive. The first scan returns the first alias whose short
/// label or full name contains, or is contained in, the query. The second
/// scan looks only for the query inside an alias and is reached only when
/// the first found nothing.
#[must_use]
pub fn match_alias<'a>(query: &str, candidates: &'a [VenueAlias]) -> Option<&'a VenueAlias> {
    let query = query.to_lowercase();
    scan_either_direction(&query, candidates).or_else(|| scan_query_in_alias(&query, candidates))
}

fn scan_either_direction<'a>(query: &str, candidates: &'a [VenueAlias]) -> Option<&'a VenueAlias> {
    candidates.iter().find(|c| {
        let short = c.short.to_lowercase();
        let name = c.name.to_lowercase();
        query.contains(&short)
            || query.contains(&name)
            || short.contains(query)
            || name.contains(query)
    })
}

fn scan_query_in_alias<'a>(query: &str, candidates: &'a [VenueAlias]) -> Option<&'a VenueAlias> {
    candidates
        .iter()
        .find(|c| c.short.to_lowercase().contains(query) || c.name.to_lowercase().contains(query))
}

/// Resolve the venue labels and the canonical link of a record.
///
/// # Errors
///
/// Returns [`MissingField`] when a column required by the record's item type
/// (or `URLs`, required for every record) is absent.
pub fn resolve_venues(record: &RawRecord, tables: &VenueTables) -> Result<VenueResolution, MissingField> {
    let mut venues = match record.require(columns::ITEM_TYPE)? {
        "Journal Article" => journal_venues(record, &tables.journals)?,
        "Conference Paper" => conference_venues(record, &tables.conferences)?,
        "Preprint Manuscript" => preprint_venues(record)?,
        "Book Chapter" => vec![record.require(columns::BOOK_TITLE)?.trim().to_string()],
        _ => Vec::new(),
    };

    let (link, is_arxiv) = select_link(record.require(columns::URLS)?);
    if is_arxiv {
        venues.push(ARXIV_VENUE.to_string());
    }

    // Multi-select options cannot contain commas.
    let venues = venues.into_iter().map(|v| v.replace(',', "")).collect();

    Ok(VenueResolution { venues, link })
}

fn journal_venues(record: &RawRecord, journals: &[VenueAlias]) -> Result<Vec<String>, MissingField> {
    let lookup = match record.get(columns::FULL_JOURNAL).filter(|s| !s.is_empty()) {
        Some(full) => full,
        None => record.require(columns::JOURNAL)?,
    };
    let lookup = lookup.trim();

    let venues: Vec<String> = journals
        .iter()
        .filter(|j| j.name == lookup)
        .map(|j| j.short.clone())
        .collect();

    if venues.is_empty() {
        let raw = record.require(columns::JOURNAL)?;
        debug!(journal = raw, "No journal alias, using raw name");
        return Ok(vec![truncate_chars(raw.trim(), MAX_VENUE_CHARS)]);
    }
    Ok(venues)
}

fn conference_venues(
    record: &RawRecord,
    conferences: &[VenueAlias],
) -> Result<Vec<String>, MissingField> {
    let raw = record.require(columns::PROCEEDINGS_TITLE)?;
    let query = strip_braces(raw.trim());

    let venues: Vec<String> = match match_alias(&query, conferences) {
        Some(hit) => conferences
            .iter()
            .filter(|c| c.name == hit.name)
            .map(|c| c.short.clone())
            .collect(),
        None => Vec::new(),
    };

    if venues.is_empty() {
        debug!(proceedings = raw, "No conference alias, using raw proceedings title");
        return Ok(vec![truncate_chars(raw.trim(), MAX_VENUE_CHARS)]);
    }
    Ok(venues)
}

fn preprint_venues(record: &RawRecord) -> Result<Vec<String>, MissingField> {
    let urls = record.require(columns::URLS)?;
    let first = urls.trim().split(';').next().unwrap_or_default();
    if first.contains("openreview") {
        return Ok(vec![OPENREVIEW_VENUE.to_string()]);
    }
    Ok(vec![record.require(columns::ARCHIVE_PREFIX)?.trim().to_string()])
}

/// Pick the canonical link from a `;`-joined URL list.
///
/// Returns the first arXiv link if there is one (and `true`), otherwise the
/// first URL (and `false`).
#[must_use]
pub fn select_link(urls: &str) -> (String, bool) {
    let links: Vec<&str> = urls.trim().split(';').collect();
    match links.iter().find(|l| l.contains("arxiv")) {
        Some(arxiv) => ((*arxiv).to_string(), true),
        None => (links.first().copied().unwrap_or_default().to_string(), false),
    }
}

/// Remove BibTeX capitalisation braces.
#[must_use]
pub fn strip_braces(s: &str) -> String {
    s.replace(['{', '}'], "")
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
