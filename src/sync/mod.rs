//! Paperpile → Notion sync core.
//!
//! This module turns export rows into database entries and keeps the remote
//! database in step with them:
//!
//! - **Venue**: resolve journal/conference names to configured short labels
//! - **Date**: normalize publication dates to `YYYY-MM-DD`
//! - **Format**: build the nine-field entry (full and filtered variants)
//! - **Matcher**: find remote pages whose title is close to a record's
//! - **Reconcile**: decide whether a matched page needs an update
//! - **Runner**: drive a whole batch against a [`PageStore`]
//!
//! # Architecture
//!
//! A run is strictly sequential:
//! 1. The remote database is snapshotted once
//! 2. Each row is formatted, then matched against the snapshot by title
//! 3. No match → create; one match → reconcile and maybe update;
//!    several matches → skip
//!
//! Pages created during the run are not added to the snapshot, so duplicate
//! rows in one export both create pages.
//!
//! # Example
//!
//! ```ignore
//! use papersync::sync::{Syncer, SyncOptions};
//!
//! let syncer = Syncer::connect(&client, &tables, SyncOptions::default()).await?;
//! let report = syncer.run(&rows, |outcome| println!("{outcome:?}")).await;
//! println!("{} created", report.stats.created);
//! ```

pub mod date;
pub mod format;
pub mod matcher;
pub mod reconcile;
pub mod runner;
pub mod store;
pub mod types;
pub mod venue;

pub use date::{is_canonical_date, normalize_date, DEFAULT_DATE};
pub use format::{format_entry, Formatted, DEFAULT_STATUS};
pub use matcher::{find_matches, hamming_distance, MatchOutcome, DEFAULT_MAX_DISTANCE};
pub use reconcile::{check_identical, compare_field, Decision, FieldComparison, IGNORED_FIELDS};
pub use runner::{SyncOptions, Syncer};
pub use store::PageStore;
pub use types::{RowOutcome, SyncReport, SyncStats};
pub use venue::{match_alias, resolve_venues, select_link, strip_braces, VenueResolution};
