//! Batch sync driver.
//!
//! Takes one snapshot of the remote database, then walks the source rows in
//! order: format → match → create, reconcile-and-update, or skip. Every row
//! is finished before the next starts. Per-row failures (missing columns,
//! rejected writes, ambiguous matches) are recorded and the run carries on.

use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::model::{columns, RemoteRecord, VenueTables};
use crate::source::SourceRow;

use super::format::{format_entry, Formatted};
use super::matcher::{find_matches, MatchOutcome, DEFAULT_MAX_DISTANCE};
use super::reconcile::{check_identical, Decision};
use super::store::PageStore;
use super::types::{RowOutcome, SyncReport, SyncStats};
use super::venue::strip_braces;

/// Run options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Titles match when their distance is strictly below this.
    pub max_distance: usize,
    /// Decide everything but never write to the store.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            dry_run: false,
        }
    }
}

/// Sync driver bound to one store snapshot.
pub struct Syncer<'a, S: PageStore> {
    store: &'a S,
    tables: &'a VenueTables,
    options: SyncOptions,
    snapshot: Vec<RemoteRecord>,
}

impl<'a, S: PageStore> Syncer<'a, S> {
    /// Take the remote snapshot the whole run will match against.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub async fn connect(store: &'a S, tables: &'a VenueTables, options: SyncOptions) -> Result<Self> {
        let snapshot = store.query_database().await?;
        info!(pages = snapshot.len(), "Fetched remote snapshot");
        Ok(Self {
            store,
            tables,
            options,
            snapshot,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> &[RemoteRecord] {
        &self.snapshot
    }

    /// Process every row, calling `on_row` as each one completes.
    pub async fn run<F>(&self, rows: &[SourceRow], mut on_row: F) -> SyncReport
    where
        F: FnMut(&RowOutcome),
    {
        let started_at = chrono::Utc::now().to_rfc3339();
        let mut stats = SyncStats::default();
        let mut outcomes = Vec::with_capacity(rows.len());

        for row in rows {
            let outcome = self.sync_row(row).await;
            stats.record(&outcome);
            on_row(&outcome);
            outcomes.push(outcome);
        }

        SyncReport {
            remote_pages: self.snapshot.len(),
            input_rows: rows.len(),
            dry_run: self.options.dry_run,
            started_at,
            stats,
            outcomes,
        }
    }

    /// Process a single row.
    pub async fn sync_row(&self, row: &SourceRow) -> RowOutcome {
        let line = row.line;
        let raw_title = row.record.get(columns::TITLE).map(strip_braces);

        let Formatted { full, filtered } = match format_entry(&row.record, self.tables) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!(row = line, field = %e.field, "Skipping row with missing field");
                return RowOutcome::MissingField {
                    row: line,
                    title: raw_title,
                    field: e.field,
                };
            }
        };
        // format_entry succeeded, so the Title column exists.
        let title = raw_title.unwrap_or_default();

        let candidates = find_matches(&title, &self.snapshot, self.options.max_distance);
        match MatchOutcome::from(candidates) {
            MatchOutcome::Ambiguous(indices) => {
                let page_ids: Vec<String> =
                    indices.iter().map(|&i| self.snapshot[i].id.clone()).collect();
                warn!(row = line, title = %title, matches = page_ids.len(), "Multiple matches found");
                RowOutcome::Ambiguous {
                    row: line,
                    title,
                    page_ids,
                }
            }
            MatchOutcome::New => {
                if !self.options.dry_run {
                    if let Err(e) = self.store.create_page(&filtered).await {
                        error!(row = line, title = %title, error = %e, "Create rejected");
                        return RowOutcome::Failed {
                            row: line,
                            title,
                            error: e.to_string(),
                        };
                    }
                }
                debug!(row = line, title = %title, "Created page");
                RowOutcome::Created { row: line, title }
            }
            MatchOutcome::Single(index) => {
                let page = &self.snapshot[index];
                match check_identical(&full, page) {
                    Decision::Identical => RowOutcome::Unchanged {
                        row: line,
                        title,
                        page_id: page.id.clone(),
                    },
                    Decision::Update { field } => {
                        if !self.options.dry_run {
                            if let Err(e) = self.store.update_page(&page.id, &filtered).await {
                                error!(row = line, page = %page.id, error = %e, "Update rejected");
                                return RowOutcome::Failed {
                                    row: line,
                                    title,
                                    error: e.to_string(),
                                };
                            }
                        }
                        debug!(row = line, page = %page.id, field = %field, "Updated page");
                        RowOutcome::Updated {
                            row: line,
                            title,
                            page_id: page.id.clone(),
                            field,
                        }
                    }
                }
            }
        }
    }
}
