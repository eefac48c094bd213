//! Result types for a sync run.

use serde::Serialize;

/// What happened to one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RowOutcome {
    /// No remote page matched; a new one was created.
    Created { row: usize, title: String },
    /// The matched page differed and was updated.
    Updated {
        row: usize,
        title: String,
        page_id: String,
        /// First column found to differ
        field: String,
    },
    /// The matched page already reflects the row.
    Unchanged {
        row: usize,
        title: String,
        page_id: String,
    },
    /// Several pages matched; the row was left alone.
    Ambiguous {
        row: usize,
        title: String,
        page_ids: Vec<String>,
    },
    /// A column this row needs is absent; the row was not formatted.
    MissingField {
        row: usize,
        title: Option<String>,
        field: String,
    },
    /// The remote store rejected the create or update.
    Failed {
        row: usize,
        title: String,
        error: String,
    },
}

impl RowOutcome {
    /// 1-based line of the row in the input file.
    #[must_use]
    pub fn row(&self) -> usize {
        match self {
            Self::Created { row, .. }
            | Self::Updated { row, .. }
            | Self::Unchanged { row, .. }
            | Self::Ambiguous { row, .. }
            | Self::MissingField { row, .. }
            | Self::Failed { row, .. } => *row,
        }
    }
}

/// Counters for a sync run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SyncStats {
    /// New pages created.
    pub created: usize,
    /// Existing pages updated.
    pub updated: usize,
    /// Matched pages that needed no update.
    pub unchanged: usize,
    /// Rows skipped because several pages matched.
    pub ambiguous: usize,
    /// Rows skipped because a required column was absent.
    pub missing_field: usize,
    /// Rows whose create/update was rejected.
    pub failed: usize,
}

impl SyncStats {
    /// Count one outcome.
    pub fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Created { .. } => self.created += 1,
            RowOutcome::Updated { .. } => self.updated += 1,
            RowOutcome::Unchanged { .. } => self.unchanged += 1,
            RowOutcome::Ambiguous { .. } => self.ambiguous += 1,
            RowOutcome::MissingField { .. } => self.missing_field += 1,
            RowOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Total rows processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged + self.ambiguous + self.missing_field + self.failed
    }

    /// Rows that did not reach the remote store as intended.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.ambiguous + self.missing_field + self.failed
    }
}

/// Full report of a sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Pages in the remote snapshot at the start of the run.
    pub remote_pages: usize,
    /// Rows read from the input.
    pub input_rows: usize,
    /// Whether writes were suppressed.
    pub dry_run: bool,
    /// When the run started (RFC 3339).
    pub started_at: String,
    pub stats: SyncStats,
    pub outcomes: Vec<RowOutcome>,
}
