//! Error types for papersync.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=config, 3=input, 4=remote, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for `--json` consumers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for papersync operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Config (exit 2)
    ConfigNotFound,
    ConfigError,

    // Input (exit 3)
    InputError,

    // Remote (exit 4)
    RemoteRejected,
    RemoteUnavailable,
    MissingCredentials,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::ConfigNotFound => "CONFIG_NOT_FOUND",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InputError => "INPUT_ERROR",
            Self::RemoteRejected => "REMOTE_REJECTED",
            Self::RemoteUnavailable => "REMOTE_UNAVAILABLE",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::ConfigNotFound | Self::ConfigError => 2,
            Self::InputError => 3,
            Self::RemoteRejected | Self::RemoteUnavailable | Self::MissingCredentials => 4,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether running again unchanged might succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RemoteUnavailable)
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in papersync operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("No config file given and no default location available")]
    NoConfigPath,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Missing {what}: pass --{flag} or set it in the config file")]
    MissingCredentials { what: &'static str, flag: &'static str },

    #[error("Notion API error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Notion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::ConfigNotFound { .. } | Self::NoConfigPath => ErrorCode::ConfigNotFound,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Input(_) | Self::Csv(_) => ErrorCode::InputError,
            Self::MissingCredentials { .. } => ErrorCode::MissingCredentials,
            Self::Remote { .. } => ErrorCode::RemoteRejected,
            Self::Http(_) => ErrorCode::RemoteUnavailable,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ConfigNotFound { path } => Some(format!(
                "Create {} with `journals:` and `conferences:` lists, or pass --config.",
                path.display()
            )),
            Self::NoConfigPath => {
                Some("Pass --config <file> or set PAPERSYNC_CONFIG.".to_string())
            }
            Self::MissingCredentials { flag, .. } => Some(format!(
                "Use --{flag}, the matching NOTION_* environment variable, or the `notion:` section of the config."
            )),
            Self::Remote { status: 401, .. } => {
                Some("Check that the integration token is valid.".to_string())
            }
            Self::Remote { status: 404, .. } => Some(
                "Check the database id and that the database is shared with the integration."
                    .to_string(),
            ),
            Self::Remote { status: 400, .. } => Some(
                "The database columns must match: Item type, Authors, Title, Venues, Date, Link, Labels, Folders, Status."
                    .to_string(),
            ),
            Self::Csv(_) | Self::Input(_) => {
                Some("The input must be a CSV exported from Paperpile.".to_string())
            }
            Self::Config(_)
            | Self::Remote { .. }
            | Self::Http(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
