//! papersync - Paperpile → Notion reading-list sync
//!
//! This crate provides the core functionality for the `papersync` CLI tool.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (RawRecord, VenueAlias, FormattedEntry, RemoteRecord)
//! - [`source`] - Paperpile CSV reader
//! - [`sync`] - Formatting, matching and reconciliation, plus the batch runner
//! - [`notion`] - Notion REST client
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod notion;
pub mod source;
pub mod sync;

pub use error::{Error, Result};

/// Global dry-run flag for `--dry-run`.
///
/// When set, `sync` decides every row but never creates or updates pages.
pub static DRY_RUN: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if dry-run mode is active.
#[inline]
pub fn is_dry_run() -> bool {
    DRY_RUN.load(std::sync::atomic::Ordering::Relaxed)
}
