//! Sync command implementation.
//!
//! Reads the export, snapshots the Notion database once, then creates,
//! updates or skips one row at a time, printing a line per row.

use colored::Colorize;

use crate::cli::SyncArgs;
use crate::config::{load_config, resolve_config_path};
use crate::error::{Error, Result};
use crate::notion::NotionClient;
use crate::source::read_rows;
use crate::sync::{RowOutcome, SyncOptions, SyncReport, Syncer};

/// Execute the sync command.
///
/// # Errors
///
/// Returns an error if the config or input cannot be read, credentials are
/// missing, or the initial database query fails. Per-row failures are
/// reported in the output, not returned.
pub fn execute(args: &SyncArgs, json: bool) -> Result<()> {
    let config_path = resolve_config_path(args.config.as_deref())?;
    let config = load_config(&config_path)?;
    let token = config.token(args.token.as_deref())?;
    let database = config.database(args.database.as_deref())?;
    let tables = config.venue_tables();

    let rows = read_rows(&args.input)?;

    let mut client = NotionClient::new(token, database);
    if let Some(base_url) = &config.notion.base_url {
        client = client.with_base_url(base_url.as_str());
    }

    let options = SyncOptions {
        max_distance: config.max_distance(args.max_distance),
        dry_run: crate::is_dry_run(),
    };

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Other(format!("Failed to create async runtime: {e}")))?;

    let report = rt.block_on(async {
        let syncer = Syncer::connect(&client, &tables, options).await?;
        if !json {
            println!(
                "Found {} pages on Notion and {} in the input",
                syncer.snapshot().len(),
                rows.len()
            );
        }
        let report = syncer
            .run(&rows, |outcome| {
                if !json {
                    print_outcome(outcome);
                }
            })
            .await;
        Ok::<SyncReport, Error>(report)
    })?;

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_outcome(outcome: &RowOutcome) {
    match outcome {
        RowOutcome::Created { title, .. } => {
            println!("{} {title}", "Adding".green());
        }
        RowOutcome::Updated { title, field, .. } => {
            println!("{} {title} {}", "Updating".yellow(), format!("({field} changed)").dimmed());
        }
        RowOutcome::Unchanged { title, .. } => {
            println!("{} {title}", "Skipping".dimmed());
        }
        RowOutcome::Ambiguous { title, page_ids, .. } => {
            println!(
                "{} {title} {}",
                "Ambiguous".magenta(),
                format!("({} matches)", page_ids.len()).dimmed()
            );
        }
        RowOutcome::MissingField { row, title, field } => {
            let title = title.as_deref().unwrap_or("<untitled>");
            println!(
                "{} {title} {}",
                "Invalid".red(),
                format!("(row {row}: missing '{field}')").dimmed()
            );
        }
        RowOutcome::Failed { title, error, .. } => {
            println!("{} {title}: {error}", "Failed".red().bold());
        }
    }
}

fn print_summary(report: &SyncReport) {
    let stats = &report.stats;
    println!();
    if report.dry_run {
        println!("{}", "Dry run: nothing was written.".yellow());
    }
    println!("  Created:   {}", stats.created);
    println!("  Updated:   {}", stats.updated);
    println!("  Unchanged: {}", stats.unchanged);
    if stats.skipped() > 0 {
        println!(
            "  Skipped:   {} ({} ambiguous, {} invalid, {} failed)",
            stats.skipped(),
            stats.ambiguous,
            stats.missing_field,
            stats.failed
        );
    }
    println!("Done");
}
