//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// papersync - keep a Notion reading list in step with a Paperpile export
#[derive(Parser, Debug)]
#[command(name = "papersync", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Match and reconcile, but never create or update pages
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync a Paperpile CSV export into a Notion database
    Sync(SyncArgs),

    /// Format an export offline and print the entries that would be sent
    Format(FormatArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print version information
    Version,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Paperpile CSV export
    #[arg(short, long)]
    pub input: PathBuf,

    /// Config file with venue aliases (default: PAPERSYNC_CONFIG or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Notion database id
    #[arg(short, long, env = "NOTION_DATABASE")]
    pub database: Option<String>,

    /// Notion integration token
    #[arg(short, long, env = "NOTION_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Titles match when fewer than this many characters differ
    #[arg(short, long)]
    pub max_distance: Option<usize>,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Paperpile CSV export
    #[arg(short, long)]
    pub input: PathBuf,

    /// Config file with venue aliases (default: PAPERSYNC_CONFIG or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show every field, empty ones included
    #[arg(long)]
    pub full: bool,
}
