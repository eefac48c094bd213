//! papersync CLI entry point.

use clap::Parser;
use papersync::cli::commands;
use papersync::cli::{Cli, Commands};
use papersync::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.dry_run {
        papersync::DRY_RUN.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet, cli.no_color);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool, no_color: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,hyper=info,reqwest=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Sync(args) => commands::sync::execute(args, cli.json),
        Commands::Format(args) => commands::format::execute(args, cli.json),
        Commands::Completions { shell } => commands::completions::execute(shell),
        Commands::Version => commands::version::execute(cli.json),
    }
}
