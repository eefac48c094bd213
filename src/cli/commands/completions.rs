//! Shell completions command implementation.

use clap::CommandFactory;
use clap_complete::generate;
use std::io;

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<&Shell> for clap_complete::Shell {
    fn from(shell: &Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

/// Write completions for `shell` to stdout.
pub fn execute(shell: &Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(clap_complete::Shell::from(shell), &mut cmd, bin, &mut io::stdout());
    Ok(())
}
