//! Shell completion generation

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use playctl::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "playctl", &mut std::io::stdout());
    Ok(())
}
