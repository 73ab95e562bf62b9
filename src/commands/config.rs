//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use playctl::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the path the config is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}
