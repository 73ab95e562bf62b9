//! Format command handler

use std::path::Path;

use anyhow::{Context, Result};

use playctl::timecode::format_time_code;
use playctl::Config;

/// Print `seconds` formatted with `pattern`, or the configured tick format.
#[cfg(not(tarpaulin_include))]
pub fn handle(seconds: f64, pattern: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let pattern = match pattern {
        Some(p) => p.to_string(),
        None => Config::load(config_path)?.control.tick_format,
    };
    let text = format_time_code(seconds, &pattern)
        .with_context(|| format!("Invalid pattern '{}'", pattern))?;
    println!("{}", text);
    Ok(())
}
