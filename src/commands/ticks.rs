//! Ticks command handler

use std::path::Path;

use anyhow::Result;

use playctl::cli::DomainArgs;
use playctl::scale::{LinearScale, PixelRange, TimeDomain};
use playctl::ticks::generate_ticks;
use playctl::timecode::TimeFormat;
use playctl::Config;

/// List the ticks for a domain at a given track width.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    domain: DomainArgs,
    width: f64,
    spacing: Option<f64>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let formatter = TimeFormat::parse(&config.control.tick_format)?;
    let spacing = spacing.unwrap_or(config.control.tick_spacing);

    let scale = LinearScale::new(
        TimeDomain::new(domain.start, domain.end),
        PixelRange::new(width),
    );
    let ticks = generate_ticks(&scale, spacing, &formatter);
    tracing::debug!(count = ticks.len(), spacing, width, "generated ticks");

    if json {
        println!("{}", serde_json::to_string_pretty(&ticks)?);
        return Ok(());
    }

    for tick in &ticks {
        println!("{:>10.1}  {:>8.1}  {}", tick.time, tick.position, tick.label);
    }
    Ok(())
}
