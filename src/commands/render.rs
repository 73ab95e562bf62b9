//! Render command handler

use std::path::Path;

use anyhow::{Context, Result};

use playctl::cli::DomainArgs;
use playctl::render::{render_frame, Palette};
use playctl::{BufferRange, Config, Marker, PlaybackControl};

/// Column count used when neither config nor terminal give one.
const FALLBACK_WIDTH: u16 = 80;

pub struct RenderArgs {
    pub domain: DomainArgs,
    pub time: f64,
    pub width: Option<u16>,
    pub playing: bool,
    pub markers: Vec<Marker>,
    pub buffers: Vec<BufferRange>,
}

/// Resolve the render width: flag, then config, then terminal, then 80.
fn resolve_width(flag: Option<u16>, config: Option<u16>) -> u16 {
    flag.or(config)
        .or_else(|| terminal_size::terminal_size().map(|(w, _)| w.0))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Draw the timeline once.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: RenderArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let width = resolve_width(args.width, config.display.width);

    let mut options = config.control;
    if !args.markers.is_empty() {
        options.markers = args.markers;
    }
    if !args.buffers.is_empty() {
        options.buffer_range = args.buffers.into();
    }

    let props = options
        .props(args.domain.start, args.domain.end)
        .at(args.time)
        .playing(args.playing);

    // The renderer never reports back, so no callbacks are attached.
    let mut control =
        PlaybackControl::new(props, options, ()).context("Invalid time format in config")?;
    control.resize(f64::from(width));

    let palette = Palette::for_output(config.display.color);
    println!("{}", render_frame(&control.frame(), &palette));
    Ok(())
}
