//! CLI definitions for playctl.
//!
//! Lives in the library so that completions and tests can build the
//! command without going through the binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::projection::{BufferRange, Marker};
use crate::scale::TimeDomain;

/// Timeline and transport tools for media scrubbers.
#[derive(Parser, Debug)]
#[command(name = "playctl", version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/playctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a time value with a pattern
    #[command(long_about = "Format a time value in seconds.

Patterns use {hh}, {mm}, {ss} for zero-padded units (repeat the letter for
more digits) and {S}, {SS}, ... for truncated fractional digits. The largest
unit in the pattern carries any overflow.

EXAMPLES:
    playctl format 65                       01:05
    playctl format 65.37 --pattern '{mm}:{ss}.{S}'   01:05.3
    playctl format 3725 --pattern '{h}h{mm}m'        1h02m")]
    Format {
        /// Time in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,

        /// Format pattern (default: the configured tick format)
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// List the ticks generated for a domain and width
    Ticks {
        #[command(flatten)]
        domain: DomainArgs,

        /// Track width in pixels
        #[arg(short, long, default_value_t = 800.0)]
        width: f64,

        /// Minimum pixel spacing between ticks (default: from config)
        #[arg(long)]
        spacing: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw the timeline for a playback position
    #[command(long_about = "Draw the timeline for a playback position.

One column per pixel: tick labels, a marker row, the progress track and
the play/pause button with the current timestamp.

EXAMPLES:
    playctl render --end 90 --time 30
    playctl render --end 90 --time 30 --marker 10:20:intro --marker 45
    playctl render --end 90 --buffer 0:40 --playing --width 60")]
    Render {
        #[command(flatten)]
        domain: DomainArgs,

        /// Current playback time in seconds
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,

        /// Total width in columns, padding included
        #[arg(short, long)]
        width: Option<u16>,

        /// Show the control as playing
        #[arg(long)]
        playing: bool,

        /// Marker as START[:END[:LABEL]] (repeatable)
        #[arg(long = "marker", value_name = "START[:END[:LABEL]]")]
        markers: Vec<Marker>,

        /// Buffered range as START:END (repeatable)
        #[arg(long = "buffer", value_name = "START:END")]
        buffers: Vec<BufferRange>,
    },

    /// Print the notifications a props change would emit
    Simulate {
        /// Initial domain as START:END
        #[arg(long, value_name = "START:END", allow_hyphen_values = true)]
        from: TimeDomain,

        /// New domain as START:END
        #[arg(long, value_name = "START:END", allow_hyphen_values = true)]
        to: TimeDomain,

        /// Current time before the change
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,

        /// Start out playing
        #[arg(long)]
        playing: bool,

        /// Tear the control down after the change
        #[arg(long)]
        teardown: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,
}

/// Time domain arguments shared by several commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct DomainArgs {
    /// Domain start in seconds
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    /// Domain end in seconds
    #[arg(short, long, allow_negative_numbers = true)]
    pub end: f64,
}
