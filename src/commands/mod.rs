//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod format;
pub mod render;
pub mod simulate;
pub mod ticks;
