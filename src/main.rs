//! playctl CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use playctl::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Map `-v` occurrences to a log level (warn by default).
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Format { seconds, pattern } => {
            commands::format::handle(seconds, pattern.as_deref(), config_path)
        }
        Commands::Ticks {
            domain,
            width,
            spacing,
            json,
        } => commands::ticks::handle(domain, width, spacing, json, config_path),
        Commands::Render {
            domain,
            time,
            width,
            playing,
            markers,
            buffers,
        } => commands::render::handle(
            commands::render::RenderArgs {
                domain,
                time,
                width,
                playing,
                markers,
                buffers,
            },
            config_path,
        ),
        Commands::Simulate {
            from,
            to,
            time,
            playing,
            teardown,
            json,
        } => commands::simulate::handle(
            commands::simulate::SimulateArgs {
                from,
                to,
                time,
                playing,
                teardown,
                json,
            },
            config_path,
        ),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
