//! Simulate command handler
//!
//! Drives a transport through a props change and prints what the callbacks
//! would have received.

use std::path::Path;

use anyhow::Result;

use playctl::scale::TimeDomain;
use playctl::{Config, ControlOptions, Insets, Notification, Transport};

pub struct SimulateArgs {
    pub from: TimeDomain,
    pub to: TimeDomain,
    pub time: f64,
    pub playing: bool,
    pub teardown: bool,
    pub json: bool,
}

/// Notifications emitted while moving from one domain to another.
fn simulate(args: &SimulateArgs, options: &ControlOptions) -> Vec<Notification> {
    let props = |domain: TimeDomain| {
        options
            .props(domain.start, domain.end)
            .at(args.time)
            .playing(args.playing)
    };

    let mut transport = Transport::new(props(args.from), Insets::default());
    let mut notifications = transport.update(props(args.to));
    if args.teardown {
        notifications.extend(transport.teardown());
    }
    notifications
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: SimulateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let notifications = simulate(&args, &config.control);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notifications)?);
        return Ok(());
    }

    if notifications.is_empty() {
        println!("(no notifications)");
    }
    for notification in &notifications {
        match notification {
            Notification::Play => println!("play"),
            Notification::Pause => println!("pause"),
            Notification::Seek(time) => println!("seek {}", time),
        }
    }
    Ok(())
}
