//! Integration tests for configuration loading

use playctl::control::{Layout, Padding};
use playctl::{BufferRange, Config, ConfigError, Marker, PlaybackControl, TransportProps};

use crate::helpers::temp_config;

#[test]
fn full_config_drives_the_control() {
    let (_dir, path) = temp_config(
        r#"
[control]
layout = "compact"
step = 0.5
padding = { left = 2, right = 3 }
tick_spacing = 50
tick_format = "{s}s"
timestamp_format = "{mm}:{ss}.{SS}"
buffer_range = [{ start = 0, end = 20 }, { start = 30, end = 40 }]
markers = [{ time = 5, content = "a" }, { start = 10, end = 15, content = "b", style = "warn" }]

[display]
color = false
width = 120
"#,
    );

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.control.layout, Layout::Compact);
    assert_eq!(
        config.control.padding,
        Some(Padding::Sides {
            left: Some(2.0),
            right: Some(3.0)
        })
    );
    assert_eq!(config.control.buffer_range.as_slice().len(), 2);
    assert_eq!(config.control.buffer_range.as_slice()[1], BufferRange::new(30.0, 40.0));
    assert_eq!(config.control.markers[0], Marker::at(5.0, "a"));
    assert_eq!(config.control.markers[1].style.as_deref(), Some("warn"));
    assert!(!config.display.color);
    assert_eq!(config.display.width, Some(120));

    let props = TransportProps::new(0.0, 60.0).at(7.25);
    let mut control = PlaybackControl::new(props, config.control, ()).unwrap();
    control.resize(305.0);
    let frame = control.frame();
    assert_eq!(frame.track_length(), 300.0);
    assert_eq!(frame.timestamp, "00:07.25");
    assert_eq!(frame.ticks[1].label, "10s");
}

#[test]
fn missing_file_gives_defaults() {
    let (dir, _path) = temp_config("");
    let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn bad_timestamp_format_is_reported() {
    let (_dir, path) = temp_config("[control]\ntimestamp_format = \"{mm}:{xx}\"\n");
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Format(_)));
    assert!(err.to_string().contains("xx"));
}
