//! Text rendering of a [`TimelineFrame`].
//!
//! One pixel maps to one terminal column, so a frame computed for a track
//! of `n` pixels renders to `n` columns plus padding.

pub mod bar;
pub mod palette;
pub mod ruler;

pub use bar::{build_bar_chars, render_bar};
pub use palette::Palette;
pub use ruler::{build_marker_chars, build_tick_label_row, render_marker_row};

use crate::control::{Button, Layout, TimelineFrame};

/// Columns taken by the button icon and its trailing space in compact layout.
const BUTTON_WIDTH: usize = 2;

fn button_icon(button: Button) -> &'static str {
    match button {
        Button::Play => "▶",
        Button::Pause => "⏸",
    }
}

fn columns(pixels: f64) -> usize {
    if pixels.is_finite() && pixels > 0.0 {
        pixels.round() as usize
    } else {
        0
    }
}

/// Render a frame to lines of text joined by `\n`.
///
/// Normal layout puts tick labels, markers and the track on separate rows
/// with the button and timestamp underneath. Compact layout puts button,
/// track and timestamp on one row under the labels.
pub fn render_frame(frame: &TimelineFrame<'_>, palette: &Palette) -> String {
    let track = columns(frame.track_length());
    let left = columns(frame.insets.left);
    let right = columns(frame.insets.right);

    let label_offset = match frame.layout {
        Layout::Normal => left,
        Layout::Compact => BUTTON_WIDTH + left,
    };
    let labels = build_tick_label_row(&frame.ticks, label_offset, label_offset + track + right);

    let mut lines = vec![palette.paint(palette.label, &labels)];

    if !frame.markers.is_empty() {
        let row = render_marker_row(track, &frame.markers, palette);
        if !row.is_empty() {
            lines.push(format!("{}{}", " ".repeat(label_offset), row));
        }
    }

    let bar = render_bar(track, frame.playhead, &frame.buffers, palette);
    let icon = palette.paint(palette.button, button_icon(frame.button));
    let timestamp = palette.paint(palette.label, &frame.timestamp);

    match frame.layout {
        Layout::Normal => {
            lines.push(format!("{}{}", " ".repeat(left), bar));
            lines.push(format!("{}{} {}", " ".repeat(left), icon, timestamp));
        }
        Layout::Compact => {
            lines.push(format!(
                "{} {}{}{} {}",
                icon,
                " ".repeat(left),
                bar,
                " ".repeat(right),
                timestamp
            ));
        }
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlOptions, Padding, PlaybackControl};
    use crate::projection::{BufferRange, Marker};
    use crate::transport::TransportProps;

    fn options(layout: Layout) -> ControlOptions {
        ControlOptions {
            layout,
            padding: Some(Padding::Sides {
                left: Some(0.0),
                right: Some(5.0),
            }),
            tick_spacing: 10.0,
            markers: vec![Marker::span(0.0, 5.0, "intro"), Marker::at(20.0, "cut")],
            buffer_range: BufferRange::new(0.0, 18.0).into(),
            ..ControlOptions::default()
        }
    }

    fn render(layout: Layout, playing: bool) -> String {
        let props = TransportProps::new(0.0, 30.0).at(12.0).playing(playing);
        let mut control = PlaybackControl::new(props, options(layout), ()).unwrap();
        control.resize(35.0);
        render_frame(&control.frame(), &Palette::plain())
    }

    #[test]
    fn normal_layout() {
        insta::assert_snapshot!(render(Layout::Normal, false), @r"
        00:00     00:10     00:20     00:30
        ▬▬▬▬▬               ◆
        ━━━━━━━━━━━━⏺═════────────────
        ▶ 00:12.0
        ");
    }

    #[test]
    fn compact_layout_shares_one_row() {
        let out = render(Layout::Compact, true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  00:00     00:10     00:20     00:30");
        assert_eq!(lines[1], "  ▬▬▬▬▬               ◆");
        assert!(lines[2].starts_with("⏸ ━━━━━━━━━━━━⏺"));
        assert!(lines[2].ends_with("      00:12.0"));
    }

    #[test]
    fn unmeasured_frame_renders_controls_only() {
        let props = TransportProps::new(0.0, 30.0).at(3.0);
        let control = PlaybackControl::new(props, ControlOptions::default(), ()).unwrap();
        let out = render_frame(&control.frame(), &Palette::plain());
        assert_eq!(out, "\n\n                        ▶ 00:03.0");
    }

    #[test]
    fn colored_output_contains_escapes() {
        let props = TransportProps::new(0.0, 30.0).at(12.0);
        let mut control = PlaybackControl::new(props, options(Layout::Normal), ()).unwrap();
        control.resize(35.0);
        let out = render_frame(&control.frame(), &Palette::ansi());
        assert!(out.contains("\x1b[32m"));
        assert!(out.contains("\x1b[0m"));
    }
}
