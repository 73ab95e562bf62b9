//! Tick label and marker rows above the track.

use crate::projection::{Marker, Span};
use crate::render::bar::span_columns;
use crate::render::palette::Palette;
use crate::ticks::Tick;

const INSTANT_MARKER: char = '◆';
const RANGE_MARKER: char = '▬';

/// Lay out tick labels on one row.
///
/// Labels start at their tick column. A label that would run past `limit`
/// is right-aligned to it, and a label that would touch the previous one is
/// dropped.
pub fn build_tick_label_row(ticks: &[Tick], offset: usize, limit: usize) -> String {
    let mut row = String::new();
    let mut used = 0usize;
    let mut next_free = 0usize;

    for tick in ticks {
        let len = tick.label.chars().count();
        let mut col = offset + tick.position.round().max(0.0) as usize;
        if col + len > limit {
            col = limit.saturating_sub(len);
        }
        if col < next_free {
            continue;
        }
        row.push_str(&" ".repeat(col - used));
        row.push_str(&tick.label);
        used = col + len;
        next_free = used + 1;
    }

    row
}

/// Build the marker row for a track of `track` columns.
///
/// Ranged markers fill their columns; instantaneous ones (or ranges too
/// narrow to cover a column) get a single diamond.
pub fn build_marker_chars(track: usize, markers: &[Span<'_, Marker>]) -> Vec<char> {
    let mut row = vec![' '; track];
    if track == 0 {
        return row;
    }

    for span in markers {
        let (start, end) = span_columns(span.left, span.width, track);
        if end > start {
            for c in &mut row[start..end] {
                *c = RANGE_MARKER;
            }
        } else {
            row[start.min(track - 1)] = INSTANT_MARKER;
        }
    }

    row
}

/// Render the marker row with colors, trailing blanks trimmed.
pub fn render_marker_row(track: usize, markers: &[Span<'_, Marker>], palette: &Palette) -> String {
    let row: String = build_marker_chars(track, markers).into_iter().collect();
    let row = row.trim_end();

    let mut output = String::with_capacity(row.len() * 2);
    for c in row.chars() {
        if c == ' ' {
            output.push(c);
        } else {
            output.push_str(&palette.paint(palette.marker, &c.to_string()));
        }
    }
    output
}
