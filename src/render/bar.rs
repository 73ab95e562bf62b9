//! Scrubber track rendering.
//!
//! Draws the played portion, the playhead and buffered regions, one
//! character per pixel column.

use crate::projection::{BufferRange, Span};
use crate::render::palette::Palette;

const PLAYED: char = '━';
const PLAYHEAD: char = '⏺';
const BUFFERED: char = '═';
const TRACK: char = '─';

/// Column range `[start, end)` covered by a span, clipped to `width`.
pub(crate) fn span_columns(left: f64, width: f64, track: usize) -> (usize, usize) {
    let start = (left.round().max(0.0) as usize).min(track);
    let end = ((left + width).round().max(0.0) as usize).min(track);
    (start, end.max(start))
}

/// Build the track character array.
///
/// # Arguments
/// * `track` - Track length in columns
/// * `playhead` - Playhead offset in columns (already clamped to the track)
/// * `buffers` - Projected buffer spans
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where filled_count is the number of
/// played columns. The playhead sits at `filled_count` unless the track is
/// fully played.
pub fn build_bar_chars(
    track: usize,
    playhead: f64,
    buffers: &[Span<'_, BufferRange>],
) -> (Vec<char>, usize) {
    let filled = (playhead.max(0.0).floor() as usize).min(track);
    let mut bar = vec![TRACK; track];

    for span in buffers {
        let (start, end) = span_columns(span.left, span.width, track);
        for c in &mut bar[start..end] {
            *c = BUFFERED;
        }
    }

    for c in bar.iter_mut().take(filled) {
        *c = PLAYED;
    }

    if filled < track {
        bar[filled] = PLAYHEAD;
    }

    (bar, filled)
}

/// Render the track with colors.
pub fn render_bar(
    track: usize,
    playhead: f64,
    buffers: &[Span<'_, BufferRange>],
    palette: &Palette,
) -> String {
    let (bar, filled) = build_bar_chars(track, playhead, buffers);

    let mut output = String::with_capacity(track * 4);
    let mut current = "";
    for (i, &c) in bar.iter().enumerate() {
        let color = if i < filled {
            palette.played
        } else if i == filled {
            palette.playhead
        } else if c == BUFFERED {
            palette.buffered
        } else {
            palette.track
        };
        if color != current {
            output.push_str(color);
            current = color;
        }
        output.push(c);
    }
    if !current.is_empty() {
        output.push_str(palette.reset());
    }
    output
}
