//! Color palette for terminal rendering.
//!
//! The timeline never interprets style values itself; it asks the palette
//! for an escape sequence per element and writes it through.

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Escape sequences for each timeline element.
///
/// All fields are empty strings in the plain palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Played part of the track
    pub played: &'static str,
    /// Playhead glyph
    pub playhead: &'static str,
    /// Buffered but not yet played
    pub buffered: &'static str,
    /// Unbuffered track
    pub track: &'static str,
    /// Markers
    pub marker: &'static str,
    /// Tick labels and timestamp
    pub label: &'static str,
    /// Play/pause button
    pub button: &'static str,
    reset: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Palette {
    /// Standard ANSI colors.
    pub fn ansi() -> Self {
        Self {
            played: "\x1b[32m",   // Green
            playhead: "\x1b[97m", // White
            buffered: "\x1b[37m", // Gray
            track: "\x1b[90m",    // Dark gray
            marker: "\x1b[33m",   // Yellow
            label: "\x1b[37m",
            button: "\x1b[32m",
            reset: ANSI_RESET,
        }
    }

    /// No escape sequences at all.
    pub fn plain() -> Self {
        Self {
            played: "",
            playhead: "",
            buffered: "",
            track: "",
            marker: "",
            label: "",
            button: "",
            reset: "",
        }
    }

    /// ANSI unless `NO_COLOR` is set or color is disabled.
    pub fn for_output(color: bool) -> Self {
        if color && std::env::var_os("NO_COLOR").is_none() {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    pub fn is_plain(&self) -> bool {
        self.reset.is_empty()
    }

    /// Wrap text in a color and reset afterwards.
    pub fn paint(&self, color: &str, text: &str) -> String {
        if self.is_plain() || color.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", color, text, self.reset)
        }
    }

    pub fn reset(&self) -> &'static str {
        self.reset
    }
}
