//! Time code formatting for tick labels and the playback timestamp.
//!
//! Patterns use brace-delimited tokens like `{mm}:{ss}.{S}`. The number of
//! repeated characters in a token is its zero-pad width (or digit count for
//! fractions), and text outside braces is copied as-is.

/// Default pattern for tick labels.
pub const DEFAULT_TICK_FORMAT: &str = "{mm}:{ss}";

/// Default pattern for the current-time readout.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "{mm}:{ss}.{S}";

/// Maximum number of fractional digits a `{S…}` token may request.
const MAX_FRACTION_DIGITS: usize = 9;

/// Errors that can occur while parsing a time code pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Time pattern cannot be empty")]
    Empty,

    #[error("Unclosed brace in time pattern")]
    UnclosedBrace,

    #[error("Unmatched closing brace in time pattern")]
    UnmatchedCloseBrace,

    #[error("Unknown time token: {{{0}}}")]
    UnknownToken(String),

    #[error("Too many fractional digits: {0} (max 9)")]
    TooManyDigits(usize),
}

/// Unit of a time token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Hours,
    Minutes,
    Seconds,
}

/// A segment of a parsed time pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text to include as-is.
    Literal(String),
    /// Whole hours/minutes/seconds, zero-padded to `width`.
    Field { unit: Unit, width: usize },
    /// Truncated fractional seconds with `digits` digits.
    Fraction { digits: usize },
}

/// A parsed time code pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    segments: Vec<Segment>,
    /// Highest-order unit in the pattern; it carries the overflow.
    top_unit: Option<Unit>,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::parse(DEFAULT_TICK_FORMAT).expect("Default tick format should be valid")
    }
}

impl TimeFormat {
    /// Parses a pattern string into segments.
    pub fn parse(pattern: &str) -> Result<Self, FormatError> {
        if pattern.is_empty() {
            return Err(FormatError::Empty);
        }

        let mut segments = Vec::new();
        let mut chars = pattern.chars();
        let mut literal = String::new();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }

                    let mut token = String::new();
                    let mut found_close = false;
                    for tc in chars.by_ref() {
                        if tc == '}' {
                            found_close = true;
                            break;
                        }
                        if tc == '{' {
                            return Err(FormatError::UnclosedBrace);
                        }
                        token.push(tc);
                    }
                    if !found_close {
                        return Err(FormatError::UnclosedBrace);
                    }

                    segments.push(parse_token(&token)?);
                }
                '}' => return Err(FormatError::UnmatchedCloseBrace),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let top_unit = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Field { unit, .. } => Some(*unit),
                _ => None,
            })
            .min();

        Ok(Self { segments, top_unit })
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Formats a time value in seconds.
    ///
    /// Negative and non-finite values are formatted as zero.
    pub fn format(&self, seconds: f64) -> String {
        let seconds = if seconds.is_finite() && seconds > 0.0 {
            seconds
        } else {
            0.0
        };
        let whole = seconds.trunc() as u64;

        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => result.push_str(s),
                Segment::Field { unit, width } => {
                    let value = self.field_value(*unit, whole);
                    result.push_str(&format!("{:0width$}", value, width = *width));
                }
                Segment::Fraction { digits } => {
                    let scale = 10u64.pow(*digits as u32);
                    // Nudge before truncating so 65.3 doesn't print as 65.2999…
                    let frac = ((seconds.fract() * scale as f64) + 1e-6).floor() as u64;
                    let frac = frac.min(scale - 1);
                    result.push_str(&format!("{:0width$}", frac, width = *digits));
                }
            }
        }
        result
    }

    fn field_value(&self, unit: Unit, whole: u64) -> u64 {
        let carries = self.top_unit == Some(unit);
        match unit {
            Unit::Hours => whole / 3600,
            Unit::Minutes if carries => whole / 60,
            Unit::Minutes => (whole / 60) % 60,
            Unit::Seconds if carries => whole,
            Unit::Seconds => whole % 60,
        }
    }
}

/// Parses a token (without braces) into a segment.
fn parse_token(token: &str) -> Result<Segment, FormatError> {
    let mut chars = token.chars();
    let first = chars
        .next()
        .ok_or_else(|| FormatError::UnknownToken(String::new()))?;
    if chars.any(|c| c != first) {
        return Err(FormatError::UnknownToken(token.to_string()));
    }
    let width = token.chars().count();

    let unit = match first {
        'h' => Unit::Hours,
        'm' => Unit::Minutes,
        's' => Unit::Seconds,
        'S' => {
            if width > MAX_FRACTION_DIGITS {
                return Err(FormatError::TooManyDigits(width));
            }
            return Ok(Segment::Fraction { digits: width });
        }
        _ => return Err(FormatError::UnknownToken(token.to_string())),
    };

    Ok(Segment::Field { unit, width })
}

/// Formats `seconds` with a pattern string.
///
/// Convenience wrapper around [`TimeFormat::parse`] and [`TimeFormat::format`].
pub fn format_time_code(seconds: f64, pattern: &str) -> Result<String, FormatError> {
    Ok(TimeFormat::parse(pattern)?.format(seconds))
}

/// Anything that can turn a time in seconds into a display label.
pub trait TimeFormatter {
    fn format_time(&self, seconds: f64) -> String;
}

impl TimeFormatter for TimeFormat {
    fn format_time(&self, seconds: f64) -> String {
        self.format(seconds)
    }
}

impl<F> TimeFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format_time(&self, seconds: f64) -> String {
        self(seconds)
    }
}
