//! Linear time scale.
//!
//! Maps a `[start, end]` time domain (seconds) onto a `[0, length]` pixel
//! range. The scale is a plain `Copy` value: changing the domain or range
//! produces a new scale, so a stale slope can never leak across an update.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from parsing `START:END` style range strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseRangeError {
    #[error("invalid number '{0}'")]
    Number(String),

    #[error("expected START:END, got '{0}'")]
    Shape(String),

    #[error("end {end} is before start {start}")]
    Reversed { start: f64, end: f64 },
}

/// Parse one bound of a range string.
pub(crate) fn parse_seconds(text: &str) -> Result<f64, ParseRangeError> {
    let text = text.trim();
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseRangeError::Number(text.to_string()))
}

/// The full seekable time interval of the media, in seconds.
///
/// Callers guarantee `start <= end`; it is not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    pub start: f64,
    pub end: f64,
}

impl TimeDomain {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the domain in seconds.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// True when the domain is a single point (or unusable).
    pub fn is_degenerate(&self) -> bool {
        !(self.span().is_finite() && self.span() > 0.0)
    }

    /// Clamp a time into the domain.
    pub fn clamp(&self, time: f64) -> f64 {
        if self.is_degenerate() {
            return self.start;
        }
        time.clamp(self.start, self.end)
    }
}

impl FromStr for TimeDomain {
    type Err = ParseRangeError;

    /// Parse `START:END`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| ParseRangeError::Shape(s.to_string()))?;
        let (start, end) = (parse_seconds(start)?, parse_seconds(end)?);
        if end < start {
            return Err(ParseRangeError::Reversed { start, end });
        }
        Ok(Self::new(start, end))
    }
}

/// Measured pixel length of the timeline track.
///
/// Zero until the container has been measured.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRange {
    pub length: f64,
}

impl PixelRange {
    /// Create a range, normalizing negative and non-finite lengths to zero.
    pub fn new(length: f64) -> Self {
        let length = if length.is_finite() && length > 0.0 {
            length
        } else {
            0.0
        };
        Self { length }
    }

    pub fn is_empty(&self) -> bool {
        self.length <= 0.0
    }
}

/// Invertible linear mapping between a time domain and a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: TimeDomain,
    range: PixelRange,
}

impl LinearScale {
    pub fn new(domain: TimeDomain, range: PixelRange) -> Self {
        Self { domain, range }
    }

    /// A scale over `domain` that has not been measured yet.
    pub fn unmeasured(domain: TimeDomain) -> Self {
        Self::new(domain, PixelRange::default())
    }

    pub fn domain(&self) -> TimeDomain {
        self.domain
    }

    pub fn range(&self) -> PixelRange {
        self.range
    }

    /// Same domain, new pixel range.
    pub fn with_range(self, range: PixelRange) -> Self {
        Self { range, ..self }
    }

    /// Same pixel range, new domain.
    pub fn with_domain(self, domain: TimeDomain) -> Self {
        Self { domain, ..self }
    }

    /// True when every time maps to pixel 0.
    pub fn is_degenerate(&self) -> bool {
        self.range.is_empty() || self.domain.is_degenerate()
    }

    /// Map a time to a pixel offset.
    ///
    /// Times outside the domain extrapolate linearly. Degenerate scales map
    /// everything to 0.
    pub fn map(&self, time: f64) -> f64 {
        self.map_offset(time - self.domain.start)
    }

    /// Map seconds elapsed since the domain start to a pixel offset.
    ///
    /// Prefer this over [`LinearScale::map`] when the offset is already
    /// known: large absolute times (epoch seconds) lose precision in the
    /// subtraction.
    pub fn map_offset(&self, offset: f64) -> f64 {
        if self.is_degenerate() || !offset.is_finite() {
            return 0.0;
        }
        offset / self.domain.span() * self.range.length
    }

    /// Map a time to a pixel offset, clamped to `[0, length]`.
    pub fn map_clamped(&self, time: f64) -> f64 {
        self.map(time).clamp(0.0, self.range.length)
    }

    /// Map a pixel offset back to a time.
    ///
    /// Degenerate scales return the domain start.
    pub fn invert(&self, pixel: f64) -> f64 {
        if self.is_degenerate() || !pixel.is_finite() {
            return self.domain.start;
        }
        self.domain.start + pixel / self.range.length * self.domain.span()
    }
}
