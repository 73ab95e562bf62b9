//! Projection of time-ranged annotations onto pixel spans.
//!
//! Markers and buffered regions are input data; projecting them through a
//! [`LinearScale`] yields `{left, width}` spans in input order so renderers
//! can key them by index.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scale::{parse_seconds, LinearScale, ParseRangeError};

/// Anything with a start time and an optional end time.
///
/// A missing end means an instantaneous annotation.
pub trait TimeRanged {
    fn start(&self) -> f64;
    fn end(&self) -> Option<f64>;
}

/// A labeled annotation on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(alias = "time")]
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(default)]
    pub content: String,
    /// Opaque style hint passed through to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Marker {
    /// An instantaneous marker.
    pub fn at(time: f64, content: impl Into<String>) -> Self {
        Self {
            start: time,
            end: None,
            content: content.into(),
            style: None,
        }
    }

    /// A marker spanning `[start, end]`.
    pub fn span(start: f64, end: f64, content: impl Into<String>) -> Self {
        Self {
            start,
            end: Some(end),
            content: content.into(),
            style: None,
        }
    }
}

impl FromStr for Marker {
    type Err = ParseRangeError;

    /// Parse `START`, `START:END` or `START:END:LABEL`; an empty END makes
    /// a labeled instant (`12::cut`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let start = parse_seconds(parts.next().unwrap_or_default())?;
        let end = match parts.next().map(str::trim) {
            None | Some("") => None,
            Some(end) => Some(parse_seconds(end)?),
        };
        if let Some(end) = end.filter(|&end| end < start) {
            return Err(ParseRangeError::Reversed { start, end });
        }
        Ok(Self {
            start,
            end,
            content: parts.next().unwrap_or_default().to_string(),
            style: None,
        })
    }
}

impl TimeRanged for Marker {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> Option<f64> {
        self.end
    }
}

/// A region of media that has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferRange {
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
}

impl BufferRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

impl FromStr for BufferRange {
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

impl TimeRanged for BufferRange {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> Option<f64> {
        self.end
    }
}

/// Either a lone value or a sequence of values.
///
/// Configuration may supply `buffer_range = { start = 0, end = 10 }` or a
/// list of ranges; both normalize to a slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    /// View as a slice; a lone value becomes a one-element slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        Self::One(item)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

/// A projected annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span<'a, R> {
    /// Pixel offset of the start.
    pub left: f64,
    /// Pixel width; zero for instantaneous annotations.
    pub width: f64,
    /// The annotation this span was projected from.
    pub item: &'a R,
}

/// Project a single annotation.
pub fn project_one<'a, R: TimeRanged>(item: &'a R, scale: &LinearScale) -> Span<'a, R> {
    let start = item.start();
    let end = item.end().unwrap_or(start);
    let left = scale.map(start);
    Span {
        left,
        width: scale.map(end) - left,
        item,
    }
}

/// Project annotations onto pixel spans, preserving input order.
pub fn project<'a, R: TimeRanged>(ranges: &'a [R], scale: &LinearScale) -> Vec<Span<'a, R>> {
    ranges.iter().map(|r| project_one(r, scale)).collect()
}

/// Project a lone annotation or a sequence of them.
pub fn project_one_or_many<'a, R: TimeRanged>(
    ranges: &'a OneOrMany<R>,
    scale: &LinearScale,
) -> Vec<Span<'a, R>> {
    project(ranges.as_slice(), scale)
}
