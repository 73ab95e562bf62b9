//! Playback control: options, callback dispatch and per-frame snapshots.
//!
//! [`PlaybackControl`] wires a [`Transport`] to caller callbacks and to the
//! display options. Everything a renderer needs is produced by
//! [`PlaybackControl::frame`], which recomputes scale, ticks and spans on
//! every call.

use serde::{Deserialize, Serialize};

use crate::projection::{project, project_one_or_many, BufferRange, Marker, OneOrMany, Span};
use crate::scale::LinearScale;
use crate::ticks::{generate_ticks, Tick, DEFAULT_TICK_SPACING};
use crate::timecode::{
    FormatError, TimeFormat, TimeFormatter, DEFAULT_TICK_FORMAT, DEFAULT_TIMESTAMP_FORMAT,
};
use crate::transport::{
    Insets, Notification, Transport, TransportCallbacks, TransportProps, DEFAULT_STEP,
};

/// Default horizontal padding around the track, in pixels.
pub const DEFAULT_PADDING: f64 = 24.0;

/// Rendering variant. Has no effect on timing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Button, track and timestamp on one row.
    Compact,
    /// Track on top, controls below.
    #[default]
    Normal,
}

/// Padding as a single number or per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Sides {
        #[serde(default)]
        left: Option<f64>,
        #[serde(default)]
        right: Option<f64>,
    },
}

impl Padding {
    /// Resolve to concrete insets; missing sides are zero.
    pub fn insets(&self) -> Insets {
        match *self {
            Self::Uniform(value) => Insets::uniform(value),
            Self::Sides { left, right } => Insets::new(left.unwrap_or(0.0), right.unwrap_or(0.0)),
        }
    }
}

/// Resolve optional padding; `None` means no padding at all.
pub fn normalize_padding(padding: Option<&Padding>) -> Insets {
    padding.map(Padding::insets).unwrap_or_default()
}

/// Display options for a playback control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlOptions {
    pub layout: Layout,
    /// Seek granularity for props built with [`ControlOptions::props`].
    ///
    /// The control itself snaps with `TransportProps::step`, which the
    /// caller owns.
    pub step: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    /// Minimum pixel spacing between ticks.
    pub tick_spacing: f64,
    pub buffer_range: OneOrMany<BufferRange>,
    pub markers: Vec<Marker>,
    pub tick_format: String,
    pub timestamp_format: String,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Normal,
            step: DEFAULT_STEP,
            padding: Some(Padding::Uniform(DEFAULT_PADDING)),
            tick_spacing: DEFAULT_TICK_SPACING,
            buffer_range: OneOrMany::default(),
            markers: Vec::new(),
            tick_format: DEFAULT_TICK_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl ControlOptions {
    pub fn insets(&self) -> Insets {
        normalize_padding(self.padding.as_ref())
    }

    /// Paused props over `[start, end]` carrying the configured step.
    pub fn props(&self, start: f64, end: f64) -> TransportProps {
        TransportProps::new(start, end).with_step(self.step)
    }

    /// Check both format patterns.
    pub fn validate(&self) -> Result<(), FormatError> {
        TimeFormat::parse(&self.tick_format)?;
        TimeFormat::parse(&self.timestamp_format)?;
        Ok(())
    }
}

/// Which icon the play/pause button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Play,
    Pause,
}

/// Everything needed to draw one frame of the control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineFrame<'a> {
    pub layout: Layout,
    pub insets: Insets,
    #[serde(skip)]
    pub scale: LinearScale,
    pub ticks: Vec<Tick>,
    pub markers: Vec<Span<'a, Marker>>,
    pub buffers: Vec<Span<'a, BufferRange>>,
    /// Playhead pixel offset, clamped to the track.
    pub playhead: f64,
    pub timestamp: String,
    pub button: Button,
}

impl TimelineFrame<'_> {
    /// Track length in pixels (0 until measured).
    pub fn track_length(&self) -> f64 {
        self.scale.range().length
    }
}

/// A playback control bound to caller callbacks.
///
/// Dropping the control tears it down, which sends exactly one pause.
pub struct PlaybackControl<C: TransportCallbacks> {
    transport: Transport,
    options: ControlOptions,
    tick_formatter: Box<dyn TimeFormatter>,
    timestamp_formatter: Box<dyn TimeFormatter>,
    callbacks: C,
}

impl<C: TransportCallbacks> PlaybackControl<C> {
    /// Build a control, parsing the format patterns from `options`.
    pub fn new(
        props: TransportProps,
        options: ControlOptions,
        callbacks: C,
    ) -> Result<Self, FormatError> {
        let tick_formatter = TimeFormat::parse(&options.tick_format)?;
        let timestamp_formatter = TimeFormat::parse(&options.timestamp_format)?;
        Ok(Self {
            transport: Transport::new(props, options.insets()),
            options,
            tick_formatter: Box::new(tick_formatter),
            timestamp_formatter: Box::new(timestamp_formatter),
            callbacks,
        })
    }

    /// Replace the tick label formatter.
    pub fn set_tick_formatter(&mut self, formatter: impl TimeFormatter + 'static) {
        self.tick_formatter = Box::new(formatter);
    }

    /// Replace the timestamp formatter.
    pub fn set_timestamp_formatter(&mut self, formatter: impl TimeFormatter + 'static) {
        self.timestamp_formatter = Box::new(formatter);
    }

    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    pub fn props(&self) -> &TransportProps {
        self.transport.props()
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn scale(&self) -> LinearScale {
        self.transport.scale()
    }

    pub fn play(&mut self) {
        let out = self.transport.play();
        self.dispatch(out);
    }

    pub fn pause(&mut self) {
        let out = self.transport.pause();
        self.dispatch(out);
    }

    pub fn toggle(&mut self) {
        let out = self.transport.toggle();
        self.dispatch(out);
    }

    pub fn seek(&mut self, time: f64) {
        let out = self.transport.seek(time);
        self.dispatch(out);
    }

    /// Slider drag at `x` pixels from the track start.
    pub fn scrub_to_pixel(&mut self, x: f64) {
        let out = self.transport.scrub_to_pixel(x);
        self.dispatch(out);
    }

    /// New props from the caller.
    pub fn update(&mut self, props: TransportProps) {
        let out = self.transport.update(props);
        self.dispatch(out);
    }

    /// Container measured at `width` pixels (padding included).
    pub fn resize(&mut self, width: f64) {
        self.transport.resize(width);
    }

    /// Stop for good; later calls and the eventual drop are silent.
    pub fn teardown(&mut self) {
        let out = self.transport.teardown();
        self.dispatch(out);
    }

    /// Compute a fresh frame from the current props, range and options.
    pub fn frame(&self) -> TimelineFrame<'_> {
        let scale = self.transport.scale();
        let props = self.transport.props();

        TimelineFrame {
            layout: self.options.layout,
            insets: self.transport.insets(),
            scale,
            ticks: generate_ticks(&scale, self.options.tick_spacing, self.tick_formatter.as_ref()),
            markers: project(&self.options.markers, &scale),
            buffers: project_one_or_many(&self.options.buffer_range, &scale),
            playhead: scale.map_clamped(props.current_time),
            timestamp: self.timestamp_formatter.format_time(props.current_time),
            button: if props.is_playing {
                Button::Pause
            } else {
                Button::Play
            },
        }
    }

    fn dispatch(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            self.callbacks.dispatch(notification);
        }
    }
}

impl<C: TransportCallbacks> Drop for PlaybackControl<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<C: TransportCallbacks + std::fmt::Debug> std::fmt::Debug for PlaybackControl<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackControl")
            .field("transport", &self.transport)
            .field("options", &self.options)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
