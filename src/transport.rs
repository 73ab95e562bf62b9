//! Transport coordination: play, pause and seek.
//!
//! The caller owns the authoritative `current_time` and `is_playing`
//! values. [`Transport`] only remembers the props it was last handed and
//! turns user intents and prop changes into [`Notification`]s for the
//! caller to act on. It never advances time itself.
//!
//! Invariants:
//! - A source change (new `step`, `start_time` or `end_time`) always emits
//!   `Pause` then `Seek(start_time)`, and only then switches the scale to
//!   the new domain.
//! - `teardown` emits exactly one `Pause`; nothing is emitted afterwards.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::scale::{LinearScale, PixelRange, TimeDomain};

/// Default seek granularity in seconds.
pub const DEFAULT_STEP: f64 = 0.1;

/// An intent for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "time", rename_all = "lowercase")]
pub enum Notification {
    Play,
    Pause,
    Seek(f64),
}

/// Playback props supplied by the caller on construction and every update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportProps {
    pub current_time: f64,
    pub is_playing: bool,
    #[serde(default)]
    pub start_time: f64,
    pub end_time: f64,
    /// Minimum seek granularity (advisory).
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

impl TransportProps {
    /// Paused at the start of `[start_time, end_time]`.
    pub fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            current_time: start_time,
            is_playing: false,
            start_time,
            end_time,
            step: DEFAULT_STEP,
        }
    }

    pub fn at(self, current_time: f64) -> Self {
        Self {
            current_time,
            ..self
        }
    }

    pub fn playing(self, is_playing: bool) -> Self {
        Self { is_playing, ..self }
    }

    pub fn with_step(self, step: f64) -> Self {
        Self { step, ..self }
    }

    pub fn domain(&self) -> TimeDomain {
        TimeDomain::new(self.start_time, self.end_time)
    }

    /// True when `next` describes a different media source.
    fn source_differs(&self, next: &TransportProps) -> bool {
        self.step != next.step || self.start_time != next.start_time || self.end_time != next.end_time
    }
}

/// What a props update means for the transport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Same source; only playback values may have changed.
    Steady,
    /// A new source was loaded.
    DomainChange { from: TimeDomain, to: TimeDomain },
}

impl Transition {
    /// Classify the move from `prev` to `next` props.
    pub fn between(prev: &TransportProps, next: &TransportProps) -> Self {
        if prev.source_differs(next) {
            Self::DomainChange {
                from: prev.domain(),
                to: next.domain(),
            }
        } else {
            Self::Steady
        }
    }

    /// Notifications this transition must emit, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        match self {
            Self::Steady => Vec::new(),
            // Pause first so a playback loop keyed to the old domain stops
            // before the position is re-anchored.
            Self::DomainChange { to, .. } => vec![Notification::Pause, Notification::Seek(to.start)],
        }
    }
}

/// Left/right padding subtracted from the measured container width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
}

impl Insets {
    pub fn new(left: f64, right: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            left: sanitize(left),
            right: sanitize(right),
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

/// Pure transport state machine.
///
/// Every operation returns the notifications it produced instead of
/// calling out, which keeps ordering checkable in tests.
#[derive(Debug, Clone)]
pub struct Transport {
    props: TransportProps,
    range: PixelRange,
    insets: Insets,
    torn_down: bool,
}

impl Transport {
    pub fn new(props: TransportProps, insets: Insets) -> Self {
        Self {
            props,
            range: PixelRange::default(),
            insets,
            torn_down: false,
        }
    }

    /// Props as last supplied by the caller.
    pub fn props(&self) -> &TransportProps {
        &self.props
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The current time scale, derived fresh from props and range.
    pub fn scale(&self) -> LinearScale {
        LinearScale::new(self.props.domain(), self.range)
    }

    /// Request playback. No-op if the caller already reports playing.
    pub fn play(&mut self) -> Vec<Notification> {
        if self.ignored("play") || self.props.is_playing {
            return Vec::new();
        }
        vec![Notification::Play]
    }

    /// Request a stop.
    pub fn pause(&mut self) -> Vec<Notification> {
        if self.ignored("pause") {
            return Vec::new();
        }
        vec![Notification::Pause]
    }

    /// Play/pause button press.
    pub fn toggle(&mut self) -> Vec<Notification> {
        if self.props.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Request a new position. No-op if it equals the current time.
    pub fn seek(&mut self, time: f64) -> Vec<Notification> {
        if self.ignored("seek") || !time.is_finite() || time == self.props.current_time {
            return Vec::new();
        }
        vec![Notification::Seek(time)]
    }

    /// Seek to the time under a pixel offset on the track.
    ///
    /// The time is clamped to the domain and snapped to `step` increments
    /// from the domain start, like a slider with `min`, `max` and `step`.
    pub fn scrub_to_pixel(&mut self, x: f64) -> Vec<Notification> {
        let domain = self.props.domain();
        let time = domain.clamp(self.scale().invert(x));
        let time = snap(time, domain, self.props.step);
        self.seek(time)
    }

    /// Accept new props from the caller.
    pub fn update(&mut self, next: TransportProps) -> Vec<Notification> {
        if self.ignored("update") {
            return Vec::new();
        }

        let transition = Transition::between(&self.props, &next);
        let notifications = transition.notifications();
        if let Transition::DomainChange { from, to } = transition {
            debug!(
                from_start = from.start,
                from_end = from.end,
                to_start = to.start,
                to_end = to.end,
                "source changed, pausing and re-anchoring"
            );
        }
        // The scale is derived from props, so storing them is the rescale.
        self.props = next;
        notifications
    }

    /// Handle a container measurement.
    ///
    /// The track length is the width minus padding, never negative.
    pub fn resize(&mut self, width: f64) {
        let width = if width.is_finite() { width } else { 0.0 };
        self.range = PixelRange::new(width - self.insets.horizontal());
        trace!(width, length = self.range.length, "timeline resized");
    }

    /// Stop playback for good. Emits `Pause` exactly once.
    pub fn teardown(&mut self) -> Vec<Notification> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        debug!(was_playing = self.props.is_playing, "transport torn down");
        vec![Notification::Pause]
    }

    fn ignored(&self, op: &str) -> bool {
        if self.torn_down {
            trace!(op, "ignoring operation after teardown");
        }
        self.torn_down
    }
}

/// Snap `time` to the nearest `step` boundary counted from the domain start.
fn snap(time: f64, domain: TimeDomain, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) || domain.is_degenerate() {
        return time;
    }
    let steps = ((time - domain.start) / step).round();
    domain.clamp(domain.start + steps * step)
}

/// Receiver of transport notifications.
///
/// Every method defaults to a no-op, so callers implement only what they
/// care about.
pub trait TransportCallbacks {
    fn on_play(&mut self) {}
    fn on_pause(&mut self) {}
    fn on_seek(&mut self, _time: f64) {}

    /// Deliver a notification to the matching callback.
    fn dispatch(&mut self, notification: Notification) {
        match notification {
            Notification::Play => self.on_play(),
            Notification::Pause => self.on_pause(),
            Notification::Seek(time) => self.on_seek(time),
        }
    }
}

impl<T: TransportCallbacks + ?Sized> TransportCallbacks for &mut T {
    fn on_play(&mut self) {
        (**self).on_play()
    }

    fn on_pause(&mut self) {
        (**self).on_pause()
    }

    fn on_seek(&mut self, time: f64) {
        (**self).on_seek(time)
    }
}

/// No callbacks at all.
impl TransportCallbacks for () {}

/// Callbacks that record every notification in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCallbacks {
    pub notifications: Vec<Notification>,
}

impl RecordingCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded notifications, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl TransportCallbacks for RecordingCallbacks {
    fn on_play(&mut self) {
        self.notifications.push(Notification::Play);
    }

    fn on_pause(&mut self) {
        self.notifications.push(Notification::Pause);
    }

    fn on_seek(&mut self, time: f64) {
        self.notifications.push(Notification::Seek(time));
    }
}

type Hook = Box<dyn FnMut()>;
type SeekHook = Box<dyn FnMut(f64)>;

/// Closure-based callbacks; unset hooks are no-ops.
#[derive(Default)]
pub struct Callbacks {
    on_play: Option<Hook>,
    on_pause: Option<Hook>,
    on_seek: Option<SeekHook>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_play(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_play = Some(Box::new(f));
        self
    }

    pub fn with_pause(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_pause = Some(Box::new(f));
        self
    }

    pub fn with_seek(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_seek = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_play", &self.on_play.is_some())
            .field("on_pause", &self.on_pause.is_some())
            .field("on_seek", &self.on_seek.is_some())
            .finish()
    }
}

impl TransportCallbacks for Callbacks {
    fn on_play(&mut self) {
        if let Some(f) = self.on_play.as_mut() {
            f();
        }
    }

    fn on_pause(&mut self) {
        if let Some(f) = self.on_pause.as_mut() {
            f();
        }
    }

    fn on_seek(&mut self, time: f64) {
        if let Some(f) = self.on_seek.as_mut() {
            f(time);
        }
    }
}
