//! playctl - playback timeline and transport control
//!
//! Maps a media time domain onto a measured pixel track, picks readable
//! tick steps, projects markers and buffered ranges onto the track, and
//! coordinates play/pause/seek with caller callbacks so that no stale
//! playback survives a source change or teardown.

pub mod card;
pub mod cli;
pub mod config;
pub mod control;
pub mod projection;
pub mod render;
pub mod scale;
pub mod ticks;
pub mod timecode;
pub mod transport;

pub use card::{CardProps, CardSection};
pub use config::{Config, ConfigError};
pub use control::{Button, ControlOptions, Layout, Padding, PlaybackControl, TimelineFrame};
pub use projection::{BufferRange, Marker, OneOrMany, Span};
pub use scale::{LinearScale, PixelRange, TimeDomain};
pub use ticks::{generate_ticks, Tick};
pub use timecode::{format_time_code, FormatError, TimeFormat, TimeFormatter};
pub use transport::{
    Callbacks, Insets, Notification, RecordingCallbacks, Transport, TransportCallbacks,
    TransportProps,
};
