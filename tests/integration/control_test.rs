//! Integration tests for the playback control through the public API

use std::cell::RefCell;
use std::rc::Rc;

use playctl::card::{CardProps, CardSection};
use playctl::control::Padding;
use playctl::{
    BufferRange, Callbacks, ControlOptions, Marker, Notification, PlaybackControl,
    RecordingCallbacks, TransportProps,
};

fn shared_log() -> (Rc<RefCell<Vec<String>>>, Callbacks) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (play, pause, seek) = (log.clone(), log.clone(), log.clone());
    let callbacks = Callbacks::new()
        .with_play(move || play.borrow_mut().push("play".to_string()))
        .with_pause(move || pause.borrow_mut().push("pause".to_string()))
        .with_seek(move |t| seek.borrow_mut().push(format!("seek {}", t)));
    (log, callbacks)
}

fn no_padding() -> ControlOptions {
    ControlOptions {
        padding: None,
        ..ControlOptions::default()
    }
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn closure_callbacks_see_a_full_session() {
    let (log, callbacks) = shared_log();
    {
        let props = TransportProps::new(0.0, 60.0).with_step(1.0);
        let mut control = PlaybackControl::new(props, no_padding(), callbacks).unwrap();
        control.resize(600.0);

        control.toggle();
        control.update(TransportProps::new(0.0, 60.0).with_step(1.0).playing(true));
        control.scrub_to_pixel(250.0);
        control.toggle();
    }

    assert_eq!(
        *log.borrow(),
        vec!["play", "seek 25", "pause", "pause"]
    );
}

#[test]
fn source_change_never_leaves_playback_running() {
    let mut rec = RecordingCallbacks::new();
    {
        let props = TransportProps::new(0.0, 60.0).at(42.0).playing(true);
        let mut control = PlaybackControl::new(props, no_padding(), &mut rec).unwrap();
        control.resize(600.0);
        control.update(TransportProps::new(100.0, 200.0).at(42.0).playing(true));
        control.teardown();
        control.play();
    }

    assert_eq!(
        rec.notifications,
        vec![
            Notification::Pause,
            Notification::Seek(100.0),
            Notification::Pause
        ]
    );
}

#[test]
fn playhead_tracks_props_and_resizes() {
    let props = TransportProps::new(0.0, 100.0).at(25.0);
    let mut control = PlaybackControl::new(props, ControlOptions::default(), ()).unwrap();

    control.resize(448.0);
    assert_eq!(control.frame().playhead, 100.0);

    control.resize(848.0);
    assert_eq!(control.frame().playhead, 200.0);

    control.update(TransportProps::new(0.0, 100.0).at(150.0));
    assert_eq!(control.frame().playhead, 800.0);
}

#[test]
fn frame_serializes_for_external_renderers() {
    let options = ControlOptions {
        padding: Some(Padding::Uniform(10.0)),
        markers: vec![Marker::span(10.0, 20.0, "intro")],
        buffer_range: vec![BufferRange::new(0.0, 30.0), BufferRange::new(40.0, 50.0)].into(),
        ..ControlOptions::default()
    };
    let mut control =
        PlaybackControl::new(TransportProps::new(0.0, 60.0).at(6.0), options, ()).unwrap();
    control.resize(620.0);

    let value = serde_json::to_value(control.frame()).unwrap();
    assert_eq!(value["layout"], "normal");
    assert_eq!(value["button"], "play");
    assert_eq!(value["timestamp"], "00:06.0");
    assert_eq!(value["insets"]["left"], 10.0);
    assert_eq!(value["markers"][0]["item"]["content"], "intro");
    assert_eq!(value["buffers"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["ticks"][0]["label"], "00:00");
}

// ============================================================================
// Data card
// ============================================================================

#[test]
fn card_routes_sections_in_order() {
    let props = CardProps {
        title: "Speed".to_string(),
        description: "m/s".to_string(),
        missing_data: vec!["/speed".to_string()],
        ..CardProps::default()
    };
    let kinds: Vec<&str> = props
        .sections()
        .iter()
        .map(|s| match s {
            CardSection::Title { .. } => "title",
            CardSection::MissingData { .. } => "missing",
            CardSection::Content => "content",
            CardSection::Spinner => "spinner",
            CardSection::Error { .. } => "error",
        })
        .collect();
    assert_eq!(kinds, vec!["title", "missing", "content"]);
}
