//! Integration tests for the playctl CLI

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{run_playctl, run_playctl_with_config, temp_config};

/// Padding and spacing that give one column per second on a 35 column
/// terminal with a 30 second domain.
const NARROW_CONFIG: &str = r#"
[control]
padding = { left = 0, right = 5 }
tick_spacing = 10
"#;

// ============================================================================
// Format
// ============================================================================

#[test]
fn format_uses_tick_format_by_default() {
    let (stdout, _stderr, exit_code) = run_playctl(&["format", "65"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "01:05\n");
}

#[test]
fn format_with_fraction_pattern() {
    let (stdout, _stderr, exit_code) = run_playctl(&["format", "65.37", "--pattern", "{mm}:{ss}.{S}"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "01:05.3");
}

#[test]
fn format_hours_carry() {
    let (stdout, _stderr, _) = run_playctl(&["format", "3725", "-p", "{h}h{mm}m"]);
    assert_eq!(stdout.trim(), "1h02m");
}

#[test]
fn format_rejects_bad_pattern() {
    let (_stdout, stderr, exit_code) = run_playctl(&["format", "5", "--pattern", "{mm"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid pattern"));
}

#[test]
fn format_honours_configured_pattern() {
    let (stdout, _stderr, _) =
        run_playctl_with_config("[control]\ntick_format = \"{s}s\"\n", &["format", "125"]);
    assert_eq!(stdout.trim(), "125s");
}

// ============================================================================
// Ticks
// ============================================================================

#[test]
fn ticks_json_lists_thirty_second_steps() {
    let (stdout, _stderr, exit_code) =
        run_playctl(&["ticks", "--end", "125", "--width", "500", "--json"]);
    assert_eq!(exit_code, 0);

    let ticks: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    let times: Vec<f64> = ticks.iter().map(|t| t["time"].as_f64().unwrap()).collect();
    assert_eq!(times, vec![0.0, 30.0, 60.0, 90.0, 120.0]);
    assert_eq!(ticks[4]["label"], "02:00");
    assert_eq!(ticks[1]["position"].as_f64(), Some(120.0));
}

#[test]
fn ticks_text_output_has_one_line_per_tick() {
    let (stdout, _stderr, exit_code) =
        run_playctl(&["ticks", "--end", "60", "--width", "600", "--spacing", "200"]);
    assert_eq!(exit_code, 0);
    // 600 / 200 = 3 ticks wanted, 20s rounds up to a 30s step
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().last().unwrap().ends_with("01:00"));
}

#[test]
fn ticks_on_unmeasured_track_are_empty() {
    let (stdout, _stderr, exit_code) =
        run_playctl(&["ticks", "--end", "60", "--width", "0", "--json"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "[]");
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn render_draws_markers_buffer_and_playhead() {
    let (stdout, stderr, exit_code) = run_playctl_with_config(
        NARROW_CONFIG,
        &[
            "render", "--end", "30", "--time", "12", "--width", "35", "--marker", "0:5:intro",
            "--marker", "20", "--buffer", "0:18",
        ],
    );
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    00:00     00:10     00:20     00:30
    ▬▬▬▬▬               ◆
    ━━━━━━━━━━━━⏺═════────────────
    ▶ 00:12.0
    ");
}

#[test]
fn render_playing_shows_pause_button() {
    let (stdout, _stderr, exit_code) = run_playctl_with_config(
        NARROW_CONFIG,
        &["render", "--end", "30", "--time", "3", "--width", "35", "--playing"],
    );
    assert_eq!(exit_code, 0);
    assert!(stdout.lines().last().unwrap().starts_with("⏸ 00:03.0"));
}

#[test]
fn render_rejects_malformed_marker() {
    let (_stdout, stderr, exit_code) =
        run_playctl(&["render", "--end", "30", "--marker", "soon"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid number"));
}

#[test]
fn render_without_color_has_no_escapes() {
    let (stdout, _stderr, _) = run_playctl(&["render", "--end", "30", "--width", "80"]);
    assert!(!stdout.contains('\x1b'));
}

// ============================================================================
// Simulate
// ============================================================================

#[test]
fn simulate_domain_change_pauses_then_seeks() {
    let (stdout, _stderr, exit_code) = run_playctl(&[
        "simulate", "--from", "0:60", "--to", "0:120", "--time", "30", "--playing",
    ]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "pause\nseek 0\n");
}

#[test]
fn simulate_unchanged_domain_is_quiet() {
    let (stdout, _stderr, _) = run_playctl(&["simulate", "--from", "0:60", "--to", "0:60"]);
    assert_eq!(stdout.trim(), "(no notifications)");
}

#[test]
fn simulate_json_tags_notifications() {
    let (stdout, _stderr, _) = run_playctl(&[
        "simulate", "--from", "0:60", "--to", "10:70", "--teardown", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "type": "pause" },
            { "type": "seek", "time": 10.0 },
            { "type": "pause" }
        ])
    );
}

// ============================================================================
// Config, completions, logging
// ============================================================================

#[test]
fn config_show_prints_effective_toml() {
    let (_dir, path) = temp_config("[control]\nlayout = \"compact\"\n");
    Command::cargo_bin("playctl")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[control]"))
        .stdout(predicate::str::contains("layout = \"compact\""))
        .stdout(predicate::str::contains("[display]"));
}

#[test]
fn config_path_echoes_override() {
    let (_dir, path) = temp_config("");
    Command::cargo_bin("playctl")
        .unwrap()
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn invalid_config_fails_with_path() {
    let (_dir, path) = temp_config("[control\n");
    Command::cargo_bin("playctl")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .args(["format", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("playctl")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("playctl"));
}

#[test]
fn verbose_simulate_logs_domain_change() {
    let (stdout, stderr, exit_code) = run_playctl(&[
        "-vv", "simulate", "--from", "0:60", "--to", "0:90",
    ]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("pause"));
    assert!(stderr.contains("source changed"));
}
