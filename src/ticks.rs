//! Time-axis tick generation.
//!
//! Picks a "nice" step so that consecutive ticks land at least
//! `min_spacing` pixels apart once mapped through the scale.

use serde::Serialize;

use crate::scale::LinearScale;
use crate::timecode::TimeFormatter;

/// Default minimum pixel spacing between ticks.
pub const DEFAULT_TICK_SPACING: f64 = 100.0;

/// Human-friendly steps (seconds) between one second and one hour.
const NICE_STEPS: &[f64] = &[
    1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1800.0, 3600.0,
];

/// Mantissas used below one second and above one hour.
const DECIMAL_MANTISSAS: &[f64] = &[1.0, 2.0, 5.0];

/// A labeled mark on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Time value in seconds.
    pub time: f64,
    /// Pixel offset from the start of the track.
    pub position: f64,
    /// Formatted label.
    pub label: String,
}

/// Round a raw step up to the nearest nice step.
///
/// Sub-second steps use 1/2/5 decimal multiples (0.1, 0.2, 0.5, …), whole
/// steps use the table up to one hour, and anything longer uses 1/2/5
/// multiples of an hour.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return NICE_STEPS[0];
    }

    if raw <= 1.0 {
        return decimal_step(raw, 1.0);
    }

    if let Some(step) = NICE_STEPS.iter().copied().find(|&s| s >= raw) {
        return step;
    }

    decimal_step(raw / 3600.0, 3600.0)
}

/// Smallest `m * 10^k * unit` (m in 1/2/5) that is >= `raw * unit`.
fn decimal_step(raw: f64, unit: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    // Subnormal steps underflow the power of ten; keep the raw step.
    if !magnitude.is_normal() {
        return raw * unit;
    }
    for &m in DECIMAL_MANTISSAS {
        let candidate = m * magnitude;
        if candidate >= raw * (1.0 - 1e-12) {
            return candidate * unit;
        }
    }
    10.0 * magnitude * unit
}

/// Generate ticks covering the scale's domain.
///
/// - A single-point domain yields one tick at that point.
/// - An unmeasured (zero-length) range yields no ticks until a width arrives.
/// - When the track is narrower than `min_spacing`, or no step boundary falls
///   inside the domain, a single tick at the domain start is returned.
///
/// Non-positive or non-finite spacing falls back to [`DEFAULT_TICK_SPACING`].
pub fn generate_ticks(
    scale: &LinearScale,
    min_spacing: f64,
    formatter: &dyn TimeFormatter,
) -> Vec<Tick> {
    let domain = scale.domain();
    // Positions come from the offset into the domain so that epoch-sized
    // start times don't cancel away the spacing.
    let make_tick = |offset: f64| {
        let time = (domain.start + offset).min(domain.end);
        Tick {
            time,
            position: scale.map_offset(offset),
            label: formatter.format_time(time),
        }
    };

    if domain.is_degenerate() {
        return vec![make_tick(0.0)];
    }

    let length = scale.range().length;
    if length <= 0.0 {
        return Vec::new();
    }

    let min_spacing = if min_spacing.is_finite() && min_spacing > 0.0 {
        min_spacing
    } else {
        DEFAULT_TICK_SPACING
    };

    let target_count = (length / min_spacing).floor();
    if target_count < 1.0 {
        return vec![make_tick(0.0)];
    }

    let span = domain.span();
    let step = nice_step(span / target_count);
    let first_offset = (domain.start / step).ceil() * step - domain.start;
    if !(step.is_finite() && step > 0.0 && first_offset.is_finite()) {
        return vec![make_tick(0.0)];
    }
    // A start sitting on a boundary can land an ulp past it.
    let first_offset = if first_offset < step * 1e-6 {
        0.0
    } else {
        first_offset
    };
    let limit = span + step * 1e-9;

    let mut ticks = Vec::new();
    let mut i = 0u64;
    loop {
        // Multiply instead of accumulating to avoid drift on fractional steps.
        let offset = first_offset + i as f64 * step;
        if offset > limit {
            break;
        }
        ticks.push(make_tick(offset.min(span)));
        i += 1;
    }

    // The step overshot the whole domain; anchor the axis at its start.
    if ticks.is_empty() {
        ticks.push(make_tick(0.0));
    }

    ticks
}
