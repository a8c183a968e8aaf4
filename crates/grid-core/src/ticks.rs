// File: crates/grid-core/src/ticks.rs
// Summary: Tick value generation: nice-number linear steps, decades, time steps.

use chrono::DateTime;

use crate::state::AxisState;

/// Target number of primary gridlines across the visible range.
const TARGET_LINES: f64 = 10.0;

/// Upper bound on generated ticks; a tighter window wins over a flood.
const MAX_TICKS: usize = 1000;

/// Round `raw_step` up to a "nice" 1/2/5 x 10^n value.
pub fn nice_step(raw_step: f64) -> f64 {
    let base = 10f64.powf(raw_step.abs().log10().floor());
    let frac = raw_step.abs() / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Nice-number gridline values across the visible window.
pub fn linear_lines(state: &AxisState) -> Vec<f64> {
    if !state.range.is_finite() || state.range <= 0.0 {
        return Vec::new();
    }
    span_lines(state, nice_step(state.range / TARGET_LINES))
}

/// Multiples of `step` inside the visible window, clipped to the axis bounds.
fn span_lines(state: &AxisState, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let lo = state.offset.max(state.min);
    let hi = (state.offset + state.range).min(state.max);
    if !(lo <= hi) || (hi - lo) / step > MAX_TICKS as f64 {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let mut out = Vec::new();
    let mut v = (lo / step).ceil() * step;
    while v <= hi + eps {
        out.push(if v.abs() < eps { 0.0 } else { v });
        v += step;
    }
    out
}

/// Powers of ten covering the visible window; for log-type axes.
pub fn decade_lines(state: &AxisState) -> Vec<f64> {
    if !state.range.is_finite() || state.range <= 0.0 {
        return Vec::new();
    }
    let lo = state.offset.max(state.min).max(f64::MIN_POSITIVE);
    let hi = (state.offset + state.range).min(state.max);
    if !hi.is_finite() || hi < lo {
        return Vec::new();
    }
    let first = lo.log10().ceil() as i32;
    let last = hi.log10().floor() as i32;
    (first..=last).map(|k| 10f64.powi(k)).collect()
}

/// Step ladder for time axes, in seconds: sub-minute, minutes, hours, days,
/// weeks, months, quarters, years.
const TIME_STEPS: &[f64] = &[
    1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1800.0, 3600.0, 7200.0,
    14400.0, 21600.0, 43200.0, 86400.0, 172800.0, 604800.0, 2_592_000.0, 7_776_000.0,
    31_536_000.0,
];

/// Gridline values for epoch-second time axes.
pub fn time_lines(state: &AxisState) -> Vec<f64> {
    if !state.range.is_finite() || state.range <= 0.0 {
        return Vec::new();
    }
    let raw = state.range / TARGET_LINES;
    let step = TIME_STEPS
        .iter()
        .copied()
        .find(|&s| s >= raw)
        .unwrap_or_else(|| nice_step(raw / 31_536_000.0) * 31_536_000.0);
    span_lines(state, step)
}

/// Format epoch-second tick values with a span-appropriate pattern.
pub fn time_labels(state: &AxisState) -> Vec<String> {
    let pattern = if state.range < 60.0 {
        "%H:%M:%S"
    } else if state.range < 86_400.0 {
        "%H:%M"
    } else if state.range < 31_536_000.0 {
        "%b %d"
    } else {
        "%Y"
    };
    state
        .values
        .iter()
        .map(|&v| {
            DateTime::from_timestamp(v as i64, 0)
                .map(|t| t.format(pattern).to_string())
                .unwrap_or_else(|| format_value(v))
        })
        .collect()
}

/// Minimal decimal text for a tick value.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs();
    if magnitude >= 1e6 || magnitude < 1e-4 {
        return format!("{v:e}");
    }
    // Trim float noise accumulated by repeated stepping.
    let text = format!("{v:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
