// File: crates/grid-core/src/state.rs
// Summary: Resolved axis state and its computation from config + viewport.

use crate::axis::{
    AxisConfig, ColorSpec, CoordsFn, FontSize, LabelSpec, LineSpec, Orientation, PaddingSpec,
    RatioFn, SublineSpec, ValuesFn,
};
use crate::color::Color;
use crate::error::ConfigError;
use crate::host::Host;
use crate::ticks;
use crate::types::{clamp, clamp_window, nearly_equal, Viewport, MAX_NUM};

/// Fully resolved axis snapshot. Recomputed wholesale on every update; a
/// disposable value with no lifetime of its own.
#[derive(Clone)]
pub struct AxisState {
    pub orientation: Orientation,
    pub disabled: bool,
    pub viewport: Viewport,
    pub min: f64,
    pub max: f64,
    pub scale: f64,
    /// Visible span in data units.
    pub range: f64,
    /// Resolved pan position: origin-shifted and clamped into the bounds.
    pub offset: f64,
    pub origin: f64,
    /// Primary tick values.
    pub values: Vec<f64>,
    /// Secondary (refinement) tick values.
    pub subvalues: Vec<f64>,
    /// One label slot per tick value.
    pub labels: Vec<Option<String>>,
    pub color: Color,
    pub line_color: Color,
    pub subline_color: Color,
    pub axis_color: Color,
    pub line_width: f64,
    pub axis_width: f64,
    pub tick: f64,
    pub subtick: f64,
    pub tick_align: f64,
    /// Label font size in device pixels.
    pub font_size: f64,
    pub font_family: String,
    /// `[top, right, bottom, left]` pixels.
    pub padding: [f64; 4],
    /// Perpendicular partner state (one level deep), for label placement.
    pub opposite: Option<Box<AxisState>>,
    ratio_fn: Option<RatioFn>,
    coords_fn: Option<CoordsFn>,
}

impl AxisState {
    /// Position of `value` as a 0..1 fraction of the visible range.
    pub fn ratio(&self, value: f64) -> f64 {
        match &self.ratio_fn {
            Some(f) => f(value, self),
            None => self.orientation.ratio(value, self.offset, self.range),
        }
    }

    /// Gridline segment endpoints for `values`, four numbers per segment in
    /// normalized 0..1 space. Polar orientations have no default geometry.
    pub fn coords(&self, values: &[f64]) -> Vec<f64> {
        if self.disabled {
            return Vec::new();
        }
        if let Some(f) = &self.coords_fn {
            return f(values, self);
        }
        let mut out = Vec::with_capacity(values.len() * 4);
        for &v in values {
            let t = self.ratio(v);
            match self.orientation {
                Orientation::X => out.extend_from_slice(&[t, 0.0, t, 1.0]),
                Orientation::Y => out.extend_from_slice(&[0.0, t, 1.0, t]),
                Orientation::Radius | Orientation::Angle => {}
            }
        }
        out
    }
}

/// Resolve `config` against `viewport` into a state snapshot. Pure: the
/// config is never written; the engine owns the one documented offset
/// write-back after computation.
pub fn compute(
    config: &AxisConfig,
    viewport: Viewport,
    host: &dyn Host,
) -> Result<AxisState, ConfigError> {
    config.validate()?;

    let mut state = AxisState {
        orientation: config.orientation,
        disabled: config.disabled,
        viewport,
        min: config.min,
        max: config.max,
        scale: clamp(config.scale, config.min_scale, config.max_scale),
        range: 0.0,
        offset: config.offset,
        origin: clamp(config.origin, 0.0, 1.0),
        values: Vec::new(),
        subvalues: Vec::new(),
        labels: Vec::new(),
        color: config.color,
        line_color: config.color,
        subline_color: config.color,
        axis_color: config.color,
        line_width: config.line_width,
        axis_width: config.axis_width,
        tick: config.tick,
        subtick: config.subtick,
        tick_align: clamp(config.tick_align, 0.0, 1.0),
        font_size: 0.0,
        font_family: config.font_family.clone(),
        padding: [0.0; 4],
        opposite: None,
        ratio_fn: config.ratio.clone(),
        coords_fn: config.coords.clone(),
    };
    if config.disabled {
        return Ok(state);
    }

    // Visible span in data units.
    state.range = match &config.range {
        Some(f) => f(&state),
        None => config.orientation.range(viewport, state.scale),
    };

    // Shift by the origin anchor, then keep the window inside the bounds.
    // Skipped entirely for a non-finite range; the lower bound wins when the
    // window is wider than the bounds.
    if state.range.is_finite() {
        let lo = config.min.max(-MAX_NUM);
        let hi = config.max.min(MAX_NUM) - state.range;
        state.offset = clamp_window(config.offset - state.range * state.origin, lo, hi);
    }

    state.line_color = resolve_color(&config.line_color, config.color, host);
    state.subline_color = resolve_color(&config.subline_color, config.color, host);
    state.axis_color = resolve_color(&config.axis_color, config.color, host);

    let padding = match &config.padding {
        PaddingSpec::Uniform(p) => [*p; 4],
        PaddingSpec::Sides(p) => *p,
        PaddingSpec::Generator(f) => f(&state),
    };
    state.padding = padding;

    state.font_size = match &config.font_size {
        FontSize::Px(px) => *px,
        FontSize::Unit(magnitude, unit) => host.to_pixels(*magnitude, unit),
    };

    // Primary tick values.
    let values = match &config.lines {
        LineSpec::Off => Vec::new(),
        LineSpec::Auto => ticks::linear_lines(&state),
        LineSpec::Values(v) => v.clone(),
        LineSpec::Generator(f) => f(&state),
    };
    check_finite(config.orientation, "lines", &values)?;
    state.values = values;

    // Sublines: a refinement of the primary set when auto-derived.
    let subvalues = match &config.sublines {
        SublineSpec::Off => Vec::new(),
        SublineSpec::Values(v) => v.clone(),
        SublineSpec::Generator(f) => f(&state),
        SublineSpec::Auto => derive_sublines(config, &state),
    };
    check_finite(config.orientation, "sublines", &subvalues)?;
    state.subvalues = subvalues;

    resolve_labels(config, &mut state)?;
    Ok(state)
}

fn resolve_color(spec: &ColorSpec, base: Color, host: &dyn Host) -> Color {
    match spec {
        ColorSpec::Inherit => base,
        ColorSpec::Alpha(alpha) => host.blend(base, *alpha),
        ColorSpec::Value(color) => *color,
    }
}

/// Re-run the line generator at one-third scale and keep only values that
/// refine the primary set; literal lines derive nothing.
fn derive_sublines(config: &AxisConfig, state: &AxisState) -> Vec<f64> {
    let generator: ValuesFn = match &config.lines {
        LineSpec::Generator(f) => f.clone(),
        LineSpec::Auto => std::sync::Arc::new(ticks::linear_lines),
        LineSpec::Off | LineSpec::Values(_) => return Vec::new(),
    };
    let mut probe = state.clone();
    probe.scale = state.scale / 3.0;
    probe.range = match &config.range {
        Some(f) => f(&probe),
        None => config.orientation.range(state.viewport, probe.scale),
    };
    let mut sub = generator(&probe);
    sub.retain(|&v| state.values.iter().any(|&p| nearly_equal(p, v)));
    sub
}

fn resolve_labels(config: &AxisConfig, state: &mut AxisState) -> Result<(), ConfigError> {
    match &config.labels {
        LabelSpec::Off => {
            state.labels = vec![None; state.values.len()];
        }
        LabelSpec::Auto => {
            state.labels = state
                .values
                .iter()
                .map(|&v| Some(ticks::format_value(v)))
                .collect();
        }
        LabelSpec::Values(text) => {
            let labels = text.iter().cloned().map(Some).collect();
            state.labels = fit(labels, state.values.len());
        }
        LabelSpec::Generator(f) => {
            let labels = f(state).into_iter().map(Some).collect();
            state.labels = fit(labels, state.values.len());
        }
        LabelSpec::Map(pairs) => {
            // Merge by value: a mapped label wins over the tick it matches;
            // unmatched mapped values join the tick set.
            state.labels = vec![None; state.values.len()];
            for (key, label) in pairs {
                if !key.is_finite() {
                    return Err(ConfigError::BadLabelKey {
                        axis: config.orientation,
                        key: *key,
                    });
                }
                match state.values.iter().position(|&v| nearly_equal(v, *key)) {
                    Some(i) => state.labels[i] = Some(label.clone()),
                    None => {
                        state.values.push(*key);
                        state.labels.push(Some(label.clone()));
                    }
                }
            }
        }
    }
    debug_assert_eq!(state.values.len(), state.labels.len());
    Ok(())
}

/// Pad with empty slots or truncate so every tick value has a label slot.
fn fit(mut labels: Vec<Option<String>>, len: usize) -> Vec<Option<String>> {
    labels.resize(len, None);
    labels
}

fn check_finite(
    axis: Orientation,
    field: &'static str,
    values: &[f64],
) -> Result<(), ConfigError> {
    for &v in values {
        if !v.is_finite() {
            return Err(ConfigError::NonFiniteValue { axis, field, value: v });
        }
    }
    Ok(())
}
