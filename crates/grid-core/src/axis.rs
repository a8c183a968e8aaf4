// File: crates/grid-core/src/axis.rs
// Summary: Axis model: orientation, declarative config, option patches and merge.

use std::fmt;
use std::sync::Arc;

use crate::color::Color;
use crate::error::ConfigError;
use crate::state::AxisState;
use crate::types::Viewport;

/// Tick value generator invoked with the in-progress axis state.
pub type ValuesFn = Arc<dyn Fn(&AxisState) -> Vec<f64>>;
/// Label text generator invoked with the in-progress axis state.
pub type LabelsFn = Arc<dyn Fn(&AxisState) -> Vec<String>>;
/// Padding generator producing `[top, right, bottom, left]` pixels.
pub type PaddingFn = Arc<dyn Fn(&AxisState) -> [f64; 4]>;
/// Override for the visible span in data units.
pub type RangeFn = Arc<dyn Fn(&AxisState) -> f64>;
/// Override mapping a value to its 0..1 fraction of the visible range.
pub type RatioFn = Arc<dyn Fn(f64, &AxisState) -> f64>;
/// Override emitting gridline endpoint pairs for a set of tick values.
pub type CoordsFn = Arc<dyn Fn(&[f64], &AxisState) -> Vec<f64>>;
/// Interaction gate predicate evaluated against the current config.
pub type GateFn = Arc<dyn Fn(&AxisConfig) -> bool>;

/// Axis kind; selects the orientation-bound geometry at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    X,
    Y,
    Radius,
    Angle,
}

impl Orientation {
    /// Visible span in data units for the current zoom scale.
    /// Radius follows the horizontal extent, Angle the vertical one.
    pub fn range(self, viewport: Viewport, scale: f64) -> f64 {
        match self {
            Orientation::X | Orientation::Radius => viewport.width * scale,
            Orientation::Y | Orientation::Angle => viewport.height * scale,
        }
    }

    /// Position of `value` as a 0..1 fraction of the visible range.
    pub fn ratio(self, value: f64, offset: f64, range: f64) -> f64 {
        let t = (value - offset) / range;
        match self {
            Orientation::X | Orientation::Radius => t,
            // Pixel row 0 is the top while the data range grows upward.
            Orientation::Y | Orientation::Angle => 1.0 - t,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::X => "x",
            Orientation::Y => "y",
            Orientation::Radius => "r",
            Orientation::Angle => "a",
        })
    }
}

/// Interaction gate: a plain switch or a predicate over the current config.
#[derive(Clone)]
pub enum Gate {
    Enabled,
    Disabled,
    When(GateFn),
}

impl Gate {
    pub fn is_open(&self, config: &AxisConfig) -> bool {
        match self {
            Gate::Enabled => true,
            Gate::Disabled => false,
            Gate::When(predicate) => predicate(config),
        }
    }
}

/// Gridline source: nothing, the built-in nice-number generator, literal
/// values, or a callback.
#[derive(Clone)]
pub enum LineSpec {
    Off,
    Auto,
    Values(Vec<f64>),
    Generator(ValuesFn),
}

/// Subline source. `Auto` derives a refinement of the primary lines by
/// re-running their generator at one-third scale.
#[derive(Clone)]
pub enum SublineSpec {
    Off,
    Auto,
    Values(Vec<f64>),
    Generator(ValuesFn),
}

/// Label source. `Auto` formats the tick values; `Map` relabels ticks by
/// value (appending values that have no matching tick).
#[derive(Clone)]
pub enum LabelSpec {
    Off,
    Auto,
    Values(Vec<String>),
    Map(Vec<(f64, String)>),
    Generator(LabelsFn),
}

/// Styling color slot: inherit the base color, blend an alpha into it, or
/// use an explicit value.
#[derive(Clone, Copy)]
pub enum ColorSpec {
    Inherit,
    Alpha(f64),
    Value(Color),
}

/// Padding around the plot area, as `[top, right, bottom, left]` pixels.
#[derive(Clone)]
pub enum PaddingSpec {
    Uniform(f64),
    Sides([f64; 4]),
    Generator(PaddingFn),
}

/// Label font size: device pixels, or a magnitude with a CSS-style unit
/// converted through the host.
#[derive(Clone, Debug, PartialEq)]
pub enum FontSize {
    Px(f64),
    Unit(f64, String),
}

impl FontSize {
    /// Parse `"10pt"`-style text into a magnitude/unit pair.
    pub fn parse(text: &str) -> Option<FontSize> {
        let split = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(text.len());
        let magnitude: f64 = text[..split].trim().parse().ok()?;
        let unit = text[split..].trim();
        if unit.is_empty() {
            Some(FontSize::Px(magnitude))
        } else {
            Some(FontSize::Unit(magnitude, unit.to_string()))
        }
    }
}

/// Declarative per-axis configuration. Created once per axis at engine
/// construction and mutated in place by every update.
#[derive(Clone)]
pub struct AxisConfig {
    pub orientation: Orientation,
    pub disabled: bool,
    pub min: f64,
    pub max: f64,
    /// Current pan position, interpreted through `origin`.
    pub offset: f64,
    /// Anchor fraction in [0, 1]: offset normalization and zoom focal default.
    pub origin: f64,
    pub scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub pan: Gate,
    pub zoom: Gate,
    pub lines: LineSpec,
    pub sublines: SublineSpec,
    pub labels: LabelSpec,
    /// Tick mark length in pixels.
    pub tick: f64,
    pub subtick: f64,
    /// Tick placement across the axis line, 0..1.
    pub tick_align: f64,
    pub line_width: f64,
    pub axis_width: f64,
    pub color: Color,
    pub line_color: ColorSpec,
    pub subline_color: ColorSpec,
    pub axis_color: ColorSpec,
    pub padding: PaddingSpec,
    pub font_size: FontSize,
    pub font_family: String,
    /// Geometry overrides; `None` uses the orientation defaults.
    pub range: Option<RangeFn>,
    pub ratio: Option<RatioFn>,
    pub coords: Option<CoordsFn>,
}

impl AxisConfig {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            disabled: matches!(orientation, Orientation::Radius | Orientation::Angle),
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            offset: 0.0,
            origin: 0.5,
            scale: 1.0,
            min_scale: 1e-9,
            max_scale: 1e9,
            pan: Gate::Enabled,
            zoom: Gate::Enabled,
            lines: LineSpec::Auto,
            sublines: SublineSpec::Auto,
            labels: LabelSpec::Auto,
            tick: 8.0,
            subtick: 4.0,
            tick_align: 0.5,
            line_width: 1.0,
            axis_width: 2.0,
            color: Color::from_rgb(60, 60, 70),
            line_color: ColorSpec::Alpha(0.14),
            subline_color: ColorSpec::Alpha(0.07),
            axis_color: ColorSpec::Alpha(0.8),
            padding: PaddingSpec::Uniform(0.0),
            font_size: FontSize::Unit(10.0, "pt".to_string()),
            font_family: "sans-serif".to_string(),
            range: None,
            ratio: None,
            coords: None,
        }
    }

    pub fn default_x() -> Self {
        Self::new(Orientation::X)
    }

    pub fn default_y() -> Self {
        Self::new(Orientation::Y)
    }

    pub fn default_r() -> Self {
        Self::new(Orientation::Radius)
    }

    pub fn default_a() -> Self {
        Self::new(Orientation::Angle)
    }

    /// Reject configurations that cannot be normalized by clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                axis: self.orientation,
                min: self.min,
                max: self.max,
            });
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleBounds {
                axis: self.orientation,
                min_scale: self.min_scale,
                max_scale: self.max_scale,
            });
        }
        Ok(())
    }

    /// Merge a patch into this config; `None` fields are left as-is.
    pub fn apply(&mut self, patch: &AxisOptions) {
        if let Some(v) = patch.disabled {
            self.disabled = v;
        }
        if let Some(v) = patch.min {
            self.min = v;
        }
        if let Some(v) = patch.max {
            self.max = v;
        }
        if let Some(v) = patch.offset {
            self.offset = v;
        }
        if let Some(v) = patch.origin {
            self.origin = v;
        }
        if let Some(v) = patch.scale {
            self.scale = v;
        }
        if let Some(v) = patch.min_scale {
            self.min_scale = v;
        }
        if let Some(v) = patch.max_scale {
            self.max_scale = v;
        }
        if let Some(v) = &patch.pan {
            self.pan = v.clone();
        }
        if let Some(v) = &patch.zoom {
            self.zoom = v.clone();
        }
        if let Some(v) = &patch.lines {
            self.lines = v.clone();
        }
        if let Some(v) = &patch.sublines {
            self.sublines = v.clone();
        }
        if let Some(v) = &patch.labels {
            self.labels = v.clone();
        }
        if let Some(v) = patch.tick {
            self.tick = v;
        }
        if let Some(v) = patch.subtick {
            self.subtick = v;
        }
        if let Some(v) = patch.tick_align {
            self.tick_align = v;
        }
        if let Some(v) = patch.line_width {
            self.line_width = v;
        }
        if let Some(v) = patch.axis_width {
            self.axis_width = v;
        }
        if let Some(v) = patch.color {
            self.color = v;
        }
        if let Some(v) = patch.line_color {
            self.line_color = v;
        }
        if let Some(v) = patch.subline_color {
            self.subline_color = v;
        }
        if let Some(v) = patch.axis_color {
            self.axis_color = v;
        }
        if let Some(v) = &patch.padding {
            self.padding = v.clone();
        }
        if let Some(v) = &patch.font_size {
            self.font_size = v.clone();
        }
        if let Some(v) = &patch.font_family {
            self.font_family = v.clone();
        }
        if let Some(v) = &patch.range {
            self.range = Some(v.clone());
        }
        if let Some(v) = &patch.ratio {
            self.ratio = Some(v.clone());
        }
        if let Some(v) = &patch.coords {
            self.coords = Some(v.clone());
        }
    }
}

/// Partial axis options; `None` fields leave the config untouched.
/// `type_name` names a preset merged in ahead of the explicit fields.
#[derive(Clone, Default)]
pub struct AxisOptions {
    pub type_name: Option<String>,
    pub disabled: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub offset: Option<f64>,
    pub origin: Option<f64>,
    pub scale: Option<f64>,
    pub min_scale: Option<f64>,
    pub max_scale: Option<f64>,
    pub pan: Option<Gate>,
    pub zoom: Option<Gate>,
    pub lines: Option<LineSpec>,
    pub sublines: Option<SublineSpec>,
    pub labels: Option<LabelSpec>,
    pub tick: Option<f64>,
    pub subtick: Option<f64>,
    pub tick_align: Option<f64>,
    pub line_width: Option<f64>,
    pub axis_width: Option<f64>,
    pub color: Option<Color>,
    pub line_color: Option<ColorSpec>,
    pub subline_color: Option<ColorSpec>,
    pub axis_color: Option<ColorSpec>,
    pub padding: Option<PaddingSpec>,
    pub font_size: Option<FontSize>,
    pub font_family: Option<String>,
    pub range: Option<RangeFn>,
    pub ratio: Option<RatioFn>,
    pub coords: Option<CoordsFn>,
}

impl AxisOptions {
    pub fn with_type(mut self, name: &str) -> Self {
        self.type_name = Some(name.to_string());
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_scale_bounds(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = Some(min_scale);
        self.max_scale = Some(max_scale);
        self
    }

    pub fn with_pan(mut self, pan: Gate) -> Self {
        self.pan = Some(pan);
        self
    }

    pub fn with_zoom(mut self, zoom: Gate) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_lines(mut self, lines: LineSpec) -> Self {
        self.lines = Some(lines);
        self
    }

    pub fn with_sublines(mut self, sublines: SublineSpec) -> Self {
        self.sublines = Some(sublines);
        self
    }

    pub fn with_labels(mut self, labels: LabelSpec) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_padding(mut self, padding: PaddingSpec) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = Some(font_size);
        self
    }
}
