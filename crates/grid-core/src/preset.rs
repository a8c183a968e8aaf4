// File: crates/grid-core/src/preset.rs
// Summary: Named axis type presets (linear, log, time) merged ahead of explicit fields.

use std::sync::Arc;

use crate::axis::{AxisOptions, LabelSpec, LineSpec, SublineSpec};
use crate::ticks;

/// Named configuration fragment. Applied to an axis before the patch's own
/// fields, so explicit values always win over the preset.
#[derive(Clone)]
pub struct TypePreset {
    pub name: &'static str,
    pub options: AxisOptions,
}

pub fn linear() -> TypePreset {
    TypePreset {
        name: "linear",
        options: AxisOptions::default()
            .with_lines(LineSpec::Generator(Arc::new(ticks::linear_lines)))
            .with_labels(LabelSpec::Auto),
    }
}

pub fn log() -> TypePreset {
    TypePreset {
        name: "log",
        options: AxisOptions::default()
            .with_lines(LineSpec::Generator(Arc::new(ticks::decade_lines)))
            // Decade grids carry no refinement lines.
            .with_sublines(SublineSpec::Off)
            .with_labels(LabelSpec::Auto),
    }
}

pub fn time() -> TypePreset {
    TypePreset {
        name: "time",
        options: AxisOptions::default()
            .with_lines(LineSpec::Generator(Arc::new(ticks::time_lines)))
            .with_labels(LabelSpec::Generator(Arc::new(ticks::time_labels))),
    }
}

/// All built-in type presets.
pub fn presets() -> Vec<TypePreset> {
    vec![linear(), log(), time()]
}

/// Find a preset by name, case-insensitive. An unknown name is a
/// configuration defect, so there is no fallback.
pub fn find(name: &str) -> Option<TypePreset> {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
