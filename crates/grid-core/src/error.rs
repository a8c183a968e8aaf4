// File: crates/grid-core/src/error.rs
// Summary: Configuration defects surfaced by the grid engine.

use thiserror::Error;

use crate::axis::Orientation;

/// Invalid configuration detected during merge or state computation.
/// Out-of-range numeric values are clamped, not rejected; these variants
/// cover the cases that cannot be normalized away.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{axis} axis: min {min} exceeds max {max}")]
    InvertedBounds { axis: Orientation, min: f64, max: f64 },

    #[error("{axis} axis: min_scale {min_scale} exceeds max_scale {max_scale}")]
    InvertedScaleBounds {
        axis: Orientation,
        min_scale: f64,
        max_scale: f64,
    },

    #[error("{axis} axis: {field} produced a non-finite value {value}")]
    NonFiniteValue {
        axis: Orientation,
        field: &'static str,
        value: f64,
    },

    #[error("{axis} axis: label map key {key} is not a finite number")]
    BadLabelKey { axis: Orientation, key: f64 },

    #[error("unknown axis type {0:?}")]
    UnknownType(String),
}
