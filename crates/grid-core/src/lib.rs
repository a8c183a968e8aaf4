// File: crates/grid-core/src/lib.rs
// Summary: Core library entry point; exports the grid state engine API.

pub mod axis;
pub mod color;
pub mod engine;
pub mod error;
pub mod host;
pub mod interact;
pub mod preset;
pub mod state;
pub mod ticks;
pub mod types;

pub use axis::{
    AxisConfig, AxisOptions, ColorSpec, FontSize, Gate, LabelSpec, LineSpec, Orientation,
    PaddingSpec, SublineSpec,
};
pub use color::Color;
pub use engine::{AxisPatch, GridEngine, GridOptions, GridState};
pub use error::ConfigError;
pub use host::{FixedHost, Host};
pub use interact::PointerEvent;
pub use state::{compute, AxisState};
pub use types::Viewport;
