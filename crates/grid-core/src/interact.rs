// File: crates/grid-core/src/interact.rs
// Summary: Pointer/wheel events to pan/zoom update fragments with focal-point zoom.

use crate::axis::{AxisConfig, AxisOptions};
use crate::engine::{AxisPatch, GridOptions};
use crate::types::{clamp, Viewport};

/// One raw interaction event: pointer deltas, wheel delta, and pointer
/// position in pixels relative to the viewport's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub dx: f64,
    pub dy: f64,
    /// Wheel delta; negative values zoom in.
    pub dz: f64,
    pub x: f64,
    pub y: f64,
}

/// Largest fraction of the viewport height one wheel step may zoom by.
const MAX_ZOOM_STEP: f64 = 0.75;

/// Convert `event` into an update fragment for the x and y axes. Stateless:
/// reads only the given configs and viewport; the caller applies the result
/// through `GridEngine::update`.
pub fn apply(
    event: &PointerEvent,
    x: &AxisConfig,
    y: &AxisConfig,
    viewport: Viewport,
) -> GridOptions {
    let height = viewport.height.max(1.0);
    let zoom = clamp(-event.dz, -MAX_ZOOM_STEP * height, MAX_ZOOM_STEP * height) / height;

    let mut options = GridOptions::default();
    if !x.disabled {
        let focal = (event.x - viewport.left) / viewport.width.max(1.0) - clamp(x.origin, 0.0, 1.0);
        options.x = Some(AxisPatch::Set(axis_fragment(
            x,
            event.dx,
            zoom,
            viewport.width,
            focal,
        )));
    }
    if !y.disabled {
        // Flipped to match the inverted y ratio.
        let focal = clamp(y.origin, 0.0, 1.0) - (event.y - viewport.top) / height;
        options.y = Some(AxisPatch::Set(axis_fragment(
            y,
            event.dy,
            zoom,
            viewport.height,
            focal,
        )));
    }
    options
}

fn axis_fragment(
    config: &AxisConfig,
    delta: f64,
    zoom: f64,
    extent: f64,
    focal: f64,
) -> AxisOptions {
    let mut offset = config.offset;
    let mut scale = config.scale;
    if config.pan.is_open(config) {
        offset -= scale * delta;
    }
    if zoom != 0.0 && config.zoom.is_open(config) {
        let prev = scale;
        scale = clamp(scale * (1.0 - zoom), config.min_scale, config.max_scale);
        // Keep the data point under the pointer visually fixed.
        offset -= extent * (scale - prev) * focal;
    }
    AxisOptions::default().with_offset(offset).with_scale(scale)
}
