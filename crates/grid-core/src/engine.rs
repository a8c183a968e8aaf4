// File: crates/grid-core/src/engine.rs
// Summary: Grid engine owning the four axis configs; merge, recompute, notify.

use log::{debug, trace};

use crate::axis::{AxisConfig, AxisOptions};
use crate::error::ConfigError;
use crate::host::Host;
use crate::interact::{self, PointerEvent};
use crate::preset;
use crate::state::{compute, AxisState};

/// Per-axis update patch: disable, enable with defaults, or merge options.
#[derive(Clone)]
pub enum AxisPatch {
    Off,
    On,
    Set(AxisOptions),
}

impl From<AxisOptions> for AxisPatch {
    fn from(options: AxisOptions) -> Self {
        AxisPatch::Set(options)
    }
}

/// Partial options accepted by `GridEngine::update`; absent axes are left
/// untouched.
#[derive(Clone, Default)]
pub struct GridOptions {
    pub x: Option<AxisPatch>,
    pub y: Option<AxisPatch>,
    pub r: Option<AxisPatch>,
    pub a: Option<AxisPatch>,
}

impl GridOptions {
    pub fn with_x(mut self, patch: impl Into<AxisPatch>) -> Self {
        self.x = Some(patch.into());
        self
    }

    pub fn with_y(mut self, patch: impl Into<AxisPatch>) -> Self {
        self.y = Some(patch.into());
        self
    }

    pub fn with_r(mut self, patch: impl Into<AxisPatch>) -> Self {
        self.r = Some(patch.into());
        self
    }

    pub fn with_a(mut self, patch: impl Into<AxisPatch>) -> Self {
        self.a = Some(patch.into());
        self
    }
}

/// Snapshot of all four axis states from the latest update.
#[derive(Clone)]
pub struct GridState {
    pub x: AxisState,
    pub y: AxisState,
    pub r: AxisState,
    pub a: AxisState,
}

type UpdateObserver = Box<dyn Fn(&GridState, &GridOptions)>;

/// Owns the per-axis configurations and the derived state snapshot. Every
/// configuration change, gesture, or resize funnels through `update`, which
/// runs merge, recompute, cross-link, notify and render-request to
/// completion before returning.
pub struct GridEngine {
    pub x: AxisConfig,
    pub y: AxisConfig,
    pub r: AxisConfig,
    pub a: AxisConfig,
    host: Box<dyn Host>,
    observers: Vec<UpdateObserver>,
    state: GridState,
}

impl GridEngine {
    /// Axes start disabled; the construction options enable the ones they
    /// mention. Later updates only touch the axes they carry.
    pub fn new(host: Box<dyn Host>, options: GridOptions) -> Result<Self, ConfigError> {
        let mut x = AxisConfig::default_x();
        let mut y = AxisConfig::default_y();
        let r = AxisConfig::default_r();
        let a = AxisConfig::default_a();
        x.disabled = true;
        y.disabled = true;
        let viewport = host.viewport();
        let state = GridState {
            x: compute(&x, viewport, host.as_ref())?,
            y: compute(&y, viewport, host.as_ref())?,
            r: compute(&r, viewport, host.as_ref())?,
            a: compute(&a, viewport, host.as_ref())?,
        };
        let mut engine = Self {
            x,
            y,
            r,
            a,
            host,
            observers: Vec::new(),
            state,
        };
        engine.update(Some(options))?;
        Ok(engine)
    }

    /// Latest state snapshot.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Subscribe to update notifications. Observers receive the new snapshot
    /// and the options that triggered it.
    pub fn on_update(&mut self, observer: impl Fn(&GridState, &GridOptions) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Merge `options` into the axis configs and recompute every state.
    /// `None` recomputes from the current configuration (the resize path,
    /// re-reading the viewport from the host).
    pub fn update(&mut self, options: Option<GridOptions>) -> Result<(), ConfigError> {
        let options = options.unwrap_or_default();
        merge_axis(&mut self.x, &options.x)?;
        merge_axis(&mut self.y, &options.y)?;
        merge_axis(&mut self.r, &options.r)?;
        merge_axis(&mut self.a, &options.a)?;

        let viewport = self.host.viewport();
        trace!("recomputing grid over {viewport:?}");
        let mut x = compute(&self.x, viewport, self.host.as_ref())?;
        let mut y = compute(&self.y, viewport, self.host.as_ref())?;
        let r = compute(&self.r, viewport, self.host.as_ref())?;
        let a = compute(&self.a, viewport, self.host.as_ref())?;

        store_offset(&mut self.x, &x);
        store_offset(&mut self.y, &y);
        store_offset(&mut self.r, &r);
        store_offset(&mut self.a, &a);

        // Perpendicular partners, one level deep.
        let x_snap = x.clone();
        let y_snap = y.clone();
        x.opposite = Some(Box::new(y_snap));
        y.opposite = Some(Box::new(x_snap));

        self.state = GridState { x, y, r, a };
        debug!(
            "grid updated: {} x lines, {} y lines",
            self.state.x.values.len(),
            self.state.y.values.len()
        );
        for observer in &self.observers {
            observer(&self.state, &options);
        }
        self.host.request_render();
        Ok(())
    }

    /// Route one pointer/wheel event through the interaction transform and
    /// apply the resulting fragment.
    pub fn pointer(&mut self, event: &PointerEvent) -> Result<(), ConfigError> {
        let fragment = interact::apply(event, &self.x, &self.y, self.host.viewport());
        self.update(Some(fragment))
    }
}

fn merge_axis(config: &mut AxisConfig, patch: &Option<AxisPatch>) -> Result<(), ConfigError> {
    match patch {
        None => {}
        Some(AxisPatch::Off) => config.disabled = true,
        Some(AxisPatch::On) => config.disabled = false,
        Some(AxisPatch::Set(options)) => {
            if let Some(name) = &options.type_name {
                let preset =
                    preset::find(name).ok_or_else(|| ConfigError::UnknownType(name.clone()))?;
                config.apply(&preset.options);
            }
            config.apply(options);
            // Configuring an axis enables it unless told otherwise.
            if options.disabled.is_none() {
                config.disabled = false;
            }
        }
    }
    Ok(())
}

/// The one documented config mutation: persist the clamped offset so the
/// next interaction reads a normalized pan position.
fn store_offset(config: &mut AxisConfig, state: &AxisState) {
    if !state.disabled && state.range.is_finite() {
        config.offset = state.offset + state.range * state.origin;
    }
}
