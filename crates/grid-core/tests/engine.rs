// File: crates/grid-core/tests/engine.rs
// Purpose: Validate engine orchestration: merge order, presets, idempotent
// recomputation, cross-linking and notifications.

use std::cell::Cell;
use std::rc::Rc;

use grid_core::{
    AxisOptions, AxisPatch, AxisState, ConfigError, FixedHost, GridEngine, GridOptions, Host,
    LineSpec, Orientation, Viewport,
};

fn engine(width: f64, height: f64) -> GridEngine {
    let host = FixedHost::new(Viewport::new(0.0, 0.0, width, height));
    let options = GridOptions::default()
        .with_x(AxisPatch::On)
        .with_y(AxisPatch::On);
    GridEngine::new(Box::new(host), options).expect("engine")
}

fn assert_same_axis(a: &AxisState, b: &AxisState) {
    assert_eq!(a.range, b.range);
    assert_eq!(a.offset, b.offset);
    assert_eq!(a.scale, b.scale);
    assert_eq!(a.values, b.values);
    assert_eq!(a.subvalues, b.subvalues);
    assert_eq!(a.labels, b.labels);
}

#[test]
fn construction_enables_only_mentioned_axes() {
    let host = FixedHost::new(Viewport::new(0.0, 0.0, 800.0, 500.0));
    let bare = GridEngine::new(Box::new(host), GridOptions::default()).expect("engine");
    assert!(bare.state().x.disabled);
    assert!(bare.state().y.disabled);
    assert!(bare.state().r.disabled);
    assert!(bare.state().a.disabled);

    let engine = GridEngine::new(
        Box::new(host),
        GridOptions::default().with_x(AxisOptions::default()),
    )
    .expect("engine");
    assert!(!engine.state().x.disabled);
    assert!(engine.state().y.disabled);
    assert!(!engine.state().x.values.is_empty());
    assert!(engine.state().y.values.is_empty());
}

#[test]
fn patches_toggle_axes() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(AxisPatch::Off)))
        .expect("update");
    assert!(engine.state().x.disabled);
    assert!(engine.state().x.values.is_empty());

    engine
        .update(Some(GridOptions::default().with_x(AxisPatch::On)))
        .expect("update");
    assert!(!engine.state().x.disabled);

    // Configuring an axis enables it.
    engine
        .update(Some(GridOptions::default().with_r(AxisOptions::default())))
        .expect("update");
    assert!(!engine.state().r.disabled);
    assert!(!engine.state().r.values.is_empty());
}

#[test]
fn repeated_updates_are_idempotent() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(
            GridOptions::default()
                .with_x(AxisOptions::default().with_bounds(0.0, 1000.0).with_offset(120.0)),
        ))
        .expect("update");
    let first = engine.state().clone();
    engine.update(None).expect("second update");
    engine.update(None).expect("third update");
    assert_same_axis(&first.x, &engine.state().x);
    assert_same_axis(&first.y, &engine.state().y);
}

#[test]
fn preset_loses_to_explicit_fields() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(
            AxisOptions::default()
                .with_type("linear")
                .with_lines(LineSpec::Values(vec![1.0, 2.0, 3.0])),
        )))
        .expect("update");
    assert_eq!(engine.state().x.values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn preset_applies_when_unopposed() {
    let mut engine = engine(600.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(
            AxisOptions::default()
                .with_type("log")
                .with_bounds(1.0, 1e6)
                .with_offset(1.0)
                .with_origin(0.0)
                .with_scale(100.0 / 6.0),
        )))
        .expect("update");
    // range = 600 * 100/6 = 10000 over [1, 10001]: decades 1..10^4.
    assert_eq!(
        engine.state().x.values,
        vec![1.0, 10.0, 100.0, 1000.0, 10000.0]
    );
    assert!(engine.state().x.subvalues.is_empty());
}

#[test]
fn time_preset_formats_epoch_labels() {
    let mut engine = engine(600.0, 500.0);
    // One week visible starting at the epoch: day steps, "%b %d" labels.
    engine
        .update(Some(GridOptions::default().with_x(
            AxisOptions::default()
                .with_type("time")
                .with_bounds(0.0, 2_592_000.0)
                .with_offset(0.0)
                .with_origin(0.0)
                .with_scale(604_800.0 / 600.0),
        )))
        .expect("update");
    let state = &engine.state().x;
    assert_eq!(state.values[0], 0.0);
    assert_eq!(state.values[1], 86_400.0);
    assert_eq!(state.labels[0].as_deref(), Some("Jan 01"));
    assert_eq!(state.labels[1].as_deref(), Some("Jan 02"));
}

#[test]
fn unknown_preset_is_a_defect() {
    let mut engine = engine(800.0, 500.0);
    let result = engine.update(Some(
        GridOptions::default().with_x(AxisOptions::default().with_type("cubic")),
    ));
    assert_eq!(result, Err(ConfigError::UnknownType("cubic".to_string())));
}

#[test]
fn states_cross_link_their_opposites() {
    let engine = engine(800.0, 500.0);
    let x = &engine.state().x;
    let y = &engine.state().y;
    let x_opposite = x.opposite.as_deref().expect("x opposite");
    let y_opposite = y.opposite.as_deref().expect("y opposite");
    assert_eq!(x_opposite.orientation, Orientation::Y);
    assert_eq!(y_opposite.orientation, Orientation::X);
    assert_eq!(x_opposite.offset, y.offset);
    assert_eq!(y_opposite.offset, x.offset);
    // One level deep only.
    assert!(x_opposite.opposite.is_none());
}

#[test]
fn offset_write_back_is_stable() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(
            AxisOptions::default()
                .with_bounds(0.0, 100.0)
                .with_offset(1e9),
        )))
        .expect("update");
    let clamped = engine.state().x.offset;
    let stored = engine.x.offset;
    assert!(stored.is_finite());
    engine.update(None).expect("recompute");
    assert_eq!(engine.state().x.offset, clamped);
    assert_eq!(engine.x.offset, stored);
}

struct CountingHost {
    viewport: Viewport,
    renders: Rc<Cell<usize>>,
}

impl Host for CountingHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn request_render(&self) {
        self.renders.set(self.renders.get() + 1);
    }
}

#[test]
fn updates_notify_observers_and_request_renders() {
    let renders = Rc::new(Cell::new(0));
    let host = CountingHost {
        viewport: Viewport::new(0.0, 0.0, 800.0, 500.0),
        renders: Rc::clone(&renders),
    };
    let mut engine = GridEngine::new(
        Box::new(host),
        GridOptions::default().with_x(AxisPatch::On).with_y(AxisPatch::On),
    )
    .expect("engine");
    assert_eq!(renders.get(), 1);

    let seen = Rc::new(Cell::new(0));
    let seen_in_observer = Rc::clone(&seen);
    engine.on_update(move |state, options| {
        assert!(!state.x.disabled);
        assert!(options.x.is_some());
        seen_in_observer.set(seen_in_observer.get() + 1);
    });

    engine
        .update(Some(
            GridOptions::default().with_x(AxisOptions::default().with_scale(2.0)),
        ))
        .expect("update");
    assert_eq!(seen.get(), 1);
    assert_eq!(renders.get(), 2);
}
