// File: crates/grid-core/tests/interact.rs
// Purpose: Validate the interaction transform: pan deltas, wheel zoom
// normalization, focal-point preservation and gates.

use std::sync::Arc;

use grid_core::{
    interact, AxisOptions, AxisPatch, FixedHost, Gate, GridEngine, GridOptions, PointerEvent,
    Viewport,
};

fn engine(width: f64, height: f64) -> GridEngine {
    let host = FixedHost::new(Viewport::new(0.0, 0.0, width, height));
    let options = GridOptions::default()
        .with_x(AxisPatch::On)
        .with_y(AxisPatch::On);
    GridEngine::new(Box::new(host), options).expect("engine")
}

#[test]
fn drag_pans_by_scaled_delta() {
    let mut engine = engine(800.0, 500.0);
    let before_x = engine.state().x.offset;
    let before_y = engine.state().y.offset;

    engine
        .pointer(&PointerEvent {
            dx: 24.0,
            dy: -10.0,
            ..Default::default()
        })
        .expect("pointer");

    assert!((engine.state().x.offset - (before_x - 24.0)).abs() < 1e-9);
    assert!((engine.state().y.offset - (before_y + 10.0)).abs() < 1e-9);
    // Scale untouched by a pure drag.
    assert_eq!(engine.state().x.scale, 1.0);
}

#[test]
fn wheel_zoom_matches_normalized_delta() {
    // dz = -50 over height 500 => zoom 0.1 => scale shrinks by 10%.
    let mut engine = engine(800.0, 500.0);
    engine
        .pointer(&PointerEvent {
            dz: -50.0,
            x: 400.0,
            y: 250.0,
            ..Default::default()
        })
        .expect("pointer");
    assert!((engine.state().y.scale - 0.9).abs() < 1e-12);
    assert!((engine.state().x.scale - 0.9).abs() < 1e-12);
}

#[test]
fn wheel_delta_is_clamped() {
    // |dz| beyond three quarters of the height saturates.
    let mut engine = engine(800.0, 500.0);
    engine
        .pointer(&PointerEvent {
            dz: 10_000.0,
            x: 400.0,
            y: 250.0,
            ..Default::default()
        })
        .expect("pointer");
    assert!((engine.state().x.scale - 1.75).abs() < 1e-12);
}

#[test]
fn zoom_keeps_the_point_under_the_pointer_fixed() {
    let mut engine = engine(800.0, 500.0);
    let event = PointerEvent {
        dz: -100.0,
        x: 600.0,
        y: 150.0,
        ..Default::default()
    };

    // Data values sitting under the pointer: x = 600/800, y row 150/500.
    let x_before = engine.state().x.clone();
    let y_before = engine.state().y.clone();
    let x_value = x_before.offset + 0.75 * x_before.range;
    let y_value = y_before.offset + 0.7 * y_before.range;
    let y_frac = y_before.ratio(y_value);

    engine.pointer(&event).expect("pointer");

    let x_after = engine.state().x.clone();
    let y_after = engine.state().y.clone();
    assert!((x_after.ratio(x_value) - x_before.ratio(x_value)).abs() < 1e-9);
    assert!((y_after.ratio(y_value) - y_frac).abs() < 1e-9);
    // And the zoom did happen.
    assert!(x_after.range < x_before.range);
}

#[test]
fn repeated_zoom_converges_on_the_pointer() {
    let mut engine = engine(800.0, 500.0);
    let before = engine.state().x.clone();
    let value = before.offset + 0.25 * before.range;
    for _ in 0..10 {
        engine
            .pointer(&PointerEvent {
                dz: -40.0,
                x: 200.0,
                y: 250.0,
                ..Default::default()
            })
            .expect("pointer");
    }
    let after = engine.state().x.clone();
    assert!((after.ratio(value) - 0.25).abs() < 1e-6);
    assert!(after.range < before.range * 0.5);
}

#[test]
fn gates_disable_pan_and_zoom() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(
            AxisOptions::default()
                .with_pan(Gate::Disabled)
                .with_zoom(Gate::Disabled),
        )))
        .expect("update");
    let before = engine.state().x.clone();

    engine
        .pointer(&PointerEvent {
            dx: 50.0,
            dz: -50.0,
            x: 100.0,
            y: 100.0,
            ..Default::default()
        })
        .expect("pointer");

    let after = engine.state().x.clone();
    assert_eq!(after.offset, before.offset);
    assert_eq!(after.scale, before.scale);
    // y keeps both interactions.
    assert!((engine.state().y.scale - 0.9).abs() < 1e-12);
}

#[test]
fn predicate_gates_consult_the_config() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(
            AxisOptions::default().with_pan(Gate::When(Arc::new(|config| config.scale < 0.5))),
        )))
        .expect("update");
    let before = engine.state().x.offset;
    engine
        .pointer(&PointerEvent {
            dx: 30.0,
            ..Default::default()
        })
        .expect("pointer");
    // scale = 1.0 fails the predicate, so the drag is ignored.
    assert_eq!(engine.state().x.offset, before);
}

#[test]
fn zoom_respects_scale_bounds() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(
            AxisOptions::default().with_scale_bounds(0.95, 2.0),
        )))
        .expect("update");
    engine
        .pointer(&PointerEvent {
            dz: -50.0,
            x: 400.0,
            y: 250.0,
            ..Default::default()
        })
        .expect("pointer");
    assert!((engine.state().x.scale - 0.95).abs() < 1e-12);
}

#[test]
fn disabled_axes_are_skipped() {
    let mut engine = engine(800.0, 500.0);
    engine
        .update(Some(GridOptions::default().with_x(AxisPatch::Off)))
        .expect("update");
    let fragment = interact::apply(
        &PointerEvent {
            dx: 10.0,
            ..Default::default()
        },
        &engine.x,
        &engine.y,
        Viewport::new(0.0, 0.0, 800.0, 500.0),
    );
    assert!(fragment.x.is_none());
    assert!(fragment.y.is_some());
}

#[test]
fn apply_is_stateless_and_pure() {
    let engine = engine(800.0, 500.0);
    let offset_before = engine.x.offset;
    let fragment = interact::apply(
        &PointerEvent {
            dx: 12.0,
            ..Default::default()
        },
        &engine.x,
        &engine.y,
        Viewport::new(0.0, 0.0, 800.0, 500.0),
    );
    // The configs are untouched; the fragment carries the new values.
    assert_eq!(engine.x.offset, offset_before);
    match fragment.x {
        Some(AxisPatch::Set(options)) => {
            assert_eq!(options.offset, Some(offset_before - 12.0));
            assert_eq!(options.scale, Some(1.0));
        }
        _ => panic!("expected an x fragment"),
    }
}
