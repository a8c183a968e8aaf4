// File: crates/demo/src/main.rs
// Summary: Demo builds a grid over a fixed viewport, replays a gesture trace
// (CSV or built-in), and prints the resolved axis states.

use anyhow::{Context, Result};
use grid_core::{
    AxisOptions, AxisState, FixedHost, GridEngine, GridOptions, PointerEvent, Viewport,
};

fn main() -> Result<()> {
    let viewport = Viewport::new(0.0, 0.0, 800.0, 500.0);
    let host = FixedHost::new(viewport);

    let options = GridOptions::default()
        .with_x(
            AxisOptions::default()
                .with_type("linear")
                .with_bounds(0.0, 10_000.0)
                .with_offset(0.0)
                .with_origin(0.0),
        )
        .with_y(
            AxisOptions::default()
                .with_type("linear")
                .with_bounds(-500.0, 500.0),
        );
    let mut engine = GridEngine::new(Box::new(host), options)?;

    engine.on_update(|state, _| {
        println!(
            "update: x offset {:.2} scale {:.3}, y offset {:.2} scale {:.3}",
            state.x.offset, state.x.scale, state.y.offset, state.y.scale
        );
    });

    let events = match std::env::args().nth(1) {
        Some(path) => load_trace(&path)
            .with_context(|| format!("failed to load gesture trace '{path}'"))?,
        None => sample_trace(),
    };
    println!("Replaying {} events", events.len());

    for event in &events {
        engine.pointer(event)?;
    }

    dump_axis(&engine.state().x);
    dump_axis(&engine.state().y);
    Ok(())
}

fn dump_axis(state: &AxisState) {
    println!(
        "{} axis: range {:.3}, offset {:.3}, {} lines / {} sublines",
        state.orientation,
        state.range,
        state.offset,
        state.values.len(),
        state.subvalues.len()
    );
    for (value, label) in state.values.iter().zip(&state.labels) {
        match label {
            Some(text) => println!("  {value:>12.4}  {text}"),
            None => println!("  {value:>12.4}"),
        }
    }
}

/// Load a gesture trace CSV with `dx,dy,dz,x,y` columns.
fn load_trace(path: &str) -> Result<Vec<PointerEvent>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut events = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let field = |i: usize| -> f64 {
            record
                .get(i)
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(0.0)
        };
        events.push(PointerEvent {
            dx: field(0),
            dy: field(1),
            dz: field(2),
            x: field(3),
            y: field(4),
        });
    }
    if events.is_empty() {
        anyhow::bail!("no events loaded - check headers/delimiter.");
    }
    Ok(events)
}

/// A small pan/zoom session: drag right, drag up, zoom in at the left,
/// zoom back out at the lower right.
fn sample_trace() -> Vec<PointerEvent> {
    vec![
        PointerEvent {
            dx: 24.0,
            x: 400.0,
            y: 250.0,
            ..Default::default()
        },
        PointerEvent {
            dy: -12.0,
            x: 400.0,
            y: 250.0,
            ..Default::default()
        },
        PointerEvent {
            dz: -50.0,
            x: 200.0,
            y: 125.0,
            ..Default::default()
        },
        PointerEvent {
            dz: 120.0,
            x: 600.0,
            y: 400.0,
            ..Default::default()
        },
    ]
}
