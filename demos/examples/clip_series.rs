// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip a projected data series to a plot's content area.
//!
//! This example shows the path a line series takes before it is drawn:
//! - project data points into rendering space, splitting at undefined points,
//! - inset the viewport by a relative margin to get the content area,
//! - clip every section against a single shared `ClipRect`, in parallel.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example clip_series`

use kurbo::Rect;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_clip::{ClipRect, DataPoint, Length};
use understory_demos::{Projection, clip_sections, resolve_length};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let viewport = Rect::new(0.0, 0.0, 640.0, 480.0);
    let margin = Length::viewport(0.05);

    // Data window is zoomed in so the wave overshoots the content area.
    let mut projection = Projection {
        data: Rect::new(0.0, -0.8, 20.0, 0.8),
        screen: viewport,
    };
    let inset = resolve_length(margin, viewport, viewport, &projection);
    let content = viewport.inset(-inset);
    projection.screen = content;

    let series: Vec<DataPoint> = (0..=200)
        .map(|i| {
            let x = f64::from(i) * 0.1;
            // A sensor dropout between x = 9 and x = 11.
            if (90..110).contains(&i) {
                DataPoint::UNDEFINED
            } else {
                DataPoint::new(x, x.sin())
            }
        })
        .collect();

    let sections = projection.project_series(&series);
    let clip = match ClipRect::try_new(&content) {
        Ok(clip) => clip,
        Err(err) => {
            eprintln!("bad content area: {err}");
            return;
        }
    };

    // The clip rect is `Copy + Sync`, so every worker can use it directly.
    let runs = clip_sections(clip, &sections);

    info!(sections = sections.len(), runs = runs.len(), "clipped series");
    for (i, run) in runs.iter().enumerate() {
        let first = run.first().copied().unwrap_or_default();
        let last = run.last().copied().unwrap_or_default();
        println!(
            "run {i}: {} points, ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            run.len(),
            first.x,
            first.y,
            last.x,
            last.y
        );
    }

    // A viewport whose corners arrive swapped is refused by `try_new`.
    let swapped = Rect::new(content.x1, content.y0, content.x0, content.y1);
    if let Err(err) = ClipRect::try_new(&swapped) {
        println!("swapped viewport rejected: {err}");
    }
}
