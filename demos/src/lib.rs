// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Understory Clip demos.
//!
//! Stands in for the parts of a plotting pipeline that sit around the clipper:
//! projecting data into rendering space and resolving lengths against the
//! viewport.

use std::{panic, thread};

use kurbo::{Point, Rect};
use understory_clip::{ClipRect, DataPoint, Length, LengthUnit};

/// Linear map from a data-space window onto a rendering-space rectangle.
///
/// Data y grows upwards; rendering y grows downwards.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    /// Visible data window, `x0..x1` by `y0..y1`.
    pub data: Rect,
    /// Target area in rendering space.
    pub screen: Rect,
}

impl Projection {
    /// Rendering units per data unit along x.
    pub fn scale_x(&self) -> f64 {
        self.screen.width() / self.data.width()
    }

    /// Project a single data point. Undefined points project to NaN.
    pub fn project(&self, p: DataPoint) -> Point {
        let tx = (p.x() - self.data.x0) / self.data.width();
        let ty = (p.y() - self.data.y0) / self.data.height();
        Point::new(
            self.screen.x0 + tx * self.screen.width(),
            self.screen.y1 - ty * self.screen.height(),
        )
    }

    /// Project a series, starting a new section at every undefined point.
    pub fn project_series(&self, series: &[DataPoint]) -> Vec<Vec<Point>> {
        series
            .split(|p| !p.is_defined())
            .filter(|section| !section.is_empty())
            .map(|section| section.iter().map(|&p| self.project(p)).collect())
            .collect()
    }
}

/// Resolve `length` to rendering units.
pub fn resolve_length(length: Length, viewport: Rect, content: Rect, projection: &Projection) -> f64 {
    match length.unit() {
        LengthUnit::Data => length.value() * projection.scale_x(),
        LengthUnit::Screen => length.value(),
        LengthUnit::Viewport => length.value() * viewport.width().min(viewport.height()),
        LengthUnit::ContentArea => length.value() * content.width().min(content.height()),
    }
}

/// Clip every section on its own scoped thread and gather the runs in order.
///
/// A panic in any worker is re-raised on the calling thread.
pub fn clip_sections(clip: ClipRect, sections: &[Vec<Point>]) -> Vec<Vec<Point>> {
    thread::scope(|s| {
        let workers: Vec<_> = sections
            .iter()
            .map(|section| s.spawn(move || clip.clip_polyline(section)))
            .collect();
        workers
            .into_iter()
            .flat_map(|w| w.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}
