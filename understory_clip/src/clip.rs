// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cohen–Sutherland segment clipping.

use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::log;
use crate::outcode::OutCode;
use crate::rect::ClipRect;

/// Result of clipping one segment with [`ClipRect::clip_line`].
///
/// When `accepted` is true, `p0` and `p1` are the visible part of the segment,
/// in the original direction. When it is false the endpoints are whatever the
/// clipper had reached when it gave up and carry no meaning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClippedLine {
    /// Whether any part of the segment is visible.
    pub accepted: bool,
    /// Start of the clipped segment.
    pub p0: Point,
    /// End of the clipped segment.
    pub p1: Point,
}

impl ClippedLine {
    /// The visible segment, if any.
    pub fn line(&self) -> Option<Line> {
        self.accepted.then(|| Line::new(self.p0, self.p1))
    }
}

impl ClipRect {
    /// Clip the segment `p0 → p1` to these bounds.
    ///
    /// Both endpoints are classified with [`ClipRect::outcode`]. If both are
    /// inside the segment is returned untouched; if both share an outside
    /// half-plane it is rejected untouched. Otherwise one outside endpoint at a
    /// time is moved onto a violated edge and reclassified, until one of the
    /// two trivial cases holds.
    ///
    /// Edges are tried in the fixed order top, bottom, right, left, and only
    /// the first violated one is used per step. A corner point is therefore
    /// moved onto one edge and then again onto the other, rather than
    /// intersected with both at once. The moved coordinate is set to the bound
    /// exactly; the other one is interpolated along the current segment.
    ///
    /// No input is rejected up front. NaN coordinates classify as inside on
    /// their axis. The division by `dx` or `dy` is unguarded, so degenerate
    /// input (for example an inverted rectangle) can yield infinite or NaN
    /// endpoints; for finite points and a canonical rectangle it cannot,
    /// because an endpoint outside an edge forces the other endpoint onto the
    /// far side of that edge before the division happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo::{Point, Rect};
    /// use understory_clip::ClipRect;
    ///
    /// let clip = ClipRect::new(&Rect::new(0.0, 0.0, 10.0, 10.0));
    /// let out = clip.clip_line(Point::new(-5.0, 5.0), Point::new(5.0, 5.0));
    /// assert!(out.accepted);
    /// assert_eq!(out.p0, Point::new(0.0, 5.0));
    /// assert_eq!(out.p1, Point::new(5.0, 5.0));
    /// ```
    pub fn clip_line(&self, p0: Point, p1: Point) -> ClippedLine {
        let (mut p0, mut p1) = (p0, p1);
        let mut code0 = self.code(p0.x, p0.y);
        let mut code1 = self.code(p1.x, p1.y);

        loop {
            if (code0 | code1).is_inside() {
                return ClippedLine {
                    accepted: true,
                    p0,
                    p1,
                };
            }
            if code0.intersects(code1) {
                return ClippedLine {
                    accepted: false,
                    p0,
                    p1,
                };
            }

            let out = if code0.is_inside() { code1 } else { code0 };
            let dx = p1.x - p0.x;
            let dy = p1.y - p0.y;

            let moved = if out.contains(OutCode::TOP) {
                Point::new(p0.x + dx * (self.y_max() - p0.y) / dy, self.y_max())
            } else if out.contains(OutCode::BOTTOM) {
                Point::new(p0.x + dx * (self.y_min() - p0.y) / dy, self.y_min())
            } else if out.contains(OutCode::RIGHT) {
                Point::new(self.x_max(), p0.y + dy * (self.x_max() - p0.x) / dx)
            } else {
                Point::new(self.x_min(), p0.y + dy * (self.x_min() - p0.x) / dx)
            };

            if code0.is_inside() {
                p1 = moved;
                code1 = self.code(p1.x, p1.y);
            } else {
                p0 = moved;
                code0 = self.code(p0.x, p0.y);
            }
        }
    }

    /// Clip `line` and return the visible part, if any.
    pub fn clip(&self, line: Line) -> Option<Line> {
        self.clip_line(line.p0, line.p1).line()
    }

    /// Visible pieces of each consecutive segment of a polyline.
    ///
    /// Segments that are entirely outside are skipped. Pieces are yielded in
    /// path order; use [`ClipRect::clip_polyline`] to join them into runs.
    pub fn clip_segments<'a>(&'a self, points: &'a [Point]) -> impl Iterator<Item = Line> + 'a {
        points
            .windows(2)
            .filter_map(move |pair| self.clip_line(pair[0], pair[1]).line())
    }

    /// Clip a polyline into its visible runs.
    ///
    /// Each run is a connected polyline lying inside the bounds. A new run
    /// starts whenever the path leaves the rectangle and comes back, or a
    /// segment is dropped entirely. Fewer than two points produce no runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo::{Point, Rect};
    /// use understory_clip::ClipRect;
    ///
    /// let clip = ClipRect::new(&Rect::new(0.0, 0.0, 10.0, 10.0));
    /// let path = [
    ///     Point::new(-5.0, 5.0),
    ///     Point::new(5.0, 5.0),
    ///     Point::new(15.0, 5.0),
    ///     Point::new(15.0, 8.0),
    ///     Point::new(5.0, 8.0),
    /// ];
    /// let runs = clip.clip_polyline(&path);
    /// assert_eq!(runs.len(), 2);
    /// assert_eq!(runs[0], [Point::new(0.0, 5.0), Point::new(5.0, 5.0), Point::new(10.0, 5.0)]);
    /// assert_eq!(runs[1], [Point::new(10.0, 8.0), Point::new(5.0, 8.0)]);
    /// ```
    pub fn clip_polyline(&self, points: &[Point]) -> Vec<Vec<Point>> {
        let mut runs = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for line in self.clip_segments(points) {
            if !current.is_empty() && current.last() != Some(&line.p0) {
                runs.push(core::mem::take(&mut current));
            }
            if current.is_empty() {
                current.push(line.p0);
            }
            current.push(line.p1);
        }
        if !current.is_empty() {
            runs.push(current);
        }
        log::trace!(
            points = points.len(),
            runs = runs.len(),
            "clipped polyline"
        );
        runs
    }
}
