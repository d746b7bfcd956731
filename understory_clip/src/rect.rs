// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The clip rectangle and its containment test.

use kurbo::{Point, Rect};

use crate::error::RectError;
use crate::log;
use crate::outcode::{OutCode, classify};

/// A rectangle described by its four edges in rendering space.
///
/// `top` is the smaller y and `bottom` the larger y, as on a y-down drawing
/// surface. Implementations report the edges as stored; they should not
/// normalize them.
pub trait ClipBounds {
    /// The x coordinate of the left edge.
    fn left(&self) -> f64;
    /// The x coordinate of the right edge.
    fn right(&self) -> f64;
    /// The y coordinate of the top edge.
    fn top(&self) -> f64;
    /// The y coordinate of the bottom edge.
    fn bottom(&self) -> f64;
}

/// Uses the raw corner fields, so an inverted `Rect` stays inverted.
impl ClipBounds for Rect {
    #[inline]
    fn left(&self) -> f64 {
        self.x0
    }

    #[inline]
    fn right(&self) -> f64 {
        self.x1
    }

    #[inline]
    fn top(&self) -> f64 {
        self.y0
    }

    #[inline]
    fn bottom(&self) -> f64 {
        self.y1
    }
}

/// Resolved bounds of an axis-aligned clip region.
///
/// Build one per viewport and reuse it for every segment drawn into that
/// viewport; rebuild it when the viewport changes. The value is immutable and
/// `Copy`, so it can be shared across threads freely.
///
/// Bounds are stored as `x_min = left`, `x_max = right`, `y_min = top`,
/// `y_max = bottom`. [`ClipRect::new`] does not check that they are ordered;
/// use [`ClipRect::try_new`] when the input is not known to be canonical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ClipRect {
    /// Resolve the bounds of `rect` without validating them.
    ///
    /// Inverted or non-finite edges are accepted; clipping against them is
    /// deterministic but geometrically meaningless.
    pub fn new<R: ClipBounds + ?Sized>(rect: &R) -> Self {
        let clip = Self::resolve(rect);
        #[cfg(feature = "tracing")]
        if clip.validate().is_err() {
            log::debug!(rect = ?clip, "clipping against a non-canonical rectangle");
        }
        clip
    }

    /// Resolve the bounds of `rect`, rejecting non-finite or inverted edges.
    ///
    /// Degenerate rectangles (zero width or height) are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo::Rect;
    /// use understory_clip::{ClipRect, RectError};
    ///
    /// assert!(ClipRect::try_new(&Rect::new(0.0, 0.0, 10.0, 5.0)).is_ok());
    /// assert_eq!(
    ///     ClipRect::try_new(&Rect::new(10.0, 0.0, 0.0, 5.0)),
    ///     Err(RectError::InvertedX { left: 10.0, right: 0.0 }),
    /// );
    /// ```
    pub fn try_new<R: ClipBounds + ?Sized>(rect: &R) -> Result<Self, RectError> {
        let clip = Self::resolve(rect);
        if let Err(err) = clip.validate() {
            log::debug!(rect = ?clip, "rejected clip rectangle");
            return Err(err);
        }
        Ok(clip)
    }

    fn resolve<R: ClipBounds + ?Sized>(rect: &R) -> Self {
        Self {
            x_min: rect.left(),
            x_max: rect.right(),
            y_min: rect.top(),
            y_max: rect.bottom(),
        }
    }

    fn validate(&self) -> Result<(), RectError> {
        let finite = self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite();
        if !finite {
            return Err(RectError::NonFinite);
        }
        if self.x_min > self.x_max {
            return Err(RectError::InvertedX {
                left: self.x_min,
                right: self.x_max,
            });
        }
        if self.y_min > self.y_max {
            return Err(RectError::InvertedY {
                top: self.y_min,
                bottom: self.y_max,
            });
        }
        Ok(())
    }

    /// The left bound.
    #[inline]
    pub const fn x_min(&self) -> f64 {
        self.x_min
    }

    /// The right bound.
    #[inline]
    pub const fn x_max(&self) -> f64 {
        self.x_max
    }

    /// The top bound (smallest y).
    #[inline]
    pub const fn y_min(&self) -> f64 {
        self.y_min
    }

    /// The bottom bound (largest y).
    #[inline]
    pub const fn y_max(&self) -> f64 {
        self.y_max
    }

    /// The bounds as a `kurbo::Rect`, corners as stored.
    pub const fn to_rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    /// Region code of `pt` against these bounds.
    #[inline]
    pub fn outcode(&self, pt: Point) -> OutCode {
        self.code(pt.x, pt.y)
    }

    #[inline(always)]
    pub(crate) fn code(&self, x: f64, y: f64) -> OutCode {
        classify(x, y, self.x_min, self.x_max, self.y_min, self.y_max)
    }

    /// Whether `pt` lies within the bounds, edges included.
    ///
    /// A NaN coordinate never fails its axis test, so it counts as inside on
    /// that axis.
    pub fn is_inside(&self, pt: Point) -> bool {
        if pt.x < self.x_min || pt.x > self.x_max {
            return false;
        }
        if pt.y < self.y_min || pt.y > self.y_max {
            return false;
        }
        true
    }
}

impl From<Rect> for ClipRect {
    fn from(rect: Rect) -> Self {
        Self::new(&rect)
    }
}
