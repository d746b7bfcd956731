// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points in data space.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A point in the native value space of a dataset.
///
/// Data points are projected into rendering space by a transform stage before
/// they reach a [`ClipRect`](crate::ClipRect); the two spaces are never mixed.
/// A point with a NaN coordinate is *undefined* and marks a gap in a series.
///
/// Equality and hashing compare the bit patterns of both coordinates, so
/// [`DataPoint::UNDEFINED`] equals itself and `0.0` differs from `-0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataPoint {
    x: f64,
    y: f64,
}

impl DataPoint {
    /// The undefined point: both coordinates are NaN.
    pub const UNDEFINED: Self = Self::new(f64::NAN, f64::NAN);

    /// Create a data point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The x value.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y value.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Whether neither coordinate is NaN.
    ///
    /// Infinite coordinates count as defined.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

impl PartialEq for DataPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for DataPoint {}

impl Hash for DataPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for DataPoint {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
