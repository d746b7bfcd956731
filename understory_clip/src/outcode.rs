// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region codes for points relative to a clip rectangle.

bitflags::bitflags! {
    /// Which of the four outer half-planes of a clip rectangle a point lies in.
    ///
    /// At most one bit per axis is ever set: a point cannot be both left and
    /// right, or both above and below. The empty set means the point is inside
    /// (edges included).
    ///
    /// `BOTTOM` and `TOP` follow the stored bounds, not screen orientation:
    /// `BOTTOM` means `y < y_min` and `TOP` means `y > y_max`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OutCode: u8 {
        /// `x < x_min`.
        const LEFT   = 0b0001;
        /// `x > x_max`.
        const RIGHT  = 0b0010;
        /// `y < y_min`.
        const BOTTOM = 0b0100;
        /// `y > y_max`.
        const TOP    = 0b1000;
    }
}

impl OutCode {
    /// No outside bits: the point is within the rectangle.
    pub const INSIDE: Self = Self::empty();

    /// Whether no outside bit is set.
    #[inline]
    pub const fn is_inside(self) -> bool {
        self.is_empty()
    }
}

impl Default for OutCode {
    fn default() -> Self {
        Self::INSIDE
    }
}

/// Classify `(x, y)` against the given bounds.
///
/// NaN compares false against every bound, so a NaN coordinate never sets a
/// bit on its axis.
#[inline(always)]
pub(crate) fn classify(x: f64, y: f64, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> OutCode {
    let mut code = OutCode::INSIDE;
    if x < x_min {
        code |= OutCode::LEFT;
    } else if x > x_max {
        code |= OutCode::RIGHT;
    }
    if y < y_min {
        code |= OutCode::BOTTOM;
    } else if y > y_max {
        code |= OutCode::TOP;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::{OutCode, classify};

    #[test]
    fn bit_assignment_is_fixed() {
        assert_eq!(OutCode::INSIDE.bits(), 0b0000);
        assert_eq!(OutCode::LEFT.bits(), 0b0001);
        assert_eq!(OutCode::RIGHT.bits(), 0b0010);
        assert_eq!(OutCode::BOTTOM.bits(), 0b0100);
        assert_eq!(OutCode::TOP.bits(), 0b1000);
    }

    #[test]
    fn nine_regions() {
        let c = |x, y| classify(x, y, 0.0, 10.0, 0.0, 10.0);
        assert_eq!(c(5.0, 5.0), OutCode::INSIDE);
        assert_eq!(c(-1.0, 5.0), OutCode::LEFT);
        assert_eq!(c(11.0, 5.0), OutCode::RIGHT);
        assert_eq!(c(5.0, -1.0), OutCode::BOTTOM);
        assert_eq!(c(5.0, 11.0), OutCode::TOP);
        assert_eq!(c(-1.0, -1.0), OutCode::LEFT | OutCode::BOTTOM);
        assert_eq!(c(11.0, -1.0), OutCode::RIGHT | OutCode::BOTTOM);
        assert_eq!(c(-1.0, 11.0), OutCode::LEFT | OutCode::TOP);
        assert_eq!(c(11.0, 11.0), OutCode::RIGHT | OutCode::TOP);
    }

    #[test]
    fn edges_are_inside() {
        let c = |x, y| classify(x, y, 0.0, 10.0, 0.0, 10.0);
        assert!(c(0.0, 0.0).is_inside());
        assert!(c(10.0, 10.0).is_inside());
        assert!(c(0.0, 10.0).is_inside());
        assert!(c(10.0, 3.0).is_inside());
    }

    #[test]
    fn nan_never_sets_a_bit_on_its_axis() {
        let c = |x, y| classify(x, y, 0.0, 10.0, 0.0, 10.0);
        assert_eq!(c(f64::NAN, 5.0), OutCode::INSIDE);
        assert_eq!(c(f64::NAN, 20.0), OutCode::TOP);
        assert_eq!(c(-3.0, f64::NAN), OutCode::LEFT);
        assert_eq!(c(f64::NAN, f64::NAN), OutCode::INSIDE);
    }

    #[test]
    fn inverted_bounds_still_set_one_bit_per_axis() {
        // x_min > x_max: every x is either left of x_min or right of x_max,
        // and the left test wins.
        let code = classify(5.0, 5.0, 10.0, 0.0, 0.0, 10.0);
        assert_eq!(code, OutCode::LEFT);
        let code = classify(20.0, 5.0, 10.0, 0.0, 0.0, 10.0);
        assert_eq!(code, OutCode::RIGHT);
    }
}
