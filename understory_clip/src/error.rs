// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors for clip rectangles.

use thiserror::Error;

/// Reasons [`ClipRect::try_new`](crate::ClipRect::try_new) refuses a rectangle.
///
/// [`ClipRect::new`](crate::ClipRect::new) never checks these; it trusts the
/// caller and clips against whatever bounds it is given.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RectError {
    /// At least one edge is NaN or infinite.
    #[error("clip rectangle has a non-finite edge")]
    NonFinite,
    /// The left edge lies to the right of the right edge.
    #[error("clip rectangle is inverted horizontally (left {left} > right {right})")]
    InvertedX {
        /// Left edge as supplied.
        left: f64,
        /// Right edge as supplied.
        right: f64,
    },
    /// The top edge lies below the bottom edge.
    #[error("clip rectangle is inverted vertically (top {top} > bottom {bottom})")]
    InvertedY {
        /// Top edge as supplied.
        top: f64,
        /// Bottom edge as supplied.
        bottom: f64,
    },
}
