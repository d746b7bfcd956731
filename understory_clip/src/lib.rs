// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_clip --heading-base-level=0

//! Understory Clip: restrict line segments to an axis-aligned viewport before drawing.
//!
//! A renderer projects its data into rendering space, then hands each segment to a
//! [`ClipRect`] built once for the current viewport. The clipper answers whether any
//! part of the segment is visible and, if so, which part, using the Cohen–Sutherland
//! algorithm.
//!
//! - [`ClipRect::clip_line`] clips one segment and returns a [`ClippedLine`].
//! - [`ClipRect::clip_polyline`] and [`ClipRect::clip_segments`] clip whole paths.
//! - [`ClipRect::is_inside`] is an inclusive point-in-rectangle test.
//! - [`ClipRect::outcode`] exposes the per-point region code ([`OutCode`]).
//!
//! Rendering-space geometry is [`kurbo::Point`] and [`kurbo::Line`]. The rectangle can
//! come from anything implementing [`ClipBounds`]; `kurbo::Rect` does out of the box.
//!
//! The crate also carries two small value types used on the data side of a plot:
//! [`DataPoint`], a point in data space that may be undefined, and [`Length`], a scalar
//! tagged with a [`LengthUnit`].
//!
//! ## Permissive by default
//!
//! [`ClipRect::new`] trusts its input. NaN coordinates are treated as inside on their
//! axis, and inverted rectangles clip deterministically but meaninglessly. Use
//! [`ClipRect::try_new`] to reject non-finite or inverted rectangles up front.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support in `kurbo`.
//! - `libm`: use `kurbo`'s `libm` backend for `no_std` builds.
//! - `tracing`: emit `tracing` events when a rectangle is rejected or not canonical,
//!   and when a polyline is clipped.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_clip::ClipRect;
//!
//! let clip = ClipRect::new(&Rect::new(0.0, 0.0, 10.0, 10.0));
//!
//! // Crosses two edges: both endpoints move onto the boundary.
//! let out = clip.clip_line(Point::new(-5.0, -5.0), Point::new(15.0, 15.0));
//! assert!(out.accepted);
//! assert_eq!(out.p0, Point::new(0.0, 0.0));
//! assert_eq!(out.p1, Point::new(10.0, 10.0));
//!
//! // Both endpoints left of the rectangle: rejected outright.
//! let out = clip.clip_line(Point::new(-5.0, 15.0), Point::new(-1.0, 20.0));
//! assert!(!out.accepted);
//!
//! assert!(clip.is_inside(Point::new(10.0, 0.0)));
//! ```

#![no_std]

extern crate alloc;

mod clip;
mod data;
mod error;
mod length;
mod log;
mod outcode;
mod rect;

pub use clip::ClippedLine;
pub use data::DataPoint;
pub use error::RectError;
pub use length::{Length, LengthUnit};
pub use outcode::OutCode;
pub use rect::{ClipBounds, ClipRect};
