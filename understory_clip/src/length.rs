// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lengths tagged with the extent they are measured against.

use core::hash::{Hash, Hasher};

/// What a [`Length`] value is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Units of the data space.
    Data,
    /// Absolute rendering-space units (device-independent pixels).
    Screen,
    /// Fraction of the whole viewport; `1.0` spans it.
    Viewport,
    /// Fraction of the content area inside the viewport; `1.0` spans it.
    ContentArea,
}

/// A scalar length paired with its unit.
///
/// This is a plain carrier: resolving it to rendering units is up to whoever
/// knows the extents involved. Equality and hashing compare the unit and the
/// bit pattern of the value.
#[derive(Clone, Copy, Debug)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Create a length.
    #[inline]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// A length in data-space units.
    pub const fn data(value: f64) -> Self {
        Self::new(value, LengthUnit::Data)
    }

    /// A length in rendering-space units.
    pub const fn screen(value: f64) -> Self {
        Self::new(value, LengthUnit::Screen)
    }

    /// A fraction of the viewport.
    pub const fn viewport(fraction: f64) -> Self {
        Self::new(fraction, LengthUnit::Viewport)
    }

    /// A fraction of the content area.
    pub const fn content_area(fraction: f64) -> Self {
        Self::new(fraction, LengthUnit::ContentArea)
    }

    /// The scalar value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit the value is expressed in.
    #[inline]
    pub const fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for Length {}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.value.to_bits().hash(state);
    }
}
