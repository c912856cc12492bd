// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-dimensional magnitudes.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A width and a height, without a location.
///
/// Unlike [`kurbo::Size`], the default value is the [`Size::UNSET`] sentinel
/// rather than zero, so "no size has been given yet" is distinguishable from
/// an explicit empty size. Negative components only ever appear through that
/// sentinel or through arithmetic on it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The "unset" sentinel, `(-1, -1)`.
    pub const UNSET: Self = Self::new(-1.0, -1.0);

    /// A size with zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns `true` if both dimensions are zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns `true` if both dimensions are non-negative.
    ///
    /// [`Size::UNSET`] is not valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Returns `true` if both dimensions are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// The component-wise minimum of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn bounded_to(self, other: Self) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// The component-wise maximum of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn expanded_to(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Swap width and height in place.
    #[inline]
    pub fn transpose(&mut self) {
        core::mem::swap(&mut self.width, &mut self.height);
    }

    /// A copy with width and height swapped.
    #[inline]
    #[must_use]
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl Default for Size {
    /// Returns [`Size::UNSET`].
    fn default() -> Self {
        Self::UNSET
    }
}

impl Add for Size {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.width + other.width, self.height + other.height)
    }
}

impl AddAssign for Size {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.width += other.width;
        self.height += other.height;
    }
}

impl Sub for Size {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.width - other.width, self.height - other.height)
    }
}

impl SubAssign for Size {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.width -= other.width;
        self.height -= other.height;
    }
}

impl Mul<f64> for Size {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl MulAssign<f64> for Size {
    #[inline]
    fn mul_assign(&mut self, factor: f64) {
        self.width *= factor;
        self.height *= factor;
    }
}

/// Division floors each component, so sizes stay on whole units.
impl Div<f64> for Size {
    type Output = Self;

    #[inline]
    fn div(self, factor: f64) -> Self {
        Self::new(
            (self.width / factor).floor(),
            (self.height / factor).floor(),
        )
    }
}

impl DivAssign<f64> for Size {
    #[inline]
    fn div_assign(&mut self, factor: f64) {
        *self = *self / factor;
    }
}

impl From<kurbo::Size> for Size {
    #[inline]
    fn from(s: kurbo::Size) -> Self {
        Self::new(s.width, s.height)
    }
}

impl From<Size> for kurbo::Size {
    #[inline]
    fn from(s: Size) -> Self {
        Self::new(s.width, s.height)
    }
}

impl From<(f64, f64)> for Size {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self::new(v.0, v.1)
    }
}
