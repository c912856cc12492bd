// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The synchronization contract between a [`ConstrainedBox`](crate::ConstrainedBox)
//! and the visual surface it positions.

use alloc::boxed::Box;

use crate::rect::Rect;

bitflags::bitflags! {
    /// Canonical rectangle fields touched by a geometry write.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Fields: u8 {
        /// The left edge moved.
        const X      = 0b0000_0001;
        /// The top edge moved.
        const Y      = 0b0000_0010;
        /// The width changed.
        const WIDTH  = 0b0000_0100;
        /// The height changed.
        const HEIGHT = 0b0000_1000;
        /// The origin moved.
        const POSITION = Self::X.bits() | Self::Y.bits();
        /// The extent changed.
        const SIZE = Self::WIDTH.bits() | Self::HEIGHT.bits();
    }
}

impl Fields {
    /// The fields whose values differ between `old` and `new`.
    pub fn between(old: &Rect, new: &Rect) -> Self {
        let mut fields = Self::empty();
        fields.set(Self::X, old.x != new.x);
        fields.set(Self::Y, old.y != new.y);
        fields.set(Self::WIDTH, old.width != new.width);
        fields.set(Self::HEIGHT, old.height != new.height);
        fields
    }
}

/// A committed geometry write, as delivered to a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryChange {
    /// The rectangle after the write.
    pub rect: Rect,
    /// The canonical fields that differ from the rectangle before the write.
    ///
    /// Empty when the write resolved to the geometry the box already had;
    /// the surface is notified anyway.
    pub changed: Fields,
}

/// A visual surface that mirrors a box's geometry.
///
/// The renderer owns the translation from these numbers to on-screen placement;
/// the box makes no assumption about units.
pub trait Surface {
    /// Called once when the box is constructed, with its initial geometry.
    fn bind(&mut self, rect: Rect) {
        let _ = rect;
    }

    /// Called exactly once after every committed geometry write.
    fn geometry_changed(&mut self, change: GeometryChange);

    /// Called once when the box is destroyed. No further calls follow.
    fn unbind(&mut self) {}
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn bind(&mut self, rect: Rect) {
        (**self).bind(rect);
    }

    fn geometry_changed(&mut self, change: GeometryChange) {
        (**self).geometry_changed(change);
    }

    fn unbind(&mut self) {
        (**self).unbind();
    }
}

/// A surface that ignores every notification.
///
/// This is the surface type of boxes built with
/// [`ConstrainedBox::detached`](crate::ConstrainedBox::detached).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn geometry_changed(&mut self, _change: GeometryChange) {}
}

/// A [`Surface`] that forwards geometry changes to a closure.
///
/// Created with [`surface_fn`].
pub struct SurfaceFn<F> {
    f: F,
}

impl<F> core::fmt::Debug for SurfaceFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SurfaceFn").finish_non_exhaustive()
    }
}

impl<F: FnMut(GeometryChange)> Surface for SurfaceFn<F> {
    fn geometry_changed(&mut self, change: GeometryChange) {
        (self.f)(change);
    }
}

/// Wrap a closure as a [`Surface`].
///
/// ```rust
/// use trellis_geometry::{ConstrainedBox, surface_fn};
///
/// let mut widths = Vec::new();
/// let mut geometry = ConstrainedBox::new(surface_fn(|c| widths.push(c.rect.width)));
/// geometry.set_width(40.0).unwrap();
/// geometry.set_width(1e9).unwrap();
/// drop(geometry);
/// assert_eq!(widths, [40.0, 65535.0]);
/// ```
pub fn surface_fn<F: FnMut(GeometryChange)>(f: F) -> SurfaceFn<F> {
    SurfaceFn { f }
}
