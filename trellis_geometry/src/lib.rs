// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Geometry: procedural geometry for absolutely positioned surfaces.
//!
//! Trellis Geometry is the box model beneath a desktop-style widget toolkit.
//!
//! - [`Size`]: width and height, with validity predicates and arithmetic.
//! - [`Rect`]: origin plus extent, with every edge and corner readable and writable.
//! - [`ConstrainedBox`]: a [`Rect`] whose size always stays inside a `[minimum, maximum]`
//!   envelope, and which pushes every committed change to a [`Surface`].
//!
//! ## Edges hold their opposites
//!
//! Writing `left` moves the left edge and changes the width; the right edge stays where it was.
//! Writing `x` moves the whole box. The same holds for `top`/`y`, and for `right`/`bottom`
//! against `width`/`height`. Corners write two edges at once, each clamped by its own rule,
//! computed from the geometry as it was before the write.
//!
//! ## Surface synchronization
//!
//! A [`ConstrainedBox`] is bound to at most one [`Surface`] for its lifetime:
//! [`Surface::bind`] at construction, [`Surface::geometry_changed`] exactly once after every
//! committed write (never on reads), and [`Surface::unbind`] on [`ConstrainedBox::destroy`].
//! Each notification carries a [`GeometryChange`] describing the committed rectangle and the
//! canonical [`Fields`] that moved.
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange siblings, animate, or transform between displays.
//! Callers decide where things go; the box keeps each one inside its limits.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_geometry::{ConstrainedBox, Limits, Size, surface_fn};
//!
//! let limits = Limits::new(Size::new(50.0, 50.0), Size::new(200.0, 200.0)).unwrap();
//! let mut seen = 0;
//! let mut geometry = ConstrainedBox::with_limits(surface_fn(|_| seen += 1), limits);
//!
//! geometry.set_bottom_right(Point::new(500.0, 20.0)).unwrap();
//! assert_eq!(geometry.size(), Size::new(200.0, 50.0));
//! drop(geometry);
//! assert_eq!(seen, 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod constrained;
mod error;
mod rect;
mod size;
mod surface;

pub use constrained::{ConstrainedBox, Limits, MAX_ELEMENT_SIZE, MIN_ELEMENT_SIZE};
pub use error::{GeometryError, Result};
pub use rect::Rect;
pub use size::Size;
pub use surface::{Fields, GeometryChange, NullSurface, Surface, SurfaceFn, surface_fn};
