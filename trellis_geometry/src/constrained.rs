// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The constrained box: a rectangle whose size stays within `[minimum, maximum]`.

use kurbo::Point;
use tracing::{debug, trace};

use crate::error::{Result, finite};
use crate::rect::Rect;
use crate::size::Size;
use crate::surface::{Fields, GeometryChange, NullSurface, Surface};

/// The absolute minimum allowed element size.
pub const MIN_ELEMENT_SIZE: Size = Size::new(0.0, 0.0);

/// The absolute maximum allowed element size.
///
/// This is the largest extent a surface's positioning unit can represent.
pub const MAX_ELEMENT_SIZE: Size = Size::new(65535.0, 65535.0);

/// Size bounds for a [`ConstrainedBox`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    minimum: Size,
    maximum: Size,
}

impl Limits {
    /// Create limits from a minimum and a maximum size.
    ///
    /// Both sizes must be finite. A minimum larger than the maximum is
    /// accepted; clamping then resolves to the maximum.
    pub fn new(minimum: Size, maximum: Size) -> Result<Self> {
        Ok(Self {
            minimum: finite_size("minimum_size", minimum)?,
            maximum: finite_size("maximum_size", maximum)?,
        })
    }

    /// The smallest allowed size.
    pub fn minimum(&self) -> Size {
        self.minimum
    }

    /// The largest allowed size.
    pub fn maximum(&self) -> Size {
        self.maximum
    }

    fn clamp_width(&self, width: f64) -> f64 {
        clamp(width, self.minimum.width, self.maximum.width)
    }

    fn clamp_height(&self, height: f64) -> f64 {
        clamp(height, self.minimum.height, self.maximum.height)
    }
}

impl Default for Limits {
    /// [`MIN_ELEMENT_SIZE`] to [`MAX_ELEMENT_SIZE`].
    fn default() -> Self {
        Self {
            minimum: MIN_ELEMENT_SIZE,
            maximum: MAX_ELEMENT_SIZE,
        }
    }
}

/// Procedural geometry for an absolutely positioned surface.
///
/// A `ConstrainedBox` owns a [`Rect`] and a pair of size [`Limits`]. Every
/// setter clamps its input so the width and height stay within the limits,
/// commits the result, and then notifies the bound [`Surface`] exactly once.
/// Getters never notify.
///
/// Edge setters hold the opposite edge: [`set_left`](Self::set_left) changes
/// the width and leaves the right edge alone, while [`set_x`](Self::set_x)
/// moves the whole box. Corner, size, and rect setters compute every new value
/// from the geometry as it was before the write, so the result does not depend
/// on which edge is considered first.
///
/// Changing the limits does not re-clamp the current geometry; call
/// [`clamp_to_limits`](Self::clamp_to_limits) for that.
///
/// After [`destroy`](Self::destroy) the surface is released. Setters keep
/// working on the internal rectangle, but nothing is notified.
///
/// ## Example
///
/// ```rust
/// use trellis_geometry::{ConstrainedBox, Limits, Rect, Size};
///
/// let limits = Limits::new(Size::new(50.0, 50.0), Size::new(200.0, 200.0)).unwrap();
/// let mut geometry = ConstrainedBox::detached_with_limits(limits);
/// geometry.set_rect(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
///
/// // The right edge stays put, and the width is capped at the maximum.
/// geometry.set_left(-1000.0).unwrap();
/// assert_eq!(geometry.left(), -100.0);
/// assert_eq!(geometry.width(), 200.0);
/// assert_eq!(geometry.right(), 100.0);
/// ```
#[derive(Debug)]
pub struct ConstrainedBox<S: Surface = NullSurface> {
    rect: Rect,
    limits: Limits,
    surface: Option<S>,
    destroyed: bool,
}

impl ConstrainedBox {
    /// Create a box that is not bound to any surface.
    pub fn detached() -> Self {
        Self::build(None, Limits::default())
    }

    /// Create a box with the given limits that is not bound to any surface.
    pub fn detached_with_limits(limits: Limits) -> Self {
        Self::build(None, limits)
    }
}

impl Default for ConstrainedBox {
    fn default() -> Self {
        Self::detached()
    }
}

impl<S: Surface> ConstrainedBox<S> {
    /// Create a box bound to `surface`, using the default limits.
    pub fn new(surface: S) -> Self {
        Self::build(Some(surface), Limits::default())
    }

    /// Create a box bound to `surface`, using the given limits.
    pub fn with_limits(surface: S, limits: Limits) -> Self {
        Self::build(Some(surface), limits)
    }

    fn build(mut surface: Option<S>, limits: Limits) -> Self {
        let rect = Rect::new(0.0, 0.0, limits.clamp_width(0.0), limits.clamp_height(0.0));
        if let Some(surface) = surface.as_mut() {
            surface.bind(rect);
        }
        Self {
            rect,
            limits,
            surface,
            destroyed: false,
        }
    }

    /// Release the surface.
    ///
    /// The surface is unbound and handed back to the caller. Calling this
    /// again returns `None`.
    ///
    /// Setters keep working afterwards: they still update the rectangle, and
    /// getters report the new values, but no surface is notified.
    pub fn destroy(&mut self) -> Option<S> {
        self.destroyed = true;
        let mut surface = self.surface.take()?;
        surface.unbind();
        debug!(rect = ?self.rect, "constrained box destroyed");
        Some(surface)
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The bound surface, if any.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// The left edge. This is equivalent to `x`.
    pub fn left(&self) -> f64 {
        self.rect.left()
    }

    /// Move the left edge, changing the width but not the right edge.
    ///
    /// The edge is clamped to `[right - max_width, right - min_width]`.
    pub fn set_left(&mut self, left: f64) -> Result<()> {
        let left = finite("left", left)?;
        let mut rect = self.rect;
        rect.set_left(self.clamp_left(left));
        self.commit(rect);
        Ok(())
    }

    /// The top edge. This is equivalent to `y`.
    pub fn top(&self) -> f64 {
        self.rect.top()
    }

    /// Move the top edge, changing the height but not the bottom edge.
    ///
    /// The edge is clamped to `[bottom - max_height, bottom - min_height]`.
    pub fn set_top(&mut self, top: f64) -> Result<()> {
        let top = finite("top", top)?;
        let mut rect = self.rect;
        rect.set_top(self.clamp_top(top));
        self.commit(rect);
        Ok(())
    }

    /// The right edge, `left + width`.
    pub fn right(&self) -> f64 {
        self.rect.right()
    }

    /// Move the right edge, changing the width but not the left edge.
    ///
    /// The edge is clamped to `[left + min_width, left + max_width]`.
    pub fn set_right(&mut self, right: f64) -> Result<()> {
        let right = finite("right", right)?;
        let mut rect = self.rect;
        rect.set_right(self.clamp_right(right));
        self.commit(rect);
        Ok(())
    }

    /// The bottom edge, `top + height`.
    pub fn bottom(&self) -> f64 {
        self.rect.bottom()
    }

    /// Move the bottom edge, changing the height but not the top edge.
    ///
    /// The edge is clamped to `[top + min_height, top + max_height]`.
    pub fn set_bottom(&mut self, bottom: f64) -> Result<()> {
        let bottom = finite("bottom", bottom)?;
        let mut rect = self.rect;
        rect.set_bottom(self.clamp_bottom(bottom));
        self.commit(rect);
        Ok(())
    }

    /// The horizontal position. This is equivalent to `left`.
    pub fn x(&self) -> f64 {
        self.rect.x
    }

    /// Move the box horizontally without changing its size.
    pub fn set_x(&mut self, x: f64) -> Result<()> {
        let x = finite("x", x)?;
        let mut rect = self.rect;
        rect.set_x(x);
        self.commit(rect);
        Ok(())
    }

    /// The vertical position. This is equivalent to `top`.
    pub fn y(&self) -> f64 {
        self.rect.y
    }

    /// Move the box vertically without changing its size.
    pub fn set_y(&mut self, y: f64) -> Result<()> {
        let y = finite("y", y)?;
        let mut rect = self.rect;
        rect.set_y(y);
        self.commit(rect);
        Ok(())
    }

    /// The width, `right - left`.
    pub fn width(&self) -> f64 {
        self.rect.width
    }

    /// Change the width, moving the right edge. Clamped to the width limits.
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        let width = finite("width", width)?;
        let mut rect = self.rect;
        rect.set_width(self.limits.clamp_width(width));
        self.commit(rect);
        Ok(())
    }

    /// The height, `bottom - top`.
    pub fn height(&self) -> f64 {
        self.rect.height
    }

    /// Change the height, moving the bottom edge. Clamped to the height limits.
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        let height = finite("height", height)?;
        let mut rect = self.rect;
        rect.set_height(self.limits.clamp_height(height));
        self.commit(rect);
        Ok(())
    }

    /// The top-left corner.
    pub fn top_left(&self) -> Point {
        self.rect.top_left()
    }

    /// Move the top-left corner, changing the width and height.
    pub fn set_top_left(&mut self, point: Point) -> Result<()> {
        let point = finite_point("top_left", point)?;
        let corner = Point::new(self.clamp_left(point.x), self.clamp_top(point.y));
        let mut rect = self.rect;
        rect.set_top_left(corner);
        self.commit(rect);
        Ok(())
    }

    /// The top-right corner.
    pub fn top_right(&self) -> Point {
        self.rect.top_right()
    }

    /// Move the top-right corner, changing the width and height.
    pub fn set_top_right(&mut self, point: Point) -> Result<()> {
        let point = finite_point("top_right", point)?;
        let corner = Point::new(self.clamp_right(point.x), self.clamp_top(point.y));
        let mut rect = self.rect;
        rect.set_top_right(corner);
        self.commit(rect);
        Ok(())
    }

    /// The bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        self.rect.bottom_left()
    }

    /// Move the bottom-left corner, changing the width and height.
    pub fn set_bottom_left(&mut self, point: Point) -> Result<()> {
        let point = finite_point("bottom_left", point)?;
        let corner = Point::new(self.clamp_left(point.x), self.clamp_bottom(point.y));
        let mut rect = self.rect;
        rect.set_bottom_left(corner);
        self.commit(rect);
        Ok(())
    }

    /// The bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        self.rect.bottom_right()
    }

    /// Move the bottom-right corner, changing the width and height.
    pub fn set_bottom_right(&mut self, point: Point) -> Result<()> {
        let point = finite_point("bottom_right", point)?;
        let corner = Point::new(self.clamp_right(point.x), self.clamp_bottom(point.y));
        let mut rect = self.rect;
        rect.set_bottom_right(corner);
        self.commit(rect);
        Ok(())
    }

    /// The origin. This is equivalent to `top_left`.
    pub fn pos(&self) -> Point {
        self.rect.pos()
    }

    /// Move the box without changing its size.
    pub fn set_pos(&mut self, pos: Point) -> Result<()> {
        let pos = finite_point("pos", pos)?;
        let mut rect = self.rect;
        rect.set_pos(pos);
        self.commit(rect);
        Ok(())
    }

    /// The width and height.
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Resize the box, moving the right and bottom edges.
    ///
    /// Each dimension is clamped to its limits independently.
    pub fn set_size(&mut self, size: Size) -> Result<()> {
        let size = finite_size("size", size)?;
        let mut rect = self.rect;
        rect.set_size(self.clamp_size(size));
        self.commit(rect);
        Ok(())
    }

    /// The position and size.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replace the position and size.
    ///
    /// The position is taken as given; the size is clamped as in
    /// [`set_size`](Self::set_size).
    pub fn set_rect(&mut self, rect: Rect) -> Result<()> {
        finite_point("rect", rect.pos())?;
        finite_size("rect", rect.size())?;
        let size = self.clamp_size(rect.size());
        self.commit(Rect::new(rect.x, rect.y, size.width, size.height));
        Ok(())
    }

    /// The current size limits.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// The minimum allowed size.
    pub fn minimum_size(&self) -> Size {
        self.limits.minimum
    }

    /// Replace the minimum allowed size.
    ///
    /// The current geometry is left as it is, even if it is now smaller than
    /// the minimum, and the surface is not notified.
    pub fn set_minimum_size(&mut self, size: Size) -> Result<()> {
        self.limits.minimum = finite_size("minimum_size", size)?;
        trace!(minimum = ?self.limits.minimum, "minimum size replaced");
        Ok(())
    }

    /// The maximum allowed size.
    pub fn maximum_size(&self) -> Size {
        self.limits.maximum
    }

    /// Replace the maximum allowed size.
    ///
    /// The current geometry is left as it is, even if it is now larger than
    /// the maximum, and the surface is not notified.
    pub fn set_maximum_size(&mut self, size: Size) -> Result<()> {
        self.limits.maximum = finite_size("maximum_size", size)?;
        trace!(maximum = ?self.limits.maximum, "maximum size replaced");
        Ok(())
    }

    /// Replace both limits at once. Like the individual setters, this does
    /// not re-clamp the current geometry.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
        trace!(?limits, "limits replaced");
    }

    /// Clamp the current size to the current limits, keeping the left and top
    /// edges in place, and notify the surface.
    pub fn clamp_to_limits(&mut self) {
        let mut rect = self.rect;
        rect.set_size(self.clamp_size(rect.size()));
        self.commit(rect);
    }

    fn clamp_left(&self, left: f64) -> f64 {
        let right = self.rect.right();
        clamp(
            left,
            right - self.limits.maximum.width,
            right - self.limits.minimum.width,
        )
    }

    fn clamp_top(&self, top: f64) -> f64 {
        let bottom = self.rect.bottom();
        clamp(
            top,
            bottom - self.limits.maximum.height,
            bottom - self.limits.minimum.height,
        )
    }

    fn clamp_right(&self, right: f64) -> f64 {
        let left = self.rect.left();
        clamp(
            right,
            left + self.limits.minimum.width,
            left + self.limits.maximum.width,
        )
    }

    fn clamp_bottom(&self, bottom: f64) -> f64 {
        let top = self.rect.top();
        clamp(
            bottom,
            top + self.limits.minimum.height,
            top + self.limits.maximum.height,
        )
    }

    fn clamp_size(&self, size: Size) -> Size {
        Size::new(
            self.limits.clamp_width(size.width),
            self.limits.clamp_height(size.height),
        )
    }

    /// Store `rect` and notify the surface once.
    fn commit(&mut self, rect: Rect) {
        let changed = Fields::between(&self.rect, &rect);
        self.rect = rect;
        trace!(?rect, ?changed, destroyed = self.destroyed, "geometry committed");
        if let Some(surface) = self.surface.as_mut() {
            surface.geometry_changed(GeometryChange { rect, changed });
        }
    }
}

/// `min(max(value, lower), upper)`; the upper bound wins if the bounds cross.
#[inline]
fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

fn finite_point(field: &'static str, p: Point) -> Result<Point> {
    finite(field, p.x)?;
    finite(field, p.y)?;
    Ok(p)
}

fn finite_size(field: &'static str, s: Size) -> Result<Size> {
    finite(field, s.width)?;
    finite(field, s.height)?;
    Ok(s)
}
