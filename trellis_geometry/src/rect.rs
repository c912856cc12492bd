// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangles with independently settable edges.

use kurbo::Point;

use crate::size::Size;

/// An axis-aligned rectangle stored as origin plus extent.
///
/// The canonical fields are `x`, `y`, `width` and `height`. Every edge,
/// corner and pair accessor is derived from them. Setting an edge holds the
/// *opposite* edge fixed:
///
/// | setter | changes | holds |
/// |---|---|---|
/// | [`set_left`](Self::set_left) | `x`, `width` | right |
/// | [`set_top`](Self::set_top) | `y`, `height` | bottom |
/// | [`set_right`](Self::set_right) | `width` | left |
/// | [`set_bottom`](Self::set_bottom) | `height` | top |
/// | [`set_x`](Self::set_x) / [`set_y`](Self::set_y) / [`set_pos`](Self::set_pos) | origin | size |
/// | [`set_width`](Self::set_width) / [`set_height`](Self::set_height) / [`set_size`](Self::set_size) | extent | origin |
///
/// This is different from [`kurbo::Rect`], which stores two corners. Use the
/// `From` conversions to move between the two.
///
/// ```rust
/// use trellis_geometry::Rect;
///
/// let mut r = Rect::new(10.0, 10.0, 100.0, 50.0);
/// r.set_left(30.0);
/// assert_eq!(r.right(), 110.0);
/// assert_eq!(r.width, 80.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a rectangle from its canonical fields.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Self {
        let origin = origin.into();
        let size = size.into();
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// The left edge; same as `x`.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// The top edge; same as `y`.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// The right edge, `x + width`.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// The bottom edge, `y + height`.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Move the left edge, keeping the right edge in place.
    #[inline]
    pub fn set_left(&mut self, left: f64) {
        let right = self.right();
        self.x = left;
        self.width = right - left;
    }

    /// Move the top edge, keeping the bottom edge in place.
    #[inline]
    pub fn set_top(&mut self, top: f64) {
        let bottom = self.bottom();
        self.y = top;
        self.height = bottom - top;
    }

    /// Move the right edge, keeping the left edge in place.
    #[inline]
    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.x;
    }

    /// Move the bottom edge, keeping the top edge in place.
    #[inline]
    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.y;
    }

    /// Move the rectangle horizontally.
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Move the rectangle vertically.
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Change the width, keeping the left edge in place.
    #[inline]
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Change the height, keeping the top edge in place.
    #[inline]
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// The top-left corner.
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    /// Move the top and left edges together.
    #[inline]
    pub fn set_top_left(&mut self, p: Point) {
        self.set_left(p.x);
        self.set_top(p.y);
    }

    /// The top-right corner.
    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    /// Move the top and right edges together.
    #[inline]
    pub fn set_top_right(&mut self, p: Point) {
        self.set_right(p.x);
        self.set_top(p.y);
    }

    /// The bottom-left corner.
    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    /// Move the bottom and left edges together.
    #[inline]
    pub fn set_bottom_left(&mut self, p: Point) {
        self.set_left(p.x);
        self.set_bottom(p.y);
    }

    /// The bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Move the bottom and right edges together.
    #[inline]
    pub fn set_bottom_right(&mut self, p: Point) {
        self.set_right(p.x);
        self.set_bottom(p.y);
    }

    /// The origin; same as [`top_left`](Self::top_left).
    #[inline]
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the rectangle without resizing it.
    #[inline]
    pub fn set_pos(&mut self, pos: Point) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// The extent.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Resize the rectangle without moving its origin.
    #[inline]
    pub fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }
}

impl From<kurbo::Rect> for Rect {
    #[inline]
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<Rect> for kurbo::Rect {
    #[inline]
    fn from(r: Rect) -> Self {
        Self::new(r.left(), r.top(), r.right(), r.bottom())
    }
}
