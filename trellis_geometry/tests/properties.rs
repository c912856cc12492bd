// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the constrained box model.
//!
//! Inputs are whole numbers so edge arithmetic stays exact in `f64`.

use std::cell::Cell;

use kurbo::Point;
use proptest::prelude::*;
use trellis_geometry::{ConstrainedBox, Limits, Rect, Size, surface_fn};

#[derive(Clone, Debug)]
enum Write {
    Left(f64),
    Top(f64),
    Right(f64),
    Bottom(f64),
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    TopLeft(Point),
    TopRight(Point),
    BottomLeft(Point),
    BottomRight(Point),
    Pos(Point),
    Size(Size),
    Rect(Rect),
}

fn coord() -> impl Strategy<Value = f64> {
    (-100_000_i32..100_000).prop_map(f64::from)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn write() -> impl Strategy<Value = Write> {
    prop_oneof![
        coord().prop_map(Write::Left),
        coord().prop_map(Write::Top),
        coord().prop_map(Write::Right),
        coord().prop_map(Write::Bottom),
        coord().prop_map(Write::X),
        coord().prop_map(Write::Y),
        coord().prop_map(Write::Width),
        coord().prop_map(Write::Height),
        point().prop_map(Write::TopLeft),
        point().prop_map(Write::TopRight),
        point().prop_map(Write::BottomLeft),
        point().prop_map(Write::BottomRight),
        point().prop_map(Write::Pos),
        (coord(), coord()).prop_map(|(w, h)| Write::Size(Size::new(w, h))),
        (coord(), coord(), coord(), coord())
            .prop_map(|(x, y, w, h)| Write::Rect(Rect::new(x, y, w, h))),
    ]
}

fn limits() -> impl Strategy<Value = Limits> {
    (0_i32..500, 0_i32..500, 0_i32..2000, 0_i32..2000).prop_map(|(min_w, min_h, extra_w, extra_h)| {
        let minimum = Size::new(f64::from(min_w), f64::from(min_h));
        let maximum = Size::new(f64::from(min_w + extra_w), f64::from(min_h + extra_h));
        Limits::new(minimum, maximum).unwrap()
    })
}

fn apply<S: trellis_geometry::Surface>(b: &mut ConstrainedBox<S>, w: &Write) {
    let result = match *w {
        Write::Left(v) => b.set_left(v),
        Write::Top(v) => b.set_top(v),
        Write::Right(v) => b.set_right(v),
        Write::Bottom(v) => b.set_bottom(v),
        Write::X(v) => b.set_x(v),
        Write::Y(v) => b.set_y(v),
        Write::Width(v) => b.set_width(v),
        Write::Height(v) => b.set_height(v),
        Write::TopLeft(p) => b.set_top_left(p),
        Write::TopRight(p) => b.set_top_right(p),
        Write::BottomLeft(p) => b.set_bottom_left(p),
        Write::BottomRight(p) => b.set_bottom_right(p),
        Write::Pos(p) => b.set_pos(p),
        Write::Size(s) => b.set_size(s),
        Write::Rect(r) => b.set_rect(r),
    };
    result.unwrap();
}

proptest! {
    #[test]
    fn size_stays_within_limits(limits in limits(), writes in prop::collection::vec(write(), 1..40)) {
        let mut b = ConstrainedBox::detached_with_limits(limits);
        for w in &writes {
            apply(&mut b, w);
            let (min, max) = (b.minimum_size(), b.maximum_size());
            prop_assert!(min.width <= b.width() && b.width() <= max.width, "width escaped: {:?}", b.rect());
            prop_assert!(min.height <= b.height() && b.height() <= max.height, "height escaped: {:?}", b.rect());
        }
    }

    #[test]
    fn each_write_notifies_once(writes in prop::collection::vec(write(), 0..40)) {
        let count = Cell::new(0_usize);
        let mut b = ConstrainedBox::new(surface_fn(|_| count.set(count.get() + 1)));
        for w in &writes {
            apply(&mut b, w);
        }
        let _ = (b.rect(), b.top_left(), b.size());
        drop(b);
        prop_assert_eq!(count.get(), writes.len());
    }

    #[test]
    fn left_keeps_right(limits in limits(), start in write(), left in coord()) {
        let mut b = ConstrainedBox::detached_with_limits(limits);
        apply(&mut b, &start);
        let right = b.right();
        b.set_left(left).unwrap();
        prop_assert_eq!(b.right(), right);
    }

    #[test]
    fn right_keeps_left(limits in limits(), start in write(), right in coord()) {
        let mut b = ConstrainedBox::detached_with_limits(limits);
        apply(&mut b, &start);
        let left = b.left();
        b.set_right(right).unwrap();
        prop_assert_eq!(b.left(), left);
    }

    #[test]
    fn top_keeps_bottom(limits in limits(), start in write(), top in coord()) {
        let mut b = ConstrainedBox::detached_with_limits(limits);
        apply(&mut b, &start);
        let bottom = b.bottom();
        b.set_top(top).unwrap();
        prop_assert_eq!(b.bottom(), bottom);
    }

    #[test]
    fn bottom_keeps_top(limits in limits(), start in write(), bottom in coord()) {
        let mut b = ConstrainedBox::detached_with_limits(limits);
        apply(&mut b, &start);
        let top = b.top();
        b.set_bottom(bottom).unwrap();
        prop_assert_eq!(b.top(), top);
    }

    #[test]
    fn size_write_is_idempotent(limits in limits(), start in write()) {
        let count = Cell::new(0_usize);
        let mut b = ConstrainedBox::with_limits(surface_fn(|_| count.set(count.get() + 1)), limits);
        apply(&mut b, &start);
        let before = b.rect();
        let seen = count.get();
        b.set_size(b.size()).unwrap();
        prop_assert_eq!(b.rect(), before);
        prop_assert_eq!(count.get(), seen + 1);
    }

    #[test]
    fn corner_writes_match_edge_writes(limits in limits(), start in write(), p in point()) {
        // A corner write clamps both axes from the pre-write geometry; since the two axes are
        // independent, that equals writing the two edges one after the other.
        let mut corner = ConstrainedBox::detached_with_limits(limits);
        apply(&mut corner, &start);
        let mut edges = ConstrainedBox::detached_with_limits(limits);
        apply(&mut edges, &start);

        corner.set_top_left(p).unwrap();
        edges.set_top(p.y).unwrap();
        edges.set_left(p.x).unwrap();
        prop_assert_eq!(corner.rect(), edges.rect());
    }

    #[test]
    fn rect_round_trips_through_edges(x in coord(), y in coord(), w in 0_i32..100_000, h in 0_i32..100_000) {
        let r = Rect::new(x, y, f64::from(w), f64::from(h));
        let rebuilt = Rect::new(r.left(), r.top(), r.right() - r.left(), r.bottom() - r.top());
        prop_assert_eq!(rebuilt, r);
    }
}
