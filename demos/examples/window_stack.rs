// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windows built from an item tree node plus a constrained box.
//!
//! This example shows how to combine:
//! - `trellis_item_tree` for containment, ordering, and teardown,
//! - `trellis_geometry` for min/max-clamped window geometry,
//! - an explicitly owned `WindowStack` for raise/lower.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p trellis_demos --example window_stack`

use std::error::Error;

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trellis_geometry::{ConstrainedBox, GeometryChange, Limits, Rect, Size, Surface};
use trellis_item_tree::{ItemObserver, ItemTree, NodeId};

/// Smallest size a window may be resized to.
const WINDOW_MINIMUM_SIZE: Size = Size::new(192.0, 192.0);

/// Stand-in for a render target: logs what it would draw.
#[derive(Debug)]
struct LogSurface {
    name: &'static str,
}

impl Surface for LogSurface {
    fn bind(&mut self, rect: Rect) {
        info!(surface = self.name, ?rect, "bound");
    }

    fn geometry_changed(&mut self, change: GeometryChange) {
        info!(surface = self.name, rect = ?change.rect, changed = ?change.changed, "geometry");
    }

    fn unbind(&mut self) {
        info!(surface = self.name, "unbound");
    }
}

/// Mirrors tree structure into the (imaginary) scene graph.
#[derive(Debug, Default)]
struct SceneSync {
    events: usize,
}

impl ItemObserver<&'static str> for SceneSync {
    fn attached(&mut self, tree: &ItemTree<&'static str, Self>, parent: NodeId, child: NodeId) {
        self.events += 1;
        info!(parent = ?tree.get(parent), child = ?tree.get(child), "attach");
    }

    fn detached(&mut self, tree: &ItemTree<&'static str, Self>, former_parent: NodeId, child: NodeId) {
        self.events += 1;
        info!(former_parent = ?tree.get(former_parent), ?child, "detach");
    }

    fn destroyed(&mut self, _tree: &ItemTree<&'static str, Self>, node: NodeId) {
        self.events += 1;
        info!(?node, "destroyed");
    }
}

type Scene = ItemTree<&'static str, SceneSync>;

/// Z-order of top-level windows, bottom first.
#[derive(Debug, Default)]
struct WindowStack {
    order: Vec<NodeId>,
}

impl WindowStack {
    fn push(&mut self, window: NodeId) {
        self.order.push(window);
    }

    fn remove(&mut self, window: NodeId) {
        self.order.retain(|w| *w != window);
    }

    fn raise(&mut self, window: NodeId) {
        self.remove(window);
        self.order.push(window);
    }

    fn lower(&mut self, window: NodeId) {
        self.remove(window);
        self.order.insert(0, window);
    }

    fn top(&self) -> Option<NodeId> {
        self.order.last().copied()
    }
}

/// Something whose geometry the user can drag.
trait Resizable {
    fn geometry_mut(&mut self) -> &mut ConstrainedBox<LogSurface>;

    fn resize_to(&mut self, size: Size) -> trellis_geometry::Result<()> {
        self.geometry_mut().set_size(size)
    }

    fn drag_corner(&mut self, to: Point) -> trellis_geometry::Result<()> {
        self.geometry_mut().set_bottom_right(to)
    }
}

#[derive(Debug)]
struct Window {
    node: NodeId,
    geometry: ConstrainedBox<LogSurface>,
}

impl Window {
    fn open(
        scene: &mut Scene,
        stack: &mut WindowStack,
        desktop: NodeId,
        title: &'static str,
    ) -> Result<Self, Box<dyn Error>> {
        let node = scene.create(title);
        let bar = scene.create("title bar");
        let grip = scene.create("size grip");
        scene.append(node, &[bar, grip])?;
        scene.append(desktop, &[node])?;
        scene.create_subscription(node, move || info!(title, "close handler released"))?;

        let limits = Limits::new(WINDOW_MINIMUM_SIZE, trellis_geometry::MAX_ELEMENT_SIZE)?;
        let geometry = ConstrainedBox::with_limits(LogSurface { name: title }, limits);
        stack.push(node);
        Ok(Self { node, geometry })
    }

    fn close(mut self, scene: &mut Scene, stack: &mut WindowStack) -> Result<(), Box<dyn Error>> {
        stack.remove(self.node);
        self.geometry.destroy();
        scene.destroy(self.node)?;
        Ok(())
    }
}

impl Resizable for Window {
    fn geometry_mut(&mut self) -> &mut ConstrainedBox<LogSurface> {
        &mut self.geometry
    }
}

/// Log every live item in paint order, indented by depth.
fn dump_scene(scene: &Scene) {
    for root in scene.roots() {
        let mut next = Some(root);
        while let Some(node) = next {
            let indent = "  ".repeat(scene.ancestors(node).count());
            let name = scene.get(node).copied().unwrap_or("?");
            info!("{indent}{name}");
            next = scene.next_depth_first(node);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut scene = Scene::with_observer(SceneSync::default());
    let mut stack = WindowStack::default();
    let desktop = scene.create("desktop");

    let mut editor = Window::open(&mut scene, &mut stack, desktop, "editor")?;
    let mut console = Window::open(&mut scene, &mut stack, desktop, "console")?;

    editor.geometry.set_pos(Point::new(40.0, 40.0))?;
    editor.resize_to(Size::new(800.0, 600.0))?;
    // Too small: held at the window minimum.
    console.drag_corner(Point::new(50.0, 50.0))?;
    info!(size = ?console.geometry.size(), "console after drag");

    stack.raise(editor.node);
    info!(top = ?scene.get(stack.top().unwrap_or(desktop)), "raised");
    stack.lower(editor.node);
    info!(top = ?scene.get(stack.top().unwrap_or(desktop)), "lowered");

    // Bring the console to the front of the desktop's children too.
    scene.prepend(desktop, &[console.node])?;
    dump_scene(&scene);

    editor.close(&mut scene, &mut stack)?;
    console.close(&mut scene, &mut stack)?;

    let events = scene.observer().map_or(0, |o| o.events);
    info!(events, remaining = scene.len(), "done");
    Ok(())
}
