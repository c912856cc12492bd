// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscriptions owned by tree nodes, and observers of tree structure.

use alloc::boxed::Box;

use crate::tree::ItemTree;
use crate::types::NodeId;

/// An event subscription whose lifetime is bound to a node.
///
/// The tree never invokes subscriber callbacks; it only releases the
/// subscription when the owning node is destroyed. `release` consumes the
/// handle, so it runs at most once.
///
/// Any `FnOnce()` closure is a subscription that runs on release:
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use trellis_item_tree::ItemTree;
///
/// let released = Rc::new(Cell::new(false));
/// let mut tree = ItemTree::new();
/// let node = tree.create(());
/// let flag = released.clone();
/// tree.create_subscription(node, move || flag.set(true)).unwrap();
///
/// tree.destroy(node).unwrap();
/// assert!(released.get());
/// ```
pub trait Subscription {
    /// Disconnect from the event source.
    fn release(self: Box<Self>);
}

impl<F: FnOnce()> Subscription for F {
    fn release(self: Box<Self>) {
        (*self)();
    }
}

/// Receives structural changes of an [`ItemTree`].
///
/// This is the hook a renderer uses to attach and detach the visual surfaces
/// behind tree nodes. Every callback runs after the operation that caused it
/// has been fully applied, so the `tree` it receives already shows the new
/// structure.
///
/// All methods default to doing nothing. `()` is the observer of trees built
/// with [`ItemTree::new`].
pub trait ItemObserver<T>: Sized {
    /// `child` was placed under `parent`, either newly or at a new position.
    fn attached(&mut self, tree: &ItemTree<T, Self>, parent: NodeId, child: NodeId) {
        let _ = (tree, parent, child);
    }

    /// `child` was removed from `former_parent` and not placed under it again.
    fn detached(&mut self, tree: &ItemTree<T, Self>, former_parent: NodeId, child: NodeId) {
        let _ = (tree, former_parent, child);
    }

    /// `node` was destroyed. The identifier is already stale.
    ///
    /// Descendants are reported before their ancestors. A destroyed root that
    /// had a parent is also reported through [`detached`](Self::detached);
    /// its descendants are not.
    fn destroyed(&mut self, tree: &ItemTree<T, Self>, node: NodeId) {
        let _ = (tree, node);
    }
}

impl<T> ItemObserver<T> for () {}
