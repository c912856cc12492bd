// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, insertion, teardown, queries.

use alloc::{boxed::Box, vec, vec::Vec};

use hashbrown::HashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::subscription::{ItemObserver, Subscription};
use crate::types::{NodeId, SubscriptionId};

/// An ordered hierarchy of items.
///
/// Each node carries a payload `T`, an ordered list of children in which a
/// node appears at most once, a parent link, and a registry of
/// [`Subscription`]s that live exactly as long as the node. Nodes start out
/// parentless; [`append`](Self::append), [`prepend`](Self::prepend), and
/// [`insert_before`](Self::insert_before) take them out of wherever they are
/// and place them under a new parent.
///
/// Insertions are checked before anything is touched: a node passed twice, a
/// node that is the parent or one of its ancestors, or a bad insertion marker
/// is reported as a [`TreeError`] and the tree stays as it was.
///
/// The type parameter `O` is an [`ItemObserver`] that hears about every
/// attach, detach, and destroy after the fact. It defaults to `()`, which
/// ignores them.
///
/// ## Example
///
/// ```rust
/// use trellis_item_tree::ItemTree;
///
/// let mut tree = ItemTree::new();
/// let root = tree.create("root");
/// let [x, y, z] = ["x", "y", "z"].map(|name| tree.create(name));
///
/// tree.append(root, &[x, y, z]).unwrap();
/// tree.prepend(root, &[y]).unwrap();
/// assert_eq!(tree.children_of(root), &[y, x, z]);
///
/// // A node cannot become its own ancestor.
/// assert!(tree.append(x, &[root]).is_err());
///
/// tree.destroy(root).unwrap();
/// assert!(tree.is_empty());
/// ```
pub struct ItemTree<T = (), O = ()> {
    /// slots
    nodes: Vec<Option<Node<T>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    observer: Option<O>,
}

impl<T, O> core::fmt::Debug for ItemTree<T, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.len();
        let free = self.free_list.len();
        f.debug_struct("ItemTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

impl<T> Default for ItemTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct Registered {
    id: SubscriptionId,
    handle: Box<dyn Subscription>,
}

struct Node<T> {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    subscriptions: SmallVec<[Registered; 2]>,
    next_serial: u32,
    data: T,
}

impl<T> Node<T> {
    fn new(generation: u32, data: T) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            subscriptions: SmallVec::new(),
            next_serial: 0,
            data,
        }
    }
}

/// A structural change waiting to be reported to the observer.
#[derive(Clone, Copy, Debug)]
enum Event {
    Attached { parent: NodeId, child: NodeId },
    Detached { parent: NodeId, child: NodeId },
    Destroyed(NodeId),
}

/// Where an insertion places its nodes.
#[derive(Clone, Copy, Debug)]
enum At {
    Front,
    Back,
    Before(NodeId),
}

impl<T> ItemTree<T> {
    /// Create an empty tree without an observer.
    pub fn new() -> Self {
        Self::with_observer(())
    }
}

impl<T, O: ItemObserver<T>> ItemTree<T, O> {
    /// Create an empty tree that reports structural changes to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            observer: Some(observer),
        }
    }

    /// The observer.
    ///
    /// Returns `None` only when called from inside one of the observer's own
    /// callbacks.
    pub fn observer(&self) -> Option<&O> {
        self.observer.as_ref()
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> Option<&mut O> {
        self.observer.as_mut()
    }

    /// Create a new parentless node holding `data`.
    pub fn create(&mut self, data: T) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        trace!(?id, "node created");
        id
    }

    /// Move `nodes` to the end of `parent`'s children, in the given order.
    ///
    /// A node that is already a child of `parent` is moved, not duplicated; the
    /// other children keep their relative order.
    pub fn append(&mut self, parent: NodeId, nodes: &[NodeId]) -> Result<()> {
        self.insert(parent, At::Back, nodes)
    }

    /// Move `nodes` to the front of `parent`'s children, in the given order.
    pub fn prepend(&mut self, parent: NodeId, nodes: &[NodeId]) -> Result<()> {
        self.insert(parent, At::Front, nodes)
    }

    /// Move `nodes` immediately before `marker` in `parent`'s children.
    ///
    /// `marker` must be a current child of `parent` and must not be one of
    /// `nodes`.
    pub fn insert_before(&mut self, parent: NodeId, marker: NodeId, nodes: &[NodeId]) -> Result<()> {
        self.insert(parent, At::Before(marker), nodes)
    }

    /// Remove `node` from its parent's children.
    ///
    /// Does nothing for a parentless node. The node and its subtree stay alive.
    pub fn detach(&mut self, node: NodeId) -> Result<()> {
        self.ensure_alive(node)?;
        let mut events = Vec::new();
        self.unlink_parent(node, &mut events);
        self.notify(events);
        Ok(())
    }

    /// Destroy `node` and its whole subtree.
    ///
    /// Children are destroyed first, then the node's subscriptions are
    /// released, then it is detached from its parent. Afterwards every
    /// identifier in the subtree is stale.
    pub fn destroy(&mut self, node: NodeId) -> Result<()> {
        self.ensure_alive(node)?;
        let mut events = Vec::new();
        let count = self.destroy_subtree(node, &mut events);
        debug!(?node, destroyed = count, "subtree destroyed");
        self.notify(events);
        Ok(())
    }

    /// Register `subscription` with `node`.
    ///
    /// The subscription is released when the node is destroyed.
    pub fn create_subscription(
        &mut self,
        node: NodeId,
        subscription: impl Subscription + 'static,
    ) -> Result<SubscriptionId> {
        self.ensure_alive(node)?;
        let n = self.node_mut(node);
        let id = SubscriptionId::new(node, n.next_serial);
        n.next_serial = n.next_serial.wrapping_add(1);
        n.subscriptions.push(Registered {
            id,
            handle: Box::new(subscription),
        });
        trace!(?id, "subscription created");
        Ok(id)
    }

    fn insert(&mut self, parent: NodeId, at: At, nodes: &[NodeId]) -> Result<()> {
        self.validate_insert(parent, at, nodes)?;

        let mut events = Vec::with_capacity(nodes.len());
        for &node in nodes {
            if let Some(old) = self.node(node).parent {
                let siblings = &mut self.node_mut(old).children;
                siblings.retain(|c| *c != node);
                if old != parent {
                    events.push(Event::Detached { parent: old, child: node });
                }
            }
            self.node_mut(node).parent = Some(parent);
        }

        let children = &mut self.node_mut(parent).children;
        let idx = match at {
            At::Front => 0,
            At::Back => children.len(),
            At::Before(marker) => children
                .iter()
                .position(|c| *c == marker)
                .unwrap_or(children.len()),
        };
        children.splice(idx..idx, nodes.iter().copied());

        events.extend(nodes.iter().map(|&child| Event::Attached { parent, child }));
        trace!(?parent, ?at, count = nodes.len(), "children inserted");
        self.notify(events);
        Ok(())
    }

    /// Check an insertion without changing anything.
    fn validate_insert(&self, parent: NodeId, at: At, nodes: &[NodeId]) -> Result<()> {
        self.ensure_alive(parent)?;
        for &node in nodes {
            self.ensure_alive(node)?;
        }
        if let At::Before(marker) = at {
            self.ensure_alive(marker)?;
        }

        let mut moving = HashSet::with_capacity(nodes.len());
        for &node in nodes {
            if !moving.insert(node) {
                return Err(TreeError::DuplicateNode(node));
            }
        }

        // Walk up from the parent: none of the moving nodes may be on the way.
        let mut current = Some(parent);
        while let Some(ancestor) = current {
            if moving.contains(&ancestor) {
                return Err(TreeError::Cycle {
                    parent,
                    node: ancestor,
                });
            }
            current = self.node(ancestor).parent;
        }

        if let At::Before(marker) = at {
            if self.node(marker).parent != Some(parent) {
                return Err(TreeError::NotAChild { parent, marker });
            }
            if moving.contains(&marker) {
                return Err(TreeError::MarkerInNodes(marker));
            }
        }
        Ok(())
    }

    /// Tear down the subtree under `root` in post-order.
    ///
    /// Uses an explicit stack, so depth is bounded by memory rather than the
    /// call stack.
    fn destroy_subtree(&mut self, root: NodeId, events: &mut Vec<Event>) -> usize {
        let mut count = 0;
        // (node, children already scheduled)
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if !expanded {
                stack.push((id, true));
                stack.extend(self.node(id).children.iter().rev().map(|&c| (c, false)));
                continue;
            }

            let subscriptions = core::mem::take(&mut self.node_mut(id).subscriptions);
            for sub in subscriptions {
                trace!(id = ?sub.id, "subscription released");
                sub.handle.release();
            }

            // Descendants leave together with the root; only the root is unlinked.
            if id == root {
                self.unlink_parent(id, events);
            }

            self.nodes[id.idx()] = None;
            self.free_list.push(id.idx());
            events.push(Event::Destroyed(id));
            count += 1;
        }
        count
    }

    /// Hand queued events to the observer, which sees the finished tree.
    fn notify(&mut self, events: Vec<Event>) {
        let Some(mut observer) = self.observer.take() else {
            return;
        };
        for event in events {
            match event {
                Event::Attached { parent, child } => observer.attached(self, parent, child),
                Event::Detached { parent, child } => observer.detached(self, parent, child),
                Event::Destroyed(node) => observer.destroyed(self, node),
            }
        }
        self.observer = Some(observer);
    }
}

impl<T, O> ItemTree<T, O> {
    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.generation())
            .unwrap_or(false)
    }

    /// The number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if there are no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The payload of a live node.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node_opt(id).map(|n| &n.data)
    }

    /// The payload of a live node, mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_opt_mut(id).map(|n| &mut n.data)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of a node, or empty slice if node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// The number of subscriptions a live node owns (zero for stale ids).
    pub fn subscription_count(&self, id: NodeId) -> usize {
        self.node_opt(id).map(|n| n.subscriptions.len()).unwrap_or(0)
    }

    /// Iterate the live parentless nodes, in slot order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(n) if n.parent.is_none() =>
            {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                Some(NodeId::new(i as u32, n.generation))
            }
            _ => None,
        })
    }

    /// Iterate the ancestors of `id`, nearest first. Empty for roots and stale ids.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(self.parent_of(id), |&n| self.parent_of(n))
    }

    /// Returns true if `ancestor` is a proper ancestor of `node`.
    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    /// Get the next node in paint order: parents before children, siblings
    /// in child order.
    ///
    /// Returns `None` once the walk leaves the root's subtree or if the
    /// current node is stale. Starting from each of [`roots`](Self::roots)
    /// visits every live node exactly once.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.is_alive(current) {
            return None;
        }

        if let Some(&first_child) = self.node(current).children.first() {
            return Some(first_child);
        }

        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = parent;
        }
        None
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_of(node)?;
        let siblings = &self.node(parent).children;
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn ensure_alive(&self, id: NodeId) -> Result<()> {
        if self.is_alive(id) {
            Ok(())
        } else {
            Err(TreeError::Destroyed(id))
        }
    }

    fn unlink_parent(&mut self, id: NodeId, events: &mut Vec<Event>) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
            trace!(node = ?id, ?parent, "node detached");
            events.push(Event::Detached { parent, child: id });
        }
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node<T>> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    /// Access a live node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a live node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use super::*;
    use crate::error::ErrorKind;

    fn tree_with(n: usize) -> (ItemTree<usize>, Vec<NodeId>) {
        let mut tree = ItemTree::new();
        let ids = (0..n).map(|i| tree.create(i)).collect();
        (tree, ids)
    }

    #[test]
    fn created_nodes_are_parentless() {
        let (tree, ids) = tree_with(2);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.parent_of(ids[0]), None);
        assert!(tree.children_of(ids[0]).is_empty());
        assert_eq!(tree.get(ids[1]), Some(&1));
        assert_eq!(tree.roots().collect::<Vec<_>>(), ids);
    }

    #[test]
    fn append_then_prepend_moves_existing_child() {
        let (mut tree, ids) = tree_with(4);
        let [root, x, y, z] = [ids[0], ids[1], ids[2], ids[3]];
        tree.append(root, &[x, y, z]).unwrap();
        tree.prepend(root, &[y]).unwrap();
        assert_eq!(tree.children_of(root), &[y, x, z]);
        assert_eq!(tree.parent_of(y), Some(root));
    }

    #[test]
    fn insert_before_places_nodes_ahead_of_marker() {
        let (mut tree, ids) = tree_with(5);
        let [root, x, y, z, w] = [ids[0], ids[1], ids[2], ids[3], ids[4]];
        tree.append(root, &[x, y, z]).unwrap();
        tree.insert_before(root, z, &[w]).unwrap();
        assert_eq!(tree.children_of(root), &[x, y, w, z]);

        tree.insert_before(root, x, &[z, y]).unwrap();
        assert_eq!(tree.children_of(root), &[z, y, x, w]);
    }

    #[test]
    fn appending_twice_keeps_one_entry() {
        let (mut tree, ids) = tree_with(2);
        tree.append(ids[0], &[ids[1]]).unwrap();
        tree.append(ids[0], &[ids[1]]).unwrap();
        assert_eq!(tree.children_of(ids[0]), &[ids[1]]);
    }

    #[test]
    fn moving_between_parents_unlinks_old_parent() {
        let (mut tree, ids) = tree_with(3);
        let [a, b, c] = [ids[0], ids[1], ids[2]];
        tree.append(a, &[c]).unwrap();
        tree.append(b, &[c]).unwrap();
        assert!(tree.children_of(a).is_empty());
        assert_eq!(tree.children_of(b), &[c]);
        assert_eq!(tree.parent_of(c), Some(b));
    }

    #[test]
    fn structural_violations_leave_tree_unchanged() {
        let (mut tree, ids) = tree_with(4);
        let [root, a, b, c] = [ids[0], ids[1], ids[2], ids[3]];
        tree.append(root, &[a, b]).unwrap();
        tree.append(a, &[c]).unwrap();

        let err = tree.append(a, &[a]).unwrap_err();
        assert_eq!(err, TreeError::Cycle { parent: a, node: a });
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);

        assert_eq!(
            tree.append(c, &[b, root]),
            Err(TreeError::Cycle { parent: c, node: root })
        );
        assert_eq!(tree.append(b, &[c, c]), Err(TreeError::DuplicateNode(c)));
        assert_eq!(
            tree.insert_before(root, c, &[b]),
            Err(TreeError::NotAChild { parent: root, marker: c })
        );
        assert_eq!(
            tree.insert_before(root, b, &[b]),
            Err(TreeError::MarkerInNodes(b))
        );

        assert_eq!(tree.children_of(root), &[a, b]);
        assert_eq!(tree.children_of(a), &[c]);
        assert!(tree.children_of(b).is_empty());
        assert_eq!(tree.parent_of(root), None);
    }

    #[test]
    fn detach_removes_from_parent_only() {
        let (mut tree, ids) = tree_with(3);
        let [root, a, b] = [ids[0], ids[1], ids[2]];
        tree.append(root, &[a]).unwrap();
        tree.append(a, &[b]).unwrap();

        tree.detach(a).unwrap();
        assert!(tree.children_of(root).is_empty());
        assert_eq!(tree.parent_of(a), None);
        assert_eq!(tree.children_of(a), &[b]);

        // Detaching a root is a no-op.
        tree.detach(a).unwrap();
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn destroy_releases_every_subscription_in_subtree() {
        let (mut tree, ids) = tree_with(4);
        let [root, a, b, keep] = [ids[0], ids[1], ids[2], ids[3]];
        tree.append(root, &[a, keep]).unwrap();
        tree.append(a, &[b]).unwrap();

        let released = Rc::new(RefCell::new(Vec::new()));
        for (node, tag) in [(a, "a1"), (a, "a2"), (b, "b"), (keep, "keep")] {
            let log = released.clone();
            tree.create_subscription(node, move || log.borrow_mut().push(tag))
                .unwrap();
        }
        assert_eq!(tree.subscription_count(a), 2);

        tree.destroy(a).unwrap();
        // Children go first.
        assert_eq!(*released.borrow(), vec!["b", "a1", "a2"]);
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(b));
        assert_eq!(tree.children_of(root), &[keep]);
        assert_eq!(tree.subscription_count(keep), 1);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn destroy_handles_deep_chains() {
        const DEPTH: usize = 200_000;
        let released = Rc::new(Cell::new(0_usize));
        let mut tree = ItemTree::new();
        let bottom = tree.create(0);
        let flag = released.clone();
        tree.create_subscription(bottom, move || flag.set(flag.get() + 1))
            .unwrap();

        let mut top = bottom;
        for depth in 1..DEPTH {
            let next = tree.create(depth);
            tree.append(next, &[top]).unwrap();
            top = next;
        }
        let holder = tree.create(DEPTH);
        tree.append(holder, &[top]).unwrap();
        assert_eq!(tree.len(), DEPTH + 1);

        tree.destroy(top).unwrap();
        assert_eq!(released.get(), 1);
        assert!(!tree.is_alive(bottom));
        assert!(tree.children_of(holder).is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn destroy_reports_post_order_and_root_detach() {
        let mut tree = ItemTree::with_observer(Log::default());
        let [p, a, b, c] = [(); 4].map(|()| tree.create(()));
        tree.append(p, &[a]).unwrap();
        tree.append(a, &[b, c]).unwrap();
        tree.observer_mut().unwrap().0.clear();

        tree.destroy(a).unwrap();
        assert_eq!(
            tree.observer().unwrap().0.as_slice(),
            &[
                ("destroyed", b, None),
                ("destroyed", c, None),
                ("detached", a, Some(p)),
                ("destroyed", a, None),
            ]
        );
    }

    #[test]
    fn stale_ids_are_rejected() {
        let (mut tree, ids) = tree_with(2);
        let [a, b] = [ids[0], ids[1]];
        tree.destroy(b).unwrap();

        assert_eq!(tree.append(a, &[b]), Err(TreeError::Destroyed(b)));
        assert_eq!(tree.append(b, &[a]), Err(TreeError::Destroyed(b)));
        assert_eq!(tree.detach(b), Err(TreeError::Destroyed(b)));
        assert_eq!(tree.destroy(b), Err(TreeError::Destroyed(b)));
        let err = tree.create_subscription(b, || {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UseAfterDestroy);
        assert_eq!(tree.get(b), None);
        assert_eq!(tree.parent_of(b), None);
    }

    #[test]
    fn reused_slot_gets_new_generation() {
        let (mut tree, ids) = tree_with(1);
        let old = ids[0];
        tree.destroy(old).unwrap();
        let new = tree.create(7);
        assert_eq!(new.idx(), old.idx());
        assert_ne!(new, old);
        assert!(!tree.is_alive(old));
        assert_eq!(tree.get(new), Some(&7));
    }

    #[derive(Default)]
    struct Log(Vec<(&'static str, NodeId, Option<NodeId>)>);

    impl ItemObserver<()> for Log {
        fn attached(&mut self, tree: &ItemTree<(), Self>, parent: NodeId, child: NodeId) {
            // The tree is already in its final shape.
            assert_eq!(tree.parent_of(child), Some(parent));
            self.0.push(("attached", child, Some(parent)));
        }

        fn detached(&mut self, tree: &ItemTree<(), Self>, former_parent: NodeId, child: NodeId) {
            assert!(!tree.children_of(former_parent).contains(&child));
            self.0.push(("detached", child, Some(former_parent)));
        }

        fn destroyed(&mut self, tree: &ItemTree<(), Self>, node: NodeId) {
            assert!(!tree.is_alive(node));
            self.0.push(("destroyed", node, None));
        }
    }

    #[test]
    fn observer_sees_each_change_after_commit() {
        let mut tree = ItemTree::with_observer(Log::default());
        let [p, q, a, b] = [(); 4].map(|()| tree.create(()));

        tree.append(p, &[a, b]).unwrap();
        tree.prepend(p, &[b]).unwrap();
        tree.append(q, &[a]).unwrap();
        tree.detach(a).unwrap();
        tree.destroy(p).unwrap();

        let log = &tree.observer().unwrap().0;
        assert_eq!(
            log.as_slice(),
            &[
                ("attached", a, Some(p)),
                ("attached", b, Some(p)),
                ("attached", b, Some(p)),
                ("detached", a, Some(p)),
                ("attached", a, Some(q)),
                ("detached", a, Some(q)),
                ("destroyed", b, None),
                ("destroyed", p, None),
            ]
        );
    }

    #[test]
    fn failed_mutation_is_not_observed() {
        let count = Cell::new(0_u32);
        struct Counter<'a>(&'a Cell<u32>);
        impl ItemObserver<()> for Counter<'_> {
            fn attached(&mut self, _: &ItemTree<(), Self>, _: NodeId, _: NodeId) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut tree = ItemTree::with_observer(Counter(&count));
        let a = tree.create(());
        assert!(tree.append(a, &[a]).is_err());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let (mut tree, ids) = tree_with(3);
        let [root, a, b] = [ids[0], ids[1], ids[2]];
        tree.append(root, &[a]).unwrap();
        tree.append(a, &[b]).unwrap();
        assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![a, root]);
        assert!(tree.is_ancestor_of(root, b));
        assert!(!tree.is_ancestor_of(b, root));
        assert!(!tree.is_ancestor_of(b, b));
        assert_eq!(tree.roots().collect::<Vec<_>>(), vec![root]);
    }

    #[test]
    fn depth_first_traversal() {
        // root -> [a -> [c, d], b]
        let (mut tree, ids) = tree_with(5);
        let [root, a, b, c, d] = [ids[0], ids[1], ids[2], ids[3], ids[4]];
        tree.append(root, &[a, b]).unwrap();
        tree.append(a, &[c, d]).unwrap();

        let mut order = vec![root];
        while let Some(next) = tree.next_depth_first(*order.last().unwrap()) {
            order.push(next);
        }
        assert_eq!(order, vec![root, a, c, d, b]);

        // A walk started inside a subtree leaves it for the next sibling.
        assert_eq!(tree.next_depth_first(d), Some(b));
        assert_eq!(tree.next_depth_first(b), None);
    }

    #[test]
    fn payload_is_mutable() {
        let (mut tree, ids) = tree_with(1);
        *tree.get_mut(ids[0]).unwrap() = 42;
        assert_eq!(tree.get(ids[0]), Some(&42));
    }
}
