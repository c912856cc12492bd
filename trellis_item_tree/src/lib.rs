// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Item Tree: an ordered, cycle-free hierarchy of items.
//!
//! Trellis Item Tree is the structural half of a desktop-style widget toolkit. Geometry lives in
//! `trellis_geometry`; this crate only knows who contains whom, in which order, and which
//! subscriptions must go away when an item does.
//!
//! - [`ItemTree`]: arena of nodes with generational [`NodeId`]s and a payload per node.
//! - [`Subscription`]: a handle released exactly once, when its owning node is destroyed.
//! - [`ItemObserver`]: hears about attach, detach, and destroy after they happen.
//! - [`TreeError`]: structural violations and use of destroyed nodes.
//!
//! ## Structure
//!
//! Children are ordered and a node appears at most once among its parent's children.
//! Inserting a node that already has a parent moves it; inserting it under the same parent
//! repositions it. A node can never become its own ancestor. Failed insertions are detected
//! before anything changes, so an `Err` always means the tree is untouched.
//!
//! ## Teardown
//!
//! [`ItemTree::destroy`] walks the subtree children first. Each node releases its
//! subscriptions, the subtree root leaves its parent, and every identifier in the subtree goes
//! stale. Operations on stale identifiers report [`TreeError::Destroyed`]; queries on them
//! return `None` or an empty slice.
//!
//! ## Example
//!
//! ```rust
//! use trellis_item_tree::{ItemTree, TreeError};
//!
//! let mut tree = ItemTree::new();
//! let window = tree.create("window");
//! let [title, body] = ["title", "body"].map(|name| tree.create(name));
//!
//! tree.append(window, &[body]).unwrap();
//! tree.insert_before(window, body, &[title]).unwrap();
//! assert_eq!(tree.children_of(window), &[title, body]);
//!
//! tree.destroy(window).unwrap();
//! assert_eq!(tree.detach(title), Err(TreeError::Destroyed(title)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod subscription;
mod tree;
mod types;

pub use error::{ErrorKind, Result, TreeError};
pub use subscription::{ItemObserver, Subscription};
pub use tree::ItemTree;
pub use types::{NodeId, SubscriptionId};
