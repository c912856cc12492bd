// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public handle types: node identifiers and subscription identifiers.

/// Identifier for a node in an [`ItemTree`](crate::ItemTree) (generational).
///
/// Once a node is destroyed its identifier goes stale. The slot may be reused
/// by a later node, but with a newer generation, so a stale identifier never
/// refers to the new node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Identifier for a subscription registered on a node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId {
    node: NodeId,
    serial: u32,
}

impl SubscriptionId {
    pub(crate) const fn new(node: NodeId, serial: u32) -> Self {
        Self { node, serial }
    }

    /// The node that owns this subscription.
    pub const fn node(self) -> NodeId {
        self.node
    }
}
