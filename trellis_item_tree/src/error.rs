// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for rejected tree mutations.

use crate::types::NodeId;

/// Errors reported by tree mutations.
///
/// A mutation that fails leaves the tree exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The same node was passed more than once to a single insertion.
    #[error("{0:?} appears more than once in the same insertion")]
    DuplicateNode(NodeId),
    /// The node is the parent itself or one of its ancestors.
    #[error("inserting {node:?} under {parent:?} would create a cycle")]
    Cycle {
        /// The node receiving children.
        parent: NodeId,
        /// The node that would become its own ancestor.
        node: NodeId,
    },
    /// The insertion marker is not a current child of the parent.
    #[error("{marker:?} is not a child of {parent:?}")]
    NotAChild {
        /// The node receiving children.
        parent: NodeId,
        /// The requested insertion point.
        marker: NodeId,
    },
    /// The insertion marker is also one of the nodes being inserted.
    #[error("{0:?} is both the insertion marker and an inserted node")]
    MarkerInNodes(NodeId),
    /// The node has been destroyed.
    #[error("{0:?} has been destroyed")]
    Destroyed(NodeId),
}

/// Broad classes of [`TreeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The mutation would break child uniqueness or introduce a cycle.
    StructuralViolation,
    /// A destroyed node was used.
    UseAfterDestroy,
}

impl TreeError {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Destroyed(_) => ErrorKind::UseAfterDestroy,
            Self::DuplicateNode(_)
            | Self::Cycle { .. }
            | Self::NotAChild { .. }
            | Self::MarkerInNodes(_) => ErrorKind::StructuralViolation,
        }
    }
}

/// Result type for tree mutations.
pub type Result<T, E = TreeError> = core::result::Result<T, E>;
