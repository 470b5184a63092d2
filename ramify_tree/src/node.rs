// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the node store: identifiers, nodes, and edges.

use kurbo::{Point, Size};
use smallvec::SmallVec;

/// Identifier for a node in the store.
///
/// This is a small, copyable handle allocated from a per-store counter that
/// strictly increases across every node creation. Ids are never reused within
/// a session, even after the node they named has been removed, so a stale
/// `NodeId` can never alias a different live node.
///
/// Use [`NodeStore::contains`](crate::NodeStore::contains) to check whether an
/// id still refers to a live node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Returns the raw counter value behind this id.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A redundant parent→child link mirroring the owning node's child list.
///
/// Edges exist purely for render convenience (each edge becomes one connector
/// curve); the authoritative structure lives in [`Node::parent`] and
/// [`Node::children`]. The store keeps both in lockstep.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    /// The parent endpoint.
    pub from: NodeId,
    /// The child endpoint.
    pub to: NodeId,
}

/// A single labeled unit in the mind-map tree.
#[derive(Clone, Debug)]
pub struct Node {
    /// Stable identifier, assigned at creation and never reused.
    pub id: NodeId,
    /// Display text.
    pub label: String,
    /// Explanatory text; filled or refreshed when the node is expanded.
    pub description: String,
    /// Owning node, or `None` only for the root.
    pub parent: Option<NodeId>,
    /// Owned children in insertion order. Order determines layout order.
    pub children: SmallVec<[NodeId; 4]>,
    /// True only after a successful expansion that added children.
    pub expanded: bool,
    /// Depth from root (root = 0). Derived; rewritten by layout.
    pub level: u32,
    /// Center position in model space. Derived; rewritten by layout.
    pub pos: Point,
    /// Box dimensions. Derived; rewritten by layout.
    pub size: Size,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: &str, description: &str, parent: Option<NodeId>) -> Self {
        Self {
            id,
            label: label.to_owned(),
            description: description.to_owned(),
            parent,
            children: SmallVec::new(),
            expanded: false,
            level: 0,
            pos: Point::ZERO,
            size: Size::ZERO,
        }
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
