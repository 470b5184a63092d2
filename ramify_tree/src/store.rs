// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core store implementation: creation, subtree removal, targeted mutation.

use hashbrown::HashMap;

use crate::node::{Edge, Node, NodeId};

/// Errors produced by structural store mutations.
///
/// Only operations that *create* structure report errors. Targeted field
/// mutations on missing nodes are deliberate no-ops (see
/// [`NodeStore::set_expanded`]), and [`NodeStore::remove_subtree`] of a missing
/// id is benign by contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A root already exists; the store must be cleared before creating another.
    #[error("a root node already exists")]
    RootExists,
    /// The operation targeted an id with no live node.
    #[error("node {0} not found")]
    NotFound(NodeId),
}

/// Owns the set of tree nodes, their parent/child links, and the mirrored
/// edge list.
///
/// All mutations are synchronous and atomic with respect to a single caller;
/// no partially updated state is ever observable. See the
/// [crate docs](crate) for identifier and lifecycle semantics.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
    nodes: HashMap<NodeId, Node>,
    edges: Vec<Edge>,
    root: Option<NodeId>,
    /// Strictly increasing across creations; survives `clear`.
    next_id: u64,
}

impl NodeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the root node.
    ///
    /// Fails with [`TreeError::RootExists`] if a root is already present; the
    /// call site is expected to [`clear`](Self::clear) first when regenerating.
    pub fn create_root(&mut self, label: &str, description: &str) -> Result<NodeId, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }
        let id = self.alloc_id();
        self.nodes.insert(id, Node::new(id, label, description, None));
        self.root = Some(id);
        Ok(id)
    }

    /// Appends a child under `parent`.
    ///
    /// The child is added at the end of the parent's child list and a mirror
    /// edge is pushed. Fails with [`TreeError::NotFound`] if `parent` does not
    /// resolve to a live node.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: &str,
        description: &str,
    ) -> Result<NodeId, TreeError> {
        if !self.nodes.contains_key(&parent) {
            return Err(TreeError::NotFound(parent));
        }
        let id = self.alloc_id();
        self.nodes
            .insert(id, Node::new(id, label, description, Some(parent)));
        self.nodes
            .get_mut(&parent)
            .expect("parent liveness checked above")
            .children
            .push(id);
        self.edges.push(Edge { from: parent, to: id });
        Ok(id)
    }

    /// Removes `id` and its entire subtree.
    ///
    /// No-op when `id` is absent. Otherwise deletes post-order (children before
    /// the node itself), detaches the node from its parent's child list, and
    /// drops every edge touching a removed id.
    pub fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let parent = node.parent;

        let mut removed = Vec::new();
        self.remove_recursive(id, &mut removed);

        if let Some(parent) = parent
            && let Some(p) = self.nodes.get_mut(&parent)
        {
            p.children.retain(|c| *c != id);
        }
        self.edges
            .retain(|e| !removed.contains(&e.from) && !removed.contains(&e.to));
        if self.root == Some(id) {
            self.root = None;
        }
    }

    fn remove_recursive(&mut self, id: NodeId, removed: &mut Vec<NodeId>) {
        let children: Vec<NodeId> = match self.nodes.get(&id) {
            Some(n) => n.children.iter().copied().collect(),
            None => return,
        };
        for child in children {
            self.remove_recursive(child, removed);
        }
        self.nodes.remove(&id);
        removed.push(id);
    }

    /// Sets the expanded flag on `id`, silently doing nothing when the node is
    /// absent.
    ///
    /// The no-op behavior is a deliberate idempotence guarantee: a completion
    /// handler racing a deletion must be able to apply its updates without
    /// observing an error.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.expanded = expanded;
        }
    }

    /// Replaces the description on `id`; silent no-op when the node is absent.
    pub fn set_description(&mut self, id: NodeId, description: &str) {
        if let Some(n) = self.nodes.get_mut(&id) {
            description.clone_into(&mut n.description);
        }
    }

    /// Removes every node and edge. The id counter is not reset, so ids from
    /// before the clear stay stale forever.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.root = None;
    }

    /// Returns the root id, if a root exists.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the node behind `id`, if live.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable access for layout passes.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Returns true if `id` resolves to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The mirrored parent→child edge list, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over all live nodes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Walks parent links from `id` up to the root and returns the chain in
    /// root→node order (inclusive of `id`). Empty when `id` is absent.
    #[must_use]
    pub fn ancestry(&self, id: NodeId) -> Vec<&Node> {
        let mut chain = Vec::new();
        let mut cursor = self.nodes.get(&id);
        while let Some(node) = cursor {
            chain.push(node);
            cursor = node.parent.and_then(|p| self.nodes.get(&p));
        }
        chain.reverse();
        chain
    }

    /// Human-readable name for diagnostics: a slug of the label joined with
    /// the id counter, e.g. `finance-3`. `None` when the node is absent.
    #[must_use]
    pub fn debug_name(&self, id: NodeId) -> Option<String> {
        self.nodes.get(&id).map(|n| {
            let slug: String = n
                .label
                .chars()
                .filter_map(|c| {
                    if c.is_alphanumeric() {
                        Some(c.to_ascii_lowercase())
                    } else if c.is_whitespace() {
                        Some('-')
                    } else {
                        None
                    }
                })
                .collect();
            format!("{slug}-{}", id.0)
        })
    }

    fn alloc_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }
}
