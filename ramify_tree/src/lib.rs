// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Tree: the mutable node store behind an incrementally expanded mind map.
//!
//! The store owns a single-rooted, acyclic hierarchy of labeled nodes together
//! with a redundant parent→child edge list kept in lockstep with each node's
//! child list. Nodes are created on demand (a root via [`NodeStore::create_root`],
//! children via [`NodeStore::add_child`]) and removed a whole subtree at a time
//! via [`NodeStore::remove_subtree`].
//!
//! ## Identifier semantics
//!
//! [`NodeId`]s are allocated from a per-store counter that only ever increases.
//! Removing nodes does not return their ids to any free list, so an id observed
//! once is never reused within a session. This is what makes the targeted
//! mutators ([`NodeStore::set_expanded`], [`NodeStore::set_description`]) safe
//! to call from late-arriving asynchronous completions: an id whose node has
//! been deleted simply no longer resolves, and the mutation is a silent no-op
//! rather than an aliasing hazard.
//!
//! ## Geometry
//!
//! Each node carries derived geometry (`level`, `pos`, `size`) that a layout
//! pass rewrites wholesale after every structural change. The store itself
//! never computes positions; it only provides the shape for a layout engine to
//! walk.
//!
//! ## Example
//!
//! ```rust
//! use ramify_tree::NodeStore;
//!
//! let mut store = NodeStore::new();
//! let root = store.create_root("Finance", "How money flows and is managed.").unwrap();
//! let child = store.add_child(root, "Banking", "Deposits and loans.").unwrap();
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.edges().len(), 1);
//!
//! store.remove_subtree(child);
//! assert_eq!(store.len(), 1);
//! assert!(store.edges().is_empty());
//! ```

mod node;
mod store;

pub use node::{Edge, Node, NodeId};
pub use store::{NodeStore, TreeError};
