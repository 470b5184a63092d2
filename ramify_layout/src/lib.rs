// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Layout: deterministic leaf-band layout for mind-map trees.
//!
//! The layout is a pure function of tree shape and label lengths. Every call
//! recomputes position and size for *every* node from scratch; nothing is
//! incremental. That total-recompute policy trades efficiency for simplicity
//! and correctness (no stale partial layouts), and is cheap at interactive
//! tree sizes.
//!
//! ## Algorithm
//!
//! Columns run left to right by depth: a node at `level` sits at
//! `base_x + level * x_step`. Vertical space is allocated in *bands*: every
//! node is given `leaf_count * leaf_gap` vertical units, where a childless
//! node counts as one leaf (never zero — every node gets positive space), and
//! is centered within its band. Children split the parent's band top-down in
//! insertion order.
//!
//! ## Example
//!
//! ```rust
//! use ramify_layout::{LayoutParams, layout};
//! use ramify_tree::NodeStore;
//!
//! let mut store = NodeStore::new();
//! let root = store.create_root("Finance", "").unwrap();
//! store.add_child(root, "Banking", "").unwrap();
//!
//! layout(&mut store, &LayoutParams::default());
//! let root_node = store.get(root).unwrap();
//! assert_eq!(root_node.level, 0);
//! assert_eq!(root_node.pos.x, 140.0);
//! ```

use kurbo::{CubicBez, Point, Rect, Size};
use ramify_tree::{Node, NodeId, NodeStore};

/// Constants driving the band layout.
#[derive(Clone, Copy, Debug)]
pub struct LayoutParams {
    /// X of the root column.
    pub base_x: f64,
    /// Horizontal gap per level.
    pub x_step: f64,
    /// Vertical gap allocated per leaf.
    pub leaf_gap: f64,
    /// Offset of the root's band start from the scene top.
    pub top_pad: f64,
    /// Extra space below the lowest box when computing scene bounds.
    pub bottom_pad: f64,
    /// Box height of the root node.
    pub root_h: f64,
    /// Box height of every non-root node.
    pub node_h: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            base_x: 140.0,
            x_step: 240.0,
            leaf_gap: 96.0,
            top_pad: 60.0,
            bottom_pad: 60.0,
            root_h: 48.0,
            node_h: 42.0,
        }
    }
}

/// Box width for a label: `28 + 8 * chars`, with the character count floored
/// at 10 and the result clamped to `[140, 260]`.
#[must_use]
pub fn measure_label_width(label: &str) -> f64 {
    let chars = label.chars().count().max(10) as f64;
    (28.0 + chars * 8.0).clamp(140.0, 260.0)
}

/// Recomputes `level`, `pos`, and `size` for every node in the store.
///
/// No-op when the store has no root. Deterministic: identical tree shape and
/// labels produce identical geometry.
pub fn layout(store: &mut NodeStore, params: &LayoutParams) {
    if let Some(root) = store.root() {
        layout_node(store, params, root, 0, params.top_pad);
    }
}

/// Number of leaves under `id`, counting a childless node as one leaf.
#[must_use]
pub fn leaf_count(store: &NodeStore, id: NodeId) -> usize {
    match store.get(id) {
        Some(node) if !node.children.is_empty() => node
            .children
            .iter()
            .map(|child| leaf_count(store, *child))
            .sum::<usize>()
            .max(1),
        Some(_) => 1,
        None => 0,
    }
}

fn layout_node(
    store: &mut NodeStore,
    params: &LayoutParams,
    id: NodeId,
    level: u32,
    top_y: f64,
) -> f64 {
    let leaves = leaf_count(store, id).max(1);
    let band = leaves as f64 * params.leaf_gap;

    let children: Vec<NodeId> = match store.get_mut(id) {
        Some(node) => {
            node.level = level;
            node.pos = Point::new(
                params.base_x + f64::from(level) * params.x_step,
                top_y + band / 2.0,
            );
            node.size = Size::new(
                measure_label_width(&node.label),
                if level == 0 { params.root_h } else { params.node_h },
            );
            node.children.iter().copied().collect()
        }
        None => return 0.0,
    };

    let mut cursor = top_y;
    for child in children {
        cursor += layout_node(store, params, child, level + 1, cursor);
    }
    band
}

/// Axis-aligned box of a laid-out node (`pos` is the center).
#[must_use]
pub fn node_rect(node: &Node) -> Rect {
    Rect::from_center_size(node.pos, node.size)
}

/// Bounding rectangle of all node boxes, extended downward by
/// [`LayoutParams::bottom_pad`]. `None` for an empty store.
#[must_use]
pub fn scene_bounds(store: &NodeStore, params: &LayoutParams) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for node in store.iter() {
        let rect = node_rect(node);
        bounds = Some(match bounds {
            Some(b) => b.union(rect),
            None => rect,
        });
    }
    bounds.map(|b| Rect::new(b.x0, b.y0, b.x1, b.y1 + params.bottom_pad))
}

/// Connector curve between a laid-out parent and child.
///
/// Endpoints sit at the facing box edges; control points extend horizontally
/// by 55% of the center distance, which keeps curves flat for close columns
/// and gently bowed for distant ones.
#[must_use]
pub fn edge_curve(parent: &Node, child: &Node) -> CubicBez {
    let dx = (child.pos.x - parent.pos.x) * 0.55;
    let start = Point::new(parent.pos.x + parent.size.width / 2.0, parent.pos.y);
    let end = Point::new(child.pos.x - child.size.width / 2.0, child.pos.y);
    CubicBez::new(
        start,
        Point::new(start.x + dx, start.y),
        Point::new(end.x - dx, end.y),
        end,
    )
}
