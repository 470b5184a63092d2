// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The unified input surface and the effects a session hands back.

use kurbo::Point;
use ramify_tree::NodeId;
use ramify_view2d::Nudge;

/// One input event from the host, already hit-tested where a target is named.
///
/// Timestamps are milliseconds on the host's monotonic clock; the session
/// never reads a wall clock itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A synthesized activation on a node (platform `click`/`tap`).
    Activate {
        /// The hit node.
        target: NodeId,
        /// Event time in milliseconds.
        now_ms: u64,
    },
    /// Pointer down on a node.
    PressStart {
        /// The hit node.
        target: NodeId,
        /// Event time in milliseconds.
        now_ms: u64,
    },
    /// Pointer up on a node previously pressed.
    PressEnd {
        /// The hit node.
        target: NodeId,
        /// Event time in milliseconds.
        now_ms: u64,
    },
    /// Pointer capture lost; the press resolves to nothing.
    PressCancel {
        /// The node whose press is dropped.
        target: NodeId,
    },
    /// Periodic tick driving long-press detection.
    Tick {
        /// Tick time in milliseconds.
        now_ms: u64,
    },
    /// Background drag began (pan).
    DragStart {
        /// Pointer position in view coordinates.
        pos: Point,
    },
    /// Background drag moved.
    DragMove {
        /// Pointer position in view coordinates.
        pos: Point,
    },
    /// Background drag ended.
    DragEnd,
    /// Scroll-wheel or pinch zoom.
    Wheel {
        /// Zoom anchor in view coordinates (pointer position).
        anchor: Point,
        /// Multiplicative zoom factor for this event.
        factor: f64,
    },
    /// A bound keyboard action.
    Key(Key),
}

/// Keyboard actions the session understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Arrow-key pan.
    Nudge(Nudge),
    /// Zoom in one step about the viewport center.
    ZoomIn,
    /// Zoom out one step about the viewport center.
    ZoomOut,
    /// Reset the view transform to identity.
    ResetView,
    /// Fit the whole scene into the viewport.
    Fit,
}

/// What an event handler decided; the host reacts to these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// A node became the selection (show its description).
    Selected(NodeId),
    /// A toggle gesture resolved on this node; the host should drive
    /// [`Session::toggle`](crate::Session::toggle) (or the split-phase pair)
    /// with its expand service.
    ToggleRequested(NodeId),
    /// The view transform changed; repaint.
    ViewChanged,
}
