// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify View2D: the pan/zoom transform between model space and the screen.
//!
//! A [`ViewTransform`] is a translation plus a uniform zoom applied to the
//! whole rendered scene, independent of per-node layout coordinates. It
//! supports:
//!
//! - Panning by a delta (drag) or a fixed keyboard step.
//! - Zooming about an anchor point so that the point under the cursor stays
//!   fixed, with the scale clamped to `[0.5, 2.6]`.
//! - Converting points between world (model) and view (screen) coordinates.
//! - Fitting a world rectangle into a view rectangle.
//!
//! Translation is never clamped; only the scale is.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use ramify_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new();
//! let anchor = Point::new(300.0, 200.0);
//! let world_before = view.view_to_world(anchor);
//!
//! view.zoom_about(anchor, 1.5);
//! let world_after = view.view_to_world(anchor);
//!
//! assert!((world_after.x - world_before.x).abs() < 1e-9);
//! assert!((world_after.y - world_before.y).abs() < 1e-9);
//! ```

mod transform;

pub use transform::{
    MAX_SCALE, MIN_SCALE, NUDGE_STEP, Nudge, ViewTransform, ZOOM_STEP_FACTOR,
};
