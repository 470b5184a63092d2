// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Minimum uniform zoom factor.
pub const MIN_SCALE: f64 = 0.5;
/// Maximum uniform zoom factor.
pub const MAX_SCALE: f64 = 2.6;
/// Pan distance of one keyboard nudge, in view units.
pub const NUDGE_STEP: f64 = 40.0;
/// Zoom factor of one keyboard zoom step (`+`/`-`).
pub const ZOOM_STEP_FACTOR: f64 = 1.12;

/// Direction of a keyboard pan nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nudge {
    /// Pan the scene up.
    Up,
    /// Pan the scene down.
    Down,
    /// Pan the scene left.
    Left,
    /// Pan the scene right.
    Right,
}

/// Pan/zoom state applied to the whole scene.
///
/// The transform maps a world point `w` to the view point `w * scale + (x, y)`.
/// See the [crate docs](crate) for the interaction model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    x: f64,
    y: f64,
    scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// The identity transform: no translation, scale 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }

    /// Current translation in view units.
    #[must_use]
    pub const fn translation(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Replaces the translation, leaving the scale unchanged.
    ///
    /// Drag panning uses this: record the translation at gesture start, then
    /// set `start + total_offset` on every move.
    pub const fn set_translation(&mut self, translation: Vec2) {
        self.x = translation.x;
        self.y = translation.y;
    }

    /// Current uniform zoom factor, always within `[MIN_SCALE, MAX_SCALE]`.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Pans by a delta in view units.
    pub const fn pan_by(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Pans one keyboard step in the given direction.
    pub const fn nudge(&mut self, direction: Nudge) {
        let delta = match direction {
            Nudge::Up => Vec2::new(0.0, -NUDGE_STEP),
            Nudge::Down => Vec2::new(0.0, NUDGE_STEP),
            Nudge::Left => Vec2::new(-NUDGE_STEP, 0.0),
            Nudge::Right => Vec2::new(NUDGE_STEP, 0.0),
        };
        self.pan_by(delta);
    }

    /// Zooms by `factor` anchored at `anchor` (view coordinates), keeping the
    /// world point under the anchor fixed on screen.
    ///
    /// The new scale is clamped to `[MIN_SCALE, MAX_SCALE]`; the translation
    /// is adjusted by the ratio of the *applied* scales, so a clamped zoom
    /// still anchors exactly. Non-positive factors are ignored.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }
        let ratio = new_scale / old_scale;
        self.x = anchor.x - (anchor.x - self.x) * ratio;
        self.y = anchor.y - (anchor.y - self.y) * ratio;
        self.scale = new_scale;
    }

    /// One keyboard zoom step about `anchor` (typically the viewport center).
    pub fn zoom_step(&mut self, anchor: Point, zoom_in: bool) {
        let factor = if zoom_in {
            ZOOM_STEP_FACTOR
        } else {
            1.0 / ZOOM_STEP_FACTOR
        };
        self.zoom_about(anchor, factor);
    }

    /// Resets to the identity transform (the `0` key behavior).
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// The world→view affine for this transform.
    #[must_use]
    pub fn world_to_view_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }

    /// Converts a world-space point into view coordinates.
    #[must_use]
    pub fn world_to_view(&self, pt: Point) -> Point {
        self.world_to_view_affine() * pt
    }

    /// Converts a view-space point into world coordinates.
    #[must_use]
    pub fn view_to_world(&self, pt: Point) -> Point {
        self.world_to_view_affine().inverse() * pt
    }

    /// Fits `world` into `view_rect`, centered, with the scale clamped to the
    /// usual range. No-op when either rectangle is degenerate.
    pub fn fit_rect(&mut self, view_rect: Rect, world: Rect) {
        if world.width() <= 0.0
            || world.height() <= 0.0
            || view_rect.width() <= 0.0
            || view_rect.height() <= 0.0
        {
            return;
        }
        let sx = view_rect.width() / world.width();
        let sy = view_rect.height() / world.height();
        self.scale = sx.min(sy).clamp(MIN_SCALE, MAX_SCALE);

        let view_center = view_rect.center().to_vec2();
        let world_center = world.center().to_vec2();
        let translation = view_center - world_center * self.scale;
        self.x = translation.x;
        self.y = translation.y;
    }
}
