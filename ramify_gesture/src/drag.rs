// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: per-move deltas and the total offset from the gesture start.
//!
//! View panning records the view translation when a drag begins and applies
//! `start_translation + total_offset` on every move, so the scene follows the
//! pointer exactly regardless of intermediate event coalescing.

use kurbo::{Point, Vec2};

/// Tracks one active drag gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    /// `(start, last)` positions while a drag is active.
    anchor: Option<(Point, Point)>,
}

impl DragState {
    /// Begins a drag at `pos`, replacing any drag already in progress.
    pub fn begin(&mut self, pos: Point) {
        self.anchor = Some((pos, pos));
    }

    /// Advances the drag to `pos`, returning the delta since the previous
    /// position. `None` when no drag is active.
    pub fn move_to(&mut self, pos: Point) -> Option<Vec2> {
        let (start, last) = self.anchor?;
        self.anchor = Some((start, pos));
        Some(pos - last)
    }

    /// Offset of `pos` from the drag start. `None` when no drag is active.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.anchor.map(|(start, _)| pos - start)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// True while a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_drag_reports_nothing() {
        let mut drag = DragState::default();
        assert!(!drag.is_active());
        assert_eq!(drag.move_to(Point::new(5.0, 5.0)), None);
        assert_eq!(drag.total_offset(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn moves_report_incremental_deltas() {
        let mut drag = DragState::default();
        drag.begin(Point::new(10.0, 10.0));

        assert_eq!(drag.move_to(Point::new(15.0, 13.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.move_to(Point::new(18.0, 17.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.move_to(Point::new(18.0, 17.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn total_offset_measures_from_start() {
        let mut drag = DragState::default();
        drag.begin(Point::new(10.0, 20.0));
        drag.move_to(Point::new(50.0, 50.0));

        assert_eq!(
            drag.total_offset(Point::new(25.0, 15.0)),
            Some(Vec2::new(15.0, -5.0))
        );
    }

    #[test]
    fn end_stops_tracking() {
        let mut drag = DragState::default();
        drag.begin(Point::new(0.0, 0.0));
        drag.end();

        assert!(!drag.is_active());
        assert_eq!(drag.move_to(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn begin_replaces_previous_drag() {
        let mut drag = DragState::default();
        drag.begin(Point::new(0.0, 0.0));
        drag.move_to(Point::new(100.0, 100.0));

        drag.begin(Point::new(40.0, 40.0));
        assert_eq!(
            drag.total_offset(Point::new(45.0, 50.0)),
            Some(Vec2::new(5.0, 10.0))
        );
    }
}
