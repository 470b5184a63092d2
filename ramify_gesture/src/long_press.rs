// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press tracking: a sustained press fires toggle without a select.

use core::hash::Hash;

use hashbrown::HashMap;

/// A press held at least this long is a long press.
pub const LONG_PRESS_MS: u64 = 500;

/// Outcome of releasing a tracked press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Ordinary release: route the activation through the select/double logic.
    Activate,
    /// The hold crossed the threshold without having been polled; the release
    /// itself delivers the long press.
    LongPress,
    /// A poll already fired the long press for this hold; the release must
    /// produce nothing further.
    Consumed,
    /// No press was being tracked for this target.
    NotPressed,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    down_ms: u64,
    fired: bool,
}

/// Tracks sustained presses per target.
///
/// Hosts record [`press`](LongPressState::press) on pointer-down, call
/// [`poll`](LongPressState::poll) from their tick to fire holds that cross the
/// threshold while still held, and [`release`](LongPressState::release) on
/// pointer-up. A hold fires at most once, and a fired hold never also
/// activates.
#[derive(Clone, Debug)]
pub struct LongPressState<K> {
    presses: HashMap<K, Press>,
    threshold_ms: u64,
}

impl<K: Eq + Hash + Copy> LongPressState<K> {
    /// Creates a state with the default 500 ms threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(LONG_PRESS_MS)
    }

    /// Creates a state with a custom threshold.
    #[must_use]
    pub fn with_threshold(threshold_ms: u64) -> Self {
        Self {
            presses: HashMap::new(),
            threshold_ms,
        }
    }

    /// Starts tracking a press on `target`. A second press on the same target
    /// restarts its hold.
    pub fn press(&mut self, target: K, now_ms: u64) {
        self.presses.insert(
            target,
            Press {
                down_ms: now_ms,
                fired: false,
            },
        );
    }

    /// Fires every hold that has crossed the threshold and not fired yet.
    ///
    /// Returns the targets whose long press fires on this poll, at most once
    /// per hold.
    pub fn poll(&mut self, now_ms: u64) -> Vec<K> {
        let mut fired = Vec::new();
        for (target, press) in &mut self.presses {
            if !press.fired && now_ms.saturating_sub(press.down_ms) >= self.threshold_ms {
                press.fired = true;
                fired.push(*target);
            }
        }
        fired
    }

    /// Stops tracking `target` and reports what the release means.
    pub fn release(&mut self, target: K, now_ms: u64) -> Release {
        let Some(press) = self.presses.remove(&target) else {
            return Release::NotPressed;
        };
        if press.fired {
            Release::Consumed
        } else if now_ms.saturating_sub(press.down_ms) >= self.threshold_ms {
            Release::LongPress
        } else {
            Release::Activate
        }
    }

    /// Drops a tracked press without any outcome (pointer cancel).
    pub fn cancel(&mut self, target: K) {
        self.presses.remove(&target);
    }

    /// Forgets all tracked presses.
    pub fn reset(&mut self) {
        self.presses.clear();
    }
}

impl<K: Eq + Hash + Copy> Default for LongPressState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_release_activates() {
        let mut state: LongPressState<u32> = LongPressState::new();
        state.press(1, 1_000);
        assert_eq!(state.release(1, 1_200), Release::Activate);
    }

    #[test]
    fn poll_fires_once_while_held() {
        let mut state: LongPressState<u32> = LongPressState::new();
        state.press(1, 1_000);

        assert!(state.poll(1_400).is_empty());
        assert_eq!(state.poll(1_500), vec![1]);
        assert!(state.poll(1_600).is_empty());
    }

    #[test]
    fn release_after_poll_is_consumed() {
        let mut state: LongPressState<u32> = LongPressState::new();
        state.press(1, 1_000);
        assert_eq!(state.poll(1_550), vec![1]);

        // The long press already toggled; the release must not also select.
        assert_eq!(state.release(1, 1_600), Release::Consumed);
    }

    #[test]
    fn unpolled_long_hold_fires_on_release() {
        let mut state: LongPressState<u32> = LongPressState::new();
        state.press(1, 1_000);
        assert_eq!(state.release(1, 1_700), Release::LongPress);
    }

    #[test]
    fn release_without_press_is_not_pressed() {
        let mut state: LongPressState<u32> = LongPressState::new();
        assert_eq!(state.release(1, 1_000), Release::NotPressed);
    }

    #[test]
    fn concurrent_presses_fire_independently() {
        let mut state: LongPressState<u32> = LongPressState::new();
        state.press(1, 1_000);
        state.press(2, 1_300);

        let mut fired = state.poll(1_550);
        fired.sort_unstable();
        assert_eq!(fired, vec![1]);

        let fired = state.poll(1_800);
        assert_eq!(fired, vec![2]);
    }

    #[test]
    fn repress_restarts_hold() {
        let mut state: LongPressState<u32> = LongPressState::new();
        state.press(1, 1_000);
        state.press(1, 1_400);

        assert!(state.poll(1_600).is_empty());
        assert_eq!(state.poll(1_900), vec![1]);
    }

    #[test]
    fn cancel_drops_press_silently() {
        let mut state: LongPressState<u32> = LongPressState::new();
        state.press(1, 1_000);
        state.cancel(1);

        assert!(state.poll(2_000).is_empty());
        assert_eq!(state.release(1, 2_000), Release::NotPressed);
    }
}
