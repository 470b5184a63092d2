// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single vs. double activation classification with a per-target window.

use core::hash::Hash;

use hashbrown::HashMap;

/// Two activations on the same target closer than this are one double.
pub const DOUBLE_PRESS_WINDOW_MS: u64 = 300;

/// Classification of one activation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Single activation: select the target.
    Select,
    /// Double activation: toggle the target's expansion.
    Toggle,
}

/// Tracks the last activation timestamp per target.
///
/// The map has one entry per target ever activated and lives for the whole
/// session (bounded by the total number of nodes created); it is reset only by
/// [`ActivationState::reset`], not by node deletion.
#[derive(Clone, Debug)]
pub struct ActivationState<K> {
    last_activation: HashMap<K, u64>,
    window_ms: u64,
}

impl<K: Eq + Hash + Copy> ActivationState<K> {
    /// Creates a state with the default 300 ms double-activation window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(DOUBLE_PRESS_WINDOW_MS)
    }

    /// Creates a state with a custom window.
    #[must_use]
    pub fn with_window(window_ms: u64) -> Self {
        Self {
            last_activation: HashMap::new(),
            window_ms,
        }
    }

    /// Classifies an activation on `target` at `now_ms`.
    ///
    /// A double fires [`Activation::Toggle`] and consumes the recorded
    /// timestamp (resets it to 0), so a third rapid activation is classified
    /// as a fresh select rather than another toggle.
    pub fn on_activate(&mut self, target: K, now_ms: u64) -> Activation {
        let delta = self
            .last_activation
            .get(&target)
            .map(|last| now_ms.saturating_sub(*last));
        match delta {
            Some(delta) if delta < self.window_ms => {
                self.last_activation.insert(target, 0);
                Activation::Toggle
            }
            _ => {
                self.last_activation.insert(target, now_ms);
                Activation::Select
            }
        }
    }

    /// Forgets every recorded timestamp (full session reinitialize).
    pub fn reset(&mut self) {
        self.last_activation.clear();
    }
}

impl<K: Eq + Hash + Copy> Default for ActivationState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_activation_selects() {
        let mut state: ActivationState<u32> = ActivationState::new();
        assert_eq!(state.on_activate(1, 5_000), Activation::Select);
    }

    #[test]
    fn double_within_window_toggles_once() {
        let mut state: ActivationState<u32> = ActivationState::new();

        assert_eq!(state.on_activate(1, 1_000), Activation::Select);
        assert_eq!(state.on_activate(1, 1_250), Activation::Toggle);
    }

    #[test]
    fn slow_second_activation_selects_again() {
        let mut state: ActivationState<u32> = ActivationState::new();

        assert_eq!(state.on_activate(1, 1_000), Activation::Select);
        assert_eq!(state.on_activate(1, 1_300), Activation::Select);
        assert_eq!(state.on_activate(1, 2_000), Activation::Select);
    }

    #[test]
    fn third_rapid_tap_does_not_retrigger() {
        let mut state: ActivationState<u32> = ActivationState::new();

        assert_eq!(state.on_activate(1, 1_000), Activation::Select);
        assert_eq!(state.on_activate(1, 1_100), Activation::Toggle);
        // The toggle consumed the timestamp; this starts a new pair.
        assert_eq!(state.on_activate(1, 1_200), Activation::Select);
        assert_eq!(state.on_activate(1, 1_290), Activation::Toggle);
    }

    #[test]
    fn targets_have_independent_windows() {
        let mut state: ActivationState<u32> = ActivationState::new();

        assert_eq!(state.on_activate(1, 1_000), Activation::Select);
        // A different node inside node 1's window still selects.
        assert_eq!(state.on_activate(2, 1_100), Activation::Select);
        // And each completes its own double independently.
        assert_eq!(state.on_activate(1, 1_200), Activation::Toggle);
        assert_eq!(state.on_activate(2, 1_250), Activation::Toggle);
    }

    #[test]
    fn custom_window_is_respected() {
        let mut state: ActivationState<u32> = ActivationState::with_window(50);

        assert_eq!(state.on_activate(1, 1_000), Activation::Select);
        assert_eq!(state.on_activate(1, 1_060), Activation::Select);
        assert_eq!(state.on_activate(1, 1_100), Activation::Toggle);
    }

    #[test]
    fn reset_forgets_history() {
        let mut state: ActivationState<u32> = ActivationState::new();
        state.on_activate(1, 1_000);
        state.reset();

        // Without reset this would have been a toggle.
        assert_eq!(state.on_activate(1, 1_100), Activation::Select);
    }
}
