// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of the activation and long-press channels into one classifier.

use core::hash::Hash;

use crate::activation::{Activation, ActivationState};
use crate::long_press::{LongPressState, Release};

/// A classified gesture on a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture<K> {
    /// Show the target (single activation).
    Select(K),
    /// Expand or collapse the target (double activation or long press).
    Toggle(K),
}

/// The gesture disambiguator: owns the per-target activation window and the
/// long-press channel.
///
/// Hosts feed raw press/release pairs through [`Recognizer::on_press`] /
/// [`Recognizer::on_release`] and call [`Recognizer::poll`] from their tick.
/// Input backends that already synthesize activation events (e.g. a platform
/// `click`) can bypass press tracking via [`Recognizer::on_activate`].
#[derive(Clone, Debug)]
pub struct Recognizer<K: Eq + Hash + Copy> {
    activation: ActivationState<K>,
    long_press: LongPressState<K>,
}

impl<K: Eq + Hash + Copy> Default for Recognizer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Copy> Recognizer<K> {
    /// Creates a recognizer with the default window and threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            activation: ActivationState::new(),
            long_press: LongPressState::new(),
        }
    }

    /// Records a press on `target`.
    pub fn on_press(&mut self, target: K, now_ms: u64) {
        self.long_press.press(target, now_ms);
    }

    /// Fires toggles for every hold that crossed the long-press threshold.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Gesture<K>> {
        self.long_press
            .poll(now_ms)
            .into_iter()
            .map(Gesture::Toggle)
            .collect()
    }

    /// Resolves a release on `target`.
    ///
    /// A hold consumed by the long-press channel yields nothing (the toggle
    /// already fired); an unpolled long hold yields the toggle now; an
    /// ordinary release routes through the select/double-activation logic.
    pub fn on_release(&mut self, target: K, now_ms: u64) -> Option<Gesture<K>> {
        match self.long_press.release(target, now_ms) {
            Release::Consumed => None,
            Release::LongPress => Some(Gesture::Toggle(target)),
            Release::Activate | Release::NotPressed => Some(self.classify(target, now_ms)),
        }
    }

    /// Classifies a synthesized activation without press tracking.
    pub fn on_activate(&mut self, target: K, now_ms: u64) -> Gesture<K> {
        self.classify(target, now_ms)
    }

    /// Drops a tracked press without any outcome (pointer cancel).
    pub fn cancel(&mut self, target: K) {
        self.long_press.cancel(target);
    }

    /// Forgets all gesture history (full session reinitialize).
    pub fn reset(&mut self) {
        self.activation.reset();
        self.long_press.reset();
    }

    fn classify(&mut self, target: K, now_ms: u64) -> Gesture<K> {
        match self.activation.on_activate(target, now_ms) {
            Activation::Select => Gesture::Select(target),
            Activation::Toggle => Gesture::Toggle(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_selects_and_double_tap_toggles() {
        let mut rec: Recognizer<u32> = Recognizer::new();

        rec.on_press(1, 1_000);
        assert_eq!(rec.on_release(1, 1_080), Some(Gesture::Select(1)));

        rec.on_press(1, 1_150);
        assert_eq!(rec.on_release(1, 1_220), Some(Gesture::Toggle(1)));
    }

    #[test]
    fn long_press_toggles_without_select() {
        let mut rec: Recognizer<u32> = Recognizer::new();

        rec.on_press(1, 1_000);
        assert_eq!(rec.poll(1_500), vec![Gesture::Toggle(1)]);
        // The release after a fired hold produces nothing.
        assert_eq!(rec.on_release(1, 1_600), None);
    }

    #[test]
    fn unpolled_long_hold_toggles_on_release() {
        let mut rec: Recognizer<u32> = Recognizer::new();

        rec.on_press(1, 1_000);
        assert_eq!(rec.on_release(1, 1_800), Some(Gesture::Toggle(1)));
    }

    #[test]
    fn long_press_does_not_pollute_double_window() {
        let mut rec: Recognizer<u32> = Recognizer::new();

        rec.on_press(1, 1_000);
        rec.poll(1_500);
        rec.on_release(1, 1_550);

        // A tap right after a long press is a fresh select, not a double.
        rec.on_press(1, 1_600);
        assert_eq!(rec.on_release(1, 1_650), Some(Gesture::Select(1)));
    }

    #[test]
    fn different_targets_are_independent() {
        let mut rec: Recognizer<u32> = Recognizer::new();

        rec.on_press(1, 1_000);
        assert_eq!(rec.on_release(1, 1_050), Some(Gesture::Select(1)));
        rec.on_press(2, 1_100);
        assert_eq!(rec.on_release(2, 1_150), Some(Gesture::Select(2)));
        rec.on_press(1, 1_200);
        assert_eq!(rec.on_release(1, 1_240), Some(Gesture::Toggle(1)));
    }

    #[test]
    fn synthesized_activations_classify_directly() {
        let mut rec: Recognizer<u32> = Recognizer::new();

        assert_eq!(rec.on_activate(9, 2_000), Gesture::Select(9));
        assert_eq!(rec.on_activate(9, 2_100), Gesture::Toggle(9));
    }

    #[test]
    fn cancel_produces_no_gesture() {
        let mut rec: Recognizer<u32> = Recognizer::new();
        rec.on_press(1, 1_000);
        rec.cancel(1);

        assert!(rec.poll(2_000).is_empty());
    }

    #[test]
    fn reset_clears_both_channels() {
        let mut rec: Recognizer<u32> = Recognizer::new();
        rec.on_activate(1, 1_000);
        rec.on_press(2, 1_000);
        rec.reset();

        assert_eq!(rec.on_activate(1, 1_100), Gesture::Select(1));
        assert!(rec.poll(2_000).is_empty());
    }
}
