// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Gesture: small state machines that turn raw activations into intents.
//!
//! Mind-map nodes respond to three kinds of input, and the raw event streams
//! from pointer and touch devices do not distinguish them. This crate provides
//! focused state machines for each pattern, plus a [`Recognizer`] that
//! composes them:
//!
//! - [`activation::ActivationState`]: classifies an activation as **select**
//!   (single) or **toggle** (double, within a 300 ms per-node window).
//! - [`long_press::LongPressState`]: a separate channel that fires **toggle**
//!   after a sustained 500 ms press, suppressing the select that the release
//!   would otherwise produce.
//! - [`drag::DragState`]: movement deltas and total offsets for view panning.
//!
//! Each manager accepts application-specific target key types and raw
//! millisecond timestamps; none of them assume an event loop, a timer system,
//! or a particular input backend. Hosts drive [`long_press::LongPressState::poll`]
//! from whatever tick they have.
//!
//! ## Disambiguation rules
//!
//! For an activation on target `N` at time `T`, with `Δ` the time since the
//! last recorded activation on `N` (infinite when none):
//!
//! - `Δ < 300 ms` → **toggle**, and the recorded timestamp is consumed so a
//!   third rapid tap cannot re-trigger immediately.
//! - otherwise → **select**, and `T` is recorded.
//!
//! Windows are tracked per target: concurrent gestures on different nodes
//! never interfere with each other's timing.
//!
//! ## Example
//!
//! ```rust
//! use ramify_gesture::activation::{Activation, ActivationState};
//!
//! let mut state: ActivationState<u32> = ActivationState::new();
//!
//! assert_eq!(state.on_activate(7, 1_000), Activation::Select);
//! // A second activation inside the window is a toggle, not a second select.
//! assert_eq!(state.on_activate(7, 1_200), Activation::Toggle);
//! ```

pub mod activation;
pub mod drag;
pub mod long_press;
mod recognizer;

pub use recognizer::{Gesture, Recognizer};
