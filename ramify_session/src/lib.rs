// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Session: the orchestration layer of the mind-map engine.
//!
//! A [`Session`] ties together the node store, the band layout, the gesture
//! recognizer, the pan/zoom view transform, and the expansion controller. The
//! host owns the windowing, rendering, and transport; the session owns every
//! decision in between:
//!
//! - raw input ([`InputEvent`]) is disambiguated into select/toggle/pan/zoom
//!   intents and answered with [`Effect`]s;
//! - every structural change is followed by a full layout pass, so geometry
//!   read from the store is always current;
//! - expand requests are routed live or to the offline provider by the rate
//!   governor, and a global busy gate drops activations while one is in
//!   flight.
//!
//! ## Example
//!
//! ```rust
//! use ramify_expand::OfflineService;
//! use ramify_session::{InputEvent, Session};
//!
//! let mut session = Session::new("an interested learner", "learning");
//! let mut service = OfflineService::new();
//! let root = session.generate(&mut service, "Finance", 0);
//!
//! // Two quick presses on the root resolve to a toggle request...
//! session.handle(InputEvent::PressStart { target: root, now_ms: 1_000 });
//! session.handle(InputEvent::PressEnd { target: root, now_ms: 1_050 });
//! session.handle(InputEvent::PressStart { target: root, now_ms: 1_150 });
//! session.handle(InputEvent::PressEnd { target: root, now_ms: 1_200 });
//!
//! // ...which the host drives through its expand service.
//! session.toggle(&mut service, root, 1_200).unwrap();
//! assert_eq!(session.store().len(), 4);
//! ```

pub mod event;
pub mod session;

pub use event::{Effect, InputEvent, Key};
pub use session::{ROOT_FALLBACK_DESCRIPTION, Session};
