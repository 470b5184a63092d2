// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ramify Expand: fetch-on-expand orchestration for the mind-map tree.
//!
//! Toggling a collapsed node asks an external text-generation service for a
//! description and exactly three subcategories; toggling an expanded node
//! removes its subtree synchronously. The [`ExpansionController`] drives this
//! with optimistic state: the expanded flag flips immediately for
//! responsiveness and is rolled back if the service call fails.
//!
//! The crate is split along the seams of that flow:
//!
//! - [`service`]: the wire contract ([`ExpandRequest`]/[`ExpandResponse`]) and
//!   the [`ExpandService`] trait the external service is reached through. The
//!   HTTP relay behind it is out of scope; tests and the offline path supply
//!   synchronous-equivalent implementations.
//! - [`offline`]: a degraded/demo provider serving pre-baked records; it never
//!   fails and needs no network.
//! - [`governor`]: local rate governance — a per-session call budget and a
//!   minimum inter-call spacing. Exceeding either routes requests to the
//!   offline provider instead of surfacing an error.
//! - [`controller`]: the optimistic state machine
//!   (`Collapsed → Expanding → {Expanded | Collapsed}`) with a global busy
//!   flag and idempotent late-completion handling.
//!
//! ## Error taxonomy
//!
//! All expansion failures are caught at the controller boundary and converted
//! into a rollback; none propagate further up. A missing node id is never an
//! error here — the store's targeted mutators are silent no-ops, which is what
//! makes a completion racing a deletion safe.
//!
//! ## Example
//!
//! ```rust
//! use ramify_expand::controller::ExpansionController;
//! use ramify_expand::offline::OfflineService;
//! use ramify_tree::NodeStore;
//!
//! let mut store = NodeStore::new();
//! let root = store.create_root("Finance", "").unwrap();
//! let mut controller = ExpansionController::new("an interested learner", "learning");
//! let mut service = OfflineService::new();
//!
//! controller.toggle(&mut store, &mut service, root).unwrap();
//! assert_eq!(store.len(), 4); // root plus exactly three children
//! assert!(store.get(root).unwrap().expanded);
//! ```

pub mod canonical;
pub mod controller;
pub mod governor;
pub mod offline;
pub mod service;

pub use canonical::canonicalize;
pub use controller::{Applied, ExpansionController, Phase, Toggle};
pub use governor::{DegradeReason, RateGovernor, Route};
pub use offline::OfflineService;
pub use service::{
    ExpandError, ExpandRequest, ExpandResponse, ExpandService, PathEntry, SUBCATEGORY_COUNT,
    Subcategory,
};
