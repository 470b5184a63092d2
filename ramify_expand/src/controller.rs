// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The optimistic expansion state machine.
//!
//! Per node, the phase runs `Collapsed → Expanding → {Expanded | Collapsed}`:
//! a toggle on a collapsed node flips its expanded flag immediately (so the UI
//! responds before the service does), hands the caller an [`ExpandRequest`],
//! and settles when the completion arrives — children appended on success,
//! flag rolled back on failure. A toggle on an expanded node collapses
//! synchronously with no service involvement.
//!
//! While an expansion is in flight a global busy flag gates all new toggles;
//! the reference behavior serializes expansions. Completions for nodes that
//! were deleted while pending settle as clean no-ops (the store's targeted
//! mutators are idempotent), which is the whole cancellation story: there is
//! none, late results are simply dropped.

use hashbrown::HashMap;
use ramify_tree::{NodeId, NodeStore};

use crate::canonical::canonicalize;
use crate::service::{
    ExpandError, ExpandRequest, ExpandResponse, ExpandService, PathEntry, SUBCATEGORY_COUNT,
};

/// Expansion phase of a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No children from expansion; a toggle would start one.
    Collapsed,
    /// An expansion is in flight for this node.
    Expanding,
    /// A successful expansion's children are present; a toggle would collapse.
    Expanded,
}

/// What a [`ExpansionController::begin_toggle`] call decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Another expansion is in flight; the activation is dropped.
    Busy,
    /// The target id has no live node; benign no-op.
    Missing,
    /// The node was expanded; its subtree was removed synchronously.
    Collapsed,
    /// An expansion began: send this request, then call
    /// [`ExpansionController::complete`] with the outcome.
    Pending(ExpandRequest),
}

/// Settled outcome of a toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Expansion succeeded; the new children, in response order.
    Expanded(Vec<NodeId>),
    /// The node was collapsed synchronously.
    Collapsed,
    /// The node was removed while its expansion was pending; nothing changed.
    Stale,
    /// The activation was dropped (busy, or the node was missing).
    Ignored,
}

/// Orchestrates fetch-on-expand against a [`NodeStore`].
///
/// The controller owns no nodes; it owns the per-node phases, the global busy
/// flag, and the reader perspective/purpose forwarded with every request.
/// Phases and the busy flag live for the whole session and are reset only by
/// [`ExpansionController::reset`] (a full regenerate), never by node deletion.
#[derive(Clone, Debug)]
pub struct ExpansionController {
    phases: HashMap<NodeId, Phase>,
    in_flight: Option<NodeId>,
    perspective: String,
    purpose: String,
}

impl ExpansionController {
    /// Creates a controller forwarding the given reader perspective and
    /// purpose with every request.
    #[must_use]
    pub fn new(perspective: &str, purpose: &str) -> Self {
        Self {
            phases: HashMap::new(),
            in_flight: None,
            perspective: perspective.to_owned(),
            purpose: purpose.to_owned(),
        }
    }

    /// True while any expansion is in flight. Hosts gate new toggle/select
    /// activations on this.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Current phase of `id`.
    #[must_use]
    pub fn phase(&self, id: NodeId) -> Phase {
        self.phases.get(&id).copied().unwrap_or(Phase::Collapsed)
    }

    /// Starts or resolves a toggle on `id`.
    ///
    /// Collapse happens synchronously in here. The expand path flips the
    /// node's flag optimistically, marks the controller busy, and returns the
    /// request for the caller to dispatch.
    pub fn begin_toggle(&mut self, store: &mut NodeStore, id: NodeId) -> Toggle {
        if self.in_flight.is_some() {
            return Toggle::Busy;
        }
        let Some(node) = store.get(id) else {
            return Toggle::Missing;
        };

        if node.expanded {
            let children: Vec<NodeId> = node.children.iter().copied().collect();
            for child in children {
                store.remove_subtree(child);
            }
            store.set_expanded(id, false);
            self.phases.insert(id, Phase::Collapsed);
            return Toggle::Collapsed;
        }

        let request = self.build_request(store, id);
        store.set_expanded(id, true);
        self.phases.insert(id, Phase::Expanding);
        self.in_flight = Some(id);
        Toggle::Pending(request)
    }

    /// Applies the outcome of a pending expansion.
    ///
    /// On success the response is schema-checked, the description refreshed,
    /// and exactly three children appended. On failure the optimistic flag is
    /// rolled back, diagnostics are logged, and the error surfaces to the
    /// caller (the tree is left unchanged — the user may simply toggle again).
    /// A completion for a node that no longer exists settles as
    /// [`Applied::Stale`] without touching the store.
    pub fn complete(
        &mut self,
        store: &mut NodeStore,
        id: NodeId,
        result: Result<ExpandResponse, ExpandError>,
    ) -> Result<Applied, ExpandError> {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }
        if !store.contains(id) {
            self.phases.remove(&id);
            log::debug!("dropping expansion result for removed node {id}");
            return Ok(Applied::Stale);
        }

        let response = match result.and_then(|r| r.validate().map(|()| r)) {
            Ok(response) => response,
            Err(err) => {
                store.set_expanded(id, false);
                self.phases.insert(id, Phase::Collapsed);
                log::warn!(
                    "expansion of {} failed, rolling back: {err}",
                    store.debug_name(id).unwrap_or_else(|| id.to_string())
                );
                return Err(err);
            }
        };

        store.set_description(id, &response.description);
        let mut children = Vec::with_capacity(SUBCATEGORY_COUNT);
        for subcategory in &response.subcategories {
            let child = store
                .add_child(id, &subcategory.name, &subcategory.description)
                .expect("parent liveness checked above");
            children.push(child);
        }
        self.phases.insert(id, Phase::Expanded);
        Ok(Applied::Expanded(children))
    }

    /// Drives a full toggle through a synchronous-equivalent service.
    pub fn toggle(
        &mut self,
        store: &mut NodeStore,
        service: &mut dyn ExpandService,
        id: NodeId,
    ) -> Result<Applied, ExpandError> {
        match self.begin_toggle(store, id) {
            Toggle::Busy | Toggle::Missing => Ok(Applied::Ignored),
            Toggle::Collapsed => Ok(Applied::Collapsed),
            Toggle::Pending(request) => {
                let result = service.expand(&request);
                self.complete(store, id, result)
            }
        }
    }

    /// Forgets all phases and the busy flag (full session reinitialize).
    pub fn reset(&mut self) {
        self.phases.clear();
        self.in_flight = None;
    }

    /// Breadcrumb, exclusions, and reader framing for expanding `id`.
    fn build_request(&self, store: &NodeStore, id: NodeId) -> ExpandRequest {
        let ancestry = store.ancestry(id);
        let subject = ancestry
            .last()
            .map(|n| n.label.clone())
            .unwrap_or_default();
        let context = ancestry
            .iter()
            .map(|n| n.label.as_str())
            .collect::<Vec<_>>()
            .join(" > ");
        // Canonicalized ancestor labels plus the subject itself, so the
        // service cannot hand back a near-duplicate of anything on the path.
        let exclude = ancestry.iter().map(|n| canonicalize(&n.label)).collect();
        let path = ancestry
            .iter()
            .map(|n| PathEntry {
                name: n.label.clone(),
                description: n.description.clone(),
            })
            .collect();
        ExpandRequest {
            subject,
            context,
            exclude,
            path,
            perspective: self.perspective.clone(),
            purpose: self.purpose.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::OfflineService;
    use crate::service::Subcategory;

    /// Service stub that fails every call.
    struct FailingService(ExpandError);

    impl ExpandService for FailingService {
        fn expand(&mut self, _request: &ExpandRequest) -> Result<ExpandResponse, ExpandError> {
            Err(self.0.clone())
        }
    }

    /// Service stub returning a fixed, possibly invalid reply.
    struct FixedService(ExpandResponse);

    impl ExpandService for FixedService {
        fn expand(&mut self, _request: &ExpandRequest) -> Result<ExpandResponse, ExpandError> {
            Ok(self.0.clone())
        }
    }

    fn setup() -> (NodeStore, NodeId, ExpansionController) {
        let mut store = NodeStore::new();
        let root = store.create_root("Finance", "money flows").unwrap();
        let controller = ExpansionController::new("an interested learner", "learning");
        (store, root, controller)
    }

    #[test]
    fn finance_scenario_expand_then_collapse() {
        let (mut store, root, mut controller) = setup();
        let mut service = OfflineService::new();

        let applied = controller.toggle(&mut store, &mut service, root).unwrap();
        assert!(matches!(applied, Applied::Expanded(ref c) if c.len() == 3));
        assert_eq!(store.len(), 4);
        assert_eq!(store.edges().len(), 3);
        assert!(store.get(root).unwrap().expanded);
        assert_eq!(controller.phase(root), Phase::Expanded);
        assert!(!controller.is_busy());

        let applied = controller.toggle(&mut store, &mut service, root).unwrap();
        assert_eq!(applied, Applied::Collapsed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.edges().len(), 0);
        assert!(!store.get(root).unwrap().expanded);
        assert_eq!(controller.phase(root), Phase::Collapsed);
    }

    #[test]
    fn collapse_removes_deep_subtrees() {
        let (mut store, root, mut controller) = setup();
        let mut service = OfflineService::new();

        controller.toggle(&mut store, &mut service, root).unwrap();
        let child = store.get(root).unwrap().children[0];
        controller.toggle(&mut store, &mut service, child).unwrap();
        assert_eq!(store.len(), 7);

        controller.toggle(&mut store, &mut service, root).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.edges().is_empty());
    }

    #[test]
    fn failed_expansion_rolls_back_optimistic_flag() {
        let (mut store, root, mut controller) = setup();
        let mut service = FailingService(ExpandError::Transport("connection refused".to_owned()));

        let err = controller
            .toggle(&mut store, &mut service, root)
            .unwrap_err();
        assert!(matches!(err, ExpandError::Transport(_)));
        assert_eq!(store.len(), 1);
        assert!(!store.get(root).unwrap().expanded);
        assert_eq!(controller.phase(root), Phase::Collapsed);
        assert!(!controller.is_busy());

        // The user may retry by toggling again.
        let mut offline = OfflineService::new();
        let applied = controller.toggle(&mut store, &mut offline, root).unwrap();
        assert!(matches!(applied, Applied::Expanded(_)));
    }

    #[test]
    fn schema_mismatch_rolls_back_like_any_failure() {
        let (mut store, root, mut controller) = setup();
        let mut service = FixedService(ExpandResponse {
            subject: "Finance".to_owned(),
            description: "four is too many".to_owned(),
            subcategories: (0..4)
                .map(|i| Subcategory {
                    name: format!("S{i}"),
                    description: String::new(),
                })
                .collect(),
        });

        let err = controller
            .toggle(&mut store, &mut service, root)
            .unwrap_err();
        assert!(matches!(err, ExpandError::MalformedResponse(_)));
        assert_eq!(store.len(), 1);
        assert!(!store.get(root).unwrap().expanded);
        // The failed reply's description must not have been applied.
        assert_eq!(store.get(root).unwrap().description, "money flows");
    }

    #[test]
    fn optimistic_flag_is_set_while_pending() {
        let (mut store, root, mut controller) = setup();

        let toggle = controller.begin_toggle(&mut store, root);
        assert!(matches!(toggle, Toggle::Pending(_)));
        assert!(store.get(root).unwrap().expanded);
        assert_eq!(controller.phase(root), Phase::Expanding);
        assert!(controller.is_busy());
    }

    #[test]
    fn busy_flag_gates_concurrent_toggles() {
        let (mut store, root, mut controller) = setup();
        let mut service = OfflineService::new();
        controller.toggle(&mut store, &mut service, root).unwrap();
        let child = store.get(root).unwrap().children[0];

        let Toggle::Pending(request) = controller.begin_toggle(&mut store, child) else {
            panic!("expected pending expansion");
        };
        // Anything else is dropped while the first expansion is in flight,
        // including a second toggle on the same node.
        assert_eq!(controller.begin_toggle(&mut store, root), Toggle::Busy);
        assert_eq!(controller.begin_toggle(&mut store, child), Toggle::Busy);

        let mut offline = OfflineService::new();
        let result = offline.expand(&request);
        controller.complete(&mut store, child, result).unwrap();
        assert!(!controller.is_busy());
        assert!(matches!(
            controller.begin_toggle(&mut store, root),
            Toggle::Collapsed
        ));
    }

    #[test]
    fn late_completion_for_removed_node_is_a_clean_noop() {
        let (mut store, root, mut controller) = setup();
        let mut service = OfflineService::new();
        controller.toggle(&mut store, &mut service, root).unwrap();
        let child = store.get(root).unwrap().children[0];

        let Toggle::Pending(request) = controller.begin_toggle(&mut store, child) else {
            panic!("expected pending expansion");
        };
        // The whole branch disappears while the call is in flight.
        store.remove_subtree(child);
        let len_before = store.len();

        let mut offline = OfflineService::new();
        let result = offline.expand(&request);
        let applied = controller.complete(&mut store, child, result).unwrap();

        assert_eq!(applied, Applied::Stale);
        assert_eq!(store.len(), len_before);
        assert!(!store.contains(child));
        assert!(!controller.is_busy());
    }

    #[test]
    fn toggle_on_missing_node_is_ignored() {
        let (mut store, root, mut controller) = setup();
        let mut service = OfflineService::new();
        controller.toggle(&mut store, &mut service, root).unwrap();
        let child = store.get(root).unwrap().children[0];
        store.remove_subtree(child);

        assert_eq!(
            controller.toggle(&mut store, &mut service, child).unwrap(),
            Applied::Ignored
        );
    }

    #[test]
    fn request_carries_breadcrumb_and_canonical_exclusions() {
        let (mut store, root, mut controller) = setup();
        let mut service = OfflineService::new();
        controller.toggle(&mut store, &mut service, root).unwrap();
        // Offline finance record: first child is "Personal Finance".
        let child = store.get(root).unwrap().children[0];

        let Toggle::Pending(request) = controller.begin_toggle(&mut store, child) else {
            panic!("expected pending expansion");
        };

        assert_eq!(request.subject, "Personal Finance");
        assert_eq!(request.context, "Finance > Personal Finance");
        assert_eq!(request.exclude, vec!["finance", "personal finance"]);
        assert_eq!(request.path.len(), 2);
        assert_eq!(request.path[0].name, "Finance");
        assert_eq!(request.path[1].name, "Personal Finance");
        assert!(!request.path[1].description.is_empty());
        assert_eq!(request.perspective, "an interested learner");
        assert_eq!(request.purpose, "learning");
    }

    #[test]
    fn reset_clears_phases_and_busy_flag() {
        let (mut store, root, mut controller) = setup();
        let toggle = controller.begin_toggle(&mut store, root);
        assert!(matches!(toggle, Toggle::Pending(_)));

        controller.reset();
        assert!(!controller.is_busy());
        assert_eq!(controller.phase(root), Phase::Collapsed);
    }
}
