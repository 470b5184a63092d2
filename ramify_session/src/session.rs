// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session: one mind map, its view, and the glue between them.

use kurbo::{Rect, Vec2};
use ramify_expand::{
    Applied, ExpandError, ExpandRequest, ExpandResponse, ExpandService, ExpansionController,
    OfflineService, PathEntry, RateGovernor, Route, Toggle, canonicalize,
};
use ramify_gesture::drag::DragState;
use ramify_gesture::{Gesture, Recognizer};
use ramify_layout::{LayoutParams, layout, scene_bounds};
use ramify_tree::{NodeId, NodeStore};
use ramify_view2d::ViewTransform;

use crate::event::{Effect, InputEvent, Key};

/// Root description shown when the initial fetch fails.
pub const ROOT_FALLBACK_DESCRIPTION: &str = "No description is available right now.";

/// One interactive mind-map session.
///
/// Owns the node store, the layout constants, the view transform, the gesture
/// recognizer, the expansion controller, and the rate governor. The host
/// forwards raw input through [`Session::handle`] and reacts to the returned
/// [`Effect`]s; structural changes relayout before the call returns, so the
/// geometry the host reads is never stale.
#[derive(Debug)]
pub struct Session {
    store: NodeStore,
    params: LayoutParams,
    view: ViewTransform,
    recognizer: Recognizer<NodeId>,
    drag: DragState,
    /// View translation captured at drag start; `start + total_offset` is
    /// applied on every move.
    pan_start: Option<Vec2>,
    controller: ExpansionController,
    governor: RateGovernor,
    viewport: Rect,
    selected: Option<NodeId>,
    perspective: String,
    purpose: String,
}

impl Session {
    /// Creates an empty session tailoring expansions to the given reader
    /// perspective and purpose.
    #[must_use]
    pub fn new(perspective: &str, purpose: &str) -> Self {
        Self {
            store: NodeStore::new(),
            params: LayoutParams::default(),
            view: ViewTransform::new(),
            recognizer: Recognizer::new(),
            drag: DragState::default(),
            pan_start: None,
            controller: ExpansionController::new(perspective, purpose),
            governor: RateGovernor::default(),
            viewport: Rect::ZERO,
            selected: None,
            perspective: perspective.to_owned(),
            purpose: purpose.to_owned(),
        }
    }

    /// The node store (geometry is current as of the last mutation).
    #[must_use]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// The layout constants in effect.
    #[must_use]
    pub fn layout_params(&self) -> &LayoutParams {
        &self.params
    }

    /// The current view transform.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// The currently selected node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// True while an expansion is in flight; activations are dropped.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.controller.is_busy()
    }

    /// Tells the session the host's viewport, used as the keyboard zoom
    /// anchor and the fit target.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Replaces the rate governor (e.g. a host-configured call budget).
    pub fn set_rate_governor(&mut self, governor: RateGovernor) {
        self.governor = governor;
    }

    /// Starts a fresh map on `subject`.
    ///
    /// Clears the store and all interaction state, fetches the root's
    /// description through the usual governor routing (falling back to
    /// [`ROOT_FALLBACK_DESCRIPTION`] on failure), creates the root, and lays
    /// out. The view transform is left alone; resetting it is the host's
    /// call.
    pub fn generate(
        &mut self,
        live: &mut dyn ExpandService,
        subject: &str,
        now_ms: u64,
    ) -> NodeId {
        self.store.clear();
        self.recognizer.reset();
        self.controller.reset();
        self.drag.end();
        self.pan_start = None;
        self.selected = None;

        let request = ExpandRequest {
            subject: subject.to_owned(),
            context: subject.to_owned(),
            exclude: vec![canonicalize(subject)],
            path: vec![PathEntry {
                name: subject.to_owned(),
                description: String::new(),
            }],
            perspective: self.perspective.clone(),
            purpose: self.purpose.clone(),
        };
        let description = match self.dispatch(live, &request, now_ms) {
            Ok(response) => response.description,
            Err(err) => {
                log::warn!("root description fetch for {subject:?} failed: {err}");
                ROOT_FALLBACK_DESCRIPTION.to_owned()
            }
        };

        let root = self
            .store
            .create_root(subject, &description)
            .expect("store was just cleared");
        layout(&mut self.store, &self.params);
        root
    }

    /// Routes one input event to selection, gesture, or view handling.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::Activate { target, now_ms } => {
                let gesture = self.recognizer.on_activate(target, now_ms);
                self.apply_gesture(gesture).into_iter().collect()
            }
            InputEvent::PressStart { target, now_ms } => {
                self.recognizer.on_press(target, now_ms);
                Vec::new()
            }
            InputEvent::PressEnd { target, now_ms } => self
                .recognizer
                .on_release(target, now_ms)
                .and_then(|g| self.apply_gesture(g))
                .into_iter()
                .collect(),
            InputEvent::PressCancel { target } => {
                self.recognizer.cancel(target);
                Vec::new()
            }
            InputEvent::Tick { now_ms } => {
                let fired = self.recognizer.poll(now_ms);
                fired
                    .into_iter()
                    .filter_map(|g| self.apply_gesture(g))
                    .collect()
            }
            InputEvent::DragStart { pos } => {
                self.drag.begin(pos);
                self.pan_start = Some(self.view.translation());
                Vec::new()
            }
            InputEvent::DragMove { pos } => {
                if let (Some(start), Some(offset)) = (self.pan_start, self.drag.total_offset(pos))
                {
                    self.drag.move_to(pos);
                    self.view.set_translation(start + offset);
                    vec![Effect::ViewChanged]
                } else {
                    Vec::new()
                }
            }
            InputEvent::DragEnd => {
                self.drag.end();
                self.pan_start = None;
                Vec::new()
            }
            InputEvent::Wheel { anchor, factor } => {
                self.view.zoom_about(anchor, factor);
                vec![Effect::ViewChanged]
            }
            InputEvent::Key(key) => match key {
                Key::Nudge(direction) => {
                    self.view.nudge(direction);
                    vec![Effect::ViewChanged]
                }
                Key::ZoomIn => {
                    self.view.zoom_step(self.viewport.center(), true);
                    vec![Effect::ViewChanged]
                }
                Key::ZoomOut => {
                    self.view.zoom_step(self.viewport.center(), false);
                    vec![Effect::ViewChanged]
                }
                Key::ResetView => {
                    self.view.reset();
                    vec![Effect::ViewChanged]
                }
                Key::Fit => {
                    if self.fit() {
                        vec![Effect::ViewChanged]
                    } else {
                        Vec::new()
                    }
                }
            },
        }
    }

    /// Drives a full toggle on `id` through `live`, with governor routing and
    /// relayout.
    pub fn toggle(
        &mut self,
        live: &mut dyn ExpandService,
        id: NodeId,
        now_ms: u64,
    ) -> Result<Applied, ExpandError> {
        match self.controller.begin_toggle(&mut self.store, id) {
            Toggle::Busy | Toggle::Missing => Ok(Applied::Ignored),
            Toggle::Collapsed => {
                self.after_mutation();
                Ok(Applied::Collapsed)
            }
            Toggle::Pending(request) => {
                let result = self.dispatch(live, &request, now_ms);
                let applied = self.controller.complete(&mut self.store, id, result);
                self.after_mutation();
                applied
            }
        }
    }

    /// Split-phase entry for async hosts: starts a toggle without resolving
    /// it. Collapse still happens synchronously in here.
    pub fn begin_toggle(&mut self, id: NodeId) -> Toggle {
        let toggle = self.controller.begin_toggle(&mut self.store, id);
        if toggle == Toggle::Collapsed {
            self.after_mutation();
        }
        toggle
    }

    /// Split-phase completion for async hosts.
    pub fn complete(
        &mut self,
        id: NodeId,
        result: Result<ExpandResponse, ExpandError>,
    ) -> Result<Applied, ExpandError> {
        let applied = self.controller.complete(&mut self.store, id, result);
        self.after_mutation();
        applied
    }

    /// Routing decision for a request an async host is about to dispatch.
    pub fn route(&mut self, now_ms: u64) -> Route {
        self.governor.route(now_ms)
    }

    /// Fits the laid-out scene into the viewport. False when there is nothing
    /// to fit.
    pub fn fit(&mut self) -> bool {
        match scene_bounds(&self.store, &self.params) {
            Some(world) => {
                self.view.fit_rect(self.viewport, world);
                true
            }
            None => false,
        }
    }

    /// Sends `request` live or to the offline provider per the governor.
    fn dispatch(
        &mut self,
        live: &mut dyn ExpandService,
        request: &ExpandRequest,
        now_ms: u64,
    ) -> Result<ExpandResponse, ExpandError> {
        match self.governor.route(now_ms) {
            Route::Live => live.expand(request),
            Route::Degraded(reason) => {
                log::debug!(
                    "serving {:?} from the offline provider: {reason:?}",
                    request.subject
                );
                OfflineService::new().expand(request)
            }
        }
    }

    /// Resolves a classified gesture into an effect, honoring the busy gate.
    fn apply_gesture(&mut self, gesture: Gesture<NodeId>) -> Option<Effect> {
        if self.controller.is_busy() {
            log::debug!("dropping {gesture:?} while an expansion is in flight");
            return None;
        }
        match gesture {
            Gesture::Select(id) => {
                if self.store.contains(id) {
                    self.selected = Some(id);
                    Some(Effect::Selected(id))
                } else {
                    None
                }
            }
            Gesture::Toggle(id) => self.store.contains(id).then_some(Effect::ToggleRequested(id)),
        }
    }

    /// Relayout plus selection hygiene after any structural change.
    fn after_mutation(&mut self) {
        layout(&mut self.store, &self.params);
        if let Some(selected) = self.selected
            && !self.store.contains(selected)
        {
            self.selected = None;
        }
    }
}
