// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The expand-service wire contract and the trait it is consumed through.

use serde::{Deserialize, Serialize};

/// Every successful expansion returns exactly this many subcategories.
pub const SUBCATEGORY_COUNT: usize = 3;

/// One ancestor entry in the request's breadcrumb path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Ancestor label.
    pub name: String,
    /// Ancestor description at request time.
    pub description: String,
}

/// Request sent to the expand service for one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandRequest {
    /// The label of the node being expanded.
    pub subject: String,
    /// Breadcrumb context: ancestor labels from root to the node, joined.
    pub context: String,
    /// Canonicalized labels already used along the ancestry (including the
    /// subject itself), so the service avoids near-duplicate siblings.
    pub exclude: Vec<String>,
    /// Full ancestry with descriptions, root→node order.
    pub path: Vec<PathEntry>,
    /// Reader perspective/audience the explanations are tailored to.
    pub perspective: String,
    /// Purpose/intent of the exploration.
    pub purpose: String,
}

/// One subcategory in a service response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Subcategory label; becomes a child node's label.
    pub name: String,
    /// One-sentence description; becomes the child's description.
    pub description: String,
}

/// Successful expand-service reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandResponse {
    /// Echo of the requested subject.
    pub subject: String,
    /// Refreshed description for the expanded node.
    pub description: String,
    /// Exactly [`SUBCATEGORY_COUNT`] subcategories.
    pub subcategories: Vec<Subcategory>,
}

impl ExpandResponse {
    /// Checks the schema constraints a reply must satisfy before it may be
    /// applied: a non-empty subject and exactly three subcategories.
    pub fn validate(&self) -> Result<(), ExpandError> {
        if self.subject.trim().is_empty() {
            return Err(ExpandError::MalformedResponse(
                "empty subject".to_owned(),
            ));
        }
        if self.subcategories.len() != SUBCATEGORY_COUNT {
            return Err(ExpandError::MalformedResponse(format!(
                "expected {SUBCATEGORY_COUNT} subcategories, got {}",
                self.subcategories.len()
            )));
        }
        Ok(())
    }

    /// Parses and validates a raw JSON reply.
    ///
    /// Both malformed JSON and a schema mismatch map to
    /// [`ExpandError::MalformedResponse`]; the caller cannot distinguish them
    /// and does not need to (both roll back the same way).
    pub fn from_json(raw: &str) -> Result<Self, ExpandError> {
        let response: Self = serde_json::from_str(raw)
            .map_err(|e| ExpandError::MalformedResponse(e.to_string()))?;
        response.validate()?;
        Ok(response)
    }
}

/// Failure modes of one expansion attempt.
///
/// Any of these maps to a single rollback at the controller boundary; no
/// partial application is ever observable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// The reply failed JSON parsing or schema validation.
    #[error("malformed expand response: {0}")]
    MalformedResponse(String),
    /// The service was unreachable or reported a transport-level failure.
    #[error("expand transport error: {0}")]
    Transport(String),
    /// The service rejected the call due to rate limiting.
    #[error("expand request rate limited")]
    RateLimited,
}

/// The opaque external expansion function.
///
/// Implementations may call out to a relay, serve from a fixed table
/// ([`OfflineService`](crate::OfflineService)), or script replies in tests.
/// The call is synchronous-equivalent from the controller's point of view:
/// hosts with a real async transport drive the controller's split-phase API
/// instead (see [`controller`](crate::controller)).
pub trait ExpandService {
    /// Expands one subject into a description and exactly three subcategories.
    fn expand(&mut self, request: &ExpandRequest) -> Result<ExpandResponse, ExpandError>;
}
