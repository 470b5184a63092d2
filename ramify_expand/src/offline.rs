// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degraded/offline expansion: pre-baked records, no network, never fails.

use crate::canonical::canonicalize;
use crate::service::{ExpandError, ExpandRequest, ExpandResponse, ExpandService, Subcategory};

/// A pre-baked expansion record.
struct DemoRecord {
    subject: &'static str,
    description: &'static str,
    subcategories: [(&'static str, &'static str); 3],
}

/// Subjects with dedicated demo content; anything else gets the generic record.
const DEMO_RECORDS: &[DemoRecord] = &[
    DemoRecord {
        subject: "finance",
        description: "How money flows and is managed: earning, saving, investing, borrowing, and risk.",
        subcategories: [
            (
                "Personal Finance",
                "Managing individual or family money, including budgeting, saving, and investing.",
            ),
            (
                "Corporate Finance",
                "How businesses manage funds, make investments, and maximize shareholder value.",
            ),
            (
                "Investment",
                "Growing wealth through stocks, bonds, real estate, and other financial instruments.",
            ),
        ],
    },
    DemoRecord {
        subject: "technology",
        description: "The application of scientific knowledge for practical purposes, especially in industry and daily life.",
        subcategories: [
            (
                "Artificial Intelligence",
                "Systems that can simulate human intelligence and perform tasks like learning and problem-solving.",
            ),
            (
                "Cloud Computing",
                "Delivery of computing services over the internet, including storage, processing, and software.",
            ),
            (
                "Cybersecurity",
                "Protection of computer systems and networks from information disclosure and theft.",
            ),
        ],
    },
];

const GENERIC_RECORD: DemoRecord = DemoRecord {
    subject: "",
    description: "A broad topic that can be explored through its main ideas, methods, and uses.",
    subcategories: [
        (
            "Core Concepts",
            "The fundamental ideas and vocabulary needed to reason about the topic.",
        ),
        (
            "Key Methods",
            "The established techniques and practices used to work within the topic.",
        ),
        (
            "Applications",
            "Where and how the topic shows up in real-world situations.",
        ),
    ],
};

/// Serves expansions from a small fixed table.
///
/// Lookup canonicalizes the bare subject string; unknown subjects fall back to
/// a generic record. Replies always satisfy the response schema and the call
/// resolves immediately, which makes this both the demo mode and the
/// degraded path the rate governor reroutes to.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineService;

impl OfflineService {
    /// Creates the offline provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Builds the demo reply for a bare subject, outside any request context.
    ///
    /// Used to seed a fresh root's description before the first expansion.
    #[must_use]
    pub fn lookup(subject: &str) -> ExpandResponse {
        let canonical = canonicalize(subject);
        let record = DEMO_RECORDS
            .iter()
            .find(|r| r.subject == canonical)
            .unwrap_or(&GENERIC_RECORD);
        ExpandResponse {
            subject: subject.to_owned(),
            description: record.description.to_owned(),
            subcategories: record
                .subcategories
                .iter()
                .map(|(name, description)| Subcategory {
                    name: (*name).to_owned(),
                    description: (*description).to_owned(),
                })
                .collect(),
        }
    }
}

impl ExpandService for OfflineService {
    fn expand(&mut self, request: &ExpandRequest) -> Result<ExpandResponse, ExpandError> {
        Ok(Self::lookup(&request.subject))
    }
}
