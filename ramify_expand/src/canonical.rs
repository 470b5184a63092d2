// Copyright 2026 the Ramify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label canonicalization for duplicate comparison.

/// Normalizes a label for duplicate detection and offline lookup.
///
/// Lowercases, treats whitespace and punctuation separators as word breaks,
/// drops every other non-alphanumeric character, and collapses each run of
/// breaks to a single space. The result lets the expand service reject
/// near-duplicate siblings ("Corporate Finance" vs `corporate-finance!`)
/// without exact string matches.
#[must_use]
pub fn canonicalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_break = false;
    for c in label.chars() {
        if c.is_alphanumeric() {
            if pending_break && !out.is_empty() {
                out.push(' ');
            }
            pending_break = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else if c.is_whitespace() || matches!(c, '-' | '_' | '/' | '.' | ',' | ':' | ';') {
            pending_break = true;
        }
        // Any other character (emoji, quotes, ...) is stripped without
        // introducing a break.
    }
    out
}

#[cfg(test)]
mod tests {
    use super::canonicalize;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(canonicalize("  Finance "), "finance");
        assert_eq!(canonicalize("BANKING"), "banking");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(canonicalize("Corporate   Finance"), "corporate finance");
        assert_eq!(canonicalize("risk--management"), "risk management");
        assert_eq!(canonicalize("a_b/c.d"), "a b c d");
    }

    #[test]
    fn strips_other_punctuation() {
        assert_eq!(canonicalize("What's new?"), "whats new");
        assert_eq!(canonicalize("(Investment)"), "investment");
    }

    #[test]
    fn near_duplicates_canonicalize_equal() {
        assert_eq!(
            canonicalize("Corporate Finance"),
            canonicalize("corporate-finance!")
        );
    }

    #[test]
    fn empty_and_symbol_only_labels() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("!!!"), "");
    }
}
