//! Resolution Determinism Tests
//!
//! Tests for lookup invariants:
//! - The full token grammar lands on the right records
//! - Tie-breaking is order-independent
//! - Status precedence and freshness ordering behave as documented

use serde_json::json;
use verdex::record::{PlannedVersion, VersionRecord, VersionStatus};
use verdex::resolve::{candidates, explain, lookup, resolve, TieBreakRule};

// =============================================================================
// Helper Functions
// =============================================================================

fn records(value: serde_json::Value) -> Vec<VersionRecord> {
    serde_json::from_value(value).unwrap()
}

fn planned(value: serde_json::Value) -> Vec<PlannedVersion> {
    serde_json::from_value(value).unwrap()
}

fn doc(slug: &str, version: &str, status: &str, updated: &str) -> VersionRecord {
    serde_json::from_value(json!({
        "slug": slug,
        "version": version,
        "lastUpdated": updated,
        "versionHistory": [
            { "version": version, "status": status, "date": updated }
        ]
    }))
    .unwrap()
}

// =============================================================================
// Token Grammar Tests
// =============================================================================

/// Every documented token format resolves to the same record.
#[test]
fn test_token_grammar_equivalence() {
    let docs = records(json!([
        {
            "slug": "getting-started",
            "title": "Getting Started",
            "version": "v1.2.0",
            "lastUpdated": "2024-06-01",
            "versionHistory": [
                { "version": "v1.2.0", "status": "CURRENT", "date": "2024-06-01" }
            ]
        }
    ]));

    for token in [
        "getting-started",
        "v1.2.0",
        "1.2.0",
        "getting-started-v1.2.0",
        "getting-started-1.2.0",
        "getting-started-v1-2-0",
        "Getting-Started-V1.2.0",
    ] {
        let resolved = lookup(&docs, &[], token)
            .unwrap_or_else(|| panic!("token {token:?} did not resolve"));
        assert_eq!(resolved.version, "v1.2.0", "token {token:?}");
    }
}

/// Roadmap identifiers resolve only through the planned collection.
#[test]
fn test_comingsoon_grammar() {
    let docs = records(json!([{ "slug": "ai-chat", "version": "v1.0.0" }]));
    let stubs = planned(json!([{ "title": "AI Chat", "version": "v3.0.0" }]));

    let resolved = lookup(&docs, &stubs, "comingsoon-ai-chat-v3.0.0").unwrap();
    assert_eq!(resolved.version, "v3.0.0");
    assert_eq!(resolved.status, VersionStatus::Planned);

    // The released record shadows the bare slug
    let shadowed = lookup(&docs, &stubs, "ai-chat").unwrap();
    assert_eq!(shadowed.version, "v1.0.0");
}

/// A token matching nothing resolves to None in both collections.
#[test]
fn test_not_found_contract() {
    let docs = records(json!([{ "slug": "guide", "version": "v1.0.0" }]));
    assert!(lookup(&docs, &[], "absent").is_none());
    assert!(lookup(&[], &[], "anything").is_none());
}

/// Candidate order equals input order.
#[test]
fn test_candidates_stable_order() {
    let docs = records(json!([
        { "slug": "guide", "version": "v3.0.0" },
        { "slug": "guide", "version": "v1.0.0" },
        { "slug": "guide", "version": "v2.0.0" }
    ]));

    let found = candidates(&docs, "guide");
    let versions: Vec<&str> = found.iter().map(|r| r.version.as_str()).collect();
    assert_eq!(versions, ["v3.0.0", "v1.0.0", "v2.0.0"]);
}

// =============================================================================
// Order-Independence Tests
// =============================================================================

/// Every permutation of the candidate set picks the same winner.
#[test]
fn test_resolve_order_independent() {
    let a = doc("guide", "v1.0.0", "DEPRECATED", "2024-01-01");
    let b = doc("guide", "v2.0.0", "CURRENT", "2023-06-01");
    let c = doc("guide", "v1.5.0", "SUPPORTED", "2024-06-01");

    let permutations: Vec<Vec<&VersionRecord>> = vec![
        vec![&a, &b, &c],
        vec![&a, &c, &b],
        vec![&b, &a, &c],
        vec![&b, &c, &a],
        vec![&c, &a, &b],
        vec![&c, &b, &a],
    ];

    for permutation in permutations {
        let winner = resolve(&permutation).unwrap();
        assert_eq!(winner.version, "v2.0.0");
    }
}

/// Shuffling the input collection never changes a lookup outcome.
#[test]
fn test_lookup_order_independent() {
    let mut docs = records(json!([
        { "slug": "guide", "version": "v1.0.0", "lastUpdated": "2024-01-01" },
        { "slug": "guide", "version": "v3.0.0", "lastUpdated": "2024-03-01" },
        { "slug": "guide", "version": "v2.0.0", "lastUpdated": "2024-02-01" }
    ]));

    let expected = lookup(&docs, &[], "guide").unwrap().version;

    // Rotate through every cyclic ordering
    for _ in 0..docs.len() {
        docs.rotate_left(1);
        assert_eq!(lookup(&docs, &[], "guide").unwrap().version, expected);
    }
}

// =============================================================================
// Tie-Break Policy Tests
// =============================================================================

/// A unique CURRENT candidate wins even against a newer DEPRECATED one.
#[test]
fn test_status_precedence_over_date() {
    let current = doc("guide", "v1.0.0", "CURRENT", "2023-01-01");
    let deprecated = doc("guide", "v1.0.0", "DEPRECATED", "2024-06-01");

    let winner = resolve(&[&deprecated, &current]).unwrap();
    assert_eq!(winner.last_updated.as_deref(), Some("2023-01-01"));
}

/// With no CURRENT candidate, the newest date wins.
#[test]
fn test_date_tiebreak_non_current() {
    let older = doc("guide", "v1.0.0", "ARCHIVED", "2024-01-01");
    let newer = doc("guide", "v1.0.0", "DEPRECATED", "2024-06-01");

    let winner = resolve(&[&older, &newer]).unwrap();
    assert_eq!(winner.last_updated.as_deref(), Some("2024-06-01"));
}

/// With two CURRENT candidates, the newest date wins among them.
#[test]
fn test_date_tiebreak_two_currents() {
    let older = doc("guide", "v2.0.0", "CURRENT", "2024-01-01");
    let newer = doc("guide", "v2.1.0", "CURRENT", "2024-06-01");
    let noise = doc("guide", "v9.0.0", "ARCHIVED", "2025-01-01");

    // The ARCHIVED record is newest overall but outside the CURRENT pool
    let winner = resolve(&[&noise, &older, &newer]).unwrap();
    assert_eq!(winner.version, "v2.1.0");
}

/// Date ties fall through to version descending.
#[test]
fn test_version_tiebreak_on_equal_dates() {
    let low = doc("guide", "v1.9.0", "SUPPORTED", "2024-01-01");
    let high = doc("guide", "v1.10.0", "SUPPORTED", "2024-01-01");

    let winner = resolve(&[&low, &high]).unwrap();
    assert_eq!(winner.version, "v1.10.0");
}

/// Unparseable dates sort after any parseable date.
#[test]
fn test_unparseable_date_sorts_last() {
    let dated = doc("guide", "v0.1.0", "SUPPORTED", "2020-01-01");
    let undated = doc("guide", "v9.0.0", "SUPPORTED", "soon");

    let winner = resolve(&[&undated, &dated]).unwrap();
    assert_eq!(winner.version, "v0.1.0");
}

// =============================================================================
// Trace Agreement Tests
// =============================================================================

/// The trace always reports the same winner as the lookup, with a
/// consistent rule tag.
#[test]
fn test_explain_matches_lookup() {
    let docs = records(json!([
        {
            "slug": "guide",
            "version": "v1.0.0",
            "lastUpdated": "2024-01-01",
            "versionHistory": [
                { "version": "v1.0.0", "status": "CURRENT", "date": "2024-01-01" }
            ]
        },
        { "slug": "guide", "version": "v0.9.0", "lastUpdated": "2023-01-01" }
    ]));
    let stubs = planned(json!([{ "title": "Next", "version": "v2.0.0" }]));

    let cases = [
        ("guide", TieBreakRule::UniqueCurrent),
        ("v0.9.0", TieBreakRule::SingleCandidate),
        ("comingsoon-next", TieBreakRule::SingleCandidate),
        ("absent", TieBreakRule::NoneMatched),
    ];

    for (token, expected_rule) in cases {
        let trace = explain(&docs, &stubs, token);
        assert_eq!(trace.rule, expected_rule, "token {token:?}");
        assert_eq!(
            trace.winner_version,
            lookup(&docs, &stubs, token).map(|r| r.version),
            "token {token:?}"
        );
    }
}
