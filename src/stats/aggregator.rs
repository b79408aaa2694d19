//! Rollup computation over released records
//!
//! Missing or unparseable fields contribute nothing: a record without an
//! author adds no author, an unknown status tag lands in no bucket. The
//! rollup is total over arbitrarily malformed collections.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::record::{VersionRecord, VersionedRecord};
use crate::resolve;

/// Aggregate view of a released-record collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of released records
    pub total_sections: usize,
    /// Sum of per-record subsection counts
    pub total_subsections: usize,
    /// Frequency of each release classification, as authored
    pub by_version_type: BTreeMap<String, usize>,
    /// Frequency of each latest-status tag (canonical form)
    pub by_status: BTreeMap<String, usize>,
    /// Distinct tags across the collection
    pub unique_tags: usize,
    /// Distinct authors across the collection
    pub unique_authors: usize,
    /// Version of the record the tie-break policy ranks newest; planned
    /// stubs never participate
    pub latest_release: Option<String>,
}

/// Computes the rollup. Deterministic and side-effect free.
pub fn aggregate(records: &[VersionRecord]) -> Stats {
    let mut by_version_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    let mut tags: BTreeSet<&str> = BTreeSet::new();
    let mut authors: BTreeSet<&str> = BTreeSet::new();
    let mut total_subsections = 0;

    for record in records {
        total_subsections += record.subsections.len();

        if let Some(version_type) = non_empty(record.version_type.as_deref()) {
            *by_version_type.entry(version_type.to_string()).or_insert(0) += 1;
        }

        if let Some(status) = record.newest_history().and_then(|e| e.parsed_status()) {
            *by_status.entry(status.as_str().to_string()).or_insert(0) += 1;
        }

        tags.extend(record.tags.iter().map(String::as_str));

        if let Some(author) = non_empty(record.author.as_deref()) {
            authors.insert(author);
        }
    }

    let versioned: Vec<&VersionRecord> = records
        .iter()
        .filter(|record| !record.version.is_empty())
        .collect();

    Stats {
        total_sections: records.len(),
        total_subsections,
        by_version_type,
        by_status,
        unique_tags: tags.len(),
        unique_authors: authors.len(),
        latest_release: resolve::resolve(&versioned).map(|winner| winner.version.clone()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<VersionRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_aggregate_empty_collection() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_sections, 0);
        assert_eq!(stats.total_subsections, 0);
        assert!(stats.by_version_type.is_empty());
        assert!(stats.by_status.is_empty());
        assert_eq!(stats.unique_tags, 0);
        assert_eq!(stats.unique_authors, 0);
        assert_eq!(stats.latest_release, None);
    }

    #[test]
    fn test_aggregate_counts_and_buckets() {
        let docs = records(json!([
            {
                "version": "v2.0.0",
                "versionType": "major",
                "author": "Ada",
                "tags": ["api", "guide"],
                "subsections": [{}, {}, {}],
                "lastUpdated": "2024-06-01",
                "versionHistory": [
                    { "version": "v2.0.0", "status": "CURRENT", "date": "2024-06-01" }
                ]
            },
            {
                "version": "v1.0.0",
                "versionType": "major",
                "author": "Ada",
                "tags": ["guide", "legacy"],
                "subsections": [{}],
                "lastUpdated": "2023-01-01",
                "versionHistory": [
                    { "version": "v1.0.0", "status": "deprecated", "date": "2023-01-01" }
                ]
            },
            {
                "version": "v1.1.0",
                "versionType": "minor",
                "author": "Grace",
                "tags": ["api"]
            }
        ]));

        let stats = aggregate(&docs);
        assert_eq!(stats.total_sections, 3);
        assert_eq!(stats.total_subsections, 4);
        assert_eq!(stats.by_version_type.get("major"), Some(&2));
        assert_eq!(stats.by_version_type.get("minor"), Some(&1));
        assert_eq!(stats.by_status.get("CURRENT"), Some(&1));
        assert_eq!(stats.by_status.get("DEPRECATED"), Some(&1));
        assert_eq!(stats.unique_tags, 3);
        assert_eq!(stats.unique_authors, 2);
        assert_eq!(stats.latest_release.as_deref(), Some("v2.0.0"));
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let docs = records(json!([
            { "version": "v1.0.0" },
            { "version": "v1.0.1", "versionHistory": [
                { "version": "v1.0.1", "status": "shipped", "date": "" }
            ]}
        ]));

        let stats = aggregate(&docs);
        assert!(stats.by_version_type.is_empty());
        // "shipped" is no known tag; neither record lands in a bucket
        assert!(stats.by_status.is_empty());
        assert_eq!(stats.unique_authors, 0);
    }

    #[test]
    fn test_latest_release_prefers_current_over_newer_date() {
        let docs = records(json!([
            {
                "version": "v3.0.0",
                "lastUpdated": "2024-06-01",
                "versionHistory": [
                    { "version": "v3.0.0", "status": "DEPRECATED", "date": "2024-06-01" }
                ]
            },
            {
                "version": "v2.5.0",
                "lastUpdated": "2024-01-01",
                "versionHistory": [
                    { "version": "v2.5.0", "status": "CURRENT", "date": "2024-01-01" }
                ]
            }
        ]));

        let stats = aggregate(&docs);
        assert_eq!(stats.latest_release.as_deref(), Some("v2.5.0"));
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let docs = records(json!([
            { "version": "v1.0.0", "versionType": "minor", "tags": ["a"] },
            { "version": "v2.0.0", "versionType": "major", "tags": ["b"] }
        ]));

        let first = aggregate(&docs);
        for _ in 0..10 {
            assert_eq!(aggregate(&docs), first);
        }
    }
}
