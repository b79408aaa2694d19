//! Union of released records and planned stubs
//!
//! Keying and overwrite rules:
//! - Released records enter a version-keyed map, first occurrence wins;
//!   later duplicates of one version are listing noise, not candidates
//!   (slug lookups go through the resolver, which sees all duplicates)
//! - Planned stubs then insert/overwrite under their version: a roadmap
//!   entry for an already-released version replaces it in the listing
//! - Everything leaves as the default-filled view, sorted by version
//!   descending (raw version string descending as the final tie key, so
//!   equal-parse oddities like `1.0` vs `v1.0.0` still order the same way
//!   every call)

use std::collections::BTreeMap;

use crate::record::{PlannedVersion, ResolvedVersion, VersionRecord};
use crate::version;

/// Merges both collections into one de-duplicated, ordered listing.
/// Total: empty inputs produce an empty listing.
pub fn merge(records: &[VersionRecord], planned: &[PlannedVersion]) -> Vec<ResolvedVersion> {
    let mut keyed: BTreeMap<&str, ResolvedVersion> = BTreeMap::new();

    for record in records {
        keyed
            .entry(record.version.as_str())
            .or_insert_with(|| ResolvedVersion::from_record(record));
    }

    for stub in planned {
        keyed.insert(stub.version.as_str(), ResolvedVersion::from_planned(stub));
    }

    let mut merged: Vec<ResolvedVersion> = keyed.into_values().collect();
    merged.sort_by(|a, b| {
        version::compare(&b.version, &a.version).then_with(|| b.version.cmp(&a.version))
    });
    merged
}
