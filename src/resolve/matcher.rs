//! Candidate matching: which records could a token mean?
//!
//! Duplicate slugs and versions across a collection are expected content,
//! not an error; the matcher returns them all and leaves choosing to the
//! tie-break policy.

use crate::record::VersionedRecord;
use crate::slug::normalize;

/// Returns every record the token matches, in input order.
///
/// A record matches when any of these hold, checked in order:
/// 1. Its explicit `slug` field equals the token verbatim
/// 2. Its `version` field equals the token verbatim
/// 3. The normalized token equals the normalized form of any of its
///    lookup variants
///
/// The verbatim checks exist for the two fields authors address records by
/// directly; everything else goes through normalization so `V1.2.0`,
/// `v1-2-0`, and `guide-v1.2.0` all land on the same records.
pub fn candidates<'a, R: VersionedRecord>(records: &'a [R], token: &str) -> Vec<&'a R> {
    let normalized = normalize(token);

    records
        .iter()
        .filter(|record| matches_token(*record, token, &normalized))
        .collect()
}

fn matches_token<R: VersionedRecord>(record: &R, token: &str, normalized: &str) -> bool {
    if record.slug() == Some(token) {
        return true;
    }

    if !record.version().is_empty() && record.version() == token {
        return true;
    }

    record
        .lookup_variants()
        .iter()
        .any(|variant| normalize(variant) == normalized)
}
