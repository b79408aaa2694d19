//! Two-collection lookup pipeline
//!
//! Released records are authoritative: a token resolves against them first,
//! and only a token no released record matches falls through to the
//! planned/roadmap stubs (where the `comingsoon-` grammar lives).

use super::matcher::candidates;
use super::tiebreak::{decide, resolve, TieBreakRule};
use super::trace::ResolutionTrace;
use crate::record::{PlannedVersion, ResolvedVersion, VersionRecord};
use crate::slug::normalize;

/// Resolves a token to the canonical view of exactly one record.
///
/// `None` means no record in either collection matched; the caller owns
/// any fallback behavior.
pub fn lookup(
    records: &[VersionRecord],
    planned: &[PlannedVersion],
    token: &str,
) -> Option<ResolvedVersion> {
    let released = candidates(records, token);
    if let Some(winner) = resolve(&released) {
        return Some(ResolvedVersion::from_record(winner));
    }

    let stubs = candidates(planned, token);
    resolve(&stubs).map(ResolvedVersion::from_planned)
}

/// Runs the same lookup as [`lookup`] and reports how it was decided.
pub fn explain(
    records: &[VersionRecord],
    planned: &[PlannedVersion],
    token: &str,
) -> ResolutionTrace {
    let released = candidates(records, token);
    let stubs = candidates(planned, token);

    let (winner, rule) = match decide(&released) {
        (Some(winner), rule) => (Some(ResolvedVersion::from_record(winner)), rule),
        (None, _) => match decide(&stubs) {
            (Some(winner), rule) => (Some(ResolvedVersion::from_planned(winner)), rule),
            (None, _) => (None, TieBreakRule::NoneMatched),
        },
    };

    ResolutionTrace {
        token: token.to_string(),
        normalized_token: normalize(token),
        released_candidates: released.len(),
        planned_candidates: stubs.len(),
        rule,
        winner_version: winner.as_ref().map(|w| w.version.clone()),
        winner_slug: winner.map(|w| w.slug),
    }
}
