//! Tie-break policy: collapse many candidates to exactly one
//!
//! Policy, applied in order:
//! 1. No candidates: not found
//! 2. One candidate: that one
//! 3. Exactly one candidate whose newest history entry is CURRENT: that one
//! 4. Freshness order over the remaining pool (all CURRENT candidates when
//!    two or more carry the tag, the full candidate set when none do):
//!    newest parsed date first, unparseable and missing dates last, version
//!    descending as the final key
//!
//! The decision depends only on the documented sort keys, never on input
//! order, so permuting a collection cannot change which record wins.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::record::VersionedRecord;
use crate::version;

/// Which policy rule produced a resolution outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreakRule {
    /// No candidate matched the token
    NoneMatched,
    /// A single candidate matched; nothing to break
    SingleCandidate,
    /// Exactly one candidate carried the CURRENT tag
    UniqueCurrent,
    /// Date-then-version ordering decided
    FreshnessOrder,
}

impl TieBreakRule {
    /// Stable tag for traces and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoneMatched => "none-matched",
            Self::SingleCandidate => "single-candidate",
            Self::UniqueCurrent => "unique-current",
            Self::FreshnessOrder => "freshness-order",
        }
    }
}

/// Resolves a candidate list to exactly one record, or `None` for an empty
/// list. `None` is the entire not-found signal; no error variant exists.
pub fn resolve<'a, R: VersionedRecord>(candidates: &[&'a R]) -> Option<&'a R> {
    decide(candidates).0
}

/// `resolve`, plus which rule made the decision. The winner is always
/// identical to `resolve`'s.
pub fn decide<'a, R: VersionedRecord>(candidates: &[&'a R]) -> (Option<&'a R>, TieBreakRule) {
    match candidates {
        [] => (None, TieBreakRule::NoneMatched),
        &[only] => (Some(only), TieBreakRule::SingleCandidate),
        _ => {
            let current: Vec<&R> = candidates
                .iter()
                .copied()
                .filter(|record| record.is_current())
                .collect();

            if current.len() == 1 {
                return (Some(current[0]), TieBreakRule::UniqueCurrent);
            }

            let pool = if current.len() >= 2 {
                current
            } else {
                candidates.to_vec()
            };

            (Some(freshest(pool)), TieBreakRule::FreshnessOrder)
        }
    }
}

/// Picks the first element under freshness order.
fn freshest<'a, R: VersionedRecord>(mut pool: Vec<&'a R>) -> &'a R {
    pool.sort_by(|a, b| freshness_order(*a, *b));
    pool[0]
}

/// Newest date first; records without a parseable date last; version
/// descending breaks date ties.
fn freshness_order<R: VersionedRecord>(a: &R, b: &R) -> Ordering {
    let a_date = parse_freshness(a.freshness_date());
    let b_date = parse_freshness(b.freshness_date());

    // Option<NaiveDateTime> orders None below every Some, so descending
    // comparison places undated records at the end.
    b_date
        .cmp(&a_date)
        .then_with(|| version::compare(b.version(), a.version()))
}

/// Parses a hand-authored date string. Accepted formats: RFC 3339,
/// `YYYY-MM-DD`, `YYYY/MM/DD`, and long-form `Month D, YYYY`.
fn parse_freshness(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}
