//! Total parsing and ordering of version-like strings
//!
//! Grammar accepted: an optional leading `v`/`V`, up to three dot-separated
//! numeric segments, and an ignored `-suffix` (pre-release and build
//! metadata carry no ordering weight here).

use std::cmp::Ordering;

/// A parsed `major.minor.patch` triple.
///
/// Ordering is lexicographic over the three components, which is exactly
/// the comparison contract: major first, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionTriple {
    /// Major component
    pub major: u64,
    /// Minor component
    pub minor: u64,
    /// Patch component
    pub patch: u64,
}

impl VersionTriple {
    /// Creates a triple from explicit components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a version-like string into a triple. Total: never fails.
    ///
    /// Rules, applied in order:
    /// 1. Strip one leading `v` or `V`.
    /// 2. Truncate at the first `-` (suffix discarded).
    /// 3. Split on `.`; take up to three segments.
    /// 4. Each segment contributes its leading decimal digits, or `0` when
    ///    it has none (empty, missing, and non-numeric segments all
    ///    collapse to `0`).
    ///
    /// So `"v2.1.0-beta"` parses as `2.1.0`, `"3"` as `3.0.0`, and `""`,
    /// `"main"`, `"???"` all as `0.0.0`.
    pub fn parse(raw: &str) -> Self {
        let stripped = raw
            .strip_prefix('v')
            .or_else(|| raw.strip_prefix('V'))
            .unwrap_or(raw);
        let numeric = stripped.split('-').next().unwrap_or("");

        let mut segments = numeric.split('.');
        let mut next = || segment_value(segments.next());

        Self {
            major: next(),
            minor: next(),
            patch: next(),
        }
    }
}

/// Numeric value of one segment: leading decimal digits, else 0.
///
/// A digit run too long for u64 saturates rather than wrapping back below
/// well-formed versions.
fn segment_value(segment: Option<&str>) -> u64 {
    let digits: String = segment
        .unwrap_or("")
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    }
}

/// Compares two version-like strings under the total order.
///
/// `compare("v1.9.0", "v1.10.0")` is `Ordering::Less`: components compare
/// numerically, never as text.
pub fn compare(a: &str, b: &str) -> Ordering {
    VersionTriple::parse(a).cmp(&VersionTriple::parse(b))
}

/// Compares two optional version strings; an absent version behaves as `""`.
pub fn compare_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare(a.unwrap_or(""), b.unwrap_or(""))
}
