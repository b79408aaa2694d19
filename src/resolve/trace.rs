//! Resolution trace output
//!
//! A deterministic, human-readable account of one lookup: what the token
//! normalized to, how many candidates each collection produced, and which
//! policy rule picked the winner. Ambiguous content (several CURRENT
//! records for one identifier, say) shows up here as `freshness-order`
//! with a candidate count above one.

use std::fmt;

use serde::Serialize;

use super::tiebreak::TieBreakRule;

/// Trace of a single lookup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionTrace {
    /// Token as requested
    pub token: String,
    /// Canonical form used for variant matching
    pub normalized_token: String,
    /// Candidate count among released records
    pub released_candidates: usize,
    /// Candidate count among planned stubs
    pub planned_candidates: usize,
    /// Rule that decided the outcome
    pub rule: TieBreakRule,
    /// Winning record's version, if any record won
    pub winner_version: Option<String>,
    /// Winning record's slug, if any record won
    pub winner_slug: Option<String>,
}

impl fmt::Display for ResolutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== RESOLUTION TRACE ===")?;
        writeln!(f, "Token: {}", self.token)?;
        writeln!(f, "Normalized: {}", self.normalized_token)?;
        writeln!(f, "Released candidates: {}", self.released_candidates)?;
        writeln!(f, "Planned candidates: {}", self.planned_candidates)?;
        writeln!(f, "Rule: {}", self.rule.as_str())?;

        match (&self.winner_version, &self.winner_slug) {
            (Some(version), Some(slug)) => writeln!(f, "Winner: {} ({})", version, slug),
            _ => writeln!(f, "Winner: (none)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_winner() {
        let trace = ResolutionTrace {
            token: "Getting-Started-V1.2.0".to_string(),
            normalized_token: "getting-started-v1-2-0".to_string(),
            released_candidates: 2,
            planned_candidates: 0,
            rule: TieBreakRule::UniqueCurrent,
            winner_version: Some("v1.2.0".to_string()),
            winner_slug: Some("getting-started".to_string()),
        };

        let rendered = trace.to_string();
        assert!(rendered.contains("=== RESOLUTION TRACE ==="));
        assert!(rendered.contains("Rule: unique-current"));
        assert!(rendered.contains("Winner: v1.2.0 (getting-started)"));
    }

    #[test]
    fn test_display_not_found() {
        let trace = ResolutionTrace {
            token: "missing".to_string(),
            normalized_token: "missing".to_string(),
            released_candidates: 0,
            planned_candidates: 0,
            rule: TieBreakRule::NoneMatched,
            winner_version: None,
            winner_slug: None,
        };

        assert!(trace.to_string().contains("Winner: (none)"));
    }
}
