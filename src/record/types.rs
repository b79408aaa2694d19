//! Record type definitions
//!
//! These mirror the hand-authored content set: optional almost everywhere,
//! camelCase on the wire, unknown fields ignored. `version` is the only
//! field a record is expected to carry, and even that is not unique across
//! a collection.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::slug::{derive_base_slug, variant_set};

/// Lifecycle status tags for a version.
///
/// An unordered tag set: the engine never enforces a transition order
/// between them, it only reads the newest history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VersionStatus {
    /// The one actively maintained release
    Current,
    /// Still supported, not the newest
    Supported,
    /// Supported but discouraged
    Deprecated,
    /// No longer supported
    Archived,
    /// Roadmap entry, not yet released
    Planned,
}

impl VersionStatus {
    /// Parses a hand-authored status tag, case-insensitively.
    /// Unknown tags yield `None` (empty contribution, never an error).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CURRENT" => Some(Self::Current),
            "SUPPORTED" => Some(Self::Supported),
            "DEPRECATED" => Some(Self::Deprecated),
            "ARCHIVED" => Some(Self::Archived),
            "PLANNED" => Some(Self::Planned),
            _ => None,
        }
    }

    /// Canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "CURRENT",
            Self::Supported => "SUPPORTED",
            Self::Deprecated => "DEPRECATED",
            Self::Archived => "ARCHIVED",
            Self::Planned => "PLANNED",
        }
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in a record's version history.
///
/// `status` stays a raw string here: the content set contains mixed-case
/// and occasionally misspelled tags, and parsing is the reader's concern
/// (`parsed_status`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionHistoryEntry {
    /// Version this entry describes
    pub version: String,
    /// Status tag as authored (see `VersionStatus::parse`)
    pub status: String,
    /// Release date as authored
    pub date: String,
    /// Whether this release broke compatibility
    pub breaking_changes: bool,
    /// Whether consumers must migrate
    pub migration_required: bool,
}

impl VersionHistoryEntry {
    /// The status tag, parsed; `None` for unknown/misspelled tags.
    pub fn parsed_status(&self) -> Option<VersionStatus> {
        VersionStatus::parse(&self.status)
    }

    /// Whether this entry carries the CURRENT tag.
    pub fn is_current(&self) -> bool {
        self.parsed_status() == Some(VersionStatus::Current)
    }
}

/// A released documentation version.
///
/// History invariant (caller-maintained, trusted): `version_history` is
/// ordered most-recent-first, so entry 0 is the record's present status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionRecord {
    /// Explicit lookup slug, when authored
    pub slug: Option<String>,
    /// Display title
    pub title: Option<String>,
    /// Version identifier (present, not guaranteed unique or well-formed)
    pub version: String,
    /// Release classification (e.g. "major", "minor", "patch")
    pub version_type: Option<String>,
    /// Distribution channel (e.g. "stable", "beta")
    pub release_channel: Option<String>,
    /// Last content update date, as authored
    pub last_updated: Option<String>,
    /// Author display name
    pub author: Option<String>,
    /// Topic tags
    pub tags: Vec<String>,
    /// Nested content sections (opaque to the engine, counted by stats)
    pub subsections: Vec<serde_json::Value>,
    /// Release history, newest first
    pub version_history: Vec<VersionHistoryEntry>,
}

/// A planned/roadmap stub: a release that does not exist yet.
/// Always PLANNED; carries no history and no content sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannedVersion {
    /// Explicit lookup slug, when authored
    pub slug: Option<String>,
    /// Display title
    pub title: Option<String>,
    /// Version identifier
    pub version: String,
    /// Release classification
    pub version_type: Option<String>,
    /// Distribution channel
    pub release_channel: Option<String>,
    /// Last stub update date, as authored
    pub last_updated: Option<String>,
    /// Author display name
    pub author: Option<String>,
    /// Topic tags
    pub tags: Vec<String>,
}

/// The seam matching and tie-breaking are generic over.
///
/// Both record shapes implement it, so one lookup pipeline serves released
/// and planned collections with synthetic fixtures testable in isolation.
pub trait VersionedRecord {
    /// Explicit slug field, when authored non-empty
    fn slug(&self) -> Option<&str>;
    /// Display title, when authored
    fn title(&self) -> Option<&str>;
    /// Version identifier as authored
    fn version(&self) -> &str;
    /// Last update date as authored
    fn last_updated(&self) -> Option<&str>;
    /// Release history, newest first (empty for planned records)
    fn history(&self) -> &[VersionHistoryEntry];
    /// Whether this is a roadmap stub
    fn is_planned(&self) -> bool;

    /// Base slug: explicit slug, else derived from the title.
    fn base_slug(&self) -> String {
        derive_base_slug(self.slug(), self.title())
    }

    /// Every identifier string this record can be looked up by.
    fn lookup_variants(&self) -> BTreeSet<String> {
        variant_set(&self.base_slug(), self.version(), self.is_planned())
    }

    /// Newest history entry, when any exist.
    fn newest_history(&self) -> Option<&VersionHistoryEntry> {
        self.history().first()
    }

    /// Whether the newest history entry carries the CURRENT tag.
    fn is_current(&self) -> bool {
        self.newest_history().is_some_and(VersionHistoryEntry::is_current)
    }

    /// Date string used for freshness ordering: `lastUpdated`, else the
    /// newest history entry's date.
    fn freshness_date(&self) -> Option<&str> {
        self.last_updated()
            .or_else(|| self.newest_history().map(|entry| entry.date.as_str()))
    }
}

impl VersionedRecord for VersionRecord {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref().filter(|s| !s.is_empty())
    }

    fn history(&self) -> &[VersionHistoryEntry] {
        &self.version_history
    }

    fn is_planned(&self) -> bool {
        false
    }
}

impl VersionedRecord for PlannedVersion {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref().filter(|s| !s.is_empty())
    }

    fn history(&self) -> &[VersionHistoryEntry] {
        &[]
    }

    fn is_planned(&self) -> bool {
        true
    }
}
