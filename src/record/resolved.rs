//! The canonical default-filled view of one version
//!
//! Consumers never see optional fields: every absence is filled here, in
//! one place, with one documented default. Detail views, merged listings,
//! and the CLI all hand out this shape.

use serde::{Deserialize, Serialize};

use super::types::{PlannedVersion, VersionRecord, VersionStatus, VersionedRecord};
use crate::slug::normalize;

/// Default for a record missing its version identifier.
pub const DEFAULT_VERSION: &str = "v0.0.0";
/// Default for a record missing its author.
pub const DEFAULT_AUTHOR: &str = "Unknown";
/// Default release classification.
pub const DEFAULT_VERSION_TYPE: &str = "stable";
/// Default distribution channel.
pub const DEFAULT_CHANNEL: &str = "stable";
/// Placeholder version code carried by every planned entry.
pub const PLANNED_VERSION_CODE: &str = "tbd";

/// One version, fully resolved: no optional fields, no absent defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVersion {
    /// Lookup slug (explicit, derived from title, or normalized version)
    pub slug: String,
    /// Display title (falls back to the version identifier)
    pub title: String,
    /// Version identifier, `v0.0.0` when the record carried none
    pub version: String,
    /// Short code: the version without its `v` prefix, or `tbd` when planned
    pub version_code: String,
    /// Release classification
    pub version_type: String,
    /// Distribution channel
    pub release_channel: String,
    /// Last update date as authored; empty sorts as oldest everywhere
    pub last_updated: String,
    /// Author display name
    pub author: String,
    /// Topic tags
    pub tags: Vec<String>,
    /// Lifecycle status (newest history entry, or PLANNED for stubs)
    pub status: VersionStatus,
    /// Whether the newest release broke compatibility
    pub breaking_changes: bool,
    /// Whether consumers must migrate to the newest release
    pub migration_required: bool,
    /// Nested content sections (empty for planned entries)
    pub subsections: Vec<serde_json::Value>,
}

impl ResolvedVersion {
    /// Resolves a released record, filling every documented default.
    pub fn from_record(record: &VersionRecord) -> Self {
        let version = fill_version(record.version());
        let newest = record.newest_history();

        Self {
            slug: fill_slug(record, &version),
            title: fill_title(record, &version),
            version_code: version_code(&version),
            version,
            version_type: fill_or(record.version_type.as_deref(), DEFAULT_VERSION_TYPE),
            release_channel: fill_or(record.release_channel.as_deref(), DEFAULT_CHANNEL),
            last_updated: record.freshness_date().unwrap_or("").to_string(),
            author: fill_or(record.author.as_deref(), DEFAULT_AUTHOR),
            tags: record.tags.clone(),
            status: newest
                .and_then(|entry| entry.parsed_status())
                .unwrap_or(VersionStatus::Current),
            breaking_changes: newest.map(|entry| entry.breaking_changes).unwrap_or(false),
            migration_required: newest
                .map(|entry| entry.migration_required)
                .unwrap_or(false),
            subsections: record.subsections.clone(),
        }
    }

    /// Resolves a planned stub: always PLANNED, placeholder version code,
    /// no history-derived fields.
    pub fn from_planned(planned: &PlannedVersion) -> Self {
        let version = fill_version(planned.version());

        Self {
            slug: fill_slug(planned, &version),
            title: fill_title(planned, &version),
            version_code: PLANNED_VERSION_CODE.to_string(),
            version,
            version_type: fill_or(planned.version_type.as_deref(), DEFAULT_VERSION_TYPE),
            release_channel: fill_or(planned.release_channel.as_deref(), DEFAULT_CHANNEL),
            last_updated: planned.last_updated().unwrap_or("").to_string(),
            author: fill_or(planned.author.as_deref(), DEFAULT_AUTHOR),
            tags: planned.tags.clone(),
            status: VersionStatus::Planned,
            breaking_changes: false,
            migration_required: false,
            subsections: Vec::new(),
        }
    }
}

fn fill_version(version: &str) -> String {
    if version.is_empty() {
        DEFAULT_VERSION.to_string()
    } else {
        version.to_string()
    }
}

fn fill_slug<R: VersionedRecord>(record: &R, version: &str) -> String {
    let base = record.base_slug();
    if base.is_empty() {
        normalize(version)
    } else {
        base
    }
}

fn fill_title<R: VersionedRecord>(record: &R, version: &str) -> String {
    match record.title() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => version.to_string(),
    }
}

fn fill_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Version code: the identifier with one leading `v`/`V` stripped.
fn version_code(version: &str) -> String {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
        .to_string()
}
