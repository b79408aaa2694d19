//! JSON loader for record collections
//!
//! Reads hand-authored JSON arrays into in-memory snapshots. The loader is
//! deliberately permissive about content (any subset of optional fields,
//! unknown fields ignored) and strict about shape (the file must be a JSON
//! array of objects).
//!
//! Trust boundary: a record's `versionHistory` is taken as authored, newest
//! entry first. The loader does not re-sort it; tie-breaking degrades
//! gracefully when the order is wrong (unparseable or stale dates sort
//! last), and re-sorting here would mask authoring mistakes that should be
//! caught in content review.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::errors::{LoadError, LoadResult};
use super::types::{PlannedVersion, VersionRecord};

/// Loads released-version records from a JSON array file.
pub fn load_records(path: &Path) -> LoadResult<Vec<VersionRecord>> {
    load_collection(path)
}

/// Loads planned/roadmap stubs from a JSON array file.
pub fn load_planned(path: &Path) -> LoadResult<Vec<PlannedVersion>> {
    load_collection(path)
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}
