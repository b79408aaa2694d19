//! Record model subsystem for verdex
//!
//! Defines the shapes the engine consumes (released and planned version
//! records, history entries), the canonical default-filled view it produces
//! (`ResolvedVersion`), and the JSON loader that materializes read-only
//! snapshots from disk.
//!
//! # Design Principles
//!
//! - Every optional field has exactly one documented default, applied in
//!   one place (`ResolvedVersion`), never at call sites
//! - Input collections are snapshots: the engine never mutates them
//! - The loader owns the history-recency trust boundary (entry 0 of
//!   `versionHistory` is newest; trusted, not re-verified)

mod errors;
mod loader;
mod resolved;
mod types;

pub use errors::{LoadError, LoadResult};
pub use loader::{load_planned, load_records};
pub use resolved::{
    ResolvedVersion, DEFAULT_AUTHOR, DEFAULT_CHANNEL, DEFAULT_VERSION, DEFAULT_VERSION_TYPE,
    PLANNED_VERSION_CODE,
};
pub use types::{
    PlannedVersion, VersionHistoryEntry, VersionRecord, VersionStatus, VersionedRecord,
};
