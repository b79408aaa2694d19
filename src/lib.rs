//! verdex - a strict, deterministic version-record resolution and
//! reconciliation engine
//!
//! The content set behind a documentation site is hand-authored: version
//! identifiers come in mixed formats, slugs are duplicated, optional fields
//! are missing, roadmap stubs sit alongside released versions. verdex turns
//! that into deterministic answers: one canonical record per lookup token,
//! one ordered merged listing, one stats rollup — with every engine
//! function total over malformed input.
//!
//! Lookup flow: `resolve::candidates` → `resolve::resolve`.
//! Listing flow: `merge::merge` → `stats::aggregate`.

pub mod cli;
pub mod merge;
pub mod observability;
pub mod record;
pub mod resolve;
pub mod slug;
pub mod stats;
pub mod version;
