//! Merged-view subsystem for verdex
//!
//! Produces the single listing surface over both collections: released
//! records and planned stubs unioned, de-duplicated by version, default
//! filled, and totally ordered newest-version-first.

mod merger;

pub use merger::merge;
