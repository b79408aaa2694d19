//! Version comparison subsystem for verdex
//!
//! Version strings in the content set are hand-authored and not guaranteed
//! well-formed. This subsystem defines a total order over *every* string:
//! parsing never fails, malformed input collapses to `0.0.0`.
//!
//! # Invariants
//!
//! - Total: any string (including empty) parses to a triple
//! - Numeric: `v1.10.0` sorts above `v1.9.0`
//! - Deterministic: same inputs, same ordering, every call

mod comparator;

pub use comparator::{compare, compare_opt, VersionTriple};
