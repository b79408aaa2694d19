//! Stats subsystem for verdex
//!
//! Descriptive rollups over the released collection for dashboard and
//! listing surfaces. Deterministic: frequency maps are ordered, and the
//! "latest release" choice goes through the same tie-break policy as
//! lookups.

mod aggregator;

pub use aggregator::{aggregate, Stats};
