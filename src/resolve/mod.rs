//! Lookup resolution subsystem for verdex
//!
//! A lookup request flows matcher → tie-break → one record or not-found:
//!
//! 1. `candidates` collects every record the token could mean (explicit
//!    slug, raw version, or any normalized lookup variant)
//! 2. `resolve` collapses multi-candidate matches by policy: a unique
//!    CURRENT record wins, then freshness by date, then highest version
//! 3. `lookup` runs the pipeline over released records first, planned
//!    stubs second, and produces the default-filled view
//!
//! `None` from `resolve`/`lookup` is the whole not-found contract; nothing
//! in this subsystem fails.
//!
//! # Invariants
//!
//! - Candidate order equals input order (stable)
//! - Resolution is order-independent: permuting the input collection never
//!   changes the winner (beyond value-identical duplicates)
//! - Every function is total over malformed records and tokens

mod lookup;
mod matcher;
mod tiebreak;
mod trace;

pub use lookup::{explain, lookup};
pub use matcher::candidates;
pub use tiebreak::{decide, resolve, TieBreakRule};
pub use trace::ResolutionTrace;
