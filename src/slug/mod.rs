//! Slug and lookup-variant subsystem for verdex
//!
//! One record can be addressed by several equivalent identifier strings: its
//! explicit slug, its version (with or without the `v` prefix), composites
//! of the two, and `comingsoon-` forms for roadmap entries. This subsystem
//! derives the full variant set declaratively so every lookup surface
//! accepts the same grammar.

mod variants;

pub use variants::{derive_base_slug, normalize, variant_set, COMING_SOON_PREFIX};
