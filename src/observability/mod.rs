//! Observability subsystem for verdex
//!
//! Structured JSON logging: synchronous, unbuffered, one line per event.
//! Log lines go to stderr; stdout is reserved for command payloads. The
//! engine modules never log (they are pure); only the CLI surface emits
//! events.

mod logger;

pub use logger::{error, info, trace, warn, Severity};
