//! Structured JSON log lines
//!
//! Output contract:
//! - One event per line, flushed immediately
//! - Deterministic key order: `event` first, `severity` second, remaining
//!   fields alphabetical by key
//! - All values are strings; callers format numbers before logging

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log at TRACE level
pub fn trace(event: &str, fields: &[(&str, &str)]) {
    emit(Severity::Trace, event, fields);
}

/// Log at INFO level
pub fn info(event: &str, fields: &[(&str, &str)]) {
    emit(Severity::Info, event, fields);
}

/// Log at WARN level
pub fn warn(event: &str, fields: &[(&str, &str)]) {
    emit(Severity::Warn, event, fields);
}

/// Log at ERROR level
pub fn error(event: &str, fields: &[(&str, &str)]) {
    emit(Severity::Error, event, fields);
}

fn emit(severity: Severity, event: &str, fields: &[(&str, &str)]) {
    let line = render(severity, event, fields);
    let mut stderr = io::stderr();
    let _ = stderr.write_all(line.as_bytes());
    let _ = stderr.flush();
}

fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<(&str, &str)> = fields.to_vec();
    sorted.sort_by_key(|&(key, _)| key);

    let mut line = String::with_capacity(128);
    line.push_str("{\"event\":");
    push_json_string(&mut line, event);
    line.push_str(",\"severity\":\"");
    line.push_str(severity.as_str());
    line.push('"');

    for (key, value) in sorted {
        line.push(',');
        push_json_string(&mut line, key);
        line.push(':');
        push_json_string(&mut line, value);
    }

    line.push_str("}\n");
    line
}

/// Appends `s` as a quoted, escaped JSON string.
fn push_json_string(line: &mut String, s: &str) {
    line.push('"');
    for c in s.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                line.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => line.push(c),
        }
    }
    line.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_key_order_is_deterministic() {
        let line = render(
            Severity::Info,
            "resolve.hit",
            &[("token", "v1.2.0"), ("candidates", "2")],
        );
        assert_eq!(
            line,
            "{\"event\":\"resolve.hit\",\"severity\":\"INFO\",\"candidates\":\"2\",\"token\":\"v1.2.0\"}\n"
        );
    }

    #[test]
    fn test_render_escapes_values() {
        let line = render(Severity::Warn, "resolve.miss", &[("token", "a\"b\nc")]);
        assert!(line.contains("a\\\"b\\nc"));
    }

    #[test]
    fn test_render_no_fields() {
        let line = render(Severity::Error, "load.failed", &[]);
        assert_eq!(
            line,
            "{\"event\":\"load.failed\",\"severity\":\"ERROR\"}\n"
        );
    }
}
