//! Structured JSON logger
//!
//! - One log line = one event
//! - Fields are emitted in the order the call site supplies them
//! - Synchronous, no buffering
//! - Log lines go to stderr so they can never interleave with the exported
//!   document on stdout

use std::io::{self, Write};

use chrono::Utc;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that writes one JSON object per event.
pub struct Logger;

impl Logger {
    /// Logs an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    /// Logs an event to a specific writer. Write failures are swallowed;
    /// logging must never take the exporter down.
    pub fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut line = String::new();
        line.push_str("{\"ts\":");
        line.push_str(&json_str(&Utc::now().to_rfc3339()));
        line.push_str(",\"severity\":");
        line.push_str(&json_str(severity.as_str()));
        line.push_str(",\"event\":");
        line.push_str(&json_str(event));
        for (key, value) in fields {
            line.push(',');
            line.push_str(&json_str(key));
            line.push(':');
            line.push_str(&json_str(value));
        }
        line.push_str("}\n");
        let _ = writer.write_all(line.as_bytes());
    }

    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }
}

fn json_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_shape() {
        let mut buf = Vec::new();
        Logger::log_to_writer(
            Severity::Info,
            "export_complete",
            &[("plant", "55A0"), ("roots", "3")],
            &mut buf,
        );
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["severity"], "INFO");
        assert_eq!(value["event"], "export_complete");
        assert_eq!(value["plant"], "55A0");
    }

    #[test]
    fn test_field_order_is_call_order() {
        let mut buf = Vec::new();
        Logger::log_to_writer(Severity::Warn, "e", &[("b", "1"), ("a", "2")], &mut buf);
        let line = String::from_utf8(buf).unwrap();
        let b = line.find("\"b\"").unwrap();
        let a = line.find("\"a\"").unwrap();
        assert!(b < a);
    }
}
