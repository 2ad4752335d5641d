//! Structured JSON logger
//!
//! One log line = one event. Logs are synchronous and unbuffered, with
//! deterministic key ordering so output can be diffed across runs.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs one JSON object per event
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    ///
    /// Fields are output in deterministic order (alphabetical by key)
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log to stderr (for errors and fatal messages)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    /// Internal log implementation that writes to a given writer
    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // Build JSON manually to ensure deterministic ordering
        let mut output = String::with_capacity(256);

        output.push('{');

        // Always output event first
        output.push_str("\"event\":\"");
        Self::escape_json_string(&mut output, event);
        output.push('"');

        // Then severity
        output.push_str(",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        // Sort fields alphabetically for deterministic output
        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            Self::escape_json_string(&mut output, key);
            output.push_str("\":\"");
            Self::escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push('}');
        output.push('\n');

        // Write atomically (one syscall)
        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }

    /// Escape special characters for JSON strings
    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log_stderr(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log_stderr(Severity::Fatal, event, fields);
    }
}

/// Capture logs to a buffer for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Fatal.as_str(), "FATAL");
    }

    #[test]
    fn test_log_json_format() {
        let output = capture_log(Severity::Info, "server_listening", &[("addr", "0.0.0.0:3000")]);

        // Should be valid JSON with event and severity first
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "server_listening");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["addr"], "0.0.0.0:3000");
        assert!(output.starts_with("{\"event\":\"server_listening\",\"severity\":\"INFO\""));
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let output1 = capture_log(
            Severity::Info,
            "request_failed",
            &[("route", "/movies"), ("detail", "boom")],
        );
        let output2 = capture_log(
            Severity::Info,
            "request_failed",
            &[("detail", "boom"), ("route", "/movies")],
        );
        assert_eq!(output1, output2);
        assert!(output1.find("\"detail\"").unwrap() < output1.find("\"route\"").unwrap());
    }

    #[test]
    fn test_json_escaping() {
        let output = capture_log(Severity::Error, "bad \"event\"", &[("value", "a\nb\\c")]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "bad \"event\"");
        assert_eq!(parsed["value"], "a\nb\\c");
    }
}
