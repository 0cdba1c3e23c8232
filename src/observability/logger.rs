//! Structured JSON logger
//!
//! - One line per event
//! - `event` first, `severity` second, remaining fields sorted by key
//! - Synchronous, unbuffered
//! - ERROR and FATAL go to stderr, everything else to stdout, unless the
//!   caller routes all output to stderr

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn uses_stderr(&self) -> bool {
        *self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct Logger;

impl Logger {
    /// Logs an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        // A failed log write must never fail the request being logged
        if severity.uses_stderr() {
            let _ = io::stderr().lock().write_all(line.as_bytes());
        } else {
            let _ = io::stdout().lock().write_all(line.as_bytes());
        }
    }

    /// Logs to stderr whatever the severity, for processes whose stdout
    /// carries their result
    pub fn log_to_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let _ = io::stderr().lock().write_all(line.as_bytes());
    }

    /// Renders one log line, newline included
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        let mut line = String::with_capacity(64 + fields.len() * 32);
        line.push_str("{\"event\":");
        push_json_string(&mut line, event);
        line.push_str(",\"severity\":");
        push_json_string(&mut line, severity.as_str());

        for (key, value) in sorted {
            line.push(',');
            push_json_string(&mut line, key);
            line.push(':');
            push_json_string(&mut line, value);
        }

        line.push_str("}\n");
        line
    }

    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
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

fn push_json_string(out: &mut String, value: &str) {
    match serde_json::to_string(value) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => out.push_str("\"\""),
    }
}
