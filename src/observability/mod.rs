//! Observability
//!
//! Structured JSON logging with typed events.
//!
//! ```ignore
//! use release_intake::observability::{log_event, Event};
//!
//! log_event(Event::ReleaseRejected, &[("fields", "ref,url")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Logs a typed event at its own severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Logs a typed event to stderr, leaving stdout to the caller's output
pub fn log_event_to_stderr(event: Event, fields: &[(&str, &str)]) {
    Logger::log_to_stderr(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Only checks that logging never panics
        log_event(Event::ConfigLoaded, &[]);
        log_event(Event::ReleaseRejected, &[("fields", "ref")]);
        log_event_to_stderr(Event::ReleaseAccepted, &[("ref", "1.0.0")]);
    }
}
