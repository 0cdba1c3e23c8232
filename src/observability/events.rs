//! Observable events
//!
//! Validation itself never logs. These events are emitted by the layers
//! that call it (HTTP routes, CLI).

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    ConfigLoaded,
    ServerStart,
    ServerFailed,

    // Validation outcomes
    /// Payload validated
    ReleaseAccepted,
    /// Payload failed field validation
    ReleaseRejected,
    /// Payload used the reserved release name
    ReservedReleaseName,
    /// Body was not parseable JSON
    MalformedBody,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerFailed => "SERVER_FAILED",
            Event::ReleaseAccepted => "RELEASE_ACCEPTED",
            Event::ReleaseRejected => "RELEASE_REJECTED",
            Event::ReservedReleaseName => "RESERVED_RELEASE_NAME",
            Event::MalformedBody => "MALFORMED_BODY",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::ServerFailed => Severity::Fatal,
            Event::ReleaseRejected | Event::ReservedReleaseName | Event::MalformedBody => {
                Severity::Warn
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
