//! CLI command implementations

use std::path::Path;

use serde_json::Value;

use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_to_stderr, Event};
use crate::release::{
    reserved_ref, OrganizationReleaseInput, ReleaseInput, ReleasePayload, ReleaseSchemas,
};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_payload, write_rejection, write_response};

/// Scope recorded on validation events raised from the command line
const CLI_SCOPE: &str = "cli";

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Validate {
            config,
            organization,
            input,
        } => validate(config.as_deref(), organization, input.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<AppConfig> {
    let config = AppConfig::load_or_default(path)?;
    if let Some(path) = path {
        let path_text = path.display().to_string();
        log_event_to_stderr(Event::ConfigLoaded, &[("path", path_text.as_str())]);
    }
    Ok(config)
}

/// Validates one payload and prints the outcome.
///
/// Prints the normalized payload on success. On rejection the report is
/// printed and a `Rejected` error returned so the process exits non-zero.
pub fn validate(config: Option<&Path>, organization: bool, input: Option<&Path>) -> CliResult<()> {
    let config = load_config(config)?;
    let schemas = ReleaseSchemas::new(&config.validation);
    let payload = read_payload(input)?;

    match validate_payload(&schemas, &payload, organization) {
        Ok(normalized) => write_response(normalized),
        Err(err) => {
            if let Some(report) = err.report() {
                write_rejection(report)?;
            }
            Err(err)
        }
    }
}

/// Validates `payload` with the chosen schema, returning its normalized JSON.
///
/// Outcomes are logged to stderr; stdout is left to the printed result.
pub fn validate_payload(
    schemas: &ReleaseSchemas,
    payload: &Value,
    organization: bool,
) -> CliResult<Value> {
    if organization {
        validate_as::<OrganizationReleaseInput>(schemas, payload)
    } else {
        validate_as::<ReleaseInput>(schemas, payload)
    }
}

fn validate_as<T: ReleasePayload>(schemas: &ReleaseSchemas, payload: &Value) -> CliResult<Value> {
    match schemas.validate::<T>(payload) {
        Ok(input) => {
            log_event_to_stderr(
                Event::ReleaseAccepted,
                &[
                    ("kind", T::KIND),
                    ("ref", input.release_ref().unwrap_or("")),
                    ("scope", CLI_SCOPE),
                ],
            );
            Ok(serde_json::to_value(input)?)
        }
        Err(errors) => {
            if let Some(name) = reserved_ref(payload) {
                log_event_to_stderr(
                    Event::ReservedReleaseName,
                    &[("kind", T::KIND), ("ref", name), ("scope", CLI_SCOPE)],
                );
            }
            let fields = errors.field_names().collect::<Vec<_>>().join(",");
            log_event_to_stderr(
                Event::ReleaseRejected,
                &[("fields", fields.as_str()), ("kind", T::KIND), ("scope", CLI_SCOPE)],
            );
            Err(CliError::rejected(errors))
        }
    }
}

/// Serves the HTTP endpoints until the process is stopped
pub fn serve(config: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| {
            let reason = e.to_string();
            log_event(Event::ServerFailed, &[("reason", reason.as_str())]);
            CliError::serve_failed(reason)
        })
}
