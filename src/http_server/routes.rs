//! Release Validation Routes
//!
//! Dry-run endpoints: the body is validated and echoed back normalized.
//! Nothing is stored.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};

use super::errors::{RestError, RestResult};
use crate::config::ValidationConfig;
use crate::observability::{log_event, Event};
use crate::release::{
    reserved_ref, OrganizationReleaseInput, ReleaseInput, ReleasePayload, ReleaseSchemas,
};

// ==================
// Shared State
// ==================

/// Release validation state shared across handlers
pub struct ReleaseState {
    schemas: ReleaseSchemas,
}

impl ReleaseState {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            schemas: ReleaseSchemas::new(config),
        }
    }

    pub fn schemas(&self) -> &ReleaseSchemas {
        &self.schemas
    }
}

impl Default for ReleaseState {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

// ==================
// Routes
// ==================

/// Create release validation routes
pub fn release_routes(state: Arc<ReleaseState>) -> Router {
    Router::new()
        .route("/releases/validate", post(validate_release_handler))
        .route(
            "/organizations/:organization_slug/releases/validate",
            post(validate_organization_release_handler),
        )
        .with_state(state)
}

/// Create health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn validate_release_handler(
    State(state): State<Arc<ReleaseState>>,
    body: Bytes,
) -> RestResult<Json<ReleaseInput>> {
    validate_body::<ReleaseInput>(&state, &body, "project").map(Json)
}

async fn validate_organization_release_handler(
    State(state): State<Arc<ReleaseState>>,
    Path(organization_slug): Path<String>,
    body: Bytes,
) -> RestResult<Json<OrganizationReleaseInput>> {
    validate_body::<OrganizationReleaseInput>(&state, &body, &organization_slug).map(Json)
}

/// Parses and validates a request body, logging the outcome.
fn validate_body<T: ReleasePayload>(state: &ReleaseState, body: &[u8], scope: &str) -> RestResult<T> {
    let payload = parse_body(body).map_err(|e| {
        let reason = e.to_string();
        log_event(
            Event::MalformedBody,
            &[("kind", T::KIND), ("reason", reason.as_str()), ("scope", scope)],
        );
        RestError::InvalidBody(reason)
    })?;

    match state.schemas.validate::<T>(&payload) {
        Ok(input) => {
            log_event(
                Event::ReleaseAccepted,
                &[
                    ("kind", T::KIND),
                    ("ref", input.release_ref().unwrap_or("")),
                    ("scope", scope),
                ],
            );
            Ok(input)
        }
        Err(errors) => {
            if let Some(name) = reserved_ref(&payload) {
                log_event(
                    Event::ReservedReleaseName,
                    &[("kind", T::KIND), ("ref", name), ("scope", scope)],
                );
            }
            let fields = errors.field_names().collect::<Vec<_>>().join(",");
            log_event(
                Event::ReleaseRejected,
                &[("fields", fields.as_str()), ("kind", T::KIND), ("scope", scope)],
            );
            Err(errors.into())
        }
    }
}

/// An empty body reads as an empty object
fn parse_body(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
}
