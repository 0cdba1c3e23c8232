//! Release field tables and the reserved-name rule
//!
//! The organization table is the release table extended with two head
//! commit lists. It inherits the `ref` rule unchanged.

use serde_json::{Map, Value};

use super::commit::{commit_schema, head_commit_deprecated_schema, head_commit_reference_schema};
use super::input::{OrganizationReleaseInput, ReleaseInput, ReleasePayload};
use crate::config::ValidationConfig;
use crate::schema::{FieldDef, FieldKind, ObjectSchema, SchemaValidator, ValidationErrors};

/// Token that refers to the most recent release. Never a real name.
pub const RESERVED_RELEASE_NAME: &str = "latest";

/// Returns false for names that collide with the reserved token
pub fn is_allowed_release_name(name: &str) -> bool {
    name.to_lowercase() != RESERVED_RELEASE_NAME
}

/// Returns the payload's `ref` when it uses the reserved name
pub fn reserved_ref(payload: &Value) -> Option<&str> {
    payload
        .get("ref")
        .and_then(Value::as_str)
        .filter(|name| !is_allowed_release_name(name))
}

fn check_release_name(value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(name) if !is_allowed_release_name(name) => {
            Err(format!("Release with name {} is not allowed", name))
        }
        _ => Ok(()),
    }
}

/// Field tables for both release endpoints, built once per config
#[derive(Debug, Clone)]
pub struct ReleaseSchemas {
    release: ObjectSchema,
    organization_release: ObjectSchema,
}

impl ReleaseSchemas {
    pub fn new(config: &ValidationConfig) -> Self {
        let release = ObjectSchema::new(
            "release",
            vec![
                FieldDef::optional_string("ref", Some(config.max_version_length))
                    .with_rule(check_release_name),
                FieldDef::new("url", FieldKind::Url).optional().blank_as_absent(),
                FieldDef::new("dateReleased", FieldKind::DateTime)
                    .optional()
                    .blank_as_absent(),
                FieldDef::optional_list("commits", commit_schema()),
            ],
        );

        let organization_release = release.extend(
            "organization_release",
            vec![
                FieldDef::optional_list("headCommits", head_commit_deprecated_schema()),
                FieldDef::optional_list("refs", head_commit_reference_schema()),
            ],
        );

        Self {
            release,
            organization_release,
        }
    }

    pub fn release(&self) -> &ObjectSchema {
        &self.release
    }

    pub fn organization_release(&self) -> &ObjectSchema {
        &self.organization_release
    }

    /// Validates a payload into its typed form.
    ///
    /// # Errors
    ///
    /// Returns every field error found in `input`.
    pub fn validate<T: ReleasePayload>(&self, input: &Value) -> Result<T, ValidationErrors> {
        let normalized = SchemaValidator::new(T::schema(self)).validate(input)?;
        into_typed(normalized)
    }

    /// Validates a project-scoped release payload
    pub fn validate_release(&self, input: &Value) -> Result<ReleaseInput, ValidationErrors> {
        self.validate(input)
    }

    /// Validates an organization-scoped release payload
    pub fn validate_organization_release(
        &self,
        input: &Value,
    ) -> Result<OrganizationReleaseInput, ValidationErrors> {
        self.validate(input)
    }
}

impl Default for ReleaseSchemas {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

/// Converts a normalized object into its typed payload.
///
/// The field tables and the payload types describe the same shape, so a
/// failure here means they drifted apart; it is reported, not panicked on.
fn into_typed<T: ReleasePayload>(normalized: Map<String, Value>) -> Result<T, ValidationErrors> {
    serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        ValidationErrors::non_field(format!("{} payload could not be read: {}", T::KIND, e))
    })
}
