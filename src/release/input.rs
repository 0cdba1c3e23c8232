//! Typed release payloads
//!
//! These are what callers receive after a payload validates. Every field
//! is optional; absent fields are omitted again when serialized.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::commit::{CommitInput, HeadCommitInputDeprecated, HeadCommitReference};
use super::schemas::ReleaseSchemas;
use crate::schema::ObjectSchema;

/// A payload type with a field table in [`ReleaseSchemas`]
pub trait ReleasePayload: Serialize + DeserializeOwned {
    /// Name used in logs
    const KIND: &'static str;

    /// Field table this payload is validated against
    fn schema(schemas: &ReleaseSchemas) -> &ObjectSchema;

    /// The validated `ref`, if any
    fn release_ref(&self) -> Option<&str>;
}

/// Body of a project-scoped release create/update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInput {
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_released: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<CommitInput>>,
}

impl ReleasePayload for ReleaseInput {
    const KIND: &'static str = "release";

    fn schema(schemas: &ReleaseSchemas) -> &ObjectSchema {
        schemas.release()
    }

    fn release_ref(&self) -> Option<&str> {
        self.git_ref.as_deref()
    }
}

/// Body of an organization-scoped release create.
///
/// The project-scoped fields plus head commit pointers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationReleaseInput {
    #[serde(flatten)]
    pub release: ReleaseInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_commits: Option<Vec<HeadCommitInputDeprecated>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<HeadCommitReference>>,
}

impl ReleasePayload for OrganizationReleaseInput {
    const KIND: &'static str = "organization_release";

    fn schema(schemas: &ReleaseSchemas) -> &ObjectSchema {
        schemas.organization_release()
    }

    fn release_ref(&self) -> Option<&str> {
        self.release.git_ref.as_deref()
    }
}
