//! Commit and head-commit payloads
//!
//! These are the nested shapes a release payload may carry:
//! - commit: identity and metadata of one VCS commit, with its patch set
//! - head commit (deprecated): `currentId` + `repository` pointer
//! - head commit reference: `commit` + `repository` pointer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{FieldDef, FieldKind, ObjectSchema};

/// Accepted patch set change types
pub const PATCH_SET_TYPES: [&str; 3] = ["A", "D", "M"];

/// Kind of change a patch set entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatchSetType {
    #[serde(rename = "A")]
    Added,
    #[serde(rename = "D")]
    Deleted,
    #[serde(rename = "M")]
    Modified,
}

/// One file touched by a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSetInput {
    pub path: String,
    #[serde(rename = "type")]
    pub change_type: PatchSetType,
}

/// A commit associated with a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_set: Option<Vec<PatchSetInput>>,
}

/// Head commit pointer in the legacy `currentId` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadCommitInputDeprecated {
    pub current_id: String,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<String>,
}

/// Head commit pointer for one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadCommitReference {
    pub commit: String,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_commit: Option<String>,
}

fn check_patch_set_type(value: &Value) -> Result<(), String> {
    match value.as_str() {
        Some(kind) if !PATCH_SET_TYPES.contains(&kind) => {
            Err(format!("Commit patch_set type {} is not supported.", kind))
        }
        _ => Ok(()),
    }
}

pub fn patch_set_schema() -> ObjectSchema {
    ObjectSchema::new(
        "patch_set",
        vec![
            FieldDef::required_string("path", Some(255)),
            FieldDef::required_string("type", Some(1)).with_rule(check_patch_set_type),
        ],
    )
}

pub fn commit_schema() -> ObjectSchema {
    ObjectSchema::new(
        "commit",
        vec![
            FieldDef::required_string("id", Some(64)),
            FieldDef::optional_string("repository", Some(64)),
            FieldDef::optional_string("message", None),
            FieldDef::optional_string("author_name", Some(128)),
            FieldDef::new("author_email", FieldKind::Email { max_length: Some(75) }).optional(),
            FieldDef::new("timestamp", FieldKind::DateTime).optional(),
            FieldDef::optional_list("patch_set", patch_set_schema()).nullable(),
        ],
    )
}

pub fn head_commit_deprecated_schema() -> ObjectSchema {
    ObjectSchema::new(
        "head_commit_deprecated",
        vec![
            FieldDef::required_string("currentId", Some(64)),
            FieldDef::required_string("repository", Some(64)),
            FieldDef::optional_string("previousId", Some(64)),
        ],
    )
}

pub fn head_commit_reference_schema() -> ObjectSchema {
    ObjectSchema::new(
        "head_commit_reference",
        vec![
            FieldDef::required_string("commit", Some(64)),
            FieldDef::required_string("repository", Some(200)),
            FieldDef::optional_string("previousCommit", Some(256)),
        ],
    )
}
