//! Release payload validation
//!
//! Two payload shapes are accepted:
//! - release: `ref`, `url`, `dateReleased`, `commits`
//! - organization release: the above plus `headCommits` and `refs`
//!
//! All fields are optional. A `ref` equal to "latest" in any letter case
//! is rejected, since that token names the most recent release.

mod commit;
mod input;
mod schemas;

pub use commit::{
    commit_schema, head_commit_deprecated_schema, head_commit_reference_schema,
    patch_set_schema, CommitInput, HeadCommitInputDeprecated, HeadCommitReference,
    PatchSetInput, PatchSetType, PATCH_SET_TYPES,
};
pub use input::{OrganizationReleaseInput, ReleaseInput, ReleasePayload};
pub use schemas::{is_allowed_release_name, reserved_ref, ReleaseSchemas, RESERVED_RELEASE_NAME};
