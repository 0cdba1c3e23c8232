//! release-intake - strict, deterministic validation of release payloads
//!
//! ```ignore
//! use release_intake::release::ReleaseSchemas;
//! use serde_json::json;
//!
//! let schemas = ReleaseSchemas::default();
//! let input = schemas.validate_release(&json!({"ref": "1.0.0"}))?;
//! ```

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod release;
pub mod schema;
