//! Declarative payload validation
//!
//! A schema is data: an ordered table of field definitions consumed by a
//! single generic validator. Custom logic is attached per field as a rule
//! and runs only after the generic checks pass.
//!
//! # Design Principles
//!
//! - All field errors are collected and returned together
//! - Unknown input fields are ignored
//! - No defaults: absent optional fields stay absent
//! - Schemas compose by extension, never by redefinition
//! - Deterministic, side-effect free validation

mod errors;
mod formats;
mod types;
mod validator;

pub use errors::{ErrorCode, FieldError, ValidationErrors, NON_FIELD_ERRORS};
pub use formats::{format_datetime, is_valid_email, is_valid_url, parse_datetime};
pub use types::{FieldDef, FieldKind, FieldRule, ObjectSchema};
pub use validator::SchemaValidator;
