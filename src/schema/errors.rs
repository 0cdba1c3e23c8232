//! Validation error report
//!
//! Errors are collected, never raised one at a time. A report maps every
//! top-level field that failed to the list of problems found under it.
//!
//! Error codes:
//! - required: missing required field
//! - null: explicit null where null is not allowed
//! - invalid: value of the wrong type, or a field rule rejected it
//! - max_length: string longer than allowed
//! - not_a_list / not_an_object: container of the wrong shape
//! - invalid_url / invalid_datetime / invalid_email: malformed format

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Key used for errors that do not belong to any single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Required,
    Null,
    Invalid,
    MaxLength,
    NotAList,
    NotAnObject,
    InvalidUrl,
    InvalidDateTime,
    InvalidEmail,
}

impl ErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Null => "null",
            ErrorCode::Invalid => "invalid",
            ErrorCode::MaxLength => "max_length",
            ErrorCode::NotAList => "not_a_list",
            ErrorCode::NotAnObject => "not_an_object",
            ErrorCode::InvalidUrl => "invalid_url",
            ErrorCode::InvalidDateTime => "invalid_datetime",
            ErrorCode::InvalidEmail => "invalid_email",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single problem found at a location in the payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Full location, e.g. "commits[1].id"
    pub path: String,
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code,
            message: message.into(),
        }
    }

    pub fn required(path: impl Into<String>) -> Self {
        Self::new(path, ErrorCode::Required, "This field is required.")
    }

    pub fn null_value(path: impl Into<String>) -> Self {
        Self::new(path, ErrorCode::Null, "This field may not be null.")
    }

    pub fn invalid_string(path: impl Into<String>) -> Self {
        Self::new(path, ErrorCode::Invalid, "Not a valid string.")
    }

    pub fn max_length(path: impl Into<String>, max: usize) -> Self {
        Self::new(
            path,
            ErrorCode::MaxLength,
            format!("Ensure this field has no more than {} characters.", max),
        )
    }

    pub fn not_a_list(path: impl Into<String>, actual: &str) -> Self {
        Self::new(
            path,
            ErrorCode::NotAList,
            format!("Expected a list of items but got type \"{}\".", actual),
        )
    }

    pub fn not_an_object(path: impl Into<String>, actual: &str) -> Self {
        Self::new(
            path,
            ErrorCode::NotAnObject,
            format!("Invalid data. Expected a dictionary, but got {}.", actual),
        )
    }

    pub fn invalid_url(path: impl Into<String>) -> Self {
        Self::new(path, ErrorCode::InvalidUrl, "Enter a valid URL.")
    }

    pub fn invalid_datetime(path: impl Into<String>) -> Self {
        Self::new(
            path,
            ErrorCode::InvalidDateTime,
            "Datetime has wrong format. Use one of these formats instead: \
             YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z].",
        )
    }

    pub fn invalid_email(path: impl Into<String>) -> Self {
        Self::new(path, ErrorCode::InvalidEmail, "Enter a valid email address.")
    }

    /// Rejection produced by a field rule
    pub fn rule(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, ErrorCode::Invalid, message)
    }

    /// Top-level field this error belongs to
    pub fn field(&self) -> &str {
        let end = self
            .path
            .find(|c: char| c == '.' || c == '[')
            .unwrap_or(self.path.len());
        &self.path[..end]
    }

    /// Message as shown under its top-level field.
    ///
    /// Errors raised on the field itself show the bare message; errors
    /// from nested locations are prefixed with the location relative to
    /// the field, e.g. "[0].id: This field is required."
    pub fn display_message(&self) -> String {
        let relative = &self.path[self.field().len()..];
        if relative.is_empty() {
            self.message.clone()
        } else {
            format!("{}: {}", relative, self.message)
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.path, self.message)
    }
}

/// Collected validation failures, keyed by top-level field
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed: {}", summarize(.fields))]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report holding a single error not tied to a field
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(FieldError::new(NON_FIELD_ERRORS, ErrorCode::Invalid, message));
        errors
    }

    /// Records an error under its top-level field
    pub fn push(&mut self, error: FieldError) {
        self.fields
            .entry(error.field().to_string())
            .or_default()
            .push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields carrying at least one error
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Number of individual errors across all fields
    pub fn error_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Top-level field names with errors, in sorted order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Errors recorded under a top-level field
    pub fn errors(&self, field: &str) -> &[FieldError] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display messages recorded under a top-level field
    pub fn messages(&self, field: &str) -> Vec<String> {
        self.errors(field)
            .iter()
            .map(FieldError::display_message)
            .collect()
    }

    /// Every error in field order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.fields.values().flatten()
    }

    /// Ok when nothing was recorded, otherwise the report itself
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn summarize(fields: &BTreeMap<String, Vec<FieldError>>) -> String {
    fields
        .values()
        .flatten()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, errors) in &self.fields {
            let messages: Vec<String> = errors.iter().map(FieldError::display_message).collect();
            map.serialize_entry(field, &messages)?;
        }
        map.end()
    }
}
