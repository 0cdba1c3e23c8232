//! Generic field-table validator
//!
//! Validation semantics:
//! - Fields are visited in declaration order
//! - Every error is collected; nothing short-circuits
//! - Undeclared input fields are ignored and dropped from the output
//! - Absent optional fields stay absent (no defaults, no nulls)
//! - Fields marked blank-as-absent read `""` the same as a missing key
//! - Field rules run only on values whose kind already validated
//!
//! The output is a normalized JSON object: strings coerced, date-times in
//! RFC 3339 UTC, nested objects stripped to their declared fields.

use serde_json::{Map, Value};

use super::errors::{FieldError, ValidationErrors, NON_FIELD_ERRORS};
use super::formats::{format_datetime, is_valid_email, is_valid_url, parse_datetime};
use super::types::{FieldDef, FieldKind, ObjectSchema};

/// Validates raw payloads against a field table.
///
/// Holds no state besides the borrowed schema, so one validator can be
/// shared freely and re-running it on the same input gives the same result.
pub struct SchemaValidator<'a> {
    schema: &'a ObjectSchema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a ObjectSchema) -> Self {
        Self { schema }
    }

    /// Validates a payload, returning the normalized object.
    ///
    /// # Errors
    ///
    /// Returns every field-scoped problem found. A payload that is not a
    /// JSON object is reported under `non_field_errors`.
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let obj = match input.as_object() {
            Some(obj) => obj,
            None => {
                errors.push(FieldError::not_an_object(
                    NON_FIELD_ERRORS,
                    json_type_name(input),
                ));
                return Err(errors);
            }
        };

        let normalized = validate_object(obj, self.schema, "", &mut errors);
        errors.into_result(normalized)
    }
}

/// Validates every declared field of `obj`, returning the recognized ones.
fn validate_object(
    obj: &Map<String, Value>,
    schema: &ObjectSchema,
    path_prefix: &str,
    errors: &mut ValidationErrors,
) -> Map<String, Value> {
    let mut normalized = Map::new();

    for def in schema.fields() {
        let field_path = make_path(path_prefix, &def.name);
        if let Some(value) = validate_field(obj.get(&def.name), def, &field_path, errors) {
            normalized.insert(def.name.clone(), value);
        }
    }

    normalized
}

/// Applies presence, null handling, kind and rule checks to one field.
fn validate_field(
    value: Option<&Value>,
    def: &FieldDef,
    field_path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    let value = match value {
        Some(Value::String(text)) if def.blank_as_absent && text.is_empty() => None,
        other => other,
    };

    let value = match value {
        None => {
            if def.required {
                errors.push(FieldError::required(field_path));
            }
            return None;
        }
        Some(Value::Null) => {
            if !def.allow_null {
                errors.push(FieldError::null_value(field_path));
            }
            return None;
        }
        Some(value) => value,
    };

    let coerced = validate_value(value, &def.kind, field_path, errors)?;

    if let Some(rule) = def.rule {
        if let Err(message) = rule(&coerced) {
            errors.push(FieldError::rule(field_path, message));
            return None;
        }
    }

    Some(coerced)
}

/// Checks a non-null value against a kind, returning its normalized form.
fn validate_value(
    value: &Value,
    kind: &FieldKind,
    field_path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    match kind {
        FieldKind::String { max_length } => {
            let text = coerce_string(value, *max_length, field_path, errors)?;
            Some(Value::String(text))
        }
        FieldKind::Email { max_length } => {
            let text = coerce_string(value, *max_length, field_path, errors)?;
            if !is_valid_email(&text) {
                errors.push(FieldError::invalid_email(field_path));
                return None;
            }
            Some(Value::String(text))
        }
        FieldKind::Url => {
            let text = coerce_string(value, None, field_path, errors)?;
            if !is_valid_url(&text) {
                errors.push(FieldError::invalid_url(field_path));
                return None;
            }
            Some(Value::String(text))
        }
        FieldKind::DateTime => {
            let parsed = value.as_str().and_then(parse_datetime);
            match parsed {
                Some(datetime) => Some(Value::String(format_datetime(&datetime))),
                None => {
                    errors.push(FieldError::invalid_datetime(field_path));
                    None
                }
            }
        }
        FieldKind::Object(schema) => {
            let obj = match value.as_object() {
                Some(obj) => obj,
                None => {
                    errors.push(FieldError::not_an_object(field_path, json_type_name(value)));
                    return None;
                }
            };

            let before = errors.error_count();
            let normalized = validate_object(obj, schema, field_path, errors);
            (errors.error_count() == before).then_some(Value::Object(normalized))
        }
        FieldKind::List(element_kind) => {
            let items = match value.as_array() {
                Some(items) => items,
                None => {
                    errors.push(FieldError::not_a_list(field_path, json_type_name(value)));
                    return None;
                }
            };

            let mut normalized = Vec::with_capacity(items.len());
            let mut failed = false;

            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", field_path, i);

                if item.is_null() {
                    errors.push(FieldError::null_value(&item_path));
                    failed = true;
                    continue;
                }

                match validate_value(item, element_kind, &item_path, errors) {
                    Some(value) => normalized.push(value),
                    None => failed = true,
                }
            }

            (!failed).then_some(Value::Array(normalized))
        }
    }
}

/// Accepts strings as-is and numbers as their decimal text.
fn coerce_string(
    value: &Value,
    max_length: Option<usize>,
    field_path: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => {
            errors.push(FieldError::invalid_string(field_path));
            return None;
        }
    };

    if let Some(max) = max_length {
        if text.chars().count() > max {
            errors.push(FieldError::max_length(field_path, max));
            return None;
        }
    }

    Some(text)
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}
