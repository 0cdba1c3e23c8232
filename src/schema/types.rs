//! Field table definitions
//!
//! A schema is an ordered list of field definitions. Each definition names
//! a field, the kind of value it accepts, whether it must be present,
//! whether an explicit `null` is tolerated, whether an empty string counts
//! as a missing value, and an optional rule that runs on the coerced value.
//!
//! Supported kinds:
//! - string: UTF-8 string with an optional maximum length
//! - email: string that must look like an e-mail address
//! - url: absolute http(s)/ftp(s) URL
//! - datetime: ISO 8601 / RFC 3339 date-time
//! - object: nested object with its own field table
//! - list: homogeneous list with a single element kind

use serde_json::Value;

/// Extra check run on a value after its kind has been validated.
///
/// Receives the coerced value. An `Err` carries the message recorded
/// against the field.
pub type FieldRule = fn(&Value) -> Result<(), String>;

/// Kind of value a field accepts
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// UTF-8 string, optionally bounded in characters
    String { max_length: Option<usize> },
    /// E-mail address, optionally bounded in characters
    Email { max_length: Option<usize> },
    /// Absolute URL
    Url,
    /// Date-time, normalized to RFC 3339 UTC
    DateTime,
    /// Nested object validated against its own table
    Object(ObjectSchema),
    /// Homogeneous list; elements may never be null
    List(Box<FieldKind>),
}

impl FieldKind {
    /// Returns the kind name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String { .. } => "string",
            FieldKind::Email { .. } => "email",
            FieldKind::Url => "url",
            FieldKind::DateTime => "datetime",
            FieldKind::Object(_) => "object",
            FieldKind::List(_) => "list",
        }
    }

    /// List whose elements are objects of the given schema
    pub fn list_of(schema: ObjectSchema) -> Self {
        FieldKind::List(Box::new(FieldKind::Object(schema)))
    }
}

/// One entry in a field table
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name as it appears in the payload
    pub name: String,
    /// Accepted kind
    pub kind: FieldKind,
    /// Whether the field must be present
    pub required: bool,
    /// Whether an explicit `null` is treated as absence
    pub allow_null: bool,
    /// Whether `""` is treated as absence
    pub blank_as_absent: bool,
    /// Optional rule applied after kind validation
    pub rule: Option<FieldRule>,
}

impl FieldDef {
    /// Create a required field of the given kind
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            allow_null: false,
            blank_as_absent: false,
            rule: None,
        }
    }

    /// Create a required string field
    pub fn required_string(name: impl Into<String>, max_length: Option<usize>) -> Self {
        Self::new(name, FieldKind::String { max_length })
    }

    /// Create an optional string field
    pub fn optional_string(name: impl Into<String>, max_length: Option<usize>) -> Self {
        Self::required_string(name, max_length).optional()
    }

    /// Create an optional list field whose elements follow `schema`
    pub fn optional_list(name: impl Into<String>, schema: ObjectSchema) -> Self {
        Self::new(name, FieldKind::list_of(schema)).optional()
    }

    /// Marks the field as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Treats an explicit `null` as if the field were absent
    pub fn nullable(mut self) -> Self {
        self.allow_null = true;
        self
    }

    /// Treats both `null` and `""` as if the field were absent
    pub fn blank_as_absent(mut self) -> Self {
        self.allow_null = true;
        self.blank_as_absent = true;
        self
    }

    /// Attaches a rule run on the coerced value
    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

/// Named, ordered field table
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    name: String,
    fields: Vec<FieldDef>,
}

impl ObjectSchema {
    /// Create a schema from an ordered field list
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Builds a new schema holding this table followed by `extra`.
    ///
    /// Fields of the base table are never redefined: an extra field whose
    /// name is already declared is ignored.
    pub fn extend(&self, name: impl Into<String>, extra: Vec<FieldDef>) -> Self {
        let mut fields = self.fields.clone();
        for def in extra {
            if !fields.iter().any(|f| f.name == def.name) {
                fields.push(def);
            }
        }
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Schema name used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field definitions in declaration order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Looks up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
