//! Structured validation errors
//!
//! A [`ValidationError`] names the first violated constraint, where it sits in
//! the document and a single human-readable message.

use serde::Serialize;
use std::fmt;

/// Category of a schema violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required field is absent
    MissingField,
    /// A field is present with the wrong JSON type
    WrongType,
    /// A closed enumeration received a value it does not list
    InvalidEnumValue,
    /// A section `type` that the schema does not know
    UnknownSectionType,
    /// A numeric field outside its permitted range
    OutOfRange,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingField => "missing_field",
            ValidationErrorKind::WrongType => "wrong_type",
            ValidationErrorKind::InvalidEnumValue => "invalid_enum_value",
            ValidationErrorKind::UnknownSectionType => "unknown_section_type",
            ValidationErrorKind::OutOfRange => "out_of_range",
        }
    }
}

/// One step of a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a field inside the document, printed like `sections[2].cta.primary.href`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// First schema violation found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub path: FieldPath,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
        }
    }

    pub fn missing(path: FieldPath) -> Self {
        Self::new(
            ValidationErrorKind::MissingField,
            path,
            "required field is missing",
        )
    }

    pub fn wrong_type(path: FieldPath, expected: &str, found: &serde_json::Value) -> Self {
        Self::new(
            ValidationErrorKind::WrongType,
            path,
            format!("expected {expected}, found {}", json_type_name(found)),
        )
    }

    pub fn invalid_enum(path: FieldPath, value: &str, allowed: &[&str]) -> Self {
        Self::new(
            ValidationErrorKind::InvalidEnumValue,
            path,
            format!(
                "\"{value}\" is not one of {}",
                allowed
                    .iter()
                    .map(|tag| format!("\"{tag}\""))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )
    }

    pub fn unknown_section(path: FieldPath, tag: &str, allowed: &[&str]) -> Self {
        Self::new(
            ValidationErrorKind::UnknownSectionType,
            path,
            format!(
                "unknown section type \"{tag}\" (expected one of: {})",
                allowed.join(", ")
            ),
        )
    }

    pub fn out_of_range(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::OutOfRange, path, message)
    }
}

/// JSON type name used in messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
