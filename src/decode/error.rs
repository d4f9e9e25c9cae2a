//! Problems found in untyped action records.

use thiserror::Error;

/// A single problem in a description record.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DecodeError {
    #[error("{context}: expected an object, found {found}")]
    NotAnObject { context: String, found: &'static str },

    #[error("{context}: expected an array, found {found}")]
    NotAnArray { context: String, found: &'static str },

    #[error("{context}: missing required field")]
    MissingField { context: String },

    #[error("{context}: expected {expected}, found {found}")]
    WrongType {
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{context}: '{value}' is not one of [{allowed}]")]
    NotInSet {
        context: String,
        value: String,
        allowed: String,
    },
}

/// JSON type name used in messages.
pub fn kind_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
