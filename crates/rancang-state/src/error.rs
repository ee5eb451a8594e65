use serde_json::Value;
use thiserror::Error;

pub type StateResult<T> = Result<T, StateError>;

/// Failures while resolving or mutating a document path.
///
/// All of these mean a patch addressed a shape the document does not have.
/// Legal writers only touch branches the seeded plan owns, so these are
/// asserted in tests and logged when they would otherwise be impossible,
/// never shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("empty path")]
    EmptyPath,

    #[error("path not found: {path}")]
    PathNotFound { path: String },

    #[error("index {index} out of bounds at {path} (len {len})")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },

    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("append target {path} is {found}, not an array")]
    AppendRequiresArray { path: String, found: &'static str },
}

/// Human-readable JSON type name for diagnostics.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
