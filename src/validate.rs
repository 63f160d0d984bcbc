//! Admission control for new records.
//!
//! Validation only runs on insert. Records already on disk are never
//! re-checked.

use serde_json::{Map, Value};

/// Why a candidate was refused.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The candidate is not a JSON object.
    #[error("record must be a JSON object")]
    NotAnObject,
    /// `name` is absent or null.
    #[error("name is missing")]
    MissingName,
    /// `name` is present but not a string.
    #[error("name must be a string")]
    NameNotString,
    /// `name` is empty after trimming whitespace.
    #[error("name must not be blank")]
    BlankName,
    /// `age` is present and non-null but not a non-negative integer.
    #[error("age must be a non-negative integer")]
    MalformedAge,
}

/// Check a candidate and hand back its fields on success.
///
/// `age` passes when it is absent, `null`, or a non-negative integer
/// (zero included). Every other value, falsy or not, is a
/// [`Rejection::MalformedAge`].
pub fn validate(candidate: &Value) -> Result<&Map<String, Value>, Rejection> {
    let fields = candidate.as_object().ok_or(Rejection::NotAnObject)?;

    match fields.get("name") {
        None | Some(Value::Null) => return Err(Rejection::MissingName),
        Some(Value::String(name)) if name.trim().is_empty() => return Err(Rejection::BlankName),
        Some(Value::String(_)) => {}
        Some(_) => return Err(Rejection::NameNotString),
    }

    match fields.get("age") {
        None | Some(Value::Null) => {}
        Some(age) if age.is_u64() => {}
        Some(_) => return Err(Rejection::MalformedAge),
    }

    Ok(fields)
}

/// `true` when [`validate`] would admit the candidate.
#[must_use]
pub fn is_valid(candidate: &Value) -> bool {
    validate(candidate).is_ok()
}
