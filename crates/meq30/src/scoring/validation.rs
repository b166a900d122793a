use std::fmt;

use serde::Serialize;

/// Reason an answer set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    Missing,
    NotInteger,
    OutOfRange(i64),
    /// Whole number too large to carry as a 64-bit signed value.
    Overflow,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::Missing => write!(f, "no response"),
            ValidationErrorKind::NotInteger => write!(f, "response is not an integer"),
            ValidationErrorKind::OutOfRange(value) => write!(f, "response {value} out of range"),
            ValidationErrorKind::Overflow => write!(f, "response exceeds the integer range"),
        }
    }
}

/// Raised when an answer set is incomplete or holds an out-of-domain response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing/invalid answer for item {item_id} ({kind}); expected integer 0..5")]
pub struct ValidationError {
    pub item_id: u16,
    pub kind: ValidationErrorKind,
}
