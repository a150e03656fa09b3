//! Error types for misapplied encodings.

use thiserror::Error;

use crate::language::Value;

/// Categories of evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChurchErrorKind {
    /// A thunk or host atom was applied as a function
    NotCallable,
    /// A conditional branch was not a zero-argument deferred computation
    NotAThunk,
    /// A bridge read back something other than the host primitive it fed in
    BridgeMismatch,
    /// A numeral in a string does not name a Unicode scalar value
    InvalidCharCode,
}

/// An evaluation error with context.
#[derive(Debug, Clone, Error)]
#[error("{message}{}", render_context(.context))]
pub struct ChurchError {
    /// The category of error
    pub kind: ChurchErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The operation that was running when the error surfaced (if known)
    pub context: Option<String>,
}

fn render_context(context: &Option<String>) -> String {
    context
        .as_ref()
        .map_or_else(String::new, |ctx| format!(" (in {ctx})"))
}

impl ChurchError {
    pub fn new(kind: ChurchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Record the operation the error passed through. The innermost context
    /// wins, so bridges can wrap without hiding where the failure started.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if self.context.is_none() {
            self.context = Some(context.into());
        }
        self
    }

    pub fn not_callable(value: &Value) -> Self {
        Self::new(
            ChurchErrorKind::NotCallable,
            format!("cannot apply non-function: {value}"),
        )
    }

    pub fn not_a_thunk(value: &Value) -> Self {
        Self::new(
            ChurchErrorKind::NotAThunk,
            format!("expected a deferred branch, got {value}"),
        )
    }

    pub fn bridge_mismatch(expected: &str, got: &Value) -> Self {
        Self::new(
            ChurchErrorKind::BridgeMismatch,
            format!("expected {expected}, got {got}"),
        )
    }

    pub fn invalid_char_code(code: u64) -> Self {
        Self::new(
            ChurchErrorKind::InvalidCharCode,
            format!("{code} is not a valid character code"),
        )
    }
}

impl From<ChurchError> for String {
    fn from(err: ChurchError) -> String {
        err.to_string()
    }
}
