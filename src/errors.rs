use std::fmt;

use serde::Serialize;

/// Machine-readable discriminant carried by every [`DurationParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyInput,
    InvalidType,
    InputTooLong,
    InvalidFormat,
    InvalidNumber,
    NegativeNotAllowed,
    AmbiguousUnit,
    UnknownUnit,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::InputTooLong => "INPUT_TOO_LONG",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidNumber => "INVALID_NUMBER",
            ErrorCode::NegativeNotAllowed => "NEGATIVE_NOT_ALLOWED",
            ErrorCode::AmbiguousUnit => "AMBIGUOUS_UNIT",
            ErrorCode::UnknownUnit => "UNKNOWN_UNIT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured parse failure.
///
/// Callers match on [`DurationParseError::code`] rather than the message; the
/// `suggestions` list is empty unless the failure has a meaningful correction
/// (unknown or ambiguous unit, malformed input).
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct DurationParseError {
    pub message: String,
    pub input: String,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl DurationParseError {
    pub fn new(code: ErrorCode, input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            input: input.into(),
            code,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Cannot format non-finite value: {0}")]
    NonFinite(f64),
}
