// SPDX-License-Identifier: AGPL-3.0

//! Value type errors
//!
//! Errors raised by the exact numeric value types (`Real` and `BitVec`).
//! Every error is returned at the point of the offending operation; nothing is
//! retried or auto-corrected.

use thiserror::Error;

/// Coarse classification of a [`ValueError`].
///
/// Several variants map onto the same kind, e.g. a bit width mismatch is just
/// a specific invalid argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid construction parameters or operands
    Argument,
    /// Division, remainder or reciprocal with a zero divisor
    Division,
    /// Value does not fit the requested host integer type
    Overflow,
    /// Malformed literal or unknown format specifier
    Format,
    /// Operation is not defined for this particular value
    InvalidOperation,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Argument => "argument",
            ErrorKind::Division => "division",
            ErrorKind::Overflow => "overflow",
            ErrorKind::Format => "format",
            ErrorKind::InvalidOperation => "invalid-operation",
        }
    }
}

/// Raised when a literal string cannot be parsed into a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {what}: {input}")]
pub struct ParseError {
    /// What the parser expected, e.g. "integer format" or "denominator"
    pub what: String,
    /// The offending text
    pub input: String,
}

impl ParseError {
    pub fn new(what: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            input: input.into(),
        }
    }
}

/// Errors produced by value type construction, arithmetic and conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("BitVec size mismatch: {left} != {right}")]
    SizeMismatch { left: u32, right: u32 },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Overflow: {0}")]
    Overflow(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid format string: {0}")]
    Format(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl ValueError {
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn division(msg: impl Into<String>) -> Self {
        Self::DivisionByZero(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn format(spec: impl Into<String>) -> Self {
        Self::Format(spec.into())
    }

    pub fn parse(what: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Parse(ParseError::new(what, input))
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValueError::InvalidArgument(_) | ValueError::SizeMismatch { .. } => ErrorKind::Argument,
            ValueError::DivisionByZero(_) => ErrorKind::Division,
            ValueError::Overflow(_) => ErrorKind::Overflow,
            ValueError::Parse(_) | ValueError::Format(_) => ErrorKind::Format,
            ValueError::InvalidOperation(_) => ErrorKind::InvalidOperation,
        }
    }
}

/// Result type for value type operations
pub type ValueResult<T> = Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_display() {
        let err = ValueError::SizeMismatch { left: 8, right: 16 };
        assert_eq!(err.to_string(), "BitVec size mismatch: 8 != 16");
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_parse_error_is_format_kind() {
        let err: ValueError = ParseError::new("integer format", "12x").into();
        assert_eq!(err.to_string(), "Invalid integer format: 12x");
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_division_error() {
        let err = ValueError::division("Division by zero is not allowed");
        assert_eq!(err.kind(), ErrorKind::Division);
        assert!(err.to_string().starts_with("Division by zero"));
    }

    #[test]
    fn test_all_kinds_have_names() {
        let errors = vec![
            ValueError::argument("x"),
            ValueError::division("x"),
            ValueError::overflow("x"),
            ValueError::format("Q"),
            ValueError::parse("decimal format", "1.2.3"),
            ValueError::invalid_operation("x"),
        ];

        for err in errors {
            assert!(!err.kind().name().is_empty());
        }
    }

    #[test]
    fn test_format_error_names_specifier() {
        let err = ValueError::format("Q");
        assert_eq!(err.to_string(), "Invalid format string: Q");
    }
}
