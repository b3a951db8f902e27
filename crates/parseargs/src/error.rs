//! Errors raised by configuration validation and by the scanner.

use thiserror::Error;

/// Every failure `parse`/`parse_args` can report.
///
/// Configuration errors (`InvalidArgType`, `InvalidArgValue`) are raised before
/// any token is scanned. `UnknownOption` and `InvalidOptionValue` are raised
/// mid-scan and only in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A configuration input has the wrong shape.
    #[error("the \"{name}\" argument must be {expected}, received {actual}")]
    InvalidArgType {
        name: String,
        expected: String,
        actual: String,
    },

    /// A configuration input has the right shape but an illegal value.
    #[error("the \"{name}\" argument {reason}")]
    InvalidArgValue { name: String, reason: String },

    /// Strict mode met an option missing from the schema.
    #[error("unknown option '{option}'")]
    UnknownOption { option: String },

    /// Strict mode met a declared option used against its declared kind.
    #[error("option '{option}' {reason}")]
    InvalidOptionValue { option: String, reason: String },
}

impl ParseError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgType { .. } => "ERR_INVALID_ARG_TYPE",
            Self::InvalidArgValue { .. } => "ERR_INVALID_ARG_VALUE",
            Self::UnknownOption { .. } => "ERR_UNKNOWN_OPTION",
            Self::InvalidOptionValue { .. } => "ERR_INVALID_OPTION_VALUE",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn arg_type(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: &serde_json::Value,
    ) -> Self {
        Self::InvalidArgType {
            name: name.into(),
            expected: expected.into(),
            actual: describe_json(actual),
        }
    }

    pub(crate) fn arg_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

fn describe_json(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("type boolean ({b})"),
        Value::Number(n) => format!("type number ({n})"),
        Value::String(s) => format!("type string ('{s}')"),
        Value::Array(_) => "an instance of Array".to_string(),
        Value::Object(_) => "an instance of Object".to_string(),
    }
}
