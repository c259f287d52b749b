//! Error types for jsontext
//!
//! Every failure of the query/mutation engine is one variant of [`Error`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! # Categories
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `MalformedJson` | stored text is not JSON, or is a bare scalar |
//! | `InvalidArgument` | operand of the wrong kind, unknown return mode |
//! | `InvalidExpression` | neither an operator nor a JSONPath expression |
//! | `NoMatch` | a mutation target matches nothing |
//! | `Configuration` | the operator backend cannot be resolved |
//! | `Limit` | document size limits exceeded |
//!
//! "Valid request, no results" is never an error: matchers return an empty
//! result for it.

use crate::json::LimitError;
use thiserror::Error;

/// Result type alias for jsontext operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for jsontext
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not valid JSON, or is a disallowed bare scalar document
    #[error("malformed JSON: {reason}")]
    MalformedJson {
        /// What was wrong with the input
        reason: String,
    },

    /// Wrong operand kind, unknown mode string, or a disallowed combination
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected argument
        reason: String,
    },

    /// Candidate is neither a known operator nor a supported JSONPath expression
    #[error("invalid operator or expression: {expression}")]
    InvalidExpression {
        /// The rejected candidate
        expression: String,
    },

    /// Mutation target expression matched no node
    #[error("expression matched nothing: {expression}")]
    NoMatch {
        /// The expression that matched nothing
        expression: String,
    },

    /// Selected operator backend cannot be resolved or config is unreadable
    #[error("configuration error: {reason}")]
    Configuration {
        /// Description of the configuration problem
        reason: String,
    },

    /// Document limit violation
    #[error("limit exceeded: {0}")]
    Limit(#[from] LimitError),
}

impl Error {
    /// Create a `MalformedJson` error
    pub fn malformed_json(reason: impl Into<String>) -> Self {
        Error::MalformedJson {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidArgument` error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidExpression` error
    pub fn invalid_expression(expression: impl Into<String>) -> Self {
        Error::InvalidExpression {
            expression: expression.into(),
        }
    }

    /// Create a `NoMatch` error
    pub fn no_match(expression: impl Into<String>) -> Self {
        Error::NoMatch {
            expression: expression.into(),
        }
    }

    /// Create a `Configuration` error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedJson { .. } => "MalformedJson",
            Error::InvalidArgument { .. } => "InvalidArgument",
            Error::InvalidExpression { .. } => "InvalidExpression",
            Error::NoMatch { .. } => "NoMatch",
            Error::Configuration { .. } => "Configuration",
            Error::Limit(_) => "Limit",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::malformed_json(e.to_string())
    }
}
