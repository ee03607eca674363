//! Error types for expression evaluation.

use thiserror::Error;

/// Errors that can occur while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The expression contained nothing but whitespace.
    #[error("empty expression")]
    Empty,

    /// A character the lexer does not recognize.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    /// A numeric literal that could not be read, such as `1.2.3`.
    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    /// The parser found a token it cannot use at this position.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },

    /// An identifier that is neither a constant nor a function.
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    /// A function called with the wrong number of arguments.
    #[error("function '{name}' takes {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },

    /// Parentheses, signs, calls or operator chains nested past the limit.
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),

    /// The result is infinite or not a number.
    #[error("result is not a finite number")]
    NonFinite,
}

/// Result type for evaluator operations.
pub type Result<T> = std::result::Result<T, EvalError>;
