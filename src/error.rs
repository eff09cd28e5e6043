/// Parsing errors.
///
/// Defines the errors that can be found while reading an equation: a missing
/// line, a wrong number of words, invalid operands, an unsupported operator,
/// or operands written in different notations. Parse errors are collected
/// into a [`ParseErrors`] report rather than returned one at a time.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating an equation that parsed
/// cleanly: division by zero and Roman results below one.
pub mod runtime_error;

pub use parse_error::{OperandPosition, ParseError, ParseErrors};
pub use runtime_error::RuntimeError;

/// Any failure of [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The equation could not be parsed.
    Parse(ParseErrors),
    /// The equation parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseErrors> for CalcError {
    fn from(errors: ParseErrors) -> Self {
        Self::Parse(errors)
    }
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error.into())
    }
}

impl From<RuntimeError> for CalcError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => write!(f, "{errors}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(errors) => Some(errors),
            Self::Runtime(error) => Some(error),
        }
    }
}
