#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parsed equation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// A Roman result is zero or negative and has no Roman spelling.
    RomanOutOfRange {
        /// The magnitude that was computed.
        magnitude: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::RomanOutOfRange { .. } => f.write_str("Roman numerals must be ≥ 1"),
        }
    }
}

impl std::error::Error for RuntimeError {}
