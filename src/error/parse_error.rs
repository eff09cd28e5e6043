use crate::interpreter::value::numeral::Notation;

/// Identifies which side of the operator an operand was written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    /// The operand to the left of the operator.
    First,
    /// The operand to the right of the operator.
    Second,
}

impl std::fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading an equation.
pub enum ParseError {
    /// No equation was given at all.
    InputMissing,
    /// The equation did not split into exactly three words.
    IncorrectFormat {
        /// The number of words found.
        tokens: usize,
    },
    /// A word is not one of the supported numerals.
    InvalidNumeral {
        /// The rejected word.
        token: String,
    },
    /// An operand of the equation is not one of the supported numerals.
    InvalidOperand {
        /// Which operand was rejected.
        position: OperandPosition,
        /// The rejected word.
        token:    String,
    },
    /// The operator is not one of `+`, `-`, `*` or `/`.
    UnsupportedOperator {
        /// The rejected word.
        symbol: String,
    },
    /// Both operands are valid but written in different notations.
    NotationMismatch {
        /// Notation of the first operand.
        left:  Notation,
        /// Notation of the second operand.
        right: Notation,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputMissing => f.write_str("equation is not provided"),
            Self::IncorrectFormat { .. } => f.write_str("equation has incorrect format"),
            Self::InvalidNumeral { .. } => {
                f.write_str("operand is not a valid Arabic or Roman number")
            },
            Self::InvalidOperand { position, .. } => {
                write!(f, "{position} operand is not valid Arabic or Roman number")
            },
            Self::UnsupportedOperator { .. } => f.write_str("operator is not supported"),
            Self::NotationMismatch { .. } => {
                f.write_str("cannot operate on numbers of different notations")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Every defect found while parsing one equation.
///
/// Parsing does not stop at the first bad word, so a single equation can
/// report several problems at once. The list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    /// Delimiter placed between messages when displaying several errors.
    pub const DELIMITER: &'static str = " :: ";

    pub(crate) fn new(errors: Vec<ParseError>) -> Self {
        debug_assert!(!errors.is_empty(), "an error report needs at least one error");
        Self(errors)
    }

    /// Returns the collected errors in the order they were found.
    #[must_use]
    pub fn as_slice(&self) -> &[ParseError] {
        &self.0
    }

    /// Returns the number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a report holds at least one error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the collected errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }
}

impl From<ParseError> for ParseErrors {
    fn from(error: ParseError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type IntoIter = std::slice::Iter<'a, ParseError>;
    type Item = &'a ParseError;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(Self::DELIMITER)?;
            }
            write!(f, "{error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
