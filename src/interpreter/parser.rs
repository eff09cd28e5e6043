use tracing::debug;

use crate::{
    ast::{BinaryOperator, Equation},
    error::{OperandPosition, ParseError, ParseErrors},
    interpreter::value::numeral::Numeral,
};

pub type ParseResult<T> = Result<T, ParseError>;

impl Equation {
    /// Parses an equation from one line of input.
    ///
    /// The line is trimmed, upper-cased and split on single spaces; it must
    /// yield exactly three words. Each of the three words is then checked on
    /// its own, so a line with several defects reports all of them. Once both
    /// operands are valid they must also share a notation.
    ///
    /// # Parameters
    /// - `line`: The raw line, or `None` if no line was supplied.
    ///
    /// # Errors
    /// Returns every defect found, in this order:
    /// - `InputMissing` if `line` is `None` (nothing else is checked).
    /// - `IncorrectFormat` if the line is not three words (nothing else is
    ///   checked).
    /// - `InvalidOperand` for the first operand, `UnsupportedOperator`, and
    ///   `InvalidOperand` for the second operand.
    /// - `NotationMismatch` if both operands are valid but differ in notation.
    ///
    /// # Example
    /// ```
    /// use romana::ast::{BinaryOperator, Equation};
    ///
    /// let equation = Equation::parse(Some("vii / ii")).unwrap();
    /// assert_eq!(equation.operator(), BinaryOperator::Div);
    /// assert_eq!(equation.left().magnitude(), 7);
    ///
    /// let errors = Equation::parse(Some("foo bar baz")).unwrap_err();
    /// assert_eq!(errors.len(), 3);
    /// ```
    pub fn parse(line: Option<&str>) -> Result<Self, ParseErrors> {
        let Some(line) = line else {
            return Err(ParseError::InputMissing.into());
        };

        debug!(input = line, "parsing equation");

        let normalized = line.trim().to_uppercase();
        let words: Vec<&str> = normalized.split(' ').collect();

        let &[left, operator, right] = words.as_slice() else {
            return Err(ParseError::IncorrectFormat { tokens: words.len() }.into());
        };

        let mut errors = Vec::new();

        let left = record(parse_operand(left, OperandPosition::First), &mut errors);
        let operator = record(BinaryOperator::parse(operator), &mut errors);
        let right = record(parse_operand(right, OperandPosition::Second), &mut errors);

        if let (Some(left), Some(right)) = (left, right)
           && left.notation() != right.notation()
        {
            errors.push(ParseError::NotationMismatch { left:  left.notation(),
                                                       right: right.notation(), });
        }

        match (left, operator, right) {
            (Some(left), Some(operator), Some(right)) if errors.is_empty() => {
                Ok(Self { left,
                          operator,
                          right })
            },
            _ => {
                let errors = ParseErrors::new(errors);
                debug!(%errors, "equation rejected");
                Err(errors)
            },
        }
    }
}

/// Parses one operand, tagging a failure with the operand's position.
fn parse_operand(word: &str, position: OperandPosition) -> ParseResult<Numeral> {
    Numeral::parse(word).map_err(|_| ParseError::InvalidOperand { position,
                                                                   token: word.to_string() })
}

/// Moves a failure into `errors` so parsing can continue with the next word.
fn record<T>(result: ParseResult<T>, errors: &mut Vec<ParseError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        },
    }
}
