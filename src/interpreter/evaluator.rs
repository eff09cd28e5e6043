use tracing::debug;

use crate::{
    ast::{BinaryOperator, Equation},
    error::RuntimeError,
    interpreter::value::numeral::{Notation, Numeral},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Numeral {
    /// Applies `op` to two numerals.
    ///
    /// The result always takes the notation of `self`, the left operand.
    /// Subtraction may go below zero and multiplication may exceed ten; the
    /// result is not range-checked here. Division truncates toward zero.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when dividing by a zero
    /// magnitude.
    ///
    /// # Example
    /// ```
    /// use romana::{ast::BinaryOperator, interpreter::value::numeral::Numeral};
    ///
    /// let ten = Numeral::parse("X").unwrap();
    /// let three = Numeral::parse("III").unwrap();
    ///
    /// assert_eq!(ten.combine(three, BinaryOperator::Div).unwrap().render(), "III");
    /// assert_eq!(ten.combine(ten, BinaryOperator::Mul).unwrap().render(), "C");
    /// ```
    pub fn combine(self, other: Self, op: BinaryOperator) -> EvalResult<Self> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let (a, b) = (self.magnitude(), other.magnitude());

        let magnitude = match op {
            Add => a + b,
            Sub => a - b,
            Mul => a * b,
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a / b
            },
        };

        Ok(Self::new(magnitude, self.notation()))
    }
}

impl Equation {
    /// Evaluates the equation.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when the right operand of `/` is zero.
    /// - `RuntimeError::RomanOutOfRange` when a Roman equation produces zero or
    ///   a negative number. Arabic results below one are returned as they are.
    ///
    /// # Example
    /// ```
    /// use romana::ast::Equation;
    ///
    /// let result = Equation::parse(Some("5 - 8")).unwrap().evaluate().unwrap();
    /// assert_eq!(result.render(), "-3");
    ///
    /// let roman = Equation::parse(Some("V - X")).unwrap();
    /// assert!(roman.evaluate().is_err());
    /// ```
    pub fn evaluate(&self) -> EvalResult<Numeral> {
        let result = self.left.combine(self.right, self.operator)?;

        if result.notation() == Notation::Roman && result.magnitude() < 1 {
            return Err(RuntimeError::RomanOutOfRange { magnitude: result.magnitude() });
        }

        debug!(equation = %self, magnitude = result.magnitude(), "equation evaluated");

        Ok(result)
    }
}
