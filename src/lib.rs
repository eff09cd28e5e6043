//! # romana
//!
//! romana is a calculator for single binary equations written in Arabic or
//! Roman numerals. Operands are limited to the values zero through ten, both
//! operands must use the same notation, and the result is rendered back in
//! that notation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::Equation, error::CalcError};

/// Defines the structure of a parsed equation.
///
/// This module declares the `Equation` type and the `BinaryOperator` enum. An
/// equation is built by the parser and consumed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while reading or
/// evaluating an equation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Collects several parse errors into one report.
/// - Implements the standard error traits for integration with `?`.
pub mod error;
/// Orchestrates parsing and evaluation of equations.
///
/// This module ties together lexing, parsing, evaluation and the numeral
/// types.
pub mod interpreter;

/// Evaluates one equation and renders the result.
///
/// The input has the form `<operand> <operator> <operand>` with single spaces
/// between the words. Operands are Arabic (`0` to `10`) or Roman (`I` to `X`)
/// numerals in any letter case; the operator is one of `+`, `-`, `*` or `/`.
///
/// # Errors
/// Returns `CalcError::Parse` with every defect found if the equation cannot
/// be parsed, or `CalcError::Runtime` if it divides by zero or produces a
/// Roman result below one.
///
/// # Examples
/// ```
/// use romana::evaluate;
///
/// assert_eq!(evaluate("5 + 3").unwrap(), "8");
/// assert_eq!(evaluate("V + III").unwrap(), "VIII");
///
/// let err = evaluate("5 + III").unwrap_err();
/// assert_eq!(err.to_string(), "cannot operate on numbers of different notations");
/// ```
pub fn evaluate(text: &str) -> Result<String, CalcError> {
    evaluate_line(Some(text))
}

/// Evaluates one equation that may be absent.
///
/// Behaves like [`evaluate`], except that `None` is reported as
/// `ParseError::InputMissing`.
///
/// # Errors
/// See [`evaluate`].
///
/// # Examples
/// ```
/// use romana::evaluate_line;
///
/// assert_eq!(evaluate_line(Some("x * x")).unwrap(), "C");
/// assert_eq!(evaluate_line(None).unwrap_err().to_string(), "equation is not provided");
/// ```
pub fn evaluate_line(line: Option<&str>) -> Result<String, CalcError> {
    let equation = Equation::parse(line)?;
    let result = equation.evaluate()?;

    Ok(result.render())
}
