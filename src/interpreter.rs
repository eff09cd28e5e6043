/// The evaluator module computes the result of a parsed equation.
///
/// It combines two numerals with an operator, keeps the left operand's
/// notation, and rejects division by zero and Roman results below one.
pub mod evaluator;
/// The lexer module recognizes the operator of an equation.
///
/// The operator word must lex into exactly one of the four operator tokens;
/// anything else is reported as an unsupported operator.
pub mod lexer;
/// The parser module builds an `Equation` from a line of text.
///
/// The parser splits the line into words, delegates operands to the numeral
/// table and the operator to the lexer, and collects every defect it finds
/// instead of stopping at the first one.
pub mod parser;
/// The value module defines numerals and their notations.
///
/// # Responsibilities
/// - Defines `Numeral` and `Notation`.
/// - Holds the table of accepted spellings for `0..=10`.
/// - Encodes magnitudes as Roman numerals.
pub mod value;
