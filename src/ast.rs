use std::str::FromStr;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, lex_word},
        parser::ParseResult,
        value::numeral::Numeral,
    },
};

/// Represents one of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Truncating integer division `/`.
    Div,
}

impl BinaryOperator {
    /// Parses an operator from its symbol.
    ///
    /// # Errors
    /// Returns `ParseError::UnsupportedOperator` for anything other than `+`,
    /// `-`, `*` or `/`.
    ///
    /// # Example
    /// ```
    /// use romana::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::parse("*").unwrap(), BinaryOperator::Mul);
    /// assert!(BinaryOperator::parse("&").is_err());
    /// ```
    pub fn parse(symbol: &str) -> ParseResult<Self> {
        match lex_word(symbol) {
            Some(Token::Plus) => Ok(Self::Add),
            Some(Token::Minus) => Ok(Self::Sub),
            Some(Token::Star) => Ok(Self::Mul),
            Some(Token::Slash) => Ok(Self::Div),
            _ => Err(ParseError::UnsupportedOperator { symbol: symbol.to_string() }),
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let s = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };

        write!(f, "{s}")
    }
}

/// A parsed equation of the form `<operand> <operator> <operand>`.
///
/// An `Equation` only exists once parsing found no defects, so both operands
/// share a notation and the equation can always be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub(crate) left:     Numeral,
    pub(crate) operator: BinaryOperator,
    pub(crate) right:    Numeral,
}

impl Equation {
    /// Returns the operand left of the operator.
    #[must_use]
    pub const fn left(&self) -> Numeral {
        self.left
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> BinaryOperator {
        self.operator
    }

    /// Returns the operand right of the operator.
    #[must_use]
    pub const fn right(&self) -> Numeral {
        self.right
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}
