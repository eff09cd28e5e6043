use std::str::FromStr;

use crate::{
    error::ParseError,
    interpreter::{
        parser::ParseResult,
        value::roman::to_roman,
    },
};

/// The numeral system a value is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Decimal digits, such as `7`.
    Arabic,
    /// Roman symbols, such as `VII`.
    Roman,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => f.write_str("Arabic"),
            Self::Roman => f.write_str("Roman"),
        }
    }
}

/// One row of the numeral table.
struct Spelling {
    magnitude: i64,
    arabic:    &'static str,
    roman:     &'static str,
}

impl Spelling {
    const fn in_notation(&self, notation: Notation) -> &'static str {
        match notation {
            Notation::Arabic => self.arabic,
            Notation::Roman => self.roman,
        }
    }
}

/// Every operand the calculator accepts. Zero has no Roman spelling and is
/// listed with an empty one.
static SPELLINGS: [Spelling; 11] = [Spelling { magnitude: 0,
                                               arabic:    "0",
                                               roman:     "", },
                                    Spelling { magnitude: 1,
                                               arabic:    "1",
                                               roman:     "I", },
                                    Spelling { magnitude: 2,
                                               arabic:    "2",
                                               roman:     "II", },
                                    Spelling { magnitude: 3,
                                               arabic:    "3",
                                               roman:     "III", },
                                    Spelling { magnitude: 4,
                                               arabic:    "4",
                                               roman:     "IV", },
                                    Spelling { magnitude: 5,
                                               arabic:    "5",
                                               roman:     "V", },
                                    Spelling { magnitude: 6,
                                               arabic:    "6",
                                               roman:     "VI", },
                                    Spelling { magnitude: 7,
                                               arabic:    "7",
                                               roman:     "VII", },
                                    Spelling { magnitude: 8,
                                               arabic:    "8",
                                               roman:     "VIII", },
                                    Spelling { magnitude: 9,
                                               arabic:    "9",
                                               roman:     "IX", },
                                    Spelling { magnitude: 10,
                                               arabic:    "10",
                                               roman:     "X", }];

/// A magnitude together with the notation it was written in.
///
/// Numerals are only created by parsing a table spelling or by combining two
/// existing numerals, so every operand is in the range `0..=10`. Results of
/// arithmetic may leave that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numeral {
    magnitude: i64,
    notation:  Notation,
}

impl Numeral {
    pub(crate) const fn new(magnitude: i64, notation: Notation) -> Self {
        Self { magnitude, notation }
    }

    /// Parses a numeral from a single word.
    ///
    /// The word is upper-cased and must match one of the eleven Arabic or
    /// Roman spellings of `0..=10` exactly. Non-canonical forms such as
    /// `IIII` or `010` are rejected. The empty word is the Roman spelling of
    /// zero.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNumeral` if the word is not in the table.
    ///
    /// # Example
    /// ```
    /// use romana::interpreter::value::numeral::{Notation, Numeral};
    ///
    /// let five = Numeral::parse("v").unwrap();
    /// assert_eq!(five.magnitude(), 5);
    /// assert_eq!(five.notation(), Notation::Roman);
    ///
    /// assert!(Numeral::parse("11").is_err());
    /// assert!(Numeral::parse("VV").is_err());
    /// assert_eq!(Numeral::parse("").unwrap().magnitude(), 0);
    /// ```
    pub fn parse(token: &str) -> ParseResult<Self> {
        let token = token.to_uppercase();

        [Notation::Arabic, Notation::Roman].into_iter()
                                           .find_map(|notation| {
                                               SPELLINGS.iter()
                                                        .find(|spelling| {
                                                            spelling.in_notation(notation) == token
                                                        })
                                                        .map(|spelling| {
                                                            Self::new(spelling.magnitude, notation)
                                                        })
                                           })
                                           .ok_or(ParseError::InvalidNumeral { token })
    }

    /// Returns the underlying integer quantity.
    #[must_use]
    pub const fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// Returns the notation the numeral is rendered in.
    #[must_use]
    pub const fn notation(&self) -> Notation {
        self.notation
    }

    /// Renders the numeral in its own notation.
    ///
    /// Arabic numerals render as decimal, negative values included. Roman
    /// numerals use the subtractive encoding of [`to_roman`], which renders
    /// zero as an empty string.
    ///
    /// # Example
    /// ```
    /// use romana::interpreter::value::numeral::Numeral;
    ///
    /// assert_eq!(Numeral::parse("9").unwrap().render(), "9");
    /// assert_eq!(Numeral::parse("ix").unwrap().render(), "IX");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        match self.notation {
            Notation::Arabic => self.magnitude.to_string(),
            Notation::Roman => to_roman(self.magnitude),
        }
    }
}

impl FromStr for Numeral {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
