use logos::Logos;

/// Represents an operator token in an equation.
///
/// An equation is split into words before lexing, so the operator word is
/// expected to produce exactly one token. Operands are not lexed; the numeral
/// table in [`crate::interpreter::value::numeral`] matches them directly.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Lexes a single word into exactly one token.
///
/// Returns `None` if the word is empty, contains characters the lexer does
/// not recognize, or lexes into more than one token (for example `++`).
///
/// # Example
/// ```
/// use romana::interpreter::lexer::{Token, lex_word};
///
/// assert_eq!(lex_word("/"), Some(Token::Slash));
/// assert_eq!(lex_word("++"), None);
/// assert_eq!(lex_word("X"), None);
/// assert_eq!(lex_word(""), None);
/// ```
#[must_use]
pub fn lex_word(word: &str) -> Option<Token> {
    let mut lexer = Token::lexer(word);
    let token = lexer.next()?.ok()?;

    lexer.next().is_none().then_some(token)
}
