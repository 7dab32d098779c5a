use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Checks that a name is exactly one letter and returns that letter.
///
/// # Errors
/// Returns [`ParseError::IdentifierTooLong`] for longer names.
pub(in crate::interpreter::parser) fn single_letter(name: &str, line: usize) -> ParseResult<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(ParseError::IdentifierTooLong { name: name.to_string(),
                                                 line }),
    }
}

/// Checks that a numeric literal is a single digit and returns its value.
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] for literals of two or more
/// digits.
pub(in crate::interpreter::parser) fn single_digit(literal: &str, line: usize) -> ParseResult<i64> {
    let mut chars = literal.chars();
    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
        (Some(digit), None) => Ok(i64::from(digit)),
        _ => Err(ParseError::LiteralTooLarge { literal: literal.to_string(),
                                               line }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `expected`: What the identifier stands for, used in the error message.
/// - `line`: The line being parsed.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the line ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &'static str,
                                                              line: usize)
                                                              -> ParseResult<&'a str>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(Spanned { token: Token::Identifier(name),
                       .. }) => Ok(name),
        Some(Spanned { token, .. }) => {
            Err(ParseError::UnexpectedToken { token: format!("expected {expected}, found '{token}'"),
                                              line })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected, line }),
    }
}

/// Fails if any token is left on the line.
///
/// # Errors
/// Returns [`ParseError::UnexpectedTrailingTokens`] naming the first extra
/// token.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>,
                                                        line: usize)
                                                        -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(Spanned { token, .. }) => {
            Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                       line })
        },
        None => Ok(()),
    }
}
