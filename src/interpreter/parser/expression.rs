use crate::{
    ast::{BinaryOperator, ExprToken, Symbol},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            utils::{single_digit, single_letter},
        },
    },
};

/// Converts the tokens of an expression line into expression symbols.
///
/// No structure is built here: parentheses stay symbols in their own right
/// because the evaluator gives `)` its own meaning. What is checked is the
/// shape of each symbol, so that literals are single digits and identifiers
/// single letters.
///
/// # Errors
/// Returns a `ParseError` for keywords, `=`, multi-digit literals and
/// multi-letter identifiers.
pub fn parse_expression<'a, I>(tokens: I, line: usize) -> ParseResult<Vec<ExprToken>>
    where I: Iterator<Item = &'a Spanned>
{
    tokens.map(|Spanned { token, column }| {
              let symbol = match token {
                  Token::Number(literal) => Symbol::Digit(single_digit(literal, line)?),
                  Token::Identifier(name) => Symbol::Identifier(single_letter(name, line)?),
                  Token::Plus => Symbol::Operator(BinaryOperator::Add),
                  Token::Minus => Symbol::Operator(BinaryOperator::Sub),
                  Token::Star => Symbol::Operator(BinaryOperator::Mul),
                  Token::Slash => Symbol::Operator(BinaryOperator::Div),
                  Token::LParen => Symbol::LParen,
                  Token::RParen => Symbol::RParen,
                  other => {
                      return Err(ParseError::UnexpectedToken { token: format!("'{other}' inside an expression"),
                                                               line });
                  },
              };
              Ok(ExprToken { symbol,
                             column: *column })
          })
          .collect()
}
