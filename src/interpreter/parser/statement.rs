use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            expression::parse_expression,
            utils::{expect_end, parse_identifier, single_digit, single_letter},
        },
    },
};

/// Parses a single statement.
///
/// The first token of the line decides what the line is:
/// - `begin` or `end`, alone on the line.
/// - `int`, a variable declaration.
/// - `function`, a function declaration.
/// - `(`, an expression.
///
/// A line without tokens is [`Statement::Empty`]. Anything else is an
/// error, which the driver skips over unless it runs in strict mode.
///
/// # Parameters
/// - `tokens`: Token iterator over the whole line.
/// - `line`: The line being parsed.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    let Some(first) = tokens.peek().map(|spanned| spanned.token.clone()) else {
        return Ok(Statement::Empty);
    };

    match first {
        Token::Begin => {
            tokens.next();
            expect_end(tokens, line)?;
            Ok(Statement::Begin)
        },
        Token::End => {
            tokens.next();
            expect_end(tokens, line)?;
            Ok(Statement::End)
        },
        Token::Int => {
            tokens.next();
            parse_variable_declaration(tokens, line)
        },
        Token::Function => {
            tokens.next();
            parse_function_declaration(tokens, line)
        },
        Token::LParen => Ok(Statement::Expression { tokens: parse_expression(tokens, line)? }),
        _ => Err(ParseError::UnexpectedToken { token: format!("'{first}' cannot start a statement"),
                                               line }),
    }
}

/// Parses the rest of `int <name> [=] [<digit>]`.
///
/// The `=` is optional, and so is the value, which defaults to `0`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    let name = single_letter(parse_identifier(tokens, "a variable name", line)?, line)?;

    if let Some(Spanned { token: Token::Equals,
                          .. }) = tokens.peek()
    {
        tokens.next();
        if tokens.peek().is_none() {
            return Err(ParseError::UnexpectedEndOfInput { expected: "a digit after '='",
                                                          line });
        }
    }

    let value = match tokens.next() {
        Some(Spanned { token: Token::Number(literal),
                       .. }) => single_digit(literal, line)?,
        Some(Spanned { token, .. }) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected a digit, found '{token}'"),
                                                     line });
        },
        None => 0,
    };

    expect_end(tokens, line)?;

    Ok(Statement::VariableDeclaration { name, value })
}

/// Parses the rest of `function <name> [<parameter>]`.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    let name = parse_identifier(tokens, "a function name", line)?.to_string();

    let parameter = if tokens.peek().is_some() {
        Some(single_letter(parse_identifier(tokens, "a parameter name", line)?, line)?)
    } else {
        None
    };

    expect_end(tokens, line)?;

    Ok(Statement::FunctionDeclaration { name, parameter })
}
