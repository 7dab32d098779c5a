use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{lexer::tokenize_line, parser::statement::parse_statement},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one source line into a statement.
///
/// This is the entry point for parsing. The line is tokenized and then
/// classified by its first token.
///
/// # Parameters
/// - `source`: The text of the line.
/// - `line`: The 1-based line number, used for error reporting.
///
/// # Returns
/// The parsed statement. A blank line is [`Statement::Empty`].
///
/// # Example
/// ```
/// use spl::{ast::Statement, interpreter::parser::core::parse_line};
///
/// assert_eq!(parse_line("  BEGIN", 4).unwrap(), Statement::Begin);
/// assert_eq!(parse_line("int a = 3", 5).unwrap(),
///            Statement::VariableDeclaration { name: 'a', value: 3 });
/// assert!(parse_line("int a = 42", 6).is_err());
/// ```
pub fn parse_line(source: &str, line: usize) -> ParseResult<Statement> {
    let tokens = tokenize_line(source, line)?;
    parse_statement(&mut tokens.iter().peekable(), line)
}
