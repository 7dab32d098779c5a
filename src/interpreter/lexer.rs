use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in one SPL source line.
///
/// SPL is line oriented, so the lexer never sees a newline: every line is
/// tokenized on its own. Keywords are case-insensitive.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `int`
    #[token("int", ignore(ascii_case))]
    Int,
    /// `function`
    #[token("function", ignore(ascii_case))]
    Function,
    /// `begin`
    #[token("begin", ignore(ascii_case))]
    Begin,
    /// `end`
    #[token("end", ignore(ascii_case))]
    End,
    /// Numeric literal tokens, such as `7`. Kept as text so the parser can
    /// reject anything longer than one digit.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `main`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,

    /// Spaces, tabs, feeds and stray carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// A token together with the column it starts at.
///
/// Columns are byte offsets into the line. The evaluator relies on them to
/// check that a call site is written without gaps, as in `f(5)`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// Byte offset of the first character of the token.
    pub column: usize,
}

/// Tokenizes a single source line.
///
/// # Parameters
/// - `source`: The text of the line, without its terminator.
/// - `line`: The 1-based line number, used for error reporting.
///
/// # Returns
/// Every token of the line in order, each with its starting column.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] on the first character sequence
/// that is not part of the language.
///
/// # Example
/// ```
/// use spl::interpreter::lexer::{Token, tokenize_line};
///
/// let tokens = tokenize_line("INT a = 3", 1).unwrap();
/// assert_eq!(tokens[0].token, Token::Int);
/// assert_eq!(tokens[1].token, Token::Identifier("a".to_string()));
/// assert_eq!(tokens[3].column, 8);
/// ```
pub fn tokenize_line(source: &str, line: usize) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push(Spanned { token,
                                  column: lexer.span().start });
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line });
        }
    }

    Ok(tokens)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Function => write!(f, "function"),
            Self::Begin => write!(f, "begin"),
            Self::End => write!(f, "end"),
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::Ignored => Ok(()),
        }
    }
}
