/// Core parsing entry point.
///
/// Tokenizes a line and hands it to statement parsing.
pub mod core;

/// Expression symbol parsing.
///
/// Converts the tokens of an expression line into symbols, enforcing single
/// digits and single letters.
pub mod expression;

/// Statement parsing.
///
/// Classifies a line as a declaration, a block marker or an expression.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers shared by statement and expression parsing.
pub mod utils;
