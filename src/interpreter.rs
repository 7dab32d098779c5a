/// The cursor module reads the program line by line.
///
/// The cursor hands out lines in order and can be moved back to an earlier
/// line or ahead to a later one. Calls and returns are carried out by moving
/// it.
pub mod cursor;
/// The driver module executes a program.
///
/// The driver reads each line, parses it, updates the symbol stack or hands
/// the line to the evaluator, and moves the cursor for calls and returns. It
/// is the entry point for running a whole program.
///
/// # Responsibilities
/// - Gates execution on having reached `function main`.
/// - Implements the call/return protocol.
/// - Skips malformed lines, or reports them in strict mode.
pub mod driver;
/// The evaluator module computes the value of expression lines.
///
/// The evaluator converts an infix expression to postfix form, resolving
/// identifiers against the symbol stack as it goes, and then evaluates the
/// postfix form. It also owns the session [`Context`](evaluator::core::Context).
///
/// # Responsibilities
/// - Infix-to-postfix conversion with operator priorities.
/// - Starting calls and substituting returned values.
/// - Reports runtime errors such as division by zero or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source lines.
///
/// The lexer reads the raw text of one line and produces a stream of tokens:
/// keywords, identifiers, numbers, operators and parentheses, each with the
/// column it starts at.
pub mod lexer;
/// The parser module classifies source lines.
///
/// The parser turns the tokens of a line into a single [`Statement`](crate::ast::Statement),
/// checking that names are one letter and literals one digit.
pub mod parser;
/// The stack module holds the single LIFO of bindings.
///
/// Variables, function declarations, call frames and block markers all live
/// on one stack, which is scope, function table and call history at once.
pub mod stack;
