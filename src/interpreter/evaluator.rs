/// Arithmetic on integer operands.
///
/// Applies the four operators with explicit division-by-zero and overflow
/// checks.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the entry point for expression evaluation
/// and the types shared by the conversion and evaluation passes.
pub mod core;

/// Infix-to-postfix conversion and postfix evaluation.
///
/// Resolves identifiers while converting, starts calls, substitutes returned
/// values, and evaluates the finished postfix form.
pub mod postfix;
