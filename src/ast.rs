/// A binary arithmetic operator.
///
/// SPL only knows the four basic operators. Multiplication and division bind
/// tighter than addition and subtraction; operators of equal priority
/// associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the binding priority used during infix-to-postfix conversion.
    ///
    /// # Example
    /// ```
    /// use spl::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.priority() > BinaryOperator::Add.priority());
    /// assert_eq!(BinaryOperator::Sub.priority(), BinaryOperator::Add.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// One symbol of an expression line.
///
/// Expressions are not parsed into a tree. The evaluator walks the symbols
/// left to right and builds postfix form on the fly, because resolving an
/// identifier may abandon the walk halfway through to perform a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A single-digit literal.
    Digit(i64),
    /// A single-character identifier: a variable, a parameter or a function.
    Identifier(char),
    /// An arithmetic operator.
    Operator(BinaryOperator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// An expression symbol and the column it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprToken {
    /// The symbol.
    pub symbol: Symbol,
    /// Byte offset of the symbol within its line.
    pub column: usize,
}

/// A classified source line.
///
/// Every SPL line holds at most one statement, so the driver parses each line
/// into exactly one `Statement` as it reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `int <name> [=] <digit>`
    VariableDeclaration {
        /// Name of the variable.
        name:  char,
        /// Initial value, `0` when omitted.
        value: i64,
    },
    /// `function <name> [<parameter>]`
    FunctionDeclaration {
        /// The full name as written. Only `main` is special; every other
        /// function is bound by its first letter.
        name:      String,
        /// The optional single-character parameter.
        parameter: Option<char>,
    },
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `( ... )`
    Expression {
        /// The symbols of the line in source order.
        tokens: Vec<ExprToken>,
    },
    /// A line with nothing on it.
    Empty,
}

impl Statement {
    /// Returns `true` for the declaration of the entry point, `function main`.
    #[must_use]
    pub fn is_entry_point(&self) -> bool {
        matches!(self, Self::FunctionDeclaration { name, .. } if name == "main")
    }
}
