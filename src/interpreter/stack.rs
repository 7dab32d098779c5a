use crate::{config::DEFAULT_MAX_BINDINGS, error::RuntimeError};

/// One entry of the symbol stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// A variable or a function parameter.
    Variable {
        /// Name of the variable.
        name:  char,
        /// Its value.
        value: i64,
    },
    /// A function declaration and the line it was declared on.
    FunctionDecl {
        /// First letter of the function name.
        name:      char,
        /// Line of the `function` statement.
        decl_line: usize,
    },
    /// An in-progress call and the line to go back to when it returns.
    CallFrame {
        /// Line of the expression that made the call.
        call_line: usize,
    },
    /// Marker pushed by `begin`.
    BlockBegin,
    /// Marker pushed by `end`.
    BlockEnd,
}

/// Result of resolving a name against the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The newest binding for the name is a variable with this value.
    Variable(i64),
    /// The newest binding for the name is a function declared on `decl_line`.
    Function {
        /// Line of the `function` statement.
        decl_line: usize,
    },
    /// Nothing is bound to the name.
    NotFound,
}

/// The single LIFO that serves as variable scope, function table and call
/// history at the same time.
///
/// Entries are only ever added or removed at the top. Name lookup walks from
/// the newest entry to the oldest, so an inner binding shadows an outer one
/// and a parameter, pushed right after its function's declaration, shadows a
/// function of the same letter.
///
/// # Example
/// ```
/// use spl::interpreter::stack::{Binding, Lookup, SymbolStack};
///
/// let mut stack = SymbolStack::default();
/// stack.push(Binding::FunctionDecl { name: 'f', decl_line: 1 }, 1).unwrap();
/// stack.push(Binding::CallFrame { call_line: 9 }, 9).unwrap();
/// stack.push(Binding::Variable { name: 'x', value: 5 }, 1).unwrap();
///
/// assert_eq!(stack.lookup('x'), Lookup::Variable(5));
/// assert_eq!(stack.lookup('f'), Lookup::Function { decl_line: 1 });
/// assert_eq!(stack.unwind_to_call_frame(), Some(9));
/// assert_eq!(stack.lookup('x'), Lookup::NotFound);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolStack {
    bindings: Vec<Binding>,
    limit:    usize,
}

impl Default for SymbolStack {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_BINDINGS)
    }
}

impl SymbolStack {
    /// Creates an empty stack that refuses to hold more than `limit` entries.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { bindings: Vec::new(),
               limit }
    }

    /// Pushes a binding on top of the stack.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ResourceExhausted`] when the stack is already
    /// at its limit. `line` is only used for that report.
    pub fn push(&mut self, binding: Binding, line: usize) -> Result<(), RuntimeError> {
        if self.bindings.len() >= self.limit {
            return Err(RuntimeError::ResourceExhausted { limit: self.limit,
                                                         line });
        }
        self.bindings.push(binding);
        Ok(())
    }

    /// Removes and returns the top binding, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<Binding> {
        self.bindings.pop()
    }

    /// Resolves `name`, newest binding first.
    ///
    /// Only variables and function declarations carry names; markers and call
    /// frames are passed over.
    #[must_use]
    pub fn lookup(&self, name: char) -> Lookup {
        self.iter()
            .find_map(|binding| match *binding {
                Binding::Variable { name: n, value } if n == name => Some(Lookup::Variable(value)),
                Binding::FunctionDecl { name: n, decl_line } if n == name => {
                    Some(Lookup::Function { decl_line })
                },
                _ => None,
            })
            .unwrap_or(Lookup::NotFound)
    }

    /// Returns the call line of the most recent call frame, if any.
    #[must_use]
    pub fn nearest_call_frame(&self) -> Option<usize> {
        self.iter().find_map(|binding| match *binding {
                       Binding::CallFrame { call_line } => Some(call_line),
                       _ => None,
                   })
    }

    /// Pops every binding down to and including the most recent call frame.
    ///
    /// # Returns
    /// The call line recorded in the removed frame. If there is no call frame
    /// the stack is left untouched and `None` is returned.
    pub fn unwind_to_call_frame(&mut self) -> Option<usize> {
        self.nearest_call_frame()?;
        while let Some(binding) = self.pop() {
            if let Binding::CallFrame { call_line } = binding {
                return Some(call_line);
            }
        }
        None
    }

    /// Iterates over the bindings from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().rev()
    }

    /// Number of bindings currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if the stack holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Binding, Lookup, SymbolStack};
    use crate::error::RuntimeError;

    fn stack_of(bindings: &[Binding]) -> SymbolStack {
        let mut stack = SymbolStack::default();
        for binding in bindings {
            stack.push(*binding, 1).unwrap();
        }
        stack
    }

    #[test]
    fn newest_binding_shadows_older_ones() {
        let stack = stack_of(&[Binding::Variable { name: 'a', value: 1 },
                               Binding::Variable { name: 'a', value: 2 }]);

        assert_eq!(stack.lookup('a'), Lookup::Variable(2));
    }

    #[test]
    fn parameter_shadows_function_of_the_same_letter() {
        let stack = stack_of(&[Binding::FunctionDecl { name: 'x', decl_line: 3 },
                               Binding::Variable { name: 'x', value: 4 }]);

        assert_eq!(stack.lookup('x'), Lookup::Variable(4));
    }

    #[test]
    fn markers_never_match_a_name() {
        let stack = stack_of(&[Binding::BlockBegin,
                               Binding::CallFrame { call_line: 2 },
                               Binding::BlockEnd]);

        assert_eq!(stack.lookup(' '), Lookup::NotFound);
        assert_eq!(stack.lookup('b'), Lookup::NotFound);
    }

    #[test]
    fn pop_on_empty_stack_is_a_no_op() {
        let mut stack = SymbolStack::default();

        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn nearest_call_frame_is_the_newest_one() {
        let stack = stack_of(&[Binding::CallFrame { call_line: 4 },
                               Binding::Variable { name: 'x', value: 1 },
                               Binding::CallFrame { call_line: 8 },
                               Binding::BlockBegin]);

        assert_eq!(stack.nearest_call_frame(), Some(8));
    }

    #[test]
    fn unwinding_removes_the_frame_and_everything_above_it() {
        let mut stack = stack_of(&[Binding::Variable { name: 'a', value: 3 },
                                   Binding::CallFrame { call_line: 6 },
                                   Binding::FunctionDecl { name: 'f', decl_line: 1 },
                                   Binding::Variable { name: 'x', value: 3 },
                                   Binding::BlockBegin,
                                   Binding::BlockEnd]);

        assert_eq!(stack.unwind_to_call_frame(), Some(6));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.lookup('a'), Lookup::Variable(3));
        assert_eq!(stack.nearest_call_frame(), None);
    }

    #[test]
    fn unwinding_without_a_frame_keeps_the_stack() {
        let mut stack = stack_of(&[Binding::Variable { name: 'a', value: 3 },
                                   Binding::BlockEnd]);

        assert_eq!(stack.unwind_to_call_frame(), None);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn push_beyond_the_limit_is_an_error() {
        let mut stack = SymbolStack::with_limit(1);
        stack.push(Binding::BlockBegin, 1).unwrap();

        assert_eq!(stack.push(Binding::BlockEnd, 7),
                   Err(RuntimeError::ResourceExhausted { limit: 1, line: 7 }));
    }
}
