use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a tree.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The left operand of the division.
        dividend: i64,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// Left operand.
        left:     i64,
        /// The operator that overflowed.
        operator: Operator,
        /// Right operand.
        right:    i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Runtime error: Division by zero in '{dividend} / 0'.")
            },
            Self::Overflow { left, operator, right } => write!(f,
                                                               "Runtime error: Integer overflow while trying to compute '{left} {operator} {right}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
