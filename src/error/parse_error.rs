use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that make an expression malformed.
///
/// Every variant carries the zero-based index of the offending token in the
/// token sequence produced by
/// [`tokenise`](crate::interpreter::lexer::tokenise).
pub enum ParseError {
    /// A token that is neither an integer, an operator nor a parenthesis, or
    /// one that appears where it cannot stand.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Index of the token.
        position: usize,
    },
    /// A closing parenthesis `)` without a matching `(`.
    UnmatchedParen {
        /// Index of the `)` token.
        position: usize,
    },
    /// An opening parenthesis `(` that is never closed.
    UnclosedParen {
        /// Index of the `(` token.
        position: usize,
    },
    /// An operator found fewer than two operands to combine.
    MissingOperand {
        /// The operator lacking an operand.
        operator: Operator,
        /// Index of the operator token.
        position: usize,
    },
    /// The expression did not reduce to a single root.
    MalformedExpression {
        /// Details about what was left over.
        details:  String,
        /// Index of the first token that could not be attached to the root.
        position: usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Index of the literal token.
        position: usize,
    },
}

impl ParseError {
    /// Returns the index of the token the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnmatchedParen { position }
            | Self::UnclosedParen { position }
            | Self::MissingOperand { position, .. }
            | Self::MalformedExpression { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at token {position}: Unexpected token: '{token}'.")
            },
            Self::UnmatchedParen { position } => write!(f,
                                                        "Error at token {position}: Closing parenthesis ')' has no matching '('."),
            Self::UnclosedParen { position } => write!(f,
                                                       "Error at token {position}: Opening parenthesis '(' is never closed."),
            Self::MissingOperand { operator, position } => write!(f,
                                                                  "Error at token {position}: Operator '{operator}' is missing an operand."),
            Self::MalformedExpression { details, position } => {
                write!(f, "Error at token {position}: Malformed expression: {details}.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at token {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
