/// Core parsing entry points.
///
/// Defines the parser result type and chains tokenizing, postfix conversion
/// and tree building into a single call.
pub mod core;

/// Infix to postfix conversion.
///
/// Reorders infix tokens into postfix order by operator-precedence shunting,
/// rejecting unknown tokens and unbalanced parentheses.
pub mod postfix;

/// Expression tree construction.
///
/// Builds an [`ExprTree`](crate::ast::ExprTree) bottom-up from postfix tokens.
pub mod tree;
