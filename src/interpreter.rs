/// The evaluator module computes results and renders trees.
///
/// The evaluator walks an [`ExprTree`](crate::ast::ExprTree) recursively to
/// compute its integer value, and renders it back to text in prefix, infix or
/// postfix order.
///
/// # Responsibilities
/// - Evaluates operator nodes with checked integer arithmetic.
/// - Reports runtime errors such as division by zero or overflow.
/// - Prints trees in all three traversal orders.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer splits raw text into string tokens (numbers, operators and
/// parentheses) and classifies each string into a typed [`Token`]. This is the
/// first stage of interpretation.
///
/// [`Token`]: crate::interpreter::lexer::Token
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser reorders tokens into postfix order by operator precedence and
/// assembles the postfix sequence into a tree, reporting malformed input with
/// the position of the offending token.
pub mod parser;
