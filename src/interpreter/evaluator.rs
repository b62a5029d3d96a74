/// Scalar arithmetic.
///
/// Applies a single operator to two integers with overflow and division by
/// zero checks.
pub mod scalar;

/// Core evaluation logic.
///
/// Contains the evaluator result type and the recursive evaluation of a tree.
pub mod core;

/// Traversal printers.
///
/// Renders a tree in prefix, infix and postfix notation.
pub mod traversal;
