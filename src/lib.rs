//! # exprheap
//!
//! exprheap builds binary expression trees from integer arithmetic written in
//! infix notation, evaluates them and prints them back in prefix, infix or
//! postfix order. It also provides a generic priority queue backed by a binary
//! min-heap.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::ast::ExprTree;

/// Defines the structure of parsed expressions.
///
/// This module declares the [`ExprTree`] type, its nodes and the arithmetic
/// operators. Trees are built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Stores operator and literal nodes in an arena addressed by handles.
/// - Keeps parent links for upward navigation without a second owner.
/// - Caches the number of nodes reachable from the root.
pub mod ast;
/// General purpose containers.
///
/// Holds the generic [`PriorityQueue`](crate::collections::priority_queue::PriorityQueue),
/// which is independent of the expression pipeline.
pub mod collections;
/// Provides unified error types for parsing, evaluation and queue operations.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, and while operating on the priority
/// queue. Every error carries enough context to point at its cause.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, queue).
/// - Attaches token positions or operands for context.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together tokenizing, postfix conversion, tree building,
/// evaluation and printing.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for literal handling.
///
/// This module provides helpers that recognise integer literals and convert
/// them to `i64` without silent truncation.
pub mod util;

/// Parses and evaluates a single infix expression.
///
/// # Errors
/// Returns an error if the expression is malformed or if evaluation fails.
///
/// # Examples
/// ```
/// use exprheap::evaluate_expression;
///
/// assert_eq!(evaluate_expression("3 + 4 * 2").unwrap(), 11);
/// assert_eq!(evaluate_expression("(3 + 4) * 2").unwrap(), 14);
///
/// // Division by zero is reported, never computed.
/// assert!(evaluate_expression("4 / 0").is_err());
/// // So is a dangling operator.
/// assert!(evaluate_expression("4 +").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let tree = source.parse::<ExprTree>()?;
    let value = tree.evaluate()?;

    log::debug!("{source:?} evaluated to {value}");
    Ok(value)
}
