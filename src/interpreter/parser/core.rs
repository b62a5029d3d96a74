use std::str::FromStr;

use crate::{
    ast::ExprTree,
    error::ParseError,
    interpreter::{
        lexer::tokenise,
        parser::{postfix::to_postfix, tree::build_tree},
    },
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a `ParseError`
/// describing why the expression is malformed.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression into a tree.
///
/// This is the entry point for expression parsing: the source is tokenised,
/// converted to postfix order and assembled into a tree.
///
/// # Parameters
/// - `source`: The infix expression, e.g. `"( 3 + 4 ) * 2"`.
///
/// # Returns
/// The tree representing `source`.
///
/// # Errors
/// Any [`ParseError`] raised by postfix conversion or tree building.
pub fn parse_expression(source: &str) -> ParseResult<ExprTree> {
    ExprTree::build(&tokenise(source))
}

impl ExprTree {
    /// Builds a tree from infix string tokens as produced by
    /// [`tokenise`].
    ///
    /// # Errors
    /// Any [`ParseError`] raised by postfix conversion or tree building.
    ///
    /// # Example
    /// ```
    /// use exprheap::{ast::ExprTree, interpreter::lexer::tokenise};
    ///
    /// let tree = ExprTree::build(&tokenise("8 / 2 / 2")).unwrap();
    /// assert_eq!(tree.evaluate().unwrap(), 2);
    /// ```
    pub fn build(tokens: &[String]) -> ParseResult<Self> {
        build_tree(&to_postfix(tokens)?)
    }
}

impl FromStr for ExprTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression(s)
    }
}
