use crate::{
    ast::ExprTree,
    error::ParseError,
    interpreter::{
        lexer::{Token, token_to_operator},
        parser::core::ParseResult,
    },
};

/// Builds an expression tree from postfix tokens.
///
/// Literals push a new leaf onto a stack of partial subtrees. An operator pops
/// its right operand, then its left operand, joins them under a new operator
/// node and pushes the result. A well formed input leaves exactly one subtree,
/// which becomes the root.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order paired with their source index, as
///   produced by [`to_postfix`](crate::interpreter::parser::postfix::to_postfix).
///
/// # Errors
/// - `MissingOperand` if an operator finds fewer than two subtrees.
/// - `MalformedExpression` if the input is empty or leaves more than one
///   subtree behind.
/// - `UnexpectedToken` if a parenthesis appears in the input.
///
/// # Example
/// ```
/// use exprheap::{
///     error::ParseError,
///     interpreter::{
///         lexer::{Token, tokenise},
///         parser::{postfix::to_postfix, tree::build_tree},
///     },
/// };
///
/// let tree = build_tree(&to_postfix(&tokenise("5 - 2")).unwrap()).unwrap();
/// assert_eq!(tree.size(), 3);
///
/// let dangling = [(Token::Integer(5), 0), (Token::Integer(2), 1)];
/// let err = build_tree(&dangling).unwrap_err();
/// assert!(matches!(err, ParseError::MalformedExpression { position: 1, .. }));
/// ```
pub fn build_tree(postfix: &[(Token, usize)]) -> ParseResult<ExprTree> {
    let mut tree = ExprTree::new();
    let mut stack = Vec::new();

    for &(token, position) in postfix {
        if let Token::Integer(value) = token {
            stack.push((tree.push_leaf(value), position));
            continue;
        }

        let Some(op) = token_to_operator(&token) else {
            return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                     position });
        };

        let (Some((right, _)), Some((left, left_position))) = (stack.pop(), stack.pop()) else {
            return Err(ParseError::MissingOperand { operator: op,
                                                    position });
        };

        stack.push((tree.push_operator(op, left, right), left_position.min(position)));
    }

    match stack.as_slice() {
        [(root, _)] => {
            tree.set_root(*root);
            log::debug!("built tree with {} nodes", tree.size());
            Ok(tree)
        },
        [] => Err(ParseError::MalformedExpression { details: "expression is empty".to_string(),
                                                    position: 0, }),
        [_, (_, position), ..] => {
            Err(ParseError::MalformedExpression { details: format!("{} operands are not joined by an operator",
                                                                   stack.len()),
                                                  position: *position, })
        },
    }
}
