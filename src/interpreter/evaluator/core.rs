use crate::{
    ast::{ExprTree, NodeId, NodeKind},
    error::RuntimeError,
    interpreter::evaluator::scalar::eval_scalar_op,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl ExprTree {
    /// Computes the value of the whole tree.
    ///
    /// The empty tree evaluates to `0`.
    ///
    /// # Errors
    /// - `DivisionByZero` if any division has a zero divisor.
    /// - `Overflow` if any intermediate result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use exprheap::{ast::ExprTree, error::RuntimeError};
    ///
    /// let tree: ExprTree = "3 + 4 * 2".parse().unwrap();
    /// assert_eq!(tree.evaluate().unwrap(), 11);
    ///
    /// let tree: ExprTree = "4 / 0".parse().unwrap();
    /// assert!(matches!(tree.evaluate(), Err(RuntimeError::DivisionByZero { dividend: 4 })));
    ///
    /// assert_eq!(ExprTree::new().evaluate().unwrap(), 0);
    /// ```
    pub fn evaluate(&self) -> EvalResult<i64> {
        self.evaluate_node(self.root())
    }

    /// Computes the value of the subtree rooted at `node`.
    ///
    /// A leaf yields its literal. An operator node evaluates its left operand,
    /// then its right operand, and combines them. `None` yields `0`.
    ///
    /// Operands are combined in postfix order on an explicit value stack, so
    /// the depth of the tree is not limited by the call stack.
    ///
    /// # Errors
    /// As for [`ExprTree::evaluate`]. The first failing operation in
    /// left-to-right order is reported.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this tree.
    pub fn evaluate_node(&self, node: Option<NodeId>) -> EvalResult<i64> {
        let Some(root) = node else {
            return Ok(0);
        };

        let mut values = Vec::new();
        for id in self.postorder(root) {
            let value = match self.node(id).kind {
                NodeKind::Leaf(value) => value,
                NodeKind::Operator { op, .. } => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("postorder lists both operands before their operator")
                    };
                    eval_scalar_op(op, left, right)?
                },
            };
            values.push(value);
        }

        let &[value] = values.as_slice() else {
            unreachable!("a subtree reduces to exactly one value")
        };
        Ok(value)
    }
}
