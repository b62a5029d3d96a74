use crate::ast::{ExprTree, NodeId, NodeKind, Operator};

/// Which side of its parent an operand sits on.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Pending work of the infix walk.
enum Step {
    Node(NodeId),
    Operator(Operator),
    Open,
    Close,
}

impl ExprTree {
    /// Renders the tree in prefix notation: each operator precedes its
    /// operands.
    ///
    /// # Example
    /// ```
    /// use exprheap::ast::ExprTree;
    ///
    /// let tree: ExprTree = "( 3 + 4 ) * 2".parse().unwrap();
    /// assert_eq!(tree.prefix_order(), "* + 3 4 2");
    /// ```
    #[must_use]
    pub fn prefix_order(&self) -> String {
        self.root().map(|root| self.prefix_order_from(root)).unwrap_or_default()
    }

    /// Renders the subtree rooted at `node` in prefix notation.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this tree.
    #[must_use]
    pub fn prefix_order_from(&self, node: NodeId) -> String {
        self.preorder(node)
            .into_iter()
            .map(|id| self.node(id).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders the tree in infix notation.
    ///
    /// Parentheses are added only where the tree's shape differs from what
    /// precedence and left-associativity would give, so parsing the output
    /// yields an equal tree.
    ///
    /// # Example
    /// ```
    /// use exprheap::ast::ExprTree;
    ///
    /// let tree: ExprTree = "((3 + 4) * 2)".parse().unwrap();
    /// assert_eq!(tree.infix_order(), "( 3 + 4 ) * 2");
    ///
    /// let tree: ExprTree = "8 - ( 2 - 1 )".parse().unwrap();
    /// assert_eq!(tree.infix_order(), "8 - ( 2 - 1 )");
    /// assert_eq!(tree.infix_order().parse::<ExprTree>().unwrap(), tree);
    /// ```
    #[must_use]
    pub fn infix_order(&self) -> String {
        self.root().map(|root| self.infix_order_from(root)).unwrap_or_default()
    }

    /// Renders the subtree rooted at `node` in infix notation.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this tree.
    #[must_use]
    pub fn infix_order_from(&self, node: NodeId) -> String {
        let mut parts = Vec::with_capacity(self.size());
        self.collect_infix(node, &mut parts);
        parts.join(" ")
    }

    /// Renders the tree in postfix notation: each operator follows its
    /// operands.
    ///
    /// # Example
    /// ```
    /// use exprheap::ast::ExprTree;
    ///
    /// let tree: ExprTree = "( 3 + 4 ) * 2".parse().unwrap();
    /// assert_eq!(tree.postfix_order(), "3 4 + 2 *");
    /// ```
    #[must_use]
    pub fn postfix_order(&self) -> String {
        self.root().map(|root| self.postfix_order_from(root)).unwrap_or_default()
    }

    /// Renders the subtree rooted at `node` in postfix notation.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this tree.
    #[must_use]
    pub fn postfix_order_from(&self, node: NodeId) -> String {
        self.postorder(node)
            .into_iter()
            .map(|id| self.node(id).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn collect_infix(&self, node: NodeId, parts: &mut Vec<String>) {
        let mut steps = vec![Step::Node(node)];

        while let Some(step) = steps.pop() {
            let id = match step {
                Step::Node(id) => id,
                Step::Operator(op) => {
                    parts.push(op.to_string());
                    continue;
                },
                Step::Open => {
                    parts.push("(".to_string());
                    continue;
                },
                Step::Close => {
                    parts.push(")".to_string());
                    continue;
                },
            };

            let NodeKind::Operator { op, left, right } = self.node(id).kind else {
                parts.push(self.node(id).to_string());
                continue;
            };

            // pushed in reverse, the left operand is emitted first
            self.push_operand(&mut steps, op.precedence(), right, Side::Right);
            steps.push(Step::Operator(op));
            self.push_operand(&mut steps, op.precedence(), left, Side::Left);
        }
    }

    /// Schedules an operand, wrapped in parentheses when it binds more loosely
    /// than its parent, or equally loosely on the right.
    fn push_operand(&self, steps: &mut Vec<Step>, parent: u8, node: NodeId, side: Side) {
        let wrap = self.node(node).operator().is_some_and(|op| {
                                                 op.precedence() < parent
                                                 || (side == Side::Right
                                                     && op.precedence() == parent)
                                             });

        if wrap {
            steps.push(Step::Close);
        }
        steps.push(Step::Node(node));
        if wrap {
            steps.push(Step::Open);
        }
    }
}
