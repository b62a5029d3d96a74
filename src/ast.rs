/// Represents one of the four arithmetic operators.
///
/// `Times` and `Divide` bind tighter than `Plus` and `Minus`; operators of equal
/// precedence associate to the left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Times,
    /// Integer division (`/`)
    Divide,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// ## Example
    /// ```
    /// use exprheap::ast::Operator;
    ///
    /// assert!(Operator::Times.precedence() > Operator::Minus.precedence());
    /// assert_eq!(Operator::Plus.precedence(), Operator::Minus.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Times | Self::Divide => 2,
            Self::Plus | Self::Minus => 1,
        }
    }

    /// Returns the single-character symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Times => '*',
            Self::Divide => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Handle to a node stored in an [`ExprTree`].
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena slot of the node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The payload of a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An integer literal.
    Leaf(i64),
    /// An operator applied to exactly two operands.
    Operator {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  NodeId,
        /// Right operand.
        right: NodeId,
    },
}

/// A single node of an expression tree.
///
/// Children are owned by the tree; `parent` is a plain handle used for upward
/// navigation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Leaf value or operator with its operands.
    pub kind:   NodeKind,
    /// The operator node this node is an operand of, if any.
    pub parent: Option<NodeId>,
}

impl TreeNode {
    /// Returns `true` for operator nodes.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self.kind, NodeKind::Operator { .. })
    }

    /// Returns the literal value of a leaf.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self.kind {
            NodeKind::Leaf(value) => Some(value),
            NodeKind::Operator { .. } => None,
        }
    }

    /// Returns the operator of an operator node.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self.kind {
            NodeKind::Operator { op, .. } => Some(op),
            NodeKind::Leaf(_) => None,
        }
    }
}

impl std::fmt::Display for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::Leaf(value) => write!(f, "{value}"),
            NodeKind::Operator { op, .. } => write!(f, "{op}"),
        }
    }
}

/// A binary arithmetic expression tree.
///
/// Nodes are kept in an arena and addressed by [`NodeId`]. The tree caches the
/// number of nodes reachable from its root; that count is recomputed every time
/// a root is installed.
///
/// Trees are usually obtained by parsing:
/// ```
/// use exprheap::ast::ExprTree;
///
/// let tree: ExprTree = "( 3 + 4 ) * 2".parse().unwrap();
/// assert_eq!(tree.size(), 5);
/// assert_eq!(tree.evaluate().unwrap(), 14);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExprTree {
    nodes: Vec<TreeNode>,
    root:  Option<NodeId>,
    size:  usize,
}

impl ExprTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new(),
               root:  None,
               size:  0, }
    }

    /// Creates a tree holding a copy of the subtree rooted at `node` in
    /// `self`.
    ///
    /// The copy is compact: it only contains nodes reachable from `node`, and
    /// its root has no parent.
    ///
    /// ## Example
    /// ```
    /// use exprheap::ast::ExprTree;
    ///
    /// let tree: ExprTree = "1 + 2 * 3".parse().unwrap();
    /// let root = tree.root().unwrap();
    /// let right = tree.right_child(root).unwrap();
    ///
    /// let product = tree.subtree(right);
    /// assert_eq!(product.size(), 3);
    /// assert_eq!(product.evaluate().unwrap(), 6);
    /// ```
    ///
    /// # Panics
    /// Panics if `node` does not belong to this tree.
    #[must_use]
    pub fn subtree(&self, node: NodeId) -> Self {
        let mut tree = Self::new();
        let root = tree.graft(self, node);
        tree.set_root(root);
        tree
    }

    /// Returns the number of nodes reachable from the root.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root handle, or `None` for the empty tree.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the node behind a handle.
    ///
    /// # Panics
    /// Panics if the handle does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Returns the left operand of an operator node.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn left_child(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id).kind {
            NodeKind::Operator { left, .. } => Some(left),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Returns the right operand of an operator node.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn right_child(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id).kind {
            NodeKind::Operator { right, .. } => Some(right),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Returns the operator node `id` is an operand of.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub(crate) fn push_leaf(&mut self, value: i64) -> NodeId {
        self.push(NodeKind::Leaf(value))
    }

    /// Allocates an operator node and links both operands back to it.
    pub(crate) fn push_operator(&mut self, op: Operator, left: NodeId, right: NodeId) -> NodeId {
        let id = self.push(NodeKind::Operator { op, left, right });
        self.nodes[left.0].parent = Some(id);
        self.nodes[right.0].parent = Some(id);
        id
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
        self.size = self.preorder(root).len();
    }

    /// Lists the subtree rooted at `node` with every operator before its
    /// operands, left operand first.
    ///
    /// Uses an explicit stack; tree depth is not bounded by the call stack.
    pub(crate) fn preorder(&self, node: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut pending = vec![node];

        while let Some(id) = pending.pop() {
            order.push(id);
            if let NodeKind::Operator { left, right, .. } = self.node(id).kind {
                pending.push(right);
                pending.push(left);
            }
        }
        order
    }

    /// Lists the subtree rooted at `node` with every operator after its
    /// operands, left operand first.
    pub(crate) fn postorder(&self, node: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut pending = vec![node];

        // root, right, left; reversed at the end
        while let Some(id) = pending.pop() {
            order.push(id);
            if let NodeKind::Operator { left, right, .. } = self.node(id).kind {
                pending.push(left);
                pending.push(right);
            }
        }
        order.reverse();
        order
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode { kind, parent: None });
        id
    }

    /// Copies the subtree rooted at `node` in `source` into `self`.
    fn graft(&mut self, source: &Self, node: NodeId) -> NodeId {
        let mut copied = Vec::new();

        for id in source.postorder(node) {
            let copy = match source.node(id).kind {
                NodeKind::Leaf(value) => self.push_leaf(value),
                NodeKind::Operator { op, .. } => {
                    let (Some(right), Some(left)) = (copied.pop(), copied.pop()) else {
                        unreachable!("postorder lists both operands before their operator")
                    };
                    self.push_operator(op, left, right)
                },
            };
            copied.push(copy);
        }

        let &[root] = copied.as_slice() else {
            unreachable!("a subtree reduces to exactly one root")
        };
        root
    }

    fn same_shape(&self, a: NodeId, other: &Self, b: NodeId) -> bool {
        let mut pending = vec![(a, b)];

        while let Some((a, b)) = pending.pop() {
            match (&self.node(a).kind, &other.node(b).kind) {
                (NodeKind::Leaf(x), NodeKind::Leaf(y)) if x == y => {},
                (NodeKind::Operator { op: op_a,
                                      left: left_a,
                                      right: right_a, },
                 NodeKind::Operator { op: op_b,
                                      left: left_b,
                                      right: right_b, }) if op_a == op_b => {
                    pending.push((*left_a, *left_b));
                    pending.push((*right_a, *right_b));
                },
                _ => return false,
            }
        }
        true
    }
}

/// Trees are equal when their reachable structure is equal, regardless of how
/// their arenas are laid out.
impl PartialEq for ExprTree {
    fn eq(&self, other: &Self) -> bool {
        match (self.root, other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => self.same_shape(a, other, b),
            _ => false,
        }
    }
}

impl Eq for ExprTree {}

impl std::fmt::Display for ExprTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.infix_order())
    }
}
