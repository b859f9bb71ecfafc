use std::fmt;

/// A binary arithmetic operator.
///
/// Unary minus has no operator of its own; it is represented as
/// subtraction from zero (see [`Expr::negate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use calctree::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.symbol(), '/');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Returns `true` for the additive operators `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree node representing an arithmetic expression.
///
/// Every operator node exclusively owns both of its children, so a tree is
/// always finite and acyclic and is dropped as a whole when the root goes out
/// of scope.
///
/// A long chain like `1 + 1 + ... + 1` produces a tree as deep as it is long,
/// so every walk over the tree (equality, display, drop, evaluation,
/// rendering) uses an explicit stack instead of native recursion.
#[derive(Debug)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal leaf.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::Number { value }
    }

    /// Creates an operator node owning both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Creates the tree for unary minus applied to `operand`.
    ///
    /// Negation is desugared to `0 - operand`.
    ///
    /// # Example
    /// ```
    /// use calctree::ast::{BinaryOperator, Expr};
    ///
    /// assert_eq!(Expr::negate(Expr::number(5)),
    ///            Expr::binary(BinaryOperator::Sub, Expr::number(0), Expr::number(5)));
    /// ```
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::binary(BinaryOperator::Sub, Self::number(0), operand)
    }

    /// Number of levels in the tree; a single literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Self::BinaryOp { left, right, .. } = node {
                pending.push((&**left, level + 1));
                pending.push((&**right, level + 1));
            }
        }
        deepest
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            if let Self::BinaryOp { left, right, .. } = node {
                pending.push(left);
                pending.push(right);
            }
        }
        count
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Number { value: a }, Self::Number { value: b }) => {
                    if a != b {
                        return false;
                    }
                },
                (Self::BinaryOp { op: op_a,
                                  left: left_a,
                                  right: right_a, },
                 Self::BinaryOp { op: op_b,
                                  left: left_b,
                                  right: right_b, }) => {
                    if op_a != op_b {
                        return false;
                    }
                    pending.push((&**left_a, &**left_b));
                    pending.push((&**right_a, &**right_b));
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Self::BinaryOp { left, right, .. } = self {
            pending.push(std::mem::replace(left.as_mut(), Self::number(0)));
            pending.push(std::mem::replace(right.as_mut(), Self::number(0)));
        }
        // Detach children before each node drops so no drop recurses more
        // than one level.
        while let Some(mut node) = pending.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut node {
                pending.push(std::mem::replace(left.as_mut(), Self::number(0)));
                pending.push(std::mem::replace(right.as_mut(), Self::number(0)));
            }
        }
    }
}

/// Renders the tree as a fully parenthesised prefix expression, for example
/// `(+ 1 (* 2 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Text(&'static str),
        }

        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Self::Number { value }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { op, left, right }) => {
                    write!(f, "({op} ")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(&**right));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Node(&**left));
                },
            }
        }
        Ok(())
    }
}
