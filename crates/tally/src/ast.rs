//! Expression tree

use std::fmt;

use crate::span::Span;
use crate::token::Operator;

/// A node of the expression tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Literal {
        /// Literal value
        value: f64,
        /// Source location
        span: Span,
    },

    /// `-operand`
    UnaryMinus {
        /// Negated subexpression
        operand: Box<Expr>,
        /// Location of the `-`
        span: Span,
    },

    /// `left op right`
    BinaryOp {
        /// Operator applied
        op: Operator,
        /// Left operand
        left: Box<Expr>,
        /// Right operand
        right: Box<Expr>,
        /// Location of the operator
        span: Span,
    },
}

impl Expr {
    /// Build a literal node.
    pub fn literal(value: f64, span: Span) -> Self {
        Expr::Literal { value, span }
    }

    /// Build a negation node.
    pub fn neg(operand: Expr, span: Span) -> Self {
        Expr::UnaryMinus {
            operand: Box::new(operand),
            span,
        }
    }

    /// Build a binary node.
    pub fn binary(op: Operator, left: Expr, right: Expr, span: Span) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Span of the token that produced this node.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. }
            | Expr::UnaryMinus { span, .. }
            | Expr::BinaryOp { span, .. } => *span,
        }
    }

    /// Height of the tree; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal { .. } => 1,
            Expr::UnaryMinus { operand, .. } => 1 + operand.depth(),
            Expr::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Fully parenthesized rendering, handy for checking grouping.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { value, .. } => write!(f, "{}", value),
            Expr::UnaryMinus { operand, .. } => write!(f, "(-{})", operand),
            Expr::BinaryOp {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
