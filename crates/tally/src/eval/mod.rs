//! Expression evaluation

pub mod binary;
pub mod literal;
pub mod unary;

use crate::ast::Expr;
use crate::error::EvalError;

/// Trait for evaluating tree nodes to numbers.
///
/// Evaluation is a post-order walk: children first, then the node itself.
pub trait Evaluate {
    /// Evaluate this node.
    fn eval(&self) -> Result<f64, EvalError>;
}

impl Evaluate for Expr {
    fn eval(&self) -> Result<f64, EvalError> {
        match self {
            Expr::Literal { value, span } => literal::eval_literal(*value, Some(*span)),
            Expr::UnaryMinus { operand, span } => {
                let value = operand.eval()?;
                unary::eval_neg(value, Some(*span))
            }
            Expr::BinaryOp {
                op,
                left,
                right,
                span,
            } => {
                let left = left.eval()?;
                let right = right.eval()?;
                binary::eval_binary(*op, left, right, Some(*span))
            }
        }
    }
}

/// Evaluate an expression tree (convenience wrapper).
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    expr.eval()
}

/// Reject infinities and NaN produced at `span`.
pub(crate) fn check_finite(
    value: f64,
    span: Option<crate::span::Span>,
) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteResult { span })
    }
}
