//! Unary operation evaluation

use crate::error::EvalError;
use crate::span::Span;

use super::check_finite;

/// Evaluate unary negation (`-x`).
pub(crate) fn eval_neg(operand: f64, span: Option<Span>) -> Result<f64, EvalError> {
    check_finite(-operand, span)
}
