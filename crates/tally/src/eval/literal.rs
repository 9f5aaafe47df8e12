//! Literal evaluation

use crate::error::EvalError;
use crate::span::Span;

use super::check_finite;

/// Evaluate a literal. Literals too large for `f64` arrive as infinity.
pub fn eval_literal(value: f64, span: Option<Span>) -> Result<f64, EvalError> {
    check_finite(value, span)
}
