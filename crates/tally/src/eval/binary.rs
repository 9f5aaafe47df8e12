//! Binary operation evaluation

use crate::error::EvalError;
use crate::span::Span;
use crate::token::Operator;

use super::check_finite;

/// Apply `op` to two already-evaluated operands.
pub(crate) fn eval_binary(
    op: Operator,
    left: f64,
    right: f64,
    span: Option<Span>,
) -> Result<f64, EvalError> {
    match op {
        Operator::Plus => eval_add(left, right, span),
        Operator::Minus => eval_sub(left, right, span),
        Operator::Star => eval_mul(left, right, span),
        Operator::Slash => eval_div(left, right, span),
    }
}

fn eval_add(left: f64, right: f64, span: Option<Span>) -> Result<f64, EvalError> {
    check_finite(left + right, span)
}

fn eval_sub(left: f64, right: f64, span: Option<Span>) -> Result<f64, EvalError> {
    check_finite(left - right, span)
}

fn eval_mul(left: f64, right: f64, span: Option<Span>) -> Result<f64, EvalError> {
    check_finite(left * right, span)
}

fn eval_div(left: f64, right: f64, span: Option<Span>) -> Result<f64, EvalError> {
    // -0.0 == 0.0
    if right == 0.0 {
        return Err(EvalError::DivisionByZero { span });
    }
    check_finite(left / right, span)
}
