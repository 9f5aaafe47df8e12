//! Single entry point: tokenize → parse → evaluate

use crate::context::EvalContext;
use crate::error::{CalcError, EvaluationResult};
use crate::eval::Evaluate;
use crate::parser::parse_with;
use crate::token::tokenize;

/// Compute the value of an arithmetic expression with default limits.
///
/// ```
/// assert_eq!(tally::compute("3 + 4 * 2").unwrap(), 11.0);
/// assert_eq!(
///     tally::compute("8 / 0").unwrap_err().kind(),
///     tally::ErrorKind::DivisionByZero,
/// );
/// ```
pub fn compute(input: &str) -> EvaluationResult {
    compute_with(input, &EvalContext::default())
}

/// Compute the value of an arithmetic expression under `ctx`'s limits.
///
/// Returns the first failure encountered, whether lexical, syntactic or
/// arithmetic. Pure: the same input always yields the same result.
pub fn compute_with(input: &str, ctx: &EvalContext) -> EvaluationResult {
    let result = run(input, ctx);
    if let Err(err) = &result {
        log::debug!("compute({:?}) failed: {} ({})", input, err, err.kind());
    }
    result
}

fn run(input: &str, ctx: &EvalContext) -> EvaluationResult {
    if input.len() > ctx.max_input_len {
        return Err(CalcError::InputTooLong {
            len: input.len(),
            max: ctx.max_input_len,
        });
    }

    let tokens = tokenize(input)?;
    log::trace!("tokenized {} tokens", tokens.len());

    let expr = parse_with(&tokens, ctx)?;
    log::trace!("parsed {}", expr);

    let value = expr.eval()?;
    log::trace!("evaluated to {}", value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_compute_ok() {
        assert_eq!(compute("3 + 4 * 2").unwrap(), 11.0);
    }

    #[test]
    fn test_first_failure_wins() {
        // Lexing fails before the division is ever seen
        assert_eq!(compute("1/0 + x").unwrap_err().kind(), ErrorKind::InvalidCharacter);
        // Parsing fails before evaluation
        assert_eq!(compute("1/0 +").unwrap_err().kind(), ErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_input_too_long() {
        let ctx = EvalContext::with_max_input_len(5);
        assert_eq!(compute_with("1+2+3", &ctx).unwrap(), 6.0);
        assert_eq!(
            compute_with("1 + 2 + 3", &ctx),
            Err(CalcError::InputTooLong { len: 9, max: 5 })
        );
    }
}
