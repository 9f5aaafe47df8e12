//! Error types for tally evaluation
//!
//! Each pipeline stage has its own error enum. [`CalcError`] unifies them
//! for callers of [`compute`](crate::compute()), and [`ErrorKind`] is the
//! flat taxonomy presented to users (HTTP bodies, CLI output).

use serde::Serialize;
use thiserror::Error;

use crate::span::Span;

/// Errors raised while splitting the input into tokens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character outside `0-9 . + - * / ( )` and whitespace
    #[error("invalid character `{ch}` at {span}")]
    InvalidCharacter {
        /// Offending character
        ch: char,
        /// Where it appeared
        span: Span,
    },

    /// Number literal with more than one decimal point, or with no digits
    #[error("malformed number `{text}` at {span}")]
    MalformedNumber {
        /// Raw text of the literal
        text: String,
        /// Where it appeared
        span: Span,
    },
}

impl LexError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::InvalidCharacter { span, .. } | LexError::MalformedNumber { span, .. } => {
                Some(*span)
            }
        }
    }
}

/// Errors raised while building the expression tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended where an operand was required
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// `)` with no matching `(`
    #[error("unmatched `)` at {span}")]
    UnmatchedCloseParen {
        /// Location of the `)`
        span: Span,
    },

    /// `(` never closed
    #[error("unclosed `(` opened at {span}")]
    UnclosedParen {
        /// Location of the `(`
        span: Span,
    },

    /// An operand was required but an operator or `)` was found
    #[error("expected a number, `-` or `(` but found `{found}` at {span}")]
    ExpectedPrimary {
        /// The token text that was found
        found: String,
        /// Where it appeared
        span: Span,
    },

    /// `()` with nothing inside
    #[error("empty parentheses at {span}")]
    EmptyParens {
        /// Span covering both parentheses
        span: Span,
    },

    /// Tokens left over after a complete expression
    #[error("unexpected `{found}` after complete expression at {span}")]
    TrailingTokens {
        /// The first leftover token
        found: String,
        /// Where it appeared
        span: Span,
    },

    /// Parentheses or unary minus nested beyond the configured limit
    #[error("expression nested deeper than {max} levels at {span}")]
    NestingTooDeep {
        /// Configured maximum depth
        max: usize,
        /// Token that crossed the limit
        span: Span,
    },
}

impl ParseError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedEnd => None,
            ParseError::UnmatchedCloseParen { span }
            | ParseError::UnclosedParen { span }
            | ParseError::ExpectedPrimary { span, .. }
            | ParseError::EmptyParens { span }
            | ParseError::TrailingTokens { span, .. }
            | ParseError::NestingTooDeep { span, .. } => Some(*span),
        }
    }
}

/// Errors raised while evaluating a well-formed expression tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Right operand of `/` evaluated to zero
    #[error("division by zero at {}", fmt_span(.span))]
    DivisionByZero {
        /// Location of the `/` operator
        span: Option<Span>,
    },

    /// A literal or intermediate value overflowed to infinity or NaN
    #[error("result is not a finite number at {}", fmt_span(.span))]
    NonFiniteResult {
        /// Node that produced the value
        span: Option<Span>,
    },
}

impl EvalError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::DivisionByZero { span } | EvalError::NonFiniteResult { span } => *span,
        }
    }
}

fn fmt_span(span: &Option<Span>) -> String {
    match span {
        Some(span) => span.to_string(),
        None => "<unknown>".to_string(),
    }
}

/// Any failure produced by [`compute`](crate::compute()).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Lexical failure
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Syntactic failure
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Evaluation-time failure
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Input rejected before tokenizing
    #[error("expression is {len} bytes long, limit is {max}")]
    InputTooLong {
        /// Input length in bytes
        len: usize,
        /// Configured maximum
        max: usize,
    },
}

impl CalcError {
    /// Flat classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lex(LexError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            CalcError::Lex(LexError::MalformedNumber { .. }) => ErrorKind::MalformedNumber,
            CalcError::Parse(err) => match err {
                ParseError::UnexpectedEnd => ErrorKind::UnexpectedEnd,
                ParseError::UnmatchedCloseParen { .. } | ParseError::UnclosedParen { .. } => {
                    ErrorKind::UnmatchedParenthesis
                }
                ParseError::ExpectedPrimary { .. }
                | ParseError::EmptyParens { .. }
                | ParseError::TrailingTokens { .. } => ErrorKind::UnexpectedToken,
                ParseError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            },
            CalcError::Eval(EvalError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            CalcError::Eval(EvalError::NonFiniteResult { .. }) => ErrorKind::NonFiniteResult,
            CalcError::InputTooLong { .. } => ErrorKind::InputTooLong,
        }
    }

    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            CalcError::Lex(err) => err.span(),
            CalcError::Parse(err) => err.span(),
            CalcError::Eval(err) => err.span(),
            CalcError::InputTooLong { .. } => None,
        }
    }
}

/// User-facing error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Character outside the arithmetic character set
    InvalidCharacter,
    /// Number literal with more than one decimal point
    MalformedNumber,
    /// Input ends mid-expression
    UnexpectedEnd,
    /// Extra `)` or unclosed `(`
    UnmatchedParenthesis,
    /// Token where the grammar forbids it
    UnexpectedToken,
    /// Division operator with a zero right operand
    DivisionByZero,
    /// Final or intermediate value is not finite
    NonFiniteResult,
    /// Input exceeds the configured length limit
    InputTooLong,
    /// Nesting exceeds the configured depth limit
    NestingTooDeep,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::InvalidCharacter,
        ErrorKind::MalformedNumber,
        ErrorKind::UnexpectedEnd,
        ErrorKind::UnmatchedParenthesis,
        ErrorKind::UnexpectedToken,
        ErrorKind::DivisionByZero,
        ErrorKind::NonFiniteResult,
        ErrorKind::InputTooLong,
        ErrorKind::NestingTooDeep,
    ];

    /// Stable name of this kind, as used in JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidCharacter => "InvalidCharacter",
            ErrorKind::MalformedNumber => "MalformedNumber",
            ErrorKind::UnexpectedEnd => "UnexpectedEnd",
            ErrorKind::UnmatchedParenthesis => "UnmatchedParenthesis",
            ErrorKind::UnexpectedToken => "UnexpectedToken",
            ErrorKind::DivisionByZero => "DivisionByZero",
            ErrorKind::NonFiniteResult => "NonFiniteResult",
            ErrorKind::InputTooLong => "InputTooLong",
            ErrorKind::NestingTooDeep => "NestingTooDeep",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a full computation.
pub type EvaluationResult = std::result::Result<f64, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_errors_share_kind() {
        let close: CalcError = ParseError::UnmatchedCloseParen {
            span: Span::new(1, 2),
        }
        .into();
        let open: CalcError = ParseError::UnclosedParen {
            span: Span::new(0, 1),
        }
        .into();
        assert_eq!(close.kind(), ErrorKind::UnmatchedParenthesis);
        assert_eq!(open.kind(), ErrorKind::UnmatchedParenthesis);
    }

    #[test]
    fn test_transparent_message() {
        let err: CalcError = EvalError::DivisionByZero {
            span: Some(Span::new(2, 3)),
        }
        .into();
        assert_eq!(err.to_string(), "division by zero at 2..3");
        assert_eq!(err.span(), Some(Span::new(2, 3)));
    }

    #[test]
    fn test_unknown_span_message() {
        let err = EvalError::NonFiniteResult { span: None };
        assert!(err.to_string().contains("<unknown>"));
    }
}
