//! # Tally
//!
//! A safe arithmetic expression evaluator.
//!
//! Tally takes strings such as `"3 + 4 * -2 / (1 - 3)"`, checks that they are
//! well-formed arithmetic and computes their value. Every caller (HTTP
//! handler, command line, UI) goes through the same [`compute()`] function;
//! nothing ever executes user input as code.
//!
//! ## Architecture
//!
//! - **Tokenizer** ([`token`]): string → spanned tokens
//! - **Parser** ([`parser`]): tokens → [`Expr`] tree, by recursive descent
//! - **Evaluator** ([`eval`]): post-order walk of the tree → `f64`
//! - **Facade** ([`compute()`]): the three stages composed, with a unified
//!   [`CalcError`]
//! - **API** ([`api`]): JSON request/response shaping for HTTP servers
//!
//! Supported: `+ - * /`, unary minus, decimal literals and parentheses, with
//! standard precedence and left associativity.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod ast;
pub mod compute;
pub mod context;
pub mod error;
pub mod eval;
pub mod parser;
pub mod span;
pub mod token;

// Re-export main types
pub use ast::Expr;
pub use compute::{compute, compute_with};
pub use context::EvalContext;
pub use error::{CalcError, ErrorKind, EvalError, EvaluationResult, LexError, ParseError};
pub use eval::{evaluate, Evaluate};
pub use parser::{parse, parse_with};
pub use span::Span;
pub use token::{tokenize, Operator, Spanned, Token};

/// Tally version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
