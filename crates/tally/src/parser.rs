//! Recursive-descent parser
//!
//! Grammar:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := '-' unary | primary
//! primary    := Number | '(' expression ')'
//! ```
//!
//! Binary operators are left-associative; unary minus is right-recursive and
//! binds tighter than any binary operator.

use crate::ast::Expr;
use crate::context::EvalContext;
use crate::error::ParseError;
use crate::span::Span;
use crate::token::{Operator, Spanned, Token};

/// Parse a token stream with default limits.
pub fn parse(tokens: &[Spanned<Token>]) -> Result<Expr, ParseError> {
    parse_with(tokens, &EvalContext::default())
}

/// Parse a token stream, enforcing the nesting limit from `ctx`.
///
/// Every token must be consumed; leftovers are an error.
pub fn parse_with(tokens: &[Spanned<Token>], ctx: &EvalContext) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens, ctx.max_depth);
    let (expr, _) = parser.expression()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Spanned {
            node: Token::RightParen,
            span,
        }) => Err(ParseError::UnmatchedCloseParen { span }),
        Some(tok) => Err(ParseError::TrailingTokens {
            found: tok.node.to_string(),
            span: tok.span,
        }),
    }
}

/// A parsed subtree and its height in operator nodes (a literal is 0).
type Parsed = (Expr, usize);

struct Parser<'a> {
    tokens: &'a [Spanned<Token>],
    pos: usize,
    depth: usize,
    max_depth: usize,
    open_parens: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Spanned<Token>], max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
            open_parens: 0,
        }
    }

    fn peek(&self) -> Option<Spanned<Token>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the next token if it is one of `ops`.
    fn eat_operator(&mut self, ops: &[Operator]) -> Option<Spanned<Operator>> {
        match self.peek() {
            Some(Spanned {
                node: Token::Operator(op),
                span,
            }) if ops.contains(&op) => {
                self.advance();
                Some(Spanned::new(op, span))
            }
            _ => None,
        }
    }

    fn too_deep(&self, span: Span) -> ParseError {
        ParseError::NestingTooDeep {
            max: self.max_depth,
            span,
        }
    }

    /// Bounds parser recursion for `(` and unary `-`.
    fn enter(&mut self, span: Span) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.too_deep(span));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Bounds the height of the tree, which evaluation and drop recurse over.
    fn node_height(&self, child_height: usize, span: Span) -> Result<usize, ParseError> {
        let height = child_height + 1;
        if height > self.max_depth {
            return Err(self.too_deep(span));
        }
        Ok(height)
    }

    fn binary(
        &self,
        op: Spanned<Operator>,
        left: Parsed,
        right: Parsed,
    ) -> Result<Parsed, ParseError> {
        let height = self.node_height(left.1.max(right.1), op.span)?;
        Ok((Expr::binary(op.node, left.0, right.0, op.span), height))
    }

    fn expression(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.term()?;
        while let Some(op) = self.eat_operator(&[Operator::Plus, Operator::Minus]) {
            let right = self.term()?;
            left = self.binary(op, left, right)?;
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.unary()?;
        while let Some(op) = self.eat_operator(&[Operator::Star, Operator::Slash]) {
            let right = self.unary()?;
            left = self.binary(op, left, right)?;
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Parsed, ParseError> {
        match self.eat_operator(&[Operator::Minus]) {
            Some(minus) => {
                self.enter(minus.span)?;
                let operand = self.unary();
                self.leave();
                let (operand, operand_height) = operand?;
                let height = self.node_height(operand_height, minus.span)?;
                Ok((Expr::neg(operand, minus.span), height))
            }
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Parsed, ParseError> {
        let tok = self.peek().ok_or(ParseError::UnexpectedEnd)?;

        match tok.node {
            Token::Number(value) => {
                self.advance();
                Ok((Expr::literal(value, tok.span), 0))
            }
            Token::LeftParen => {
                self.advance();
                if let Some(Spanned {
                    node: Token::RightParen,
                    span,
                }) = self.peek()
                {
                    return Err(ParseError::EmptyParens {
                        span: tok.span.to(span),
                    });
                }

                self.enter(tok.span)?;
                self.open_parens += 1;
                let inner = self.expression();
                self.open_parens -= 1;
                self.leave();
                let inner = inner?;

                match self.peek() {
                    Some(Spanned {
                        node: Token::RightParen,
                        ..
                    }) => {
                        self.advance();
                        Ok(inner)
                    }
                    None => Err(ParseError::UnclosedParen { span: tok.span }),
                    Some(other) => Err(ParseError::TrailingTokens {
                        found: other.node.to_string(),
                        span: other.span,
                    }),
                }
            }
            // Paren balance would drop below zero
            Token::RightParen if self.open_parens == 0 => {
                Err(ParseError::UnmatchedCloseParen { span: tok.span })
            }
            Token::Operator(_) | Token::RightParen => Err(ParseError::ExpectedPrimary {
                found: tok.node.to_string(),
                span: tok.span,
            }),
        }
    }
}
