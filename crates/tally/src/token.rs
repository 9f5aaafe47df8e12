//! Tokenization of arithmetic input

use std::fmt;

use crate::error::LexError;
use crate::span::Span;

/// One of the four binary operators. `Minus` doubles as unary negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl Operator {
    /// Map a character to an operator.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }

    /// Source symbol.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Smallest lexical unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Decimal literal
    Number(f64),
    /// Arithmetic operator
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// A value paired with its location in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned<T> {
    /// The wrapped value
    pub node: T,
    /// Where it came from
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Wrap a value with a span.
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Split `input` into tokens, left to right.
///
/// Whitespace is skipped. Contiguous runs of digits and `.` become a single
/// [`Token::Number`]. Empty input yields an empty vector; deciding whether
/// that is acceptable is left to the caller.
pub fn tokenize(input: &str) -> Result<Vec<Spanned<Token>>, LexError> {
    let mut out = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }

        let token = match ch {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + 1;
                while let Some(&(i, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = i + 1;
                    chars.next();
                }
                let span = Span::new(start, end);
                let number = parse_number(&input[start..end], span)?;
                out.push(Spanned::new(Token::Number(number), span));
                continue;
            }
            c => match Operator::from_char(c) {
                Some(op) => Token::Operator(op),
                None => {
                    return Err(LexError::InvalidCharacter {
                        ch: c,
                        span: Span::char_at(start, c),
                    })
                }
            },
        };

        out.push(Spanned::new(token, Span::char_at(start, ch)));
    }

    Ok(out)
}

/// Parse a digit/decimal-point run.
fn parse_number(text: &str, span: Span) -> Result<f64, LexError> {
    let malformed = || LexError::MalformedNumber {
        text: text.to_string(),
        span,
    };

    if text.matches('.').count() > 1 || !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    text.parse::<f64>().map_err(|_| malformed())
}

/// Render tokens back to a space-separated string (debugging aid).
pub fn format_tokens(tokens: &[Spanned<Token>]) -> String {
    tokens
        .iter()
        .map(|t| t.node.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
