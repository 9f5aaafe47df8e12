//! Evaluation limits

/// Default maximum nesting of parentheses and unary minus, and maximum
/// height of the expression tree in operator nodes.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default maximum input length in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Limits applied to a single computation.
///
/// Keeps recursion bounded so that arbitrary input can never exhaust the
/// stack. Contexts are plain values; share one freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum nesting of `(` and unary `-`, and maximum tree height
    pub max_depth: usize,

    /// Maximum input length in bytes
    pub max_input_len: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Create a context with a custom input length limit.
    pub fn with_max_input_len(max_input_len: usize) -> Self {
        Self {
            max_input_len,
            ..Default::default()
        }
    }
}
