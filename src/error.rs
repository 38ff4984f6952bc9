/// Parsing errors.
///
/// Raised when the token stream does not form exactly one well-formed prefix
/// expression: operands missing at the end of input, tokens left over after
/// the top-level expression, or input the lexer cannot split.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while computing a value for one assignment: unbound variables,
/// operands of the wrong kind, or tables too large to enumerate.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure while building a truth table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expression is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
