/// Core evaluation logic.
///
/// Contains the recursive `evaluate` entry point that walks the token stream,
/// resolves constants and variables, and dispatches operators.
pub mod core;

/// Unary operator evaluation.
///
/// Implements `-`, `/`, `robust` and `not`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the five ternary operator tables, the comparisons `[=` and `==`,
/// and the boolean connectives.
pub mod binary;

/// Operand kind checks shared by the operator modules.
pub mod utils;
