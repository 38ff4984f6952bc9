//! # triuth
//!
//! triuth builds exhaustive truth tables ("triuth tables") for expressions
//! over the three-valued process spaces logic. Expressions are written in
//! prefix notation, for example `equiv [= A B robust || - A B`, and every
//! assignment of `R`, `G` and `E` to their variables is evaluated. This makes
//! it easy to check candidate identities by brute force.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Named expressions from the process spaces notes.
///
/// Each entry is a conjectured identity or inference rule that can be fed
/// straight to [`process`] or [`interpreter::table::enumerate`].
pub mod catalog;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - `ParseError` covers malformed expressions.
/// - `RuntimeError` covers undefined variables, type mismatches and tables
///   too large to count.
/// - `Error` wraps both so callers can use `?` throughout.
pub mod error;
/// Ties together lexing, evaluation, values and table enumeration.
pub mod interpreter;
/// Operator classification.
///
/// Maps tokens to constants, variables and the unary or binary operators
/// they denote.
pub mod operator;

use crate::{error::Error, interpreter::table::enumerate};

/// The message returned by [`process`] for blank input.
pub const INSTRUCTIONS: &str = "Please type a prefix expression using process spaces operators and \
                                any symbols for variables.";

/// Returns a formatted truth table report for `raw`.
///
/// The input is trimmed first. Blank input yields [`INSTRUCTIONS`] without
/// enumerating anything. Otherwise the report is the trimmed expression
/// followed by its truth table.
///
/// # Errors
/// Returns the first parse or evaluation error; no partial report is
/// produced.
///
/// # Examples
/// ```
/// use triuth::{INSTRUCTIONS, process};
///
/// assert_eq!(process("   ").unwrap(), INSTRUCTIONS);
///
/// let report = process(" top ").unwrap();
/// assert_eq!(report, "Your expression: top\nTriuth table:\ntop\n{} E\n");
///
/// // `B` is left over once `- A` is complete.
/// assert!(process("- A B").is_err());
/// ```
pub fn process(raw: &str) -> Result<String, Error> {
    let expression = raw.trim();
    if expression.is_empty() {
        return Ok(INSTRUCTIONS.to_string());
    }

    let table = enumerate(expression)?;
    Ok(format!("Your expression: {expression}\nTriuth table:\n{table}"))
}
