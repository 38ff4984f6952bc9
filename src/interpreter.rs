/// Variable bindings for one evaluation.
///
/// An `Assignment` maps each free variable to a ternary value and remembers
/// the order the variables were bound in, which is the order reports print
/// them.
pub mod assignment;
/// The evaluator computes the value of a prefix expression.
///
/// It walks the token stream left to right exactly once, with no AST in
/// between: each operator token recursively evaluates the fixed number of
/// operands that follow it and combines them.
///
/// # Responsibilities
/// - Resolves constants and variables.
/// - Applies the unary and binary operator tables.
/// - Enforces operand kinds, reporting `TypeMismatch` rather than coercing.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// Whitespace separates tokens. Reserved words become operator and constant
/// tokens; everything else is a variable.
pub mod lexer;
/// Truth table enumeration.
///
/// Finds the free variables of an expression, generates all `3^n`
/// assignments in base-3 order and evaluates the expression under each one.
pub mod table;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines `Ternary`, the three process spaces values, and their order.
/// - Defines `Value`, the tagged union of ternary and boolean results.
pub mod value;
