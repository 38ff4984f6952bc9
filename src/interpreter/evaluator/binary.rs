/// Dispatch from operator to the specialized handlers.
pub mod core;

/// The ternary-producing operator tables: `||`, `oplus`, `meet`, `join` and
/// `lpop`.
pub mod ternary;

/// Entailment `[=` and equality `==`.
pub mod comparison;

/// `and`, `or`, `implies`, `equiv`.
pub mod logic;
