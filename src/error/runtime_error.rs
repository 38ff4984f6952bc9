use crate::interpreter::value::core::Kind;

/// Represents all errors that can occur while evaluating a well-formed
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A variable token has no binding in the current assignment.
    #[error("Error at token {position}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Index of the variable token.
        position: usize,
    },
    /// An operator received an operand of the wrong kind.
    #[error("Error at token {position}: Type mismatch: '{operator}' expects a {expected} operand, \
             found a {found}.")]
    TypeMismatch {
        /// The operator that rejected the operand.
        operator: String,
        /// The kind the operator accepts.
        expected: Kind,
        /// The kind it was given.
        found:    Kind,
        /// Index of the operator token.
        position: usize,
    },
    /// `3^count` assignments cannot be counted on this platform.
    #[error("Too many variables: {count} variables give more than usize::MAX assignments.")]
    TooManyVariables {
        /// Number of free variables in the expression.
        count: usize,
    },
}
