use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{Kind, Value},
            ternary::Ternary,
        },
    },
};

/// Unwraps a ternary operand or reports which operator rejected it.
pub fn expect_ternary(value: Value,
                      operator: impl std::fmt::Display,
                      position: usize)
                      -> EvalResult<Ternary> {
    value.as_ternary()
         .ok_or_else(|| mismatch(&operator, Kind::Ternary, value.kind(), position).into())
}

/// Unwraps a boolean operand or reports which operator rejected it.
pub fn expect_bool(value: Value,
                   operator: impl std::fmt::Display,
                   position: usize)
                   -> EvalResult<bool> {
    value.as_bool()
         .ok_or_else(|| mismatch(&operator, Kind::Boolean, value.kind(), position).into())
}

fn mismatch(operator: &dyn std::fmt::Display,
            expected: Kind,
            found: Kind,
            position: usize)
            -> RuntimeError {
    RuntimeError::TypeMismatch { operator: operator.to_string(),
                                 expected,
                                 found,
                                 position }
}
