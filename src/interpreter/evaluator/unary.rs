use crate::{
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{expect_bool, expect_ternary},
        },
        value::{
            core::Value,
            ternary::Ternary::{self, E, G, R},
        },
    },
    operator::UnaryOperator,
};

/// `-`, indexed by operand digit (`R`, `G`, `E`).
const NEGATE: [Ternary; 3] = [E, G, R];
/// `/`, indexed by operand digit (`R`, `G`, `E`).
const DUAL_NEGATE: [Ternary; 3] = [G, E, R];

/// Evaluates a unary operator on an already evaluated operand.
///
/// `-`, `/` and `robust` need a ternary operand; `not` needs a boolean.
/// `position` is the operator's index and is only used for error reporting.
///
/// # Example
/// ```
/// use triuth::{
///     interpreter::{
///         evaluator::unary::eval_unary,
///         value::{core::Value, ternary::Ternary},
///     },
///     operator::UnaryOperator,
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, Value::Ternary(Ternary::R), 0).unwrap();
/// assert_eq!(v, Value::Ternary(Ternary::E));
///
/// let v = eval_unary(UnaryOperator::Robust, Value::Ternary(Ternary::G), 0).unwrap();
/// assert_eq!(v, Value::Boolean(true));
///
/// assert!(eval_unary(UnaryOperator::Not, Value::Ternary(Ternary::G), 0).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, operand: Value, position: usize) -> EvalResult<Value> {
    Ok(match op {
           UnaryOperator::Negate => {
               Value::Ternary(NEGATE[expect_ternary(operand, op, position)?.digit()])
           },
           UnaryOperator::DualNegate => {
               Value::Ternary(DUAL_NEGATE[expect_ternary(operand, op, position)?.digit()])
           },
           UnaryOperator::Robust => Value::Boolean(expect_ternary(operand, op, position)? != R),
           UnaryOperator::Not => Value::Boolean(!expect_bool(operand, op, position)?),
       })
}
