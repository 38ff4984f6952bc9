use crate::{
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, logic::eval_logic, ternary::eval_table},
            core::EvalResult,
        },
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Evaluates a binary operator on two already evaluated operands.
///
/// This function routes the operation to a specialized handler. The table
/// operators and the comparisons take ternary operands; the connectives take
/// booleans. `position` is the operator's index in the token stream.
///
/// # Example
/// ```
/// use triuth::{
///     interpreter::{
///         evaluator::binary::core::eval_binary,
///         value::{core::Value, ternary::Ternary},
///     },
///     operator::BinaryOperator,
/// };
///
/// let r = Value::Ternary(Ternary::R);
/// let e = Value::Ternary(Ternary::E);
///
/// assert_eq!(eval_binary(BinaryOperator::Par, r, e, 0).unwrap(), e);
/// assert_eq!(eval_binary(BinaryOperator::Entails, r, e, 0).unwrap(), Value::Boolean(true));
/// assert!(eval_binary(BinaryOperator::And, r, e, 0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        And, Entails, Equal, Equiv, Implies, Join, Lpop, Meet, Oplus, Or, Par,
    };

    match op {
        Par | Oplus | Meet | Join | Lpop => eval_table(op, left, right, position),
        Entails | Equal => eval_comparison(op, left, right, position),
        And | Or | Implies | Equiv => eval_logic(op, left, right, position),
    }
}
