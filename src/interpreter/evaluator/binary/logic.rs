use crate::{
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_bool},
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Evaluates a logical connective on two boolean operands.
///
/// Ternary operands are rejected rather than treated as truthy.
pub fn eval_logic(op: BinaryOperator,
                  left: Value,
                  right: Value,
                  position: usize)
                  -> EvalResult<Value> {
    use BinaryOperator::{And, Equiv, Implies, Or};

    let left = expect_bool(left, op, position)?;
    let right = expect_bool(right, op, position)?;

    Ok(Value::Boolean(match op {
                          And => left && right,
                          Or => left || right,
                          Implies => !left || right,
                          Equiv => left == right,
                          _ => unreachable!("eval_logic used with non logical operator"),
                      }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{Error, RuntimeError},
        interpreter::value::{core::Kind, ternary::Ternary},
    };

    fn logic(op: BinaryOperator, a: bool, b: bool) -> bool {
        eval_logic(op, Value::Boolean(a), Value::Boolean(b), 0).unwrap().as_bool().unwrap()
    }

    #[test]
    fn truth_tables() {
        for a in [false, true] {
            for b in [false, true] {
                assert_eq!(logic(BinaryOperator::And, a, b), a && b);
                assert_eq!(logic(BinaryOperator::Or, a, b), a || b);
                assert_eq!(logic(BinaryOperator::Implies, a, b), !a || b);
                assert_eq!(logic(BinaryOperator::Equiv, a, b), a == b);
            }
        }
    }

    #[test]
    fn ternary_operand_is_a_type_mismatch() {
        let err = eval_logic(BinaryOperator::Equiv,
                             Value::Ternary(Ternary::G),
                             Value::Ternary(Ternary::G),
                             7).unwrap_err();
        assert!(matches!(err,
                         Error::Runtime(RuntimeError::TypeMismatch { expected: Kind::Boolean,
                                                                     found: Kind::Ternary,
                                                                     position: 7,
                                                                     .. })));
    }
}
