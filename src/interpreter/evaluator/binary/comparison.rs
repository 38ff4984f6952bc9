use crate::{
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_ternary},
        value::core::Value,
    },
    operator::BinaryOperator,
};

/// Evaluates `[=` or `==` on two ternary operands.
///
/// `[=` holds when `left >= right` in the order `E < G < R`; `==` holds when
/// both are the same value.
pub fn eval_comparison(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: usize)
                       -> EvalResult<Value> {
    let left = expect_ternary(left, op, position)?;
    let right = expect_ternary(right, op, position)?;

    Ok(Value::Boolean(match op {
                          BinaryOperator::Entails => left >= right,
                          BinaryOperator::Equal => left == right,
                          _ => unreachable!("eval_comparison used with non comparison operator"),
                      }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::ternary::Ternary::{self, E, G, R};

    fn entails(a: Ternary, b: Ternary) -> bool {
        eval_comparison(BinaryOperator::Entails, Value::Ternary(a), Value::Ternary(b), 0)
            .unwrap()
            .as_bool()
            .unwrap()
    }

    #[test]
    fn entailment_is_a_total_order() {
        for a in Ternary::ALL {
            for b in Ternary::ALL {
                if a == b {
                    assert!(entails(a, b) && entails(b, a));
                } else {
                    assert!(entails(a, b) ^ entails(b, a), "{a} {b}");
                }
            }
        }
    }

    #[test]
    fn entailment_follows_e_g_r() {
        assert!(entails(R, G));
        assert!(entails(G, E));
        assert!(entails(R, E));
        assert!(!entails(E, R));
    }

    #[test]
    fn equality() {
        let eq = |a, b| {
            eval_comparison(BinaryOperator::Equal, Value::Ternary(a), Value::Ternary(b), 0).unwrap()
        };
        assert_eq!(eq(G, G), Value::Boolean(true));
        assert_eq!(eq(G, R), Value::Boolean(false));
    }

    #[test]
    fn booleans_are_not_compared() {
        assert!(eval_comparison(BinaryOperator::Equal,
                                Value::Boolean(true),
                                Value::Boolean(true),
                                0).is_err());
    }
}
