use crate::{
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_ternary},
        value::{
            core::Value,
            ternary::Ternary::{self, E, G, R},
        },
    },
    operator::BinaryOperator,
};

/// A binary operator table. Rows are the left operand, columns the right,
/// both in digit order `R`, `G`, `E`.
type Table = [[Ternary; 3]; 3];

const PAR: Table = [[R, R, E],
                    [R, G, E],
                    [E, E, E]];

const OPLUS: Table = [[R, R, R],
                      [R, G, E],
                      [R, E, E]];

const MEET: Table = [[R, G, E],
                     [G, G, G],
                     [E, G, E]];

const JOIN: Table = [[R, G, R],
                     [G, G, G],
                     [R, G, E]];

const LPOP: Table = [[E, E, E],
                     [R, G, E],
                     [R, R, E]];

/// Looks up a ternary-producing operator in its table.
///
/// Both operands must be ternary.
pub fn eval_table(op: BinaryOperator,
                  left: Value,
                  right: Value,
                  position: usize)
                  -> EvalResult<Value> {
    let table = match op {
        BinaryOperator::Par => &PAR,
        BinaryOperator::Oplus => &OPLUS,
        BinaryOperator::Meet => &MEET,
        BinaryOperator::Join => &JOIN,
        BinaryOperator::Lpop => &LPOP,
        _ => unreachable!("eval_table used with non table operator"),
    };
    let left = expect_ternary(left, op, position)?;
    let right = expect_ternary(right, op, position)?;

    Ok(Value::Ternary(table[left.digit()][right.digit()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: BinaryOperator, a: Ternary, b: Ternary) -> Ternary {
        eval_table(op, Value::Ternary(a), Value::Ternary(b), 0).unwrap()
                                                               .as_ternary()
                                                               .unwrap()
    }

    fn rows(op: BinaryOperator) -> Vec<Vec<Ternary>> {
        Ternary::ALL.iter()
                    .map(|&a| Ternary::ALL.iter().map(|&b| apply(op, a, b)).collect())
                    .collect()
    }

    #[test]
    fn par_table() {
        assert_eq!(rows(BinaryOperator::Par), [[R, R, E], [R, G, E], [E, E, E]]);
    }

    #[test]
    fn oplus_table() {
        assert_eq!(rows(BinaryOperator::Oplus), [[R, R, R], [R, G, E], [R, E, E]]);
    }

    #[test]
    fn meet_and_join_tables() {
        assert_eq!(rows(BinaryOperator::Meet), [[R, G, E], [G, G, G], [E, G, E]]);
        assert_eq!(rows(BinaryOperator::Join), [[R, G, R], [G, G, G], [R, G, E]]);
    }

    #[test]
    fn lpop_table() {
        assert_eq!(rows(BinaryOperator::Lpop), [[E, E, E], [R, G, E], [R, R, E]]);
    }

    #[test]
    fn symmetric_tables_commute() {
        for op in [BinaryOperator::Par,
                   BinaryOperator::Oplus,
                   BinaryOperator::Meet,
                   BinaryOperator::Join]
        {
            for a in Ternary::ALL {
                for b in Ternary::ALL {
                    assert_eq!(apply(op, a, b), apply(op, b, a), "{op} {a} {b}");
                }
            }
        }
    }

    #[test]
    fn boolean_operand_is_rejected() {
        let err = eval_table(BinaryOperator::Meet, Value::Boolean(true), Value::Ternary(G), 4);
        assert!(err.is_err());
    }
}
