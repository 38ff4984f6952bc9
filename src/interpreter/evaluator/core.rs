use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        assignment::Assignment,
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        lexer::Token,
        value::core::Value,
    },
    operator::Operation,
};

/// Result type used by the evaluator.
///
/// Evaluation fails with either a [`ParseError`] (the stream is malformed) or
/// a [`RuntimeError`] (a variable is unbound or an operand has the wrong kind).
pub type EvalResult<T> = Result<T, Error>;

/// Deepest operator nesting `evaluate` will follow before giving up.
pub const MAX_DEPTH: usize = 1024;

/// Evaluates the prefix expression starting at `position`.
///
/// The token at `position` is consumed first. An operator then evaluates its
/// operands left to right, each starting where the previous one ended. Both
/// operands of a binary operator are always evaluated so that the stream is
/// consumed in full. The stream is never revisited.
///
/// # Returns
/// The computed value and the index of the first token not consumed.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the stream ends before an
///   operator has all its operands.
/// - [`ParseError::NestingTooDeep`] if operators nest more than
///   [`MAX_DEPTH`] levels.
/// - [`RuntimeError::UndefinedVariable`] if a variable is not in
///   `assignment`.
/// - [`RuntimeError::TypeMismatch`] if an operand has the wrong kind.
///
/// # Example
/// ```
/// use triuth::interpreter::{
///     assignment::Assignment,
///     evaluator::core::evaluate,
///     lexer::tokenize,
///     value::{core::Value, ternary::Ternary},
/// };
///
/// let tokens = tokenize("|| A phi top").unwrap();
/// let assignment: Assignment = [("A", Ternary::R)].into_iter().collect();
///
/// let (value, next) = evaluate(&tokens, 0, &assignment).unwrap();
/// assert_eq!(value, Value::Ternary(Ternary::R));
/// assert_eq!(next, 3);
/// ```
pub fn evaluate(tokens: &[Token],
                position: usize,
                assignment: &Assignment)
                -> EvalResult<(Value, usize)> {
    evaluate_nested(tokens, position, assignment, 0)
}

fn evaluate_nested(tokens: &[Token],
                   position: usize,
                   assignment: &Assignment,
                   depth: usize)
                   -> EvalResult<(Value, usize)> {
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position }.into());
    }

    let token = tokens.get(position)
                      .ok_or(ParseError::UnexpectedEndOfInput { position })?;
    let operation = token.operation()
                         .ok_or_else(|| ParseError::UnexpectedToken { token: token.to_string(),
                                                                      position })?;

    match operation {
        Operation::Constant(value) => Ok((Value::Ternary(value), position + 1)),
        Operation::Variable(name) => {
            let value =
                assignment.get(name)
                          .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                           position })?;
            Ok((Value::Ternary(value), position + 1))
        },
        Operation::Unary(op) => {
            let (operand, next) = evaluate_nested(tokens, position + 1, assignment, depth + 1)?;
            Ok((eval_unary(op, operand, position)?, next))
        },
        Operation::Binary(op) => {
            let (left, middle) = evaluate_nested(tokens, position + 1, assignment, depth + 1)?;
            let (right, next) = evaluate_nested(tokens, middle, assignment, depth + 1)?;
            Ok((eval_binary(op, left, right, position)?, next))
        },
    }
}

/// Evaluates a whole token stream as exactly one expression.
///
/// # Errors
/// Everything [`evaluate`] reports, plus
/// [`ParseError::UnexpectedTrailingTokens`] if tokens remain after the
/// expression.
pub fn evaluate_all(tokens: &[Token], assignment: &Assignment) -> EvalResult<Value> {
    let (value, next) = evaluate(tokens, 0, assignment)?;

    if let Some(token) = tokens.get(next) {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: next, }.into());
    }

    Ok(value)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, value::ternary::Ternary};

    fn eval_str(source: &str, assignment: &Assignment) -> EvalResult<Value> {
        evaluate_all(&tokenize(source)?, assignment)
    }

    #[test]
    fn constants() {
        let empty = Assignment::new();
        assert_eq!(eval_str("top", &empty).unwrap(), Value::Ternary(Ternary::E));
        assert_eq!(eval_str("bot", &empty).unwrap(), Value::Ternary(Ternary::R));
        assert_eq!(eval_str("phi", &empty).unwrap(), Value::Ternary(Ternary::G));
    }

    #[test]
    fn binary_operands_consume_in_order() {
        let tokens = tokenize("meet - bot / phi top").unwrap();
        let (value, next) = evaluate(&tokens, 0, &Assignment::new()).unwrap();
        // meet (- bot = E) (/ phi = E) = E
        assert_eq!(value, Value::Ternary(Ternary::E));
        assert_eq!(next, 5);
    }

    #[test]
    fn evaluation_can_start_mid_stream() {
        let tokens = tokenize("and robust phi not robust bot").unwrap();
        let (value, next) = evaluate(&tokens, 3, &Assignment::new()).unwrap();
        assert_eq!(value, Value::Boolean(true));
        assert_eq!(next, 6);
    }

    #[test]
    fn undefined_variable() {
        let err = eval_str("|| A B", &[("A", Ternary::G)].into_iter().collect()).unwrap_err();
        assert!(matches!(err,
                         Error::Runtime(RuntimeError::UndefinedVariable { ref name, position: 2 })
                         if name == "B"));
    }

    #[test]
    fn missing_operand() {
        let err = eval_str("oplus top", &Assignment::new()).unwrap_err();
        assert!(matches!(err,
                         Error::Parse(ParseError::UnexpectedEndOfInput { position: 2 })));
    }

    #[test]
    fn trailing_tokens() {
        let err = eval_str("top bot", &Assignment::new()).unwrap_err();
        assert!(matches!(err,
                         Error::Parse(ParseError::UnexpectedTrailingTokens { position: 1, .. })));
    }

    #[test]
    fn nesting_limit() {
        let assignment: Assignment = [("A", Ternary::G)].into_iter().collect();

        let deep = format!("{}A", "- ".repeat(MAX_DEPTH));
        assert_eq!(eval_str(&deep, &assignment).unwrap(), Value::Ternary(Ternary::G));

        let too_deep = format!("{}A", "- ".repeat(MAX_DEPTH + 1));
        let err = eval_str(&too_deep, &assignment).unwrap_err();
        assert!(matches!(err,
                         Error::Parse(ParseError::NestingTooDeep { position })
                         if position == MAX_DEPTH + 1));
    }

    #[test]
    fn empty_stream() {
        let err = eval_str("", &Assignment::new()).unwrap_err();
        assert!(matches!(err,
                         Error::Parse(ParseError::UnexpectedEndOfInput { position: 0 })));
    }
}
