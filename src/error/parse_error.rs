/// Represents all ways an expression can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer could not turn part of the input into a token.
    #[error("Error at token {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The offending input.
        token:    String,
        /// Index of the token in the stream.
        position: usize,
    },
    /// An operator needed more operands than the stream had left.
    #[error("Error at token {position}: Unexpected end of input; an operator is missing operands.")]
    UnexpectedEndOfInput {
        /// Index one past the last token.
        position: usize,
    },
    /// Tokens remained after the top-level expression was complete.
    #[error("Error at token {position}: Extra tokens after expression, starting with '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first unconsumed token.
        token:    String,
        /// Index of that token in the stream.
        position: usize,
    },
    /// Operators were nested deeper than the evaluator follows.
    #[error("Error at token {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Index of the first token past the limit.
        position: usize,
    },
}
