use crate::interpreter::{lexer::Token, value::ternary::Ternary};

/// Operators that take a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`: swaps `R` and `E`, fixes `G`.
    Negate,
    /// `/`: the cycle `R -> G -> E -> R`.
    DualNegate,
    /// `robust`: true unless the operand is `R`.
    Robust,
    /// `not`: boolean negation.
    Not,
}

/// Operators that take two operands, left first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `||`
    Par,
    /// `oplus`
    Oplus,
    /// `meet`
    Meet,
    /// `join`
    Join,
    /// `lpop`
    Lpop,
    /// `[=`: entailment, `left >= right` in the order `E < G < R`.
    Entails,
    /// `==`: equality of two ternary values.
    Equal,
    /// `and`
    And,
    /// `or`
    Or,
    /// `implies`
    Implies,
    /// `equiv`
    Equiv,
}

/// What a single token asks the evaluator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// `top`, `bot` or `phi`.
    Constant(Ternary),
    /// A variable to look up in the assignment.
    Variable(&'a str),
    /// An operator followed by one operand.
    Unary(UnaryOperator),
    /// An operator followed by two operands.
    Binary(BinaryOperator),
}

impl Token {
    /// Classifies the token, or returns `None` for tokens that never start an
    /// expression.
    #[must_use]
    pub fn operation(&self) -> Option<Operation<'_>> {
        use BinaryOperator as B;
        use UnaryOperator as U;

        Some(match self {
                 Self::Top => Operation::Constant(Ternary::E),
                 Self::Bot => Operation::Constant(Ternary::R),
                 Self::Phi => Operation::Constant(Ternary::G),
                 Self::Variable(name) => Operation::Variable(name),
                 Self::Negate => Operation::Unary(U::Negate),
                 Self::DualNegate => Operation::Unary(U::DualNegate),
                 Self::Robust => Operation::Unary(U::Robust),
                 Self::Not => Operation::Unary(U::Not),
                 Self::Par => Operation::Binary(B::Par),
                 Self::Oplus => Operation::Binary(B::Oplus),
                 Self::Meet => Operation::Binary(B::Meet),
                 Self::Join => Operation::Binary(B::Join),
                 Self::Lpop => Operation::Binary(B::Lpop),
                 Self::Entails => Operation::Binary(B::Entails),
                 Self::EqualEqual => Operation::Binary(B::Equal),
                 Self::And => Operation::Binary(B::And),
                 Self::Or => Operation::Binary(B::Or),
                 Self::Implies => Operation::Binary(B::Implies),
                 Self::Equiv => Operation::Binary(B::Equiv),
                 Self::Ignored => return None,
             })
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Negate => "-",
            Self::DualNegate => "/",
            Self::Robust => "robust",
            Self::Not => "not",
        };
        write!(f, "{s}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Par => "||",
            Self::Oplus => "oplus",
            Self::Meet => "meet",
            Self::Join => "join",
            Self::Lpop => "lpop",
            Self::Entails => "[=",
            Self::Equal => "==",
            Self::And => "and",
            Self::Or => "or",
            Self::Implies => "implies",
            Self::Equiv => "equiv",
        };
        write!(f, "{s}")
    }
}
