use crate::interpreter::value::ternary::Ternary;

/// The kind of a [`Value`], used to report operand mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A process spaces value.
    Ternary,
    /// A plain truth value.
    Boolean,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ternary => write!(f, "ternary"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// The result of evaluating an expression.
///
/// Which variant an expression yields is fixed by its outermost operator:
/// constants, variables and the table operators produce `Ternary`; `robust`,
/// the comparisons and the logical connectives produce `Boolean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// One of `R`, `G`, `E`.
    Ternary(Ternary),
    /// `true` or `false`.
    Boolean(bool),
}

impl From<Ternary> for Value {
    fn from(v: Ternary) -> Self {
        Self::Ternary(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Ternary(_) => Kind::Ternary,
            Self::Boolean(_) => Kind::Boolean,
        }
    }

    /// Returns the ternary payload, or `None` for a boolean.
    #[must_use]
    pub const fn as_ternary(&self) -> Option<Ternary> {
        match self {
            Self::Ternary(t) => Some(*t),
            Self::Boolean(_) => None,
        }
    }

    /// Returns the boolean payload, or `None` for a ternary value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Ternary(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ternary(t) => write!(f, "{t}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
