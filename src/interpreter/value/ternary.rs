/// A process spaces truth value.
///
/// The derived ordering is the entailment order `E < G < R`, so `a >= b` is
/// exactly `a [= b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ternary {
    /// Neutral/equal; the constant `top`.
    E,
    /// Grant; the constant `phi`.
    G,
    /// Reject; the constant `bot`.
    R,
}

impl Ternary {
    /// All three values in enumeration digit order (`R`, `G`, `E`).
    pub const ALL: [Self; 3] = [Self::R, Self::G, Self::E];

    /// Maps a base-3 digit to its value: `0 -> R`, `1 -> G`, `2 -> E`.
    ///
    /// Returns `None` for any other digit.
    ///
    /// # Example
    /// ```
    /// use triuth::interpreter::value::ternary::Ternary;
    ///
    /// assert_eq!(Ternary::from_digit(0), Some(Ternary::R));
    /// assert_eq!(Ternary::from_digit(2), Some(Ternary::E));
    /// assert_eq!(Ternary::from_digit(3), None);
    /// ```
    #[must_use]
    pub const fn from_digit(digit: usize) -> Option<Self> {
        match digit {
            0 => Some(Self::R),
            1 => Some(Self::G),
            2 => Some(Self::E),
            _ => None,
        }
    }

    /// Row/column index into the binary operator tables.
    #[must_use]
    pub const fn digit(self) -> usize {
        match self {
            Self::R => 0,
            Self::G => 1,
            Self::E => 2,
        }
    }

    /// The single-letter label used in reports.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::R => 'R',
            Self::G => 'G',
            Self::E => 'E',
        }
    }
}

impl std::fmt::Display for Ternary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Ternary::{self, E, G, R};

    #[test]
    fn entailment_order() {
        assert!(E < G);
        assert!(G < R);
        assert_eq!(Ternary::ALL.iter().max(), Some(&R));
    }

    #[test]
    fn digits_round_trip() {
        for value in Ternary::ALL {
            assert_eq!(Ternary::from_digit(value.digit()), Some(value));
        }
    }
}
