use crate::interpreter::value::ternary::Ternary;

/// Binds variable names to ternary values for one evaluation.
///
/// Bindings keep their insertion order, which is the order they appear in
/// reports. Lookups are linear; tables with more than a handful of variables
/// are impractical to enumerate anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    bindings: Vec<(String, Ternary)>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub const fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Binds `name` to `value`, replacing any earlier binding of `name` in
    /// place.
    pub fn insert(&mut self, name: impl Into<String>, value: Ternary) {
        let name = name.into();
        match self.bindings.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.bindings.push((name, value)),
        }
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Ternary> {
        self.bindings.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Iterates over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Ternary)> {
        self.bindings.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Whether no variable is bound, as for expressions without variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Ternary)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, Ternary)>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for (name, value) in iter {
            assignment.insert(name, value);
        }
        assignment
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut a: Assignment = [("A", Ternary::R), ("B", Ternary::G)].into_iter().collect();
        a.insert("A", Ternary::E);
        assert_eq!(a.get("A"), Some(Ternary::E));
        assert_eq!(a.to_string(), "{A: E, B: G}");
    }

    #[test]
    fn empty_displays_as_braces() {
        assert_eq!(Assignment::new().to_string(), "{}");
        assert_eq!(Assignment::new().get("A"), None);
    }
}
