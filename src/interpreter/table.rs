use log::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        assignment::Assignment,
        evaluator::core::{EvalResult, evaluate_all},
        lexer::{Token, tokenize},
        value::{core::Value, ternary::Ternary},
    },
};

/// Returns the free variables of a token stream in first-occurrence order.
///
/// Every non-reserved token is a variable; repeated occurrences are listed
/// once.
///
/// # Example
/// ```
/// use triuth::interpreter::{lexer::tokenize, table::free_variables};
///
/// let tokens = tokenize("oplus B || A B").unwrap();
/// assert_eq!(free_variables(&tokens), ["B", "A"]);
/// ```
#[must_use]
pub fn free_variables(tokens: &[Token]) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();

    for name in tokens.iter().filter_map(Token::as_variable) {
        if !variables.iter().any(|v| v == name) {
            variables.push(name.to_string());
        }
    }

    variables
}

/// Number of assignments over `count` variables, `3^count`.
///
/// # Errors
/// [`RuntimeError::TooManyVariables`] if the count does not fit in `usize`.
pub fn assignment_count(count: usize) -> Result<usize, RuntimeError> {
    u32::try_from(count).ok()
                        .and_then(|exp| 3usize.checked_pow(exp))
                        .ok_or(RuntimeError::TooManyVariables { count })
}

/// Iterator over every assignment of `R`, `G`, `E` to a list of variables.
///
/// Assignment `i` binds the variables, in order, to the base-3 digits of `i`
/// (most significant first) with `0 -> R`, `1 -> G`, `2 -> E`.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    variables: &'a [String],
    next:      usize,
    count:     usize,
}

impl<'a> Assignments<'a> {
    /// Creates the iterator.
    ///
    /// # Errors
    /// [`RuntimeError::TooManyVariables`] if `3^n` does not fit in `usize`.
    pub fn new(variables: &'a [String]) -> Result<Self, RuntimeError> {
        Ok(Self { variables,
                  next: 0,
                  count: assignment_count(variables.len())? })
    }

    fn nth_assignment(&self, mut index: usize) -> Assignment {
        let mut values = vec![Ternary::R; self.variables.len()];
        for slot in values.iter_mut().rev() {
            // `index % 3` is always a valid digit.
            *slot = Ternary::from_digit(index % 3).unwrap_or(Ternary::R);
            index /= 3;
        }

        self.variables.iter().cloned().zip(values).collect()
    }
}

impl Iterator for Assignments<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let assignment = self.nth_assignment(self.next);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_> {}

/// One line of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The values given to the free variables.
    pub assignment: Assignment,
    /// What the expression evaluated to under `assignment`.
    pub value:      Value,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.assignment, self.value)
    }
}

/// The complete truth table of an expression.
///
/// Displays as the expression on the first line followed by one line per
/// row, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    expression: String,
    variables:  Vec<String>,
    rows:       Vec<Row>,
}

impl TruthTable {
    /// The expression text the table was built from.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The free variables, in the order they are bound in each row.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The rows, in base-3 enumeration order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the expression evaluates to `true` in every row.
    ///
    /// Tables of ternary results never count as identities.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rows.iter().all(|row| row.value == Value::Boolean(true))
    }

    /// Rows that keep the table from being an identity.
    pub fn counterexamples(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.value != Value::Boolean(true))
    }
}

impl std::fmt::Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.expression)?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Builds the truth table of `expression`.
///
/// The expression is tokenized once. Its free variables are ordered by first
/// occurrence and every one of the `3^n` assignments is evaluated in base-3
/// order. The expression must consume the whole token stream.
///
/// # Errors
/// The first evaluation error aborts the whole table; no partial table is
/// returned.
///
/// # Example
/// ```
/// use triuth::interpreter::table::enumerate;
///
/// let table = enumerate("robust A").unwrap();
/// assert_eq!(table.to_string(), "robust A\n{A: R} false\n{A: G} true\n{A: E} true\n");
/// ```
pub fn enumerate(expression: &str) -> EvalResult<TruthTable> {
    let tokens = tokenize(expression)?;
    let variables = free_variables(&tokens);
    let assignments = Assignments::new(&variables)?;

    debug!("enumerating {} assignments of {:?} for '{}'",
           assignments.len(),
           variables,
           expression);

    let mut rows = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let value = evaluate_all(&tokens, &assignment)?;
        trace!("{assignment} -> {value}");
        rows.push(Row { assignment, value });
    }

    Ok(TruthTable { expression: expression.to_string(),
                    variables,
                    rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_order() {
        let tokens = tokenize("meet Z meet A Z").unwrap();
        assert_eq!(free_variables(&tokens), ["Z", "A"]);
    }

    #[test]
    fn base_three_order() {
        let vars = vec!["A".to_string(), "B".to_string()];
        let labels: Vec<String> = Assignments::new(&vars).unwrap().map(|a| a.to_string()).collect();
        assert_eq!(labels[0], "{A: R, B: R}");
        assert_eq!(labels[1], "{A: R, B: G}");
        assert_eq!(labels[2], "{A: R, B: E}");
        assert_eq!(labels[3], "{A: G, B: R}");
        assert_eq!(labels[8], "{A: E, B: E}");
        assert_eq!(labels.len(), 9);
    }

    #[test]
    fn no_variables_means_one_empty_assignment() {
        let assignments: Vec<_> = Assignments::new(&[]).unwrap().collect();
        assert_eq!(assignments, [Assignment::new()]);
    }

    #[test]
    fn counts_overflow_cleanly() {
        assert_eq!(assignment_count(4), Ok(81));
        assert_eq!(assignment_count(usize::MAX),
                   Err(RuntimeError::TooManyVariables { count: usize::MAX }));
    }

    #[test]
    fn identity_detection() {
        assert!(enumerate("[= phi || A - A").unwrap().is_identity());

        let table = enumerate("robust A").unwrap();
        assert!(!table.is_identity());
        let bad: Vec<_> = table.counterexamples().collect();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].assignment.get("A"), Some(Ternary::R));

        assert!(!enumerate("top").unwrap().is_identity());
    }
}
