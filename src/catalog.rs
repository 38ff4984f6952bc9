/// A named expression worth tabulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// Short identifier used on the command line.
    pub name:        &'static str,
    /// The prefix expression.
    pub expression:  &'static str,
    /// What the expression encodes.
    pub description: &'static str,
}

/// Expressions from the process spaces notes, with the names they go by
/// there.
///
/// All but `mll-mix` are boolean and expected to hold in every row;
/// `mll-mix` is ternary and never evaluates to `R`.
pub const CATALOG: &[Identity] = &[
    Identity { name:        "verification",
               expression:  "equiv [= A B robust || - A B",
               description: "A entails B exactly when -A || B is robust.", },
    Identity { name:        "lollipop",
               expression:  "== lpop A B || - A B",
               description: "Linear implication is definable as -A || B.", },
    Identity { name:        "mll-mix",
               expression:  "lpop oplus A || X B || oplus A X B",
               description: "The MLL+MIX rule from 'MLL+MIX as a Logic of Influence and \
                             Causation' (A oplus (X || B)) -o ((A oplus X) || B).", },
    Identity { name:        "mix",
               expression:  "implies and robust G robust D robust || G D",
               description: "The MIX inference rule: robust G and robust D give robust G || D.", },
    Identity { name:        "excluded-middle",
               expression:  "[= phi || A - A",
               description: "A || -A is never worse than phi.", },
    Identity { name:        "cut",
               expression:  "implies and [= phi || Gamma A [= phi || Delta - A [= phi || Gamma \
                             Delta",
               description: "Cut: from Gamma, A and Delta, -A conclude Gamma, Delta.", },
    Identity { name:        "tensor",
               expression:  "implies and [= phi || Gamma A [= phi || Delta B [= phi || || Gamma \
                             Delta oplus A B",
               description: "Tensor introduction: from Gamma, A and Delta, B conclude Gamma, \
                             Delta, A oplus B.", },
];

/// Looks up a catalog entry by name.
///
/// # Example
/// ```
/// use triuth::catalog::find;
///
/// assert_eq!(find("mix").map(|i| i.expression),
///            Some("implies and robust G robust D robust || G D"));
/// assert!(find("nonexistent").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Identity> {
    CATALOG.iter().find(|identity| identity.name == name)
}
