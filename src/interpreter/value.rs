/// The three process spaces truth values.
///
/// Defines `Ternary` (`R`, `G`, `E`), its entailment order `E < G < R` and the
/// base-3 digit encoding used by the enumerator.
pub mod ternary;

/// The `Value` union of ternary and boolean results, and its `Kind`.
pub mod core;
