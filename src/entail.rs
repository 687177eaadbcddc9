//! Entailment: does a composed diagram guarantee a conclusion diagram?
//!
//! The eight regions of the ternary diagram collapse to the four S/P
//! quadrants by pairing regions that differ only in M. Each pair is
//! checked against the conclusion's connector for that quadrant; the
//! syllogism is valid iff every pair passes.

use crate::connector::Connector;
use crate::diagram::{BinaryDiagram, TernaryDiagram};

/// Check whether a composed ternary diagram entails a conclusion diagram.
pub fn entails(composed: &TernaryDiagram, conclusion: &BinaryDiagram) -> bool {
    composed
        .pairs()
        .iter()
        .zip(conclusion.0.iter())
        .all(|(&(r1, r2), &c)| pair_entails(r1, r2, c))
}

/// Validity rules for one quadrant pair against the conclusion connector:
///
/// - V1: either region inhabited — the conclusion must assert `Some`.
/// - V2: both regions empty — the conclusion must assert `None`.
/// - V3: otherwise (both unconstrained, or one unconstrained and one
///   empty) — the conclusion must stay `NoInfo`.
///
/// An inhabited and an empty region in the same pair falls under V1: an
/// inhabitant in either region already forces a `Some` conclusion, and
/// the closed connector type leaves no other combination to handle.
fn pair_entails(r1: Connector, r2: Connector, c: Connector) -> bool {
    match (r1, r2) {
        (Connector::Some, _) | (_, Connector::Some) => c == Connector::Some,
        (Connector::None, Connector::None) => c == Connector::None,
        _ => c == Connector::NoInfo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::Connector::{NoInfo, None, Some};

    #[test]
    fn pair_rules_cover_every_combination() {
        for &r1 in &Connector::ALL {
            for &r2 in &Connector::ALL {
                let passing: Vec<Connector> = Connector::ALL
                    .iter()
                    .copied()
                    .filter(|&c| pair_entails(r1, r2, c))
                    .collect();
                // Exactly one conclusion connector satisfies each pair.
                assert_eq!(passing.len(), 1, "pair ({:?}, {:?})", r1, r2);
            }
        }
    }

    #[test]
    fn pair_rule_table() {
        assert!(pair_entails(Some, NoInfo, Some)); // V1
        assert!(pair_entails(NoInfo, Some, Some)); // V1, symmetric
        assert!(pair_entails(Some, None, Some)); // V1 precedence over emptiness
        assert!(pair_entails(None, None, None)); // V2
        assert!(pair_entails(NoInfo, NoInfo, NoInfo)); // V3
        assert!(pair_entails(None, NoInfo, NoInfo)); // V3, mixed
        assert!(pair_entails(NoInfo, None, NoInfo)); // V3, mixed

        assert!(!pair_entails(Some, NoInfo, NoInfo));
        assert!(!pair_entails(None, None, NoInfo));
        assert!(!pair_entails(NoInfo, None, None));
    }
}
