//! The three-valued relation state carried by each diagram edge.
//!
//! A connector records what a proposition (or a composition of two
//! propositions) says about one quadrant of a diagram: the region is
//! known inhabited, known empty, or unconstrained.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation state of one diagram quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Connector {
    /// At least one element exists in the region.
    Some,
    /// The region is known empty.
    None,
    /// The proposition says nothing about the region.
    NoInfo,
}

impl Connector {
    /// All connector states, in a fixed order (useful for exhaustive tests).
    pub const ALL: [Connector; 3] = [Connector::Some, Connector::None, Connector::NoInfo];

    /// Combine two connectors that constrain the same region (rules C1-C3).
    ///
    /// Emptiness is absorbing: a region known empty by either operand
    /// stays empty, even against an asserted inhabitant. Otherwise an
    /// inhabitant propagates past an unconstrained operand, and two
    /// unconstrained operands stay unconstrained. Commutative by
    /// construction.
    pub fn compose(self, other: Connector) -> Connector {
        match (self, other) {
            (Connector::None, _) | (_, Connector::None) => Connector::None,
            (Connector::Some, _) | (_, Connector::Some) => Connector::Some,
            (Connector::NoInfo, Connector::NoInfo) => Connector::NoInfo,
        }
    }

    /// True for `Some` and `None`, the states that actually constrain a
    /// region. A canonical premise diagram carries exactly one.
    pub fn is_informative(self) -> bool {
        !matches!(self, Connector::NoInfo)
    }

    /// Line glyph used by the text renderer. Solid for an inhabited
    /// region, dashed for an empty one, double for no information —
    /// the same convention the CPD paper draws with.
    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Some => "───────",
            Connector::None => "┄┄┄┄┄┄┄",
            Connector::NoInfo => "═══════",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connector::Some => write!(f, "some"),
            Connector::None => write!(f, "none"),
            Connector::NoInfo => write!(f, "no-info"),
        }
    }
}
