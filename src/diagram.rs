//! Binary and ternary composite proposition diagrams.
//!
//! A binary diagram carries one connector per quadrant of a two-term
//! region layout; a ternary diagram carries one per octant of the
//! three-term layout produced by composing two premises.

use serde::{Deserialize, Serialize};

use crate::connector::Connector;
use crate::proposition::Proposition;

/// Quadrants of a two-term diagram, in tuple-index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// Both terms apply (in ∩ in).
    BothIn,
    /// Only the first term applies (in ∩ out).
    FirstOnly,
    /// Only the second term applies (out ∩ in).
    SecondOnly,
    /// Neither term applies (out ∩ out).
    BothOut,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BothIn,
        Quadrant::FirstOnly,
        Quadrant::SecondOnly,
        Quadrant::BothOut,
    ];

    /// Tuple index of this quadrant.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Region label for a pair of term names, e.g. `S∩¬P`.
    pub fn label(self, first: &str, second: &str) -> String {
        match self {
            Quadrant::BothIn => format!("{}∩{}", first, second),
            Quadrant::FirstOnly => format!("{}∩¬{}", first, second),
            Quadrant::SecondOnly => format!("¬{}∩{}", first, second),
            Quadrant::BothOut => format!("¬{}∩¬{}", first, second),
        }
    }
}

/// The 4-connector diagram of a two-term categorical proposition.
///
/// Connector order follows [`Quadrant::ALL`]:
/// `[in∩in, in∩out, out∩in, out∩out]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryDiagram(pub [Connector; 4]);

impl BinaryDiagram {
    /// Canonical diagram for a proposition kind:
    ///
    /// - A constrains in∩out empty ("All S are P": nothing is S but not P)
    /// - E constrains in∩in empty
    /// - I asserts in∩in inhabited
    /// - O asserts in∩out inhabited
    ///
    /// Every other quadrant is unconstrained, so each diagram carries
    /// exactly one informative connector.
    pub fn for_proposition(p: Proposition) -> BinaryDiagram {
        use crate::connector::Connector::{NoInfo, None, Some};
        match p {
            Proposition::A => BinaryDiagram([NoInfo, None, NoInfo, NoInfo]),
            Proposition::E => BinaryDiagram([None, NoInfo, NoInfo, NoInfo]),
            Proposition::I => BinaryDiagram([Some, NoInfo, NoInfo, NoInfo]),
            Proposition::O => BinaryDiagram([NoInfo, Some, NoInfo, NoInfo]),
        }
    }

    /// Swap which term plays "row" and which "column": the two
    /// single-term quadrants trade places while in∩in and out∩out stay
    /// fixed. An involution.
    pub fn reflect(self) -> BinaryDiagram {
        let [a, b, c, d] = self.0;
        BinaryDiagram([a, c, b, d])
    }

    /// Connector at a quadrant.
    pub fn at(&self, q: Quadrant) -> Connector {
        self.0[q.index()]
    }

    /// Number of informative (`Some`/`None`) connectors.
    pub fn informative_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_informative()).count()
    }
}

/// Octants of the composed three-term (S, M, P) diagram, in tuple-index
/// order. Consecutive octant pairs share an S/P quadrant and differ only
/// in whether M applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// S∩M∩P
    AllThree,
    /// S∩¬M∩P
    SubjectPredicate,
    /// S∩M∩¬P
    SubjectMiddle,
    /// S∩¬M∩¬P
    SubjectOnly,
    /// ¬S∩M∩P
    MiddlePredicate,
    /// ¬S∩¬M∩P
    PredicateOnly,
    /// ¬S∩M∩¬P
    MiddleOnly,
    /// ¬S∩¬M∩¬P
    Outside,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::AllThree,
        Region::SubjectPredicate,
        Region::SubjectMiddle,
        Region::SubjectOnly,
        Region::MiddlePredicate,
        Region::PredicateOnly,
        Region::MiddleOnly,
        Region::Outside,
    ];

    /// Tuple index of this region.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Region label for concrete term names, e.g. `S∩¬M∩P`.
    pub fn label(self, s: &str, m: &str, p: &str) -> String {
        let (s_in, m_in, p_in) = self.membership();
        let part = |included: bool, term: &str| {
            if included {
                term.to_string()
            } else {
                format!("¬{}", term)
            }
        };
        format!("{}∩{}∩{}", part(s_in, s), part(m_in, m), part(p_in, p))
    }

    /// Whether S, M, P apply in this region.
    pub fn membership(self) -> (bool, bool, bool) {
        match self {
            Region::AllThree => (true, true, true),
            Region::SubjectPredicate => (true, false, true),
            Region::SubjectMiddle => (true, true, false),
            Region::SubjectOnly => (true, false, false),
            Region::MiddlePredicate => (false, true, true),
            Region::PredicateOnly => (false, false, true),
            Region::MiddleOnly => (false, true, false),
            Region::Outside => (false, false, false),
        }
    }

    /// The S/P quadrant this region projects onto once M is forgotten.
    pub fn quadrant(self) -> Quadrant {
        let (s_in, _, p_in) = self.membership();
        match (s_in, p_in) {
            (true, true) => Quadrant::BothIn,
            (true, false) => Quadrant::FirstOnly,
            (false, true) => Quadrant::SecondOnly,
            (false, false) => Quadrant::BothOut,
        }
    }
}

/// The 8-connector diagram obtained by composing two premises that share
/// a middle term. Connector order follows [`Region::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TernaryDiagram(pub [Connector; 8]);

impl TernaryDiagram {
    /// Connector at a region.
    pub fn at(&self, r: Region) -> Connector {
        self.0[r.index()]
    }

    /// The four octant pairs, grouped by the S/P quadrant they project
    /// onto, in [`Quadrant::ALL`] order. Within each pair the two
    /// connectors differ only by M membership.
    pub fn pairs(&self) -> [(Connector, Connector); 4] {
        let c = self.0;
        [(c[0], c[1]), (c[2], c[3]), (c[4], c[5]), (c[6], c[7])]
    }
}
