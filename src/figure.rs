//! Syllogistic figures and premise arrangements.
//!
//! The figure fixes how the three terms are ordered inside the two
//! premises. The composer expects the canonical S–M / M–P orders, so each
//! arrangement also says which premises must be reflected first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SyllogError;

/// One of the four canonical term arrangements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Figure {
    First,
    Second,
    Third,
    Fourth,
}

/// Stated term order of the major premise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MajorOrder {
    /// M–P: middle term first.
    MiddlePredicate,
    /// P–M: predicate first.
    PredicateMiddle,
}

/// Stated term order of the minor premise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinorOrder {
    /// S–M: subject first.
    SubjectMiddle,
    /// M–S: middle term first.
    MiddleSubject,
}

/// How the two premises state their terms for a given figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arrangement {
    pub major: MajorOrder,
    pub minor: MinorOrder,
}

impl Arrangement {
    /// The major premise must be reflected when stated P–M.
    pub fn reflect_major(self) -> bool {
        self.major == MajorOrder::PredicateMiddle
    }

    /// The minor premise must be reflected when stated M–S.
    pub fn reflect_minor(self) -> bool {
        self.minor == MinorOrder::MiddleSubject
    }
}

impl Figure {
    /// All four figures in order.
    pub const ALL: [Figure; 4] = [Figure::First, Figure::Second, Figure::Third, Figure::Fourth];

    /// Parse a 1-based figure number. Out-of-range numbers are a hard
    /// error, never undefined behavior.
    pub fn from_number(n: u8) -> Result<Figure, SyllogError> {
        match n {
            1 => Ok(Figure::First),
            2 => Ok(Figure::Second),
            3 => Ok(Figure::Third),
            4 => Ok(Figure::Fourth),
            other => Err(SyllogError::InvalidFigure(other)),
        }
    }

    /// The traditional 1-based number.
    pub fn number(self) -> u8 {
        match self {
            Figure::First => 1,
            Figure::Second => 2,
            Figure::Third => 3,
            Figure::Fourth => 4,
        }
    }

    /// Premise term orders for this figure:
    ///
    /// | figure | major | minor |
    /// |--------|-------|-------|
    /// | 1      | M–P   | S–M   |
    /// | 2      | P–M   | S–M   |
    /// | 3      | M–P   | M–S   |
    /// | 4      | P–M   | M–S   |
    pub fn arrangement(self) -> Arrangement {
        match self {
            Figure::First => Arrangement {
                major: MajorOrder::MiddlePredicate,
                minor: MinorOrder::SubjectMiddle,
            },
            Figure::Second => Arrangement {
                major: MajorOrder::PredicateMiddle,
                minor: MinorOrder::SubjectMiddle,
            },
            Figure::Third => Arrangement {
                major: MajorOrder::MiddlePredicate,
                minor: MinorOrder::MiddleSubject,
            },
            Figure::Fourth => Arrangement {
                major: MajorOrder::PredicateMiddle,
                minor: MinorOrder::MiddleSubject,
            },
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
