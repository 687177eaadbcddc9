//! Categorical propositions and the A/E/I/O letter bijection.
//!
//! A categorical proposition is a (quality, quantity) pair; the four
//! members of the cross product carry the traditional letters A, E, I, O.
//! The letters are a derived projection — the enum is the source of truth.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyllogError;

/// Universal ("all"/"no") or particular ("some") scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Universal,
    Particular,
}

/// Affirmative or negative mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Affirmative,
    Negative,
}

/// One of the four categorical proposition kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proposition {
    /// Universal affirmative: "All S are P".
    A,
    /// Universal negative: "No S are P".
    E,
    /// Particular affirmative: "Some S are P".
    I,
    /// Particular negative: "Some S are not P".
    O,
}

impl Proposition {
    /// The four kinds in letter order.
    pub const ALL: [Proposition; 4] = [
        Proposition::A,
        Proposition::E,
        Proposition::I,
        Proposition::O,
    ];

    /// Build a proposition from its quality and quantity. Total: the
    /// cross product has exactly four members.
    pub fn from_parts(quality: Quality, quantity: Quantity) -> Proposition {
        match (quality, quantity) {
            (Quality::Universal, Quantity::Affirmative) => Proposition::A,
            (Quality::Universal, Quantity::Negative) => Proposition::E,
            (Quality::Particular, Quantity::Affirmative) => Proposition::I,
            (Quality::Particular, Quantity::Negative) => Proposition::O,
        }
    }

    pub fn quality(self) -> Quality {
        match self {
            Proposition::A | Proposition::E => Quality::Universal,
            Proposition::I | Proposition::O => Quality::Particular,
        }
    }

    pub fn quantity(self) -> Quantity {
        match self {
            Proposition::A | Proposition::I => Quantity::Affirmative,
            Proposition::E | Proposition::O => Quantity::Negative,
        }
    }

    /// The traditional letter for this kind.
    pub fn letter(self) -> char {
        match self {
            Proposition::A => 'A',
            Proposition::E => 'E',
            Proposition::I => 'I',
            Proposition::O => 'O',
        }
    }

    /// Inverse of [`Proposition::letter`]. Unrecognized letters are a hard
    /// error, never a silent fallback.
    pub fn from_letter(c: char) -> Result<Proposition, SyllogError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Proposition::A),
            'E' => Ok(Proposition::E),
            'I' => Ok(Proposition::I),
            'O' => Ok(Proposition::O),
            other => Err(SyllogError::InvalidLetter(other)),
        }
    }
}

impl FromStr for Proposition {
    type Err = SyllogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Proposition::from_letter(c),
            _ => Err(SyllogError::InvalidLetter(s.chars().next().unwrap_or('?'))),
        }
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
