//! Moods and mood–figure forms.
//!
//! A mood is the triple of proposition kinds (major, minor, conclusion).
//! The three-letter string is a derived projection of the triple, never
//! stored alongside it. A form adds the figure, written `AAA-1`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyllogError;
use crate::figure::Figure;
use crate::proposition::Proposition;

/// The three proposition kinds of a syllogism, conclusion last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mood {
    pub major: Proposition,
    pub minor: Proposition,
    pub conclusion: Proposition,
}

impl Mood {
    pub fn new(major: Proposition, minor: Proposition, conclusion: Proposition) -> Mood {
        Mood {
            major,
            minor,
            conclusion,
        }
    }

    /// The derived three-letter code, e.g. `AAA`.
    pub fn letters(&self) -> String {
        let mut s = String::with_capacity(3);
        s.push(self.major.letter());
        s.push(self.minor.letter());
        s.push(self.conclusion.letter());
        s
    }

    /// All 64 moods, in letter order.
    pub fn all() -> impl Iterator<Item = Mood> {
        Proposition::ALL.into_iter().flat_map(|major| {
            Proposition::ALL.into_iter().flat_map(move |minor| {
                Proposition::ALL
                    .into_iter()
                    .map(move |conclusion| Mood::new(major, minor, conclusion))
            })
        })
    }
}

impl FromStr for Mood {
    type Err = SyllogError;

    /// Parse exactly three letters from {A, E, I, O}. Anything else is a
    /// hard error — no per-position defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || SyllogError::InvalidMood(s.to_string());
        let mut chars = s.chars();
        let major = chars.next().ok_or_else(bad)?;
        let minor = chars.next().ok_or_else(bad)?;
        let conclusion = chars.next().ok_or_else(bad)?;
        if chars.next().is_some() {
            return Err(bad());
        }
        Ok(Mood::new(
            Proposition::from_letter(major).map_err(|_| bad())?,
            Proposition::from_letter(minor).map_err(|_| bad())?,
            Proposition::from_letter(conclusion).map_err(|_| bad())?,
        ))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

/// A mood–figure pair, written `AAA-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Form {
    pub mood: Mood,
    pub figure: Figure,
}

impl Form {
    pub fn new(mood: Mood, figure: Figure) -> Form {
        Form { mood, figure }
    }

    /// All 256 mood–figure combinations, in letter-then-figure order.
    pub fn all() -> impl Iterator<Item = Form> {
        Mood::all()
            .flat_map(|mood| Figure::ALL.into_iter().map(move |figure| Form::new(mood, figure)))
    }

    /// The classical mnemonic name of this form, if it has one. A display
    /// aid only — validity always comes from the diagrammatic procedure.
    ///
    /// Note the two existential-import forms, Bramantip (AAI-4) and
    /// Fesapo (EAO-4), carry names from the traditional catalogue even
    /// though the diagrams reject them: composite proposition diagrams
    /// assume no term is inhabited unless a premise says so.
    pub fn classical_name(&self) -> Option<&'static str> {
        let name = match (self.mood.letters().as_str(), self.figure.number()) {
            ("AAA", 1) => "Barbara",
            ("EAE", 1) => "Celarent",
            ("AII", 1) => "Darii",
            ("EIO", 1) => "Ferio",
            ("EAE", 2) => "Cesare",
            ("AEE", 2) => "Camestres",
            ("EIO", 2) => "Festino",
            ("AOO", 2) => "Baroco",
            ("IAI", 3) => "Disamis",
            ("AII", 3) => "Datisi",
            ("OAO", 3) => "Bocardo",
            ("EIO", 3) => "Ferison",
            ("AAI", 4) => "Bramantip",
            ("AEE", 4) => "Camenes",
            ("IAI", 4) => "Dimaris",
            ("EAO", 4) => "Fesapo",
            ("EIO", 4) => "Fresison",
            _ => return None,
        };
        Some(name)
    }
}

impl FromStr for Form {
    type Err = SyllogError;

    /// Parse a form code like `AAA-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mood_part, figure_part) = s
            .split_once('-')
            .ok_or_else(|| SyllogError::InvalidForm(s.to_string()))?;
        let mood: Mood = mood_part
            .parse()
            .map_err(|_| SyllogError::InvalidForm(s.to_string()))?;
        let number: u8 = figure_part
            .parse()
            .map_err(|_| SyllogError::InvalidForm(s.to_string()))?;
        let figure = Figure::from_number(number)?;
        Ok(Form::new(mood, figure))
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mood, self.figure)
    }
}
