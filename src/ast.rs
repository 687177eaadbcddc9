//! Surface syntax for categorical statements.
//!
//! The parser produces these types from statement-language text; the
//! elaborator turns a [`Syllogism`] into a mood–figure form.

use std::fmt;

use crate::mood::Form;
use crate::proposition::Proposition;

/// A categorical statement: a proposition kind applied to two term labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub kind: Proposition,
    /// The stated first term ("subject position" of the sentence).
    pub subject: String,
    /// The stated second term.
    pub predicate: String,
}

impl Statement {
    pub fn new(kind: Proposition, subject: impl Into<String>, predicate: impl Into<String>) -> Statement {
        Statement {
            kind,
            subject: subject.into(),
            predicate: predicate.into(),
        }
    }

    /// Whether the statement mentions a term, in either position.
    pub fn mentions(&self, term: &str) -> bool {
        self.subject == term || self.predicate == term
    }

    /// The other term of the statement, given one of its terms.
    pub fn other_term(&self, term: &str) -> Option<&str> {
        if self.subject == term {
            Some(&self.predicate)
        } else if self.predicate == term {
            Some(&self.subject)
        } else {
            None
        }
    }
}

impl fmt::Display for Statement {
    /// Renders back to surface syntax; parse–display round-trips.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Proposition::A => write!(f, "all {} are {}", self.subject, self.predicate),
            Proposition::E => write!(f, "no {} are {}", self.subject, self.predicate),
            Proposition::I => write!(f, "some {} are {}", self.subject, self.predicate),
            Proposition::O => write!(f, "some {} are not {}", self.subject, self.predicate),
        }
    }
}

/// Three statements, conclusion last. The premises are in stated order;
/// the elaborator works out which is major and which minor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syllogism {
    pub premises: [Statement; 2],
    pub conclusion: Statement,
}

impl fmt::Display for Syllogism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; therefore {}",
            self.premises[0], self.premises[1], self.conclusion
        )
    }
}

/// One unit of surface input: either a full syllogism in statements, or a
/// bare mood–figure code such as `AAA-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Syllogism(Syllogism),
    Form(Form),
}
