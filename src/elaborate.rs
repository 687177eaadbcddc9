//! Elaboration: from surface statements to a mood–figure form.
//!
//! Given three categorical statements, work out which premise is major
//! and which minor, identify the three terms, and derive the figure from
//! where the middle term sits in each premise. Statements whose terms do
//! not form a syllogism are rejected.

use thiserror::Error;

use crate::ast::{Statement, Syllogism};
use crate::figure::Figure;
use crate::mood::{Form, Mood};

/// A surface syllogism resolved into engine inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Elaborated {
    pub form: Form,
    /// Subject of the conclusion (S).
    pub subject: String,
    /// The term shared by the premises (M).
    pub middle: String,
    /// Predicate of the conclusion (P).
    pub predicate: String,
}

/// Why three statements fail to form a syllogism.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElaborationError {
    #[error("conclusion must relate two distinct terms, but '{0}' appears twice")]
    DegenerateConclusion(String),

    #[error("premise \"{0}\" relates '{1}' to itself")]
    DegeneratePremise(String, String),

    #[error("premise \"{0}\" mentions both conclusion terms, leaving no middle term")]
    PremiseCoversConclusion(String),

    #[error("premise \"{0}\" mentions neither conclusion term")]
    UnrelatedPremise(String),

    #[error("no premise mentions the conclusion predicate '{0}'")]
    MissingMajor(String),

    #[error("no premise mentions the conclusion subject '{0}'")]
    MissingMinor(String),

    #[error("premises disagree on the middle term: '{0}' vs '{1}'")]
    MiddleMismatch(String, String),
}

/// Resolve a surface syllogism into a form plus its three terms.
///
/// The conclusion fixes S (its subject) and P (its predicate). The
/// premise mentioning P is the major premise, the one mentioning S the
/// minor — in either stated order. The figure follows from the stated
/// position of M in each premise:
///
/// | major | minor | figure |
/// |-------|-------|--------|
/// | M–P   | S–M   | 1      |
/// | P–M   | S–M   | 2      |
/// | M–P   | M–S   | 3      |
/// | P–M   | M–S   | 4      |
pub fn elaborate(syllogism: &Syllogism) -> Result<Elaborated, ElaborationError> {
    let conclusion = &syllogism.conclusion;
    let subject = conclusion.subject.clone();
    let predicate = conclusion.predicate.clone();

    if subject == predicate {
        return Err(ElaborationError::DegenerateConclusion(subject));
    }

    for premise in &syllogism.premises {
        if premise.subject == premise.predicate {
            return Err(ElaborationError::DegeneratePremise(
                premise.to_string(),
                premise.subject.clone(),
            ));
        }
    }

    let (major, minor) = classify_premises(syllogism, &subject, &predicate)?;

    // The remaining term of each premise must be one and the same middle.
    let major_middle = major
        .other_term(&predicate)
        .expect("classified major premise mentions the predicate")
        .to_string();
    let minor_middle = minor
        .other_term(&subject)
        .expect("classified minor premise mentions the subject")
        .to_string();
    if major_middle != minor_middle {
        return Err(ElaborationError::MiddleMismatch(major_middle, minor_middle));
    }
    let middle = major_middle;

    let major_middle_first = major.subject == middle;
    let minor_subject_first = minor.subject == subject;
    let figure = match (major_middle_first, minor_subject_first) {
        (true, true) => Figure::First,
        (false, true) => Figure::Second,
        (true, false) => Figure::Third,
        (false, false) => Figure::Fourth,
    };

    let mood = Mood::new(major.kind, minor.kind, conclusion.kind);

    Ok(Elaborated {
        form: Form::new(mood, figure),
        subject,
        middle,
        predicate,
    })
}

/// Split the two premises into (major, minor) by which conclusion term
/// each mentions.
fn classify_premises<'a>(
    syllogism: &'a Syllogism,
    subject: &str,
    predicate: &str,
) -> Result<(&'a Statement, &'a Statement), ElaborationError> {
    let mut major = None;
    let mut minor = None;

    for premise in &syllogism.premises {
        let has_subject = premise.mentions(subject);
        let has_predicate = premise.mentions(predicate);
        match (has_subject, has_predicate) {
            (true, true) => {
                return Err(ElaborationError::PremiseCoversConclusion(
                    premise.to_string(),
                ))
            }
            (false, false) => {
                return Err(ElaborationError::UnrelatedPremise(premise.to_string()))
            }
            (false, true) => major = Some(premise),
            (true, false) => minor = Some(premise),
        }
    }

    match (major, minor) {
        (Some(major), Some(minor)) => Ok((major, minor)),
        (None, _) => Err(ElaborationError::MissingMajor(predicate.to_string())),
        (_, None) => Err(ElaborationError::MissingMinor(subject.to_string())),
    }
}
