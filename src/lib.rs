//! Syllog: categorical syllogisms via composite proposition diagrams
//!
//! Syllog checks syllogistic validity the way Carroll-style composite
//! proposition diagrams do: each premise becomes a 4-connector diagram,
//! the two premises compose into an 8-connector three-term diagram, and
//! the syllogism is valid iff the composed diagram entails the
//! conclusion's diagram. No lookup table is consulted — validity falls
//! out of the composition algebra.

pub mod ast;
pub mod compose;
pub mod connector;
pub mod diagram;
pub mod elaborate;
pub mod entail;
pub mod error;
pub mod figure;
pub mod lexer;
pub mod mood;
pub mod parser;
pub mod pretty;
pub mod proposition;
pub mod repl;

pub use compose::compose;
pub use connector::Connector;
pub use diagram::{BinaryDiagram, Quadrant, Region, TernaryDiagram};
pub use entail::entails;
pub use error::SyllogError;
pub use figure::Figure;
pub use mood::{Form, Mood};
pub use proposition::{Proposition, Quality, Quantity};

use serde::Serialize;

/// Parse a statement-language source string into surface [`ast::Input`]
pub fn parse(input: &str) -> Result<ast::Input, String> {
    use chumsky::prelude::*;

    let tokens = lexer::lexer()
        .parse(input)
        .map_err(|errs| error::format_lexer_errors(input, errs))?;

    let token_stream: Vec<_> = tokens.iter().map(|(t, s)| (t.clone(), s.clone())).collect();
    let len = input.len();

    parser::parser()
        .parse(chumsky::Stream::from_iter(
            len..len + 1,
            token_stream.into_iter(),
        ))
        .map_err(|errs| error::format_parser_errors(input, errs, &tokens))
}

/// Everything the engine computes for one form: the three premise
/// diagrams, the composed ternary diagram, and the verdict. This is the
/// record a rendering layer consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub form: Form,
    /// Classical mnemonic name, when the form has one (display aid only).
    pub name: Option<&'static str>,
    pub major: BinaryDiagram,
    pub minor: BinaryDiagram,
    pub conclusion: BinaryDiagram,
    pub composed: TernaryDiagram,
    pub valid: bool,
}

/// Run the full diagrammatic pipeline for a mood–figure form.
pub fn analyze(form: Form) -> Analysis {
    let major = BinaryDiagram::for_proposition(form.mood.major);
    let minor = BinaryDiagram::for_proposition(form.mood.minor);
    let conclusion = BinaryDiagram::for_proposition(form.mood.conclusion);
    let composed = compose::compose(minor, major, form.figure);
    let valid = entail::entails(&composed, &conclusion);
    Analysis {
        form,
        name: form.classical_name(),
        major,
        minor,
        conclusion,
        composed,
        valid,
    }
}

/// Validity of a mood–figure form under the diagrammatic procedure.
pub fn is_valid(form: Form) -> bool {
    analyze(form).valid
}
