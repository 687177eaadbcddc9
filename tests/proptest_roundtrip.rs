//! Property tests for the surface-syntax roundtrip (pretty -> parse)

mod generators;

use proptest::prelude::*;

use generators::{arb_proposition, arb_term};
use syllog::ast::{Input, Statement, Syllogism};
use syllog::elaborate::elaborate;
use syllog::figure::Figure;
use syllog::parse;
use syllog::pretty::syllogism_text;
use syllog::proposition::Proposition;

/// Words the lexer treats as keywords, which therefore cannot be terms.
const KEYWORDS: &[&str] = &[
    "all",
    "every",
    "no",
    "some",
    "are",
    "is",
    "not",
    "therefore",
    "so",
    "hence",
];

fn usable_terms(s: &str, m: &str, p: &str) -> bool {
    let distinct = s != m && s != p && m != p;
    distinct && [s, m, p].iter().all(|t| !KEYWORDS.contains(t))
}

/// A first-figure syllogism over the given terms: major M–P, minor S–M.
fn first_figure(
    major: Proposition,
    minor: Proposition,
    conclusion: Proposition,
    s: &str,
    m: &str,
    p: &str,
) -> Syllogism {
    Syllogism {
        premises: [
            Statement::new(major, m, p),
            Statement::new(minor, s, m),
        ],
        conclusion: Statement::new(conclusion, s, p),
    }
}

proptest! {
    #[test]
    fn rendered_syllogism_reparses_to_the_same_ast(
        major in arb_proposition(),
        minor in arb_proposition(),
        conclusion in arb_proposition(),
        s in arb_term(),
        m in arb_term(),
        p in arb_term(),
    ) {
        prop_assume!(usable_terms(&s, &m, &p));
        let syllogism = first_figure(major, minor, conclusion, &s, &m, &p);
        let rendered = syllogism_text(&syllogism);
        match parse(&rendered) {
            Ok(Input::Syllogism(reparsed)) => prop_assert_eq!(reparsed, syllogism),
            other => prop_assert!(false, "reparse of {:?} gave {:?}", rendered, other),
        }
    }

    #[test]
    fn roundtrip_preserves_elaboration(
        major in arb_proposition(),
        minor in arb_proposition(),
        conclusion in arb_proposition(),
        s in arb_term(),
        m in arb_term(),
        p in arb_term(),
    ) {
        prop_assume!(usable_terms(&s, &m, &p));
        let syllogism = first_figure(major, minor, conclusion, &s, &m, &p);
        let elaborated = elaborate(&syllogism).unwrap();
        prop_assert_eq!(elaborated.form.figure, Figure::First);
        prop_assert_eq!(elaborated.form.mood.letters(), format!(
            "{}{}{}",
            major.letter(),
            minor.letter(),
            conclusion.letter()
        ));

        let rendered = syllogism_text(&syllogism);
        let reparsed = match parse(&rendered) {
            Ok(Input::Syllogism(reparsed)) => reparsed,
            other => return Err(TestCaseError::fail(format!(
                "reparse of {:?} gave {:?}",
                rendered, other
            ))),
        };
        prop_assert_eq!(elaborate(&reparsed).unwrap(), elaborated);
    }
}
