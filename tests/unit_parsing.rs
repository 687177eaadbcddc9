//! Unit tests for the statement-language lexer and parser

use syllog::ast::{Input, Statement};
use syllog::figure::Figure;
use syllog::parse;
use syllog::proposition::Proposition;

fn parse_syllogism(source: &str) -> syllog::ast::Syllogism {
    match parse(source) {
        Ok(Input::Syllogism(s)) => s,
        other => panic!("expected a syllogism from {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_parse_form_code() {
    match parse("AAA-1") {
        Ok(Input::Form(form)) => {
            assert_eq!(form.mood.letters(), "AAA");
            assert_eq!(form.figure, Figure::First);
        }
        other => panic!("expected a form, got {:?}", other),
    }
}

#[test]
fn test_parse_form_code_rejects_bad_letters_and_figures() {
    assert!(parse("XYZ-1").is_err());
    assert!(parse("AAA-5").is_err());
    assert!(parse("AAA-0").is_err());
    assert!(parse("AA-1").is_err());
    // Figures far outside u8 range must error, not wrap
    assert!(parse("AAA-4000").is_err());
}

#[test]
fn test_parse_syllogism_statements() {
    let syllogism =
        parse_syllogism("all men are mortal; all greeks are men; therefore all greeks are mortal");

    assert_eq!(
        syllogism.premises[0],
        Statement::new(Proposition::A, "men", "mortal")
    );
    assert_eq!(
        syllogism.premises[1],
        Statement::new(Proposition::A, "greeks", "men")
    );
    assert_eq!(
        syllogism.conclusion,
        Statement::new(Proposition::A, "greeks", "mortal")
    );
}

#[test]
fn test_parse_all_four_statement_kinds() {
    let syllogism = parse_syllogism(
        "no fish are mammals; some pets are fish; therefore some pets are not mammals",
    );
    assert_eq!(syllogism.premises[0].kind, Proposition::E);
    assert_eq!(syllogism.premises[1].kind, Proposition::I);
    assert_eq!(syllogism.conclusion.kind, Proposition::O);
}

#[test]
fn test_parse_is_case_insensitive_on_keywords() {
    let syllogism =
        parse_syllogism("All men are mortal; All greeks are men; Therefore all greeks are mortal");
    assert_eq!(syllogism.premises[0].subject, "men");
}

#[test]
fn test_parse_alternate_separators_and_synonyms() {
    // Commas as separators, "every"/"is" for "all"/"are", "so" for "therefore"
    let syllogism =
        parse_syllogism("every whale is mammal, no reptiles are mammal, so no reptiles are whale");
    assert_eq!(syllogism.premises[0].kind, Proposition::A);
    assert_eq!(syllogism.premises[0].subject, "whale");
    assert_eq!(syllogism.conclusion.kind, Proposition::E);

    // Trailing period and "hence"
    let syllogism = parse_syllogism(
        "all men are mortal; all greeks are men; hence all greeks are mortal.",
    );
    assert_eq!(syllogism.conclusion.subject, "greeks");
}

#[test]
fn test_parse_multi_word_terms() {
    let syllogism = parse_syllogism(
        "all old men are wise people; some sailors are old men; therefore some sailors are wise people",
    );
    assert_eq!(syllogism.premises[0].subject, "old men");
    assert_eq!(syllogism.premises[0].predicate, "wise people");
    assert_eq!(syllogism.conclusion.predicate, "wise people");
}

#[test]
fn test_parse_without_therefore() {
    let syllogism = parse_syllogism("no M are P; some S are M; some S are not P");
    assert_eq!(syllogism.conclusion.kind, Proposition::O);
}

#[test]
fn test_empty_and_blank_input_error_cleanly() {
    // Inputs that lex to zero tokens must come back as plain errors,
    // with nothing for a source report to point at
    let err = parse("").unwrap_err();
    assert!(!err.is_empty());
    assert!(parse("   ").is_err());
    assert!(parse("// just a comment").is_err());
    assert!(parse("\n\n").is_err());
}

#[test]
fn test_overflowing_figure_diagnostic_echoes_the_literal() {
    let err = parse("AAA-4000").unwrap_err();
    assert!(err.contains("4000"), "diagnostic was: {}", err);
    assert!(!err.contains("255"), "diagnostic was: {}", err);
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert!(parse("").is_err());
    assert!(parse("all men are").is_err());
    assert!(parse("all men are mortal").is_err()); // one statement is not a syllogism
    assert!(parse("mortal men all are; x; y").is_err());
    assert!(parse("all men are mortal some").is_err());
}

#[test]
fn test_parse_with_comments() {
    let syllogism = parse_syllogism(
        "// Barbara, the classic\nall men are mortal; all greeks are men; therefore all greeks are mortal",
    );
    assert_eq!(syllogism.premises[0].predicate, "mortal");
}
