//! Unit tests for the pretty-printer

use syllog::ast::{Input, Statement, Syllogism};
use syllog::diagram::BinaryDiagram;
use syllog::parse;
use syllog::pretty::{binary_table, statement_line, syllogism_text, ternary_table};
use syllog::proposition::Proposition;
use syllog::{analyze, mood::Form};

#[test]
fn test_statement_line_capitalizes() {
    let stmt = Statement::new(Proposition::A, "men", "mortal");
    assert_eq!(statement_line(&stmt), "All men are mortal");

    let stmt = Statement::new(Proposition::O, "pets", "mammals");
    assert_eq!(statement_line(&stmt), "Some pets are not mammals");
}

#[test]
fn test_syllogism_text_layout() {
    let syllogism = Syllogism {
        premises: [
            Statement::new(Proposition::E, "fish", "mammals"),
            Statement::new(Proposition::I, "pets", "fish"),
        ],
        conclusion: Statement::new(Proposition::O, "pets", "mammals"),
    };
    assert_eq!(
        syllogism_text(&syllogism),
        "No fish are mammals;\nSome pets are fish;\ntherefore Some pets are not mammals.\n"
    );
}

#[test]
fn test_rendered_syllogism_parses_back() {
    let syllogism = Syllogism {
        premises: [
            Statement::new(Proposition::A, "men", "mortal"),
            Statement::new(Proposition::A, "greeks", "men"),
        ],
        conclusion: Statement::new(Proposition::A, "greeks", "mortal"),
    };
    let rendered = syllogism_text(&syllogism);
    match parse(&rendered) {
        Ok(Input::Syllogism(parsed)) => assert_eq!(parsed, syllogism),
        other => panic!("round-trip failed on {:?}: {:?}", rendered, other),
    }
}

#[test]
fn test_binary_table_rows() {
    let diagram = BinaryDiagram::for_proposition(Proposition::A);
    let table = binary_table("S", "P", &diagram);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("S∩P"));
    assert!(lines[0].contains("no-info"));
    assert!(lines[1].contains("S∩¬P"));
    assert!(lines[1].contains("none"));
    assert!(lines[2].contains("¬S∩P"));
    assert!(lines[3].contains("¬S∩¬P"));
}

#[test]
fn test_binary_table_aligns_uneven_labels() {
    let diagram = BinaryDiagram::for_proposition(Proposition::I);
    let table = binary_table("greeks", "mortal", &diagram);
    // Glyph columns line up even though ¬-prefixed labels are longer
    let glyph_cols: Vec<usize> = table
        .lines()
        .map(|line| {
            line.chars()
                .take_while(|c| !matches!(c, '─' | '┄' | '═'))
                .count()
        })
        .collect();
    assert!(glyph_cols.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_ternary_table_rows() {
    let analysis = analyze("EIO-1".parse::<Form>().unwrap());
    let table = ternary_table("S", "M", "P", &analysis.composed);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains("S∩M∩P"));
    assert!(lines[7].contains("¬S∩¬M∩¬P"));
}
