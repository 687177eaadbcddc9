use syllog::ast::Input;
use syllog::elaborate::elaborate;
use syllog::pretty::{syllogism_text, ternary_table};
use syllog::{analyze, parse};

fn main() {
    let input = "no fish are mammals; some pets are fish; therefore some pets are not mammals";

    println!("=== PARSING ===");
    let syllogism = match parse(input) {
        Ok(Input::Syllogism(s)) => s,
        Ok(Input::Form(_)) => unreachable!("input is three statements"),
        Err(e) => {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    };
    print!("{}", syllogism_text(&syllogism));

    println!("\n=== ELABORATING ===");
    let elaborated = match elaborate(&syllogism) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Elaboration error: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "form {}  (S = {}, M = {}, P = {})",
        elaborated.form, elaborated.subject, elaborated.middle, elaborated.predicate
    );

    println!("\n=== COMPOSING ===");
    let analysis = analyze(elaborated.form);
    print!(
        "{}",
        ternary_table(
            &elaborated.subject,
            &elaborated.middle,
            &elaborated.predicate,
            &analysis.composed,
        )
    );

    println!("\n=== VERDICT ===");
    match analysis.name {
        Some(name) => println!("{} ({}): {}", analysis.form, name, verdict(analysis.valid)),
        None => println!("{}: {}", analysis.form, verdict(analysis.valid)),
    }

    println!("\n=== ROUND-TRIP ===");
    let rendered = syllogism_text(&syllogism);
    match parse(&rendered) {
        Ok(Input::Syllogism(reparsed)) if reparsed == syllogism => {
            println!("pretty-printed text reparses to the same syllogism")
        }
        other => {
            eprintln!("round-trip failed: {:?}", other);
            std::process::exit(1);
        }
    }
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}
