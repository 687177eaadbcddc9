use syllog::analyze;
use syllog::mood::Form;

fn main() {
    println!("=== SWEEPING ALL 256 FORMS ===\n");

    let mut valid = 0;
    for form in Form::all() {
        let analysis = analyze(form);
        if analysis.valid {
            valid += 1;
            match analysis.name {
                Some(name) => println!("{}  ({})", form, name),
                None => println!("{}", form),
            }
        }
    }

    println!("\n{} of 256 forms are valid", valid);
}
