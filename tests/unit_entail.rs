//! End-to-end validity tests for the diagrammatic procedure

use syllog::is_valid;
use syllog::mood::Form;

fn form(code: &str) -> Form {
    code.parse().expect("test form code")
}

/// The fifteen forms valid without existential import. This is the
/// reference oracle for the full sweep below; the engine never consults
/// it at runtime.
const VALID_FORMS: [&str; 15] = [
    "AAA-1", // Barbara
    "EAE-1", // Celarent
    "AII-1", // Darii
    "EIO-1", // Ferio
    "EAE-2", // Cesare
    "AEE-2", // Camestres
    "EIO-2", // Festino
    "AOO-2", // Baroco
    "IAI-3", // Disamis
    "AII-3", // Datisi
    "OAO-3", // Bocardo
    "EIO-3", // Ferison
    "AEE-4", // Camenes
    "IAI-4", // Dimaris
    "EIO-4", // Fresison
];

#[test]
fn test_first_figure_perfect_forms() {
    assert!(is_valid(form("AAA-1"))); // Barbara
    assert!(is_valid(form("EAE-1"))); // Celarent
    assert!(is_valid(form("AII-1"))); // Darii
    assert!(is_valid(form("EIO-1"))); // Ferio
}

#[test]
fn test_baroco() {
    assert!(is_valid(form("AOO-2")));
}

#[test]
fn test_undistributed_middle_is_invalid() {
    // AAA-2: both premises empty a ¬M region, saying nothing that links
    // S to P through M.
    assert!(!is_valid(form("AAA-2")));
}

#[test]
fn test_existential_import_forms_are_rejected() {
    // Bramantip (AAI-4) and Fesapo (EAO-4) are valid only if universal
    // premises import the existence of their subjects. Composite
    // proposition diagrams never populate a region off a universal
    // premise, so both fail the entailment check.
    assert!(!is_valid(form("AAI-4")));
    assert!(!is_valid(form("EAO-4")));

    // Same for the weakened ("subaltern") first-figure forms.
    assert!(!is_valid(form("AAI-1"))); // Barbari
    assert!(!is_valid(form("EAO-1"))); // Celaront
}

#[test]
fn test_full_sweep_against_oracle() {
    // Every one of the 256 mood–figure combinations must agree with the
    // fifteen-form oracle.
    let valid: Vec<Form> = VALID_FORMS.iter().map(|code| form(code)).collect();

    let mut checked = 0usize;
    for candidate in Form::all() {
        let expected = valid.contains(&candidate);
        assert_eq!(
            is_valid(candidate),
            expected,
            "form {} disagreed with the oracle",
            candidate
        );
        checked += 1;
    }
    assert_eq!(checked, 256);
}

#[test]
fn test_conclusion_must_not_overclaim() {
    // Barbara's premises entail an A conclusion, not an I one: the
    // diagrams leave S∩P unconstrained, so claiming an inhabitant there
    // overclaims.
    assert!(!is_valid(form("AAI-1")));
    // Nor can the conclusion understate: an A conclusion carries a None
    // that the composed diagram must actually justify.
    assert!(!is_valid(form("IIA-1")));
}

#[test]
fn test_classical_names() {
    assert_eq!(form("AAA-1").classical_name(), Some("Barbara"));
    assert_eq!(form("AOO-2").classical_name(), Some("Baroco"));
    assert_eq!(form("EIO-4").classical_name(), Some("Fresison"));
    assert_eq!(form("AAA-2").classical_name(), None);

    // The seventeen traditionally named forms include the two
    // existential-import ones the engine rejects.
    let named = Form::all().filter(|f| f.classical_name().is_some()).count();
    assert_eq!(named, 17);
}
