//! Shared proptest generators for syllog tests

use proptest::prelude::*;

use syllog::connector::Connector;
use syllog::diagram::BinaryDiagram;
use syllog::figure::Figure;
use syllog::mood::{Form, Mood};
use syllog::proposition::Proposition;

/// Any of the four proposition kinds
pub fn arb_proposition() -> impl Strategy<Value = Proposition> {
    prop::sample::select(Proposition::ALL.to_vec())
}

/// Any of the four figures
pub fn arb_figure() -> impl Strategy<Value = Figure> {
    prop::sample::select(Figure::ALL.to_vec())
}

/// Any of the three connector states
pub fn arb_connector() -> impl Strategy<Value = Connector> {
    prop::sample::select(Connector::ALL.to_vec())
}

/// Any mood (64 combinations)
pub fn arb_mood() -> impl Strategy<Value = Mood> {
    (arb_proposition(), arb_proposition(), arb_proposition())
        .prop_map(|(major, minor, conclusion)| Mood::new(major, minor, conclusion))
}

/// Any mood–figure form (256 combinations)
pub fn arb_form() -> impl Strategy<Value = Form> {
    (arb_mood(), arb_figure()).prop_map(|(mood, figure)| Form::new(mood, figure))
}

/// An arbitrary 4-tuple of connectors — not necessarily the diagram of
/// any proposition, for exercising reflection and composition totality
pub fn arb_binary_diagram() -> impl Strategy<Value = BinaryDiagram> {
    [
        arb_connector(),
        arb_connector(),
        arb_connector(),
        arb_connector(),
    ]
    .prop_map(BinaryDiagram)
}

/// A lowercase ASCII term label
pub fn arb_term() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}
