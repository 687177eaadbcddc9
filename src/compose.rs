//! Composition of two premise diagrams into a ternary diagram.
//!
//! The minor premise relates S to M, the major premise M to P. After the
//! figure's reflections both diagrams are in canonical S–M / M–P order,
//! and each of the eight three-term regions draws one connector from each
//! premise: the minor contributes its (S, M) quadrant, the major its
//! (M, P) quadrant, and the two are combined with
//! [`Connector::compose`](crate::connector::Connector::compose).

use crate::diagram::{BinaryDiagram, TernaryDiagram};
use crate::figure::Figure;

/// Compose a minor (S–M) and major (M–P) premise diagram under a figure.
///
/// Region-by-region pairing, with minor/major indexed in quadrant order
/// `[in∩in, in∩out, out∩in, out∩out]`:
///
/// ```text
/// S∩M∩P    = minor[S∩M]  ⊕ major[M∩P]     ¬S∩M∩P   = minor[¬S∩M]  ⊕ major[M∩P]
/// S∩¬M∩P   = minor[S∩¬M] ⊕ major[¬M∩P]    ¬S∩¬M∩P  = minor[¬S∩¬M] ⊕ major[¬M∩P]
/// S∩M∩¬P   = minor[S∩M]  ⊕ major[M∩¬P]    ¬S∩M∩¬P  = minor[¬S∩M]  ⊕ major[M∩¬P]
/// S∩¬M∩¬P  = minor[S∩¬M] ⊕ major[¬M∩¬P]   ¬S∩¬M∩¬P = minor[¬S∩¬M] ⊕ major[¬M∩¬P]
/// ```
pub fn compose(minor: BinaryDiagram, major: BinaryDiagram, figure: Figure) -> TernaryDiagram {
    let arrangement = figure.arrangement();
    let minor = if arrangement.reflect_minor() {
        minor.reflect()
    } else {
        minor
    };
    let major = if arrangement.reflect_major() {
        major.reflect()
    } else {
        major
    };

    let mi = minor.0;
    let ma = major.0;
    TernaryDiagram([
        mi[0].compose(ma[0]), // S∩M∩P
        mi[1].compose(ma[2]), // S∩¬M∩P
        mi[0].compose(ma[1]), // S∩M∩¬P
        mi[1].compose(ma[3]), // S∩¬M∩¬P
        mi[2].compose(ma[0]), // ¬S∩M∩P
        mi[3].compose(ma[2]), // ¬S∩¬M∩P
        mi[2].compose(ma[1]), // ¬S∩M∩¬P
        mi[3].compose(ma[3]), // ¬S∩¬M∩¬P
    ])
}

/// Compose two already-canonical diagrams without any reflection. The
/// per-region combination is commutative in the sense that swapping which
/// premise supplies which operand of the connector combinator never
/// changes the result.
pub fn compose_canonical(minor: BinaryDiagram, major: BinaryDiagram) -> TernaryDiagram {
    compose(minor, major, Figure::First)
}
