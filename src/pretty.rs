//! Pretty-printer for statements and diagrams.
//!
//! Renders statements back to surface syntax (round-trip tested against
//! the parser) and diagrams as aligned text tables, one row per region.

use crate::ast::{Statement, Syllogism};
use crate::diagram::{BinaryDiagram, Quadrant, Region, TernaryDiagram};

/// A pretty-printer accumulating output
pub struct Pretty {
    output: String,
}

impl Default for Pretty {
    fn default() -> Self {
        Self::new()
    }
}

impl Pretty {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn writeln(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a table of (label, glyph, state) rows with aligned columns.
    fn table(&mut self, rows: &[(String, &'static str, String)]) {
        let label_width = rows
            .iter()
            .map(|(label, _, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, glyph, state) in rows {
            let pad = label_width - label.chars().count();
            self.write("  ");
            self.write(label);
            for _ in 0..pad {
                self.write(" ");
            }
            self.write("  ");
            self.write(glyph);
            self.write("  ");
            self.writeln(state);
        }
    }
}

// ============ Statements ============

impl Pretty {
    /// One statement as a sentence, capitalized.
    pub fn statement(&mut self, stmt: &Statement) {
        let text = stmt.to_string();
        let mut chars = text.chars();
        if let Some(first) = chars.next() {
            self.write(&first.to_uppercase().to_string());
            self.write(chars.as_str());
        }
    }

    /// Three statements, one per line, conclusion marked.
    pub fn syllogism(&mut self, syllogism: &Syllogism) {
        for premise in &syllogism.premises {
            self.statement(premise);
            self.writeln(";");
        }
        self.write("therefore ");
        self.statement(&syllogism.conclusion);
        self.writeln(".");
    }
}

// ============ Diagrams ============

impl Pretty {
    /// A binary diagram as a four-row table labeled with the two terms.
    pub fn binary_diagram(&mut self, first: &str, second: &str, diagram: &BinaryDiagram) {
        let rows: Vec<_> = Quadrant::ALL
            .iter()
            .map(|&q| {
                let c = diagram.at(q);
                (q.label(first, second), c.glyph(), c.to_string())
            })
            .collect();
        self.table(&rows);
    }

    /// A ternary diagram as an eight-row table labeled with S, M, P.
    pub fn ternary_diagram(&mut self, s: &str, m: &str, p: &str, diagram: &TernaryDiagram) {
        let rows: Vec<_> = Region::ALL
            .iter()
            .map(|&r| {
                let c = diagram.at(r);
                (r.label(s, m, p), c.glyph(), c.to_string())
            })
            .collect();
        self.table(&rows);
    }
}

// ============ Convenience functions ============

/// Render one statement as a capitalized sentence.
pub fn statement_line(stmt: &Statement) -> String {
    let mut pretty = Pretty::new();
    pretty.statement(stmt);
    pretty.finish()
}

/// Render a whole syllogism, one statement per line.
pub fn syllogism_text(syllogism: &Syllogism) -> String {
    let mut pretty = Pretty::new();
    pretty.syllogism(syllogism);
    pretty.finish()
}

/// Render a binary diagram table.
pub fn binary_table(first: &str, second: &str, diagram: &BinaryDiagram) -> String {
    let mut pretty = Pretty::new();
    pretty.binary_diagram(first, second, diagram);
    pretty.finish()
}

/// Render a ternary diagram table.
pub fn ternary_table(s: &str, m: &str, p: &str, diagram: &TernaryDiagram) -> String {
    let mut pretty = Pretty::new();
    pretty.ternary_diagram(s, m, p, diagram);
    pretty.finish()
}
