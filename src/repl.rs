//! REPL state and commands for the syllog teaching tool.
//!
//! The state is just the current premise/conclusion kinds, the figure,
//! and the three cosmetic term labels. Every command recomputes the full
//! pipeline from those inputs — there is no cached verdict to go stale.

use std::path::PathBuf;

use crate::ast::{Input, Statement, Syllogism};
use crate::elaborate::elaborate;
use crate::figure::Figure;
use crate::mood::{Form, Mood};
use crate::proposition::Proposition;
use crate::{analyze, pretty, Analysis};

/// Interactive state: one syllogism under study.
#[derive(Clone, Debug)]
pub struct ReplState {
    pub major: Proposition,
    pub minor: Proposition,
    pub conclusion: Proposition,
    pub figure: Figure,
    /// Term labels, cosmetic only — validity never depends on them.
    pub subject: String,
    pub middle: String,
    pub predicate: String,
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplState {
    /// Start at Barbara (AAA-1) with placeholder term labels.
    pub fn new() -> Self {
        Self {
            major: Proposition::A,
            minor: Proposition::A,
            conclusion: Proposition::A,
            figure: Figure::First,
            subject: "S".to_string(),
            middle: "M".to_string(),
            predicate: "P".to_string(),
        }
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The current mood–figure form.
    pub fn current_form(&self) -> Form {
        Form::new(Mood::new(self.major, self.minor, self.conclusion), self.figure)
    }

    /// Recompute the full pipeline for the current inputs.
    pub fn analysis(&self) -> Analysis {
        analyze(self.current_form())
    }

    /// The current syllogism as statements, premise terms in the order
    /// the figure states them.
    pub fn statements(&self) -> Syllogism {
        let arrangement = self.figure.arrangement();
        let major = if arrangement.reflect_major() {
            Statement::new(self.major, self.predicate.clone(), self.middle.clone())
        } else {
            Statement::new(self.major, self.middle.clone(), self.predicate.clone())
        };
        let minor = if arrangement.reflect_minor() {
            Statement::new(self.minor, self.middle.clone(), self.subject.clone())
        } else {
            Statement::new(self.minor, self.subject.clone(), self.middle.clone())
        };
        let conclusion =
            Statement::new(self.conclusion, self.subject.clone(), self.predicate.clone());
        Syllogism {
            premises: [major, minor],
            conclusion,
        }
    }

    /// Classify a line of input. Statement-language input is a single
    /// line; there is no multi-line buffering.
    pub fn process_line(&self, line: &str) -> InputResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return InputResult::Empty;
        }
        if trimmed.starts_with(':') {
            return InputResult::MetaCommand(MetaCommand::parse(trimmed));
        }
        InputResult::Statements(trimmed.to_string())
    }

    /// Execute statement-language input: either a bare form code or a
    /// full syllogism. On success the state is replaced and the fresh
    /// analysis returned.
    pub fn execute_text(&mut self, source: &str) -> Result<Analysis, String> {
        match crate::parse(source)? {
            Input::Form(form) => {
                self.major = form.mood.major;
                self.minor = form.mood.minor;
                self.conclusion = form.mood.conclusion;
                self.figure = form.figure;
                self.subject = "S".to_string();
                self.middle = "M".to_string();
                self.predicate = "P".to_string();
            }
            Input::Syllogism(syllogism) => {
                let elaborated = elaborate(&syllogism).map_err(|e| e.to_string())?;
                self.major = elaborated.form.mood.major;
                self.minor = elaborated.form.mood.minor;
                self.conclusion = elaborated.form.mood.conclusion;
                self.figure = elaborated.form.figure;
                self.subject = elaborated.subject;
                self.middle = elaborated.middle;
                self.predicate = elaborated.predicate;
            }
        }
        Ok(self.analysis())
    }

    /// Set one input: `major`/`minor`/`conclusion` to a letter, or
    /// `figure` to a number.
    pub fn set_part(&mut self, target: &str, value: &str) -> Result<(), String> {
        match target {
            "major" => {
                self.major = value.parse::<Proposition>().map_err(|e| e.to_string())?;
            }
            "minor" => {
                self.minor = value.parse::<Proposition>().map_err(|e| e.to_string())?;
            }
            "conclusion" => {
                self.conclusion = value.parse::<Proposition>().map_err(|e| e.to_string())?;
            }
            "figure" => {
                let n: u8 = value
                    .parse()
                    .map_err(|_| format!("figure '{}' is not a number", value))?;
                self.figure = Figure::from_number(n).map_err(|e| e.to_string())?;
            }
            other => {
                return Err(format!(
                    "unknown target '{}' (expected major, minor, conclusion, or figure)",
                    other
                ))
            }
        }
        Ok(())
    }

    /// Current diagrams and verdict as JSON, the record a rendering
    /// layer would consume.
    pub fn export_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.analysis()).map_err(|e| e.to_string())
    }
}

/// Result of classifying a line of input
#[derive(Debug)]
pub enum InputResult {
    MetaCommand(MetaCommand),
    Statements(String),
    Empty,
}

/// Meta-commands supported by the REPL
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help(Option<String>),
    Quit,
    Clear,
    Reset,
    /// Show statements, all four diagrams, and the verdict
    Show,
    /// Just the verdict (plus classical name, when there is one)
    Check,
    /// Enumerate all 256 forms and list the valid ones
    Table,
    /// Current analysis as JSON
    Export,
    /// `:set <major|minor|conclusion|figure> <value>`
    Set { target: String, value: String },
    /// Run a file of statement-language input
    Source(PathBuf),
    Unknown(String),
}

impl MetaCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim_start_matches(':').trim();
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        match cmd {
            "help" | "h" | "?" => MetaCommand::Help(arg.map(String::from)),
            "quit" | "q" | "exit" => MetaCommand::Quit,
            "clear" => MetaCommand::Clear,
            "reset" => MetaCommand::Reset,
            "show" | "s" => MetaCommand::Show,
            "check" | "c" => MetaCommand::Check,
            "table" | "t" => MetaCommand::Table,
            "export" | "e" => MetaCommand::Export,
            "set" => match (arg, parts.next()) {
                (Some(target), Some(value)) => MetaCommand::Set {
                    target: target.to_string(),
                    value: value.to_string(),
                },
                _ => MetaCommand::Unknown(":set requires a target and a value".to_string()),
            },
            "source" | "load" => {
                if let Some(path) = arg {
                    MetaCommand::Source(PathBuf::from(path))
                } else {
                    MetaCommand::Unknown(":source requires a file path".to_string())
                }
            }
            other => MetaCommand::Unknown(format!("unknown command ':{}'", other)),
        }
    }
}

// ============ Formatting ============

/// One-line verdict: `AAA-1 (Barbara): valid`.
pub fn format_verdict(analysis: &Analysis) -> String {
    let name = analysis
        .name
        .map(|n| format!(" ({})", n))
        .unwrap_or_default();
    let verdict = if analysis.valid { "valid" } else { "invalid" };
    format!("{}{}: {}", analysis.form, name, verdict)
}

/// Full display: statements, the three premise/conclusion diagrams, the
/// composed ternary diagram, and the verdict.
pub fn format_show(state: &ReplState) -> String {
    let analysis = state.analysis();
    let syllogism = state.statements();
    let arrangement = state.figure.arrangement();

    let (s, m, p) = (&state.subject, &state.middle, &state.predicate);
    let (major_first, major_second) = if arrangement.reflect_major() {
        (p.as_str(), m.as_str())
    } else {
        (m.as_str(), p.as_str())
    };
    let (minor_first, minor_second) = if arrangement.reflect_minor() {
        (m.as_str(), s.as_str())
    } else {
        (s.as_str(), m.as_str())
    };

    let mut out = String::new();
    out.push_str(&pretty::syllogism_text(&syllogism));
    out.push('\n');
    out.push_str(&format!("Major premise ({}):\n", state.major));
    out.push_str(&pretty::binary_table(major_first, major_second, &analysis.major));
    out.push_str(&format!("Minor premise ({}):\n", state.minor));
    out.push_str(&pretty::binary_table(minor_first, minor_second, &analysis.minor));
    out.push_str(&format!("Conclusion ({}):\n", state.conclusion));
    out.push_str(&pretty::binary_table(s, p, &analysis.conclusion));
    out.push_str("Composed:\n");
    out.push_str(&pretty::ternary_table(s, m, p, &analysis.composed));
    out.push('\n');
    out.push_str(&format_verdict(&analysis));
    out.push('\n');
    out
}

/// All 256 forms with the valid ones listed, classical names included.
pub fn format_table() -> String {
    let mut out = String::new();
    let mut valid_count = 0usize;

    for figure in Figure::ALL {
        out.push_str(&format!("Figure {}:\n", figure));
        for mood in Mood::all() {
            let analysis = analyze(Form::new(mood, figure));
            if analysis.valid {
                valid_count += 1;
                out.push_str(&format!("  {}\n", format_verdict(&analysis)));
            }
        }
    }

    out.push_str(&format!(
        "\n{} of 256 forms are valid under the diagrammatic procedure.\n",
        valid_count
    ));
    out
}
