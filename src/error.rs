//! Error types and diagnostic formatting.
//!
//! Core engine errors are a closed enum: every operation is total over
//! the closed enumerations, so the only failures are inputs outside them
//! (a letter that is not A/E/I/O, a figure outside 1–4, a malformed mood
//! or form code). Parse errors from the statement language are rendered
//! as ariadne reports over the source text.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::prelude::Simple;
use std::ops::Range;
use thiserror::Error;

use crate::lexer::Token;

/// Validation errors at the engine boundary. Unrecognized letters and
/// figures are rejected outright, never defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyllogError {
    #[error("unrecognized proposition letter '{0}' (expected one of A, E, I, O)")]
    InvalidLetter(char),

    #[error("figure {0} out of range (expected 1-4)")]
    InvalidFigure(u8),

    #[error("malformed mood '{0}' (expected exactly three letters from A, E, I, O)")]
    InvalidMood(String),

    #[error("malformed form '{0}' (expected a mood and a figure, like AAA-1)")]
    InvalidForm(String),
}

/// Format lexer errors into a user-friendly string
pub fn format_lexer_errors(source: &str, errors: Vec<Simple<char>>) -> String {
    // An empty source has no lines for a report to point into
    if source.is_empty() {
        return errors
            .iter()
            .map(format_lexer_error)
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut output = Vec::new();

    for error in errors {
        let span = error.span();
        let report = Report::build(ReportKind::Error, (), span.start)
            .with_message("Lexical error")
            .with_label(
                Label::new(span.clone())
                    .with_message(format_lexer_error(&error))
                    .with_color(Color::Red),
            );

        report
            .finish()
            .write(Source::from(source), &mut output)
            .expect("Failed to write error report");
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// Format a single lexer error into a readable message
fn format_lexer_error(error: &Simple<char>) -> String {
    let found = error
        .found()
        .map(|c| format!("'{}'", c))
        .unwrap_or_else(|| "end of input".to_string());

    if error.expected().next().is_some() {
        format!(
            "Unexpected {}, expected {}",
            found,
            format_char_set(error.expected())
        )
    } else {
        format!("Unexpected character {}", found)
    }
}

/// Format parser errors into a user-friendly string
pub fn format_parser_errors(
    source: &str,
    errors: Vec<Simple<Token>>,
    token_spans: &[(Token, Range<usize>)],
) -> String {
    // An empty source has no lines for a report to point into
    if source.is_empty() {
        return errors
            .iter()
            .map(format_parser_error)
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut output = Vec::new();

    for error in errors {
        let span = error.span();

        // Map token span to character span. The span is either a token
        // index into the stream, or already a character range captured by
        // a custom error; a span matching a token's character range is
        // taken as the latter.
        let is_char_position = token_spans
            .iter()
            .any(|(_, char_range)| char_range.start == span.start && char_range.end == span.end);

        let char_span = if is_char_position {
            span.clone()
        } else if span.start < token_spans.len() {
            token_spans[span.start].1.clone()
        } else if span.start == token_spans.len() {
            // End-of-input marker: point at the end of the last token
            if let Some((_, last_range)) = token_spans.last() {
                last_range.end..last_range.end
            } else {
                0..0
            }
        } else {
            let start = span.start.min(source.len());
            let end = span.end.min(source.len());
            start..end
        };

        let report = Report::build(ReportKind::Error, (), char_span.start)
            .with_message("Parse error")
            .with_label(
                Label::new(char_span.clone())
                    .with_message(format_parser_error(&error))
                    .with_color(Color::Red),
            );

        report
            .finish()
            .write(Source::from(source), &mut output)
            .expect("Failed to write error report");
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// Format a single parser error into a readable message
fn format_parser_error(error: &Simple<Token>) -> String {
    use chumsky::error::SimpleReason;

    let found = error
        .found()
        .map(|t| format!("'{}'", t))
        .unwrap_or_else(|| "end of input".to_string());

    // Custom messages (from Simple::custom, e.g. a bad mood letter) win
    if let SimpleReason::Custom(msg) = error.reason() {
        return msg.clone();
    }

    let expected = format_token_set(error.expected());

    if !expected.is_empty() {
        format!("Unexpected {}, expected one of: {}", found, expected.join(", "))
    } else if let Some(label) = error.label() {
        label.to_string()
    } else {
        format!("Unexpected token {}", found)
    }
}

/// Format a set of expected tokens
fn format_token_set<'a>(expected: impl Iterator<Item = &'a Option<Token>>) -> Vec<String> {
    expected
        .filter_map(|opt| opt.as_ref())
        .map(|t| format!("'{}'", t))
        .collect()
}

/// Format a set of expected characters
fn format_char_set<'a>(expected: impl Iterator<Item = &'a Option<char>>) -> String {
    let chars: Vec<String> = expected
        .filter_map(|opt| opt.as_ref())
        .map(|c| format!("'{}'", c))
        .collect();

    if chars.is_empty() {
        "valid character".to_string()
    } else if chars.len() == 1 {
        chars[0].clone()
    } else {
        chars.join(" or ")
    }
}
