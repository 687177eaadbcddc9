//! Parser for the statement language.
//!
//! Parses token streams into surface [`Input`]: either three categorical
//! statements or a bare mood–figure code.

use chumsky::prelude::*;

use crate::ast::{Input, Statement, Syllogism};
use crate::figure::Figure;
use crate::lexer::Token;
use crate::mood::{Form, Mood};
use crate::proposition::Proposition;

/// Create a parser for one unit of surface input.
pub fn parser() -> impl Parser<Token, Input, Error = Simple<Token>> + Clone {
    form()
        .map(Input::Form)
        .or(syllogism().map(Input::Syllogism))
        .then_ignore(end())
}

/// A term label: one or more identifiers, joined by spaces, so multi-word
/// terms like "old men" work. Keywords terminate the term.
fn term() -> impl Parser<Token, String, Error = Simple<Token>> + Clone {
    select! { Token::Ident(s) => s }
        .repeated()
        .at_least(1)
        .map(|words| words.join(" "))
}

/// One categorical statement:
///
/// - `all T are U` → A
/// - `no T are U` → E
/// - `some T are U` → I
/// - `some T are not U` → O
fn statement() -> impl Parser<Token, Statement, Error = Simple<Token>> + Clone {
    let universal_affirmative = just(Token::All)
        .ignore_then(term())
        .then_ignore(just(Token::Are))
        .then(term())
        .map(|(s, p)| Statement::new(Proposition::A, s, p));

    let universal_negative = just(Token::No)
        .ignore_then(term())
        .then_ignore(just(Token::Are))
        .then(term())
        .map(|(s, p)| Statement::new(Proposition::E, s, p));

    let particular = just(Token::Some)
        .ignore_then(term())
        .then_ignore(just(Token::Are))
        .then(just(Token::Not).or_not())
        .then(term())
        .map(|((s, negated), p)| {
            let kind = if negated.is_some() {
                Proposition::O
            } else {
                Proposition::I
            };
            Statement::new(kind, s, p)
        });

    choice((universal_affirmative, universal_negative, particular))
}

/// Three statements, conclusion last, separated by `;`, `,` or `.` with
/// an optional `therefore` before the conclusion.
fn syllogism() -> impl Parser<Token, Syllogism, Error = Simple<Token>> + Clone {
    let sep = choice((
        just(Token::Semicolon),
        just(Token::Comma),
        just(Token::Dot),
    ));

    // `therefore` optionally followed by a comma ("therefore, ...")
    let conclusion_intro = just(Token::Therefore).then_ignore(just(Token::Comma).or_not());

    // The conclusion needs a separator, a `therefore`, or both before it.
    let before_conclusion = choice((
        sep.clone().then_ignore(conclusion_intro.clone().or_not()).ignored(),
        conclusion_intro.ignored(),
    ));

    statement()
        .then_ignore(sep.clone())
        .then(statement())
        .then_ignore(before_conclusion)
        .then(statement())
        .then_ignore(just(Token::Dot).or_not())
        .map(|((first, second), conclusion)| Syllogism {
            premises: [first, second],
            conclusion,
        })
}

/// A bare form code like `AAA-1`: a mood string, a dash, a figure number.
/// Out-of-range letters or figures surface as parse errors.
fn form() -> impl Parser<Token, Form, Error = Simple<Token>> + Clone {
    select! { Token::Ident(s) => s }
        .then_ignore(just(Token::Dash))
        .then(select! { Token::Number(n) => n })
        .try_map(|(letters, digits), span: std::ops::Range<usize>| {
            let mood: Mood = letters
                .parse()
                .map_err(|e| Simple::custom(span.clone(), format!("{}", e)))?;
            let figure = digits
                .parse::<u8>()
                .map_err(|_| {
                    Simple::custom(
                        span.clone(),
                        format!("figure {} out of range (expected 1-4)", digits),
                    )
                })
                .and_then(|n| {
                    Figure::from_number(n).map_err(|e| Simple::custom(span.clone(), format!("{}", e)))
                })?;
            Ok(Form::new(mood, figure))
        })
}
