//! Lexer for the statement language.
//!
//! Tokenizes surface input such as
//! `all M are P; all S are M; therefore all S are P` or a bare form code
//! like `AAA-1` into a stream for the parser.

use chumsky::prelude::*;
use std::ops::Range;

/// Token types for the statement language.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // Keywords (matched case-insensitively so statements may open a
    // sentence: "All men are mortal")
    All,
    No,
    Some,
    Are,
    Not,
    Therefore,

    // A term label or a bare mood string
    Ident(String),

    // A figure number, kept as the typed digits so diagnostics can echo
    // the literal even when it overflows the figure range
    Number(String),

    // Punctuation
    Semicolon, // ;
    Comma,     // ,
    Dot,       // .
    Dash,      // -
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::All => write!(f, "all"),
            Token::No => write!(f, "no"),
            Token::Some => write!(f, "some"),
            Token::Are => write!(f, "are"),
            Token::Not => write!(f, "not"),
            Token::Therefore => write!(f, "therefore"),
            Token::Ident(s) => write!(f, "{}", s),
            Token::Number(n) => write!(f, "{}", n),
            Token::Semicolon => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::Dot => write!(f, "."),
            Token::Dash => write!(f, "-"),
        }
    }
}

/// Type alias for spans
pub type Span = Range<usize>;

/// Create a lexer for the statement language.
pub fn lexer() -> impl Parser<char, Vec<(Token, Span)>, Error = Simple<char>> {
    let keyword_or_ident = text::ident().map(|s: String| match s.to_ascii_lowercase().as_str() {
        "all" | "every" => Token::All,
        "no" => Token::No,
        "some" => Token::Some,
        "are" | "is" => Token::Are,
        "not" => Token::Not,
        "therefore" | "so" | "hence" => Token::Therefore,
        _ => Token::Ident(s),
    });

    // Figure numbers; range checking happens in the parser
    let number = text::int(10).map(Token::Number);

    let punctuation = choice((
        just(';').to(Token::Semicolon),
        just(',').to(Token::Comma),
        just('.').to(Token::Dot),
        just('-').to(Token::Dash),
    ));

    // Comments: // to end of line
    let line_comment = just("//")
        .then(none_of('\n').repeated())
        .then(just('\n').or_not())
        .ignored();

    let token_or_skip = line_comment
        .to(None)
        .or(choice((keyword_or_ident, number, punctuation)).map(Some));

    token_or_skip
        .map_with_span(|opt_tok, span| opt_tok.map(|tok| (tok, span)))
        .padded()
        .repeated()
        .then_ignore(end())
        .map(|items| items.into_iter().flatten().collect())
}
