//! logos-based tokenizer for CSS values and declaration lists.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (`10px` is one [`Token::Dimension`], not `Number` + `Ident`)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Identifiers may start with a single `-` (`-webkit-box`), numbers may be
//! negative; the two never overlap because an identifier needs a letter after
//! the dash.

use std::ops::Range;

use logos::Logos;

/// CSS token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80`.
    #[regex(r"#[0-9a-fA-F]+")]
    HexColor,

    /// Number with a unit suffix: `10px`, `1.5em`, `50%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?([a-zA-Z]+|%)")]
    Dimension,

    /// Integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Keywords and property names.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    #[token(",")]
    Comma,

    #[token("/")]
    Slash,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,
}

/// A token with its source text and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Input the lexer could not match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected character `{text}` at byte {position}")]
pub struct LexError {
    pub position: usize,
    pub text: String,
}

/// Tokenize `input`, failing on the first unrecognised character.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme<'_>>, LexError> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok(Lexeme {
                token,
                text: &input[span.clone()],
                span,
            }),
            Err(()) => Err(LexError {
                position: span.start,
                text: input[span].to_string(),
            }),
        })
        .collect()
}
