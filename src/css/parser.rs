//! Value and declaration-list parser.
//!
//! Turns text typed into a control (`10px`, `#ff0000`, `50% top`) into a
//! [`StyleValue`], and `prop: value; ...` lists into property/value pairs.
//! Semantic validation (is `hidden` allowed for `width`?) stays with the
//! style engine.

use crate::css::tokenizer::{tokenize, LexError, Lexeme, Token};
use crate::style::{StyleProperty, StyleValue, Unit, UnknownProperty};

/// Errors from value parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    UnknownProperty(#[from] UnknownProperty),
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("unexpected `{text}`: {message}")]
    UnexpectedToken { text: String, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("empty value")]
    Empty,
}

fn unexpected(lexeme: &Lexeme<'_>, message: &str) -> ParseError {
    ParseError::UnexpectedToken {
        text: lexeme.text.to_string(),
        message: message.to_string(),
    }
}

/// Parse `input` as the value of `property`.
pub fn parse_value(property: StyleProperty, input: &str) -> Result<StyleValue, ParseError> {
    let lexemes = tokenize(input)?;
    parse_lexemes(property, &lexemes)
}

fn parse_lexemes(property: StyleProperty, lexemes: &[Lexeme<'_>]) -> Result<StyleValue, ParseError> {
    if lexemes.is_empty() {
        return Err(ParseError::Empty);
    }
    if property == StyleProperty::FontFamily {
        return parse_font_family(lexemes);
    }

    let mut items = Vec::with_capacity(lexemes.len());
    for lexeme in lexemes {
        items.push(parse_component(lexeme)?);
    }

    if items.len() == 1 {
        return Ok(items.remove(0));
    }
    if items.iter().any(|item| matches!(item, StyleValue::Unset)) {
        return Err(ParseError::UnexpectedToken {
            text: "unset".into(),
            message: "`unset` must be the only value".into(),
        });
    }
    Ok(StyleValue::Tuple(items))
}

fn parse_component(lexeme: &Lexeme<'_>) -> Result<StyleValue, ParseError> {
    match lexeme.token {
        Token::Number => {
            let value = parse_number(lexeme, lexeme.text)?;
            Ok(StyleValue::number(value))
        }
        Token::Dimension => {
            let split = lexeme
                .text
                .find(|c: char| c.is_ascii_alphabetic() || c == '%')
                .unwrap_or(lexeme.text.len());
            let (number, suffix) = lexeme.text.split_at(split);
            let unit =
                Unit::from_suffix(suffix).ok_or_else(|| ParseError::UnknownUnit(suffix.to_string()))?;
            Ok(StyleValue::unit(parse_number(lexeme, number)?, unit))
        }
        Token::HexColor => parse_hex_color(lexeme),
        Token::Ident if lexeme.text.eq_ignore_ascii_case("unset") => Ok(StyleValue::Unset),
        Token::Ident => Ok(StyleValue::keyword(lexeme.text.to_ascii_lowercase())),
        // aspect-ratio: 16 / 9
        Token::Slash => Ok(StyleValue::keyword("/")),
        _ => Err(unexpected(lexeme, "expected a number, dimension, color or keyword")),
    }
}

fn parse_number(lexeme: &Lexeme<'_>, text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|_| unexpected(lexeme, "malformed number"))
}

fn parse_hex_color(lexeme: &Lexeme<'_>) -> Result<StyleValue, ParseError> {
    let hex = &lexeme.text[1..];
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| unexpected(lexeme, "bad hex digit"));
    // Short forms repeat each digit: `f` means `ff`.
    let short = |c: &str| channel(&c.repeat(2));

    let (r, g, b, a) = match hex.len() {
        3 => (short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?, 255),
        4 => (
            short(&hex[0..1])?,
            short(&hex[1..2])?,
            short(&hex[2..3])?,
            short(&hex[3..4])?,
        ),
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?, 255),
        8 => (
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        ),
        _ => return Err(unexpected(lexeme, "hex colors have 3, 4, 6 or 8 digits")),
    };
    Ok(StyleValue::Rgb {
        r,
        g,
        b,
        alpha: f32::from(a) / 255.0,
    })
}

fn parse_font_family(lexemes: &[Lexeme<'_>]) -> Result<StyleValue, ParseError> {
    let mut families = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for lexeme in lexemes {
        match lexeme.token {
            Token::Comma => {
                if current.is_empty() {
                    return Err(unexpected(lexeme, "empty font family"));
                }
                families.push(current.join(" "));
                current.clear();
            }
            Token::StringLiteral | Token::StringLiteralSingle => {
                current.push(&lexeme.text[1..lexeme.text.len() - 1]);
            }
            Token::Ident => current.push(lexeme.text),
            _ => return Err(unexpected(lexeme, "expected a font family name")),
        }
    }
    if current.is_empty() {
        return Err(ParseError::UnexpectedEof("font family list ends with a comma".into()));
    }
    families.push(current.join(" "));
    Ok(StyleValue::FontFamily(families))
}

/// Parse a `prop: value; prop: value` list.
///
/// Property names may be camelCase or CSS names. A trailing semicolon is
/// optional; an empty input yields an empty list.
pub fn parse_declarations(input: &str) -> Result<Vec<(StyleProperty, StyleValue)>, ParseError> {
    let lexemes = tokenize(input)?;
    let mut declarations = Vec::new();
    let mut pos = 0;

    while pos < lexemes.len() {
        let name = &lexemes[pos];
        if name.token == Token::Semicolon {
            pos += 1;
            continue;
        }
        if name.token != Token::Ident {
            return Err(unexpected(name, "expected a property name"));
        }
        let property: StyleProperty = name.text.parse()?;
        pos += 1;

        match lexemes.get(pos) {
            Some(colon) if colon.token == Token::Colon => pos += 1,
            Some(other) => return Err(unexpected(other, "expected `:`")),
            None => return Err(ParseError::UnexpectedEof(format!("expected `:` after {property}"))),
        }

        let start = pos;
        while pos < lexemes.len() && lexemes[pos].token != Token::Semicolon {
            pos += 1;
        }
        if start == pos {
            return Err(ParseError::UnexpectedEof(format!("missing value for {property}")));
        }
        declarations.push((property, parse_lexemes(property, &lexemes[start..pos])?));
    }

    Ok(declarations)
}
