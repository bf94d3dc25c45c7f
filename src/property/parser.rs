//! Text -> [`Value`] parsing.
//!
//! A small recursive descent parser over the lexemes from
//! [`crate::property::tokenizer`]. Values are parsed either against an
//! explicit [`ValueKind`] hint (the renderer schema) or untyped, inferring
//! the kind from the literal form. Either a fully valid value is produced or
//! an error; no partial values.

use crate::backend::{Font, Texture};
use crate::geometry::{Outline, Size};
use crate::property::color::Color;
use crate::property::text_style::TextStyle;
use crate::property::tokenizer::{tokenize, unquote, Lexeme, Token};
use crate::property::value::{Value, ValueKind};

/// Errors from parsing property text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("malformed numeric literal: {0}")]
    MalformedNumber(String),
    #[error("unknown text style flag: {0}")]
    UnknownFlag(String),
    #[error("unknown color name: {0}")]
    UnknownColor(String),
    #[error("unknown keyword: {0}")]
    UnknownKeyword(String),
    #[error("input contains an unlexable token")]
    Unlexable,
}

/// Parse a value against an expected kind.
///
/// The hint selects the grammar; text that does not fit it produces a
/// descriptive error (the "mismatched hint" case).
pub fn parse_value(text: &str, hint: ValueKind) -> Result<Value, ParseError> {
    let lexemes = tokenize(text).ok_or(ParseError::Unlexable)?;
    let mut cursor = Cursor::new(lexemes);
    let value = parse_with_hint(&mut cursor, hint)?;
    cursor.expect_eof()?;
    Ok(value)
}

/// Parse a value inferring its kind from the literal form.
///
/// Used by the theme parser, where the property's target kind is not known
/// until the widget kind's schema is consulted.
pub fn parse_value_untyped(text: &str) -> Result<Value, ParseError> {
    let lexemes = tokenize(text).ok_or(ParseError::Unlexable)?;
    let mut cursor = Cursor::new(lexemes);
    let value = parse_untyped(&mut cursor)?;
    cursor.expect_eof()?;
    Ok(value)
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// A cursor over lexemes, shared with the theme parser.
pub(crate) struct Cursor {
    lexemes: Vec<Lexeme>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(lexemes: Vec<Lexeme>) -> Self {
        Self { lexemes, pos: 0 }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    pub(crate) fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.pos)
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Option<&Lexeme> {
        self.lexemes.get(self.pos + offset)
    }

    pub(crate) fn advance(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.pos).cloned();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    pub(crate) fn expect(&mut self, expected: Token) -> Result<Lexeme, ParseError> {
        match self.advance() {
            Some(lexeme) if lexeme.token == expected => Ok(lexeme),
            Some(lexeme) => Err(ParseError::UnexpectedToken {
                position: lexeme.pos,
                message: format!("expected {:?}, got {:?} '{}'", expected, lexeme.token, lexeme.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    pub(crate) fn expect_eof(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(lexeme) => Err(ParseError::UnexpectedToken {
                position: lexeme.pos,
                message: format!("trailing input: '{}'", lexeme.text),
            }),
        }
    }

    fn eof(&self, what: &str) -> ParseError {
        ParseError::UnexpectedEof(what.to_string())
    }

    fn bad(&mut self, what: &str) -> ParseError {
        match self.advance() {
            Some(lexeme) => ParseError::UnexpectedToken {
                position: lexeme.pos,
                message: format!("expected {what}, got '{}'", lexeme.text),
            },
            None => self.eof(what),
        }
    }
}

// ---------------------------------------------------------------------------
// Hinted parsing
// ---------------------------------------------------------------------------

pub(crate) fn parse_with_hint(cursor: &mut Cursor, hint: ValueKind) -> Result<Value, ParseError> {
    match hint {
        ValueKind::Bool => parse_bool(cursor),
        ValueKind::Number => parse_number(cursor).map(Value::Number),
        ValueKind::String => parse_string(cursor).map(Value::String),
        ValueKind::Color => parse_color(cursor).map(Value::Color),
        ValueKind::Outline => parse_outline(cursor).map(Value::Outline),
        ValueKind::Texture => {
            let path = parse_string(cursor)?;
            Ok(Value::Texture(Texture::new(path, Size::ZERO)))
        }
        ValueKind::Font => {
            let path = parse_string(cursor)?;
            Ok(Value::Font(Font::new(path)))
        }
        ValueKind::TextStyle => parse_text_style(cursor).map(Value::TextStyle),
        ValueKind::Widgets => parse_widget_list(cursor),
        ValueKind::Map => parse_map(cursor),
    }
}

// ---------------------------------------------------------------------------
// Untyped parsing
// ---------------------------------------------------------------------------

pub(crate) fn parse_untyped(cursor: &mut Cursor) -> Result<Value, ParseError> {
    match cursor.peek() {
        Some(lexeme) => match lexeme.token {
            Token::Number => parse_number(cursor).map(Value::Number),
            Token::StringLiteral => parse_string(cursor).map(Value::String),
            Token::HexColor => parse_color(cursor).map(Value::Color),
            Token::ParenOpen => parse_outline(cursor).map(Value::Outline),
            Token::BraceOpen => parse_braced_untyped(cursor),
            Token::Ident => parse_keyword_untyped(cursor),
            _ => Err(cursor.bad("a property value")),
        },
        None => Err(cursor.eof("a property value")),
    }
}

/// Classify a bare identifier: boolean, color name, or text style flags.
fn parse_keyword_untyped(cursor: &mut Cursor) -> Result<Value, ParseError> {
    let lexeme = match cursor.peek() {
        Some(lexeme) => lexeme,
        None => return Err(cursor.eof("a property value")),
    };
    let word = lexeme.text.to_ascii_lowercase();
    match word.as_str() {
        "true" | "false" => parse_bool(cursor),
        "rgb" | "rgba" => parse_color(cursor).map(Value::Color),
        _ => {
            if Color::from_name(&word).is_some() {
                parse_color(cursor).map(Value::Color)
            } else if TextStyle::from_flag_name(&word).is_some() {
                parse_text_style(cursor).map(Value::TextStyle)
            } else {
                let text = lexeme.text.clone();
                cursor.advance();
                Err(ParseError::UnknownKeyword(text))
            }
        }
    }
}

/// An untyped `{ ... }` block is a property map when its first entry looks
/// like `Ident =`, and a widget list otherwise.
fn parse_braced_untyped(cursor: &mut Cursor) -> Result<Value, ParseError> {
    let looks_like_map = match (cursor.peek_at(1), cursor.peek_at(2)) {
        (Some(next), Some(after)) if next.token == Token::Ident => after.token == Token::Equals,
        (Some(next), _) if next.token == Token::BraceClose => true,
        _ => true,
    };
    if looks_like_map {
        parse_map(cursor)
    } else {
        parse_widget_list(cursor)
    }
}

// ---------------------------------------------------------------------------
// Individual forms
// ---------------------------------------------------------------------------

fn parse_bool(cursor: &mut Cursor) -> Result<Value, ParseError> {
    match cursor.peek() {
        Some(lexeme) if lexeme.token == Token::Ident => {
            let word = lexeme.text.to_ascii_lowercase();
            match word.as_str() {
                "true" => {
                    cursor.advance();
                    Ok(Value::Bool(true))
                }
                "false" => {
                    cursor.advance();
                    Ok(Value::Bool(false))
                }
                _ => Err(cursor.bad("'true' or 'false'")),
            }
        }
        _ => Err(cursor.bad("'true' or 'false'")),
    }
}

pub(crate) fn parse_number(cursor: &mut Cursor) -> Result<f32, ParseError> {
    match cursor.peek() {
        Some(lexeme) if lexeme.token == Token::Number => {
            let text = lexeme.text.clone();
            cursor.advance();
            text.parse::<f32>()
                .map_err(|_| ParseError::MalformedNumber(text))
        }
        _ => Err(cursor.bad("a number")),
    }
}

fn parse_string(cursor: &mut Cursor) -> Result<String, ParseError> {
    match cursor.peek() {
        Some(lexeme) if lexeme.token == Token::StringLiteral => {
            let text = unquote(&lexeme.text);
            cursor.advance();
            Ok(text)
        }
        _ => Err(cursor.bad("a quoted string")),
    }
}

/// Color forms: `None`, a named color, `#hex`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)`. Component values outside 0-255 are malformed.
pub(crate) fn parse_color(cursor: &mut Cursor) -> Result<Color, ParseError> {
    match cursor.peek() {
        Some(lexeme) if lexeme.token == Token::HexColor => {
            let text = lexeme.text.clone();
            cursor.advance();
            Color::from_hex(&text).ok_or(ParseError::UnknownColor(text))
        }
        Some(lexeme) if lexeme.token == Token::Ident => {
            let word = lexeme.text.to_ascii_lowercase();
            match word.as_str() {
                "rgb" => {
                    cursor.advance();
                    let [r, g, b] = parse_color_args::<3>(cursor)?;
                    Ok(Color::new(r, g, b))
                }
                "rgba" => {
                    cursor.advance();
                    let [r, g, b, a] = parse_color_args::<4>(cursor)?;
                    Ok(Color::rgba(r, g, b, a))
                }
                _ => {
                    let text = lexeme.text.clone();
                    cursor.advance();
                    Color::from_name(&text).ok_or(ParseError::UnknownColor(text))
                }
            }
        }
        _ => Err(cursor.bad("a color")),
    }
}

fn parse_color_args<const N: usize>(cursor: &mut Cursor) -> Result<[u8; N], ParseError> {
    cursor.expect(Token::ParenOpen)?;
    let mut out = [0u8; N];
    for (i, slot) in out.iter_mut().enumerate() {
        if i > 0 {
            cursor.expect(Token::Comma)?;
        }
        let n = parse_number(cursor)?;
        if !(0.0..=255.0).contains(&n) || n.fract() != 0.0 {
            return Err(ParseError::MalformedNumber(format!(
                "color component out of range: {n}"
            )));
        }
        *slot = n as u8;
    }
    cursor.expect(Token::ParenClose)?;
    Ok(out)
}

/// Outline forms: `(l, t, r, b)` or a bare number applied to all sides.
pub(crate) fn parse_outline(cursor: &mut Cursor) -> Result<Outline, ParseError> {
    match cursor.peek() {
        Some(lexeme) if lexeme.token == Token::Number => {
            let width = parse_number(cursor)?;
            Ok(Outline::all(width))
        }
        Some(lexeme) if lexeme.token == Token::ParenOpen => {
            cursor.advance();
            let left = parse_number(cursor)?;
            cursor.expect(Token::Comma)?;
            let top = parse_number(cursor)?;
            cursor.expect(Token::Comma)?;
            let right = parse_number(cursor)?;
            cursor.expect(Token::Comma)?;
            let bottom = parse_number(cursor)?;
            cursor.expect(Token::ParenClose)?;
            Ok(Outline::new(left, top, right, bottom))
        }
        _ => Err(cursor.bad("an outline")),
    }
}

/// Text style form: flag names joined by `|`.
fn parse_text_style(cursor: &mut Cursor) -> Result<TextStyle, ParseError> {
    let mut style = parse_style_flag(cursor)?;
    while cursor.peek().is_some_and(|l| l.token == Token::Pipe) {
        cursor.advance();
        style |= parse_style_flag(cursor)?;
    }
    Ok(style)
}

fn parse_style_flag(cursor: &mut Cursor) -> Result<TextStyle, ParseError> {
    match cursor.peek() {
        Some(lexeme) if lexeme.token == Token::Ident => {
            let text = lexeme.text.clone();
            cursor.advance();
            TextStyle::from_flag_name(&text).ok_or(ParseError::UnknownFlag(text))
        }
        _ => Err(cursor.bad("a text style flag")),
    }
}

/// Map form: `{ Name = Value; ... }` with untyped values.
fn parse_map(cursor: &mut Cursor) -> Result<Value, ParseError> {
    cursor.expect(Token::BraceOpen)?;
    let mut map = crate::property::value::PropertyMap::new();
    loop {
        match cursor.peek() {
            Some(lexeme) if lexeme.token == Token::BraceClose => {
                cursor.advance();
                return Ok(Value::Map(map));
            }
            Some(lexeme) if lexeme.token == Token::Ident => {
                let name = lexeme.text.clone();
                cursor.advance();
                cursor.expect(Token::Equals)?;
                let value = parse_untyped(cursor)?;
                cursor.expect(Token::Semicolon)?;
                map.insert(name, value);
            }
            Some(_) => return Err(cursor.bad("a property name or '}'")),
            None => return Err(cursor.eof("'}' to close a property map")),
        }
    }
}

/// Widget list form: `{ Kind("name") { ... } ... }`.
fn parse_widget_list(cursor: &mut Cursor) -> Result<Value, ParseError> {
    cursor.expect(Token::BraceOpen)?;
    let mut records = Vec::new();
    loop {
        match cursor.peek() {
            Some(lexeme) if lexeme.token == Token::BraceClose => {
                cursor.advance();
                return Ok(Value::Widgets(records));
            }
            Some(lexeme) if lexeme.token == Token::Ident => {
                records.push(crate::theme::parser::parse_record(cursor)?);
            }
            Some(_) => return Err(cursor.bad("a widget kind or '}'")),
            None => return Err(cursor.eof("'}' to close a widget list")),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
