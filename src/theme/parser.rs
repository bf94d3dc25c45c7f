//! Parsing widget-tree documents.
//!
//! The document grammar sits on top of the property token stream:
//!
//! ```text
//! document := record*
//! record   := Ident [ '(' StringLiteral ')' ] '{' entry* '}'
//! entry    := record | Ident '=' value ';'
//! ```
//!
//! Property values inside records are parsed untyped; their kinds are
//! checked against the widget kind's schema when the document is applied.
//! `Position` and `Size` take layout dimension pairs and `Visible` /
//! `Enabled` take booleans, handled here because those forms are not plain
//! property values.

use crate::layout::{parse_dim_tokens, Dim};
use crate::property::parser::{parse_untyped, parse_with_hint, Cursor, ParseError};
use crate::property::tokenizer::{tokenize, unquote, Token};
use crate::property::value::ValueKind;
use crate::theme::document::WidgetRecord;

/// Parse a whole document into records, preserving sibling order.
pub fn parse_document(text: &str) -> Result<Vec<WidgetRecord>, ParseError> {
    let lexemes = tokenize(text).ok_or(ParseError::Unlexable)?;
    let mut cursor = Cursor::new(lexemes);
    let mut records = Vec::new();
    while !cursor.is_eof() {
        records.push(parse_record(&mut cursor)?);
    }
    Ok(records)
}

/// Parse one `Kind("name") { ... }` record. Shared with the value parser
/// for widget-list values.
pub(crate) fn parse_record(cursor: &mut Cursor) -> Result<WidgetRecord, ParseError> {
    let kind = cursor.expect(Token::Ident)?.text;
    let mut record = WidgetRecord::new(kind);

    if cursor.peek().is_some_and(|l| l.token == Token::ParenOpen) {
        cursor.advance();
        let name = cursor.expect(Token::StringLiteral)?;
        record.name = Some(unquote(&name.text));
        cursor.expect(Token::ParenClose)?;
    }

    cursor.expect(Token::BraceOpen)?;
    loop {
        match cursor.peek() {
            Some(lexeme) if lexeme.token == Token::BraceClose => {
                cursor.advance();
                return Ok(record);
            }
            Some(lexeme) if lexeme.token == Token::Ident => {
                // `Ident =` is a property entry, anything else starts a
                // child record.
                if cursor.peek_at(1).is_some_and(|l| l.token == Token::Equals) {
                    parse_entry(cursor, &mut record)?;
                } else {
                    record.children.push(parse_record(cursor)?);
                }
            }
            Some(lexeme) => {
                return Err(ParseError::UnexpectedToken {
                    position: lexeme.pos,
                    message: format!("expected a property or child widget, got '{}'", lexeme.text),
                })
            }
            None => return Err(ParseError::UnexpectedEof("'}' to close a widget".into())),
        }
    }
}

fn parse_entry(cursor: &mut Cursor, record: &mut WidgetRecord) -> Result<(), ParseError> {
    let name = cursor.expect(Token::Ident)?.text;
    cursor.expect(Token::Equals)?;
    match name.to_ascii_lowercase().as_str() {
        "position" => record.position = Some(parse_dim_pair(cursor)?),
        "size" => record.size = Some(parse_dim_pair(cursor)?),
        "visible" => record.visible = Some(parse_flag(cursor)?),
        "enabled" => record.enabled = Some(parse_flag(cursor)?),
        _ => {
            let value = parse_untyped(cursor)?;
            record.properties.insert(name, value);
        }
    }
    cursor.expect(Token::Semicolon)?;
    Ok(())
}

fn parse_flag(cursor: &mut Cursor) -> Result<bool, ParseError> {
    // Reuse the hinted boolean grammar; the kind is statically known here.
    match parse_with_hint(cursor, ValueKind::Bool)? {
        crate::property::value::Value::Bool(flag) => Ok(flag),
        _ => Err(ParseError::UnexpectedEof("a boolean".into())),
    }
}

/// `( dim , dim )` where each dim is a `50% - 10` style expression.
fn parse_dim_pair(cursor: &mut Cursor) -> Result<(Dim, Dim), ParseError> {
    cursor.expect(Token::ParenOpen)?;
    let x = parse_dim_tokens(cursor, Some(Token::Comma))?;
    cursor.expect(Token::Comma)?;
    let y = parse_dim_tokens(cursor, Some(Token::ParenClose))?;
    cursor.expect(Token::ParenClose)?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::color::Color;

    #[test]
    fn parse_single_record() {
        let records = parse_document(
            r#"
            Button("ok") {
                Position = (10, 20);
                Size = (50% - 10, 24);
                TextColor = rgb(1, 2, 3);
            }
            "#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.kind, "Button");
        assert_eq!(record.name.as_deref(), Some("ok"));
        assert_eq!(record.position, Some((Dim::absolute(10.0), Dim::absolute(20.0))));
        assert_eq!(
            record.size,
            Some((Dim { ratio: 0.5, offset: -10.0 }, Dim::absolute(24.0)))
        );
        assert_eq!(
            record.properties.get("TextColor").unwrap().as_color().unwrap(),
            Color::new(1, 2, 3)
        );
    }

    #[test]
    fn parse_nested_children_in_order() {
        let records = parse_document(
            r#"
            Panel {
                Button("a") { }
                Label("b") { Visible = false; }
                Panel { Button("c") { } }
            }
            "#,
        )
        .unwrap();
        let panel = &records[0];
        assert_eq!(panel.children.len(), 3);
        assert_eq!(panel.children[0].name.as_deref(), Some("a"));
        assert_eq!(panel.children[1].visible, Some(false));
        assert_eq!(panel.children[2].children[0].name.as_deref(), Some("c"));
    }

    #[test]
    fn anonymous_records_allowed() {
        let records = parse_document("Panel { }").unwrap();
        assert_eq!(records[0].name, None);
    }

    #[test]
    fn comments_and_whitespace_ignored() {
        let records = parse_document(
            "// a comment\nPanel {\n  // another\n  Enabled = true;\n}\n",
        )
        .unwrap();
        assert_eq!(records[0].enabled, Some(true));
    }

    #[test]
    fn unbalanced_braces_fail() {
        assert!(matches!(
            parse_document("Panel { Button { }"),
            Err(ParseError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn missing_equals_fails() {
        // `TextColor rgb(...)` reads as a child record head with a bad body.
        assert!(parse_document("Panel { TextColor rgb(1, 2, 3); }").is_err());
    }

    #[test]
    fn missing_semicolon_fails() {
        assert!(parse_document("Panel { Enabled = true }").is_err());
    }

    #[test]
    fn bad_dimension_fails() {
        assert!(parse_document("Panel { Position = (10, true); }").is_err());
    }
}
