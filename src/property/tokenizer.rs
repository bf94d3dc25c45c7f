//! logos-based lexer for the theme text format.
//!
//! One token set serves the property-value parser, the layout-expression
//! parser, and the widget-tree parser. Token priority in logos is determined
//! by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats `#` failing to lex)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `50%` matches [`Token::Dimension`], not `Number` + stray `%`
//! - `-10` matches [`Token::Number`], while a lone `-` is [`Token::Minus`]
//! - `#ff00aa` matches [`Token::HexColor`]

use logos::Logos;

/// Token produced by the theme-format lexer.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Percentage dimension used by layout expressions: `50%`, `-12.5%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?%")]
    Dimension,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Double-quoted string literal with `\"` and `\\` escapes.
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,

    /// Identifier: widget kinds, property names, color names, flag names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `=`
    #[token("=")]
    Equals,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `|`
    #[token("|")]
    Pipe,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,
}

/// A lexed token together with its source slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    /// Index in the token stream, for error reporting.
    pub pos: usize,
}

/// Tokenize a theme-format string into [`Lexeme`]s.
///
/// Returns `None` if any span fails to lex (e.g. a stray `@`); the value and
/// tree parsers treat that as a structural error rather than skipping bytes.
pub fn tokenize(input: &str) -> Option<Vec<Lexeme>> {
    let lexer = Token::lexer(input);
    let mut out = Vec::new();
    for (result, span) in lexer.spanned() {
        match result {
            Ok(token) => out.push(Lexeme {
                token,
                text: input[span].to_string(),
                pos: out.len(),
            }),
            Err(()) => return None,
        }
    }
    Some(out)
}

/// Unquote a [`Token::StringLiteral`] slice, resolving `\"` and `\\` escapes.
pub fn unquote(text: &str) -> String {
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Quote a string for the theme format, escaping `"` and `\`.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return just the token variants.
    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|l| l.token).collect()
    }

    // ── Punctuation ──────────────────────────────────────────────────

    #[test]
    fn punctuation() {
        assert_eq!(
            tokens("{ } ( ) = ; , | + -"),
            vec![
                Token::BraceOpen,
                Token::BraceClose,
                Token::ParenOpen,
                Token::ParenClose,
                Token::Equals,
                Token::Semicolon,
                Token::Comma,
                Token::Pipe,
                Token::Plus,
                Token::Minus,
            ]
        );
    }

    // ── Numbers vs dimensions vs minus ───────────────────────────────

    #[test]
    fn plain_numbers() {
        let lexed = tokenize("10 -5 3.14 0").unwrap();
        assert_eq!(lexed[0].token, Token::Number);
        assert_eq!(lexed[1].text, "-5");
        assert_eq!(lexed[2].text, "3.14");
    }

    #[test]
    fn dimension_over_number() {
        assert_eq!(tokens("50%"), vec![Token::Dimension]);
        assert_eq!(tokens("-12.5%"), vec![Token::Dimension]);
    }

    #[test]
    fn lone_minus_is_minus() {
        // "50% - 10": the spaced minus stays an operator, "-10" glued to a
        // number lexes as a signed number.
        assert_eq!(tokens("50% - 10"), vec![Token::Dimension, Token::Minus, Token::Number]);
        assert_eq!(tokens("50% -10"), vec![Token::Dimension, Token::Number]);
    }

    // ── Hex colors ───────────────────────────────────────────────────

    #[test]
    fn hex_colors() {
        let lexed = tokenize("#fff #ff00aa #ff00aa80").unwrap();
        assert!(lexed.iter().all(|l| l.token == Token::HexColor));
    }

    // ── Strings ──────────────────────────────────────────────────────

    #[test]
    fn string_literal() {
        let lexed = tokenize(r#""hello world""#).unwrap();
        assert_eq!(lexed[0].token, Token::StringLiteral);
        assert_eq!(unquote(&lexed[0].text), "hello world");
    }

    #[test]
    fn string_escapes_round_trip() {
        let original = "a \"quoted\" \\ back\nslash";
        let quoted = quote(original);
        let lexed = tokenize(&quoted).unwrap();
        assert_eq!(lexed.len(), 1);
        assert_eq!(unquote(&lexed[0].text), original);
    }

    // ── Idents ───────────────────────────────────────────────────────

    #[test]
    fn idents() {
        let lexed = tokenize("Button BackgroundColor _private rgb").unwrap();
        assert!(lexed.iter().all(|l| l.token == Token::Ident));
    }

    // ── Comments and whitespace ──────────────────────────────────────

    #[test]
    fn line_comments_skipped() {
        let result = tokens("Button // the ok button\n{ }");
        assert_eq!(result, vec![Token::Ident, Token::BraceOpen, Token::BraceClose]);
    }

    #[test]
    fn whitespace_only() {
        assert!(tokenize("  \t\n ").unwrap().is_empty());
    }

    #[test]
    fn invalid_byte_fails() {
        assert!(tokenize("Button @ {}").is_none());
    }

    // ── Full record ──────────────────────────────────────────────────

    #[test]
    fn full_widget_record() {
        let input = r#"Button("ok") { TextColor = rgb(20, 30, 40); }"#;
        let result = tokens(input);
        assert_eq!(
            result,
            vec![
                Token::Ident,
                Token::ParenOpen,
                Token::StringLiteral,
                Token::ParenClose,
                Token::BraceOpen,
                Token::Ident,
                Token::Equals,
                Token::Ident,
                Token::ParenOpen,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::ParenClose,
                Token::Semicolon,
                Token::BraceClose,
            ]
        );
    }
}
