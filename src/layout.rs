//! Relative layout dimensions.
//!
//! A widget's position and size are stored as [`Dim`] expressions of its
//! parent's size, e.g. `"50% - 10"` resolves to half the parent extent minus
//! ten pixels. Resolution is pure arithmetic; the widget tree decides when to
//! re-resolve (on parent resize and on layout changes).

use std::fmt;
use std::str::FromStr;

use crate::geometry::{Point, Rect, Size};
use crate::property::parser::{Cursor, ParseError};
use crate::property::tokenizer::{tokenize, Token};
use crate::property::value::fmt_number;

/// One layout dimension: `ratio * parent + offset`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dim {
    pub ratio: f32,
    pub offset: f32,
}

impl Dim {
    pub const ZERO: Dim = Dim { ratio: 0.0, offset: 0.0 };

    /// A fixed pixel dimension, independent of the parent.
    pub const fn absolute(offset: f32) -> Self {
        Self { ratio: 0.0, offset }
    }

    /// A pure fraction of the parent extent (`1.0` = 100%).
    pub const fn relative(ratio: f32) -> Self {
        Self { ratio, offset: 0.0 }
    }

    /// Whether the resolved value ignores the parent extent.
    pub fn is_constant(self) -> bool {
        self.ratio == 0.0
    }

    /// Resolve against a parent extent.
    pub fn resolve(self, parent: f32) -> f32 {
        self.ratio * parent + self.offset
    }
}

impl FromStr for Dim {
    type Err = ParseError;

    /// Parse expressions like `10`, `50%`, `50% - 10`, `25% + 5`.
    ///
    /// Terms may repeat; percent terms accumulate into the ratio and plain
    /// numbers into the offset.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lexemes = tokenize(text).ok_or(ParseError::Unlexable)?;
        let mut cursor = Cursor::new(lexemes);
        let dim = parse_dim_tokens(&mut cursor, None)?;
        cursor.expect_eof()?;
        Ok(dim)
    }
}

/// Accumulate `50% - 10` style terms from a token cursor, stopping at the
/// given token (or at end of input when `stop` is `None`). Shared with the
/// theme parser for `Position` / `Size` pairs.
pub(crate) fn parse_dim_tokens(
    cursor: &mut Cursor,
    stop: Option<Token>,
) -> Result<Dim, ParseError> {
    let mut dim = Dim::ZERO;
    loop {
        let lexeme = match cursor.peek() {
            Some(lexeme) if Some(lexeme.token) == stop => return Ok(dim),
            Some(lexeme) => lexeme.clone(),
            None if stop.is_none() => return Ok(dim),
            None => return Err(ParseError::UnexpectedEof("a layout dimension".into())),
        };
        let (sign, term) = match lexeme.token {
            Token::Plus | Token::Minus => {
                let sign = if lexeme.token == Token::Minus { -1.0 } else { 1.0 };
                cursor.advance();
                let term = cursor.advance().ok_or_else(|| {
                    ParseError::UnexpectedEof("a layout term after the sign".into())
                })?;
                (sign, term)
            }
            // A signed number continues the sum without an operator.
            Token::Number | Token::Dimension => {
                cursor.advance();
                (1.0, lexeme)
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    position: lexeme.pos,
                    message: format!("expected a layout term, got '{}'", lexeme.text),
                })
            }
        };
        match term.token {
            Token::Number => {
                let n: f32 = term
                    .text
                    .parse()
                    .map_err(|_| ParseError::MalformedNumber(term.text.clone()))?;
                dim.offset += sign * n;
            }
            Token::Dimension => {
                let digits = term.text.trim_end_matches('%');
                let n: f32 = digits
                    .parse()
                    .map_err(|_| ParseError::MalformedNumber(term.text.clone()))?;
                dim.ratio += sign * n / 100.0;
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    position: term.pos,
                    message: format!("expected a layout term, got '{}'", term.text),
                })
            }
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ratio == 0.0 {
            return write!(f, "{}", fmt_number(self.offset));
        }
        write!(f, "{}%", fmt_number(self.ratio * 100.0))?;
        if self.offset > 0.0 {
            write!(f, " + {}", fmt_number(self.offset))?;
        } else if self.offset < 0.0 {
            write!(f, " - {}", fmt_number(-self.offset))?;
        }
        Ok(())
    }
}

/// A widget's full layout: position and size, each as a pair of dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub x: Dim,
    pub y: Dim,
    pub width: Dim,
    pub height: Dim,
}

impl Layout {
    /// A fixed rectangle in parent coordinates.
    pub fn fixed(rect: Rect) -> Self {
        Self {
            x: Dim::absolute(rect.x),
            y: Dim::absolute(rect.y),
            width: Dim::absolute(rect.width),
            height: Dim::absolute(rect.height),
        }
    }

    /// Resolve into a concrete rectangle, relative to the parent's origin.
    pub fn resolve(&self, parent: Size) -> Rect {
        Rect::from_parts(
            Point::new(self.x.resolve(parent.width), self.y.resolve(parent.height)),
            Size::new(
                self.width.resolve(parent.width).max(0.0),
                self.height.resolve(parent.height).max(0.0),
            ),
        )
    }
}

/// Parse a `(x, y)` dimension pair, as used by `Position` and `Size`
/// attributes in theme files.
pub fn parse_dim_pair(text: &str) -> Result<(Dim, Dim), ParseError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ParseError::UnexpectedEof("a '(x, y)' pair".into()))?;
    let (x, y) = inner.split_once(',').ok_or_else(|| {
        ParseError::UnexpectedEof("a comma between the pair's dimensions".into())
    })?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

/// Format a `(x, y)` dimension pair.
pub fn format_dim_pair(x: Dim, y: Dim) -> String {
    format!("({x}, {y})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_dims() {
        let dim: Dim = "10".parse().unwrap();
        assert_eq!(dim, Dim::absolute(10.0));
        assert_eq!(dim.resolve(400.0), 10.0);
        assert!(dim.is_constant());
    }

    #[test]
    fn relative_dims() {
        let dim: Dim = "50%".parse().unwrap();
        assert_eq!(dim, Dim::relative(0.5));
        assert_eq!(dim.resolve(400.0), 200.0);
        assert!(!dim.is_constant());
    }

    #[test]
    fn mixed_expression() {
        let dim: Dim = "50% - 10".parse().unwrap();
        assert_eq!(dim, Dim { ratio: 0.5, offset: -10.0 });
        assert_eq!(dim.resolve(400.0), 190.0);
    }

    #[test]
    fn addition_and_repeats() {
        let dim: Dim = "25% + 25% + 5".parse().unwrap();
        assert_eq!(dim, Dim { ratio: 0.5, offset: 5.0 });
    }

    #[test]
    fn negative_number_without_operator() {
        // "50%-10" lexes the offset as a signed number.
        let dim: Dim = "50%-10".parse().unwrap();
        assert_eq!(dim, Dim { ratio: 0.5, offset: -10.0 });
    }

    #[test]
    fn garbage_fails() {
        assert!("50% - banana".parse::<Dim>().is_err());
        assert!("+".parse::<Dim>().is_err());
    }

    #[test]
    fn empty_is_zero() {
        let dim: Dim = "".parse().unwrap();
        assert_eq!(dim, Dim::ZERO);
    }

    #[test]
    fn display_round_trips() {
        for text in ["10", "50%", "50% - 10", "25% + 5", "-3.5"] {
            let dim: Dim = text.parse().unwrap();
            let reparsed: Dim = dim.to_string().parse().unwrap();
            assert_eq!(dim, reparsed, "failed for {text:?}");
        }
        assert_eq!("50% - 10".parse::<Dim>().unwrap().to_string(), "50% - 10");
    }

    #[test]
    fn layout_resolve() {
        let layout = Layout {
            x: Dim::absolute(10.0),
            y: Dim::relative(0.25),
            width: "50% - 10".parse().unwrap(),
            height: Dim::absolute(30.0),
        };
        let rect = layout.resolve(Size::new(400.0, 200.0));
        assert_eq!(rect, Rect::new(10.0, 50.0, 190.0, 30.0));
    }

    #[test]
    fn layout_clamps_negative_size() {
        let layout = Layout {
            width: Dim::absolute(-5.0),
            ..Layout::default()
        };
        assert_eq!(layout.resolve(Size::new(100.0, 100.0)).width, 0.0);
    }

    #[test]
    fn dim_pairs() {
        let (x, y) = parse_dim_pair("(10, 50% - 10)").unwrap();
        assert_eq!(x, Dim::absolute(10.0));
        assert_eq!(y, Dim { ratio: 0.5, offset: -10.0 });
        assert_eq!(format_dim_pair(x, y), "(10, 50% - 10)");
        assert!(parse_dim_pair("10, 20").is_err());
    }
}
