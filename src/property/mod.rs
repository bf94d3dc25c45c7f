//! Property values and their text forms.
//!
//! Every themeable widget attribute is stored as a [`value::Value`], a tagged
//! union whose text forms are what the theme file format is built from. The
//! submodules split the concern: [`tokenizer`] lexes the shared token stream,
//! [`parser`] turns text into values, and [`color`] / [`text_style`] hold the
//! two value payloads with non-trivial semantics of their own.

pub mod color;
pub mod parser;
pub mod text_style;
pub mod tokenizer;
pub mod value;

pub use color::Color;
pub use parser::{parse_value, parse_value_untyped, ParseError};
pub use text_style::TextStyle;
pub use value::{PropertyMap, Value, ValueError, ValueKind};
