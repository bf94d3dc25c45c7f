//! The dynamically-typed property value container.
//!
//! [`Value`] is the tagged union stored in renderer property maps and theme
//! documents. The active tag determines which accessor succeeds; the others
//! return [`ValueError::TypeMismatch`]. Text forms are produced here
//! (serialization) and consumed by [`crate::property::parser`].

use std::fmt;

use indexmap::IndexMap;

use crate::backend::{Font, Texture};
use crate::geometry::Outline;
use crate::property::color::Color;
use crate::property::text_style::TextStyle;
use crate::property::tokenizer::quote;
use crate::theme::document::WidgetRecord;

/// The tag of a [`Value`], used for schema checks and parse hints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Number,
    String,
    Color,
    Outline,
    Texture,
    Font,
    TextStyle,
    Widgets,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Color => "color",
            ValueKind::Outline => "outline",
            ValueKind::Texture => "texture",
            ValueKind::Font => "font",
            ValueKind::TextStyle => "text style",
            ValueKind::Widgets => "widget list",
            ValueKind::Map => "property map",
        };
        write!(f, "{name}")
    }
}

/// Error from accessing a [`Value`] through the wrong tag.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },
}

/// A dynamically-typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f32),
    String(String),
    Color(Color),
    Outline(Outline),
    Texture(Texture),
    Font(Font),
    TextStyle(TextStyle),
    Widgets(Vec<WidgetRecord>),
    Map(PropertyMap),
}

impl Value {
    /// The active tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Color(_) => ValueKind::Color,
            Value::Outline(_) => ValueKind::Outline,
            Value::Texture(_) => ValueKind::Texture,
            Value::Font(_) => ValueKind::Font,
            Value::TextStyle(_) => ValueKind::TextStyle,
            Value::Widgets(_) => ValueKind::Widgets,
            Value::Map(_) => ValueKind::Map,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        ValueError::TypeMismatch { expected, found: self.kind() }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_number(&self) -> Result<f32, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn as_color(&self) -> Result<Color, ValueError> {
        match self {
            Value::Color(c) => Ok(*c),
            other => Err(other.mismatch(ValueKind::Color)),
        }
    }

    pub fn as_outline(&self) -> Result<Outline, ValueError> {
        match self {
            Value::Outline(o) => Ok(*o),
            other => Err(other.mismatch(ValueKind::Outline)),
        }
    }

    pub fn as_texture(&self) -> Result<&Texture, ValueError> {
        match self {
            Value::Texture(t) => Ok(t),
            other => Err(other.mismatch(ValueKind::Texture)),
        }
    }

    pub fn as_font(&self) -> Result<&Font, ValueError> {
        match self {
            Value::Font(font) => Ok(font),
            other => Err(other.mismatch(ValueKind::Font)),
        }
    }

    pub fn as_text_style(&self) -> Result<TextStyle, ValueError> {
        match self {
            Value::TextStyle(s) => Ok(*s),
            other => Err(other.mismatch(ValueKind::TextStyle)),
        }
    }

    pub fn as_widgets(&self) -> Result<&[WidgetRecord], ValueError> {
        match self {
            Value::Widgets(w) => Ok(w),
            other => Err(other.mismatch(ValueKind::Widgets)),
        }
    }

    pub fn as_map(&self) -> Result<&PropertyMap, ValueError> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(other.mismatch(ValueKind::Map)),
        }
    }

    /// Serialize to the theme text form.
    ///
    /// Round-trip law: parsing the result with this value's kind as the hint
    /// yields an equal value.
    pub fn serialize(&self) -> String {
        self.serialize_indented(0)
    }

    pub(crate) fn serialize_indented(&self, indent: usize) -> String {
        match self {
            Value::Bool(b) => if *b { "true".into() } else { "false".into() },
            Value::Number(n) => fmt_number(*n),
            Value::String(s) => quote(s),
            Value::Color(c) => c.to_string(),
            Value::Outline(o) => format!(
                "({}, {}, {}, {})",
                fmt_number(o.left),
                fmt_number(o.top),
                fmt_number(o.right),
                fmt_number(o.bottom)
            ),
            Value::Texture(t) => quote(t.path()),
            Value::Font(font) => quote(font.path()),
            Value::TextStyle(s) => s.to_string(),
            Value::Widgets(records) => {
                let mut out = String::from("{\n");
                for record in records {
                    out.push_str(&crate::theme::writer::write_record(record, indent + 1));
                }
                out.push_str(&"    ".repeat(indent));
                out.push('}');
                out
            }
            Value::Map(map) => {
                let pad = "    ".repeat(indent + 1);
                let mut out = String::from("{\n");
                for (name, value) in map.iter() {
                    out.push_str(&pad);
                    out.push_str(name);
                    out.push_str(" = ");
                    out.push_str(&value.serialize_indented(indent + 1));
                    out.push_str(";\n");
                }
                out.push_str(&"    ".repeat(indent));
                out.push('}');
                out
            }
        }
    }
}

/// Format a number the way the theme format writes it: no trailing `.0` for
/// integral values.
pub(crate) fn fmt_number(n: f32) -> String {
    if n.fract() == 0.0 && n.abs() < 1e9 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

// ---------------------------------------------------------------------------
// PropertyMap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    /// The property name as first given, preserved for serialization.
    name: String,
    value: Value,
}

/// An insertion-ordered, case-insensitive map from property name to [`Value`].
///
/// Lookups ignore ASCII case; the name's original casing is kept so that
/// serialization emits the canonical form (`TextColor`, not `textcolor`).
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: IndexMap<String, Entry>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property. Replacement keeps the original casing of
    /// the first insertion and the original insertion position.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        let key = name.to_ascii_lowercase();
        match self.entries.get_mut(&key) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(key, Entry { name, value });
            }
        }
    }

    /// Look up a property, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(&name.to_ascii_lowercase()).map(|e| &e.value)
    }

    /// Whether the map has a property with this name (ignoring case).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries
            .shift_remove(&name.to_ascii_lowercase())
            .map(|e| e.value)
    }

    /// Iterate `(canonical name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.values().map(|e| (e.name.as_str(), &e.value))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for PropertyMap {
    /// Order-insensitive, case-insensitive comparison: two maps are equal
    /// when they hold equal values under the same (lowercased) names.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, entry)| other.entries.get(key).is_some_and(|e| e.value == entry.value))
    }
}

impl FromIterator<(String, Value)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut map = PropertyMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

// ===========================================================================
// Tests
// ===========================================================================
