//! Renderer property records.
//!
//! A [`RendererData`] is the styling half of a widget: a schema of known
//! properties with their defaults, plus the overrides set by the host or a
//! loaded theme. The schema comes from the widget kind's default table, so
//! "property exists" and "property has the right kind" are both checked at
//! set time, and saving a tree only needs the overrides.

use crate::property::value::{PropertyMap, Value, ValueKind};

/// Errors from setting a renderer property.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("renderer has no property named '{0}'")]
    UnknownProperty(String),
    #[error("property '{name}' expects a {expected} value, got {found}")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("renderer record no longer exists")]
    StaleRenderer,
}

/// One renderer record: per-property defaults plus explicit overrides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RendererData {
    defaults: PropertyMap,
    overrides: PropertyMap,
}

impl RendererData {
    /// Create a record from a widget kind's default table. The table doubles
    /// as the schema: only its property names, with matching value kinds, can
    /// be set later.
    pub fn with_defaults(defaults: PropertyMap) -> Self {
        Self { defaults, overrides: PropertyMap::new() }
    }

    /// The effective value of a property: the override if set, else the
    /// default. `None` for names outside the schema.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.overrides.get(name).or_else(|| self.defaults.get(name))
    }

    /// The default value of a property, ignoring overrides.
    pub fn default_of(&self, name: &str) -> Option<&Value> {
        self.defaults.get(name)
    }

    /// Whether the schema knows this property name.
    pub fn knows(&self, name: &str) -> bool {
        self.defaults.contains(name)
    }

    /// Set an override, validated against the schema.
    ///
    /// Setting a property back to its default value removes the override, so
    /// the overrides map always holds exactly the properties that differ.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), PropertyError> {
        let default = self
            .defaults
            .get(name)
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))?;
        if value.kind() != default.kind() {
            return Err(PropertyError::TypeMismatch {
                name: name.to_string(),
                expected: default.kind(),
                found: value.kind(),
            });
        }
        if value == *default {
            self.overrides.remove(name);
        } else {
            self.overrides.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Remove an override, reverting the property to its default. Returns
    /// whether an override was present.
    pub fn reset(&mut self, name: &str) -> bool {
        self.overrides.remove(name).is_some()
    }

    /// The properties that differ from their defaults, in set order.
    pub fn overrides(&self) -> &PropertyMap {
        &self.overrides
    }

    /// Every known property with its effective value, in schema order.
    pub fn effective(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.defaults.iter().map(|(name, default)| {
            (name, self.overrides.get(name).unwrap_or(default))
        })
    }
}
