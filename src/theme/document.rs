//! The parsed form of a widget-tree document.

use crate::layout::Dim;
use crate::property::value::PropertyMap;

/// One widget entry in a loaded or saved document: its kind, optional name,
/// common attributes, renderer property overrides, and children in sibling
/// order.
///
/// Common attributes are `None` when the document leaves them at their
/// defaults; the writer omits them symmetrically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetRecord {
    pub kind: String,
    pub name: Option<String>,
    pub position: Option<(Dim, Dim)>,
    pub size: Option<(Dim, Dim)>,
    pub visible: Option<bool>,
    pub enabled: Option<bool>,
    pub properties: PropertyMap,
    pub children: Vec<WidgetRecord>,
}

impl WidgetRecord {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), ..Self::default() }
    }
}
