//! Widget kind registry and document instantiation.

use indexmap::IndexMap;

use crate::backend::{Font, Texture};
use crate::geometry::Size;
use crate::layout::{Dim, Layout};
use crate::property::value::{Value, ValueKind};
use crate::renderer::data::PropertyError;
use crate::theme::document::WidgetRecord;
use crate::theme::parser::parse_document;
use crate::theme::writer::{record_of, write_document};
use crate::theme::ThemeError;
use crate::tree::{Gui, WidgetId};
use crate::widget::Widget;
use crate::widgets;

type Factory = Box<dyn Fn() -> Box<dyn Widget>>;

/// Maps document kind names to widget factories, case-insensitively.
pub struct WidgetRegistry {
    factories: IndexMap<String, Factory>,
}

impl WidgetRegistry {
    /// An empty registry. Documents can only be loaded through kinds
    /// registered afterwards.
    pub fn new() -> Self {
        Self { factories: IndexMap::new() }
    }

    /// A registry with every built-in kind registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(widgets::Button::KIND, || widgets::Button::boxed(""));
        registry.register(widgets::Canvas::KIND, widgets::Canvas::boxed);
        registry.register(widgets::ChildWindow::KIND, || widgets::ChildWindow::boxed(""));
        registry.register(widgets::ClickableArea::KIND, widgets::ClickableArea::boxed);
        registry.register(widgets::Label::KIND, || widgets::Label::boxed(""));
        registry.register(widgets::Panel::KIND, widgets::Panel::boxed);
        registry.register(widgets::Slider::KIND, || widgets::Slider::boxed(0.0, 100.0));
        registry
    }

    /// Register a kind. Later registrations replace earlier ones, so hosts
    /// may override a built-in.
    pub fn register<F>(&mut self, kind: &str, factory: F)
    where
        F: Fn() -> Box<dyn Widget> + 'static,
    {
        self.factories
            .insert(kind.to_ascii_lowercase(), Box::new(factory));
    }

    pub fn knows(&self, kind: &str) -> bool {
        self.factories.contains_key(&kind.to_ascii_lowercase())
    }

    /// Instantiate a widget of the given kind.
    pub fn create(&self, kind: &str) -> Option<Box<dyn Widget>> {
        self.factories
            .get(&kind.to_ascii_lowercase())
            .map(|factory| factory())
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Coerce a document value to a schema kind.
///
/// Two text shorthands are legal: a bare number for an outline (all sides)
/// and a quoted path for a texture or font.
fn coerce(name: &str, value: &Value, kind: ValueKind) -> Result<Value, PropertyError> {
    match (value, kind) {
        (Value::Number(n), ValueKind::Outline) => {
            Ok(Value::Outline(crate::geometry::Outline::all(*n)))
        }
        (Value::String(path), ValueKind::Texture) => {
            Ok(Value::Texture(Texture::new(path.clone(), Size::ZERO)))
        }
        (Value::String(path), ValueKind::Font) => Ok(Value::Font(Font::new(path.clone()))),
        (value, kind) if value.kind() == kind => Ok(value.clone()),
        (value, kind) => Err(PropertyError::TypeMismatch {
            name: name.to_string(),
            expected: kind,
            found: value.kind(),
        }),
    }
}

/// Check a record against the registry and the kind's schema without
/// touching any tree.
fn validate_record(record: &WidgetRecord, registry: &WidgetRegistry) -> Result<(), ThemeError> {
    let widget = registry
        .create(&record.kind)
        .ok_or_else(|| ThemeError::UnknownKind(record.kind.clone()))?;
    let defaults = widget.default_renderer();
    for (name, value) in record.properties.iter() {
        let default = defaults
            .get(name)
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))?;
        coerce(name, value, default.kind())?;
    }
    for child in &record.children {
        validate_record(child, registry)?;
    }
    Ok(())
}

impl Gui {
    /// Load a document and instantiate its widgets under `parent` (or at
    /// the top level).
    ///
    /// The whole document is parsed and validated before any widget is
    /// created, so a failed load leaves the tree untouched. Returns the ids
    /// of the instantiated top-level records, in document order.
    pub fn load_widgets(
        &mut self,
        parent: Option<WidgetId>,
        text: &str,
        registry: &WidgetRegistry,
    ) -> Result<Vec<WidgetId>, ThemeError> {
        let records = parse_document(text)?;
        for record in &records {
            validate_record(record, registry)?;
        }
        let mut loaded = Vec::with_capacity(records.len());
        for record in &records {
            loaded.push(self.instantiate(parent, record, registry)?);
        }
        log::debug!("loaded {} top-level widget(s)", loaded.len());
        Ok(loaded)
    }

    /// Serialize the children of `parent` (or the whole tree) into document
    /// text, omitting every attribute and property still at its default.
    pub fn save_widgets(&self, parent: Option<WidgetId>) -> String {
        let ids: Vec<WidgetId> = match parent {
            Some(id) => self.children(id).to_vec(),
            None => self.roots().to_vec(),
        };
        let records: Vec<WidgetRecord> =
            ids.iter().filter_map(|&id| record_of(self, id)).collect();
        write_document(&records)
    }

    fn instantiate(
        &mut self,
        parent: Option<WidgetId>,
        record: &WidgetRecord,
        registry: &WidgetRegistry,
    ) -> Result<WidgetId, ThemeError> {
        let widget = registry
            .create(&record.kind)
            .ok_or_else(|| ThemeError::UnknownKind(record.kind.clone()))?;
        let id = match parent {
            Some(parent_id) => self.add_child(parent_id, widget),
            None => self.add(widget),
        };
        if let Some(name) = &record.name {
            self.set_name(id, name);
        }
        let (x, y) = record.position.unwrap_or((Dim::ZERO, Dim::ZERO));
        let (width, height) = record.size.unwrap_or((Dim::ZERO, Dim::ZERO));
        self.set_layout(id, Layout { x, y, width, height });
        if let Some(visible) = record.visible {
            self.set_visible(id, visible);
        }
        if let Some(enabled) = record.enabled {
            self.set_enabled(id, enabled);
        }
        for (name, value) in record.properties.iter() {
            let kind = self
                .renderer(id)
                .and_then(|data| data.default_of(name))
                .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))?
                .kind();
            let coerced = coerce(name, value, kind)?;
            self.set_property(id, name, coerced)?;
        }
        for child in &record.children {
            self.instantiate(Some(id), child, registry)?;
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::property::color::Color;
    use crate::widgets::Button;

    const DOCUMENT: &str = r#"
        Panel("root") {
            Size = (100%, 100%);
            BackgroundColor = rgb(40, 40, 40);

            Button("ok") {
                Position = (10, 10);
                Size = (50% - 10, 24);
                TextColor = rgb(1, 2, 3);
                Borders = 2;
            }
            Label("hint") {
                Visible = false;
            }
        }
    "#;

    #[test]
    fn load_builds_the_tree() {
        let mut gui = Gui::default();
        gui.set_view_size(Size::new(400.0, 200.0));
        let registry = WidgetRegistry::with_defaults();
        let loaded = gui.load_widgets(None, DOCUMENT, &registry).unwrap();
        assert_eq!(loaded.len(), 1);

        let root = loaded[0];
        assert_eq!(gui.widget(root).unwrap().kind(), "Panel");
        assert_eq!(gui.get(root).unwrap().rect, Rect::new(0.0, 0.0, 400.0, 200.0));

        let ok = gui.find("ok").unwrap();
        assert_eq!(gui.parent(ok), Some(root));
        // (50% - 10) of the panel's 400px width.
        assert_eq!(gui.get(ok).unwrap().rect, Rect::new(10.0, 10.0, 190.0, 24.0));
        assert_eq!(
            gui.property(ok, "TextColor").unwrap().as_color().unwrap(),
            Color::new(1, 2, 3)
        );
        // Bare-number outline shorthand.
        assert_eq!(
            gui.property(ok, "Borders").unwrap().as_outline().unwrap(),
            crate::geometry::Outline::all(2.0)
        );

        let hint = gui.find("hint").unwrap();
        assert!(!gui.get(hint).unwrap().visible);
    }

    #[test]
    fn unknown_kind_fails_without_mutation() {
        let mut gui = Gui::default();
        let registry = WidgetRegistry::with_defaults();
        let err = gui
            .load_widgets(None, "Panel { }\nGizmo { }", &registry)
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownKind(kind) if kind == "Gizmo"));
        assert!(gui.is_empty());
    }

    #[test]
    fn unknown_property_fails_without_mutation() {
        let mut gui = Gui::default();
        let registry = WidgetRegistry::with_defaults();
        let err = gui
            .load_widgets(None, "Panel { Sparkle = true; }", &registry)
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Property(PropertyError::UnknownProperty(name)) if name == "Sparkle"
        ));
        assert!(gui.is_empty());
    }

    #[test]
    fn mismatched_property_kind_fails() {
        let mut gui = Gui::default();
        let registry = WidgetRegistry::with_defaults();
        let err = gui
            .load_widgets(None, "Panel { BackgroundColor = 3; }", &registry)
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Property(PropertyError::TypeMismatch { .. })
        ));
        assert!(gui.is_empty());
    }

    #[test]
    fn save_load_round_trips_shape_and_properties() {
        let mut gui = Gui::default();
        gui.set_view_size(Size::new(400.0, 200.0));
        let registry = WidgetRegistry::with_defaults();
        gui.load_widgets(None, DOCUMENT, &registry).unwrap();

        let saved = gui.save_widgets(None);
        let mut restored = Gui::default();
        restored.set_view_size(Size::new(400.0, 200.0));
        restored.load_widgets(None, &saved, &registry).unwrap();

        assert_eq!(restored.len(), gui.len());
        let ok = restored.find("ok").unwrap();
        assert_eq!(restored.widget(ok).unwrap().kind(), "Button");
        assert_eq!(restored.get(ok).unwrap().rect, Rect::new(10.0, 10.0, 190.0, 24.0));
        assert_eq!(
            restored.property(ok, "TextColor").unwrap().as_color().unwrap(),
            Color::new(1, 2, 3)
        );
        // Saving the restored tree reproduces the same document.
        assert_eq!(restored.save_widgets(None), saved);
    }

    #[test]
    fn save_omits_defaults() {
        let mut gui = Gui::default();
        let panel = gui.add(crate::widgets::Panel::boxed());
        gui.set_name(panel, "p");
        let saved = gui.save_widgets(None);
        assert_eq!(saved, "Panel(\"p\") {\n}\n");
    }

    #[test]
    fn host_registered_kind_loads() {
        let mut gui = Gui::default();
        let mut registry = WidgetRegistry::with_defaults();
        registry.register("FancyButton", || Button::boxed("fancy"));
        let loaded = gui
            .load_widgets(None, "FancyButton { }", &registry)
            .unwrap();
        // The factory decides the concrete kind.
        assert_eq!(gui.widget(loaded[0]).unwrap().kind(), "Button");
    }
}
