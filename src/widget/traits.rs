//! Widget capability traits.
//!
//! A widget's abilities are split into three small traits — [`Drawable`],
//! [`HitTestable`], [`FocusTarget`] — composed into the object-safe
//! [`Widget`] trait the tree stores. A widget that only paints implements
//! the defaults and overrides `draw`; an interactive widget opts into hit
//! testing and focus by overriding the others.
//!
//! Widgets are deliberately lean: visibility, enablement, focus, hover, and
//! press are tracked by the tree and handed in through [`WidgetState`], so a
//! widget only holds its own content (text, value, caches).

use std::any::Any;

use bitflags::bitflags;

use crate::backend::Backend;
use crate::config::GuiConfig;
use crate::geometry::{Point, Rect, Size};
use crate::property::value::PropertyMap;
use crate::renderer::RendererData;
use crate::signal::SignalTable;

// ---------------------------------------------------------------------------
// Events and state
// ---------------------------------------------------------------------------

/// Keyboard keys delivered to the focused widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Tab,
    BackTab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Char(char),
}

/// Events delivered to a widget by the dispatcher.
///
/// Mouse positions are in widget-local coordinates (the widget's own origin
/// is `(0, 0)`); while the widget holds pointer capture they may lie outside
/// its bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    MousePressed(Point),
    MouseMoved(Point),
    MouseReleased(Point),
    MouseEntered,
    MouseLeft,
    KeyPressed(Key),
    TextEntered(char),
    FocusGained,
    FocusLost,
}

bitflags! {
    /// Tree-tracked interaction state, passed into draw and event contexts.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct WidgetState: u8 {
        const ENABLED = 1;
        const FOCUSED = 1 << 1;
        const HOVERED = 1 << 2;
        const PRESSED = 1 << 3;
    }
}

// ---------------------------------------------------------------------------
// Contexts
// ---------------------------------------------------------------------------

/// Everything a widget needs to paint itself.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn Backend,
    /// The widget's resolved rectangle in global coordinates.
    pub rect: Rect,
    pub renderer: &'a RendererData,
    pub config: &'a GuiConfig,
    pub state: WidgetState,
}

/// Tree mutations a widget may request while handling an event. The tree
/// applies them after the handler returns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WidgetAction {
    /// Shift the widget by a delta in parent coordinates.
    MoveBy(Point),
    /// Bring the widget in front of its siblings.
    Raise,
}

/// Context handed to `handle_event`.
pub struct EventContext<'a> {
    /// The widget's resolved rectangle in global coordinates.
    pub rect: Rect,
    pub renderer: &'a RendererData,
    pub config: &'a GuiConfig,
    pub state: WidgetState,
    /// Requests collected during the handler, applied by the tree.
    pub actions: Vec<WidgetAction>,
}

impl EventContext<'_> {
    pub fn request(&mut self, action: WidgetAction) {
        self.actions.push(action);
    }
}

// ---------------------------------------------------------------------------
// Capability traits
// ---------------------------------------------------------------------------

/// Paints the widget through the backend.
pub trait Drawable {
    fn draw(&self, ctx: &mut DrawContext<'_>);
}

/// Decides which local points belong to the widget.
pub trait HitTestable {
    /// Whether a widget-local point hits this widget, given its resolved
    /// size. The default is plain rectangle containment.
    fn hit_test(&self, point: Point, size: Size) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x < size.width && point.y < size.height
    }
}

/// Participates in keyboard focus.
pub trait FocusTarget {
    /// Whether tab traversal and clicks may focus this widget.
    fn accepts_focus(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// The object-safe trait the tree stores widgets behind.
pub trait Widget: Drawable + HitTestable + FocusTarget {
    /// The kind name used in theme files (e.g. "Button").
    fn kind(&self) -> &'static str;

    /// This kind's renderer default table. The table doubles as the schema:
    /// it names every settable renderer property with its default value.
    fn default_renderer(&self) -> PropertyMap;

    /// The widget's signal table.
    fn signals(&mut self) -> &mut SignalTable;

    /// React to an event: update internal content and emit signals.
    fn handle_event(&mut self, event: &WidgetEvent, ctx: &mut EventContext<'_>);

    /// Called after a renderer property changed, so the widget can refresh
    /// derived caches. `name` is the lowercased property name.
    fn on_property_change(&mut self, _name: &str, _renderer: &RendererData) {}

    /// Downcast support for hosts that need the concrete type back.
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalTable;

    struct Inert {
        signals: SignalTable,
    }

    impl Drawable for Inert {
        fn draw(&self, _ctx: &mut DrawContext<'_>) {}
    }
    impl HitTestable for Inert {}
    impl FocusTarget for Inert {}
    impl Widget for Inert {
        fn kind(&self) -> &'static str {
            "Inert"
        }
        fn default_renderer(&self) -> PropertyMap {
            PropertyMap::new()
        }
        fn signals(&mut self) -> &mut SignalTable {
            &mut self.signals
        }
        fn handle_event(&mut self, _event: &WidgetEvent, _ctx: &mut EventContext<'_>) {}
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn default_hit_test_is_rect_containment() {
        let widget = Inert { signals: SignalTable::new::<_, &str>([]) };
        let size = Size::new(10.0, 10.0);
        assert!(widget.hit_test(Point::new(0.0, 0.0), size));
        assert!(widget.hit_test(Point::new(9.9, 9.9), size));
        assert!(!widget.hit_test(Point::new(10.0, 5.0), size));
        assert!(!widget.hit_test(Point::new(-0.1, 5.0), size));
    }

    #[test]
    fn default_focus_is_declined() {
        let widget = Inert { signals: SignalTable::new::<_, &str>([]) };
        assert!(!widget.accepts_focus());
    }

    #[test]
    fn widget_is_object_safe() {
        let widget: Box<dyn Widget> = Box::new(Inert { signals: SignalTable::new::<_, &str>([]) });
        assert_eq!(widget.kind(), "Inert");
    }
}
