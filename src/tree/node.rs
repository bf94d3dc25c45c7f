//! Per-widget node data.

use slotmap::new_key_type;

use crate::geometry::Rect;
use crate::layout::Layout;
use crate::renderer::RendererId;
use crate::widget::Widget;

new_key_type! {
    /// Key of a widget node in the tree arena.
    pub struct WidgetId;
}

/// One node in the widget tree: the widget itself plus the tree-tracked
/// state shared by every kind.
pub struct NodeData {
    pub widget: Box<dyn Widget>,
    /// Optional lookup name, stored lowercased.
    pub name: Option<String>,
    /// Position and size as expressions of the parent extent.
    pub layout: Layout,
    /// The resolved rectangle, in parent coordinates.
    pub rect: Rect,
    pub visible: bool,
    pub enabled: bool,
    /// The renderer record this widget styles itself from. May be shared
    /// with other nodes; the arena tracks the holders.
    pub renderer: RendererId,
}

impl NodeData {
    pub(crate) fn new(widget: Box<dyn Widget>, renderer: RendererId) -> Self {
        Self {
            widget,
            name: None,
            layout: Layout::default(),
            rect: Rect::EMPTY,
            visible: true,
            enabled: true,
            renderer,
        }
    }
}
