//! The widget tree: insert, remove, z-order, layout, styling, focus.
//!
//! All nodes live in one `SlotMap`. Parent/child links sit in secondary maps
//! so removal is O(subtree) and lookup is O(1). Sibling order is z-order:
//! earlier children draw first (back), later children draw on top, and hit
//! testing walks the same lists in reverse.

use slotmap::{SecondaryMap, SlotMap};

use crate::config::GuiConfig;
use crate::geometry::{Point, Rect, Size};
use crate::layout::Layout;
use crate::property::parser::ParseError;
use crate::property::value::Value;
use crate::renderer::data::{PropertyError, RendererData};
use crate::renderer::RendererArena;
use crate::signal::{Payload, SignalError, SlotId};
use crate::tree::node::{NodeData, WidgetId};
use crate::widget::{DrawContext, EventContext, Widget, WidgetAction, WidgetEvent, WidgetState};

const EMPTY_CHILDREN: &[WidgetId] = &[];

/// Errors from the host-facing tree API.
#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error(transparent)]
    Property(#[from] PropertyError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Signal(#[from] SignalError),
    #[error("widget no longer exists")]
    StaleWidget,
}

/// The root object owning every widget, their renderer records, and the
/// interaction state (focus, hover, pointer capture).
pub struct Gui {
    pub(crate) nodes: SlotMap<WidgetId, NodeData>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    roots: Vec<WidgetId>,
    pub(crate) renderers: RendererArena,
    config: GuiConfig,
    view_size: Size,
    pub(crate) focus: Option<WidgetId>,
    pub(crate) hover: Option<WidgetId>,
    pub(crate) capture: Option<WidgetId>,
}

impl Gui {
    pub fn new(config: GuiConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            roots: Vec::new(),
            renderers: RendererArena::new(),
            config,
            view_size: Size::ZERO,
            focus: None,
            hover: None,
            capture: None,
        }
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// The size widgets at the top level resolve their layouts against.
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Resize the view and re-resolve every layout.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
        self.relayout();
    }

    // ── Insertion and removal ────────────────────────────────────────

    /// Add a top-level widget, in front of existing top-level widgets.
    pub fn add(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = self.insert_node(widget);
        self.roots.push(id);
        self.relayout_subtree(id);
        id
    }

    /// Add a widget as the frontmost child of `parent`.
    pub fn add_child(&mut self, parent: WidgetId, widget: Box<dyn Widget>) -> WidgetId {
        debug_assert!(self.nodes.contains_key(parent), "parent widget does not exist");
        let id = self.insert_node(widget);
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        self.relayout_subtree(id);
        id
    }

    fn insert_node(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let renderer = self
            .renderers
            .insert(RendererData::with_defaults(widget.default_renderer()));
        let id = self.nodes.insert(NodeData::new(widget, renderer));
        self.children.insert(id, Vec::new());
        id
    }

    /// Remove a widget and its whole subtree. Focus, hover, and capture are
    /// cleared when they pointed into the removed subtree. Returns whether
    /// the widget existed.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }
        self.roots.retain(|&root| root != id);

        let subtree = self.walk_depth_first(id);
        for &node_id in &subtree {
            if self.focus == Some(node_id) {
                self.focus = None;
            }
            if self.hover == Some(node_id) {
                self.hover = None;
            }
            if self.capture == Some(node_id) {
                self.capture = None;
            }
            self.parent.remove(node_id);
            self.children.remove(node_id);
            if let Some(node) = self.nodes.remove(node_id) {
                self.renderers.release(node.renderer);
            }
        }
        true
    }

    // ── Lookup ───────────────────────────────────────────────────────

    pub fn get(&self, id: WidgetId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|node| node.widget.as_ref())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.nodes.get_mut(id).map(|node| node.widget.as_mut())
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// A widget's children, back to front.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(id).map_or(EMPTY_CHILDREN, Vec::as_slice)
    }

    /// Top-level widgets, back to front.
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    /// Assign a lookup name. Names are matched case-insensitively.
    pub fn set_name(&mut self, id: WidgetId, name: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.name = Some(name.to_ascii_lowercase());
        }
    }

    /// Find a widget by name anywhere in the tree (case-insensitive,
    /// depth-first from the back).
    pub fn find(&self, name: &str) -> Option<WidgetId> {
        let wanted = name.to_ascii_lowercase();
        let mut stack: Vec<WidgetId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                if node.name.as_deref() == Some(wanted.as_str()) {
                    return Some(id);
                }
            }
            stack.extend(self.children(id).iter().rev());
        }
        None
    }

    /// Every widget in the subtree under `start`, parents before children.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if !self.nodes.contains_key(id) {
                continue;
            }
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    fn walk_all(&self) -> Vec<WidgetId> {
        let mut order = Vec::new();
        for &root in &self.roots {
            order.extend(self.walk_depth_first(root));
        }
        order
    }

    // ── Z-order ──────────────────────────────────────────────────────

    /// Move a widget in front of its siblings.
    pub fn move_to_front(&mut self, id: WidgetId) {
        let list = match self.parent.get(id) {
            Some(&parent_id) => self.children.get_mut(parent_id),
            None => Some(&mut self.roots),
        };
        if let Some(list) = list {
            if let Some(index) = list.iter().position(|&entry| entry == id) {
                list.remove(index);
                list.push(id);
            }
        }
    }

    /// Move a widget behind its siblings.
    pub fn move_to_back(&mut self, id: WidgetId) {
        let list = match self.parent.get(id) {
            Some(&parent_id) => self.children.get_mut(parent_id),
            None => Some(&mut self.roots),
        };
        if let Some(list) = list {
            if let Some(index) = list.iter().position(|&entry| entry == id) {
                list.remove(index);
                list.insert(0, id);
            }
        }
    }

    // ── Layout ───────────────────────────────────────────────────────

    /// Replace a widget's layout and re-resolve its subtree.
    pub fn set_layout(&mut self, id: WidgetId, layout: Layout) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.layout = layout;
            self.relayout_subtree(id);
        }
    }

    /// Convenience: place a widget at a fixed rectangle.
    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) {
        self.set_layout(id, Layout::fixed(rect));
    }

    /// Re-resolve every widget against the current view size.
    pub fn relayout(&mut self) {
        for index in 0..self.roots.len() {
            self.relayout_subtree(self.roots[index]);
        }
    }

    fn relayout_subtree(&mut self, id: WidgetId) {
        let parent_size = match self.parent.get(id) {
            Some(&parent_id) => match self.nodes.get(parent_id) {
                Some(parent) => parent.rect.size(),
                None => return,
            },
            None => self.view_size,
        };
        self.resolve_into(id, parent_size);
    }

    fn resolve_into(&mut self, id: WidgetId, parent_size: Size) {
        let size = match self.nodes.get_mut(id) {
            Some(node) => {
                node.rect = node.layout.resolve(parent_size);
                node.rect.size()
            }
            None => return,
        };
        let child_ids: Vec<WidgetId> = self.children(id).to_vec();
        for child in child_ids {
            self.resolve_into(child, size);
        }
    }

    /// A widget's resolved rectangle in global coordinates.
    pub fn global_rect(&self, id: WidgetId) -> Option<Rect> {
        let node = self.nodes.get(id)?;
        let mut rect = node.rect;
        let mut current = id;
        while let Some(&parent_id) = self.parent.get(current) {
            let parent = self.nodes.get(parent_id)?;
            rect = rect.translate(parent.rect.position());
            current = parent_id;
        }
        Some(rect)
    }

    // ── Visibility and enablement ────────────────────────────────────

    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visible = visible;
        }
        if !visible {
            self.drop_interaction_within(id);
        }
    }

    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.enabled = enabled;
        }
        if !enabled {
            self.drop_interaction_within(id);
        }
    }

    /// Clear focus/hover/capture that point into a subtree, with the usual
    /// leave/blur notifications.
    fn drop_interaction_within(&mut self, id: WidgetId) {
        if self.focus.is_some_and(|f| self.is_in_subtree(f, id)) {
            self.set_focus(None);
        }
        if self.hover.is_some_and(|h| self.is_in_subtree(h, id)) {
            if let Some(hovered) = self.hover.take() {
                self.send(hovered, WidgetEvent::MouseLeft);
            }
        }
        if self.capture.is_some_and(|c| self.is_in_subtree(c, id)) {
            self.capture = None;
        }
    }

    fn is_in_subtree(&self, id: WidgetId, ancestor: WidgetId) -> bool {
        let mut current = id;
        loop {
            if current == ancestor {
                return true;
            }
            match self.parent.get(current) {
                Some(&parent_id) => current = parent_id,
                None => return false,
            }
        }
    }

    /// Whether a widget and all its ancestors are visible.
    pub fn is_shown(&self, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(node_id) {
                Some(node) if node.visible => current = self.parent(node_id),
                _ => return false,
            }
        }
        true
    }

    /// Whether a widget and all its ancestors are enabled.
    pub fn is_interactive(&self, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(node_id) {
                Some(node) if node.enabled => current = self.parent(node_id),
                _ => return false,
            }
        }
        true
    }

    // ── Renderer properties ──────────────────────────────────────────

    /// Set a renderer property from an already-typed value.
    ///
    /// Detaches a shared renderer record first (copy-on-write), then lets
    /// the widget refresh its caches.
    pub fn set_property(&mut self, id: WidgetId, name: &str, value: Value) -> Result<(), GuiError> {
        let renderer = self.nodes.get(id).ok_or(GuiError::StaleWidget)?.renderer;
        let new_renderer = self.renderers.set(renderer, name, value)?;
        self.after_property_change(id, new_renderer, name);
        Ok(())
    }

    /// Set a renderer property from its text form, parsed against the
    /// property's schema kind.
    pub fn set_property_text(
        &mut self,
        id: WidgetId,
        name: &str,
        text: &str,
    ) -> Result<(), GuiError> {
        let renderer = self.nodes.get(id).ok_or(GuiError::StaleWidget)?.renderer;
        let kind = self
            .renderers
            .get(renderer)
            .and_then(|data| data.default_of(name))
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))?
            .kind();
        let value = crate::property::parser::parse_value(text, kind)?;
        let new_renderer = self.renderers.set(renderer, name, value)?;
        self.after_property_change(id, new_renderer, name);
        Ok(())
    }

    /// Revert a renderer property to its default.
    pub fn reset_property(&mut self, id: WidgetId, name: &str) -> Result<(), GuiError> {
        let renderer = self.nodes.get(id).ok_or(GuiError::StaleWidget)?.renderer;
        let new_renderer = self.renderers.reset(renderer, name);
        self.after_property_change(id, new_renderer, name);
        Ok(())
    }

    fn after_property_change(&mut self, id: WidgetId, renderer: crate::renderer::RendererId, name: &str) {
        let lowered = name.to_ascii_lowercase();
        if let Some(node) = self.nodes.get_mut(id) {
            node.renderer = renderer;
            if let Some(data) = self.renderers.get(renderer) {
                node.widget.on_property_change(&lowered, data);
            }
        }
    }

    /// The effective value of a renderer property.
    pub fn property(&self, id: WidgetId, name: &str) -> Option<&Value> {
        let node = self.nodes.get(id)?;
        self.renderers.get(node.renderer)?.get(name)
    }

    /// The renderer record backing a widget.
    pub fn renderer(&self, id: WidgetId) -> Option<&RendererData> {
        let node = self.nodes.get(id)?;
        self.renderers.get(node.renderer)
    }

    /// Make `target` use the same renderer record as `source`. Later writes
    /// through either widget detach it again.
    pub fn share_renderer(&mut self, source: WidgetId, target: WidgetId) -> Result<(), GuiError> {
        let source_renderer = self.nodes.get(source).ok_or(GuiError::StaleWidget)?.renderer;
        let old = self.nodes.get(target).ok_or(GuiError::StaleWidget)?.renderer;
        if old == source_renderer {
            return Ok(());
        }
        self.renderers.share(source_renderer);
        self.renderers.release(old);
        // Full refresh: every property may have changed.
        let names: Vec<String> = self
            .renderers
            .get(source_renderer)
            .map(|data| data.effective().map(|(name, _)| name.to_string()).collect())
            .unwrap_or_default();
        if let Some(node) = self.nodes.get_mut(target) {
            node.renderer = source_renderer;
            if let Some(data) = self.renderers.get(source_renderer) {
                for name in &names {
                    node.widget.on_property_change(&name.to_ascii_lowercase(), data);
                }
            }
        }
        Ok(())
    }

    /// How many widgets currently share `id`'s renderer record.
    pub fn renderer_holders(&self, id: WidgetId) -> usize {
        self.nodes
            .get(id)
            .map_or(0, |node| self.renderers.holders(node.renderer))
    }

    // ── Signals ──────────────────────────────────────────────────────

    /// Connect a handler to one of a widget's signals.
    pub fn connect<F>(&mut self, id: WidgetId, signal: &str, handler: F) -> Result<SlotId, GuiError>
    where
        F: FnMut(&Payload) + 'static,
    {
        let node = self.nodes.get_mut(id).ok_or(GuiError::StaleWidget)?;
        Ok(node.widget.signals().connect(signal, handler)?)
    }

    /// Disconnect a handler. Returns whether it was still connected.
    pub fn disconnect(&mut self, id: WidgetId, slot: SlotId) -> bool {
        self.nodes
            .get_mut(id)
            .is_some_and(|node| node.widget.signals().disconnect(slot))
    }

    // ── Focus ────────────────────────────────────────────────────────

    pub fn focused(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Move focus, notifying the widgets losing and gaining it. Widgets that
    /// decline focus (or are hidden/disabled) are refused.
    pub fn set_focus(&mut self, target: Option<WidgetId>) {
        if let Some(id) = target {
            let focusable = self.widget(id).is_some_and(|widget| widget.accepts_focus())
                && self.is_shown(id)
                && self.is_interactive(id);
            if !focusable {
                return;
            }
        }
        if self.focus == target {
            return;
        }
        if let Some(old) = self.focus.take() {
            self.send(old, WidgetEvent::FocusLost);
        }
        self.focus = target;
        if let Some(new) = target {
            self.send(new, WidgetEvent::FocusGained);
        }
    }

    /// Focus the next focusable widget in tree order, wrapping around.
    pub fn focus_next(&mut self) {
        self.cycle_focus(false);
    }

    /// Focus the previous focusable widget in tree order, wrapping around.
    pub fn focus_previous(&mut self) {
        self.cycle_focus(true);
    }

    fn cycle_focus(&mut self, backwards: bool) {
        let mut order: Vec<WidgetId> = self
            .walk_all()
            .into_iter()
            .filter(|&id| {
                self.widget(id).is_some_and(|widget| widget.accepts_focus())
                    && self.is_shown(id)
                    && self.is_interactive(id)
            })
            .collect();
        if order.is_empty() {
            self.set_focus(None);
            return;
        }
        if backwards {
            order.reverse();
        }
        let next = match self.focus.and_then(|f| order.iter().position(|&id| id == f)) {
            Some(index) => order[(index + 1) % order.len()],
            None => order[0],
        };
        self.set_focus(Some(next));
    }

    // ── Hit testing ──────────────────────────────────────────────────

    /// The frontmost interactive widget under a global point.
    ///
    /// Children are tried before their parent and front before back.
    /// Invisible widgets hide their whole subtree; disabled widgets are
    /// transparent to the pointer.
    pub fn hit_test(&self, point: Point) -> Option<WidgetId> {
        for &root in self.roots.iter().rev() {
            if let Some(hit) = self.hit_test_node(root, point) {
                return Some(hit);
            }
        }
        None
    }

    fn hit_test_node(&self, id: WidgetId, point: Point) -> Option<WidgetId> {
        let node = self.nodes.get(id)?;
        // An invisible or disabled widget takes its whole subtree out of
        // pointer reach.
        if !node.visible || !node.enabled {
            return None;
        }
        let local = point - node.rect.position();
        for &child in self.children(id).iter().rev() {
            if let Some(hit) = self.hit_test_node(child, local) {
                return Some(hit);
            }
        }
        if node.widget.hit_test(local, node.rect.size()) {
            return Some(id);
        }
        None
    }

    // ── Drawing ──────────────────────────────────────────────────────

    /// Paint the whole tree back to front through a backend.
    pub fn draw(&self, backend: &mut dyn crate::backend::Backend) {
        for &root in &self.roots {
            self.draw_node(root, Point::ZERO, backend);
        }
    }

    fn draw_node(&self, id: WidgetId, origin: Point, backend: &mut dyn crate::backend::Backend) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.visible {
            return;
        }
        let rect = node.rect.translate(origin);
        if let Some(renderer) = self.renderers.get(node.renderer) {
            let mut ctx = DrawContext {
                backend,
                rect,
                renderer,
                config: &self.config,
                state: self.state_of(id),
            };
            node.widget.draw(&mut ctx);
        }
        for &child in self.children(id) {
            self.draw_node(child, rect.position(), backend);
        }
    }

    // ── Event plumbing shared with the dispatcher ────────────────────

    pub(crate) fn state_of(&self, id: WidgetId) -> WidgetState {
        let mut state = WidgetState::empty();
        if self.is_interactive(id) {
            state |= WidgetState::ENABLED;
        }
        if self.focus == Some(id) {
            state |= WidgetState::FOCUSED;
        }
        if self.hover == Some(id) {
            state |= WidgetState::HOVERED;
        }
        if self.capture == Some(id) {
            state |= WidgetState::PRESSED;
        }
        state
    }

    /// Deliver one event to one widget with a fully populated context, then
    /// apply whatever tree mutations the widget requested.
    pub(crate) fn send(&mut self, id: WidgetId, event: WidgetEvent) {
        let Some(rect) = self.global_rect(id) else {
            return;
        };
        let state = self.state_of(id);
        let actions = {
            let Some(node) = self.nodes.get_mut(id) else {
                return;
            };
            let Some(renderer) = self.renderers.get(node.renderer) else {
                return;
            };
            let mut ctx = EventContext {
                rect,
                renderer,
                config: &self.config,
                state,
                actions: Vec::new(),
            };
            node.widget.handle_event(&event, &mut ctx);
            ctx.actions
        };
        for action in actions {
            match action {
                WidgetAction::MoveBy(delta) => {
                    if let Some(node) = self.nodes.get_mut(id) {
                        node.layout.x.offset += delta.x;
                        node.layout.y.offset += delta.y;
                    }
                    self.relayout_subtree(id);
                }
                WidgetAction::Raise => self.move_to_front(id),
            }
        }
    }
}

impl Default for Gui {
    fn default() -> Self {
        Self::new(GuiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    use crate::layout::Dim;
    use crate::property::color::Color;
    use crate::property::value::PropertyMap;
    use crate::signal::SignalTable;
    use crate::widget::{Drawable, FocusTarget, HitTestable};

    /// A bare rectangle widget with two styleable properties.
    struct Pane {
        signals: SignalTable,
    }

    impl Pane {
        fn boxed() -> Box<dyn Widget> {
            Box::new(Self { signals: SignalTable::new::<_, &str>([]) })
        }
    }

    impl Drawable for Pane {
        fn draw(&self, _ctx: &mut DrawContext<'_>) {}
    }
    impl HitTestable for Pane {}
    impl FocusTarget for Pane {}
    impl Widget for Pane {
        fn kind(&self) -> &'static str {
            "Pane"
        }
        fn default_renderer(&self) -> PropertyMap {
            PropertyMap::from_iter([
                ("BackgroundColor".to_string(), Value::Color(Color::new(80, 80, 80))),
                ("Opacity".to_string(), Value::Number(1.0)),
            ])
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

    fn sized_gui() -> Gui {
        let mut gui = Gui::default();
        gui.set_view_size(Size::new(400.0, 200.0));
        gui
    }

    #[test]
    fn add_and_remove_subtree() {
        let mut gui = sized_gui();
        let parent = gui.add(Pane::boxed());
        let child = gui.add_child(parent, Pane::boxed());
        let grandchild = gui.add_child(child, Pane::boxed());
        assert_eq!(gui.len(), 3);
        assert_eq!(gui.parent(grandchild), Some(child));
        assert_eq!(gui.children(parent), &[child]);

        assert!(gui.remove(child));
        assert_eq!(gui.len(), 1);
        assert!(!gui.contains(grandchild));
        assert!(gui.children(parent).is_empty());
        assert!(!gui.remove(child));
        // Renderer records of removed widgets are freed.
        assert_eq!(gui.renderers.len(), 1);
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let mut gui = sized_gui();
        let parent = gui.add(Pane::boxed());
        let child = gui.add_child(parent, Pane::boxed());
        gui.set_name(child, "Inner");
        assert_eq!(gui.find("inner"), Some(child));
        assert_eq!(gui.find("INNER"), Some(child));
        assert_eq!(gui.find("other"), None);
    }

    #[test]
    fn relative_layout_resolves_against_parent() {
        let mut gui = sized_gui();
        let parent = gui.add(Pane::boxed());
        gui.set_layout(parent, Layout {
            x: Dim::absolute(10.0),
            y: Dim::absolute(20.0),
            width: Dim::relative(0.5),
            height: "100% - 50".parse().unwrap(),
        });
        let child = gui.add_child(parent, Pane::boxed());
        gui.set_layout(child, Layout {
            x: Dim::ZERO,
            y: Dim::ZERO,
            width: Dim::relative(0.5),
            height: Dim::relative(1.0),
        });

        assert_eq!(gui.get(parent).unwrap().rect, Rect::new(10.0, 20.0, 200.0, 150.0));
        assert_eq!(gui.get(child).unwrap().rect, Rect::new(0.0, 0.0, 100.0, 150.0));
        assert_eq!(gui.global_rect(child).unwrap(), Rect::new(10.0, 20.0, 100.0, 150.0));

        // Resizing the view cascades through both levels.
        gui.set_view_size(Size::new(800.0, 450.0));
        assert_eq!(gui.get(child).unwrap().rect.size(), Size::new(200.0, 400.0));
    }

    #[test]
    fn hit_test_respects_visibility() {
        let mut gui = sized_gui();
        let parent = gui.add(Pane::boxed());
        gui.set_rect(parent, Rect::new(0.0, 0.0, 100.0, 100.0));
        let child = gui.add_child(parent, Pane::boxed());
        gui.set_rect(child, Rect::new(10.0, 10.0, 20.0, 20.0));

        assert_eq!(gui.hit_test(Point::new(15.0, 15.0)), Some(child));
        gui.set_visible(child, false);
        assert_eq!(gui.hit_test(Point::new(15.0, 15.0)), Some(parent));
        gui.set_visible(parent, false);
        assert_eq!(gui.hit_test(Point::new(15.0, 15.0)), None);
    }

    #[test]
    fn property_text_rejects_unknown_and_mismatched() {
        let mut gui = sized_gui();
        let pane = gui.add(Pane::boxed());
        gui.set_property_text(pane, "BackgroundColor", "rgb(20, 30, 40)").unwrap();
        assert_eq!(
            gui.property(pane, "BackgroundColor").unwrap().as_color().unwrap(),
            Color::new(20, 30, 40)
        );
        assert!(matches!(
            gui.set_property_text(pane, "Sparkle", "true"),
            Err(GuiError::Property(PropertyError::UnknownProperty(_)))
        ));
        assert!(matches!(
            gui.set_property_text(pane, "Opacity", "true"),
            Err(GuiError::Parse(_))
        ));
    }

    #[test]
    fn shared_renderer_detaches_on_write() {
        let mut gui = sized_gui();
        let a = gui.add(Pane::boxed());
        let b = gui.add(Pane::boxed());
        gui.set_property(a, "Opacity", Value::Number(0.5)).unwrap();
        gui.share_renderer(a, b).unwrap();
        assert_eq!(gui.renderer_holders(a), 2);
        assert_eq!(gui.property(b, "Opacity").unwrap(), &Value::Number(0.5));

        // Writing through one widget must not restyle the other.
        gui.set_property(b, "Opacity", Value::Number(0.25)).unwrap();
        assert_eq!(gui.renderer_holders(a), 1);
        assert_eq!(gui.renderer_holders(b), 1);
        assert_eq!(gui.property(a, "Opacity").unwrap(), &Value::Number(0.5));
        assert_eq!(gui.property(b, "Opacity").unwrap(), &Value::Number(0.25));
    }

    #[test]
    fn removing_shared_holder_keeps_record() {
        let mut gui = sized_gui();
        let a = gui.add(Pane::boxed());
        let b = gui.add(Pane::boxed());
        gui.share_renderer(a, b).unwrap();
        assert_eq!(gui.renderers.len(), 1);
        gui.remove(a);
        assert_eq!(gui.renderer_holders(b), 1);
        assert_eq!(
            gui.property(b, "BackgroundColor").unwrap().as_color().unwrap(),
            Color::new(80, 80, 80)
        );
    }

    #[test]
    fn move_to_front_and_back_reorder_roots() {
        let mut gui = sized_gui();
        let a = gui.add(Pane::boxed());
        let b = gui.add(Pane::boxed());
        let c = gui.add(Pane::boxed());
        assert_eq!(gui.roots(), &[a, b, c]);
        gui.move_to_front(a);
        assert_eq!(gui.roots(), &[b, c, a]);
        gui.move_to_back(c);
        assert_eq!(gui.roots(), &[c, b, a]);
    }
}
