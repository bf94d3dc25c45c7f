//! Input dispatch: routing mouse and keyboard input to widgets.
//!
//! The pointer model is a two-state machine. Idle: moves update the hovered
//! widget (with enter/leave notifications) and a press on a widget starts
//! capture. Captured: every move and the final release go to the captured
//! widget in its local coordinates, even when the pointer has left its
//! bounds, and the release returns to idle. A widget never sees a release
//! for a press it did not receive.
//!
//! Keyboard input goes to the focused widget only, except Tab/BackTab which
//! the dispatcher consumes to cycle focus.

use crate::geometry::Point;
use crate::tree::gui::Gui;
use crate::tree::node::WidgetId;
use crate::widget::{Key, WidgetEvent};

impl Gui {
    /// Feed a mouse move at a global position.
    pub fn on_mouse_move(&mut self, point: Point) {
        if let Some(captured) = self.capture {
            if let Some(rect) = self.global_rect(captured) {
                self.send(captured, WidgetEvent::MouseMoved(point - rect.position()));
            }
            return;
        }
        let hit = self.hit_test(point);
        self.update_hover(hit);
        if let Some(id) = hit {
            if let Some(rect) = self.global_rect(id) {
                self.send(id, WidgetEvent::MouseMoved(point - rect.position()));
            }
        }
    }

    /// Feed a mouse press at a global position.
    ///
    /// A press on a widget starts pointer capture and moves focus to it when
    /// it accepts focus; a press on empty space clears focus.
    pub fn on_mouse_press(&mut self, point: Point) {
        let hit = self.hit_test(point);
        self.update_hover(hit);
        match hit {
            Some(id) => {
                self.capture = Some(id);
                self.set_focus(Some(id));
                if let Some(rect) = self.global_rect(id) {
                    self.send(id, WidgetEvent::MousePressed(point - rect.position()));
                }
            }
            None => self.set_focus(None),
        }
    }

    /// Feed a mouse release at a global position.
    ///
    /// The release always goes to the widget that received the press. With
    /// no capture in progress the release is dropped.
    pub fn on_mouse_release(&mut self, point: Point) {
        let Some(captured) = self.capture.take() else {
            return;
        };
        if let Some(rect) = self.global_rect(captured) {
            self.send(captured, WidgetEvent::MouseReleased(point - rect.position()));
        }
        // The pointer may have moved off the widget during the drag.
        let hit = self.hit_test(point);
        self.update_hover(hit);
    }

    /// Feed a key press. Tab cycles focus; everything else goes to the
    /// focused widget, or nowhere when nothing is focused.
    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::Tab => self.focus_next(),
            Key::BackTab => self.focus_previous(),
            _ => {
                if let Some(focused) = self.focused() {
                    self.send(focused, WidgetEvent::KeyPressed(key));
                }
            }
        }
    }

    /// Feed entered text to the focused widget.
    pub fn on_text(&mut self, ch: char) {
        if let Some(focused) = self.focused() {
            self.send(focused, WidgetEvent::TextEntered(ch));
        }
    }

    /// Whether a widget currently holds pointer capture.
    pub fn is_captured(&self, id: WidgetId) -> bool {
        self.capture == Some(id)
    }

    /// The currently hovered widget.
    pub fn hovered(&self) -> Option<WidgetId> {
        self.hover
    }

    fn update_hover(&mut self, hit: Option<WidgetId>) {
        if hit == self.hover {
            return;
        }
        if let Some(old) = self.hover.take() {
            self.send(old, WidgetEvent::MouseLeft);
        }
        self.hover = hit;
        if let Some(new) = hit {
            self.send(new, WidgetEvent::MouseEntered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::geometry::Rect;
    use crate::property::value::PropertyMap;
    use crate::signal::SignalTable;
    use crate::widget::{
        DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Widget,
    };

    /// Records every event it receives, tagged for assertions.
    struct Probe {
        tag: &'static str,
        focusable: bool,
        log: Rc<RefCell<Vec<(&'static str, WidgetEvent)>>>,
        signals: SignalTable,
    }

    impl Probe {
        fn boxed(
            tag: &'static str,
            focusable: bool,
            log: &Rc<RefCell<Vec<(&'static str, WidgetEvent)>>>,
        ) -> Box<dyn Widget> {
            Box::new(Self {
                tag,
                focusable,
                log: log.clone(),
                signals: SignalTable::new::<_, &str>([]),
            })
        }
    }

    impl Drawable for Probe {
        fn draw(&self, _ctx: &mut DrawContext<'_>) {}
    }
    impl HitTestable for Probe {}
    impl FocusTarget for Probe {
        fn accepts_focus(&self) -> bool {
            self.focusable
        }
    }
    impl Widget for Probe {
        fn kind(&self) -> &'static str {
            "Probe"
        }
        fn default_renderer(&self) -> PropertyMap {
            PropertyMap::new()
        }
        fn signals(&mut self) -> &mut SignalTable {
            &mut self.signals
        }
        fn handle_event(&mut self, event: &WidgetEvent, _ctx: &mut EventContext<'_>) {
            self.log.borrow_mut().push((self.tag, *event));
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    type Log = Rc<RefCell<Vec<(&'static str, WidgetEvent)>>>;

    fn gui_with_two_buttons() -> (Gui, WidgetId, WidgetId, Log) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut gui = Gui::default();
        gui.set_view_size(crate::geometry::Size::new(200.0, 200.0));
        let a = gui.add(Probe::boxed("a", true, &log));
        gui.set_rect(a, Rect::new(10.0, 10.0, 50.0, 20.0));
        let b = gui.add(Probe::boxed("b", true, &log));
        gui.set_rect(b, Rect::new(100.0, 10.0, 50.0, 20.0));
        (gui, a, b, log)
    }

    fn events_for(log: &Log, tag: &str) -> Vec<WidgetEvent> {
        log.borrow()
            .iter()
            .filter(|(t, _)| *t == tag)
            .map(|(_, e)| *e)
            .collect()
    }

    #[test]
    fn press_starts_capture_and_focuses() {
        let (mut gui, a, _b, log) = gui_with_two_buttons();
        gui.on_mouse_press(Point::new(20.0, 15.0));
        assert!(gui.is_captured(a));
        assert_eq!(gui.focused(), Some(a));
        let events = events_for(&log, "a");
        assert!(events.contains(&WidgetEvent::MousePressed(Point::new(10.0, 5.0))));
        assert!(events.contains(&WidgetEvent::FocusGained));
    }

    #[test]
    fn capture_routes_moves_outside_bounds() {
        let (mut gui, a, b, log) = gui_with_two_buttons();
        gui.on_mouse_press(Point::new(20.0, 15.0));
        // Drag across the other widget; the captured one keeps receiving.
        gui.on_mouse_move(Point::new(120.0, 15.0));
        assert!(gui.is_captured(a));
        let moved = events_for(&log, "a");
        assert!(moved.contains(&WidgetEvent::MouseMoved(Point::new(110.0, 5.0))));
        assert!(events_for(&log, "b").is_empty());
        assert_ne!(gui.hovered(), Some(b));
    }

    #[test]
    fn release_goes_to_captured_widget_only() {
        let (mut gui, a, b, log) = gui_with_two_buttons();
        gui.on_mouse_press(Point::new(20.0, 15.0));
        gui.on_mouse_release(Point::new(120.0, 15.0));
        assert!(!gui.is_captured(a));
        let released = events_for(&log, "a");
        assert!(released.contains(&WidgetEvent::MouseReleased(Point::new(110.0, 5.0))));
        // The widget under the release point saw no release, only the hover
        // change afterwards.
        assert_eq!(events_for(&log, "b"), vec![WidgetEvent::MouseEntered]);
        assert_eq!(gui.hovered(), Some(b));
    }

    #[test]
    fn release_without_press_is_dropped() {
        let (mut gui, _a, _b, log) = gui_with_two_buttons();
        gui.on_mouse_release(Point::new(20.0, 15.0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn hover_enter_and_leave() {
        let (mut gui, a, b, log) = gui_with_two_buttons();
        gui.on_mouse_move(Point::new(20.0, 15.0));
        assert_eq!(gui.hovered(), Some(a));
        gui.on_mouse_move(Point::new(120.0, 15.0));
        assert_eq!(gui.hovered(), Some(b));
        assert!(events_for(&log, "a").contains(&WidgetEvent::MouseLeft));
        assert!(events_for(&log, "b").contains(&WidgetEvent::MouseEntered));
        gui.on_mouse_move(Point::new(0.0, 0.0));
        assert_eq!(gui.hovered(), None);
        assert!(events_for(&log, "b").contains(&WidgetEvent::MouseLeft));
    }

    #[test]
    fn press_on_empty_space_clears_focus() {
        let (mut gui, a, _b, _log) = gui_with_two_buttons();
        gui.on_mouse_press(Point::new(20.0, 15.0));
        gui.on_mouse_release(Point::new(20.0, 15.0));
        assert_eq!(gui.focused(), Some(a));
        gui.on_mouse_press(Point::new(0.0, 190.0));
        assert_eq!(gui.focused(), None);
    }

    #[test]
    fn keys_go_to_focused_widget_only() {
        let (mut gui, a, b, log) = gui_with_two_buttons();
        gui.on_key(Key::Enter);
        assert!(log.borrow().is_empty());

        gui.set_focus(Some(a));
        gui.on_key(Key::Enter);
        gui.on_text('x');
        assert!(events_for(&log, "a").contains(&WidgetEvent::KeyPressed(Key::Enter)));
        assert!(events_for(&log, "a").contains(&WidgetEvent::TextEntered('x')));
        assert!(events_for(&log, "b").iter().all(|e| !matches!(e, WidgetEvent::KeyPressed(_))));
    }

    #[test]
    fn tab_cycles_focus_with_wrap() {
        let (mut gui, a, b, _log) = gui_with_two_buttons();
        gui.on_key(Key::Tab);
        assert_eq!(gui.focused(), Some(a));
        gui.on_key(Key::Tab);
        assert_eq!(gui.focused(), Some(b));
        gui.on_key(Key::Tab);
        assert_eq!(gui.focused(), Some(a));
        gui.on_key(Key::BackTab);
        assert_eq!(gui.focused(), Some(b));
    }

    #[test]
    fn tab_skips_unfocusable_and_hidden() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut gui = Gui::default();
        gui.set_view_size(crate::geometry::Size::new(200.0, 200.0));
        let plain = gui.add(Probe::boxed("plain", false, &log));
        gui.set_rect(plain, Rect::new(0.0, 0.0, 10.0, 10.0));
        let hidden = gui.add(Probe::boxed("hidden", true, &log));
        gui.set_rect(hidden, Rect::new(0.0, 20.0, 10.0, 10.0));
        gui.set_visible(hidden, false);
        let target = gui.add(Probe::boxed("target", true, &log));
        gui.set_rect(target, Rect::new(0.0, 40.0, 10.0, 10.0));

        gui.on_key(Key::Tab);
        assert_eq!(gui.focused(), Some(target));
        gui.on_key(Key::Tab);
        assert_eq!(gui.focused(), Some(target));
    }

    #[test]
    fn removing_focused_widget_clears_focus() {
        let (mut gui, a, _b, log) = gui_with_two_buttons();
        gui.set_focus(Some(a));
        gui.remove(a);
        assert_eq!(gui.focused(), None);
        log.borrow_mut().clear();
        // Keys after the removal go nowhere.
        gui.on_key(Key::Enter);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn disabling_captured_widget_resets_capture() {
        let (mut gui, a, _b, _log) = gui_with_two_buttons();
        gui.on_mouse_press(Point::new(20.0, 15.0));
        assert!(gui.is_captured(a));
        gui.set_enabled(a, false);
        assert!(!gui.is_captured(a));
    }

    #[test]
    fn overlapping_widgets_hit_frontmost() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut gui = Gui::default();
        gui.set_view_size(crate::geometry::Size::new(200.0, 200.0));
        let back = gui.add(Probe::boxed("back", true, &log));
        gui.set_rect(back, Rect::new(10.0, 10.0, 50.0, 50.0));
        let front = gui.add(Probe::boxed("front", true, &log));
        gui.set_rect(front, Rect::new(30.0, 30.0, 50.0, 50.0));

        // In the overlap region the frontmost wins.
        gui.on_mouse_press(Point::new(40.0, 40.0));
        gui.on_mouse_release(Point::new(40.0, 40.0));
        assert!(events_for(&log, "back").is_empty());
        assert!(!events_for(&log, "front").is_empty());

        // Raising the other widget flips the outcome.
        gui.move_to_front(back);
        log.borrow_mut().clear();
        gui.on_mouse_press(Point::new(40.0, 40.0));
        gui.on_mouse_release(Point::new(40.0, 40.0));
        assert!(events_for(&log, "front").iter().all(|e| matches!(
            e,
            WidgetEvent::MouseLeft | WidgetEvent::FocusLost
        )));
        assert!(events_for(&log, "back").contains(&WidgetEvent::MousePressed(Point::new(30.0, 30.0))));
    }
}
