//! A transparent clickable region.

use std::any::Any;

use crate::property::value::{PropertyMap, Value};
use crate::signal::{Payload, SignalTable};
use crate::widget::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Widget, WidgetEvent,
};

/// An invisible widget that turns presses, releases, and full clicks into
/// signals. `Clicked` fires on a release inside the bounds after a press on
/// the widget; a drag that ends outside produces no click.
pub struct ClickableArea {
    signals: SignalTable,
}

impl ClickableArea {
    pub const KIND: &'static str = "ClickableArea";

    pub fn new() -> Self {
        Self {
            signals: SignalTable::new(["MousePressed", "MouseReleased", "Clicked"]),
        }
    }

    pub fn boxed() -> Box<dyn Widget> {
        Box::new(Self::new())
    }
}

impl Default for ClickableArea {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for ClickableArea {
    fn draw(&self, _ctx: &mut DrawContext<'_>) {}
}

impl HitTestable for ClickableArea {}

impl FocusTarget for ClickableArea {
    fn accepts_focus(&self) -> bool {
        true
    }
}

impl Widget for ClickableArea {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn default_renderer(&self) -> PropertyMap {
        PropertyMap::from_iter([("Opacity".to_string(), Value::Number(1.0))])
    }

    fn signals(&mut self) -> &mut SignalTable {
        &mut self.signals
    }

    fn handle_event(&mut self, event: &WidgetEvent, ctx: &mut EventContext<'_>) {
        match *event {
            WidgetEvent::MousePressed(point) => {
                self.signals.emit("MousePressed", &Payload::Point(point));
            }
            WidgetEvent::MouseReleased(point) => {
                self.signals.emit("MouseReleased", &Payload::Point(point));
                let size = ctx.rect.size();
                let inside = point.x >= 0.0
                    && point.y >= 0.0
                    && point.x < size.width
                    && point.y < size.height;
                if inside {
                    self.signals.emit("Clicked", &Payload::Point(point));
                }
            }
            _ => {}
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::geometry::{Point, Rect};
    use crate::tree::Gui;

    #[test]
    fn click_requires_release_inside() {
        let mut gui = Gui::default();
        gui.set_view_size(crate::geometry::Size::new(200.0, 200.0));
        let area = gui.add(ClickableArea::boxed());
        gui.set_rect(area, Rect::new(10.0, 10.0, 50.0, 20.0));

        let clicks = Rc::new(RefCell::new(0));
        {
            let clicks = clicks.clone();
            gui.connect(area, "Clicked", move |_| *clicks.borrow_mut() += 1).unwrap();
        }

        // Press and release inside: one click.
        gui.on_mouse_press(Point::new(20.0, 15.0));
        gui.on_mouse_release(Point::new(25.0, 15.0));
        assert_eq!(*clicks.borrow(), 1);

        // Press inside, drag out, release: no click.
        gui.on_mouse_press(Point::new(20.0, 15.0));
        gui.on_mouse_move(Point::new(150.0, 15.0));
        gui.on_mouse_release(Point::new(150.0, 15.0));
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn press_and_release_carry_local_points() {
        let mut gui = Gui::default();
        gui.set_view_size(crate::geometry::Size::new(200.0, 200.0));
        let area = gui.add(ClickableArea::boxed());
        gui.set_rect(area, Rect::new(10.0, 10.0, 50.0, 20.0));

        let seen = Rc::new(RefCell::new(Vec::new()));
        for signal in ["MousePressed", "MouseReleased"] {
            let seen = seen.clone();
            gui.connect(area, signal, move |payload| seen.borrow_mut().push(payload.clone()))
                .unwrap();
        }
        gui.on_mouse_press(Point::new(20.0, 15.0));
        gui.on_mouse_release(Point::new(20.0, 15.0));
        assert_eq!(
            *seen.borrow(),
            vec![
                Payload::Point(Point::new(10.0, 5.0)),
                Payload::Point(Point::new(10.0, 5.0)),
            ]
        );
    }
}
