//! A push button.

use std::any::Any;

use crate::geometry::Outline;
use crate::property::color::Color;
use crate::property::text_style::TextStyle;
use crate::property::value::{PropertyMap, Value};
use crate::renderer::RendererData;
use crate::signal::{Payload, SignalTable};
use crate::widget::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Key, Widget, WidgetEvent,
    WidgetState,
};
use crate::widgets::{center_text, draw_box, number_of, outline_of, state_color};

/// Index into the per-state caches: normal, hover, down, disabled.
fn state_index(state: WidgetState) -> usize {
    if !state.contains(WidgetState::ENABLED) {
        3
    } else if state.contains(WidgetState::PRESSED) {
        2
    } else if state.contains(WidgetState::HOVERED) {
        1
    } else {
        0
    }
}

/// Per-state resolved styling, rebuilt whenever a renderer property
/// changes so drawing never re-resolves the variant fallback chain.
#[derive(Clone, Debug, Default)]
struct StyleCache {
    background: [Color; 4],
    text: [Color; 4],
    border: [Color; 4],
    text_style: TextStyle,
    borders: Outline,
    opacity: f32,
}

impl StyleCache {
    fn rebuild(&mut self, renderer: &RendererData) {
        let states = [
            WidgetState::ENABLED,
            WidgetState::ENABLED | WidgetState::HOVERED,
            WidgetState::ENABLED | WidgetState::PRESSED,
            WidgetState::empty(),
        ];
        for (index, &state) in states.iter().enumerate() {
            self.background[index] = state_color(renderer, "BackgroundColor", state);
            self.text[index] = state_color(renderer, "TextColor", state);
            self.border[index] = state_color(renderer, "BorderColor", state);
        }
        self.text_style = renderer
            .get("TextStyle")
            .and_then(|value| value.as_text_style().ok())
            .unwrap_or_default();
        self.borders = outline_of(renderer, "Borders");
        self.opacity = number_of(renderer, "Opacity", 1.0);
    }
}

/// A clickable button with a text label and hover/down/disabled styling.
///
/// `Pressed` fires with the label text on a completed click (release inside
/// the bounds) and on Space or Return while focused.
pub struct Button {
    text: String,
    cache: StyleCache,
    signals: SignalTable,
}

impl Button {
    pub const KIND: &'static str = "Button";

    pub fn new(text: impl Into<String>) -> Self {
        let mut button = Self {
            text: text.into(),
            cache: StyleCache::default(),
            signals: SignalTable::new(["Pressed"]),
        };
        // Seed the cache from the kind defaults; the tree refreshes it on
        // every later property change.
        button
            .cache
            .rebuild(&RendererData::with_defaults(button.default_renderer()));
        button
    }

    pub fn boxed(text: impl Into<String>) -> Box<dyn Widget> {
        Box::new(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn press(&mut self) {
        self.signals.emit("Pressed", &Payload::Text(self.text.clone()));
    }
}

impl Drawable for Button {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let index = state_index(ctx.state);
        let opacity = self.cache.opacity;
        draw_box(
            ctx.backend,
            ctx.rect,
            self.cache.background[index].with_opacity(opacity),
            self.cache.borders,
            self.cache.border[index].with_opacity(opacity),
        );
        if !self.text.is_empty() {
            let font = ctx.config.default_font.as_ref();
            let text_size = ctx.config.default_text_size;
            let position = center_text(ctx.backend, ctx.rect, &self.text, font, text_size);
            ctx.backend.draw_text(
                position,
                &self.text,
                font,
                text_size,
                self.cache.text[index].with_opacity(opacity),
                self.cache.text_style,
            );
        }
    }
}

impl HitTestable for Button {}

impl FocusTarget for Button {
    fn accepts_focus(&self) -> bool {
        true
    }
}

impl Widget for Button {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn default_renderer(&self) -> PropertyMap {
        PropertyMap::from_iter([
            ("BackgroundColor".to_string(), Value::Color(Color::new(245, 245, 245))),
            ("BackgroundColorHover".to_string(), Value::Color(Color::WHITE)),
            ("BackgroundColorDown".to_string(), Value::Color(Color::new(235, 235, 235))),
            ("BackgroundColorDisabled".to_string(), Value::Color(Color::new(230, 230, 230))),
            ("TextColor".to_string(), Value::Color(Color::new(60, 60, 60))),
            ("TextColorHover".to_string(), Value::Color(Color::BLACK)),
            ("TextColorDown".to_string(), Value::Color(Color::BLACK)),
            ("TextColorDisabled".to_string(), Value::Color(Color::new(125, 125, 125))),
            ("BorderColor".to_string(), Value::Color(Color::new(60, 60, 60))),
            ("BorderColorHover".to_string(), Value::Color(Color::BLACK)),
            ("BorderColorDown".to_string(), Value::Color(Color::BLACK)),
            ("BorderColorDisabled".to_string(), Value::Color(Color::new(125, 125, 125))),
            ("Borders".to_string(), Value::Outline(Outline::all(1.0))),
            ("TextStyle".to_string(), Value::TextStyle(TextStyle::empty())),
            ("Opacity".to_string(), Value::Number(1.0)),
        ])
    }

    fn signals(&mut self) -> &mut SignalTable {
        &mut self.signals
    }

    fn handle_event(&mut self, event: &WidgetEvent, ctx: &mut EventContext<'_>) {
        match *event {
            WidgetEvent::MouseReleased(point) => {
                let size = ctx.rect.size();
                if point.x >= 0.0 && point.y >= 0.0 && point.x < size.width && point.y < size.height
                {
                    self.press();
                }
            }
            WidgetEvent::KeyPressed(Key::Enter) | WidgetEvent::KeyPressed(Key::Space) => {
                self.press();
            }
            _ => {}
        }
    }

    fn on_property_change(&mut self, _name: &str, renderer: &RendererData) {
        self.cache.rebuild(renderer);
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

    use crate::geometry::{Point, Rect, Size};
    use crate::tree::Gui;

    fn gui_with_button() -> (Gui, crate::tree::WidgetId, Rc<RefCell<Vec<Payload>>>) {
        let mut gui = Gui::default();
        gui.set_view_size(Size::new(200.0, 200.0));
        let button = gui.add(Button::boxed("Ok"));
        gui.set_rect(button, Rect::new(10.0, 10.0, 60.0, 24.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            gui.connect(button, "pressed", move |payload| seen.borrow_mut().push(payload.clone()))
                .unwrap();
        }
        (gui, button, seen)
    }

    #[test]
    fn click_emits_pressed_with_text() {
        let (mut gui, _button, seen) = gui_with_button();
        gui.on_mouse_press(Point::new(20.0, 20.0));
        gui.on_mouse_release(Point::new(20.0, 20.0));
        assert_eq!(*seen.borrow(), vec![Payload::Text("Ok".into())]);
    }

    #[test]
    fn drag_off_then_release_does_not_press() {
        let (mut gui, _button, seen) = gui_with_button();
        gui.on_mouse_press(Point::new(20.0, 20.0));
        gui.on_mouse_move(Point::new(150.0, 20.0));
        gui.on_mouse_release(Point::new(150.0, 20.0));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn space_and_return_press_the_focused_button() {
        let (mut gui, button, seen) = gui_with_button();
        gui.set_focus(Some(button));
        gui.on_key(Key::Enter);
        gui.on_key(Key::Space);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn cache_follows_property_changes() {
        let (mut gui, button, _seen) = gui_with_button();
        gui.set_property_text(button, "TextColor", "rgb(1, 2, 3)").unwrap();
        let widget = gui.widget(button).unwrap();
        let concrete = widget.as_any().downcast_ref::<Button>().unwrap();
        assert_eq!(concrete.cache.text[0], Color::new(1, 2, 3));
        // The hover variant is explicitly themed, so it stays.
        assert_eq!(concrete.cache.text[1], Color::BLACK);
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let (mut gui, button, seen) = gui_with_button();
        gui.set_enabled(button, false);
        gui.on_mouse_press(Point::new(20.0, 20.0));
        gui.on_mouse_release(Point::new(20.0, 20.0));
        assert!(seen.borrow().is_empty());
    }
}
