//! A horizontal slider.

use std::any::Any;

use crate::geometry::{Outline, Rect};
use crate::property::color::Color;
use crate::property::value::{PropertyMap, Value};
use crate::signal::{Payload, SignalTable};
use crate::widget::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Key, Widget, WidgetEvent,
    WidgetState,
};
use crate::widgets::{draw_box, number_of, outline_of, state_color};

const THUMB_WIDTH: f32 = 10.0;

/// A horizontal slider over `[minimum, maximum]`.
///
/// The thumb follows the pointer for as long as the press lasts (pointer
/// capture keeps the drag alive outside the bounds); Left/Right nudge the
/// value by `step` while focused. `ValueChanged` fires once per actual
/// change.
pub struct Slider {
    minimum: f32,
    maximum: f32,
    value: f32,
    step: f32,
    signals: SignalTable,
}

impl Slider {
    pub const KIND: &'static str = "Slider";

    pub fn new(minimum: f32, maximum: f32) -> Self {
        Self {
            minimum,
            maximum: maximum.max(minimum),
            value: minimum,
            step: 1.0,
            signals: SignalTable::new(["ValueChanged"]),
        }
    }

    pub fn boxed(minimum: f32, maximum: f32) -> Box<dyn Widget> {
        Box::new(Self::new(minimum, maximum))
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Set the value, clamped to the range. Emits `ValueChanged` when the
    /// clamped value differs from the current one.
    pub fn set_value(&mut self, value: f32) {
        let clamped = value.clamp(self.minimum, self.maximum);
        if clamped != self.value {
            self.value = clamped;
            self.signals.emit("ValueChanged", &Payload::Number(clamped));
        }
    }

    fn value_at(&self, x: f32, width: f32) -> f32 {
        if width <= 0.0 {
            return self.minimum;
        }
        let fraction = (x / width).clamp(0.0, 1.0);
        self.minimum + fraction * (self.maximum - self.minimum)
    }

    fn thumb_rect(&self, rect: Rect) -> Rect {
        let span = self.maximum - self.minimum;
        let fraction = if span > 0.0 { (self.value - self.minimum) / span } else { 0.0 };
        let x = rect.x + fraction * (rect.width - THUMB_WIDTH).max(0.0);
        Rect::new(x, rect.y, THUMB_WIDTH.min(rect.width), rect.height)
    }
}

impl Drawable for Slider {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let opacity = number_of(ctx.renderer, "Opacity", 1.0);
        draw_box(
            ctx.backend,
            ctx.rect,
            state_color(ctx.renderer, "TrackColor", ctx.state).with_opacity(opacity),
            outline_of(ctx.renderer, "Borders"),
            state_color(ctx.renderer, "BorderColor", ctx.state).with_opacity(opacity),
        );
        let thumb = state_color(ctx.renderer, "ThumbColor", ctx.state).with_opacity(opacity);
        if thumb.is_set() {
            ctx.backend.draw_rect(self.thumb_rect(ctx.rect), thumb);
        }
    }
}

impl HitTestable for Slider {}

impl FocusTarget for Slider {
    fn accepts_focus(&self) -> bool {
        true
    }
}

impl Widget for Slider {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn default_renderer(&self) -> PropertyMap {
        PropertyMap::from_iter([
            ("TrackColor".to_string(), Value::Color(Color::new(245, 245, 245))),
            ("TrackColorHover".to_string(), Value::Color(Color::WHITE)),
            ("ThumbColor".to_string(), Value::Color(Color::new(128, 128, 128))),
            ("ThumbColorHover".to_string(), Value::Color(Color::new(158, 158, 158))),
            ("BorderColor".to_string(), Value::Color(Color::new(60, 60, 60))),
            ("Borders".to_string(), Value::Outline(Outline::all(1.0))),
            ("Opacity".to_string(), Value::Number(1.0)),
        ])
    }

    fn signals(&mut self) -> &mut SignalTable {
        &mut self.signals
    }

    fn handle_event(&mut self, event: &WidgetEvent, ctx: &mut EventContext<'_>) {
        match *event {
            WidgetEvent::MousePressed(point) => {
                self.set_value(self.value_at(point.x, ctx.rect.width));
            }
            WidgetEvent::MouseMoved(point) if ctx.state.contains(WidgetState::PRESSED) => {
                self.set_value(self.value_at(point.x, ctx.rect.width));
            }
            WidgetEvent::KeyPressed(Key::Left) => self.set_value(self.value - self.step),
            WidgetEvent::KeyPressed(Key::Right) => self.set_value(self.value + self.step),
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
