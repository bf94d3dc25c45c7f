//! A static text label.

use std::any::Any;

use crate::geometry::Outline;
use crate::property::color::Color;
use crate::property::text_style::TextStyle;
use crate::property::value::{PropertyMap, Value};
use crate::signal::SignalTable;
use crate::widget::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Widget, WidgetEvent,
};
use crate::widgets::{center_text, color_of, draw_box, number_of, outline_of};

/// Static text. Not focusable; takes no part in keyboard input.
pub struct Label {
    text: String,
    signals: SignalTable,
}

impl Label {
    pub const KIND: &'static str = "Label";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            signals: SignalTable::new::<_, &str>([]),
        }
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
}

impl Drawable for Label {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let opacity = number_of(ctx.renderer, "Opacity", 1.0);
        draw_box(
            ctx.backend,
            ctx.rect,
            color_of(ctx.renderer, "BackgroundColor").with_opacity(opacity),
            outline_of(ctx.renderer, "Borders"),
            color_of(ctx.renderer, "BorderColor").with_opacity(opacity),
        );
        if self.text.is_empty() {
            return;
        }
        let style = ctx
            .renderer
            .get("TextStyle")
            .and_then(|value| value.as_text_style().ok())
            .unwrap_or_default();
        let font = ctx.config.default_font.as_ref();
        let text_size = ctx.config.default_text_size;
        let position = center_text(ctx.backend, ctx.rect, &self.text, font, text_size);
        ctx.backend.draw_text(
            position,
            &self.text,
            font,
            text_size,
            color_of(ctx.renderer, "TextColor").with_opacity(opacity),
            style,
        );
    }
}

impl HitTestable for Label {}
impl FocusTarget for Label {}

impl Widget for Label {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn default_renderer(&self) -> PropertyMap {
        PropertyMap::from_iter([
            ("TextColor".to_string(), Value::Color(Color::new(60, 60, 60))),
            ("BackgroundColor".to_string(), Value::Color(Color::NONE)),
            ("BorderColor".to_string(), Value::Color(Color::NONE)),
            ("Borders".to_string(), Value::Outline(Outline::ZERO)),
            ("TextStyle".to_string(), Value::TextStyle(TextStyle::empty())),
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
