//! A plain container panel.

use std::any::Any;

use crate::geometry::Outline;
use crate::property::color::Color;
use crate::property::value::{PropertyMap, Value};
use crate::signal::SignalTable;
use crate::widget::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Widget, WidgetEvent,
};
use crate::widgets::{color_of, draw_box, number_of, outline_of};

/// A background-and-borders container. Children are managed by the tree;
/// the panel only paints its box behind them.
pub struct Panel {
    signals: SignalTable,
}

impl Panel {
    pub const KIND: &'static str = "Panel";

    pub fn new() -> Self {
        Self { signals: SignalTable::new::<_, &str>([]) }
    }

    pub fn boxed() -> Box<dyn Widget> {
        Box::new(Self::new())
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Panel {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let opacity = number_of(ctx.renderer, "Opacity", 1.0);
        draw_box(
            ctx.backend,
            ctx.rect,
            color_of(ctx.renderer, "BackgroundColor").with_opacity(opacity),
            outline_of(ctx.renderer, "Borders"),
            color_of(ctx.renderer, "BorderColor").with_opacity(opacity),
        );
    }
}

impl HitTestable for Panel {}
impl FocusTarget for Panel {}

impl Widget for Panel {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn default_renderer(&self) -> PropertyMap {
        PropertyMap::from_iter([
            ("BackgroundColor".to_string(), Value::Color(Color::new(220, 220, 220))),
            ("BorderColor".to_string(), Value::Color(Color::NONE)),
            ("Borders".to_string(), Value::Outline(Outline::ZERO)),
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
