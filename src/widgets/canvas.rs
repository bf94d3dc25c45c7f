//! A host-drawn canvas.

use std::any::Any;

use crate::backend::{Font, Texture};
use crate::geometry::{Point, Rect};
use crate::property::color::Color;
use crate::property::text_style::TextStyle;
use crate::property::value::{PropertyMap, Value};
use crate::signal::SignalTable;
use crate::widget::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Widget, WidgetEvent,
};
use crate::widgets::number_of;

/// One recorded canvas drawing command, in canvas-local coordinates.
#[derive(Clone, Debug)]
enum Command {
    Rect(Rect, Color),
    Text {
        position: Point,
        text: String,
        font: Option<Font>,
        text_size: f32,
        color: Color,
        style: TextStyle,
    },
    Texture(Rect, Texture),
}

/// A widget the host draws on.
///
/// The host records rectangle, text, and texture commands in canvas-local
/// coordinates; each draw replays them translated to the canvas's resolved
/// position, with the `Opacity` property applied to the colors.
pub struct Canvas {
    commands: Vec<Command>,
    signals: SignalTable,
}

impl Canvas {
    pub const KIND: &'static str = "Canvas";

    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            signals: SignalTable::new::<_, &str>([]),
        }
    }

    pub fn boxed() -> Box<dyn Widget> {
        Box::new(Self::new())
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Record a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(Command::Rect(rect, color));
    }

    /// Record a line of text.
    pub fn draw_text(
        &mut self,
        position: Point,
        text: impl Into<String>,
        font: Option<Font>,
        text_size: f32,
        color: Color,
        style: TextStyle,
    ) {
        self.commands.push(Command::Text {
            position,
            text: text.into(),
            font,
            text_size,
            color,
            style,
        });
    }

    /// Record a texture stretched over a rectangle.
    pub fn draw_texture(&mut self, rect: Rect, texture: Texture) {
        self.commands.push(Command::Texture(rect, texture));
    }

    /// How many commands are recorded.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Canvas {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let opacity = number_of(ctx.renderer, "Opacity", 1.0);
        let origin = ctx.rect.position();
        for command in &self.commands {
            match command {
                Command::Rect(rect, color) => {
                    ctx.backend.draw_rect(rect.translate(origin), color.with_opacity(opacity));
                }
                Command::Text { position, text, font, text_size, color, style } => {
                    ctx.backend.draw_text(
                        *position + origin,
                        text,
                        font.as_ref(),
                        *text_size,
                        color.with_opacity(opacity),
                        *style,
                    );
                }
                Command::Texture(rect, texture) => {
                    ctx.backend.draw_texture(rect.translate(origin), texture);
                }
            }
        }
    }
}

impl HitTestable for Canvas {}
impl FocusTarget for Canvas {}

impl Widget for Canvas {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn default_renderer(&self) -> PropertyMap {
        PropertyMap::from_iter([("Opacity".to_string(), Value::Number(1.0))])
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
