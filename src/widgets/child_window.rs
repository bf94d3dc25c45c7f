//! A movable, titled child window.

use std::any::Any;

use crate::geometry::{Outline, Point, Rect, Size};
use crate::property::color::Color;
use crate::property::text_style::TextStyle;
use crate::property::value::{PropertyMap, Value};
use crate::renderer::RendererData;
use crate::signal::{Payload, SignalTable};
use crate::widget::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Widget, WidgetAction,
    WidgetEvent, WidgetState,
};
use crate::widgets::{color_of, draw_box, number_of, outline_of};

/// A container with a title bar. Dragging the title bar moves the window
/// (pointer capture keeps the drag alive outside its bounds) and pressing
/// anywhere raises it above its siblings. The close box at the right end of
/// the title bar emits `Closed`; the host decides whether to remove the
/// window.
pub struct ChildWindow {
    title: String,
    /// Grab offset of an active title-bar drag, in local coordinates.
    drag: Option<Point>,
    close_armed: bool,
    signals: SignalTable,
}

impl ChildWindow {
    pub const KIND: &'static str = "ChildWindow";

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            drag: None,
            close_armed: false,
            signals: SignalTable::new(["Closed"]),
        }
    }

    pub fn boxed(title: impl Into<String>) -> Box<dyn Widget> {
        Box::new(Self::new(title))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn title_bar_height(renderer: &RendererData) -> f32 {
        number_of(renderer, "TitleBarHeight", 20.0)
    }

    /// The close box: a square at the right end of the title bar.
    fn close_rect(size: Size, bar: f32) -> Rect {
        Rect::new((size.width - bar).max(0.0), 0.0, bar.min(size.width), bar)
    }
}

impl Drawable for ChildWindow {
    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let opacity = number_of(ctx.renderer, "Opacity", 1.0);
        let bar = Self::title_bar_height(ctx.renderer);
        draw_box(
            ctx.backend,
            ctx.rect,
            color_of(ctx.renderer, "BackgroundColor").with_opacity(opacity),
            outline_of(ctx.renderer, "Borders"),
            color_of(ctx.renderer, "BorderColor").with_opacity(opacity),
        );
        let bar_rect = Rect::new(ctx.rect.x, ctx.rect.y, ctx.rect.width, bar);
        let bar_color = color_of(ctx.renderer, "TitleBarColor").with_opacity(opacity);
        if bar_color.is_set() {
            ctx.backend.draw_rect(bar_rect, bar_color);
        }
        let title_color = color_of(ctx.renderer, "TitleColor").with_opacity(opacity);
        if !self.title.is_empty() && title_color.is_set() {
            let font = ctx.config.default_font.as_ref();
            let text_size = ctx.config.default_text_size;
            let extents = ctx.backend.text_extents(&self.title, font, text_size);
            let position = Point::new(
                bar_rect.x + ctx.config.text_padding,
                bar_rect.y + (bar - extents.height) / 2.0,
            );
            ctx.backend.draw_text(
                position,
                &self.title,
                font,
                text_size,
                title_color,
                TextStyle::empty(),
            );
        }
    }
}

impl HitTestable for ChildWindow {}
impl FocusTarget for ChildWindow {}

impl Widget for ChildWindow {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn default_renderer(&self) -> PropertyMap {
        PropertyMap::from_iter([
            ("TitleBarColor".to_string(), Value::Color(Color::new(60, 60, 60))),
            ("TitleColor".to_string(), Value::Color(Color::WHITE)),
            ("BackgroundColor".to_string(), Value::Color(Color::new(230, 230, 230))),
            ("BorderColor".to_string(), Value::Color(Color::BLACK)),
            ("Borders".to_string(), Value::Outline(Outline::all(1.0))),
            ("TitleBarHeight".to_string(), Value::Number(20.0)),
            ("Opacity".to_string(), Value::Number(1.0)),
        ])
    }

    fn signals(&mut self) -> &mut SignalTable {
        &mut self.signals
    }

    fn handle_event(&mut self, event: &WidgetEvent, ctx: &mut EventContext<'_>) {
        let bar = Self::title_bar_height(ctx.renderer);
        match *event {
            WidgetEvent::MousePressed(point) => {
                ctx.request(WidgetAction::Raise);
                if Self::close_rect(ctx.rect.size(), bar).contains(point) {
                    self.close_armed = true;
                } else if point.y < bar {
                    self.drag = Some(point);
                }
            }
            WidgetEvent::MouseMoved(point) if ctx.state.contains(WidgetState::PRESSED) => {
                if let Some(grab) = self.drag {
                    ctx.request(WidgetAction::MoveBy(point - grab));
                }
            }
            WidgetEvent::MouseReleased(point) => {
                if self.close_armed && Self::close_rect(ctx.rect.size(), bar).contains(point) {
                    self.signals.emit("Closed", &Payload::None);
                }
                self.close_armed = false;
                self.drag = None;
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
