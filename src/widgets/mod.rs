//! Built-in widget kinds.

pub mod button;
pub mod canvas;
pub mod child_window;
pub mod clickable;
pub mod label;
pub mod panel;
pub mod slider;

pub use button::Button;
pub use canvas::Canvas;
pub use child_window::ChildWindow;
pub use clickable::ClickableArea;
pub use label::Label;
pub use panel::Panel;
pub use slider::Slider;

use crate::backend::Backend;
use crate::geometry::{Outline, Point, Rect};
use crate::property::color::Color;
use crate::renderer::RendererData;
use crate::widget::WidgetState;

// ---------------------------------------------------------------------------
// Renderer lookups shared by the widget impls
// ---------------------------------------------------------------------------

/// A color property; unset when missing or of another kind.
pub(crate) fn color_of(renderer: &RendererData, name: &str) -> Color {
    renderer
        .get(name)
        .and_then(|value| value.as_color().ok())
        .unwrap_or(Color::NONE)
}

pub(crate) fn number_of(renderer: &RendererData, name: &str, fallback: f32) -> f32 {
    renderer
        .get(name)
        .and_then(|value| value.as_number().ok())
        .unwrap_or(fallback)
}

pub(crate) fn outline_of(renderer: &RendererData, name: &str) -> Outline {
    renderer
        .get(name)
        .and_then(|value| value.as_outline().ok())
        .unwrap_or(Outline::ZERO)
}

/// Resolve a color with per-state variants (`Hover`, `Down`, `Disabled`).
///
/// The state variant applies only when set; otherwise the base color is
/// used, so a theme may style just the base.
pub(crate) fn state_color(renderer: &RendererData, base: &str, state: WidgetState) -> Color {
    let suffix = if !state.contains(WidgetState::ENABLED) {
        "Disabled"
    } else if state.contains(WidgetState::PRESSED) {
        "Down"
    } else if state.contains(WidgetState::HOVERED) {
        "Hover"
    } else {
        ""
    };
    if !suffix.is_empty() {
        let variant = color_of(renderer, &format!("{base}{suffix}"));
        if variant.is_set() {
            return variant;
        }
    }
    color_of(renderer, base)
}

// ---------------------------------------------------------------------------
// Drawing helpers
// ---------------------------------------------------------------------------

/// Paint a border frame and the background inside it. Unset colors skip
/// their part.
pub(crate) fn draw_box(
    backend: &mut dyn Backend,
    rect: Rect,
    background: Color,
    borders: Outline,
    border_color: Color,
) {
    if border_color.is_set() {
        // Four strips: top, bottom, left, right.
        backend.draw_rect(Rect::new(rect.x, rect.y, rect.width, borders.top), border_color);
        backend.draw_rect(
            Rect::new(rect.x, rect.bottom() - borders.bottom, rect.width, borders.bottom),
            border_color,
        );
        backend.draw_rect(
            Rect::new(rect.x, rect.y + borders.top, borders.left, rect.height - borders.vertical()),
            border_color,
        );
        backend.draw_rect(
            Rect::new(
                rect.right() - borders.right,
                rect.y + borders.top,
                borders.right,
                rect.height - borders.vertical(),
            ),
            border_color,
        );
    }
    if background.is_set() {
        backend.draw_rect(rect.shrink(borders), background);
    }
}

/// Where to draw a line of text so it sits centered in a rect.
pub(crate) fn center_text(
    backend: &dyn Backend,
    rect: Rect,
    text: &str,
    font: Option<&crate::backend::Font>,
    text_size: f32,
) -> Point {
    let extents = backend.text_extents(text, font, text_size);
    Point::new(
        rect.x + (rect.width - extents.width) / 2.0,
        rect.y + (rect.height - extents.height) / 2.0,
    )
}
