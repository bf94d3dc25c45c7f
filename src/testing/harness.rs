//! Harness: programmatic interaction with a headless [`Gui`].
//!
//! The harness owns a [`Gui`] and a [`RecordingBackend`] and provides
//! click/drag/type helpers plus access to the recorded draw calls, so tests
//! drive the toolkit the way a windowing host would.

use crate::config::GuiConfig;
use crate::geometry::{Point, Size};
use crate::testing::backend::RecordingBackend;
use crate::tree::Gui;
use crate::widget::Key;

/// A headless toolkit driver for testing.
pub struct Harness {
    gui: Gui,
    backend: RecordingBackend,
}

impl Harness {
    /// Create a harness with the given view size.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, GuiConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: GuiConfig) -> Self {
        let mut gui = Gui::new(config);
        gui.set_view_size(Size::new(width, height));
        Self {
            gui,
            backend: RecordingBackend::new(),
        }
    }

    pub fn gui(&self) -> &Gui {
        &self.gui
    }

    pub fn gui_mut(&mut self) -> &mut Gui {
        &mut self.gui
    }

    pub fn backend(&self) -> &RecordingBackend {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut RecordingBackend {
        &mut self.backend
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Press and release at a point.
    pub fn click(&mut self, x: f32, y: f32) {
        self.gui.on_mouse_press(Point::new(x, y));
        self.gui.on_mouse_release(Point::new(x, y));
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.gui.on_mouse_press(Point::new(x, y));
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.gui.on_mouse_move(Point::new(x, y));
    }

    pub fn release(&mut self, x: f32, y: f32) {
        self.gui.on_mouse_release(Point::new(x, y));
    }

    /// Press, move through the given points, and release at the last one.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.press(from.0, from.1);
        self.move_to(to.0, to.1);
        self.release(to.0, to.1);
    }

    pub fn press_key(&mut self, key: Key) {
        self.gui.on_key(key);
    }

    /// Type each character of `text` as an individual text event.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.gui.on_text(ch);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.gui.set_view_size(Size::new(width, height));
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Clear the recording and paint one frame into it.
    pub fn render(&mut self) {
        self.backend.clear();
        self.gui.draw(&mut self.backend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::testing::backend::DrawCall;
    use crate::widgets::Button;

    #[test]
    fn render_records_widget_painting() {
        let mut harness = Harness::new(200.0, 100.0);
        let button = harness.gui_mut().add(Button::boxed("Ok"));
        harness.gui_mut().set_rect(button, Rect::new(10.0, 10.0, 60.0, 24.0));
        harness.render();
        assert!(harness.backend().drew_text("Ok"));
        assert!(harness
            .backend()
            .calls
            .iter()
            .any(|call| matches!(call, DrawCall::Rect(..))));
    }

    #[test]
    fn hidden_widgets_are_not_painted() {
        let mut harness = Harness::new(200.0, 100.0);
        let button = harness.gui_mut().add(Button::boxed("Ok"));
        harness.gui_mut().set_rect(button, Rect::new(10.0, 10.0, 60.0, 24.0));
        harness.gui_mut().set_visible(button, false);
        harness.render();
        assert!(harness.backend().calls.is_empty());
    }
}
