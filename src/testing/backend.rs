//! A recording backend for headless tests.

use std::collections::HashSet;

use crate::backend::{AssetError, Backend, Font, Texture};
use crate::geometry::{Point, Rect, Size};
use crate::property::color::Color;
use crate::property::text_style::TextStyle;

/// One backend call, recorded in issue order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect(Rect, Color),
    Text {
        position: Point,
        text: String,
        font: Option<String>,
        text_size: f32,
        color: Color,
        style: TextStyle,
    },
    Texture(Rect, String),
}

/// A backend that records every draw call instead of painting.
///
/// Assets "load" successfully unless their path was marked as failing;
/// text measures at a fixed 7x14 pixels per character, which keeps layout
/// assertions deterministic.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCall>,
    failing_assets: HashSet<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later load of `path` fail.
    pub fn fail_asset(&mut self, path: &str) {
        self.failing_assets.insert(path.to_string());
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// The recorded calls painting into `rect`.
    pub fn calls_in(&self, rect: Rect) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| match call {
                DrawCall::Rect(r, _) | DrawCall::Texture(r, _) => rect.overlaps(*r),
                DrawCall::Text { position, .. } => rect.contains(*position),
            })
            .collect()
    }

    /// Whether any recorded text call contains `needle`.
    pub fn drew_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|call| {
            matches!(call, DrawCall::Text { text, .. } if text.contains(needle))
        })
    }
}

impl Backend for RecordingBackend {
    fn load_texture(&mut self, path: &str) -> Result<Texture, AssetError> {
        if self.failing_assets.contains(path) {
            return Err(AssetError::Texture(path.to_string()));
        }
        Ok(Texture::new(path, Size::new(16.0, 16.0)))
    }

    fn load_font(&mut self, path: &str) -> Result<Font, AssetError> {
        if self.failing_assets.contains(path) {
            return Err(AssetError::Font(path.to_string()));
        }
        Ok(Font::new(path))
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn draw_text(
        &mut self,
        position: Point,
        text: &str,
        font: Option<&Font>,
        text_size: f32,
        color: Color,
        style: TextStyle,
    ) {
        self.calls.push(DrawCall::Text {
            position,
            text: text.to_string(),
            font: font.map(|f| f.path().to_string()),
            text_size,
            color,
            style,
        });
    }

    fn draw_texture(&mut self, rect: Rect, texture: &Texture) {
        self.calls.push(DrawCall::Texture(rect, texture.path().to_string()));
    }

    fn text_extents(&self, text: &str, _font: Option<&Font>, _text_size: f32) -> Size {
        Size::new(7.0 * text.chars().count() as f32, 14.0)
    }
}
