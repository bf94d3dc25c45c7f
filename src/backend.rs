//! The rendering backend seam.
//!
//! The toolkit core never draws pixels itself: a [`Backend`] implementation
//! supplied by the host does the actual rectangle/text/texture drawing, text
//! measuring, and asset loading. The core only holds [`Texture`] and [`Font`]
//! handles, which are cheap reference-counted wrappers shared across widgets
//! that use the same asset; the asset record is released when the last handle
//! drops.

use std::rc::Rc;

use crate::geometry::{Point, Rect, Size};
use crate::property::color::Color;
use crate::property::text_style::TextStyle;

/// Errors raised when the backend fails to load an asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("texture not found or unreadable: {0}")]
    Texture(String),
    #[error("font not found or unreadable: {0}")]
    Font(String),
}

// ---------------------------------------------------------------------------
// Asset handles
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct TextureData {
    path: String,
    size: Size,
}

/// A shared handle to a loaded texture.
///
/// Two handles compare equal when they refer to the same asset path, so a
/// serialized texture property round-trips through its path.
#[derive(Debug, Clone)]
pub struct Texture(Rc<TextureData>);

impl Texture {
    /// Create a handle for a loaded texture. Only backends call this.
    pub fn new(path: impl Into<String>, size: Size) -> Self {
        Self(Rc::new(TextureData { path: path.into(), size }))
    }

    /// The asset path this texture was loaded from.
    pub fn path(&self) -> &str {
        &self.0.path
    }

    /// The pixel dimensions of the loaded image.
    pub fn size(&self) -> Size {
        self.0.size
    }

    /// How many handles currently share this texture.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.0.path == other.0.path
    }
}

#[derive(Debug)]
struct FontData {
    path: String,
}

/// A shared handle to a loaded font. Equality is by asset path.
#[derive(Debug, Clone)]
pub struct Font(Rc<FontData>);

impl Font {
    /// Create a handle for a loaded font. Only backends call this.
    pub fn new(path: impl Into<String>) -> Self {
        Self(Rc::new(FontData { path: path.into() }))
    }

    /// The asset path this font was loaded from.
    pub fn path(&self) -> &str {
        &self.0.path
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.0.path == other.0.path
    }
}

// ---------------------------------------------------------------------------
// Backend trait
// ---------------------------------------------------------------------------

/// The host-supplied 2D drawing and asset-loading surface.
///
/// Widgets receive a `&mut dyn Backend` through their draw context and issue
/// these calls in z-order; the backend is free to batch them. Unset colors
/// are skipped by the widgets themselves, so backends always receive explicit
/// colors.
pub trait Backend {
    /// Load an image by path, returning a shareable handle.
    fn load_texture(&mut self, path: &str) -> Result<Texture, AssetError>;

    /// Load a font by path, returning a shareable handle.
    fn load_font(&mut self, path: &str) -> Result<Font, AssetError>;

    /// Fill a rectangle with a color.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draw a line of text at a position.
    fn draw_text(
        &mut self,
        position: Point,
        text: &str,
        font: Option<&Font>,
        text_size: f32,
        color: Color,
        style: TextStyle,
    );

    /// Draw a texture stretched to fill a rectangle.
    fn draw_texture(&mut self, rect: Rect, texture: &Texture);

    /// Measure the extents of a line of text.
    fn text_extents(&self, text: &str, font: Option<&Font>, text_size: f32) -> Size;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_equality_by_path() {
        let a = Texture::new("assets/a.png", Size::new(8.0, 8.0));
        let b = Texture::new("assets/a.png", Size::new(16.0, 16.0));
        let c = Texture::new("assets/c.png", Size::new(8.0, 8.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn texture_handle_sharing() {
        let a = Texture::new("assets/a.png", Size::new(8.0, 8.0));
        assert_eq!(a.handle_count(), 1);
        let b = a.clone();
        assert_eq!(a.handle_count(), 2);
        drop(b);
        assert_eq!(a.handle_count(), 1);
    }

    #[test]
    fn font_equality_by_path() {
        let a = Font::new("fonts/sans.ttf");
        let b = Font::new("fonts/sans.ttf");
        assert_eq!(a, b);
        assert_eq!(a.path(), "fonts/sans.ttf");
    }

    #[test]
    fn asset_error_messages() {
        let err = AssetError::Texture("missing.png".into());
        assert!(err.to_string().contains("missing.png"));
    }
}
