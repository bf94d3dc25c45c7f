//! Gui-wide configuration.

use crate::backend::Font;

/// Configuration for a [`crate::tree::Gui`].
#[derive(Debug, Clone)]
pub struct GuiConfig {
    /// Font used by text-drawing widgets whose `Font` property is unset.
    pub default_font: Option<Font>,
    /// Text size used when a widget's `TextSize` property is zero.
    pub default_text_size: f32,
    /// Horizontal padding applied around widget text, in pixels.
    pub text_padding: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            default_font: None,
            default_text_size: 13.0,
            text_padding: 4.0,
        }
    }
}

impl GuiConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default font (builder).
    pub fn with_default_font(mut self, font: Font) -> Self {
        self.default_font = Some(font);
        self
    }

    /// Set the default text size (builder).
    pub fn with_default_text_size(mut self, size: f32) -> Self {
        self.default_text_size = size;
        self
    }

    /// Set the text padding (builder).
    pub fn with_text_padding(mut self, padding: f32) -> Self {
        self.text_padding = padding;
        self
    }
}
