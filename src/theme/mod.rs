//! Loading and saving widget trees as text documents.
//!
//! The format is line-oriented and brace-nested:
//!
//! ```text
//! Button("ok") {
//!     Position = (10, 10);
//!     Size = (50% - 10, 24);
//!     TextColor = rgb(1, 2, 3);
//! }
//! ```
//!
//! Saving emits only what differs from the defaults, so `load(save(tree))`
//! reconstructs the same shape and effective property values.

pub mod document;
pub mod parser;
pub mod registry;
pub mod writer;

pub use document::WidgetRecord;
pub use parser::parse_document;
pub use registry::WidgetRegistry;
pub use writer::write_document;

use crate::property::parser::ParseError;
use crate::renderer::data::PropertyError;
use crate::tree::GuiError;

/// Errors from loading a widget-tree document.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unknown widget kind '{0}'")]
    UnknownKind(String),
    #[error(transparent)]
    Property(#[from] PropertyError),
    #[error(transparent)]
    Gui(#[from] GuiError),
}
