//! The widget tree and input dispatch.

pub mod dispatch;
pub mod gui;
pub mod node;

pub use gui::{Gui, GuiError};
pub use node::{NodeData, WidgetId};
