//! The widget abstraction.

pub mod traits;

pub use traits::{
    DrawContext, Drawable, EventContext, FocusTarget, HitTestable, Key, Widget, WidgetAction,
    WidgetEvent, WidgetState,
};
