//! # veneer
//!
//! A themeable, retained-mode GUI widget toolkit over a pluggable 2D
//! graphics backend.
//!
//! veneer keeps a tree of widgets, styles them through shareable renderer
//! property records, routes mouse and keyboard input with pointer capture
//! and focus, and loads/saves whole trees as text documents. Drawing and
//! asset loading go through the host-supplied [`backend::Backend`], so the
//! core stays windowing-library agnostic.
//!
//! ## Core Systems
//!
//! - **[`property`]** — Typed property values, colors, text styles, and
//!   their text forms (tokenizer + parser)
//! - **[`renderer`]** — Schema-checked renderer records with reference
//!   counting and copy-on-write sharing
//! - **[`tree`]** — Slotmap-backed widget tree: z-order, layout, hit
//!   testing, focus, pointer capture, input dispatch
//! - **[`layout`]** — `50% - 10` style dimensions resolved against the
//!   parent extent
//! - **[`widget`]** — Capability traits composed into the object-safe
//!   `Widget` trait
//! - **[`widgets`]** — Built-in kinds: ClickableArea, Button, Label,
//!   Slider, Panel, Canvas, ChildWindow
//! - **[`signal`]** — Per-widget named signals with typed payloads
//! - **[`theme`]** — Widget-tree documents: parse, instantiate via a kind
//!   registry, save back omitting defaults
//! - **[`backend`]** — The drawing/asset seam and `Rc`-shared asset handles
//! - **[`testing`]** — Recording backend and interaction harness for
//!   headless tests
//! - **[`geometry`]** — Point, Size, Rect, Outline primitives

// Foundation
pub mod geometry;

// Values and styling
pub mod property;
pub mod renderer;

// Widget system
pub mod widget;
pub mod widgets;

// Tree and input
pub mod layout;
pub mod signal;
pub mod tree;

// Host integration
pub mod backend;
pub mod config;
pub mod theme;

// Test support
pub mod testing;

pub use config::GuiConfig;
pub use tree::{Gui, GuiError, WidgetId};
