//! flowcanvas - the diagram editing engine behind the pipeline builder.
//!
//! An infinite 2D canvas of typed pipeline nodes joined by directed edges:
//! the in-memory graph/viewport/selection stores, the pointer-driven gesture
//! state machine (pan, zoom, marquee select, node drag, edge connect), the
//! coordinate-transform math, and a pure renderer that compiles state into
//! backend-agnostic draw commands.
//!
//! The hosting application owns the window and the event loop. It feeds
//! pointer/keyboard/wheel events into an [`Editor`], replays the
//! [`render::DrawCommand`] list against its surface whenever the editor is
//! dirty, and subscribes to [`events::EditorEvent`]s to keep side panels and
//! announcers in sync. Everything here is synchronous and single-threaded;
//! external mutations must be serialized onto the same thread as pointer
//! events.
//!
//! ```ignore
//! use flowcanvas::{Editor, geometry::{Size, Vec2}, input::Modifiers};
//!
//! let mut editor = Editor::default();
//! editor.on_pointer_down(Vec2::new(120.0, 80.0), Modifiers::NONE);
//! editor.on_pointer_move(Vec2::new(160.0, 90.0));
//! editor.on_pointer_up(Vec2::new(160.0, 90.0));
//! if editor.take_dirty() {
//!     let commands = editor.render(Size::new(1280.0, 720.0));
//!     // replay commands against the host surface
//! }
//! ```

pub mod config;
pub mod constants;
pub mod editor;
pub mod events;
pub mod geometry;
pub mod graph;
pub mod input;
pub mod perf;
pub mod render;
pub mod spatial_index;
pub mod types;
pub mod view;

pub use config::EditorConfig;
pub use editor::Editor;
pub use graph::GraphStore;
pub use view::ViewState;
