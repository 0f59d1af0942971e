//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and mouse events into
//! [`PointerEvent`]s carrying terminal cell coordinates. Turning a pointer
//! position into a dot is the renderer's job, since only the view knows the
//! board layout.

pub mod map;
pub mod mouse;

pub use tui_dots_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::{handle_mouse_event, PointerEvent};
