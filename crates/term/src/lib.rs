//! Terminal rendering for the Dots and Boxes board.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] turns a [`core::GameSnapshot`] into cells and
//! [`TerminalRenderer`] flushes only the cells that changed.
//!
//! `GameView` also owns the board geometry, so mouse hit-testing (which dot
//! or which game-over button sits under the pointer) lives here too.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_dots_core as core;
pub use tui_dots_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, OverlayLayout, Rect, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
