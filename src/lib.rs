//! Dots and Boxes in the terminal (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_dots::{core,input,term,types}` and adds the
//! start-up concerns shared by the binary and the integration tests.

pub mod config;
pub mod logging;

pub use tui_dots_core as core;
pub use tui_dots_input as input;
pub use tui_dots_term as term;
pub use tui_dots_types as types;
