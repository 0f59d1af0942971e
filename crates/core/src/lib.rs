//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of Dots and Boxes: the board of lines and
//! boxes, box completion detection, turn management and game-over detection.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same sequence of lines always yields the same game
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: usable from the terminal front end, benchmarks or tests
//!
//! # Module Structure
//!
//! - [`board`]: line tables, box owners and completion detection
//! - [`game_state`]: turns, scores, dot selection and the game-over menu
//! - [`snapshot`]: plain-data view for rendering and logging
//! - [`error`]: rule violations
//!
//! # Game Rules
//!
//! - Players take turns drawing one line between two adjacent dots
//! - Drawing the fourth side of a box claims it for the player who drew it
//! - A player who claims at least one box moves again
//! - The game ends when every box is claimed; most boxes wins
//!
//! # Example
//!
//! ```
//! use tui_dots_core::GameState;
//! use tui_dots_types::{BoardSize, BoxPos, Player};
//!
//! let mut game = GameState::new(BoardSize::new(1, 1).unwrap());
//!
//! for side in BoxPos::new(0, 0).sides() {
//!     game.play_line(side).unwrap();
//! }
//!
//! assert!(game.game_over());
//! assert_eq!(game.score(Player::Computer), 1);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod snapshot;

pub use tui_dots_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::MoveError;
pub use game_state::GameState;
pub use snapshot::GameSnapshot;
