//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (rules engine, terminal rendering, logging).
//!
//! # Board Geometry
//!
//! A board is measured in **boxes**. A board of `width x height` boxes has
//! `(width + 1) x (height + 1)` dots:
//!
//! - **Dots**: `x` in `0..=width`, `y` in `0..=height`
//! - **Horizontal lines**: `(x, y)-(x+1, y)`, `width * (height + 1)` of them
//! - **Vertical lines**: `(x, y)-(x, y+1)`, `(width + 1) * height` of them
//! - **Boxes**: `x` in `0..width`, `y` in `0..height`
//!
//! The default board is 8 x 7 boxes.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Frame rate cap |
//! | `FRAME_MS` | 33 | Frame interval |
//!
//! # Examples
//!
//! ```
//! use tui_dots_types::{BoardSize, Dot, Line, Orientation, Player};
//!
//! let size = BoardSize::default();
//! assert_eq!((size.width(), size.height()), (8, 7));
//!
//! // Lines are unordered: both click orders produce the same line.
//! let a = Dot::new(2, 3);
//! let b = Dot::new(3, 3);
//! assert_eq!(Line::between(a, b), Line::between(b, a));
//! assert_eq!(Line::between(a, b).unwrap().orientation, Orientation::Horizontal);
//!
//! // Diagonal dots are not adjacent.
//! assert_eq!(Line::between(Dot::new(0, 0), Dot::new(1, 1)), None);
//!
//! assert_eq!(Player::Human.other(), Player::Computer);
//! ```

use std::fmt;

use serde::Serialize;

/// Default board width in boxes
pub const DEFAULT_BOARD_WIDTH: u8 = 8;

/// Default board height in boxes
pub const DEFAULT_BOARD_HEIGHT: u8 = 7;

/// Largest supported board width in boxes
pub const MAX_BOARD_WIDTH: u8 = 16;

/// Largest supported board height in boxes
pub const MAX_BOARD_HEIGHT: u8 = 12;

/// Smallest box size on screen, in terminal columns and rows
pub const MIN_CELL_WIDTH: u16 = 3;
pub const MIN_CELL_HEIGHT: u16 = 2;

/// Largest box size on screen, in terminal columns and rows
pub const MAX_CELL_WIDTH: u16 = 32;
pub const MAX_CELL_HEIGHT: u16 = 16;

/// Frame rate cap for the interactive loop
pub const FPS: u32 = 30;

/// Frame interval in milliseconds
pub const FRAME_MS: u32 = 1000 / FPS;

/// Board dimensions in boxes.
///
/// Always within `1..=MAX_BOARD_WIDTH` by `1..=MAX_BOARD_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSize {
    width: u8,
    height: u8,
}

impl BoardSize {
    /// Validate and build a board size
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dots_types::BoardSize;
    ///
    /// assert!(BoardSize::new(3, 3).is_ok());
    /// assert!(BoardSize::new(0, 3).is_err());
    /// assert!(BoardSize::new(3, 200).is_err());
    /// ```
    pub fn new(width: u8, height: u8) -> Result<Self, SizeError> {
        if width == 0 || width > MAX_BOARD_WIDTH || height == 0 || height > MAX_BOARD_HEIGHT {
            return Err(SizeError { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of boxes on the board
    pub fn box_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of horizontal lines
    pub fn horizontal_line_count(&self) -> usize {
        self.width as usize * (self.height as usize + 1)
    }

    /// Number of vertical lines
    pub fn vertical_line_count(&self) -> usize {
        (self.width as usize + 1) * self.height as usize
    }

    /// Total number of lines (horizontal + vertical)
    pub fn line_count(&self) -> usize {
        self.horizontal_line_count() + self.vertical_line_count()
    }

    pub fn contains_dot(&self, dot: Dot) -> bool {
        dot.x <= self.width && dot.y <= self.height
    }

    pub fn contains_box(&self, pos: BoxPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn contains_line(&self, line: Line) -> bool {
        let Line { origin, orientation } = line;
        match orientation {
            Orientation::Horizontal => origin.x < self.width && origin.y <= self.height,
            Orientation::Vertical => origin.x <= self.width && origin.y < self.height,
        }
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Rejected board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeError {
    pub width: u8,
    pub height: u8,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "board size {}x{} is outside 1x1..={}x{}",
            self.width, self.height, MAX_BOARD_WIDTH, MAX_BOARD_HEIGHT
        )
    }
}

impl std::error::Error for SizeError {}

/// A grid intersection point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dot {
    pub x: u8,
    pub y: u8,
}

impl Dot {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Two dots are adjacent when they differ by exactly one step along
    /// exactly one axis.
    pub fn is_adjacent(&self, other: Dot) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

/// Direction of a line between two dots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An edge between two adjacent dots.
///
/// Stored in normalized form: `origin` is the top or left endpoint, so a line
/// has exactly one representation regardless of click order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    pub origin: Dot,
    pub orientation: Orientation,
}

impl Line {
    /// Line from `(x, y)` to `(x + 1, y)`
    pub const fn horizontal(x: u8, y: u8) -> Self {
        Self {
            origin: Dot::new(x, y),
            orientation: Orientation::Horizontal,
        }
    }

    /// Line from `(x, y)` to `(x, y + 1)`
    pub const fn vertical(x: u8, y: u8) -> Self {
        Self {
            origin: Dot::new(x, y),
            orientation: Orientation::Vertical,
        }
    }

    /// Line joining two dots, or `None` if they are not adjacent
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dots_types::{Dot, Line};
    ///
    /// assert_eq!(Line::between(Dot::new(1, 1), Dot::new(1, 2)), Some(Line::vertical(1, 1)));
    /// assert_eq!(Line::between(Dot::new(1, 2), Dot::new(1, 1)), Some(Line::vertical(1, 1)));
    /// assert_eq!(Line::between(Dot::new(1, 1), Dot::new(1, 1)), None);
    /// assert_eq!(Line::between(Dot::new(0, 0), Dot::new(2, 0)), None);
    /// ```
    pub fn between(a: Dot, b: Dot) -> Option<Self> {
        if !a.is_adjacent(b) {
            return None;
        }
        let origin = Dot::new(a.x.min(b.x), a.y.min(b.y));
        let orientation = if a.y == b.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Some(Self {
            origin,
            orientation,
        })
    }

    /// Both endpoints, top/left first.
    ///
    /// `None` when the far endpoint does not fit a dot coordinate.
    pub fn endpoints(&self) -> Option<(Dot, Dot)> {
        let Dot { x, y } = self.origin;
        let far = match self.orientation {
            Orientation::Horizontal => Dot::new(x.checked_add(1)?, y),
            Orientation::Vertical => Dot::new(x, y.checked_add(1)?),
        };
        Some((self.origin, far))
    }
}

/// A unit cell bounded by four lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoxPos {
    pub x: u8,
    pub y: u8,
}

impl BoxPos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The four sides in order: top, right, bottom, left
    pub fn sides(&self) -> [Line; 4] {
        let (x, y) = (self.x, self.y);
        [
            Line::horizontal(x, y),
            Line::vertical(x + 1, y),
            Line::horizontal(x, y + 1),
            Line::vertical(x, y),
        ]
    }
}

/// The two seats at the table.
///
/// `Computer` has no decision logic of its own; it is driven by the same
/// local input as `Human`, taking every other turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Index into per-player arrays
    pub fn index(&self) -> usize {
        match self {
            Player::Human => 0,
            Player::Computer => 1,
        }
    }

    /// Display label used in the score panel and game-over message
    pub fn label(&self) -> &'static str {
        match self {
            Player::Human => "Player",
            Player::Computer => "Computer",
        }
    }

    /// Lowercase identifier for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Human => "player",
            Player::Computer => "computer",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl Outcome {
    /// Decide the outcome from the two final scores
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dots_types::{Outcome, Player};
    ///
    /// assert_eq!(Outcome::from_scores(30, 26), Outcome::Winner(Player::Human));
    /// assert_eq!(Outcome::from_scores(20, 36), Outcome::Winner(Player::Computer));
    /// assert_eq!(Outcome::from_scores(28, 28), Outcome::Tie);
    /// ```
    pub fn from_scores(human: u32, computer: u32) -> Self {
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Human),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Computer),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// End-of-game banner text
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Winner(Player::Human) => "Game Over. Player wins!",
            Outcome::Winner(Player::Computer) => "Game Over. Computer wins!",
            Outcome::Tie => "Game Over. The game was a tie!",
        }
    }
}

/// Buttons on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    #[default]
    PlayAgain,
    Quit,
}

impl MenuChoice {
    pub fn toggle(&self) -> Self {
        match self {
            MenuChoice::PlayAgain => MenuChoice::Quit,
            MenuChoice::Quit => MenuChoice::PlayAgain,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::PlayAgain => "Play again",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Game actions produced by keyboard input
///
/// Mouse input does not go through actions: pointer positions are hit-tested
/// against the rendered board and turned into dot clicks directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one dot up
    CursorUp,
    /// Move the cursor one dot down
    CursorDown,
    /// Move the cursor one dot left
    CursorLeft,
    /// Move the cursor one dot right
    CursorRight,
    /// Click the dot under the cursor (or activate the focused button)
    Select,
    /// Drop the current dot selection
    Cancel,
    /// Start a fresh game on the same board
    Restart,
}

/// Event emitted after a line is drawn.
///
/// Consumed once by observers via `GameState::take_last_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastMove {
    pub line: Line,
    pub player: Player,
    pub boxes_completed: u8,
    /// The same player moves again (at least one box was completed).
    pub extra_turn: bool,
    pub game_over: bool,
}
