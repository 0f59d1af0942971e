//! Rule violations reported by the board and game state.

use std::fmt;

use crate::types::{Line, Orientation};

/// Why a line could not be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The line does not lie on the board.
    OutOfBounds(Line),
    /// The line has already been drawn.
    AlreadyFilled(Line),
    /// Every box is owned; no further moves are accepted.
    GameOver,
}

impl std::error::Error for MoveError {}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(line) => {
                write_line(f, *line)?;
                write!(f, " is off the board")
            }
            MoveError::AlreadyFilled(line) => {
                write_line(f, *line)?;
                write!(f, " is already drawn")
            }
            MoveError::GameOver => write!(f, "the game is over"),
        }
    }
}

/// `line (x1, y1)-(x2, y2)`, widened so lines at the coordinate limit print.
fn write_line(f: &mut fmt::Formatter<'_>, line: Line) -> fmt::Result {
    let x = u16::from(line.origin.x);
    let y = u16::from(line.origin.y);
    let (x2, y2) = match line.orientation {
        Orientation::Horizontal => (x + 1, y),
        Orientation::Vertical => (x, y + 1),
    };
    write!(f, "line ({x}, {y})-({x2}, {y2})")
}
