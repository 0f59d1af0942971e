//! Board module - manages lines and box ownership
//!
//! The board stores every line exactly once, in two flat tables:
//!
//! - horizontal lines, row-major, index `y * width + x`
//! - vertical lines, row-major, index `y * (width + 1) + x`
//!
//! Box owners live in a third flat table indexed `y * width + x`.
//! Coordinates: x grows left to right, y grows top to bottom.

use arrayvec::ArrayVec;

use crate::error::MoveError;
use crate::types::{BoardSize, BoxPos, Dot, Line, Orientation, Player};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    owners: Vec<Option<Player>>,
}

impl Board {
    /// Create a board with every line open and every box unowned
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            horizontal: vec![false; size.horizontal_line_count()],
            vertical: vec![false; size.vertical_line_count()],
            owners: vec![None; size.box_count()],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Width in boxes
    pub fn width(&self) -> u8 {
        self.size.width()
    }

    /// Height in boxes
    pub fn height(&self) -> u8 {
        self.size.height()
    }

    pub fn contains_dot(&self, dot: Dot) -> bool {
        self.size.contains_dot(dot)
    }

    pub fn contains_line(&self, line: Line) -> bool {
        self.size.contains_line(line)
    }

    #[inline(always)]
    fn line_index(&self, line: Line) -> Option<usize> {
        if !self.contains_line(line) {
            return None;
        }
        let Dot { x, y } = line.origin;
        let idx = match line.orientation {
            Orientation::Horizontal => y as usize * self.width() as usize + x as usize,
            Orientation::Vertical => y as usize * (self.width() as usize + 1) + x as usize,
        };
        Some(idx)
    }

    #[inline(always)]
    fn box_index(&self, pos: BoxPos) -> Option<usize> {
        if !self.size.contains_box(pos) {
            return None;
        }
        Some(pos.y as usize * self.width() as usize + pos.x as usize)
    }

    /// Whether a line has been drawn. Out-of-bounds lines are never filled.
    pub fn is_filled(&self, line: Line) -> bool {
        match (self.line_index(line), line.orientation) {
            (Some(i), Orientation::Horizontal) => self.horizontal[i],
            (Some(i), Orientation::Vertical) => self.vertical[i],
            (None, _) => false,
        }
    }

    /// Draw a line.
    ///
    /// The board is left untouched on error.
    pub fn fill(&mut self, line: Line) -> Result<(), MoveError> {
        let idx = self.line_index(line).ok_or(MoveError::OutOfBounds(line))?;
        let slot = match line.orientation {
            Orientation::Horizontal => &mut self.horizontal[idx],
            Orientation::Vertical => &mut self.vertical[idx],
        };
        if *slot {
            return Err(MoveError::AlreadyFilled(line));
        }
        *slot = true;
        Ok(())
    }

    /// The one or two boxes a line borders
    pub fn adjacent_boxes(&self, line: Line) -> ArrayVec<BoxPos, 2> {
        let mut out = ArrayVec::new();
        if !self.contains_line(line) {
            return out;
        }

        let Dot { x, y } = line.origin;
        let (before, after) = match line.orientation {
            // Box above and box below.
            Orientation::Horizontal => (y.checked_sub(1).map(|y| BoxPos::new(x, y)), BoxPos::new(x, y)),
            // Box to the left and box to the right.
            Orientation::Vertical => (x.checked_sub(1).map(|x| BoxPos::new(x, y)), BoxPos::new(x, y)),
        };

        if let Some(pos) = before {
            out.push(pos);
        }
        if self.size.contains_box(after) {
            out.push(after);
        }
        out
    }

    /// Number of drawn sides around a box (0..=4)
    pub fn sides_filled(&self, pos: BoxPos) -> u8 {
        if !self.size.contains_box(pos) {
            return 0;
        }
        pos.sides().iter().filter(|&&l| self.is_filled(l)).count() as u8
    }

    pub fn is_complete(&self, pos: BoxPos) -> bool {
        self.sides_filled(pos) == 4
    }

    pub fn owner(&self, pos: BoxPos) -> Option<Player> {
        self.box_index(pos).and_then(|i| self.owners[i])
    }

    /// Claim every unowned, fully enclosed box bordering `line` for `player`.
    ///
    /// Only the boxes adjacent to the line are inspected. Returns the boxes
    /// that were claimed.
    pub fn claim_completed(&mut self, line: Line, player: Player) -> ArrayVec<BoxPos, 2> {
        let mut claimed = ArrayVec::new();
        for pos in self.adjacent_boxes(line) {
            let Some(idx) = self.box_index(pos) else {
                continue;
            };
            if self.owners[idx].is_none() && self.is_complete(pos) {
                self.owners[idx] = Some(player);
                claimed.push(pos);
            }
        }
        claimed
    }

    /// Boxes owned by `player`
    pub fn count_owned(&self, player: Player) -> u32 {
        self.owners.iter().filter(|o| **o == Some(player)).count() as u32
    }

    /// Boxes owned by anyone
    pub fn owned_count(&self) -> u32 {
        self.owners.iter().filter(|o| o.is_some()).count() as u32
    }

    /// Number of drawn lines
    pub fn filled_count(&self) -> usize {
        self.horizontal.iter().chain(self.vertical.iter()).filter(|f| **f).count()
    }

    /// Total number of lines on the board
    pub fn line_count(&self) -> usize {
        self.size.line_count()
    }

    /// Every box is owned
    pub fn is_full(&self) -> bool {
        self.owners.iter().all(|o| o.is_some())
    }

    /// All lines on the board, horizontal first, each row left to right
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        let w = self.width();
        let h = self.height();
        let horizontal = (0..=h).flat_map(move |y| (0..w).map(move |x| Line::horizontal(x, y)));
        let vertical = (0..h).flat_map(move |y| (0..=w).map(move |x| Line::vertical(x, y)));
        horizontal.chain(vertical)
    }

    /// Drawn lines
    pub fn filled_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines().filter(|l| self.is_filled(*l))
    }

    /// Lines still available to play
    pub fn open_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines().filter(|l| !self.is_filled(*l))
    }

    /// Raw horizontal line table (row-major, `width` per row)
    pub fn horizontal_cells(&self) -> &[bool] {
        &self.horizontal
    }

    /// Raw vertical line table (row-major, `width + 1` per row)
    pub fn vertical_cells(&self) -> &[bool] {
        &self.vertical
    }

    /// Raw owner table (row-major, `width` per row)
    pub fn owner_cells(&self) -> &[Option<Player>] {
        &self.owners
    }

    /// Reset to an empty board of the same size
    pub fn clear(&mut self) {
        self.horizontal.fill(false);
        self.vertical.fill(false);
        self.owners.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Board {
        Board::new(BoardSize::new(2, 2).unwrap())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = small();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.owned_count(), 0);
        assert_eq!(board.line_count(), 12);
        assert_eq!(board.lines().count(), 12);
        assert!(!board.is_full());
    }

    #[test]
    fn test_fill_rejects_duplicates() {
        let mut board = small();
        let line = Line::horizontal(0, 0);
        assert_eq!(board.fill(line), Ok(()));
        assert!(board.is_filled(line));
        assert_eq!(board.fill(line), Err(MoveError::AlreadyFilled(line)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_fill_rejects_out_of_bounds() {
        let mut board = small();
        let line = Line::horizontal(2, 0);
        assert_eq!(board.fill(line), Err(MoveError::OutOfBounds(line)));
        assert!(!board.is_filled(line));
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_horizontal_and_vertical_tables_are_independent() {
        let mut board = small();
        board.fill(Line::horizontal(1, 1)).unwrap();
        assert!(!board.is_filled(Line::vertical(1, 1)));
        assert_eq!(board.horizontal_cells().iter().filter(|f| **f).count(), 1);
        assert_eq!(board.vertical_cells().iter().filter(|f| **f).count(), 0);
    }

    #[test]
    fn test_adjacent_boxes() {
        let board = small();
        // Top edge: one box below.
        assert_eq!(board.adjacent_boxes(Line::horizontal(0, 0)).as_slice(), &[BoxPos::new(0, 0)]);
        // Middle horizontal: box above and below.
        assert_eq!(
            board.adjacent_boxes(Line::horizontal(1, 1)).as_slice(),
            &[BoxPos::new(1, 0), BoxPos::new(1, 1)]
        );
        // Bottom edge: one box above.
        assert_eq!(board.adjacent_boxes(Line::horizontal(0, 2)).as_slice(), &[BoxPos::new(0, 1)]);
        // Right edge: one box to the left.
        assert_eq!(board.adjacent_boxes(Line::vertical(2, 1)).as_slice(), &[BoxPos::new(1, 1)]);
        // Out of bounds: none.
        assert!(board.adjacent_boxes(Line::vertical(3, 0)).is_empty());
    }

    #[test]
    fn test_claim_requires_all_four_sides() {
        let mut board = small();
        let pos = BoxPos::new(0, 0);
        let sides = pos.sides();
        for &side in &sides[..3] {
            board.fill(side).unwrap();
            assert!(board.claim_completed(side, Player::Human).is_empty());
        }
        assert_eq!(board.sides_filled(pos), 3);

        board.fill(sides[3]).unwrap();
        let claimed = board.claim_completed(sides[3], Player::Computer);
        assert_eq!(claimed.as_slice(), &[pos]);
        assert_eq!(board.owner(pos), Some(Player::Computer));
        assert_eq!(board.count_owned(Player::Computer), 1);
    }

    #[test]
    fn test_shared_line_can_close_two_boxes() {
        let mut board = small();
        let shared = Line::vertical(1, 0);
        for line in BoxPos::new(0, 0).sides().into_iter().chain(BoxPos::new(1, 0).sides()) {
            if line != shared {
                board.fill(line).unwrap();
            }
        }
        board.fill(shared).unwrap();
        let claimed = board.claim_completed(shared, Player::Human);
        assert_eq!(claimed.len(), 2);
        assert_eq!(board.count_owned(Player::Human), 2);
    }

    #[test]
    fn test_owner_never_changes() {
        let mut board = small();
        let pos = BoxPos::new(1, 1);
        for side in pos.sides() {
            board.fill(side).unwrap();
        }
        assert_eq!(board.claim_completed(pos.sides()[0], Player::Human).len(), 1);
        assert!(board.claim_completed(pos.sides()[1], Player::Computer).is_empty());
        assert_eq!(board.owner(pos), Some(Player::Human));
    }

    #[test]
    fn test_full_board() {
        let mut board = small();
        let lines: Vec<Line> = board.lines().collect();
        for line in lines {
            board.fill(line).unwrap();
            board.claim_completed(line, Player::Human);
        }
        assert!(board.is_full());
        assert_eq!(board.open_lines().count(), 0);
        assert_eq!(board.filled_lines().count(), 12);

        board.clear();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.owned_count(), 0);
    }
}
