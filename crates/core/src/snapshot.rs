use serde::Serialize;

use crate::types::{BoardSize, BoxPos, Dot, Line, MenuChoice, Orientation, Outcome, Player};

/// Plain-data copy of everything the renderer and the end-of-game log need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub size: BoardSize,
    /// Horizontal lines, row-major, `width` per row.
    pub horizontal: Vec<bool>,
    /// Vertical lines, row-major, `width + 1` per row.
    pub vertical: Vec<bool>,
    /// Box owners, row-major, `width` per row.
    pub owners: Vec<Option<Player>>,
    pub turn: Player,
    pub human_score: u32,
    pub computer_score: u32,
    pub selected: Option<Dot>,
    pub cursor: Dot,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    pub menu_choice: MenuChoice,
    pub episode_id: u32,
    pub move_count: u32,
}

impl GameSnapshot {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            horizontal: vec![false; size.horizontal_line_count()],
            vertical: vec![false; size.vertical_line_count()],
            owners: vec![None; size.box_count()],
            turn: Player::Human,
            human_score: 0,
            computer_score: 0,
            selected: None,
            cursor: Dot::new(0, 0),
            game_over: false,
            outcome: None,
            menu_choice: MenuChoice::PlayAgain,
            episode_id: 0,
            move_count: 0,
        }
    }

    pub fn is_filled(&self, line: Line) -> bool {
        if !self.size.contains_line(line) {
            return false;
        }
        let w = self.size.width() as usize;
        let Dot { x, y } = line.origin;
        match line.orientation {
            Orientation::Horizontal => self.horizontal[y as usize * w + x as usize],
            Orientation::Vertical => self.vertical[y as usize * (w + 1) + x as usize],
        }
    }

    pub fn owner(&self, pos: BoxPos) -> Option<Player> {
        if !self.size.contains_box(pos) {
            return None;
        }
        self.owners[pos.y as usize * self.size.width() as usize + pos.x as usize]
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human_score,
            Player::Computer => self.computer_score,
        }
    }

    /// Moves are accepted (the game is not over).
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
