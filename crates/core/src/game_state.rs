//! Game state module - turns, scoring, selection and game lifecycle
//!
//! This module ties the board to the two players. It implements the two-click
//! dot selection protocol, plays lines, hands out extra turns when boxes are
//! completed, and detects the end of the game.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::MoveError;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Player,
    /// Indexed by `Player::index`.
    scores: [u32; 2],
    /// First dot of a pending two-click line selection.
    selected: Option<Dot>,
    /// Keyboard cursor position (always on the board).
    cursor: Dot,
    /// Focused button on the game-over screen.
    menu_choice: MenuChoice,
    game_over: bool,
    quit_requested: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Lines drawn in the current episode.
    move_count: u32,
    /// Last drawn line (consumed by observers).
    last_move: Option<LastMove>,
}

impl GameState {
    /// Create a new game. `Player::Human` moves first.
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            turn: Player::Human,
            scores: [0, 0],
            selected: None,
            cursor: Dot::new(0, 0),
            menu_choice: MenuChoice::PlayAgain,
            game_over: false,
            quit_requested: false,
            episode_id: 0,
            move_count: 0,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn selected(&self) -> Option<Dot> {
        self.selected
    }

    pub fn cursor(&self) -> Dot {
        self.cursor
    }

    pub fn menu_choice(&self) -> MenuChoice {
        self.menu_choice
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Set once the user picks "Quit" on the game-over screen.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Winner or tie, once every box is owned
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        Some(Outcome::from_scores(
            self.score(Player::Human),
            self.score(Player::Computer),
        ))
    }

    pub fn take_last_move(&mut self) -> Option<LastMove> {
        self.last_move.take()
    }

    /// Click a dot (mouse click or `Select` on the cursor).
    ///
    /// - nothing selected: the dot becomes the selection
    /// - a dot selected: the line between them is played if the dots are
    ///   adjacent and the line is open; the selection is cleared either way
    ///
    /// Returns the move when a line was drawn.
    pub fn click_dot(&mut self, dot: Dot) -> Option<LastMove> {
        if self.game_over {
            return None;
        }
        if !self.board.contains_dot(dot) {
            self.selected = None;
            return None;
        }

        let Some(first) = self.selected.take() else {
            self.selected = Some(dot);
            return None;
        };

        let line = Line::between(first, dot)?;
        if self.board.is_filled(line) {
            return None;
        }
        self.play_line(line).ok()
    }

    /// A click that hit no dot drops the pending selection.
    pub fn click_empty(&mut self) {
        self.selected = None;
    }

    /// Draw a line for the player to move.
    ///
    /// Completing one or two boxes scores them and keeps the turn; otherwise
    /// the turn passes to the other player. Drawing the last line ends the game.
    pub fn play_line(&mut self, line: Line) -> Result<LastMove, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        self.board.fill(line)?;

        let player = self.turn;
        let claimed = self.board.claim_completed(line, player);
        let boxes_completed = claimed.len() as u8;
        self.scores[player.index()] += boxes_completed as u32;
        self.move_count = self.move_count.wrapping_add(1);

        if boxes_completed == 0 {
            self.turn = player.other();
        }

        if self.board.is_full() {
            self.game_over = true;
            self.selected = None;
            self.menu_choice = MenuChoice::PlayAgain;
        }

        let mv = LastMove {
            line,
            player,
            boxes_completed,
            extra_turn: boxes_completed > 0 && !self.game_over,
            game_over: self.game_over,
        };
        debug!(
            player = player.as_str(),
            x = line.origin.x,
            y = line.origin.y,
            orientation = ?line.orientation,
            boxes_completed,
            "line drawn"
        );
        if self.game_over {
            info!(
                episode_id = self.episode_id,
                player_score = self.score(Player::Human),
                computer_score = self.score(Player::Computer),
                "game over"
            );
        }

        self.last_move = Some(mv);
        Ok(mv)
    }

    /// Move the keyboard cursor, clamped to the dot grid.
    pub fn move_cursor(&mut self, dx: i8, dy: i8) -> bool {
        let size = self.board.size();
        let x = (self.cursor.x as i16 + dx as i16).clamp(0, size.width() as i16) as u8;
        let y = (self.cursor.y as i16 + dy as i16).clamp(0, size.height() as i16) as u8;
        let next = Dot::new(x, y);
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Put the cursor on a dot (pointer hover). Off-board dots are ignored.
    pub fn set_cursor(&mut self, dot: Dot) -> bool {
        if !self.board.contains_dot(dot) || dot == self.cursor {
            return false;
        }
        self.cursor = dot;
        true
    }

    /// Activate a game-over button.
    pub fn choose(&mut self, choice: MenuChoice) -> bool {
        if !self.game_over {
            return false;
        }
        self.menu_choice = choice;
        match choice {
            MenuChoice::PlayAgain => self.restart(),
            MenuChoice::Quit => self.quit_requested = true,
        }
        true
    }

    /// Start a fresh game on the same board.
    pub fn restart(&mut self) {
        let size = self.board.size();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(size);
        self.episode_id = next_episode;
        info!(
            episode_id = next_episode,
            width = size.width(),
            height = size.height(),
            "new game"
        );
    }

    /// Apply a keyboard action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return self.apply_menu_action(action);
        }

        match action {
            GameAction::CursorUp => self.move_cursor(0, -1),
            GameAction::CursorDown => self.move_cursor(0, 1),
            GameAction::CursorLeft => self.move_cursor(-1, 0),
            GameAction::CursorRight => self.move_cursor(1, 0),
            GameAction::Select => {
                self.click_dot(self.cursor);
                true
            }
            GameAction::Cancel => self.selected.take().is_some(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    fn apply_menu_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorUp
            | GameAction::CursorDown
            | GameAction::CursorLeft
            | GameAction::CursorRight => {
                self.menu_choice = self.menu_choice.toggle();
                true
            }
            GameAction::Select => self.choose(self.menu_choice),
            GameAction::Cancel | GameAction::Restart => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.horizontal.clear();
        out.horizontal.extend_from_slice(self.board.horizontal_cells());
        out.vertical.clear();
        out.vertical.extend_from_slice(self.board.vertical_cells());
        out.owners.clear();
        out.owners.extend_from_slice(self.board.owner_cells());
        out.turn = self.turn;
        out.human_score = self.score(Player::Human);
        out.computer_score = self.score(Player::Computer);
        out.selected = self.selected;
        out.cursor = self.cursor;
        out.game_over = self.game_over;
        out.outcome = self.outcome();
        out.menu_choice = self.menu_choice;
        out.episode_id = self.episode_id;
        out.move_count = self.move_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.board.size());
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
