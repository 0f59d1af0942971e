//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Besides drawing, it owns the board geometry,
//! so it also answers the reverse question: which dot or button sits under a
//! given terminal cell.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BoardSize, BoxPos, Dot, Line, MenuChoice, Player, MAX_CELL_HEIGHT, MAX_CELL_WIDTH,
    MIN_CELL_HEIGHT, MIN_CELL_WIDTH,
};

/// Columns on either side of a dot that still count as a hit on it.
pub const DOT_HIT_RADIUS: u16 = 1;

/// White board margin around the dot grid.
const FRAME_PAD_X: u16 = 2;
const FRAME_PAD_Y: u16 = 1;

/// Rows under the board: gap, two score lines, gap, hint.
const PANEL_HEIGHT: u16 = 5;

const BG: Rgb = Rgb::new(10, 90, 75);
const BOARD: Rgb = Rgb::new(255, 255, 255);
const OPEN_LINE: Rgb = Rgb::new(185, 185, 185);
const FILLED_LINE: Rgb = Rgb::new(0, 0, 0);
const FONT: Rgb = Rgb::new(255, 255, 255);
const FONT_RECT: Rgb = Rgb::new(255, 190, 0);
const HIGHLIGHT: Rgb = Rgb::new(50, 175, 70);
const PLAYER: Rgb = Rgb::new(180, 20, 20);
const COMPUTER: Rgb = Rgb::new(60, 5, 60);

const HINT: &str = "click two dots | arrows+enter | esc cancel | r restart | q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column - self.x) < self.width
            && (row - self.y) < self.height
    }
}

/// Where the board lands on screen for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub size: BoardSize,
    pub cell_w: u16,
    pub cell_h: u16,
    /// White board rectangle, including padding.
    pub frame: Rect,
    /// Screen position of dot (0, 0).
    pub origin_x: u16,
    pub origin_y: u16,
}

impl BoardLayout {
    pub fn dot_position(&self, dot: Dot) -> (u16, u16) {
        (
            self.origin_x
                .saturating_add((dot.x as u16).saturating_mul(self.cell_w)),
            self.origin_y
                .saturating_add((dot.y as u16).saturating_mul(self.cell_h)),
        )
    }

    /// Row of the first score line.
    pub fn panel_y(&self) -> u16 {
        self.frame.y + self.frame.height + 1
    }

    /// The dot whose hit rectangle covers a terminal cell.
    ///
    /// A dot is hit on its own row, within `DOT_HIT_RADIUS` columns.
    pub fn dot_at(&self, column: u16, row: u16) -> Option<Dot> {
        let cw = self.cell_w as i32;
        let ch = self.cell_h as i32;
        let rel_x = column as i32 - self.origin_x as i32;
        let rel_y = row as i32 - self.origin_y as i32;
        if rel_y < 0 || rel_y % ch != 0 {
            return None;
        }

        let x = (rel_x + cw / 2).div_euclid(cw);
        if (rel_x - x * cw).abs() > DOT_HIT_RADIUS as i32 {
            return None;
        }
        let y = rel_y / ch;
        if x < 0 || x > self.size.width() as i32 || y > self.size.height() as i32 {
            return None;
        }
        Some(Dot::new(x as u8, y as u8))
    }
}

/// Placement of the game-over message and its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub message: Rect,
    pub play_again: Rect,
    pub quit: Rect,
}

impl OverlayLayout {
    pub fn button_at(&self, column: u16, row: u16) -> Option<MenuChoice> {
        if self.play_again.contains(column, row) {
            Some(MenuChoice::PlayAgain)
        } else if self.quit.contains(column, row) {
            Some(MenuChoice::Quit)
        } else {
            None
        }
    }
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Columns per box.
    cell_w: u16,
    /// Rows per box.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps boxes roughly square with typical terminal glyphs.
        Self {
            cell_w: 6,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Cell sizes are clamped to 3x2 ..= 32x16. Below that dot hit areas
    /// overlap.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH),
            cell_h: cell_h.clamp(MIN_CELL_HEIGHT, MAX_CELL_HEIGHT),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, size: BoardSize, viewport: Viewport) -> BoardLayout {
        let board_w = size.width() as u16 * self.cell_w + 1;
        let board_h = size.height() as u16 * self.cell_h + 1;
        let frame_w = board_w + 2 * FRAME_PAD_X;
        let frame_h = board_h + 2 * FRAME_PAD_Y;

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + PANEL_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            size,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            frame: Rect {
                x,
                y,
                width: frame_w,
                height: frame_h,
            },
            origin_x: x + FRAME_PAD_X,
            origin_y: y + FRAME_PAD_Y,
        }
    }

    pub fn overlay_layout(&self, message: &str, viewport: Viewport) -> OverlayLayout {
        let msg_w = message.chars().count() as u16 + 8;
        let msg_x = viewport.width.saturating_sub(msg_w) / 2;
        let msg_y = (viewport.height / 2).saturating_sub(1);

        let play_w = button_width(MenuChoice::PlayAgain);
        let quit_w = button_width(MenuChoice::Quit);
        let button_y = msg_y + 2;

        OverlayLayout {
            message: Rect {
                x: msg_x,
                y: msg_y,
                width: msg_w,
                height: 1,
            },
            play_again: Rect {
                x: msg_x + 2,
                y: button_y,
                width: play_w,
                height: 1,
            },
            quit: Rect {
                x: (msg_x + msg_w).saturating_sub(2 + quit_w),
                y: button_y,
                width: quit_w,
                height: 1,
            },
        }
    }

    /// Hit-test a terminal cell against the dot grid.
    pub fn dot_at(&self, size: BoardSize, viewport: Viewport, column: u16, row: u16) -> Option<Dot> {
        self.layout(size, viewport).dot_at(column, row)
    }

    /// Hit-test a terminal cell against the game-over buttons.
    pub fn button_at(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<MenuChoice> {
        let outcome = snap.outcome.filter(|_| snap.game_over)?;
        self.overlay_layout(outcome.message(), viewport)
            .button_at(column, row)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(FONT, BG),
        });

        let layout = self.layout(snap.size, viewport);
        let f = layout.frame;
        fb.fill_rect(f.x, f.y, f.width, f.height, ' ', CellStyle::new(BOARD, BOARD));

        self.draw_boxes(fb, snap, &layout);
        self.draw_lines(fb, snap, &layout);
        self.draw_dots(fb, snap, &layout);
        self.draw_panel(fb, snap, &layout);

        if let Some(outcome) = snap.outcome.filter(|_| snap.game_over) {
            self.draw_overlay(fb, outcome.message(), snap.menu_choice, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_boxes(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        // Leave a one-column margin inside the box when there is room for it.
        let margin = if self.cell_w > 3 { 1 } else { 0 };
        let fill_w = self.cell_w - 1 - 2 * margin;
        let fill_h = self.cell_h - 1;

        for y in 0..snap.size.height() {
            for x in 0..snap.size.width() {
                let Some(owner) = snap.owner(BoxPos::new(x, y)) else {
                    continue;
                };
                let (px, py) = layout.dot_position(Dot::new(x, y));
                let style = CellStyle::new(player_color(owner), BOARD);
                fb.fill_rect(px + 1 + margin, py + 1, fill_w, fill_h, '█', style);
            }
        }
    }

    fn draw_lines(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let open = CellStyle::new(OPEN_LINE, BOARD);
        let filled = CellStyle::new(FILLED_LINE, BOARD).bold();
        let size = snap.size;

        for y in 0..=size.height() {
            for x in 0..size.width() {
                let line = Line::horizontal(x, y);
                let (style, ch) = if snap.is_filled(line) {
                    (filled, '━')
                } else {
                    (open, '─')
                };
                let (px, py) = layout.dot_position(line.origin);
                fb.fill_rect(px + 1, py, self.cell_w - 1, 1, ch, style);
            }
        }

        for y in 0..size.height() {
            for x in 0..=size.width() {
                let line = Line::vertical(x, y);
                let (style, ch) = if snap.is_filled(line) {
                    (filled, '┃')
                } else {
                    (open, '│')
                };
                let (px, py) = layout.dot_position(line.origin);
                fb.fill_rect(px, py + 1, 1, self.cell_h - 1, ch, style);
            }
        }
    }

    fn draw_dots(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let plain = CellStyle::new(FILLED_LINE, BOARD);
        let selected = CellStyle::new(HIGHLIGHT, BOARD).bold();
        let cursor_bg = FONT_RECT;

        for y in 0..=snap.size.height() {
            for x in 0..=snap.size.width() {
                let dot = Dot::new(x, y);
                let (px, py) = layout.dot_position(dot);
                let (ch, mut style) = if snap.selected == Some(dot) {
                    ('◉', selected)
                } else {
                    ('●', plain)
                };
                if snap.playable() && snap.cursor == dot {
                    style.bg = cursor_bg;
                }
                fb.put_char(px, py, ch, style);
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let text = CellStyle::new(FONT, BG).bold();
        let marker = CellStyle::new(FONT, BG);
        let x = layout.frame.x;
        let mut y = layout.panel_y();

        for player in [Player::Human, Player::Computer] {
            fb.put_char(x, y, '■', CellStyle::new(player_color(player), BG));
            let mut cx = x + 2;
            cx += fb.put_str(cx, y, player.label(), text);
            cx += fb.put_str(cx, y, "'s score: ", text);
            cx += fb.put_u32(cx, y, snap.score(player), text);
            if snap.playable() && snap.turn == player {
                fb.put_char(cx + 2, y, '◀', marker);
            }
            y += 1;
        }

        fb.put_str(x, y + 1, HINT, CellStyle::new(FONT, BG).dim());
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, message: &str, focus: MenuChoice, viewport: Viewport) {
        let overlay = self.overlay_layout(message, viewport);
        let banner = CellStyle::new(FONT, FONT_RECT).bold();
        let m = overlay.message;

        fb.fill_rect(m.x, m.y.saturating_sub(1), m.width, 5, ' ', CellStyle::new(FONT, FONT_RECT));
        fb.put_str(m.x + 4, m.y, message, banner);

        for (choice, rect) in [
            (MenuChoice::PlayAgain, overlay.play_again),
            (MenuChoice::Quit, overlay.quit),
        ] {
            let style = if choice == focus {
                CellStyle::new(FONT_RECT, FONT).bold()
            } else {
                CellStyle::new(FONT, FONT_RECT)
            };
            let mut cx = rect.x;
            cx += fb.put_str(cx, rect.y, "[ ", style);
            cx += fb.put_str(cx, rect.y, choice.label(), style);
            fb.put_str(cx, rect.y, " ]", style);
        }
    }
}

fn button_width(choice: MenuChoice) -> u16 {
    choice.label().chars().count() as u16 + 4
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::Human => PLAYER,
        Player::Computer => COMPUTER,
    }
}
