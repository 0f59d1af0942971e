use tui_dots::core::GameState;
use tui_dots::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_dots::types::{BoardSize, BoxPos, Dot, Line, MenuChoice, Player};

fn game(w: u8, h: u8) -> GameState {
    GameState::new(BoardSize::new(w, h).unwrap())
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_places_dots_on_the_cell_grid() {
    let snap = game(2, 2).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 20);
    let fb = view.render(&snap, vp);
    let layout = view.layout(snap.size, vp);

    // 2 boxes * 6 columns + 1, plus 2 columns of padding each side.
    assert_eq!(layout.frame.width, 17);
    assert_eq!((layout.origin_x, layout.origin_y), (13, 4));

    for y in 0..=2 {
        for x in 0..=2 {
            let (px, py) = layout.dot_position(Dot::new(x, y));
            assert_ne!(fb.get(px, py).unwrap().ch, ' ', "dot ({x}, {y})");
        }
    }
    // Cursor starts on (0, 0).
    let cursor = fb.get(13, 4).unwrap();
    assert_eq!(cursor.ch, '●');
    assert_ne!(cursor.style.bg, fb.get(19, 4).unwrap().style.bg);
}

#[test]
fn term_view_distinguishes_open_and_filled_lines() {
    let mut state = game(2, 2);
    state.play_line(Line::horizontal(0, 0)).unwrap();
    let snap = state.snapshot();

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(40, 20));

    // Filled top-left edge, open top-right edge.
    assert_eq!(fb.get(15, 4).unwrap().ch, '━');
    assert!(fb.get(15, 4).unwrap().style.bold);
    assert_eq!(fb.get(21, 4).unwrap().ch, '─');
    // Open vertical edge under dot (0, 0).
    assert_eq!(fb.get(13, 5).unwrap().ch, '│');
}

#[test]
fn term_view_fills_owned_boxes_with_owner_colour() {
    let mut state = game(2, 1);
    for line in BoxPos::new(0, 0).sides() {
        state.play_line(line).unwrap();
    }
    let snap = state.snapshot();
    assert_eq!(snap.owner(BoxPos::new(0, 0)), Some(Player::Computer));

    let view = GameView::default();
    let vp = Viewport::new(40, 20);
    let fb = view.render(&snap, vp);
    let layout = view.layout(snap.size, vp);

    let (px, py) = layout.dot_position(Dot::new(0, 0));
    let inside = fb.get(px + 3, py + 1).unwrap();
    assert_eq!(inside.ch, '█');

    let (qx, qy) = layout.dot_position(Dot::new(1, 0));
    assert_eq!(fb.get(qx + 3, qy + 1).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_scores_and_turn_marker() {
    let mut state = game(2, 1);
    for line in BoxPos::new(0, 0).sides() {
        state.play_line(line).unwrap();
    }
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(60, 20));
    let all = screen_text(&fb);

    assert!(all.contains("Player's score: 0"));
    assert!(all.contains("Computer's score: 1 ◀"));
    assert!(!all.contains("Player's score: 0 ◀"));
}

#[test]
fn term_view_highlights_the_selected_dot() {
    let mut state = game(2, 2);
    state.click_dot(Dot::new(1, 1));
    let view = GameView::default();
    let vp = Viewport::new(40, 20);
    let fb = view.render(&state.snapshot(), vp);

    let (px, py) = view.layout(state.size(), vp).dot_position(Dot::new(1, 1));
    assert_eq!(fb.get(px, py).unwrap().ch, '◉');
}

#[test]
fn term_view_draws_game_over_overlay() {
    let mut state = game(1, 1);
    for line in BoxPos::new(0, 0).sides() {
        state.play_line(line).unwrap();
    }
    let snap = state.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 20);
    let all = screen_text(&view.render(&snap, vp));

    assert!(all.contains("Game Over. Computer wins!"));
    assert!(all.contains("[ Play again ]"));
    assert!(all.contains("[ Quit ]"));

    let overlay = view.overlay_layout("Game Over. Computer wins!", vp);
    assert_eq!(
        view.button_at(&snap, vp, overlay.quit.x + 1, overlay.quit.y),
        Some(MenuChoice::Quit)
    );
    assert_eq!(
        view.button_at(&snap, vp, overlay.play_again.x, overlay.play_again.y),
        Some(MenuChoice::PlayAgain)
    );
}

#[test]
fn term_view_has_no_buttons_while_playing() {
    let snap = game(1, 1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 20);
    let overlay = view.overlay_layout("Game Over. Computer wins!", vp);
    assert_eq!(view.button_at(&snap, vp, overlay.quit.x, overlay.quit.y), None);
    assert!(!screen_text(&view.render(&snap, vp)).contains("Game Over"));
}

#[test]
fn term_view_dot_hit_testing_matches_rendering() {
    let size = BoardSize::new(3, 2).unwrap();
    let view = GameView::new(4, 2);
    let vp = Viewport::new(30, 16);
    let layout = view.layout(size, vp);

    let (px, py) = layout.dot_position(Dot::new(2, 1));
    assert_eq!(view.dot_at(size, vp, px, py), Some(Dot::new(2, 1)));
    assert_eq!(view.dot_at(size, vp, px + 1, py), Some(Dot::new(2, 1)));
    assert_eq!(view.dot_at(size, vp, px, py + 1), None);
    assert_eq!(view.dot_at(size, vp, 0, 0), None);
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = game(2, 2).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(40, 30);
    let layout = view.layout(snap.size, vp);
    assert_eq!(layout.frame.y, 0);

    let fb = view.render(&snap, vp);
    assert_eq!(fb.get(layout.origin_x, layout.origin_y).unwrap().ch, '●');
}

#[test]
fn term_view_render_into_reuses_and_resizes_framebuffer() {
    let snap = game(2, 2).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&snap, Viewport::new(40, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 20)));
}
