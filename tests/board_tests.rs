//! Board tests: line tables, adjacency and box completion

use tui_dots::core::{Board, MoveError};
use tui_dots::types::{BoardSize, BoxPos, Line, Player};

fn board(w: u8, h: u8) -> Board {
    Board::new(BoardSize::new(w, h).unwrap())
}

#[test]
fn test_board_new_empty() {
    let board = board(8, 7);
    assert_eq!(board.width(), 8);
    assert_eq!(board.height(), 7);

    // 8*8 horizontal + 9*7 vertical
    assert_eq!(board.line_count(), 64 + 63);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.open_lines().count(), board.line_count());
    assert_eq!(board.owned_count(), 0);
    assert!(!board.is_full());
}

#[test]
fn test_fill_rejects_duplicates_and_off_board_lines() {
    let mut board = board(2, 2);
    let line = Line::vertical(2, 1);

    assert_eq!(board.fill(line), Ok(()));
    assert!(board.is_filled(line));
    assert_eq!(board.fill(line), Err(MoveError::AlreadyFilled(line)));

    // Right edge is x == width for vertical lines, but horizontal lines stop at width - 1.
    let off = Line::horizontal(2, 0);
    assert_eq!(board.fill(off), Err(MoveError::OutOfBounds(off)));
    assert!(!board.is_filled(off));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_adjacent_boxes_at_edges_and_interior() {
    let board = board(3, 2);

    // Top edge: only the box below.
    let top: Vec<_> = board.adjacent_boxes(Line::horizontal(1, 0)).into_iter().collect();
    assert_eq!(top, vec![BoxPos::new(1, 0)]);

    // Bottom edge: only the box above.
    let bottom: Vec<_> = board.adjacent_boxes(Line::horizontal(1, 2)).into_iter().collect();
    assert_eq!(bottom, vec![BoxPos::new(1, 1)]);

    // Interior vertical: left and right.
    let inner: Vec<_> = board.adjacent_boxes(Line::vertical(1, 1)).into_iter().collect();
    assert_eq!(inner, vec![BoxPos::new(0, 1), BoxPos::new(1, 1)]);

    // Off-board lines border nothing.
    assert!(board.adjacent_boxes(Line::vertical(4, 0)).is_empty());
}

#[test]
fn test_claim_completed_only_on_fourth_side() {
    let mut board = board(2, 1);
    let sides = BoxPos::new(0, 0).sides();

    for line in &sides[..3] {
        board.fill(*line).unwrap();
        assert!(board.claim_completed(*line, Player::Human).is_empty());
    }
    assert_eq!(board.sides_filled(BoxPos::new(0, 0)), 3);

    board.fill(sides[3]).unwrap();
    let claimed = board.claim_completed(sides[3], Player::Computer);
    assert_eq!(claimed.as_slice(), &[BoxPos::new(0, 0)]);
    assert_eq!(board.owner(BoxPos::new(0, 0)), Some(Player::Computer));
    assert_eq!(board.owner(BoxPos::new(1, 0)), None);
}

#[test]
fn test_shared_side_claims_two_boxes() {
    let mut board = board(2, 1);
    let shared = Line::vertical(1, 0);

    for line in BoxPos::new(0, 0)
        .sides()
        .into_iter()
        .chain(BoxPos::new(1, 0).sides())
        .filter(|l| *l != shared)
    {
        board.fill(line).unwrap();
    }
    assert_eq!(board.owned_count(), 0);

    board.fill(shared).unwrap();
    let claimed = board.claim_completed(shared, Player::Human);
    assert_eq!(claimed.len(), 2);
    assert_eq!(board.count_owned(Player::Human), 2);
    assert!(board.is_full());
}

#[test]
fn test_claimed_box_is_not_reclaimed() {
    let mut board = board(1, 1);
    for line in BoxPos::new(0, 0).sides() {
        board.fill(line).unwrap();
    }
    let last = BoxPos::new(0, 0).sides()[3];
    assert_eq!(board.claim_completed(last, Player::Human).len(), 1);
    assert!(board.claim_completed(last, Player::Computer).is_empty());
    assert_eq!(board.owner(BoxPos::new(0, 0)), Some(Player::Human));
}

#[test]
fn test_clear_resets_everything() {
    let mut board = board(1, 1);
    for line in BoxPos::new(0, 0).sides() {
        board.fill(line).unwrap();
        board.claim_completed(line, Player::Human);
    }
    board.clear();
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.owned_count(), 0);
}
