//! Mouse mapping from terminal events to pointer events.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Left button released over a cell.
    Click { column: u16, row: u16 },
    /// Pointer moved (with or without a button held).
    Hover { column: u16, row: u16 },
}

impl PointerEvent {
    pub fn position(&self) -> (u16, u16) {
        match *self {
            PointerEvent::Click { column, row } | PointerEvent::Hover { column, row } => {
                (column, row)
            }
        }
    }
}

/// Map a mouse event to a pointer event.
///
/// Clicks fire on button release, so a press that is dragged off a dot and
/// released elsewhere counts where it was released.
pub fn handle_mouse_event(event: MouseEvent) -> Option<PointerEvent> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Click { column, row }),
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            Some(PointerEvent::Hover { column, row })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_release_is_a_click() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 7)),
            Some(PointerEvent::Click { column: 4, row: 7 })
        );
    }

    #[test]
    fn press_alone_does_nothing() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Right), 4, 7)),
            None
        );
    }

    #[test]
    fn motion_is_a_hover() {
        let ev = handle_mouse_event(mouse(MouseEventKind::Moved, 10, 2)).unwrap();
        assert_eq!(ev, PointerEvent::Hover { column: 10, row: 2 });
        assert_eq!(ev.position(), (10, 2));
    }
}
