//! Dots and Boxes terminal runner (default binary).
//!
//! Both seats ("Player" and "Computer") are driven by the same mouse and
//! keyboard. Rendering goes through the framebuffer renderer in `term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_dots::config::Config;
use tui_dots::core::{GameSnapshot, GameState};
use tui_dots::input::{handle_key_event, handle_mouse_event, should_quit, PointerEvent};
use tui_dots::logging;
use tui_dots::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let _log_guard = logging::init(&config.log)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(error = %err, "exiting with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::new(config.board);
    let view = GameView::new(config.cell_width, config.cell_height);
    let frame = config.frame_duration();

    let mut snap = GameSnapshot::new(config.board);
    let mut fb = FrameBuffer::new(0, 0);

    info!(
        width = config.board.width(),
        height = config.board.height(),
        "game started"
    );

    loop {
        let started = Instant::now();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame
            .checked_sub(started.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        handle_pointer(&mut game, &view, &snap, viewport, pointer);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if game.take_last_move().is_some_and(|last| last.game_over) {
            game.snapshot_into(&mut snap);
            match serde_json::to_string(&snap) {
                Ok(json) => info!(snapshot = %json, "final board"),
                Err(err) => warn!(error = %err, "could not encode final board"),
            }
        }

        if game.quit_requested() {
            return Ok(());
        }
    }
}

fn handle_pointer(
    game: &mut GameState,
    view: &GameView,
    snap: &GameSnapshot,
    viewport: Viewport,
    pointer: PointerEvent,
) {
    let (column, row) = pointer.position();
    match pointer {
        PointerEvent::Click { .. } if game.game_over() => {
            if let Some(choice) = view.button_at(snap, viewport, column, row) {
                game.choose(choice);
            }
        }
        PointerEvent::Click { .. } => match view.dot_at(game.size(), viewport, column, row) {
            Some(dot) => {
                game.set_cursor(dot);
                game.click_dot(dot);
            }
            None => game.click_empty(),
        },
        PointerEvent::Hover { .. } => {
            if let Some(dot) = view.dot_at(game.size(), viewport, column, row) {
                game.set_cursor(dot);
            }
        }
    }
}
