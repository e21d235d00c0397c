//! Terminal 2048 runner (default binary).
//!
//! Renders the board with the framebuffer renderer and blocks on key events;
//! the engine only changes in response to input, so there is no tick loop.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::AppConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::load();
    config.init_logging()?;
    info!("starting with seed {:?}", config.seed);

    let mut game = config.new_game();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    info!(
        "exiting after game {}: score={} status={}",
        game.episode_id(),
        game.score(),
        game.status().as_str()
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) => {
                // Holding a key repeats the move, like a browser keydown.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty = game.apply_action(action);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
