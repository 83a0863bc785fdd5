//! Terminal 2048 runner (default binary).
//!
//! Blocks on one terminal event at a time and redraws after each handled
//! input; there is no frame timer.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_2048::app::{App, Screen};
use tui_2048::config::Config;
use tui_2048::input::{handle_key_event, is_back_key, should_quit};
use tui_2048::store::{FileStore, KeyValueStore, MemoryStore};
use tui_2048::term::{FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let store: Box<dyn KeyValueStore> = match &config.save_path {
        Some(path) => Box::new(FileStore::open(path)?),
        None => Box::new(MemoryStore::new()),
    };
    let (mut app, outcome) = App::new(&config, store);
    info!("starting with {:?} game", outcome);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(e) = app.save() {
        warn!("could not save on exit: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            app.render_into(Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if app.screen() == Screen::Info && is_back_key(key) {
                    app.back_to_game();
                    dirty = true;
                } else if let Some(action) = handle_key_event(key) {
                    dirty = app.handle_action(action);
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

/// Route `log` output to `TILES_LOG_PATH`; stderr would tear the screen.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
