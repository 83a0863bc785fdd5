//! Host application state: the game plus the view-level state around it.
//!
//! Switching to the info view parks the game in the store and switching back
//! loads it again, so whatever the store holds is what the player resumes.
//! If parking fails the store is stale, and the game in memory is kept.

use anyhow::Result;
use log::{info, warn};

use crate::config::Config;
use crate::core::GameState;
use crate::store::{load_game, save_game, KeyValueStore, LoadOutcome};
use crate::term::{BoardFrame, FrameBuffer, GameView, InfoView, LabelMode, Viewport};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Board,
    Info,
}

pub struct App {
    state: GameState,
    store: Box<dyn KeyValueStore>,
    screen: Screen,
    /// Whether the game was saved on the way into the info view.
    parked: bool,
    labels: LabelMode,
    rows: usize,
    cols: usize,
    board_view: GameView,
    info_view: InfoView,
}

impl App {
    /// Build the app and resume whatever game `store` holds.
    pub fn new(config: &Config, store: Box<dyn KeyValueStore>) -> (Self, LoadOutcome) {
        let state = match config.seed {
            Some(seed) => GameState::with_seed(config.rows, config.cols, seed),
            None => GameState::new(config.rows, config.cols),
        };
        let mut app = Self {
            state,
            store,
            screen: Screen::Board,
            parked: false,
            labels: LabelMode::default(),
            rows: config.rows,
            cols: config.cols,
            board_view: GameView::default(),
            info_view: InfoView,
        };
        let outcome = app.load();
        (app, outcome)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn labels(&self) -> LabelMode {
        self.labels
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Handle one action; returns true if the screen needs a redraw.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        match (self.screen, action) {
            (Screen::Board, GameAction::ToggleLabels) => {
                self.labels = self.labels.toggled();
                true
            }
            (Screen::Board, GameAction::ToggleInfo) => {
                self.show_info();
                true
            }
            (Screen::Board, _) => self.state.apply_action(action),
            (Screen::Info, GameAction::ToggleInfo) => {
                self.back_to_game();
                true
            }
            (Screen::Info, _) => false,
        }
    }

    /// Save the game and switch to the catalog.
    pub fn show_info(&mut self) {
        self.parked = match self.save() {
            Ok(()) => true,
            Err(e) => {
                warn!("could not save before info view: {:#}", e);
                false
            }
        };
        self.screen = Screen::Info;
    }

    /// Switch back to the board, reloading the game if it was parked.
    pub fn back_to_game(&mut self) {
        if self.screen != Screen::Info {
            return;
        }
        if self.parked {
            self.load();
        } else {
            info!("keeping in-memory game, store was not updated");
        }
        self.parked = false;
        self.screen = Screen::Board;
    }

    pub fn save(&mut self) -> Result<()> {
        save_game(self.store.as_mut(), &self.state)
    }

    fn load(&mut self) -> LoadOutcome {
        load_game(self.store.as_ref(), &mut self.state, self.rows, self.cols)
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Board => {
                let frame = BoardFrame::from_state(&self.state, self.labels);
                self.board_view.render_into(&frame, viewport, fb);
            }
            Screen::Info => self.info_view.render_into(viewport, fb),
        }
    }
}
