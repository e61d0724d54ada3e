//! Application state and key handling.

use crate::input::move_cursor;
use crossterm::event::KeyCode;
use strictly_crosses::{
    Action, BoardView, ControlMap, Game, KeyValueStore, Position, StoreError,
};
use tracing::{debug, instrument};

/// Main application state.
pub struct App<B> {
    game: Game<B>,
    controls: ControlMap<KeyCode>,
    view: BoardView,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl<B: KeyValueStore> App<B> {
    /// Creates the application around an opened game.
    pub fn new(game: Game<B>, controls: ControlMap<KeyCode>) -> Result<Self, StoreError> {
        let view = game.view()?;
        Ok(Self {
            game,
            controls,
            view,
            cursor: Position::Center,
            status_message: "press 1-9 to play".to_string(),
            should_quit: false,
        })
    }

    /// Gets the current render model.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), StoreError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.perform(Action::Select(self.cursor)),
            other => match self.controls.resolve(&other) {
                Some(action) => self.perform(action),
                None => {
                    debug!(?other, "Unbound key");
                    Ok(())
                }
            },
        }
    }

    fn perform(&mut self, action: Action) -> Result<(), StoreError> {
        let before = self.view.clone();
        self.view = self.game.dispatch(action)?;
        if let Action::Select(pos) = action {
            self.cursor = pos;
        }
        self.status_message = if self.view == before && action != Action::Restart {
            format!("Can't {} now", action)
        } else {
            match action {
                Action::Select(pos) => format!("Played {}", pos.label()),
                Action::Undo => "Step undone".to_string(),
                Action::Redo => "Step redone".to_string(),
                Action::Restart => "New game".to_string(),
            }
        };
        Ok(())
    }
}
