//! Game controller: one read → mutate → persist cycle per interaction.

use crate::action::Action;
use crate::state::GameState;
use crate::store::{KeyValueStore, StatePatch, StateStore, StoreError};
use crate::types::Position;
use crate::view::BoardView;
use tracing::{debug, info, instrument, warn};

/// A game backed by a persisted document.
///
/// Every interaction reads the whole document, applies one action and
/// writes the result back before the view is rebuilt from storage.
/// Rejected actions leave the document untouched.
#[derive(Debug)]
pub struct Game<B> {
    store: StateStore<B>,
}

impl<B: KeyValueStore> Game<B> {
    /// Opens a game on `store`.
    ///
    /// A missing document is initialized to the empty default. A document
    /// that does not parse or breaks the step invariants is replaced by
    /// the empty default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails. Backend failures never
    /// reset the stored game.
    #[instrument(skip(store), fields(key = %store.key()))]
    pub fn open(mut store: StateStore<B>) -> Result<Self, StoreError> {
        match store.get() {
            Ok(Some(state)) => {
                info!(steps = state.steps().len(), "Resuming stored game");
            }
            Ok(None) => {
                info!("No stored game, initializing");
                store.set(StatePatch::full(&GameState::default()))?;
            }
            Err(e) if e.is_corrupt() => {
                warn!(error = %e, "Stored game is unusable, starting over");
                Self::reset(&mut store)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Self { store })
    }

    /// Reads the current state from storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the document is missing, unreadable, or
    /// inconsistent.
    #[instrument(skip(self))]
    pub fn state(&self) -> Result<GameState, StoreError> {
        self.store
            .get()?
            .ok_or_else(|| StoreError::corrupt("Game document is missing"))
    }

    /// Builds the render model from the stored state.
    pub fn view(&self) -> Result<BoardView, StoreError> {
        Ok(BoardView::from_state(&self.state()?))
    }

    /// Handles one interaction and returns the refreshed view.
    ///
    /// Invalid actions (occupied cell, move after game over, undo with no
    /// steps, redo with no forward history) are logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only for storage failures.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<BoardView, StoreError> {
        // Restart never reads the document, so it also recovers a corrupt one.
        if action == Action::Restart {
            Self::reset(&mut self.store)?;
            return self.view();
        }

        let mut state = self.state()?;
        match state.apply(action) {
            Ok(()) => {
                let patch = match action {
                    Action::Select(_) => StatePatch::full(&state),
                    _ => StatePatch::steps_only(&state),
                };
                self.store.set(patch)?;
                debug!(steps = state.steps().len(), "Action persisted");
            }
            Err(rejection) => {
                warn!(%action, %rejection, "Action ignored");
            }
        }

        self.view()
    }

    /// Selects a cell for the current player.
    pub fn select(&mut self, pos: Position) -> Result<BoardView, StoreError> {
        self.dispatch(Action::Select(pos))
    }

    /// Takes back the last step.
    pub fn undo(&mut self) -> Result<BoardView, StoreError> {
        self.dispatch(Action::Undo)
    }

    /// Re-applies the next step from history.
    pub fn redo(&mut self) -> Result<BoardView, StoreError> {
        self.dispatch(Action::Redo)
    }

    /// Clears the stored game and starts over.
    pub fn restart(&mut self) -> Result<BoardView, StoreError> {
        self.dispatch(Action::Restart)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &StateStore<B> {
        &self.store
    }

    /// Consumes the game, returning the store.
    pub fn into_store(self) -> StateStore<B> {
        self.store
    }

    fn reset(store: &mut StateStore<B>) -> Result<(), StoreError> {
        store.clear()?;
        store.set(StatePatch::full(&GameState::default()))?;
        info!("Stored game reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DEFAULT_KEY, MemoryStore};
    use crate::types::Player;
    use crate::view::Banner;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Memory backend that can fail its next read or return garbage.
    /// Clones share contents and switches.
    #[derive(Debug, Clone, Default)]
    struct FlakyStore {
        inner: Rc<RefCell<MemoryStore>>,
        fail_next_get: Rc<Cell<bool>>,
        garbled: Rc<Cell<bool>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_next_get.replace(false) {
                return Err(StoreError::new("disk unavailable"));
            }
            if self.garbled.get() {
                return Ok(Some("garbage".to_string()));
            }
            self.inner.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
            self.garbled.set(false);
            self.inner.borrow_mut().set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.garbled.set(false);
            self.inner.borrow_mut().remove(key)
        }
    }

    fn new_game() -> Game<MemoryStore> {
        Game::open(StateStore::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_open_initializes_document() {
        let game = new_game();
        assert!(game.store().exists().unwrap());
        assert_eq!(game.state().unwrap(), GameState::default());
    }

    #[test]
    fn test_open_resets_corrupted_document() {
        let mut backend = MemoryStore::new();
        backend
            .set(DEFAULT_KEY, "not json".to_string())
            .unwrap();
        let game = Game::open(StateStore::new(backend)).unwrap();
        assert_eq!(game.state().unwrap(), GameState::default());
    }

    #[test]
    fn test_open_resets_inconsistent_document() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                DEFAULT_KEY,
                r#"{"steps":[{"idx":0,"player":"zero"}],"history":[]}"#.to_string(),
            )
            .unwrap();
        let game = Game::open(StateStore::new(backend)).unwrap();
        assert_eq!(game.state().unwrap(), GameState::default());
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = new_game();
        game.select(Position::Center).unwrap();
        let view = game.select(Position::Center).unwrap();
        assert_eq!(game.state().unwrap().steps().len(), 1);
        assert_eq!(view.to_move(), Some(Player::Zero));
    }

    #[test]
    fn test_draw_banner() {
        let mut game = new_game();
        let mut view = BoardView::default();
        for idx in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            view = game.select(Position::from_index(idx).unwrap()).unwrap();
        }
        assert_eq!(view.banner(), Some(Banner::Draw));
        assert_eq!(view.highlight(), None);
    }

    #[test]
    fn test_restart_from_any_state() {
        let mut game = new_game();
        game.select(Position::TopLeft).unwrap();
        game.select(Position::Center).unwrap();
        game.undo().unwrap();
        let view = game.restart().unwrap();
        assert_eq!(view, BoardView::default());
        assert_eq!(game.state().unwrap(), GameState::default());
    }

    #[test]
    fn test_open_propagates_backend_failure() {
        let mut store = StateStore::new(FlakyStore::default());
        let mut state = GameState::new();
        state.apply_move(Position::Center).unwrap();
        store.set(StatePatch::full(&state)).unwrap();

        store.backend().fail_next_get.set(true);
        let err = Game::open(store.clone()).unwrap_err();
        assert!(!err.is_corrupt());

        let game = Game::open(store).unwrap();
        assert_eq!(game.state().unwrap(), state);
    }

    #[test]
    fn test_restart_recovers_corrupted_document() {
        let mut game = Game::open(StateStore::new(FlakyStore::default())).unwrap();
        game.select(Position::Center).unwrap();
        game.store().backend().garbled.set(true);
        assert!(game.state().unwrap_err().is_corrupt());
        assert!(game.select(Position::TopLeft).is_err());

        let view = game.restart().unwrap();
        assert_eq!(view, BoardView::default());
        assert_eq!(game.state().unwrap(), GameState::default());
    }
}
