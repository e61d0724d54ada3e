//! Strictly Crosses - crosses and toes with undo, redo and persistence
//!
//! # Architecture
//!
//! - **State**: the step list and redo history, the only stored data
//! - **Rules**: win and draw evaluation, always derived from the steps
//! - **Store**: a single JSON document under one key of any key-value backend
//! - **Game**: one read → mutate → persist cycle per interaction
//! - **View**: the render model handed to frontends
//!
//! # Example
//!
//! ```
//! use strictly_crosses::{Banner, Game, MemoryStore, Player, Position, StateStore};
//!
//! # fn example() -> Result<(), strictly_crosses::StoreError> {
//! let mut game = Game::open(StateStore::new(MemoryStore::new()))?;
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     game.select(pos)?;
//! }
//! assert_eq!(game.view()?.banner(), Some(Banner::Won(Player::Cross)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod control;
mod game;
mod outcome;
mod state;
mod types;
mod view;

pub mod invariants;
pub mod rules;
pub mod store;

pub use action::{Action, MoveError};
pub use contracts::{ActionContract, Contract, GameNotOver, SquareIsEmpty};
pub use control::ControlMap;
pub use game::Game;
pub use outcome::Outcome;
pub use rules::{Orientation, WINNING_LINES, WinningLine, evaluate};
pub use state::GameState;
pub use store::{
    DEFAULT_KEY, FileStore, KeyValueStore, MemoryStore, StatePatch, StateStore, StoreError,
    StoreErrorKind,
};
pub use types::{Player, Position, Step};
pub use view::{Banner, BoardView, Square};
