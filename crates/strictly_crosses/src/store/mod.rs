//! Persistence layer for the game document.
//!
//! The game state lives under a single fixed key in any
//! [`KeyValueStore`]. Writes merge top-level fields into the existing
//! document, which is always read and written back whole.

mod backend;
mod error;
mod state_store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::{StoreError, StoreErrorKind};
pub use state_store::{DEFAULT_KEY, StatePatch, StateStore};
