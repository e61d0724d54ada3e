//! First-class action types for crosses and toes.
//!
//! Actions represent a player's intent and are validated by the state
//! machine before anything changes.

use crate::types::Position;
use serde::{Deserialize, Serialize};

/// One of the four interaction triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the current player's mark in a cell.
    Select(Position),
    /// Take back the last step.
    Undo,
    /// Re-apply the next step from history.
    Redo,
    /// Clear everything and start over.
    Restart,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Select(pos) => write!(f, "select {}", pos.label()),
            Action::Undo => write!(f, "undo"),
            Action::Redo => write!(f, "redo"),
            Action::Restart => write!(f, "restart"),
        }
    }
}

/// Reason an action was rejected by the state machine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied in the current steps.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// There is no step to take back.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// History holds no step beyond the current one.
    #[display("Nothing to redo")]
    NothingToRedo,

    /// The current steps are not a prefix of history.
    #[display("History does not continue from the current step")]
    HistoryDiverged,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
