//! Contract-based validation for state transitions.
//!
//! Preconditions guard each action before it touches the state;
//! postconditions verify the step invariants afterwards.

use crate::GameState;
use crate::action::{Action, MoveError};
use crate::invariants::{InvariantSet, StepInvariants};
use crate::types::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] once the outcome is decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.outcome().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the selected cell must be free.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`MoveError::SquareOccupied`] if a step already holds `pos`.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.is_occupied(pos) {
            Err(MoveError::SquareOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Contract for all four actions.
///
/// Preconditions:
/// - Select: game not over, cell empty
/// - Undo: at least one step
/// - Redo: history longer than steps
///
/// Postconditions:
/// - Cells unique, players alternate, steps a prefix of history
pub struct ActionContract;

impl Contract<GameState, Action> for ActionContract {
    fn pre(state: &GameState, action: &Action) -> Result<(), MoveError> {
        match action {
            Action::Select(pos) => {
                GameNotOver::check(state)?;
                SquareIsEmpty::check(*pos, state)
            }
            Action::Undo if !state.can_undo() => Err(MoveError::NothingToUndo),
            Action::Redo if !state.can_redo() => Err(MoveError::NothingToRedo),
            Action::Undo | Action::Redo | Action::Restart => Ok(()),
        }
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        StepInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
