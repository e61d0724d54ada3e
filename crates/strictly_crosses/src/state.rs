//! The step store: current steps plus the redo history.
//!
//! Only `steps` and `history` are stored. Everything else (winner,
//! winning line, draw) is derived from `steps` on demand.

use crate::action::{Action, MoveError};
use crate::contracts::{ActionContract, Contract};
use crate::invariants::{InvariantSet, StepInvariants};
use crate::outcome::Outcome;
use crate::types::{Player, Position, Step};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// Current (possibly undone) position.
    #[serde(default)]
    steps: Vec<Step>,
    /// Furthest-reached sequence, used for redo.
    #[serde(default)]
    history: Vec<Step>,
}

impl GameState {
    /// Creates an empty game.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(steps: Vec<Step>, history: Vec<Step>) -> Self {
        Self { steps, history }
    }

    /// Checks every step invariant.
    pub fn validate(&self) -> Result<(), MoveError> {
        StepInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }

    /// Returns the current steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the redo history.
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Derives the outcome from the current steps.
    pub fn outcome(&self) -> Outcome {
        Outcome::derive(&self.steps)
    }

    /// Returns the player who moves next.
    pub fn current_player(&self) -> Player {
        Player::for_move(self.steps.len())
    }

    /// Returns true if a step already holds `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.steps.iter().any(|step| step.position == pos)
    }

    /// Undo is available iff there is at least one step.
    pub fn can_undo(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Redo is available iff history reaches further than steps.
    pub fn can_redo(&self) -> bool {
        self.history.len() > self.steps.len()
    }

    /// Applies an action, dispatching to the matching transition.
    #[instrument(skip(self), fields(steps = self.steps.len()))]
    pub fn apply(&mut self, action: Action) -> Result<(), MoveError> {
        match action {
            Action::Select(pos) => self.apply_move(pos).map(|_| ()),
            Action::Undo => self.undo().map(|_| ()),
            Action::Redo => self.redo().map(|_| ()),
            Action::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// History is replaced by the new steps, so any redo branch beyond the
    /// previous position is discarded.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after a win or draw,
    /// [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(steps = self.steps.len()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Step, MoveError> {
        ActionContract::pre(self, &Action::Select(pos))?;

        self.transition(|next| {
            let step = Step::new(pos, next.current_player());
            next.steps.push(step);
            next.history = next.steps.clone();
            debug!(%step, "Step applied");
            Ok(step)
        })
        .inspect(|_| self.log_outcome())
    }

    /// Takes back the last step. History is left untouched.
    ///
    /// # Errors
    ///
    /// [`MoveError::NothingToUndo`] if there are no steps.
    #[instrument(skip(self), fields(steps = self.steps.len()))]
    pub fn undo(&mut self) -> Result<Step, MoveError> {
        ActionContract::pre(self, &Action::Undo)?;

        self.transition(|next| {
            let step = next.steps.pop().ok_or(MoveError::NothingToUndo)?;
            debug!(%step, "Step undone");
            Ok(step)
        })
    }

    /// Re-applies the history entry following the current last step.
    ///
    /// The current step is located in history by its cell. With no steps
    /// the lookup starts before the first entry, so redo resumes from
    /// `history[0]`.
    ///
    /// # Errors
    ///
    /// [`MoveError::NothingToRedo`] if history is not longer than steps,
    /// [`MoveError::HistoryDiverged`] if the current step cannot be found in
    /// history or the next entry is already on the board.
    #[instrument(skip(self), fields(steps = self.steps.len(), history = self.history.len()))]
    pub fn redo(&mut self) -> Result<Step, MoveError> {
        ActionContract::pre(self, &Action::Redo)?;

        self.transition(|next| {
            let next_index = match next.steps.last() {
                None => 0,
                Some(current) => {
                    next.history
                        .iter()
                        .position(|step| step.position == current.position)
                        .ok_or(MoveError::HistoryDiverged)?
                        + 1
                }
            };
            let step = *next
                .history
                .get(next_index)
                .ok_or(MoveError::NothingToRedo)?;
            if next.is_occupied(step.position) {
                return Err(MoveError::HistoryDiverged);
            }
            next.steps.push(step);
            debug!(%step, "Step redone");
            Ok(step)
        })
        .inspect(|_| self.log_outcome())
    }

    /// Resets to the empty default.
    #[instrument(skip(self), fields(steps = self.steps.len()))]
    pub fn restart(&mut self) {
        *self = Self::default();
        info!("Game restarted");
    }

    /// Runs `f` against a copy and commits it only if the step invariants
    /// still hold (checked in debug builds).
    fn transition<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, MoveError>,
    ) -> Result<T, MoveError> {
        let mut next = self.clone();
        let out = f(&mut next)?;

        #[cfg(debug_assertions)]
        ActionContract::post(self, &next)?;

        *self = next;
        Ok(out)
    }

    fn log_outcome(&self) {
        let outcome = self.outcome();
        if let Some(winner) = outcome.winner() {
            info!(%winner, line = ?outcome.winning_line(), "Game won");
        } else if outcome.is_draw() {
            info!("Game drawn");
        }
    }
}
