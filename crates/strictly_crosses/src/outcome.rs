//! Derived game outcome.
//!
//! The outcome is never stored. It is recomputed from the step list on
//! every query, so it cannot go stale after undo or redo.

use crate::rules::{WinningLine, is_full, winning_line_for_last_mover};
use crate::types::{Player, Step};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome derived from a step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    winner: Option<Player>,
    winning_line: Option<WinningLine>,
    is_draw: bool,
}

impl Outcome {
    /// Derives the outcome of `steps` from scratch.
    #[instrument(skip(steps), fields(step_count = steps.len()))]
    pub fn derive(steps: &[Step]) -> Self {
        match winning_line_for_last_mover(steps) {
            Some((winner, line)) => Self {
                winner: Some(winner),
                winning_line: Some(line),
                is_draw: false,
            },
            None => Self {
                winner: None,
                winning_line: None,
                is_draw: is_full(steps),
            },
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the line that won the game, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Returns true if the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Game over: a winner is determined or the board is full.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.winner, self.is_draw) {
            (Some(player), _) => write!(f, "{} won!", player.name()),
            (None, true) => write!(f, "It's a draw!"),
            (None, false) => write!(f, "In progress"),
        }
    }
}
