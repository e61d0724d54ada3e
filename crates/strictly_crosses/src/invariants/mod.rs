//! First-class invariants for the step store.
//!
//! Invariants are logical properties of a [`GameState`](crate::GameState)
//! that every transition must preserve. They are checked as postconditions
//! in debug builds and always when a persisted document is loaded.

mod alternating_turn;
mod history_prefix;
mod unique_cells;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_prefix::HistoryPrefixInvariant;
pub use unique_cells::UniqueCellsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All step store invariants as a composable set.
pub type StepInvariants = (
    UniqueCellsInvariant,
    AlternatingTurnInvariant,
    HistoryPrefixInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position, Step};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(StepInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = GameState::new();
        state.apply_move(Position::TopLeft).unwrap();
        state.apply_move(Position::Center).unwrap();
        state.apply_move(Position::TopRight).unwrap();
        state.undo().unwrap();
        assert!(StepInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let steps = vec![
            Step::new(Position::Center, Player::Zero),
            Step::new(Position::Center, Player::Zero),
        ];
        let state = GameState::from_parts_unchecked(steps, Vec::new());
        let violations = StepInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
