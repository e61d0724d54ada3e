//! History prefix invariant: steps never diverge from history.

use super::Invariant;
use crate::GameState;

/// Invariant: steps are a prefix of (or equal to) history.
pub struct HistoryPrefixInvariant;

impl Invariant<GameState> for HistoryPrefixInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().starts_with(state.steps())
    }

    fn description() -> &'static str {
        "Steps are a prefix of history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Step};

    #[test]
    fn test_undo_keeps_prefix() {
        let mut state = GameState::new();
        state.apply_move(Position::Center).unwrap();
        state.apply_move(Position::TopLeft).unwrap();
        state.undo().unwrap();
        assert!(HistoryPrefixInvariant::holds(&state));
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_diverged_branch_violates() {
        let steps = vec![Step::new(Position::Center, Player::Cross)];
        let history = vec![Step::new(Position::TopLeft, Player::Cross)];
        let state = GameState::from_parts_unchecked(steps, history);
        assert!(!HistoryPrefixInvariant::holds(&state));
    }

    #[test]
    fn test_steps_longer_than_history_violates() {
        let steps = vec![Step::new(Position::Center, Player::Cross)];
        let state = GameState::from_parts_unchecked(steps, Vec::new());
        assert!(!HistoryPrefixInvariant::holds(&state));
    }
}
