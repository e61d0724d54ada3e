//! Alternating turn invariant: Crosses, Toes, Crosses, ...

use super::Invariant;
use crate::GameState;
use crate::types::{Player, Step};

/// Invariant: the player of step `i` is Crosses when `i` is even,
/// Toes when odd. Holds for both steps and history.
pub struct AlternatingTurnInvariant;

fn alternates(steps: &[Step]) -> bool {
    steps
        .iter()
        .enumerate()
        .all(|(i, step)| step.player == Player::for_move(i))
}

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        alternates(state.steps()) && alternates(state.history())
    }

    fn description() -> &'static str {
        "Players alternate turns (Crosses, Toes, Crosses, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            state.apply_move(pos).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.current_player(), Player::Zero);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let steps = vec![
            Step::new(Position::TopLeft, Player::Cross),
            Step::new(Position::Center, Player::Cross),
        ];
        let state = GameState::from_parts_unchecked(steps.clone(), steps);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_toes_first_violates() {
        let steps = vec![Step::new(Position::TopLeft, Player::Zero)];
        let state = GameState::from_parts_unchecked(steps.clone(), steps);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
