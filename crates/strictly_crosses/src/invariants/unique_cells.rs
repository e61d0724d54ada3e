//! Unique cells invariant: no cell is played twice.

use super::Invariant;
use crate::GameState;
use crate::types::Step;

/// Invariant: every cell appears at most once in steps and in history.
///
/// This also bounds both lists to nine entries.
pub struct UniqueCellsInvariant;

fn all_unique(steps: &[Step]) -> bool {
    steps
        .iter()
        .enumerate()
        .all(|(i, step)| steps[..i].iter().all(|prev| prev.position != step.position))
}

impl Invariant<GameState> for UniqueCellsInvariant {
    fn holds(state: &GameState) -> bool {
        all_unique(state.steps()) && all_unique(state.history())
    }

    fn description() -> &'static str {
        "Each cell is played at most once"
    }
}
