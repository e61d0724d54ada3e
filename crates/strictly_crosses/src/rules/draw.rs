//! Draw detection logic for crosses and toes.

use super::win::winning_line_for_last_mover;
use crate::types::Step;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Checks if every cell has been played.
#[instrument(skip(steps), fields(step_count = steps.len()))]
pub fn is_full(steps: &[Step]) -> bool {
    steps.len() == CELL_COUNT
}

/// A full board with no winner for the last mover is a draw.
#[instrument(skip(steps), fields(step_count = steps.len()))]
pub fn is_draw(steps: &[Step]) -> bool {
    is_full(steps) && winning_line_for_last_mover(steps).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Position};

    fn replay(cells: &[Position]) -> Vec<Step> {
        cells
            .iter()
            .enumerate()
            .map(|(i, &pos)| Step::new(pos, Player::for_move(i)))
            .collect()
    }

    #[test]
    fn test_empty_not_full() {
        assert!(!is_full(&[]));
        assert!(!is_draw(&[]));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let steps = replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert!(is_full(&steps));
        assert!(is_draw(&steps));
    }

    #[test]
    fn test_not_draw_if_last_move_wins() {
        // X O X / O X O / O X X with the last cross completing the diagonal
        let steps = replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert!(is_full(&steps));
        assert!(!is_draw(&steps));
    }
}
