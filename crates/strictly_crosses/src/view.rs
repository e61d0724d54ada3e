//! Render model derived from a [`GameState`].
//!
//! Renderers consume a [`BoardView`] and never look at steps directly.

use crate::rules::WinningLine;
use crate::state::GameState;
use crate::types::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// End-of-game banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    /// A player completed a line.
    Won(Player),
    /// The board filled up with no line.
    Draw,
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Banner::Won(player) => write!(f, "{} won!", player.name()),
            Banner::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Everything a renderer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    squares: [Square; 9],
    undo_enabled: bool,
    redo_enabled: bool,
    banner: Option<Banner>,
    highlight: Option<WinningLine>,
    to_move: Option<Player>,
}

impl BoardView {
    /// Builds the view for `state`.
    #[instrument(skip(state), fields(steps = state.steps().len()))]
    pub fn from_state(state: &GameState) -> Self {
        let mut squares = [Square::Empty; 9];
        for step in state.steps() {
            squares[step.position.to_index()] = Square::Occupied(step.player);
        }

        let outcome = state.outcome();
        let banner = match (outcome.winner(), outcome.is_draw()) {
            (Some(player), _) => Some(Banner::Won(player)),
            (None, true) => Some(Banner::Draw),
            (None, false) => None,
        };

        Self {
            squares,
            undo_enabled: state.can_undo(),
            redo_enabled: state.can_redo(),
            banner,
            highlight: outcome.winning_line(),
            to_move: (!outcome.is_over()).then(|| state.current_player()),
        }
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Undo control is enabled iff there are steps.
    pub fn undo_enabled(&self) -> bool {
        self.undo_enabled
    }

    /// Redo control is enabled iff history is longer than steps.
    pub fn redo_enabled(&self) -> bool {
        self.redo_enabled
    }

    /// Returns the win or draw banner, if the game is over.
    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    /// Returns the winning line to highlight.
    pub fn highlight(&self) -> Option<WinningLine> {
        self.highlight
    }

    /// Returns true if `pos` is part of the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlight.is_some_and(|line| line.contains(pos))
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.to_move
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    Square::Occupied(player) => result.push(player.mark()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::from_state(&GameState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Orientation;

    #[test]
    fn test_empty_view() {
        let view = BoardView::default();
        assert!(view.squares().iter().all(|s| *s == Square::Empty));
        assert!(!view.undo_enabled());
        assert!(!view.redo_enabled());
        assert_eq!(view.banner(), None);
        assert_eq!(view.to_move(), Some(Player::Cross));
    }

    #[test]
    fn test_won_view_highlights_line() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ] {
            state.apply_move(pos).unwrap();
        }
        let view = BoardView::from_state(&state);
        assert_eq!(view.banner(), Some(Banner::Won(Player::Cross)));
        assert_eq!(
            view.highlight().map(|l| l.orientation),
            Some(Orientation::DiagonalRight)
        );
        assert!(view.is_highlighted(Position::Center));
        assert!(!view.is_highlighted(Position::TopCenter));
        assert_eq!(view.to_move(), None);
        assert_eq!(view.banner().unwrap().to_string(), "Crosses won!");
    }

    #[test]
    fn test_redo_enabled_after_undo() {
        let mut state = GameState::new();
        state.apply_move(Position::Center).unwrap();
        state.undo().unwrap();
        let view = BoardView::from_state(&state);
        assert!(!view.undo_enabled());
        assert!(view.redo_enabled());
    }

    #[test]
    fn test_text_board() {
        let mut state = GameState::new();
        state.apply_move(Position::TopLeft).unwrap();
        state.apply_move(Position::Center).unwrap();
        let view = BoardView::from_state(&state);
        assert_eq!(view.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
