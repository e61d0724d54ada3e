//! Core domain types for crosses and toes.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    /// Crosses (moves first).
    Cross,
    /// Toes (moves second).
    Zero,
}

impl Player {
    /// Returns the player who places the next mark after `moves_made` moves.
    pub fn for_move(moves_made: usize) -> Self {
        if moves_made % 2 == 0 {
            Player::Cross
        } else {
            Player::Zero
        }
    }

    /// Plural display name used in banners.
    pub fn name(self) -> &'static str {
        match self {
            Player::Cross => "Crosses",
            Player::Zero => "Toes",
        }
    }

    /// Board mark for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Zero => 'O',
        }
    }
}

/// A position on the board (0-8, row-major).
///
/// Serialized as its bare cell index so persisted documents read
/// `{"idx": 4, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its cell index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from a cell index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos as u8
    }
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::from_index(value as usize)
            .ok_or_else(|| format!("cell index {} out of range (must be 0-8)", value))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single recorded move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Step {
    /// The cell the mark was placed in.
    #[serde(rename = "idx")]
    pub position: Position,
    /// The player who placed the mark.
    pub player: Player,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_alternates_by_parity() {
        assert_eq!(Player::for_move(0), Player::Cross);
        assert_eq!(Player::for_move(1), Player::Zero);
        assert_eq!(Player::for_move(8), Player::Cross);
    }

    #[test]
    fn test_position_index_round_trip() {
        for (idx, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), idx);
            assert_eq!(Position::from_index(idx), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_step_wire_format() {
        let step = Step::new(Position::MiddleLeft, Player::Zero);
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"idx":3,"player":"zero"}"#);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let result: Result<Step, _> = serde_json::from_str(r#"{"idx":9,"player":"cross"}"#);
        assert!(result.is_err());
    }
}
