//! Win detection logic for crosses and toes.

use crate::types::{Player, Position, Step};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Orientation tag of a winning line, used by renderers for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Orientation {
    /// A row.
    Horizontal,
    /// A column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalRight,
    /// Top-right to bottom-left.
    DiagonalLeft,
}

/// One of the eight fixed triples of cells that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The three cells of the line.
    pub cells: [Position; 3],
    /// Orientation tag of the line.
    pub orientation: Orientation,
}

impl WinningLine {
    /// Returns true if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns true if every cell of the line is in `occupied`.
    pub fn covered_by(&self, occupied: &[Position]) -> bool {
        self.cells.iter().all(|cell| occupied.contains(cell))
    }
}

const fn line(cells: [Position; 3], orientation: Orientation) -> WinningLine {
    WinningLine { cells, orientation }
}

/// The winning lines in evaluation order: rows, columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    line(
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        Orientation::Horizontal,
    ),
    line(
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        Orientation::Horizontal,
    ),
    line(
        [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
        Orientation::Horizontal,
    ),
    // Columns
    line(
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        Orientation::Vertical,
    ),
    line(
        [Position::TopCenter, Position::Center, Position::BottomCenter],
        Orientation::Vertical,
    ),
    line(
        [Position::TopRight, Position::MiddleRight, Position::BottomRight],
        Orientation::Vertical,
    ),
    // Diagonals
    line(
        [Position::TopLeft, Position::Center, Position::BottomRight],
        Orientation::DiagonalRight,
    ),
    line(
        [Position::TopRight, Position::Center, Position::BottomLeft],
        Orientation::DiagonalLeft,
    ),
];

/// Returns the first winning line fully covered by `occupied`.
///
/// Lines are scanned in [`WINNING_LINES`] order, so when one set of cells
/// covers several lines the earliest declared line wins.
#[instrument]
pub fn evaluate(occupied: &[Position]) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .find(|line| line.covered_by(occupied))
        .copied()
}

/// Evaluates every cell held by the player of the most recent step.
///
/// The whole step list is rescanned each time; nothing is carried over
/// from earlier evaluations.
#[instrument(skip(steps), fields(step_count = steps.len()))]
pub fn winning_line_for_last_mover(steps: &[Step]) -> Option<(Player, WinningLine)> {
    let last = steps.last()?;
    let cells: Vec<Position> = steps
        .iter()
        .filter(|step| step.player == last.player)
        .map(|step| step.position)
        .collect();
    trace!(player = %last.player, ?cells, "Evaluating last mover");
    evaluate(&cells).map(|line| (last.player, line))
}
