//! Game rules for crosses and toes.
//!
//! This module contains pure functions for evaluating a step sequence.
//! Rules are separated from the state store so outcomes can always be
//! derived from scratch.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Orientation, WINNING_LINES, WinningLine, evaluate, winning_line_for_last_mover};
