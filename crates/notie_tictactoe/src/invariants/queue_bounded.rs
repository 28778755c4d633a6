//! Queue bound invariant: no player ever holds more than three pieces.

use super::Invariant;
use crate::BoardState;
use crate::grid::MAX_PIECES;
use crate::types::Player;
use strum::IntoEnumIterator;

/// Invariant: each piece queue holds at most [`MAX_PIECES`] cells.
pub struct QueueBoundedInvariant;

impl Invariant<BoardState> for QueueBoundedInvariant {
    fn holds(state: &BoardState) -> bool {
        Player::iter().all(|p| state.pieces(p).len() <= MAX_PIECES)
    }

    fn description() -> &'static str {
        "No player holds more than three pieces"
    }
}
