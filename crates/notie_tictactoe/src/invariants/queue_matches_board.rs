//! Queue/board agreement invariant.

use super::Invariant;
use crate::BoardState;
use crate::types::Player;
use strum::IntoEnumIterator;

/// Invariant: each queue length equals the owner's occupied-cell count, and
/// every queued cell is occupied by its owner.
pub struct QueueMatchesBoardInvariant;

impl Invariant<BoardState> for QueueMatchesBoardInvariant {
    fn holds(state: &BoardState) -> bool {
        Player::iter().all(|p| {
            let queue = state.pieces(p);
            queue.len() == state.board().count(p)
                && queue.iter().all(|i| state.board().is_owned_by(i, p))
        })
    }

    fn description() -> &'static str {
        "Piece queues match the occupied squares"
    }
}
