//! Exclusive ownership invariant: a cell is never queued for both players.

use super::Invariant;
use crate::BoardState;
use crate::types::Player;

/// Invariant: no index appears in both piece queues.
pub struct ExclusiveOwnershipInvariant;

impl Invariant<BoardState> for ExclusiveOwnershipInvariant {
    fn holds(state: &BoardState) -> bool {
        let o = state.pieces(Player::O);
        state.pieces(Player::X).iter().all(|i| !o.contains(i))
    }

    fn description() -> &'static str {
        "Each cell is claimed by at most one player"
    }
}
