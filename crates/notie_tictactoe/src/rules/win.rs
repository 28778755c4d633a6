//! Win detection logic.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning triples: rows, then columns, then diagonals.
///
/// The order is observable: [`find_winning_move`] and [`winning_line`] return
/// the first match in this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed triple, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the player owning a completed triple, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a)?.player())
}

/// Finds a cell that completes a triple for `player`.
///
/// A triple qualifies when exactly two of its cells belong to `player` and the
/// third is empty.
#[instrument(skip(board))]
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.is_owned_by(i, player)).count();
        let mut empty = line.iter().copied().filter(|&i| board.is_empty(i));
        match (owned, empty.next(), empty.next()) {
            (2, Some(cell), None) => Some(cell),
            _ => None,
        }
    })
}
