//! Positional evaluation used by the heuristic lookahead.

use crate::position::Position;
use crate::rules::LINES;
use crate::types::{Board, Player};

/// Score of a candidate that wins on the spot.
pub const WIN_SCORE: i32 = 100;

/// Score of a candidate that lets the opponent win on the reply.
pub const LOSS_SCORE: i32 = -100;

const CENTER_VALUE: i32 = 10;
const CORNER_VALUE: i32 = 5;
const EDGE_VALUE: i32 = 2;
const LIVE_LINE_BONUS: i32 = 3;

/// Static value of `cell` for `me` on `board`.
///
/// Centre 10, corner 5, edge 2, plus 3 per live line through the cell.
pub fn positional_score(board: &Board, cell: usize, me: Player) -> i32 {
    let base = match Position::from_index(cell) {
        Some(pos) if pos.is_center() => CENTER_VALUE,
        Some(pos) if pos.is_corner() => CORNER_VALUE,
        _ => EDGE_VALUE,
    };
    // At most 4 lines pass through a cell.
    base + LIVE_LINE_BONUS * live_lines(board, cell, me) as i32
}

/// Lines through `cell` where `me` has a piece, a cell is still empty and the
/// opponent has nothing.
pub fn live_lines(board: &Board, cell: usize, me: Player) -> usize {
    let them = me.opponent();
    LINES
        .iter()
        .filter(|line| line.contains(&cell))
        .filter(|line| {
            line.iter().any(|&i| board.is_owned_by(i, me))
                && line.iter().any(|&i| board.is_empty(i))
                && !line.iter().any(|&i| board.is_owned_by(i, them))
        })
        .count()
}
