//! Win, block, then a 2-ply lookahead.

use super::Strategy;
use super::scoring::{LOSS_SCORE, WIN_SCORE, positional_score};
use crate::grid::Grid;
use crate::rules::find_winning_move;
use crate::types::Player;
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, trace};

/// Heuristic opponent.
///
/// In priority order: complete an own triple, block the opponent's triple,
/// then play the candidate whose worst-case reply scores highest. Ties go to
/// the lowest cell index.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, grid, rng))]
    fn select(&self, grid: &Grid, me: Player, rng: &mut dyn RngCore) -> Option<usize> {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        if let Some(cell) = find_winning_move(grid.board(), me) {
            debug!(cell, "Taking win");
            return Some(cell);
        }
        if let Some(cell) = find_winning_move(grid.board(), me.opponent()) {
            debug!(cell, "Blocking opponent");
            return Some(cell);
        }

        let mut best: Option<(usize, i32)> = None;
        for &cell in &empty {
            let score = evaluate(grid, cell, me);
            trace!(cell, score, "Scored candidate");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((cell, score));
            }
        }

        match best {
            Some((cell, score)) => {
                debug!(cell, score, "Lookahead choice");
                Some(cell)
            }
            None => empty.choose(rng).copied(),
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Worst-case score of `me` playing `cell`, over every opponent reply.
///
/// Works on clones of `grid`; eviction applies to both plies. With no reply
/// available the cell is scored on the board before the move.
pub fn evaluate(grid: &Grid, cell: usize, me: Player) -> i32 {
    let them = me.opponent();
    let mut mine = grid.clone();
    mine.place(cell, me);
    if mine.check_win() {
        return WIN_SCORE;
    }

    let mut worst: Option<i32> = None;
    for reply in mine.empty_cells() {
        let mut theirs = mine.clone();
        theirs.place(reply, them);
        if theirs.check_win() {
            return LOSS_SCORE;
        }
        let score = positional_score(theirs.board(), cell, me)
            - positional_score(theirs.board(), reply, me);
        worst = Some(worst.map_or(score, |w| w.min(score)));
    }

    worst.unwrap_or_else(|| positional_score(grid.board(), cell, me))
}
