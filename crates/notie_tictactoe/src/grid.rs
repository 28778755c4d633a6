//! Board plus per-player piece queues: the part of the state that placement touches.
//!
//! [`Grid`] is cheap to clone, which is how the engine simulates moves without
//! touching the live game.

use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{instrument, trace};

/// Maximum pieces a player may hold before the oldest is evicted.
pub const MAX_PIECES: usize = 3;

/// Cells held by one player, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PieceQueue {
    cells: VecDeque<usize>,
}

impl PieceQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pieces held.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no pieces are held.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when the next push evicts.
    pub fn is_full(&self) -> bool {
        self.cells.len() >= MAX_PIECES
    }

    /// Whether `index` is held.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Iterates cells oldest first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }

    /// Appends `index`, dequeuing and returning the oldest cell if the queue was full.
    fn push(&mut self, index: usize) -> Option<usize> {
        let evicted = if self.is_full() {
            self.cells.pop_front()
        } else {
            None
        };
        self.cells.push_back(index);
        evicted
    }

    /// Removes the most recent occurrence of `index`.
    fn remove(&mut self, index: usize) -> bool {
        match self.cells.iter().rposition(|&c| c == index) {
            Some(at) => {
                self.cells.remove(at);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.cells.clear();
    }
}

/// Board and both piece queues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    board: Board,
    x_pieces: PieceQueue,
    o_pieces: PieceQueue,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece queue of `player`.
    pub fn pieces(&self, player: Player) -> &PieceQueue {
        match player {
            Player::X => &self.x_pieces,
            Player::O => &self.o_pieces,
        }
    }

    fn pieces_mut(&mut self, player: Player) -> &mut PieceQueue {
        match player {
            Player::X => &mut self.x_pieces,
            Player::O => &mut self.o_pieces,
        }
    }

    /// Places `player` at `index` applying the eviction rule; returns the evicted cell.
    ///
    /// The caller checks that `index` is in range and empty.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn place(&mut self, index: usize, player: Player) -> Option<usize> {
        let evicted = self.pieces_mut(player).push(index);
        if let Some(old) = evicted {
            trace!(old, "Evicting oldest piece");
            self.board.set(old, Square::Empty);
        }
        self.board.set(index, Square::Occupied(player));
        evicted
    }

    /// Takes `player`'s piece off `index`. Returns false when `player` does not hold it.
    pub(crate) fn lift(&mut self, index: usize, player: Player) -> bool {
        if !self.board.is_owned_by(index, player) {
            return false;
        }
        self.pieces_mut(player).remove(index);
        self.board.set(index, Square::Empty);
        true
    }

    /// True when any triple is complete.
    pub fn check_win(&self) -> bool {
        rules::winning_line(&self.board).is_some()
    }

    /// Empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.board.empty_cells()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn clear(&mut self) {
        self.board = Board::new();
        self.x_pieces.clear();
        self.o_pieces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_evicts_fourth() {
        let mut queue = PieceQueue::new();
        assert_eq!(queue.push(0), None);
        assert_eq!(queue.push(1), None);
        assert_eq!(queue.push(2), None);
        assert!(queue.is_full());
        assert_eq!(queue.push(3), Some(0));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_grid_place_clears_evicted_cell() {
        let mut grid = Grid::new();
        for i in [0, 1, 2] {
            assert_eq!(grid.place(i, Player::X), None);
        }
        assert_eq!(grid.place(5, Player::X), Some(0));
        assert!(grid.board().is_empty(0));
        assert!(grid.board().is_owned_by(5, Player::X));
        assert_eq!(grid.board().count(Player::X), 3);
    }

    #[test]
    fn test_lift_ignores_foreign_piece() {
        let mut grid = Grid::new();
        grid.place(4, Player::O);
        assert!(!grid.lift(4, Player::X));
        assert!(grid.board().is_owned_by(4, Player::O));
        assert!(grid.lift(4, Player::O));
        assert!(grid.pieces(Player::O).is_empty());
    }
}
