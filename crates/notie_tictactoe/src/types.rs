//! Core domain types for no-tie tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index. Out-of-range indices are ignored.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        if let Some(slot) = self.squares.get_mut(index) {
            *slot = square;
        }
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if the square belongs to `player`.
    pub fn is_owned_by(&self, index: usize, player: Player) -> bool {
        self.get(index) == Some(Square::Occupied(player))
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so the grid doubles as an input legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_numbers_for_empty_squares() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        board.set(4, Square::Occupied(Player::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert!(!board.is_empty(9));
        assert_eq!(board.get(9), None);
    }
}
