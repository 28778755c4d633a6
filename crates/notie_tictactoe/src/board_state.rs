//! The game-rule state machine.
//!
//! [`BoardState`] owns the grid, both piece queues, the undo/redo history, the
//! current player and the terminal flag. Every mutation either completes or
//! leaves the state untouched.

use crate::error::PlaceError;
use crate::grid::{Grid, PieceQueue};
use crate::history::MoveHistory;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a successful placement (or redo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Player who moved.
    pub player: Player,
    /// Cell that received the piece.
    pub position: Position,
    /// Cell cleared by the eviction rule.
    ///
    /// Presentation layers should show the new piece first and clear this cell after.
    pub evicted: Option<Position>,
}

/// Complete rule state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    history: MoveHistory,
    current_player: Player,
    terminal: bool,
}

impl BoardState {
    /// Creates an empty game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            history: MoveHistory::default(),
            current_player: Player::X,
            terminal: false,
        }
    }

    /// Places `player`'s piece at `index`.
    ///
    /// If the player already holds three pieces, the oldest is evicted and
    /// reported in the returned [`Placement`]. The move is recorded in the
    /// player's history and their redo stack is cleared.
    ///
    /// # Errors
    ///
    /// [`PlaceError::OutOfRange`] or [`PlaceError::Occupied`]; the state is unchanged.
    #[instrument(skip(self))]
    pub fn place_piece(&mut self, index: usize, player: Player) -> Result<Placement, PlaceError> {
        let position = Position::from_index(index).ok_or(PlaceError::OutOfRange(index))?;
        if !self.grid.board().is_empty(index) {
            debug!(%position, "Rejected placement on occupied square");
            return Err(PlaceError::Occupied(position));
        }

        let evicted = self.grid.place(index, player).and_then(Position::from_index);
        self.history.record(player, index);
        info!(%player, %position, evicted = ?evicted, "Placed piece");

        self.debug_check();
        Ok(Placement {
            player,
            position,
            evicted,
        })
    }

    /// True iff any triple is held entirely by one player.
    pub fn check_win(&self) -> bool {
        self.grid.check_win()
    }

    /// Owner of the completed triple, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.grid.board())
    }

    /// The completed triple, if any (first in rows, columns, diagonals order).
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(self.grid.board())
    }

    /// A cell completing a triple for `player`, first match in triple order.
    pub fn find_winning_move(&self, player: Player) -> Option<usize> {
        rules::find_winning_move(self.grid.board(), player)
    }

    /// Takes back `player`'s last placement.
    ///
    /// Returns the undone index, or `None` when there is nothing to undo. A piece
    /// evicted by the undone placement is not restored. If the piece is no longer
    /// on the board (it was evicted earlier, or the opponent took the cell since),
    /// only the history moves.
    #[instrument(skip(self))]
    pub fn undo(&mut self, player: Player) -> Option<usize> {
        let index = self.history.undo(player)?;
        if self.grid.lift(index, player) {
            info!(%player, index, "Undid move");
        } else {
            debug!(%player, index, "Undid move whose piece had already left the board");
        }
        self.debug_check();
        Some(index)
    }

    /// Replays `player`'s last undone placement.
    ///
    /// The piece goes back through the eviction rule. Returns `None` when the
    /// redo stack is empty or the target cell has been taken in the meantime;
    /// in both cases nothing changes.
    #[instrument(skip(self))]
    pub fn redo(&mut self, player: Player) -> Option<Placement> {
        let index = self.history.next_redo(player)?;
        let position = Position::from_index(index)?;
        if !self.grid.board().is_empty(index) {
            debug!(%player, %position, "Redo target is occupied");
            return None;
        }

        self.history.redo(player);
        let evicted = self.grid.place(index, player).and_then(Position::from_index);
        info!(%player, %position, evicted = ?evicted, "Redid move");

        self.debug_check();
        Some(Placement {
            player,
            position,
            evicted,
        })
    }

    /// Clears board, queues and history; X to move; not terminal.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid.clear();
        self.history.clear();
        self.current_player = Player::X;
        self.terminal = false;
        debug!("Board reset");
    }

    /// Hands the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Re-evaluates the terminal flag from the board and returns it.
    pub fn update_terminal(&mut self) -> bool {
        self.terminal = self.check_win();
        self.terminal
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.grid.board()
    }

    /// Returns the board with both piece queues.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Square at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Square> {
        self.grid.board().get(index)
    }

    /// Pieces held by `player`, oldest first.
    pub fn pieces(&self, player: Player) -> &PieceQueue {
        self.grid.pieces(player)
    }

    /// Empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.grid.empty_cells()
    }

    /// Number of moves `player` can undo.
    pub fn undo_len(&self, player: Player) -> usize {
        self.history.of(player).undo_len()
    }

    /// Number of moves `player` can redo.
    pub fn redo_len(&self, player: Player) -> usize {
        self.history.of(player).redo_len()
    }

    /// Whether `player` has a move to undo.
    pub fn can_undo(&self, player: Player) -> bool {
        self.undo_len(player) > 0
    }

    /// Whether `player` has a move to redo.
    pub fn can_redo(&self, player: Player) -> bool {
        self.redo_len(player) > 0
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    fn debug_check(&self) {
        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "Board invariants violated: {:?}",
            BoardInvariants::check_all(self)
        );
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut BoardState, moves: &[(usize, Player)]) {
        for &(i, p) in moves {
            state.place_piece(i, p).expect("legal move");
        }
    }

    #[test]
    fn test_out_of_range_rejected_without_mutation() {
        let mut state = BoardState::new();
        let before = state.clone();
        assert_eq!(state.place_piece(9, Player::X), Err(PlaceError::OutOfRange(9)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_occupied_rejected_without_mutation() {
        let mut state = BoardState::new();
        play(&mut state, &[(4, Player::X)]);
        let before = state.clone();
        assert_eq!(
            state.place_piece(4, Player::O),
            Err(PlaceError::Occupied(Position::Center))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_fourth_piece_evicts_oldest() {
        let mut state = BoardState::new();
        play(&mut state, &[(0, Player::X), (1, Player::X), (5, Player::X)]);
        let placement = state.place_piece(8, Player::X).unwrap();
        assert_eq!(placement.evicted, Some(Position::TopLeft));
        assert_eq!(state.cell(0), Some(Square::Empty));
        assert_eq!(state.pieces(Player::X).iter().collect::<Vec<_>>(), vec![1, 5, 8]);
    }

    #[test]
    fn test_eviction_can_break_a_line() {
        let mut state = BoardState::new();
        play(&mut state, &[(0, Player::X), (1, Player::X), (5, Player::X)]);
        // 2 would complete the top row, but placing it evicts 0 first.
        state.place_piece(2, Player::X).unwrap();
        assert!(!state.check_win());
    }

    #[test]
    fn test_undo_removes_from_queue() {
        let mut state = BoardState::new();
        play(&mut state, &[(0, Player::X), (1, Player::X)]);
        assert_eq!(state.undo(Player::X), Some(1));
        assert_eq!(state.pieces(Player::X).len(), 1);
        assert_eq!(state.cell(1), Some(Square::Empty));
        assert_eq!(state.redo_len(Player::X), 1);
    }

    #[test]
    fn test_undo_leaves_opponent_piece_alone() {
        let mut state = BoardState::new();
        play(
            &mut state,
            &[(0, Player::X), (1, Player::X), (2, Player::X), (3, Player::X)],
        );
        // 0 was evicted; O takes it.
        play(&mut state, &[(0, Player::O)]);
        for _ in 0..4 {
            state.undo(Player::X);
        }
        assert_eq!(state.cell(0), Some(Square::Occupied(Player::O)));
        assert!(state.pieces(Player::X).is_empty());
    }

    #[test]
    fn test_redo_onto_taken_cell_is_noop() {
        let mut state = BoardState::new();
        play(&mut state, &[(4, Player::X)]);
        state.undo(Player::X);
        play(&mut state, &[(4, Player::O)]);
        let before = state.clone();
        assert_eq!(state.redo(Player::X), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = BoardState::new();
        play(&mut state, &[(0, Player::X), (4, Player::O)]);
        state.switch_player();
        state.reset();
        assert_eq!(state, BoardState::new());
    }

    #[test]
    fn test_update_terminal_tracks_win() {
        let mut state = BoardState::new();
        play(&mut state, &[(6, Player::O), (7, Player::O), (8, Player::O)]);
        assert!(state.update_terminal());
        assert_eq!(state.winner(), Some(Player::O));
        assert_eq!(state.winning_line(), Some([6, 7, 8]));
        state.undo(Player::O);
        assert!(!state.update_terminal());
    }
}
