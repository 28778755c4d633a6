//! No-tie tic-tac-toe: pure game logic.
//!
//! Each player may hold at most three pieces. Placing a fourth evicts that
//! player's oldest piece, so the board never fills up and the game cannot end
//! in a draw.
//!
//! # Architecture
//!
//! - **BoardState**: grid, piece queues, undo/redo history, turn and terminal flag
//! - **Rules**: win detection and winning-move search over a plain board
//! - **Invariants**: composable checks run after every mutation in debug builds
//! - **Engine**: random and heuristic move selection on cloned grids
//!
//! # Example
//!
//! ```
//! use notie_tictactoe::{BoardState, Difficulty, Player, select_move};
//! use rand::SeedableRng;
//!
//! let mut state = BoardState::new();
//! state.place_piece(0, Player::X).unwrap();
//! state.switch_player();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let reply = select_move(&state, Difficulty::Medium, Player::O, &mut rng);
//! assert_eq!(reply, Some(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_state;
mod engine;
mod error;
mod grid;
mod history;
mod invariants;
mod position;
mod rules;
mod types;

pub use board_state::{BoardState, Placement};
pub use engine::scoring::{LOSS_SCORE, WIN_SCORE, live_lines, positional_score};
pub use engine::{Difficulty, HeuristicStrategy, RandomStrategy, Strategy, select_move};
pub use error::PlaceError;
pub use grid::{Grid, MAX_PIECES, PieceQueue};
pub use invariants::{
    BoardInvariants, ExclusiveOwnershipInvariant, Invariant, InvariantSet, InvariantViolation,
    QueueBoundedInvariant, QueueMatchesBoardInvariant,
};
pub use position::Position;
pub use rules::{LINES, check_winner, find_winning_move, winning_line};
pub use types::{Board, CELL_COUNT, Player, Square};
