//! Game rules for no-tie tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from the
//! mutable state so the engine can evaluate simulated boards with the same code.

pub mod win;

pub use win::{LINES, check_winner, find_winning_move, winning_line};
