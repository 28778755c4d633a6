//! Move selection for the automated player.
//!
//! Each [`Difficulty`] maps to one [`Strategy`]. Strategies read a
//! [`Grid`] and simulate on clones of it, so the live [`BoardState`] is never
//! touched.

mod heuristic;
mod random;
pub mod scoring;

pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;

use crate::BoardState;
use crate::grid::Grid;
use crate::types::Player;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How strong the automated player is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Take a win, block a loss, otherwise 2-ply lookahead.
    Medium,
    /// Same as [`Difficulty::Medium`].
    Hard,
}

impl Difficulty {
    /// The strategy that plays this difficulty.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Medium | Difficulty::Hard => &HeuristicStrategy,
        }
    }
}

/// A way of picking a cell for `me`.
pub trait Strategy: Send + Sync {
    /// Picks an empty cell, or `None` when the board has none.
    fn select(&self, grid: &Grid, me: Player, rng: &mut dyn RngCore) -> Option<usize>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Selects a move for `me` at the given difficulty.
///
/// Returns `None` only when no empty cell exists. `state` is not modified.
#[instrument(skip(state, rng), fields(current = %state.current_player()))]
pub fn select_move<R: RngCore>(
    state: &BoardState,
    difficulty: Difficulty,
    me: Player,
    rng: &mut R,
) -> Option<usize> {
    let strategy = difficulty.strategy();
    let choice = strategy.select(state.grid(), me, rng);
    debug!(strategy = strategy.name(), choice = ?choice, "Engine selected move");
    choice
}
