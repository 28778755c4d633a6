//! Uniform random play.

use super::Strategy;
use crate::grid::Grid;
use crate::types::Player;
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select(&self, grid: &Grid, _me: Player, rng: &mut dyn RngCore) -> Option<usize> {
        grid.empty_cells().choose(rng).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_only_empty_cells_are_chosen() {
        let mut grid = Grid::new();
        for i in [0, 1, 2] {
            grid.place(i, Player::X);
        }
        for i in [3, 4, 5] {
            grid.place(i, Player::O);
        }
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let cell = RandomStrategy.select(&grid, Player::O, &mut rng).unwrap();
            assert!((6..9).contains(&cell));
        }
    }

    #[test]
    fn test_every_empty_cell_is_reachable() {
        let grid = Grid::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 9];
        for _ in 0..500 {
            if let Some(cell) = RandomStrategy.select(&grid, Player::X, &mut rng) {
                seen[cell] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
