//! Per-player undo/redo stacks.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Undo and redo stacks for one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MoveStacks {
    done: Vec<usize>,
    undone: Vec<usize>,
}

impl MoveStacks {
    /// Number of moves that can be undone.
    pub fn undo_len(&self) -> usize {
        self.done.len()
    }

    /// Number of moves that can be redone.
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }
}

/// Undo/redo history for both players, independent of the piece queues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    x: MoveStacks,
    o: MoveStacks,
}

impl MoveHistory {
    /// Returns the stacks of `player`.
    pub fn of(&self, player: Player) -> &MoveStacks {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    fn of_mut(&mut self, player: Player) -> &mut MoveStacks {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Records a fresh placement, dropping the player's redo stack.
    pub(crate) fn record(&mut self, player: Player, index: usize) {
        let stacks = self.of_mut(player);
        stacks.done.push(index);
        stacks.undone.clear();
    }

    /// Moves the last placement onto the redo stack.
    pub(crate) fn undo(&mut self, player: Player) -> Option<usize> {
        let stacks = self.of_mut(player);
        let index = stacks.done.pop()?;
        stacks.undone.push(index);
        Some(index)
    }

    /// Peeks at the move a redo would replay.
    pub(crate) fn next_redo(&self, player: Player) -> Option<usize> {
        self.of(player).undone.last().copied()
    }

    /// Moves the last undone placement back onto the move stack.
    pub(crate) fn redo(&mut self, player: Player) -> Option<usize> {
        let stacks = self.of_mut(player);
        let index = stacks.undone.pop()?;
        stacks.done.push(index);
        Some(index)
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
