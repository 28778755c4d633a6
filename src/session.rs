//! Game session: turn order, game mode and deferred automated moves.
//!
//! The session owns one [`BoardState`] and is driven by a single event loop.
//! Automated moves are requested through [`MoveTicket`]s stamped with the
//! session epoch; a reset bumps the epoch so tickets issued before it are
//! discarded instead of landing on the fresh board.

use crate::config::{GameConfig, GameMode};
use derive_more::{Display, Error};
use notie_tictactoe::{BoardState, Difficulty, PlaceError, Placement, Player, select_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Permission for the automated player to move, valid for one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveTicket {
    epoch: u64,
}

impl MoveTicket {
    /// Epoch the ticket was issued in.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// What a placement did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// The placement itself, including any eviction.
    pub placement: Placement,
    /// Winner, when the placement ended the game.
    pub winner: Option<Player>,
    /// Completed triple, when the placement ended the game.
    pub winning_line: Option<[usize; 3]>,
    /// Set when the automated player is to move next.
    pub automated_turn: Option<MoveTicket>,
}

/// Reasons a session refuses a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The automated player is to move.
    #[display("It's not your turn ({} is thinking)", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// The cell cannot take a piece.
    #[display("{}", _0)]
    Place(PlaceError),
}

impl From<PlaceError> for SessionError {
    fn from(err: PlaceError) -> Self {
        Self::Place(err)
    }
}

/// One game between two humans or a human and the automated player.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: BoardState,
    config: GameConfig,
    epoch: u64,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with a fresh board.
    #[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        info!("Creating new game session");
        Self {
            state: BoardState::new(),
            config,
            epoch: 0,
            rng,
        }
    }

    /// Current rule state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of resets so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The automated player, if the mode has one. Always O in this design.
    pub fn automated_player(&self) -> Option<Player> {
        match self.config.mode() {
            GameMode::Pvp => None,
            GameMode::Pve => Some(Player::O),
        }
    }

    /// Whether the automated player is to move.
    pub fn is_automated_turn(&self) -> bool {
        !self.state.is_terminal() && self.holds_automated_side()
    }

    /// True when the current player is the automated one, game over or not.
    fn holds_automated_side(&self) -> bool {
        self.automated_player() == Some(self.state.current_player())
    }

    /// Plays the current (human) player's piece at `index`.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] after a win, [`SessionError::NotYourTurn`] while
    /// the automated player is to move, [`SessionError::Place`] for an invalid cell.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn play(&mut self, index: usize) -> Result<TurnReport, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver);
        }
        if self.is_automated_turn() {
            return Err(SessionError::NotYourTurn(self.state.current_player()));
        }
        let placement = self.state.place_piece(index, self.state.current_player())?;
        Ok(self.finish_turn(placement))
    }

    /// Plays the automated player's move for `ticket`.
    ///
    /// Returns `Ok(None)` when the ticket is stale, the game is over, it is not
    /// the automated player's turn, or the engine finds no move.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn play_automated(&mut self, ticket: MoveTicket) -> Result<Option<TurnReport>, SessionError> {
        if ticket.epoch != self.epoch {
            debug!(ticket_epoch = ticket.epoch, "Discarding stale automated move");
            return Ok(None);
        }
        if !self.is_automated_turn() {
            debug!("Automated player is not to move");
            return Ok(None);
        }

        let me = self.state.current_player();
        let Some(index) = select_move(&self.state, *self.config.difficulty(), me, &mut self.rng)
        else {
            warn!(%me, "No move available for automated player");
            return Ok(None);
        };
        let placement = self.state.place_piece(index, me)?;
        Ok(Some(self.finish_turn(placement)))
    }

    fn finish_turn(&mut self, placement: Placement) -> TurnReport {
        if self.state.update_terminal() {
            let winner = self.state.winner();
            info!(winner = ?winner, "Game won");
            return TurnReport {
                placement,
                winner,
                winning_line: self.state.winning_line(),
                automated_turn: None,
            };
        }

        self.state.switch_player();
        let automated_turn = self
            .is_automated_turn()
            .then_some(MoveTicket { epoch: self.epoch });
        TurnReport {
            placement,
            winner: None,
            winning_line: None,
            automated_turn,
        }
    }

    /// Takes back the current player's last move.
    ///
    /// Refused (returns `None`) whenever the current player is the automated
    /// one, including after it has won.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<usize> {
        if self.holds_automated_side() {
            debug!("Undo refused on automated player's side");
            return None;
        }
        let undone = self.state.undo(self.state.current_player());
        self.state.update_terminal();
        undone
    }

    /// Replays the current player's last undone move.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Option<Placement> {
        if self.holds_automated_side() {
            debug!("Redo refused on automated player's side");
            return None;
        }
        let redone = self.state.redo(self.state.current_player());
        self.state.update_terminal();
        redone
    }

    /// Whether the current player may undo.
    pub fn can_undo(&self) -> bool {
        !self.holds_automated_side() && self.state.can_undo(self.state.current_player())
    }

    /// Whether the current player may redo.
    pub fn can_redo(&self) -> bool {
        !self.holds_automated_side() && self.state.can_redo(self.state.current_player())
    }

    /// Starts a new game and invalidates outstanding tickets.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.epoch += 1;
        info!(epoch = self.epoch, "Session reset");
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.config.set_mode(mode);
        self.reset();
    }

    /// Switches difficulty and starts a new game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.set_difficulty(difficulty);
        self.reset();
    }

    /// One-line status for display.
    pub fn status(&self) -> String {
        match self.state.winner() {
            Some(winner) if self.state.is_terminal() => format!("Player {} Wins!", winner),
            _ if self.is_automated_turn() => {
                format!("Player {} is thinking...", self.state.current_player())
            }
            _ => format!("Player {} to move", self.state.current_player()),
        }
    }
}
