//! No-tie tic-tac-toe sessions.
//!
//! Wraps the pure rules in [`notie_tictactoe`] with everything a front end
//! needs to run a game.
//!
//! # Architecture
//!
//! - **Config**: mode, difficulty and pacing, loadable from TOML
//! - **Session**: turn order, automated turns and epoch-guarded move tickets
//! - **Scheduler**: delivers move tickets to the event loop after a pause
//! - **Console**: command parsing and text rendering for the terminal
//!
//! # Example
//!
//! ```
//! use notie_games::{GameConfig, GameMode, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default().with_mode(GameMode::Pve).with_seed(1));
//! let report = session.play(0).unwrap();
//! let ticket = report.automated_turn.expect("computer moves next");
//! let reply = session.play_automated(ticket).unwrap().expect("move applied");
//! assert_eq!(reply.placement.position.to_index(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod scheduler;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, GameMode};

// Crate-level exports - Console adapter
pub use console::{ConsoleCommand, HELP, ParseCommandError, describe_placement, describe_turn, render};

// Crate-level exports - Scheduling
pub use scheduler::AutomatedMoveScheduler;

// Crate-level exports - Session management
pub use session::{GameSession, MoveTicket, SessionError, TurnReport};

// Crate-level exports - Game types
pub use notie_tictactoe::{BoardState, Difficulty, Placement, Player, Position};
