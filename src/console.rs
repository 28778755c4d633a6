//! Line-oriented console adapter: parses commands and renders session state.

use crate::config::GameMode;
use crate::session::{GameSession, TurnReport};
use derive_more::{Display, Error};
use notie_tictactoe::{Difficulty, Placement, Position};
use std::str::FromStr;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a piece for the current player.
    Place(Position),
    /// Take back the current player's last move.
    Undo,
    /// Replay the current player's last undone move.
    Redo,
    /// Start a new game.
    Reset,
    /// Switch mode (resets).
    Mode(GameMode),
    /// Switch difficulty (resets).
    Difficulty(Difficulty),
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Unrecognised console input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown command '{}' (type 'help')", input)]
pub struct ParseCommandError {
    /// The offending input.
    pub input: String,
}

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || ParseCommandError {
            input: input.to_string(),
        };
        let (head, rest) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input, ""),
        };

        match head.to_lowercase().as_str() {
            "undo" | "u" if rest.is_empty() => Ok(Self::Undo),
            "redo" | "r" if rest.is_empty() => Ok(Self::Redo),
            "reset" | "new" if rest.is_empty() => Ok(Self::Reset),
            "help" | "?" if rest.is_empty() => Ok(Self::Help),
            "quit" | "exit" | "q" if rest.is_empty() => Ok(Self::Quit),
            "mode" => rest.parse().map(Self::Mode).map_err(|_| err()),
            "difficulty" | "level" => rest.parse().map(Self::Difficulty).map_err(|_| err()),
            _ => Position::from_label_or_number(input)
                .map(Self::Place)
                .ok_or_else(err),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9 or a cell name (e.g. 'center', 'top-left')  place a piece
  undo | redo                                     take back / replay your last move
  reset                                           start a new game
  mode pvp|pve                                    two players / play the computer
  difficulty easy|medium|hard                     computer strength
  help | quit";

/// Board, status line and undo/redo availability.
pub fn render(session: &GameSession) -> String {
    let mut out = session.state().board().display();
    out.push_str("\n\n");
    out.push_str(&session.status());
    if let Some(line) = session.state().winning_line().filter(|_| session.state().is_terminal()) {
        let names: Vec<_> = line
            .iter()
            .filter_map(|&i| Position::from_index(i))
            .map(|p| p.label())
            .collect();
        out.push_str(&format!(" ({})", names.join(", ")));
    }
    let mut controls = Vec::new();
    if session.can_undo() {
        controls.push("undo");
    }
    if session.can_redo() {
        controls.push("redo");
    }
    if !controls.is_empty() {
        out.push_str(&format!("\n[{}]", controls.join(" | ")));
    }
    out
}

/// Describes a placement; the eviction is reported after the new piece.
pub fn describe_placement(placement: &Placement) -> String {
    let mut out = format!("{} plays {}", placement.player, placement.position);
    if let Some(evicted) = placement.evicted {
        out.push_str(&format!(
            "\n{}'s oldest piece at {} is removed",
            placement.player, evicted
        ));
    }
    out
}

/// Describes a whole turn, including a win.
pub fn describe_turn(report: &TurnReport) -> String {
    let mut out = describe_placement(&report.placement);
    if let Some(winner) = report.winner {
        out.push_str(&format!("\nPlayer {} Wins!", winner));
    }
    out
}
