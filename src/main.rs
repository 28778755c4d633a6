//! notie - No-tie tic-tac-toe on the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use notie_games::{
    AutomatedMoveScheduler, ConsoleCommand, GameConfig, GameSession, HELP, TurnReport,
    describe_placement, describe_turn, render,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            difficulty,
            delay_ms,
            seed,
        } => {
            let mut game_config = match config {
                Some(path) => GameConfig::from_file(path)?,
                None => GameConfig::default(),
            };
            if let Some(mode) = mode {
                game_config = game_config.with_mode(mode);
            }
            if let Some(difficulty) = difficulty {
                game_config = game_config.with_difficulty(difficulty);
            }
            if let Some(delay_ms) = delay_ms {
                game_config = game_config.with_automated_delay_ms(delay_ms);
            }
            if let Some(seed) = seed {
                game_config = game_config.with_seed(seed);
            }
            run_console(game_config).await
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Human input and delivered automated-move tickets are handled one at a time
/// on this task, so no two mutations ever interleave.
#[instrument(skip(config))]
async fn run_console(config: GameConfig) -> Result<()> {
    let (mut scheduler, mut tickets) = AutomatedMoveScheduler::new(config.automated_delay());
    let mut session = GameSession::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Starting console game");
    println!("{}\n\n{}", HELP, render(&session));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse::<ConsoleCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                if !handle_command(command, &mut session, &mut scheduler) {
                    break;
                }
            }
            Some(ticket) = tickets.recv() => {
                match session.play_automated(ticket) {
                    Ok(Some(report)) => announce(&report, &mut scheduler),
                    Ok(None) => continue,
                    Err(e) => warn!(error = %e, "Automated move rejected"),
                }
            }
        }
        println!("\n{}", render(&session));
    }

    info!("Console game finished");
    Ok(())
}

/// Applies one console command. Returns false to quit.
fn handle_command(
    command: ConsoleCommand,
    session: &mut GameSession,
    scheduler: &mut AutomatedMoveScheduler,
) -> bool {
    match command {
        ConsoleCommand::Place(position) => match session.play(position.to_index()) {
            Ok(report) => announce(&report, scheduler),
            Err(e) => println!("{}", e),
        },
        ConsoleCommand::Undo => {
            if session.undo().is_none() {
                println!("Nothing to undo");
            }
        }
        ConsoleCommand::Redo => match session.redo() {
            Some(placement) => println!("{}", describe_placement(&placement)),
            None => println!("Nothing to redo"),
        },
        ConsoleCommand::Reset => {
            scheduler.cancel();
            session.reset();
        }
        ConsoleCommand::Mode(mode) => {
            scheduler.cancel();
            session.set_mode(mode);
            println!("Mode: {}", mode);
        }
        ConsoleCommand::Difficulty(difficulty) => {
            scheduler.cancel();
            session.set_difficulty(difficulty);
            println!("Difficulty: {}", difficulty);
        }
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => return false,
    }
    true
}

fn announce(report: &TurnReport, scheduler: &mut AutomatedMoveScheduler) {
    println!("{}", describe_turn(report));
    if let Some(ticket) = report.automated_turn {
        scheduler.schedule(ticket);
    }
}
