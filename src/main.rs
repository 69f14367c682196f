//! Trigrid terminal front-end.
//!
//! A thin presentation layer over the engine: it renders the board as
//! text, forwards input, and paces the computer's deferred move. All
//! game logic lives in the library.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::io::AsyncBufReadExt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use trigrid::cli::{Cli, Command, OFFERED_SIZES};
use trigrid::{BoardSize, GameConfig, GameEngine, GameStatus, Mark, MoveOutcome, PlayMode};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            computer,
            seed,
            config,
        } => run_play(size, computer, seed, config).await,
        Command::Snapshot { size } => run_snapshot(size),
    }
}

/// Runs the interactive terminal loop.
async fn run_play(
    size: Option<usize>,
    computer: bool,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let size = offered_size(size.unwrap_or(*config.board_size()))?;

    let mut engine = match seed.or(*config.seed()) {
        Some(seed) => GameEngine::with_seed(size, seed),
        None => GameEngine::new(size),
    };
    engine.set_computer_delay(Duration::from_millis(*config.computer_delay_ms()));
    if computer {
        engine.toggle_play_mode();
    }

    info!(size = %size, mode = ?engine.mode(), "Starting play session");
    let mut input = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        // Let any scheduled computer move land before rendering.
        while let Some(ticket) = engine.pending_computer_move() {
            tokio::time::sleep(ticket.delay()).await;
            engine.play_deferred(ticket);
        }

        render(&engine);

        if engine.mark_choice_pending() {
            println!("Play as X or O?");
            let Some(line) = input.next_line().await? else {
                break;
            };
            match line.trim().to_lowercase().as_str() {
                "x" => {
                    engine.choose_mark(Mark::X);
                }
                "o" => {
                    engine.choose_mark(Mark::O);
                }
                "q" | "quit" => break,
                other => println!("Unrecognized choice: {other}"),
            }
            continue;
        }

        println!("cell number to move, or: n(ew game), r(eset board), m(ode), s <size>, q(uit)");
        let Some(line) = input.next_line().await? else {
            break;
        };
        let line = line.trim().to_lowercase();
        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => {}
            ["q"] | ["quit"] => break,
            ["n"] => engine.reset_game_and_score(),
            ["r"] => engine.reset_board_only(),
            ["m"] => engine.toggle_play_mode(),
            ["s", text] => match offered_size_text(*text) {
                Ok(new_size) => engine.change_board_size(new_size),
                Err(e) => println!("{e}"),
            },
            [cell] => match cell.parse::<usize>() {
                Ok(cell) => {
                    if let MoveOutcome::Ignored(reason) = engine.apply_move(cell) {
                        debug!(%reason, "Move ignored");
                        println!("({reason})");
                    }
                }
                Err(_) => println!("Unrecognized input: {cell}"),
            },
            other => println!("Unrecognized input: {}", other.join(" ")),
        }
    }

    info!("Play session ended");
    Ok(())
}

/// Prints a JSON snapshot of a fresh engine.
fn run_snapshot(size: usize) -> Result<()> {
    let size = BoardSize::try_from(size)?;
    let engine = GameEngine::new(size);
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}

/// Validates a size against the offered menu, then the engine bound.
fn offered_size(n: usize) -> Result<BoardSize> {
    anyhow::ensure!(
        OFFERED_SIZES.contains(&n),
        "board size {n} is not offered (choose one of {OFFERED_SIZES:?})"
    );
    Ok(BoardSize::try_from(n)?)
}

fn offered_size_text(text: &str) -> Result<BoardSize> {
    let n: usize = text
        .parse()
        .map_err(|_| anyhow::anyhow!("Not a board size: {text}"))?;
    offered_size(n)
}

/// Renders board, score, and status.
fn render(engine: &GameEngine) {
    println!();
    println!("{}", engine.board().display());
    let tallies: Vec<String> = Mark::iter()
        .map(|mark| format!("{mark}: {}", engine.score().get(mark)))
        .collect();
    println!("Score  {}", tallies.join(" | "));
    if engine.mode() == PlayMode::HumanVsComputer {
        if let Some(assignment) = engine.mark_assignment() {
            println!(
                "You are {}, the computer is {}",
                assignment.human, assignment.computer
            );
        }
    }
    match engine.status() {
        GameStatus::InProgress(mark) => {
            if !engine.mark_choice_pending() {
                println!("Next: {mark}");
            }
        }
        GameStatus::Won(mark) => println!("Winner: {mark}"),
        GameStatus::Draw => println!("Draw"),
    }
}
