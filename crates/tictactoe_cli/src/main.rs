//! Tic-tac-toe - unified CLI
//!
//! Interactive play, board analysis and engine self-play.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe_cli::cli::{Cli, Command};
use tictactoe_cli::render::{HELP, render_event};
use tictactoe_cli::{
    GameConfig, GameMode, HumanPlayer, MinimaxPlayer, Orchestrator, analyze, self_play,
};
use tictactoe_engine::{Board, Scoring, Searcher};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
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
            mode,
            delay_ms,
            depth_aware,
            config,
        } => run_play(&config, mode, delay_ms, depth_aware).await,
        Command::Analyze { board, depth_aware } => run_analyze(&board, depth_aware),
        Command::Selfplay { depth_aware } => run_selfplay(depth_aware),
    }
}

fn scoring_flag(depth_aware: bool) -> Option<Scoring> {
    depth_aware.then_some(Scoring::DepthAware)
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: &Path,
    mode: Option<GameMode>,
    delay_ms: Option<u64>,
    depth_aware: bool,
) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?.with_overrides(
        mode,
        delay_ms,
        scoring_flag(depth_aware),
    );
    info!(?config, "Starting interactive game");

    let human = HumanPlayer::new("Human", BufReader::new(tokio::io::stdin()));
    let computer = MinimaxPlayer::new("AI", Searcher::new(*config.scoring()), config.ai_delay());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(async move {
        let mut stdout = std::io::stdout();
        while let Some(event) = event_rx.recv().await {
            render_event(&event, &mut stdout)?;
        }
        Ok::<_, std::io::Error>(())
    });

    println!("{} ({})", HELP, config.mode().name());
    let mut orchestrator =
        Orchestrator::new(*config.mode(), Box::new(human), Box::new(computer), event_tx);
    let result = orchestrator.run().await;

    // Dropping the orchestrator closes the channel so the renderer drains and exits.
    drop(orchestrator);
    renderer
        .await
        .context("Renderer task panicked")?
        .context("Failed to write to stdout")?;
    result
}

/// Print status and best move for a board
#[instrument]
fn run_analyze(board: &str, depth_aware: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board notation")?;
    let searcher = Searcher::new(scoring_flag(depth_aware).unwrap_or_default());
    let analysis = analyze(&board, &searcher)?;

    println!("{}\n", board);
    println!("{}", analysis);
    Ok(())
}

/// Let the engine play both sides
#[instrument]
fn run_selfplay(depth_aware: bool) -> Result<()> {
    let searcher = Searcher::new(scoring_flag(depth_aware).unwrap_or_default());
    let (board, status) = self_play(&searcher)?;

    println!("{}\n", board);
    println!("{:?}", status);
    Ok(())
}
