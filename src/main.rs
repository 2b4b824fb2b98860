//! gochain: an incremental Go board engine.
//!
//! ## Usage
//!
//! - `gochain` - Show a demo
//! - `gochain gtp` - Referee moves over GTP on stdin/stdout
//! - `gochain bench` - Play and unwind random games

use std::io;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gochain::board::Board;
use gochain::constants::{DEFAULT_MAX_HISTORY, DEFAULT_SIZE, MAX_GTP_SIZE, MIN_SIZE};
use gochain::coord::point;
use gochain::gtp::GtpEngine;
use gochain::playout::{PlayoutStats, random_game, unwind};

/// gochain: incremental Go board with ko/suicide rules and undo
#[derive(Parser)]
#[command(name = "gochain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (playable points per side)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Maximum number of moves kept for undo
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_HISTORY)]
    max_history: usize,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "gochain=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a simple demo of the engine
    Demo,
    /// Play random games, undo them, and report throughput
    Bench {
        /// Number of games
        #[arg(long, default_value_t = 100)]
        games: usize,
        /// Move limit per game
        #[arg(long, default_value_t = 400)]
        moves: usize,
        /// Random seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    ensure!(
        (MIN_SIZE..=MAX_GTP_SIZE).contains(&cli.size),
        "board size must be between {MIN_SIZE} and {MAX_GTP_SIZE}, got {}",
        cli.size
    );

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new(cli.size, cli.max_history);
            let stdin = io::stdin();
            engine
                .run(stdin.lock(), io::stdout())
                .context("GTP session failed")?;
        }
        Some(Commands::Bench { games, moves, seed }) => {
            run_bench(cli.size, cli.max_history, games, moves, seed)?;
        }
        Some(Commands::Demo) | None => run_demo(cli.size)?,
    }
    Ok(())
}

/// Logs go to stderr so GTP responses on stdout stay clean.
fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter {default_filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run_demo(size: usize) -> Result<()> {
    ensure!(size >= 3, "the demo needs a board of at least 3x3");
    println!("gochain: incremental Go board\n");

    let mut board = Board::new(size);
    let w = board.width();

    // Black stone in the corner, surrounded by White.
    board.place_black(point(w, 1, 1))?;
    board.place_white(point(w, 1, 2))?;
    board.place_black(point(w, 2, 2))?;
    board.place_white(point(w, 2, 1))?;
    println!("After White captures in the corner:");
    println!("{board}");
    println!(
        "Prisoners: black {} / white {}, ko point: {:?}\n",
        board.prisoners(gochain::Color::Black),
        board.prisoners(gochain::Color::White),
        board.ko_point()
    );

    board.undo()?;
    println!("After undo:");
    println!("{board}");
    Ok(())
}

fn run_bench(size: usize, max_history: usize, games: usize, moves: usize, seed: u64) -> Result<()> {
    let mut board = Board::with_max_history(size, max_history);
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut total = PlayoutStats::default();
    let mut undone = 0;

    let start = Instant::now();
    for _ in 0..games {
        let stats = random_game(&mut board, &mut rng, moves);
        total.moves += stats.moves;
        total.passes += stats.passes;
        total.captures += stats.captures;
        total.ko_points += stats.ko_points;
        undone += unwind(&mut board);
        ensure!(board.depth() == 0, "board not fully unwound");
    }
    let elapsed = start.elapsed();

    info!(?total, undone, ?elapsed, "bench finished");
    println!("games:     {games}");
    println!("moves:     {}", total.moves);
    println!("undone:    {undone}");
    println!("captures:  {}", total.captures);
    println!("ko points: {}", total.ko_points);
    println!("passes:    {}", total.passes);
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        println!("moves/s:   {:.0}", (total.moves + undone) as f64 / secs);
    }
    Ok(())
}
