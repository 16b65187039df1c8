//! Capture-Go command line driver.
//!
//! ## Usage
//!
//! - `capture-go` - Play the demo sequence and dump the board
//! - `capture-go replay 10,10 9,10 ...` - Play moves in order and dump the board
//! - `capture-go selfplay --seed 7` - Play random legal moves until someone captures
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use capture_go::board::{Board, BoardConfig};
use capture_go::color::Color;
use capture_go::constants::{DEFAULT_BOARD_SIZE, MAX_SELFPLAY_MOVES};
use capture_go::point::{Point, parse_point, str_point};

/// Capture-Go: a rules engine where the first capture wins
#[derive(Parser)]
#[command(name = "capture-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid extent; playable rows and columns are 1..SIZE
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Color that moves first
    #[arg(long, global = true, default_value = "black")]
    first: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a short fixed opening and print the board state
    Demo,
    /// Play the given moves ("row,col") alternately and print the board state
    Replay {
        /// Moves in play order
        #[arg(required = true)]
        moves: Vec<String>,
        /// Reject moves outside the legal-move set
        #[arg(long)]
        check: bool,
    },
    /// Play random legal moves until the game is decided
    Selfplay {
        /// RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves
        #[arg(long, default_value_t = MAX_SELFPLAY_MOVES)]
        max_moves: usize,
    },
}

const DEMO_MOVES: [Point; 7] = [
    (10, 10),
    (9, 10),
    (9, 9),
    (8, 9),
    (9, 11),
    (8, 10),
    (8, 11),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BoardConfig {
        size: cli.size,
        initial_color: cli.first,
    };
    let mut board = Board::with_config(config).context("invalid board configuration")?;

    match cli.command {
        Some(Commands::Replay { moves, check }) => replay(&mut board, &moves, check)?,
        Some(Commands::Selfplay { seed, max_moves }) => selfplay(&mut board, seed, max_moves)?,
        Some(Commands::Demo) | None => demo(&mut board)?,
    }

    println!("{board}");
    Ok(())
}

fn demo(board: &mut Board) -> Result<()> {
    println!("Capture-Go demo\n");
    for pt in DEMO_MOVES {
        if !board.is_on_board(pt) {
            bail!("demo needs a board of size {DEFAULT_BOARD_SIZE}, got {}", board.size());
        }
        let color = board.next_to_move();
        board
            .put_stone(pt, false)
            .with_context(|| format!("{color} at {}", str_point(pt)))?;
    }
    println!("legal action: {}\n", board.get_legal_action());
    Ok(())
}

fn replay(board: &mut Board, moves: &[String], check: bool) -> Result<()> {
    for mv in moves {
        let pt = parse_point(mv)?;
        let color = board.next_to_move();
        let result = board
            .put_stone(pt, check)
            .with_context(|| format!("{color} at {mv}"))?;
        if let (true, Some(winner)) = (result.decisive, result.winner) {
            println!("{winner} wins after {color} at {}", str_point(pt));
        }
    }
    Ok(())
}

fn selfplay(board: &mut Board, seed: Option<u64>, max_moves: usize) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    for n in 1..=max_moves {
        let Some(pt) = board.random_move(&mut rng) else {
            println!("no legal move after {} moves", n - 1);
            return Ok(());
        };
        let color = board.next_to_move();
        let result = board.put_stone(pt, false)?;
        tracing::debug!(n, %color, point = %str_point(pt), "move");
        if let Some(winner) = result.winner {
            println!("{winner} wins at move {n} ({color} at {})", str_point(pt));
            return Ok(());
        }
    }
    println!("no winner after {max_moves} moves");
    Ok(())
}
