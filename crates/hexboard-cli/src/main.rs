//! Command-line board generator.
//!
//! This is the reference consumer of `hexboard-core`: it maps a board-size
//! selection to a generated layout and renders the result, either as a text
//! drawing of the hex rows or as JSON for other tooling to consume.

use clap::Parser;
use hexboard_core::{generate, Board, BoardSize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

/// Generate a random settlement-game board layout
#[derive(Debug, Parser)]
#[command(name = "hexboard", version, about)]
struct Cli {
    /// Board size: 'standard' (19 tiles) or 'expanded' (30 tiles)
    #[arg(long, short, default_value = "standard")]
    size: BoardSize,

    /// Seed for reproducible layouts; omit for a fresh random board
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board as JSON instead of a text drawing
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!(size = %cli.size, seed = ?cli.seed, "generating board");

    let board: Board = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate(cli.size, &mut rng)?
        }
        None => Board::generate(cli.size)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{}", render::render_text(&board));
    }

    Ok(())
}
