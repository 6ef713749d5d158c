//! Word Mix - CLI
//!
//! Play the word-mix puzzle in the terminal, inspect how a pair is mixed, or
//! run seeded simulations that check the engine's invariants.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordmix::{
    commands::{PlaySession, SimulationConfig, mix_pair, run_play, run_simulation},
    core::{Level, WordPair},
    engine::GameConfig,
    output::{print_mix_report, print_simulation_result},
    wordlists::{
        PAIRS,
        loader::{load_from_file, pairs_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordmix",
    about = "Rebuild two shuffled words from their pieces",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Level: easy (default), medium or hard
    #[arg(short, long, global = true, default_value = "easy")]
    level: Level,

    /// Seed for reproducible shuffles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Pair file ("first second syn|ant" per line) instead of the built-in list
    #[arg(short, long, global = true)]
    pairs: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Mix a pair and show the pieces with their types
    Mix {
        /// First word
        first: String,

        /// Second word
        second: String,

        /// The words are antonyms rather than synonyms
        #[arg(short, long)]
        antonyms: bool,
    },

    /// Play random rounds automatically and check invariants
    Simulate {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Share of moves made through the cursor (0.0 to 1.0)
        #[arg(long, default_value = "0.3")]
        cursor_share: f64,
    },
}

/// Load pairs from `--pairs`, or the built-in list
fn load_pairs(path: Option<&PathBuf>) -> Result<Vec<WordPair>> {
    match path {
        Some(path) => {
            let pairs = load_from_file(path)?;
            info!(count = pairs.len(), path = %path.display(), "loaded pair file");
            Ok(pairs)
        }
        None => Ok(pairs_from_slice(PAIRS)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let pairs = load_pairs(cli.pairs.as_ref())?;
            run_play_command(cli.level, cli.seed, pairs)
        }
        Commands::Mix {
            first,
            second,
            antonyms,
        } => run_mix_command(&first, &second, !antonyms, cli.level, cli.seed),
        Commands::Simulate {
            rounds,
            cursor_share,
        } => {
            let pairs = load_pairs(cli.pairs.as_ref())?;
            run_simulate_command(rounds, cursor_share, cli.level, cli.seed, &pairs)
        }
    }
}

fn run_play_command(level: Level, seed: Option<u64>, pairs: Vec<WordPair>) -> Result<()> {
    let config = GameConfig { level, seed };
    let mut session = PlaySession::new(&config, pairs);
    run_play(&mut session, io::stdin().lock())
}

fn run_mix_command(
    first: &str,
    second: &str,
    are_synonyms: bool,
    level: Level,
    seed: Option<u64>,
) -> Result<()> {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let pair = WordPair::new(first, second, are_synonyms)?;
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let report = mix_pair(pair, level, &mut rng)?;
    print_mix_report(&report);
    Ok(())
}

fn run_simulate_command(
    rounds: usize,
    cursor_share: f64,
    level: Level,
    seed: Option<u64>,
    pairs: &[WordPair],
) -> Result<()> {
    let mut config = SimulationConfig::new(rounds, level, seed.unwrap_or(0));
    config.cursor_share = cursor_share.clamp(0.0, 1.0);

    println!("Simulating {rounds} rounds at {level} level...");
    let result = run_simulation(&config, pairs)?;
    print_simulation_result(&result);

    if !result.violations.is_empty() {
        anyhow::bail!("{} invariant violations", result.violations.len());
    }
    Ok(())
}
