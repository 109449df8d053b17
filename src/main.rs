// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use icosoku_search::geometry::constants::{
    DEFAULT_DEFICIT_WEIGHT, DEFAULT_SLOTS_WEIGHT, NVERTICES,
};
use icosoku_search::{PieceCatalog, SearchConfig, SearchOutcome, Solver};

#[derive(Parser)]
#[command(name = "icosoku")]
#[command(about = "Place the twenty IcoSoKu pieces to meet a peg arrangement")]
struct Cli {
    /// Peg values for vertices 0..11, comma separated (default: a random
    /// permutation of 1..12)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pegs: Option<Vec<i32>>,

    /// Seed for the random peg permutation
    #[arg(long)]
    seed: Option<u64>,

    /// Divisor for the deficit term of the face-selection score
    #[arg(long, default_value_t = DEFAULT_DEFICIT_WEIGHT)]
    deficit_weight: f64,

    /// Divisor for the open-slot term of the face-selection score
    #[arg(long, default_value_t = DEFAULT_SLOTS_WEIGHT)]
    slots_weight: f64,

    /// Give up after this many search steps
    #[arg(long)]
    step_limit: Option<u64>,

    /// Print search statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let pegs = match cli.pegs {
        Some(pegs) => pegs,
        None => random_pegs(cli.seed),
    };

    let config = SearchConfig::default()
        .with_weights(cli.deficit_weight, cli.slots_weight)
        .with_step_limit(cli.step_limit)
        .with_verbose(cli.stats);

    if cli.stats {
        let catalog = PieceCatalog::standard();
        eprintln!(
            "[PieceCatalog] {} pieces, {} orientations",
            catalog.len(),
            catalog.orientation_count()
        );
    }

    println!("Solving peg arrangement: {:?}", pegs);

    let mut solver = Solver::with_config(config);
    let outcome = solver
        .solve(&pegs)
        .with_context(|| format!("cannot solve {:?}", pegs))?;

    match outcome {
        SearchOutcome::Solved { solution, steps } => {
            println!("Solution found in {} steps:", steps);
            print!("{}", solution);
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::Exhausted { steps } => {
            println!("No solution available! ({} steps)", steps);
            Ok(ExitCode::FAILURE)
        }
        SearchOutcome::StepLimitReached { steps } => {
            println!("Gave up after {} steps", steps);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// A shuffled copy of 1..=12.
fn random_pegs(seed: Option<u64>) -> Vec<i32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut pegs: Vec<i32> = (1..=NVERTICES as i32).collect();
    pegs.shuffle(&mut rng);
    pegs
}
