// src/bin/social_gen.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generate fake people data into a single JSON file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use social_gen::constants::{DEFAULT_SEED, DEFAULT_SINGLE_RECORDS};
use social_gen::output::{print_metadata, run_single};
use social_gen::{logging, FriendPruning, GeneratorConfig};

#[derive(Parser)]
#[command(name = "social-gen", version, about = "Generate fake people data into one JSON file")]
struct Cli {
    /// Number of records to generate
    #[arg(value_name = "N", default_value_t = DEFAULT_SINGLE_RECORDS)]
    records: usize,

    /// Seed for random number generation
    #[arg(value_name = "SEED", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// File to write the generated data to
    #[arg(value_name = "OUTPUT", default_value = "data.json")]
    output: PathBuf,

    /// Which id is pruned from each freshly drawn friend list
    #[arg(long, value_enum, default_value_t = FriendPruning::SelfId)]
    friend_pruning: FriendPruning,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = GeneratorConfig {
        records: cli.records,
        seed: cli.seed,
        friend_pruning: cli.friend_pruning,
        ..Default::default()
    };

    let meta = run_single(config, &cli.output)
        .with_context(|| format!("failed to generate {}", cli.output.display()))?;
    print_metadata(&meta)?;
    Ok(())
}
