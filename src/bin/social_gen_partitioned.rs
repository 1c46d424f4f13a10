// src/bin/social_gen_partitioned.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generate fake people data split evenly across numbered JSON files

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use social_gen::constants::{DEFAULT_PARTITIONED_RECORDS, DEFAULT_PARTITIONS, DEFAULT_SEED};
use social_gen::output::{print_metadata, run_partitioned};
use social_gen::{logging, validate_partitions, FriendPruning, GenError, GeneratorConfig};

#[derive(Parser)]
#[command(
    name = "social-gen-partitioned",
    version,
    about = "Generate fake people data into evenly sized partition files"
)]
struct Cli {
    /// Number of records to generate
    #[arg(value_name = "N", default_value_t = DEFAULT_PARTITIONED_RECORDS)]
    records: usize,

    /// Seed for random number generation
    #[arg(value_name = "SEED", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of partitions to write the data out into
    #[arg(value_name = "PARTITIONS", default_value_t = DEFAULT_PARTITIONS)]
    partitions: usize,

    /// Directory to write the partitions of generated data into
    #[arg(value_name = "OUTPUT", default_value = "output")]
    output: PathBuf,

    /// Which id is pruned from each freshly drawn friend list
    #[arg(long, value_enum, default_value_t = FriendPruning::SelfId)]
    friend_pruning: FriendPruning,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = validate_partitions(cli.records, cli.partitions) {
        if matches!(e, GenError::UnevenPartitions { .. }) {
            eprintln!(
                "Please specify a number of records and partitions that will be evenly distributed"
            );
            eprintln!("e.g. 100 into 10 partitions");
        }
        return Err(e.into());
    }

    let config = GeneratorConfig {
        records: cli.records,
        seed: cli.seed,
        friend_pruning: cli.friend_pruning,
        ..Default::default()
    };

    let written = run_partitioned(config, cli.partitions, &cli.output, |_, meta| {
        print_metadata(meta)
    })
    .with_context(|| format!("failed to generate partitions in {}", cli.output.display()))?;

    tracing::info!("{} partition files written", written.len());
    Ok(())
}
