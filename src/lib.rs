// src/lib.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed-reproducible synthetic social-network data generation
//!
//! This library provides:
//! - Unique-name people records with hashtag interaction counts
//! - Random friend graphs with a probabilistic reciprocity pass
//! - Metadata blocks (timestamps, operator, seed, partition bounds)
//! - Single-file and evenly partitioned JSON output
//!
//! Every random draw comes from explicitly seeded Xoshiro256++ streams, so a
//! fixed seed and record count always yield the same people.

// Core modules
pub mod constants;
pub mod error;
pub mod generator;
pub mod logging;
pub mod metadata;
pub mod names;
pub mod output;
pub mod sampler;

// Re-export main API
pub use error::{GenError, Result};
pub use generator::{
    generate_dataset, generate_people_simple, FriendPruning, GeneratorConfig, Interactions,
    PeopleGenerator, Person,
};
pub use metadata::{IndexRange, Metadata};
pub use output::{run_partitioned, run_single, validate_partitions, Dataset};
