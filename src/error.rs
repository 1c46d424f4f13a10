// src/error.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for dataset generation and output

use std::path::PathBuf;

use thiserror::Error;

/// Every fatal condition a generation run can hit
#[derive(Debug, Error)]
pub enum GenError {
    /// Output path could not be created or written
    #[error("could not create or access the path {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record count does not split evenly into the requested partitions
    #[error(
        "number of records ({records}) does not evenly divide by number of partitions ({partitions})"
    )]
    UnevenPartitions { records: usize, partitions: usize },

    /// Zero partitions, or zero records: an empty run has no index bounds
    #[error(
        "cannot split {records} records into {partitions} partitions: \
         partitioned output needs at least one record and one partition"
    )]
    InvalidPartitions { records: usize, partitions: usize },

    /// Unique name source failed to produce a novel value
    #[error("could not generate a unique name after {attempts} attempts")]
    NamesExhausted { attempts: usize },

    #[error("invalid sampler input: {0}")]
    InvalidSampler(String),
}

pub type Result<T> = std::result::Result<T, GenError>;

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
