// src/output.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON output: single-file and partitioned datasets
//!
//! Writes are not transactional. A partitioned run that fails partway leaves
//! the partitions written so far on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::generator::{generate_dataset, GeneratorConfig, Person};
use crate::metadata::{IndexRange, Metadata};

/// One output document: metadata plus a slice of people
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub meta_data: Metadata,
    pub data: Vec<Person>,
}

#[derive(Serialize)]
struct DatasetView<'a> {
    meta_data: &'a Metadata,
    data: &'a [Person],
}

/// Check that `records` splits evenly into `partitions`, returning the
/// partition size
pub fn validate_partitions(records: usize, partitions: usize) -> Result<usize> {
    if partitions == 0 || records == 0 {
        return Err(GenError::InvalidPartitions {
            records,
            partitions,
        });
    }
    if records % partitions != 0 {
        return Err(GenError::UnevenPartitions {
            records,
            partitions,
        });
    }
    Ok(records / partitions)
}

/// Contiguous, equal-size index ranges covering `0..records`
pub fn partition_bounds(records: usize, partitions: usize) -> Result<Vec<Range<usize>>> {
    let per_partition = validate_partitions(records, partitions)?;
    Ok((0..partitions)
        .map(|i| {
            let start = i * per_partition;
            start..start + per_partition
        })
        .collect())
}

/// Generate and write everything to one file
pub fn run_single(config: GeneratorConfig, path: &Path) -> Result<Metadata> {
    let seed = config.seed;
    let people = generate_dataset(config)?;
    write_single(&people, seed, path)
}

/// Validate, generate, and write one file per partition into `dir`
///
/// `on_written` runs after each partition file is on disk.
pub fn run_partitioned<F>(
    config: GeneratorConfig,
    partitions: usize,
    dir: &Path,
    on_written: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path, &Metadata) -> Result<()>,
{
    validate_partitions(config.records, partitions)?;
    let seed = config.seed;
    let people = generate_dataset(config)?;
    write_partitioned(&people, seed, partitions, dir, on_written)
}

/// Write all people and one metadata block to `path`
pub fn write_single(people: &[Person], seed: u64, path: &Path) -> Result<Metadata> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }

    let meta_data = Metadata::new(people.len(), seed, None);
    write_json(
        path,
        &DatasetView {
            meta_data: &meta_data,
            data: people,
        },
    )?;

    tracing::info!("Wrote {} records to {}", people.len(), path.display());
    Ok(meta_data)
}

/// Split people into equal partitions written as `<dir>/<k>.json`, k from 1
pub fn write_partitioned<F>(
    people: &[Person],
    seed: u64,
    partitions: usize,
    dir: &Path,
    mut on_written: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path, &Metadata) -> Result<()>,
{
    let bounds = partition_bounds(people.len(), partitions)?;
    create_dir(dir)?;

    let mut written = Vec::with_capacity(partitions);
    for (i, range) in bounds.into_iter().enumerate() {
        let path = dir.join(format!("{}.json", i + 1));
        let slice = &people[range.clone()];
        let meta_data = Metadata::new(
            slice.len(),
            seed,
            Some(IndexRange {
                start: range.start,
                end: range.end - 1,
            }),
        );

        write_json(
            &path,
            &DatasetView {
                meta_data: &meta_data,
                data: slice,
            },
        )?;
        tracing::debug!(
            "Partition {} written: records {}..={} -> {}",
            i + 1,
            range.start,
            range.end - 1,
            path.display()
        );

        on_written(&path, &meta_data)?;
        written.push(path);
    }

    tracing::info!(
        "Wrote {} records across {} partitions in {}",
        people.len(),
        partitions,
        dir.display()
    );
    Ok(written)
}

/// Read a dataset document back from disk
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| GenError::io(path, e))?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

/// Print metadata to stdout, pretty-printed
pub fn print_metadata(meta: &Metadata) -> Result<()> {
    let pretty = meta.to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", pretty).map_err(|e| GenError::io("<stdout>", e))?;
    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        tracing::error!("Could not create or access the path: {}", dir.display());
        GenError::io(dir, e)
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        tracing::error!("Could not create output file: {}", path.display());
        GenError::io(path, e)
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush().map_err(|e| GenError::io(path, e))?;
    Ok(())
}
