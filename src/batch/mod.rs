//! Decode many nav files and collect their place points.
//!
//! A failure in one file is recorded and the batch moves on; nothing is
//! shared between files, so the parallel runner is a plain fan-out over
//! blocking decode tasks.

pub mod report;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::{Error, Result};
use crate::mesh::{decode_places, PlacePoints};

pub use report::{Aggregate, BatchReport, FileReport, FileStatus};

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Files decoded at once
    pub jobs: usize,
    /// Extension matched when expanding directories
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            extension: "nav".to_string(),
        }
    }
}

/// Map name for a nav file: its base name up to the first `.`
pub fn map_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}

/// Expand directories to the files inside them with `extension`
/// (non-recursive, sorted). Plain file paths pass through unchanged.
pub fn expand_inputs(paths: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let mut found = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();
            let matches = entry_path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if matches && entry_path.is_file() {
                found.push(entry_path);
            }
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

/// Read a nav file from disk and reduce it
pub fn decode_file(path: &Path) -> Result<Option<PlacePoints>> {
    let data = std::fs::read(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    decode_places(&data)
}

fn process_file<F>(path: &Path, decode: &F) -> (FileReport, Option<PlacePoints>)
where
    F: Fn(&Path) -> Result<Option<PlacePoints>>,
{
    let start = Instant::now();
    let result = decode(path);
    let elapsed = start.elapsed();

    let (status, data) = match result {
        Ok(Some(points)) => (FileStatus::Decoded { places: points.len() }, Some(points)),
        Ok(None) => (FileStatus::NoData, None),
        Err(e) => (FileStatus::Failed(e), None),
    };
    let report = FileReport {
        path: path.to_path_buf(),
        map_name: map_name(path),
        elapsed,
        status,
    };
    report.log();
    (report, data)
}

/// Decode every input in order on the calling thread
pub fn run_batch<F>(inputs: &[PathBuf], decode: F) -> BatchReport
where
    F: Fn(&Path) -> Result<Option<PlacePoints>>,
{
    let mut report = BatchReport::default();
    for path in inputs {
        let (file, data) = process_file(path, &decode);
        report.record(file, data);
    }
    report.sort();
    report
}

/// Decode inputs on the blocking pool with at most `jobs` files in flight.
/// Results are recorded in input order, as `run_batch` does, so a later
/// input still wins a map name collision. File reports come back sorted
/// by map name.
pub async fn run_batch_parallel<F>(inputs: Vec<PathBuf>, jobs: usize, decode: F) -> BatchReport
where
    F: Fn(&Path) -> Result<Option<PlacePoints>> + Send + Sync + 'static,
{
    let decode = Arc::new(decode);
    let permits = Arc::new(Semaphore::new(jobs.max(1)));
    let mut tasks = JoinSet::new();
    let mut done: Vec<Option<(FileReport, Option<PlacePoints>)>> = Vec::with_capacity(inputs.len());
    done.resize_with(inputs.len(), || None);

    for (index, path) in inputs.into_iter().enumerate() {
        let decode = Arc::clone(&decode);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            // The semaphore is never closed
            let _permit = permits.acquire_owned().await.ok();
            let worker_path = path.clone();
            let result = match tokio::task::spawn_blocking(move || process_file(&worker_path, decode.as_ref())).await {
                Ok(result) => result,
                Err(e) => {
                    let report = FileReport {
                        map_name: map_name(&path),
                        path,
                        elapsed: Default::default(),
                        status: FileStatus::Failed(Error::Io(format!("decode worker failed: {e}"))),
                    };
                    report.log();
                    (report, None)
                }
            };
            (index, result)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => done[index] = Some(result),
            Err(e) => tracing::error!("batch task failed: {e}"),
        }
    }

    let mut report = BatchReport::default();
    for (file, data) in done.into_iter().flatten() {
        report.record(file, data);
    }
    report.sort();
    report
}
