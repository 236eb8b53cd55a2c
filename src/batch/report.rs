use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Error;
use crate::mesh::PlacePoints;

/// Place points of every map that produced data, keyed by map name
pub type Aggregate = BTreeMap<String, PlacePoints>;

#[derive(Debug)]
pub enum FileStatus {
    /// Decoded and at least one place had areas
    Decoded { places: usize },
    /// Decoded but no area belongs to a named place
    NoData,
    Failed(Error),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub map_name: String,
    pub elapsed: Duration,
    pub status: FileStatus,
}

impl FileReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }

    /// Emit the one-line diagnostic for this file
    pub fn log(&self) {
        match &self.status {
            FileStatus::Decoded { places } => {
                info!(map = %self.map_name, places, "parse OK in {:?}", self.elapsed);
            }
            FileStatus::NoData => {
                info!(map = %self.map_name, "no place data, skipping");
            }
            FileStatus::Failed(e) => {
                warn!(map = %self.map_name, kind = e.kind(), "failed to parse: {e}");
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub maps: Aggregate,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn record(&mut self, report: FileReport, data: Option<PlacePoints>) {
        if let Some(points) = data {
            if self.maps.insert(report.map_name.clone(), points).is_some() {
                warn!(map = %report.map_name, path = %report.path.display(), "map name seen twice, keeping the later file");
            }
        }
        self.files.push(report);
    }

    /// Order file reports by map name, then path
    pub fn sort(&mut self) {
        self.files
            .sort_by(|a, b| a.map_name.cmp(&b.map_name).then_with(|| a.path.cmp(&b.path)));
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.is_failure())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn no_data_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::NoData))
            .count()
    }

    /// True when at least one file failed; output for the rest is still valid
    pub fn is_partial_failure(&self) -> bool {
        self.failures().next().is_some()
    }
}
