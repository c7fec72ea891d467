use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::models::StateBuckets;
use crate::readers::station_file::StationFileReader;

/// Counts from reading one year directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct YearReadStats {
    /// Station files found in the directory.
    pub files: usize,
    /// Files that resolved to a recognized state and contributed rows.
    pub contributed: usize,
    /// Files skipped (excluded jurisdiction or never resolved).
    pub skipped: usize,
    /// Total cleaned rows contributed.
    pub rows: usize,
}

/// Reads every station file of one year directory into per-state buckets.
pub struct YearReader;

impl YearReader {
    pub fn new() -> Self {
        Self
    }

    /// Read all station files under `year_dir` into state buckets.
    ///
    /// Files are parsed on the current rayon pool but merged in sorted
    /// file-name order, so the resulting bucket order does not depend on
    /// the worker count.
    pub fn read_year(&self, year_dir: &Path) -> Result<(StateBuckets, YearReadStats)> {
        let files = self.station_files(year_dir)?;
        debug!(dir = %year_dir.display(), files = files.len(), "reading year directory");

        let reader = StationFileReader::new();
        let outcomes = files
            .par_iter()
            .map(|path| reader.read_rows(path))
            .collect::<Result<Vec<_>>>()?;

        let mut buckets = StateBuckets::new();
        let mut stats = YearReadStats {
            files: files.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome {
                Some(station) => {
                    stats.contributed += 1;
                    stats.rows += station.rows.len();
                    buckets.append_rows(station.state, station.rows);
                }
                None => stats.skipped += 1,
            }
        }

        Ok((buckets, stats))
    }

    /// Station files of a year directory, sorted by name so bucket
    /// insertion order is reproducible. Subdirectories are ignored.
    fn station_files(&self, year_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(year_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl Default for YearReader {
    fn default() -> Self {
        Self::new()
    }
}
