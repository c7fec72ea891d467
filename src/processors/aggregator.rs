use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{AggregateError, Result};
use crate::models::SummaryRecord;
use crate::processors::column_stats::column_means;
use crate::readers::YearReader;
use crate::utils::constants::{YEAR_RANGE_END, YEAR_RANGE_START};
use crate::utils::progress::ProgressReporter;

/// Drives the full aggregation: one subdirectory per year under the
/// input directory, every station file within it, one summary entry per
/// (year, state) that contributed at least one row.
pub struct Aggregator {
    input_dir: PathBuf,
    start_year: u16,
    end_year: u16,
    max_workers: usize,
}

impl Aggregator {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            start_year: YEAR_RANGE_START,
            end_year: YEAR_RANGE_END,
            max_workers: num_cpus::get(),
        }
    }

    /// Restrict the run to `start_year..=end_year`.
    pub fn with_years(mut self, start_year: u16, end_year: u16) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Build the summary dataset for the configured year range.
    ///
    /// Entries come out with years ascending; within a year, states
    /// appear in the order their first station file was read. Results
    /// are identical for any worker count.
    pub fn build_dataset(&self, progress: Option<&ProgressReporter>) -> Result<Vec<SummaryRecord>> {
        if self.start_year > self.end_year {
            return Err(AggregateError::Config(format!(
                "Start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }

        // Configure Rayon thread pool
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| AggregateError::Config(e.to_string()))?;

        let reader = YearReader::new();
        let mut dataset = Vec::new();

        for year in self.start_year..=self.end_year {
            if let Some(p) = progress {
                p.set_message(&format!("{}: reading station files", year));
            }

            let year_dir = self.input_dir.join(year.to_string());
            let (buckets, stats) = pool.install(|| reader.read_year(&year_dir))?;

            debug!(
                year,
                files = stats.files,
                contributed = stats.contributed,
                skipped = stats.skipped,
                rows = stats.rows,
                states = buckets.len(),
                "year read"
            );

            if let Some(p) = progress {
                p.set_message(&format!("{}: averaging {} states", year, buckets.len()));
            }

            for (state, rows) in buckets.into_ordered() {
                let means = column_means(year, state, &rows)?;
                dataset.push(SummaryRecord::from_means(year, state, means));
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        info!(
            entries = dataset.len(),
            start_year = self.start_year,
            end_year = self.end_year,
            "aggregation complete"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UsState;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_station_file(year_dir: &Path, name: &str, location: &str, rows: &[[&str; 2]]) {
        let mut file = File::create(year_dir.join(name)).unwrap();
        writeln!(
            file,
            "STATION,DATE,LATITUDE,LONGITUDE,ELEVATION,NAME,TEMP,TEMP_ATTRIBUTES,DEWP,DEWP_ATTRIBUTES,SLP,SLP_ATTRIBUTES,STP,STP_ATTRIBUTES,VISIB,VISIB_ATTRIBUTES,WDSP,WDSP_ATTRIBUTES,MXSPD,GUST,MAX,MAX_ATTRIBUTES,MIN,MIN_ATTRIBUTES,PRCP,PRCP_ATTRIBUTES,SNDP,FRSHTT"
        )
        .unwrap();
        for [temp, sndp] in rows {
            writeln!(
                file,
                r#"00000,1984-01-01,0.0,0.0,100.0,"{}",{},24,1.0,24,2.0,24,3.0,24,4.0,24,5.0,24,6.0,7.0,8.0,9,10.0,11,12.0,13,{},100000"#,
                location, temp, sndp
            )
            .unwrap();
        }
    }

    fn year_dir(root: &Path, year: u16) -> std::path::PathBuf {
        let dir = root.join(year.to_string());
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_build_dataset_two_years() -> Result<()> {
        let root = TempDir::new()?;
        let y1984 = year_dir(root.path(), 1984);
        write_station_file(&y1984, "a.csv", "SITE A, CA US", &[["10.0", "1.0"]]);
        write_station_file(&y1984, "b.csv", "SITE B, CA US", &[["30.0", "3.0"]]);
        let y1985 = year_dir(root.path(), 1985);
        write_station_file(&y1985, "c.csv", "SITE C, NV US", &[["50.0", "5.0"]]);

        let dataset = Aggregator::new(root.path())
            .with_years(1984, 1985)
            .with_max_workers(2)
            .build_dataset(None)?;

        assert_eq!(dataset.len(), 2);

        assert_eq!(dataset[0].year, 1984);
        assert_eq!(dataset[0].state, UsState::CA);
        assert_eq!(dataset[0].temp, 20.0);
        assert_eq!(dataset[0].sndp, 2.0);
        assert_eq!(dataset[0].elevation, 100.0);

        assert_eq!(dataset[1].year, 1985);
        assert_eq!(dataset[1].state, UsState::NV);
        assert_eq!(dataset[1].temp, 50.0);
        Ok(())
    }

    #[test]
    fn test_states_keep_first_seen_order_within_year() -> Result<()> {
        let root = TempDir::new()?;
        let dir = year_dir(root.path(), 2000);
        // Sorted file order: 1.csv (WY), 2.csv (AK), 3.csv (WY again)
        write_station_file(&dir, "1.csv", "SITE, WY US", &[["1.0", "0"]]);
        write_station_file(&dir, "2.csv", "SITE, AK US", &[["2.0", "0"]]);
        write_station_file(&dir, "3.csv", "SITE, WY US", &[["3.0", "0"]]);

        let dataset = Aggregator::new(root.path())
            .with_years(2000, 2000)
            .build_dataset(None)?;

        let states: Vec<UsState> = dataset.iter().map(|r| r.state).collect();
        assert_eq!(states, vec![UsState::WY, UsState::AK]);
        assert_eq!(dataset[0].temp, 2.0); // (1.0 + 3.0) / 2
        Ok(())
    }

    #[test]
    fn test_worker_count_does_not_change_output() -> Result<()> {
        let root = TempDir::new()?;
        let dir = year_dir(root.path(), 1999);
        for i in 0..8 {
            let state = if i % 2 == 0 { "MT" } else { "ID" };
            write_station_file(
                &dir,
                &format!("{:02}.csv", i),
                &format!("SITE {} , {} US", i, state),
                &[[&format!("{}.0", i), "0"]],
            );
        }

        let sequential = Aggregator::new(root.path())
            .with_years(1999, 1999)
            .with_max_workers(1)
            .build_dataset(None)?;
        let parallel = Aggregator::new(root.path())
            .with_years(1999, 1999)
            .with_max_workers(4)
            .build_dataset(None)?;

        assert_eq!(sequential, parallel);
        Ok(())
    }

    #[test]
    fn test_inverted_year_range_is_a_config_error() {
        let root = TempDir::new().unwrap();
        let err = Aggregator::new(root.path())
            .with_years(1990, 1985)
            .build_dataset(None)
            .unwrap_err();

        assert!(matches!(err, AggregateError::Config(_)));
    }

    #[test]
    fn test_missing_year_directory_is_fatal() {
        let root = TempDir::new().unwrap();

        let err = Aggregator::new(root.path())
            .with_years(1984, 1984)
            .build_dataset(None)
            .unwrap_err();
        assert!(matches!(err, AggregateError::Io(_)));
    }
}
