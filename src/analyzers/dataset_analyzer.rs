use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::error::{AggregateError, Result};
use crate::models::SummaryRecord;

/// Aggregate statistics over a generated summary dataset.
#[derive(Debug, Serialize)]
pub struct DatasetStatistics {
    pub generated_at: DateTime<Utc>,
    pub total_entries: usize,
    pub year_range: (u16, u16),
    pub state_count: usize,
    pub metrics: Vec<MetricStatistics>,
}

/// Range of one averaged metric across all (year, state) entries.
#[derive(Debug, Serialize)]
pub struct MetricStatistics {
    pub name: &'static str,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, records: &[SummaryRecord]) -> Result<DatasetStatistics> {
        if records.is_empty() {
            return Err(AggregateError::Config(
                "No entries in summary dataset".to_string(),
            ));
        }

        let mut first_year = records[0].year;
        let mut last_year = records[0].year;
        let mut states = HashSet::new();

        let mut mins = records[0].means();
        let mut maxs = mins;
        let mut sums = [0.0_f64; 17];

        for record in records {
            first_year = first_year.min(record.year);
            last_year = last_year.max(record.year);
            states.insert(record.state);

            for (slot, value) in record.means().into_iter().enumerate() {
                mins[slot] = mins[slot].min(value);
                maxs[slot] = maxs[slot].max(value);
                sums[slot] += value;
            }
        }

        let count = records.len() as f64;
        let metrics = SummaryRecord::METRIC_NAMES
            .into_iter()
            .enumerate()
            .map(|(slot, name)| MetricStatistics {
                name,
                min: mins[slot],
                mean: sums[slot] / count,
                max: maxs[slot],
            })
            .collect();

        Ok(DatasetStatistics {
            generated_at: Utc::now(),
            total_entries: records.len(),
            year_range: (first_year, last_year),
            state_count: states.len(),
            metrics,
        })
    }
}

impl DatasetStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Summary Dataset:\n\
            - Entries: {}\n\
            - Years: {} to {}\n\
            - States: {}",
            self.total_entries, self.year_range.0, self.year_range.1, self.state_count
        )
    }

    pub fn detailed_summary(&self) -> String {
        let mut lines = vec![
            self.summary(),
            String::new(),
            "Metric ranges over yearly state means:".to_string(),
        ];
        for metric in &self.metrics {
            lines.push(format!(
                "- {:<18} min {:>12.3}  mean {:>12.3}  max {:>12.3}",
                metric.name, metric.min, metric.mean, metric.max
            ));
        }
        lines.join("\n")
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
