use crate::error::{AggregateError, Result};
use crate::models::UsState;
use crate::utils::constants::SELECTED_COLUMNS;

/// Column-wise arithmetic means of the selected observation columns over
/// a state's cleaned rows for one year.
///
/// Every selected field of every row must parse as a float; a value that
/// does not, or a row too short to hold a selected column, aborts the
/// whole run with an error naming the year, state and column.
pub fn column_means(
    year: u16,
    state: UsState,
    rows: &[Vec<String>],
) -> Result<[f64; SELECTED_COLUMNS.len()]> {
    let mut sums = [0.0_f64; SELECTED_COLUMNS.len()];

    for row in rows {
        for (slot, &column) in SELECTED_COLUMNS.iter().enumerate() {
            let value = row.get(column).ok_or_else(|| AggregateError::ShortRow {
                year,
                state: state.to_string(),
                column,
                len: row.len(),
            })?;
            let parsed: f64 = value.parse().map_err(|source| AggregateError::Numeric {
                year,
                state: state.to_string(),
                column,
                value: value.clone(),
                source,
            })?;
            sums[slot] += parsed;
        }
    }

    let count = rows.len() as f64;
    let mut means = sums;
    for mean in &mut means {
        *mean /= count;
    }
    Ok(means)
}
