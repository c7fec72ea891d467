use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::models::UsState;
use crate::utils::constants::LOCATION_FIELD_INDEX;
use crate::utils::fields::clean_field;

/// How far a file has got towards naming its state. Every file starts
/// `Unresolved`; the first row whose location field yields a recognized
/// code makes it `Resolved`, and a code outside the recognized list
/// makes it `Excluded` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateResolution {
    Unresolved,
    Resolved(UsState),
    Excluded,
}

/// One station file's contribution to a year: the state it resolved to
/// and its cleaned observation rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRows {
    pub state: UsState,
    pub rows: Vec<Vec<String>>,
}

/// Reads a single per-station CSV of daily observations.
pub struct StationFileReader;

impl StationFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Read one station file, skipping its header row. Returns `None`
    /// when the file resolves to an excluded jurisdiction or never
    /// resolves at all; either way it contributes nothing to the year.
    ///
    /// Rows read before the state resolves are dropped; the resolving
    /// row and everything after it are cleaned and kept.
    pub fn read_rows(&self, path: &Path) -> Result<Option<StationRows>> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut resolution = StateResolution::Unresolved;
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;

            if resolution == StateResolution::Unresolved {
                let location = record.get(LOCATION_FIELD_INDEX).unwrap_or("");
                let Some(code) = Self::state_candidate(location) else {
                    continue; // Try the next row
                };
                match UsState::parse(&code) {
                    Some(state) => resolution = StateResolution::Resolved(state),
                    None => {
                        debug!(
                            file = %path.display(),
                            code = %code,
                            "station outside recognized states, skipping file"
                        );
                        resolution = StateResolution::Excluded;
                        break;
                    }
                }
            }

            rows.push(record.iter().map(clean_field).collect());
        }

        match resolution {
            StateResolution::Resolved(state) => Ok(Some(StationRows { state, rows })),
            StateResolution::Excluded => Ok(None),
            StateResolution::Unresolved => {
                debug!(file = %path.display(), "no usable location field, skipping file");
                Ok(None)
            }
        }
    }

    /// Extract the candidate state code from a location field of the
    /// form `"<name>, <STATE> <COUNTRY>"`: take the part after the first
    /// comma, drop its first character (the space following the comma),
    /// and keep up to the next space. Returns `None` when the field is
    /// empty or has no comma, which skips the row without deciding
    /// anything for the file.
    fn state_candidate(location: &str) -> Option<String> {
        if location.is_empty() {
            return None;
        }
        let tail = location.split(',').nth(1)?;

        let mut chars = tail.chars();
        chars.next();
        let token = chars.as_str().trim();

        Some(token.split(' ').next().unwrap_or("").trim().to_string())
    }
}

impl Default for StationFileReader {
    fn default() -> Self {
        Self::new()
    }
}
