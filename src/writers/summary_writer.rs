use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::models::SummaryRecord;

/// Writes the summary dataset as CSV with minimal quoting, and reads it
/// back for inspection.
pub struct SummaryWriter;

impl SummaryWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write all records to `path`, header first. An empty dataset still
    /// gets the header line.
    pub fn write_records(&self, records: &[SummaryRecord], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        if records.is_empty() {
            writer.write_record(SummaryRecord::HEADER)?;
        }
        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Read a summary dataset back from `path`.
    pub fn read_records(&self, path: &Path) -> Result<Vec<SummaryRecord>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for result in reader.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }

    /// Get file statistics
    pub fn file_info(&self, path: &Path) -> Result<SummaryFileInfo> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut total_rows = 0usize;
        for record in reader.byte_records() {
            record?;
            total_rows += 1;
        }

        let file_size = std::fs::metadata(path)?.len();

        Ok(SummaryFileInfo {
            total_rows,
            file_size,
        })
    }
}

impl Default for SummaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SummaryFileInfo {
    pub total_rows: usize,
    pub file_size: u64,
}

impl SummaryFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Summary File:\n\
            - Total rows: {}\n\
            - File size: {:.1} KB",
            self.total_rows,
            self.file_size as f64 / 1024.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UsState;
    use tempfile::NamedTempFile;

    fn record(year: u16, state: UsState, fill: f64) -> SummaryRecord {
        SummaryRecord::from_means(year, state, [fill; 17])
    }

    #[test]
    fn test_write_and_read_round_trip() -> Result<()> {
        let writer = SummaryWriter::new();
        let temp_file = NamedTempFile::new()?;

        let records = vec![
            record(1980, UsState::AK, 1.25),
            record(1980, UsState::CA, -7.5),
            record(1981, UsState::AK, 31.0),
        ];
        writer.write_records(&records, temp_file.path())?;

        let read_back = writer.read_records(temp_file.path())?;
        assert_eq!(read_back, records);
        Ok(())
    }

    #[test]
    fn test_written_file_has_expected_header() -> Result<()> {
        let writer = SummaryWriter::new();
        let temp_file = NamedTempFile::new()?;

        writer.write_records(&[record(1990, UsState::TX, 2.0)], temp_file.path())?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "YEAR,STATE,ELEVATION,TEMP,TEMP_ATTRIBUTES,DEWP,DEWP_ATTRIBUTES,\
             SLP,SLP_ATTRIBUTES,STP,STP_ATTRIBUTES,VISIB,VISIB_ATTRIBUTES,\
             WDSP,WDSP_ATTRIBUTES,MXSPD,GUST,MAX,SNDP"
        );
        // No quoting needed anywhere in a well-formed dataset
        assert!(!contents.contains('"'));
        Ok(())
    }

    #[test]
    fn test_write_empty_records_keeps_header() -> Result<()> {
        let writer = SummaryWriter::new();
        let temp_file = NamedTempFile::new()?;

        writer.write_records(&[], temp_file.path())?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(SummaryRecord::HEADER.join(",").as_str()));
        assert_eq!(lines.next(), None);

        let info = SummaryWriter::new().file_info(temp_file.path())?;
        assert_eq!(info.total_rows, 0);
        Ok(())
    }

    #[test]
    fn test_file_info_counts_data_rows() -> Result<()> {
        let writer = SummaryWriter::new();
        let temp_file = NamedTempFile::new()?;

        let records = vec![
            record(2000, UsState::OH, 0.0),
            record(2000, UsState::WV, 1.0),
        ];
        writer.write_records(&records, temp_file.path())?;

        let info = writer.file_info(temp_file.path())?;
        assert_eq!(info.total_rows, 2);
        assert!(info.file_size > 0);
        assert!(info.summary().contains("Total rows: 2"));
        Ok(())
    }
}
