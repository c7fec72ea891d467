//! Fixed parameters of the GSOD summary dataset.

/// First year of raw data shipped in the archive.
pub const YEAR_RANGE_START: u16 = 1980;

/// Last year of raw data shipped in the archive (inclusive).
pub const YEAR_RANGE_END: u16 = 2021;

/// Column index of the station location field, `"<name>, <STATE> <COUNTRY>"`.
pub const LOCATION_FIELD_INDEX: usize = 5;

/// Observation columns averaged into the summary dataset, in output order:
/// elevation, the seven paired value/attribute measurements, wind extremes,
/// maximum temperature and snow depth.
pub const SELECTED_COLUMNS: [usize; 17] = [
    4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 26,
];

/// Default directory holding one subdirectory per year of raw station files.
pub const DEFAULT_INPUT_DIR: &str = "gsod_raw";

/// Default path of the generated summary dataset.
pub const DEFAULT_OUTPUT_FILE: &str = "gsod_final.csv";
