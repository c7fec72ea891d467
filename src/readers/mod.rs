pub mod station_file;
pub mod year_reader;

pub use station_file::{StationFileReader, StationRows, StateResolution};
pub use year_reader::{YearReadStats, YearReader};
