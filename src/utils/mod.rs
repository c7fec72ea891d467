pub mod constants;
pub mod fields;
pub mod progress;

pub use fields::clean_field;
pub use progress::ProgressReporter;
