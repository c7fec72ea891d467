pub mod buckets;
pub mod state;
pub mod summary;

pub use buckets::StateBuckets;
pub use state::UsState;
pub use summary::SummaryRecord;
