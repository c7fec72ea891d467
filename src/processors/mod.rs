pub mod aggregator;
pub mod column_stats;

pub use aggregator::Aggregator;
pub use column_stats::column_means;
