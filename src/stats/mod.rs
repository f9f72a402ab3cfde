pub mod aggregator;
pub mod bucket;
pub mod report;

pub use aggregator::{aggregate, Aggregator, Statistics};
pub use bucket::{Bucket, CategoryBucket, MonthBucket, Summary};
