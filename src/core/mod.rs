pub mod classifier;
pub mod outcome;
pub mod timestamp;
