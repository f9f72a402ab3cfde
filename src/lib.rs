pub mod config;
pub mod core;
pub mod error;
pub mod exchange;
pub mod models;
pub mod stats;
#[cfg(test)]
pub mod test_helpers;
pub mod tracker;
