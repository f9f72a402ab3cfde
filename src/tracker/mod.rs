pub mod fetcher;
pub mod resolver;
pub mod runner;
pub mod snapshot;

pub use resolver::MarketResolver;
pub use runner::TradeTracker;
pub use snapshot::Snapshot;
