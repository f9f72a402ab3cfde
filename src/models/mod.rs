pub mod category;
pub mod fill;
pub mod market;
pub mod trade;

pub use category::Category;
pub use fill::{Fill, Side};
pub use market::{MarketState, MarketStatus};
pub use trade::{Outcome, OutcomeStatus, Trade};
