pub mod table;
pub mod tiers;
pub mod types;

pub use table::{TierTable, TierTableError};
pub use tiers::{request_log_pricing, REQUEST_LOG_TIERS};
pub use types::PricingTier;
