use super::{PricingTier, TierTable};
use once_cell::sync::Lazy;

/// Canonical request-log pricing bands, in logs per month
///
/// Order is meaningful: bands ascend and each one starts where the previous
/// one ends. The first band is free and the last one has no upper limit.
pub const REQUEST_LOG_TIERS: [PricingTier; 7] = [
    PricingTier::new(0, Some(10_000), 0.0),
    PricingTier::new(10_000, Some(25_000), 0.0016),
    PricingTier::new(25_000, Some(50_000), 0.0008),
    PricingTier::new(50_000, Some(100_000), 0.00035),
    PricingTier::new(100_000, Some(2_000_000), 0.0003),
    PricingTier::new(2_000_000, Some(15_000_000), 0.000128),
    PricingTier::new(15_000_000, None, 0.000083),
];

static REQUEST_LOG_PRICING: Lazy<TierTable> = Lazy::new(|| {
    TierTable::new(REQUEST_LOG_TIERS.to_vec())
        .expect("canonical request-log tiers form a contiguous ascending layout")
});

/// The canonical table as a validated `TierTable`
///
/// Exposure copies the constant verbatim; no scaling or markup is applied on
/// the way out.
pub fn request_log_pricing() -> &'static TierTable {
    &REQUEST_LOG_PRICING
}
