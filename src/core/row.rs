use super::format::{format_rate, group_digits, Locale};
use crate::pricing::PricingTier;
use serde::Serialize;

/// Symbol rendered for a band with no upper limit
pub const UNBOUNDED_SYMBOL: &str = "∞";

/// Label rendered instead of a rate on the free tier
pub const FREE_LABEL: &str = "Free";

/// One formatted table row
///
/// `index` is the tier's position in the table and doubles as the row's
/// stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingRow {
    pub index: usize,
    pub lower: String,
    pub upper: String,
    pub rate: String,
}

/// Format a single tier into its three display cells
pub fn format_tier(index: usize, tier: &PricingTier, locale: Locale) -> PricingRow {
    let lower = group_digits(tier.lower, locale);

    let upper = match tier.upper {
        Some(upper) => group_digits(upper, locale),
        None => UNBOUNDED_SYMBOL.to_string(),
    };

    let rate = if tier.is_free() {
        FREE_LABEL.to_string()
    } else {
        format_rate(tier.rate)
    };

    PricingRow {
        index,
        lower,
        upper,
        rate,
    }
}
