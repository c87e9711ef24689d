use serde::{Deserialize, Serialize};

/// One contiguous usage band and its per-log rate
///
/// Bounds are monthly request-log volumes. `lower` is inclusive; `upper` is
/// the start of the next band, or `None` when the band has no upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Inclusive lower bound of the band
    pub lower: u64,
    /// Upper bound of the band; `None` means unbounded
    pub upper: Option<u64>,
    /// Cost per log within the band, in USD
    pub rate: f64,
}

impl PricingTier {
    pub const fn new(lower: u64, upper: Option<u64>, rate: f64) -> Self {
        Self { lower, upper, rate }
    }

    /// The free tier is the band that starts at zero volume
    pub fn is_free(&self) -> bool {
        self.lower == 0
    }

    /// Whether this band has no upper limit
    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }
}
