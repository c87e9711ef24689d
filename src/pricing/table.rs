use super::PricingTier;
use serde::Serialize;
use std::fmt;

/// Error types for tier table construction
#[derive(Debug, PartialEq, Eq)]
pub enum TierTableError {
    Empty,
    InvertedBand { index: usize },
    NonContiguous { index: usize },
    UnboundedBeforeLast { index: usize },
    NegativeRate { index: usize },
    NonFiniteRate { index: usize },
}

impl fmt::Display for TierTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierTableError::Empty => write!(f, "tier table has no tiers"),
            TierTableError::InvertedBand { index } => {
                write!(f, "tier {} has an upper bound at or below its lower bound", index)
            }
            TierTableError::NonContiguous { index } => {
                write!(f, "tier {} does not end where tier {} begins", index, index + 1)
            }
            TierTableError::UnboundedBeforeLast { index } => {
                write!(f, "tier {} is unbounded but is not the last tier", index)
            }
            TierTableError::NegativeRate { index } => {
                write!(f, "tier {} has a negative rate", index)
            }
            TierTableError::NonFiniteRate { index } => {
                write!(f, "tier {} has a non-finite rate", index)
            }
        }
    }
}

impl std::error::Error for TierTableError {}

/// Ordered sequence of contiguous pricing tiers
///
/// Construction validates the band layout, so a malformed table is rejected
/// up front and rendering never has to re-check it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTable {
    tiers: Vec<PricingTier>,
}

impl TierTable {
    /// Build a table from tiers in ascending band order
    pub fn new(tiers: Vec<PricingTier>) -> Result<Self, TierTableError> {
        validate(&tiers)?;
        Ok(Self { tiers })
    }

    /// Tiers in table order
    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

fn validate(tiers: &[PricingTier]) -> Result<(), TierTableError> {
    if tiers.is_empty() {
        return Err(TierTableError::Empty);
    }

    let last = tiers.len() - 1;
    for (index, tier) in tiers.iter().enumerate() {
        if !tier.rate.is_finite() {
            return Err(TierTableError::NonFiniteRate { index });
        }
        if tier.rate < 0.0 {
            return Err(TierTableError::NegativeRate { index });
        }

        match tier.upper {
            Some(upper) if upper <= tier.lower => {
                return Err(TierTableError::InvertedBand { index });
            }
            Some(upper) => {
                if index < last && tiers[index + 1].lower != upper {
                    return Err(TierTableError::NonContiguous { index });
                }
            }
            None => {
                if index < last {
                    return Err(TierTableError::UnboundedBeforeLast { index });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_band_table() -> Vec<PricingTier> {
        vec![
            PricingTier::new(0, Some(1_000), 0.0),
            PricingTier::new(1_000, None, 0.002),
        ]
    }

    #[test]
    fn test_valid_table() {
        let table = TierTable::new(two_band_table()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.tiers()[1].lower, 1_000);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(TierTable::new(Vec::new()), Err(TierTableError::Empty));
    }

    #[test]
    fn test_inverted_band_rejected() {
        let tiers = vec![
            PricingTier::new(0, Some(500), 0.0),
            PricingTier::new(500, Some(500), 0.001),
        ];
        assert_eq!(
            TierTable::new(tiers),
            Err(TierTableError::InvertedBand { index: 1 })
        );
    }

    #[test]
    fn test_gap_between_bands_rejected() {
        let tiers = vec![
            PricingTier::new(0, Some(1_000), 0.0),
            PricingTier::new(2_000, None, 0.001),
        ];
        assert_eq!(
            TierTable::new(tiers),
            Err(TierTableError::NonContiguous { index: 0 })
        );
    }

    #[test]
    fn test_overlapping_bands_rejected() {
        let tiers = vec![
            PricingTier::new(0, Some(1_000), 0.0),
            PricingTier::new(500, None, 0.001),
        ];
        assert_eq!(
            TierTable::new(tiers),
            Err(TierTableError::NonContiguous { index: 0 })
        );
    }

    #[test]
    fn test_unbounded_middle_band_rejected() {
        let tiers = vec![
            PricingTier::new(0, None, 0.0),
            PricingTier::new(1_000, None, 0.001),
        ];
        assert_eq!(
            TierTable::new(tiers),
            Err(TierTableError::UnboundedBeforeLast { index: 0 })
        );
    }

    #[test]
    fn test_negative_rate_rejected() {
        let tiers = vec![
            PricingTier::new(0, Some(1_000), 0.0),
            PricingTier::new(1_000, None, -0.001),
        ];
        assert_eq!(
            TierTable::new(tiers),
            Err(TierTableError::NegativeRate { index: 1 })
        );
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        let tiers = vec![
            PricingTier::new(0, Some(1_000), 0.0),
            PricingTier::new(1_000, None, f64::NAN),
        ];
        assert_eq!(
            TierTable::new(tiers),
            Err(TierTableError::NonFiniteRate { index: 1 })
        );
    }

    #[test]
    fn test_error_messages_name_the_tier() {
        let err = TierTableError::NonContiguous { index: 2 };
        assert_eq!(err.to_string(), "tier 2 does not end where tier 3 begins");
    }
}
