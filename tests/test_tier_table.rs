//! Tier table invariants exercised through the public API
//!
//! The canonical table is compiled in, so these tests pin down the band
//! layout a release must never break: seven ascending contiguous bands,
//! a free first band, and a single unbounded last band.

use ratecard::pricing::{request_log_pricing, PricingTier, TierTable, TierTableError, REQUEST_LOG_TIERS};

#[test]
fn canonical_table_has_seven_tiers() {
    assert_eq!(REQUEST_LOG_TIERS.len(), 7);
    assert_eq!(request_log_pricing().len(), 7);
}

#[test]
fn canonical_bands_are_contiguous_and_ascending() {
    let tiers = request_log_pricing().tiers();

    for i in 0..tiers.len() - 1 {
        assert_eq!(
            tiers[i].upper,
            Some(tiers[i + 1].lower),
            "band {} must end where band {} begins",
            i,
            i + 1
        );
    }

    for tier in tiers {
        if let Some(upper) = tier.upper {
            assert!(upper > tier.lower);
        }
    }
}

#[test]
fn first_band_is_free_and_last_is_unbounded() {
    let tiers = request_log_pricing().tiers();

    assert_eq!(tiers[0].lower, 0);
    assert_eq!(tiers[0].rate, 0.0);
    assert!(tiers[6].upper.is_none());
    assert!(tiers[..6].iter().all(|tier| tier.upper.is_some()));
}

#[test]
fn exposed_table_matches_the_constant() {
    assert_eq!(request_log_pricing().tiers(), REQUEST_LOG_TIERS);
}

#[test]
fn canonical_layout_passes_validation() {
    let table = TierTable::new(REQUEST_LOG_TIERS.to_vec()).unwrap();
    assert_eq!(table.tiers(), REQUEST_LOG_TIERS);
}

#[test]
fn custom_tables_are_validated_at_construction() {
    let gap = vec![
        PricingTier::new(0, Some(1_000), 0.0),
        PricingTier::new(5_000, None, 0.01),
    ];
    assert_eq!(
        TierTable::new(gap),
        Err(TierTableError::NonContiguous { index: 0 })
    );

    let floating_middle = vec![
        PricingTier::new(0, None, 0.0),
        PricingTier::new(1_000, None, 0.01),
    ];
    assert_eq!(
        TierTable::new(floating_middle),
        Err(TierTableError::UnboundedBeforeLast { index: 0 })
    );
}
