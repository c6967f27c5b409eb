// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_BASE_PRICE, DomainError, Price, PricingPolicy, PricingTier};

#[test]
fn test_default_pricing_tiers() {
    let policy: PricingPolicy = PricingPolicy::default();

    for row in 1..=2 {
        assert_eq!(policy.price_for(row), Price::from_units(15), "row {row}");
    }
    for row in 3..=4 {
        assert_eq!(policy.price_for(row), Price::from_units(12), "row {row}");
    }
    for row in 5..=10 {
        assert_eq!(policy.price_for(row), Price::from_units(10), "row {row}");
    }
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(PricingTier::for_row(1), PricingTier::Premium);
    assert_eq!(PricingTier::for_row(2), PricingTier::Premium);
    assert_eq!(PricingTier::for_row(3), PricingTier::Preferred);
    assert_eq!(PricingTier::for_row(4), PricingTier::Preferred);
    assert_eq!(PricingTier::for_row(5), PricingTier::Standard);
    assert_eq!(PricingTier::for_row(10), PricingTier::Standard);
}

#[test]
fn test_pricing_scales_with_base_price() {
    let policy: PricingPolicy = PricingPolicy::new(Price::from_cents(850)).unwrap();

    assert_eq!(policy.base_price(), Price::from_cents(850));
    assert_eq!(policy.price_for(1), Price::from_cents(1275));
    assert_eq!(policy.price_for(3), Price::from_cents(1020));
    assert_eq!(policy.price_for(7), Price::from_cents(850));
}

#[test]
fn test_default_policy_matches_default_base_price() {
    assert_eq!(
        PricingPolicy::default(),
        PricingPolicy::new(DEFAULT_BASE_PRICE).unwrap()
    );
}

#[test]
fn test_rejects_base_price_with_unrepresentable_tier() {
    let result = PricingPolicy::new(Price::from_cents(u64::MAX / 100));
    assert!(matches!(result, Err(DomainError::InvalidPrice(_))));
}

#[test]
fn test_full_grid_total() {
    let policy: PricingPolicy = PricingPolicy::default();

    // 2 rows at 15, 2 rows at 12, 6 rows at 10, 10 seats each
    assert_eq!(policy.full_grid_total(10, 10), Some(Price::from_units(1140)));
    assert_eq!(policy.full_grid_total(1, 1), Some(Price::from_units(15)));
}

#[test]
fn test_full_grid_total_overflow() {
    // Every tier price fits, but a full 255x255 grid of them does not.
    let policy: PricingPolicy = PricingPolicy::new(Price::from_cents(u64::MAX / 200)).unwrap();

    assert!(policy.full_grid_total(1, 1).is_some());
    assert_eq!(policy.full_grid_total(255, 255), None);
}
