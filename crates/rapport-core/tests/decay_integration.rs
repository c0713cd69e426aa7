//! Integration tests for decay classification and banner policy.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use rapport_core::decay::{elapsed_days_between, DEFAULT_TOTAL_DAYS};
use rapport_core::{classify, policy_for, DecayWindow, Tier};

#[test]
fn test_every_day_in_range_gets_one_monotonic_tier() {
    let window = DecayWindow::default();
    let mut previous = Tier::Active;

    for day in 0..=1000 {
        let tier = window.classify(day);
        assert!(tier >= previous, "tier regressed at day {day}");
        let matching_rows = window
            .tier_table()
            .iter()
            .filter(|range| range.contains(day as u64))
            .count();
        assert_eq!(matching_rows, 1, "day {day} matched {matching_rows} rows");
        previous = tier;
    }
}

#[test]
fn test_spec_boundaries() {
    assert_eq!(classify(30, 45), Tier::Active);
    assert_eq!(classify(31, 45), Tier::Cooling);
    assert_eq!(classify(37, 45), Tier::Cooling);
    assert_eq!(classify(38, 45), Tier::AtRisk);
    assert_eq!(classify(42, 45), Tier::AtRisk);
    assert_eq!(classify(43, 45), Tier::Critical);
    assert_eq!(classify(45, 45), Tier::Critical);
    assert_eq!(classify(46, 45), Tier::Inactive);
}

#[test]
fn test_banner_follows_classification() {
    let window = DecayWindow::default();

    assert!(policy_for(window.classify(12)).is_none());

    let banner = policy_for(window.classify(44)).expect("critical tier has a banner");
    assert_eq!(banner.severity_color, Tier::Critical.color());
}

#[test]
fn test_timestamps_feed_classifier() {
    let now = Utc::now();
    let last_positive = now - Duration::days(39) - Duration::hours(5);

    assert_eq!(elapsed_days_between(last_positive, now), 39);
    assert_eq!(
        DecayWindow::default().classify_at(last_positive, now),
        Tier::AtRisk
    );
}

proptest! {
    #[test]
    fn prop_classification_is_monotonic(total in 1u32..=365, a in 0i64..2000, b in 0i64..2000) {
        let window = DecayWindow::new(total);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(window.classify(lo) <= window.classify(hi));
    }

    #[test]
    fn prop_past_window_is_inactive(total in 1u32..=365, extra in 1i64..100_000) {
        let window = DecayWindow::new(total);
        let elapsed = i64::from(total) + extra;
        prop_assert_eq!(window.classify(elapsed), Tier::Inactive);
        prop_assert!(window.is_expired(elapsed));
        prop_assert_eq!(window.days_remaining(elapsed), 0);
    }

    #[test]
    fn prop_within_window_is_not_inactive(total in 1u32..=365, frac in 0.0f64..=1.0) {
        let window = DecayWindow::new(total);
        let elapsed = (f64::from(total) * frac).floor() as i64;
        prop_assert_ne!(window.classify(elapsed), Tier::Inactive);
        prop_assert!(!window.is_expired(elapsed));
    }

    #[test]
    fn prop_classify_is_idempotent(elapsed in any::<i64>()) {
        prop_assert_eq!(
            classify(elapsed, DEFAULT_TOTAL_DAYS),
            classify(elapsed, DEFAULT_TOTAL_DAYS)
        );
    }

    #[test]
    fn prop_tier_table_is_contiguous(total in 1u32..=10_000) {
        let table = DecayWindow::new(total).tier_table();
        prop_assert_eq!(table[0].min_day, 0);
        for pair in table.windows(2) {
            let max = pair[0].max_day.expect("only the last row is unbounded");
            prop_assert_eq!(pair[1].min_day, max + 1);
        }
        prop_assert_eq!(table[3].max_day, Some(u64::from(total)));
        prop_assert!(table[4].max_day.is_none());
    }
}
