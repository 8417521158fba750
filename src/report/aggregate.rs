//! Reduction of filtered record sets into sums and group-by buckets.
//!
//! All monetary math runs on `Decimal`; display rounding happens at the
//! formatting boundary, not mid-computation. Ratios with a zero
//! denominator resolve to zero so no report ever carries NaN/Infinity.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One group-by partition: its key, record count, and summed value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupBucket {
    pub key: String,
    pub count: usize,
    pub total: Decimal,
}

/// Sums `value` over the whole collection.
pub fn sum<T>(records: &[&T], value: impl Fn(&T) -> Decimal) -> Decimal {
    records.iter().map(|r| value(r)).sum()
}

/// Sums `value` over the records satisfying `predicate`.
pub fn sum_where<T>(
    records: &[&T],
    predicate: impl Fn(&T) -> bool,
    value: impl Fn(&T) -> Decimal,
) -> Decimal {
    records
        .iter()
        .filter(|r| predicate(r))
        .map(|r| value(r))
        .sum()
}

/// `part / whole × 100`, rounded to two decimal places; zero when the
/// denominator is zero.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole == Decimal::ZERO {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Arithmetic mean over `count` items, rounded to two decimal places;
/// zero when the subset is empty.
pub fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).round_dp(2)
}

/// Partitions records into buckets keyed by `key`. Records for which the
/// key cannot be derived (e.g. a missing date under month bucketing) are
/// skipped. Map iteration order is incidental; consumers sort separately.
pub fn group_by<T>(
    records: &[&T],
    key: impl Fn(&T) -> Option<String>,
    value: impl Fn(&T) -> Decimal,
) -> BTreeMap<String, GroupBucket> {
    let mut buckets: BTreeMap<String, GroupBucket> = BTreeMap::new();
    for record in records {
        let Some(key) = key(record) else { continue };
        let bucket = buckets.entry(key.clone()).or_insert_with(|| GroupBucket {
            key,
            count: 0,
            total: Decimal::ZERO,
        });
        bucket.count += 1;
        bucket.total += value(record);
    }
    buckets
}
