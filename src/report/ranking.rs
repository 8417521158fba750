//! Top-N selection over group-by buckets.

use std::collections::BTreeMap;

use super::aggregate::GroupBucket;

/// Returns up to `k` buckets with the largest totals, descending. Ties
/// break by key ascending so the ordering is deterministic regardless of
/// input order. The input table is left untouched.
pub fn top_n(buckets: &BTreeMap<String, GroupBucket>, k: usize) -> Vec<GroupBucket> {
    let mut ranked: Vec<GroupBucket> = buckets.values().cloned().collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
    ranked.truncate(k);
    ranked
}
