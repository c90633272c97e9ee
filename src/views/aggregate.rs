//! Shared grouping and binning helpers used by the view computations.
//!
//! Grouping partitions rows by distinct key and emits one pair per value
//! actually present, so absent categories never produce zero-count rows.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Count rows per distinct key, ordered by key.
pub fn count_by<T, K, F>(rows: &[T], mut key: F) -> Vec<(K, u64)>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut counts: BTreeMap<K, u64> = BTreeMap::new();
    for row in rows {
        *counts.entry(key(row)).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Sum an amount per distinct key, ordered by key.
pub fn sum_by<T, K, F, A>(rows: &[T], mut key: F, mut amount: A) -> Vec<(K, i64)>
where
    K: Ord,
    F: FnMut(&T) -> K,
    A: FnMut(&T) -> i64,
{
    let mut sums: BTreeMap<K, i64> = BTreeMap::new();
    for row in rows {
        *sums.entry(key(row)).or_insert(0) += amount(row);
    }
    sums.into_iter().collect()
}

/// One bin of a fixed-width histogram over observed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge; inclusive only for the last bin
    pub upper: f64,
    /// Number of values falling in the bin
    pub count: u64,
}

/// Bin `values` into `bins` equal-width buckets spanning the observed
/// min..max. Empty input yields no bins; a degenerate input where every value
/// is equal yields a single bin holding all of them.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };

    if bins == 0 {
        return Vec::new();
    }

    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len() as u64,
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &value in values {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// Truncate a timestamp to its calendar month, keyed as "YYYY-MM".
/// Lexicographic order of the key matches chronological order.
pub fn month_key(ts: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", ts.year(), ts.month())
}

/// The `n` calendar months ending with the month of `now`, oldest first.
pub fn trailing_months(now: DateTime<Utc>, n: usize) -> Vec<String> {
    let mut year = now.year();
    let mut month = now.month() as i32;
    let mut keys = Vec::with_capacity(n);
    for _ in 0..n {
        keys.push(format!("{year:04}-{month:02}"));
        month -= 1;
        if month == 0 {
            month = 12;
            year -= 1;
        }
    }
    keys.reverse();
    keys
}
