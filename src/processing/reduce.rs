//! Aggregation primitives: numeric reductions, mode and ranked value counts.
//!
//! Missing values (`None`) are ignored by every aggregate except [`ReduceOp::Count`].

use std::collections::BTreeMap;

/// Built-in reduction operations over a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all values (including missing ones).
    Count,
    /// Sum of present values.
    Sum,
    /// Arithmetic mean of present values.
    Mean,
    /// Minimum present value.
    Min,
    /// Maximum present value.
    Max,
}

/// Reduce a column of optional numbers using a built-in [`ReduceOp`].
///
/// - For `Count`, always returns `Some(count)` (zero for an empty column).
/// - For the other ops, returns `None` if there are no present values.
pub fn reduce<I>(values: I, op: ReduceOp) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut count = 0usize;
    let mut present = 0usize;
    let mut acc: Option<f64> = None;

    for value in values {
        count += 1;
        let Some(v) = value else { continue };
        present += 1;
        acc = Some(match (op, acc) {
            (ReduceOp::Sum | ReduceOp::Mean, Some(a)) => a + v,
            (ReduceOp::Min, Some(a)) => a.min(v),
            (ReduceOp::Max, Some(a)) => a.max(v),
            (_, None) => v,
            (ReduceOp::Count, Some(a)) => a,
        });
    }

    match op {
        ReduceOp::Count => Some(count as f64),
        ReduceOp::Mean => acc.map(|sum| sum / present as f64),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => acc,
    }
}

/// Most frequent value.
///
/// Ties resolve to the smallest value under `T`'s ordering. Returns `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    // Ascending scan: only a strictly larger count replaces the current best.
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Frequency of every distinct value, most frequent first; ties ordered by ascending value.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    // Stable sort keeps the BTreeMap's ascending value order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn tally<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
