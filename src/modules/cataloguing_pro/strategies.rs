//! Interchangeable shelf-sort strategies.
//!
//! The partition and merge strategies compare with the simplified
//! [`two_segment_key`], not the full class key. They agree with the reference
//! strategy only while every code has at most two segments and minor
//! segments have the same width. Known limitation, kept as is:
//!
//! - `"333.1.2"` and `"333.1.5"` tie, so their relative order comes from the
//!   strategy rather than the third segment.
//! - `"200.10"` reads as `200.1` and sorts before `"200.5"`.
//!
//! Both strategies are stable, so equal keys keep input order.

use std::fmt;

use super::classification::two_segment_key;
use super::ordering::sort_reference;
use crate::domain::Result;
use crate::models::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Stable sort over the dot-segmented class key
    Reference,
    /// Quicksort-style pivot partitioning on the two-segment key
    Partition,
    /// Mergesort-style divide and conquer on the two-segment key
    Merge,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 3] = [
        SortStrategy::Reference,
        SortStrategy::Partition,
        SortStrategy::Merge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortStrategy::Reference => "reference",
            SortStrategy::Partition => "partition",
            SortStrategy::Merge => "merge",
        }
    }

    pub fn sort(&self, records: &[Record]) -> Result<Vec<Record>> {
        match self {
            SortStrategy::Reference => sort_reference(records),
            SortStrategy::Partition => sort_partition(records),
            SortStrategy::Merge => sort_merge(records),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run every strategy over the same input, in [`SortStrategy::ALL`] order
pub fn compare_strategies(records: &[Record]) -> Result<Vec<(SortStrategy, Vec<Record>)>> {
    SortStrategy::ALL
        .iter()
        .map(|strategy| Ok((*strategy, strategy.sort(records)?)))
        .collect()
}

fn keyed(records: &[Record]) -> Result<Vec<(f64, &Record)>> {
    records
        .iter()
        .map(|record| Ok((two_segment_key(record.class_code())?, record)))
        .collect()
}

enum Step<'a> {
    Sort(Vec<(f64, &'a Record)>),
    Emit(&'a Record),
}

/// Partition strategy.
///
/// The first element is the pivot; elements with a key `<` the pivot's go
/// left, ties and larger keys go right (both in input order), and the output is
/// `left ++ pivot ++ right`. Runs on an explicit stack so adversarial input
/// cannot exhaust the call stack.
pub fn sort_partition(records: &[Record]) -> Result<Vec<Record>> {
    let mut sorted = Vec::with_capacity(records.len());
    let mut stack = vec![Step::Sort(keyed(records)?)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(record) => sorted.push(record.clone()),
            Step::Sort(part) => {
                let mut rest = part.into_iter();
                let Some((pivot_key, pivot)) = rest.next() else {
                    continue;
                };
                let (left, right): (Vec<_>, Vec<_>) = rest.partition(|(key, _)| *key < pivot_key);

                // popped in reverse: left, then pivot, then right
                stack.push(Step::Sort(right));
                stack.push(Step::Emit(pivot));
                stack.push(Step::Sort(left));
            }
        }
    }

    tracing::debug!("Partition strategy sorted {} records", sorted.len());
    Ok(sorted)
}

/// Merge strategy.
///
/// Splits at `len / 2` and merges with index cursors, taking from the left
/// run on ties, so equal keys keep input order.
pub fn sort_merge(records: &[Record]) -> Result<Vec<Record>> {
    let entries = keyed(records)?;
    let sorted: Vec<Record> = merge_sort(&entries)
        .into_iter()
        .map(|(_, record)| record.clone())
        .collect();

    tracing::debug!("Merge strategy sorted {} records", sorted.len());
    Ok(sorted)
}

fn merge_sort<'a>(entries: &[(f64, &'a Record)]) -> Vec<(f64, &'a Record)> {
    if entries.len() < 2 {
        return entries.to_vec();
    }

    let (left, right) = entries.split_at(entries.len() / 2);
    let left = merge_sort(left);
    let right = merge_sort(right);

    let mut merged = Vec::with_capacity(entries.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i].0 <= right[j].0 {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
