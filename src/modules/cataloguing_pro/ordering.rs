//! Shelf ordering by the dot-segmented class key.

use super::classification::{ClassKey, class_key};
use crate::domain::Result;
use crate::models::Record;

/// Order records so their class keys are non-decreasing.
///
/// Stable: records with equal keys keep their input order. Keys are all read
/// before sorting, so a malformed code fails the call without partial output.
pub fn order_by_classification(records: &[Record]) -> Result<Vec<Record>> {
    let mut keyed = records
        .iter()
        .map(|record| Ok((class_key(record.class_code())?, record)))
        .collect::<Result<Vec<(ClassKey, &Record)>>>()?;

    // slice::sort_by is stable
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    tracing::debug!("Ordered {} records by class key", keyed.len());

    Ok(keyed.into_iter().map(|(_, record)| record.clone()).collect())
}

/// Reference strategy: a stable general-purpose sort over the class key.
pub fn sort_reference(records: &[Record]) -> Result<Vec<Record>> {
    order_by_classification(records)
}
