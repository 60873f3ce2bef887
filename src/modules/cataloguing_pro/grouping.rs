//! Grouping by main class, kept in first-seen order.

use indexmap::IndexMap;

use super::classification::{class_key, main_class};
use crate::domain::{CatalogError, Result};
use crate::models::Record;

/// Insertion-ordered mapping from main class to its records.
///
/// Groups appear in the order their key was first seen, and records inside a
/// group keep input order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShelfGroups {
    groups: IndexMap<String, Vec<Record>>,
}

impl ShelfGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under `key`, creating the group on first sight
    pub fn push(&mut self, key: &str, record: Record) {
        self.groups.entry(key.to_string()).or_default().push(record);
    }

    pub fn get(&self, key: &str) -> Option<&[Record]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    /// All records, group by group
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.groups.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for ShelfGroups {
    type Item = (String, Vec<Record>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Record>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group records by the part of their class code before the first `.`.
///
/// The key is the raw text (so `"005"` stays `"005"`), but it must still be
/// an integer segment. No sorting is applied.
pub fn group_by_main_class(records: &[Record]) -> Result<ShelfGroups> {
    let mut groups = ShelfGroups::new();

    for record in records {
        let key = main_class(record.class_code());
        class_key(key).map_err(|_| CatalogError::malformed(record.class_code(), key))?;
        groups.push(key, record.clone());
    }

    tracing::debug!(
        "Grouped {} records into {} main classes",
        records.len(),
        groups.len()
    );

    Ok(groups)
}
