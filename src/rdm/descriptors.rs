//! rdm::descriptors — metadata attached to RDM batches.
//!
//! Purpose
//! -------
//! Model the three descriptor mappings an RDM batch carries (batch-level,
//! per-RDM, per-pattern) as value objects. Copies are structural: cloning a
//! [`Descriptors`] shares the underlying map, and the first mutation on
//! either side copies it. Two containers therefore never observe each
//! other's edits.
//!
//! Key behaviors
//! -------------
//! - Store `key → DescriptorValue` in a sorted map behind an `Arc`.
//! - Clone in O(1); mutate through [`Descriptors::insert`] /
//!   [`Descriptors::remove`], which copy on write.
//! - Check list lengths against a batch dimension via
//!   [`Descriptors::check_lengths`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Per-RDM and per-pattern descriptors hold `DescriptorValue::List`
//!   values with one entry per RDM / pattern; batch-level descriptors may
//!   hold any value.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::rdm::errors::{RdmsError, RdmsResult};

/// A single descriptor entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<DescriptorValue>),
}

impl DescriptorValue {
    /// Number of entries for lists, `None` for scalars.
    pub fn list_len(&self) -> Option<usize> {
        match self {
            DescriptorValue::List(items) => Some(items.len()),
            _ => None,
        }
    }
}

impl From<bool> for DescriptorValue {
    fn from(value: bool) -> Self {
        DescriptorValue::Bool(value)
    }
}

impl From<i64> for DescriptorValue {
    fn from(value: i64) -> Self {
        DescriptorValue::Int(value)
    }
}

impl From<f64> for DescriptorValue {
    fn from(value: f64) -> Self {
        DescriptorValue::Float(value)
    }
}

impl From<&str> for DescriptorValue {
    fn from(value: &str) -> Self {
        DescriptorValue::Text(value.to_string())
    }
}

impl From<String> for DescriptorValue {
    fn from(value: String) -> Self {
        DescriptorValue::Text(value)
    }
}

impl<T: Into<DescriptorValue>> From<Vec<T>> for DescriptorValue {
    fn from(values: Vec<T>) -> Self {
        DescriptorValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Descriptors — a copy-on-write `key → DescriptorValue` mapping.
///
/// Fields
/// ------
/// - `entries`: `Arc<BTreeMap<String, DescriptorValue>>`
///   Shared, sorted storage. Never mutated while shared.
///
/// Performance
/// -----------
/// - `clone` is a reference-count bump; the first write after a clone
///   copies the map once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descriptors {
    entries: Arc<BTreeMap<String, DescriptorValue>>,
}

impl Descriptors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&DescriptorValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DescriptorValue)> {
        self.entries.iter()
    }

    /// Insert or replace an entry, copying the map first if it is shared.
    pub fn insert(
        &mut self, key: impl Into<String>, value: impl Into<DescriptorValue>,
    ) -> Option<DescriptorValue> {
        Arc::make_mut(&mut self.entries).insert(key.into(), value.into())
    }

    /// Remove an entry, copying the map first if it is shared.
    pub fn remove(&mut self, key: &str) -> Option<DescriptorValue> {
        if !self.entries.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.entries).remove(key)
    }

    /// Check that every entry is a list of exactly `expected` items.
    ///
    /// Errors
    /// ------
    /// - `RdmsError::DescriptorNotList { key }` for a scalar entry.
    /// - `RdmsError::DescriptorLength { key, expected, found }` for a list
    ///   of the wrong length.
    pub fn check_lengths(&self, expected: usize) -> RdmsResult<()> {
        for (key, value) in self.entries.iter() {
            check_list_length(key, value, expected)?;
        }
        Ok(())
    }
}

/// Check that a single entry is a list of exactly `expected` items.
///
/// Errors
/// ------
/// - `RdmsError::DescriptorNotList { key }` for a scalar value.
/// - `RdmsError::DescriptorLength { key, expected, found }` otherwise.
pub fn check_list_length(key: &str, value: &DescriptorValue, expected: usize) -> RdmsResult<()> {
    match value.list_len() {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(RdmsError::DescriptorLength { key: key.to_string(), expected, found }),
        None => Err(RdmsError::DescriptorNotList { key: key.to_string() }),
    }
}

impl<K: Into<String>, V: Into<DescriptorValue>> FromIterator<(K, V)> for Descriptors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Descriptors { entries: Arc::new(entries) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Copy-on-write isolation between clones.
    // - Length checks for per-RDM / per-pattern descriptors.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure edits to a clone never leak into the original and vice versa.
    //
    // Given
    // -----
    // - Descriptors {"subject": 1}, cloned.
    //
    // Expect
    // ------
    // - Inserting into the clone leaves the original unchanged; inserting
    //   into the original leaves the clone unchanged.
    fn descriptors_clone_is_isolated_on_write() {
        // Arrange
        let original: Descriptors = [("subject", 1_i64)].into_iter().collect();
        let mut copy = original.clone();
        let mut original = original;

        // Act
        copy.insert("subject", 2_i64);
        original.insert("session", "a");

        // Assert
        assert_eq!(original.get("subject"), Some(&DescriptorValue::Int(1)));
        assert_eq!(copy.get("subject"), Some(&DescriptorValue::Int(2)));
        assert!(!copy.contains_key("session"));
    }

    #[test]
    // Purpose
    // -------
    // Verify `check_lengths` on matching, short, and scalar entries.
    //
    // Given
    // -----
    // - A list of 3 entries checked against 3 and 4, and a scalar entry.
    //
    // Expect
    // ------
    // - Ok for 3, `DescriptorLength` for 4, `DescriptorNotList` for the
    //   scalar.
    fn descriptors_check_lengths_reports_mismatches() {
        // Arrange
        let lists: Descriptors = [("index", vec![0_i64, 1, 2])].into_iter().collect();
        let scalar: Descriptors = [("subject", 1_i64)].into_iter().collect();

        // Act & Assert
        assert!(lists.check_lengths(3).is_ok());
        assert_eq!(
            lists.check_lengths(4),
            Err(RdmsError::DescriptorLength { key: "index".to_string(), expected: 4, found: 3 })
        );
        assert_eq!(
            scalar.check_lengths(1),
            Err(RdmsError::DescriptorNotList { key: "subject".to_string() })
        );
    }
}
