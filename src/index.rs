//! Field Index - groups records by the string value of each allowed field
//!
//! Maps field name → value string → ordered positions into the source slice.
//!
//! # Example
//! ```ignore
//! // Query: airports where City = Denver
//! let positions = index.positions("City", "Denver");
//! // positions = [3, 17] (offsets into the dataset, first-seen order)
//! ```
//!
//! # Design Notes
//! - Built once at startup from an immutable snapshot; never mutated after
//! - Buckets hold positions, not record clones, so the dataset stays the
//!   single owner of the records
//! - Allowed names that are not fields of the record type are skipped with
//!   a warning, not an error (the set is operator-supplied)

use crate::model::FieldAccess;
use std::collections::{BTreeSet, HashMap};

/// Two-level lookup index over a homogeneous record collection.
///
/// For each indexed field, every record appears in exactly one bucket: the
/// one keyed by that record's stringified field value. Within a bucket,
/// positions keep the order of the source collection.
#[derive(Debug, Default)]
pub struct FieldIndex {
    /// field name → value string → positions in the source slice
    buckets: HashMap<String, HashMap<String, Vec<usize>>>,
}

impl FieldIndex {
    /// Build the index for `records` over every allowed field that exists on
    /// the record type.
    ///
    /// Allowed names absent from `T::FIELDS` produce no bucket map; allowed
    /// fields with no records produce an empty bucket map.
    pub fn build<T: FieldAccess>(allowed: &BTreeSet<String>, records: &[T]) -> Self {
        let mut buckets: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();

        for field in allowed {
            if !T::has_field(field) {
                tracing::warn!(field = %field, "allowed field not on record type, skipping");
                continue;
            }
            buckets.insert(field.clone(), HashMap::new());
        }

        for (pos, record) in records.iter().enumerate() {
            for (field, by_value) in buckets.iter_mut() {
                // has_field was checked above, so field always resolves
                if let Some(value) = record.field(field) {
                    by_value
                        .entry(value.into_owned())
                        .or_default()
                        .push(pos);
                }
            }
        }

        Self { buckets }
    }

    /// Positions of all records whose `field` stringifies to `value`, in
    /// first-seen order. Empty when the field is not indexed or the value
    /// has no matches.
    pub fn positions(&self, field: &str, value: &str) -> &[usize] {
        self.buckets
            .get(field)
            .and_then(|by_value| by_value.get(value))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `field` was indexed (allowed and present on the record type).
    pub fn has_field(&self, field: &str) -> bool {
        self.buckets.contains_key(field)
    }

    /// Number of indexed fields.
    pub fn field_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct values for an indexed field.
    pub fn bucket_count(&self, field: &str) -> usize {
        self.buckets.get(field).map(HashMap::len).unwrap_or(0)
    }

    /// Total positions stored for a field, counted with multiplicity.
    ///
    /// For an indexed field this equals the size of the source collection,
    /// since every record lands in exactly one bucket.
    pub fn entry_count(&self, field: &str) -> usize {
        self.buckets
            .get(field)
            .map(|by_value| by_value.values().map(Vec::len).sum())
            .unwrap_or(0)
    }
}
