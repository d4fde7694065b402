//! Field name to column index mapping

use ahash::AHashMap;

use crate::error::{RecordError, RecordResult};

/// Ordered mapping from field name to zero-based column index.
///
/// This is the canonical table every header strategy resolves into: once
/// built it is immutable and shared by every record the reader yields.
/// Iteration order is insertion order; names are unique.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: Vec<(String, usize)>,
    lookup: AHashMap<String, usize>,
}

impl FieldMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Fails on a duplicate name.
    pub fn insert(&mut self, name: impl Into<String>, index: usize) -> RecordResult<()> {
        let name = name.into();
        if self.lookup.contains_key(&name) {
            return Err(RecordError::DuplicateField(name));
        }
        self.lookup.insert(name.clone(), index);
        self.entries.push((name, index));
        Ok(())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field name at ordinal position `i`.
    pub fn name(&self, i: usize) -> Option<&str> {
        self.entries.get(i).map(|(name, _)| name.as_str())
    }

    /// Column index a field name maps to.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    /// Iterate `(name, column index)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, idx)| (name.as_str(), *idx))
    }
}
