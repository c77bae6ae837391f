//! Shared category-to-weight table backing proportional allocation.
//!
//! Loaded once at startup from a flat JSON object of category names to
//! numeric weights. Readers take an `Arc` snapshot under a read lock; a
//! replacement swaps the whole map under the write lock, so no reader ever
//! observes a mix of old and new entries.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::error::WeightTableError;

/// Authoritative category-to-weight mapping. `BTreeMap` keeps iteration in
/// lexicographic order, which makes allocation output reproducible.
#[derive(Debug)]
pub struct WeightTable {
    entries: RwLock<Arc<BTreeMap<String, f64>>>,
}

impl WeightTable {
    /// Loads the table from a JSON document shaped `{ "category": weight }`.
    ///
    /// Fails if the file cannot be read, is not a flat object of numbers,
    /// is empty, contains a negative weight, or sums to zero.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WeightTableError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let parsed: BTreeMap<String, f64> = serde_json::from_str(&raw)?;
        let table = Self::from_entries(parsed)?;
        info!(source = %path.display(), categories = table.len(), "weight table loaded");
        Ok(table)
    }

    /// Builds a table from in-memory entries, with the same validation as
    /// [`WeightTable::load`].
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, f64)>,
    ) -> Result<Self, WeightTableError> {
        let map: BTreeMap<String, f64> = entries.into_iter().collect();
        validate(&map)?;
        Ok(Self { entries: RwLock::new(Arc::new(map)) })
    }

    /// Read-consistent view of the current table. Cheap: clones an `Arc`,
    /// not the map.
    pub fn snapshot(&self) -> Arc<BTreeMap<String, f64>> {
        self.entries.read().unwrap().clone()
    }

    /// Atomically replaces the whole table. Snapshots already handed out
    /// keep the map they hold.
    pub fn replace(
        &self,
        entries: impl IntoIterator<Item = (String, f64)>,
    ) -> Result<(), WeightTableError> {
        let map: BTreeMap<String, f64> = entries.into_iter().collect();
        validate(&map)?;
        *self.entries.write().unwrap() = Arc::new(map);
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

fn validate(map: &BTreeMap<String, f64>) -> Result<(), WeightTableError> {
    if map.is_empty() {
        return Err(WeightTableError::EmptyTable);
    }
    for (category, &weight) in map {
        if weight.is_nan() || weight < 0.0 {
            return Err(WeightTableError::NegativeWeight {
                category: category.clone(),
                weight,
            });
        }
    }
    let sum: f64 = map.values().sum();
    if sum <= 0.0 {
        return Err(WeightTableError::DegenerateSum { sum });
    }
    Ok(())
}
