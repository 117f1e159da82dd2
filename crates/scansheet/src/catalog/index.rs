//! The catalog: a keyed list of dataset records under one store key.

use std::collections::HashSet;

use chrono::Utc;

use crate::error::Result;

use super::names::resolve_unique;
use super::record::DatasetRecord;
use super::store::ByteStore;

/// Store key the serialized record list lives under.
pub const CATALOG_KEY: &str = "datasets";

/// Durable collection of datasets, keyed by record id.
///
/// Reads fail soft: an absent or corrupt blob yields an empty catalog,
/// never a crash and never partially-parsed records. Writes rewrite the
/// entire list and propagate store failures.
pub struct Catalog<S: ByteStore> {
    store: S,
}

impl<S: ByteStore> Catalog<S> {
    /// Create a catalog over a byte store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All records, most-recently-created first.
    pub fn list(&self) -> Vec<DatasetRecord> {
        let bytes = match self.store.get(CATALOG_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) | Err(_) => return Vec::new(),
        };

        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Fetch one record by id.
    pub fn get(&self, id: &str) -> Option<DatasetRecord> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Store a new dataset under a collision-safe name and return it.
    pub fn create(
        &self,
        name: &str,
        media_type: &str,
        data: Vec<Vec<String>>,
    ) -> Result<DatasetRecord> {
        self.insert(DatasetRecord::new(name, media_type, data))
    }

    /// [`Catalog::create`] with an informational size hint attached.
    pub fn create_with_size(
        &self,
        name: &str,
        media_type: &str,
        data: Vec<Vec<String>>,
        size_hint: &str,
    ) -> Result<DatasetRecord> {
        self.insert(DatasetRecord::new(name, media_type, data).with_size_hint(size_hint))
    }

    fn insert(&self, mut record: DatasetRecord) -> Result<DatasetRecord> {
        let mut records = self.list();

        let existing: HashSet<String> = records.iter().map(|r| r.display_name.clone()).collect();
        record.display_name = resolve_unique(&record.display_name, &existing);

        records.insert(0, record.clone());
        self.persist(&records)?;

        Ok(record)
    }

    /// Replace a record's data snapshot and stamp `updated_at`.
    ///
    /// A missing id is a silent no-op (the record was deleted elsewhere);
    /// the return value reports whether a record was found.
    pub fn update(
        &self,
        id: &str,
        mutator: impl FnOnce(Vec<Vec<String>>) -> Vec<Vec<String>>,
    ) -> Result<bool> {
        let mut records = self.list();

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };

        let old = std::mem::take(&mut record.data);
        record.data = mutator(old);
        record.updated_at = Utc::now();

        self.persist(&records)?;
        Ok(true)
    }

    /// Remove a record. No-op if the id is absent.
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut records = self.list();
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() != before {
            self.persist(&records)?;
        }
        Ok(())
    }

    /// Rename a record, re-resolving collisions against every stored name
    /// except the record's own current one.
    ///
    /// Returns the resolved name, or `None` if the id is absent.
    pub fn rename(&self, id: &str, new_name: &str) -> Result<Option<String>> {
        let mut records = self.list();

        let existing: HashSet<String> = records
            .iter()
            .filter(|r| r.id != id)
            .map(|r| r.display_name.clone())
            .collect();

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        let resolved = resolve_unique(new_name, &existing);
        record.display_name = resolved.clone();
        record.updated_at = Utc::now();

        self.persist(&records)?;
        Ok(Some(resolved))
    }

    fn persist(&self, records: &[DatasetRecord]) -> Result<()> {
        let bytes = serde_json::to_vec(records)?;
        self.store.set(CATALOG_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryStore;

    fn sample_grid() -> Vec<Vec<String>> {
        vec![
            vec!["h1".to_string(), "h2".to_string()],
            vec!["x".to_string(), "y".to_string()],
        ]
    }

    #[test]
    fn test_list_is_empty_without_a_blob() {
        let catalog = Catalog::new(MemoryStore::new());
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_list_degrades_on_corrupt_blob() {
        let store = MemoryStore::new();
        store.set(CATALOG_KEY, b"{not json").unwrap();

        let catalog = Catalog::new(store);
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_create_prepends() {
        let catalog = Catalog::new(MemoryStore::new());
        catalog.create("first.csv", "text/csv", sample_grid()).unwrap();
        catalog.create("second.csv", "text/csv", sample_grid()).unwrap();

        let names: Vec<String> = catalog.list().into_iter().map(|r| r.display_name).collect();
        assert_eq!(names, vec!["second.csv", "first.csv"]);
    }

    #[test]
    fn test_create_resolves_name_collision() {
        let catalog = Catalog::new(MemoryStore::new());
        catalog.create("a.csv", "text/csv", sample_grid()).unwrap();
        let record = catalog.create("a.csv", "text/csv", sample_grid()).unwrap();

        assert_eq!(record.display_name, "a_1.csv");
    }

    #[test]
    fn test_update_replaces_data_and_stamps() {
        let catalog = Catalog::new(MemoryStore::new());
        let record = catalog.create("a.csv", "text/csv", sample_grid()).unwrap();

        let found = catalog
            .update(&record.id, |mut data| {
                data[1][0] = "patched".to_string();
                data
            })
            .unwrap();

        assert!(found);
        let stored = catalog.get(&record.id).unwrap();
        assert_eq!(stored.data[1][0], "patched");
        assert!(stored.updated_at >= stored.created_at);
    }

    #[test]
    fn test_update_missing_id_is_a_no_op() {
        let catalog = Catalog::new(MemoryStore::new());
        catalog.create("a.csv", "text/csv", sample_grid()).unwrap();

        let found = catalog.update("ds_missing", |data| data).unwrap();

        assert!(!found);
        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = Catalog::new(MemoryStore::new());
        let record = catalog.create("a.csv", "text/csv", sample_grid()).unwrap();

        catalog.remove(&record.id).unwrap();
        catalog.remove(&record.id).unwrap();

        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_rename_excludes_own_name() {
        let catalog = Catalog::new(MemoryStore::new());
        let record = catalog.create("a.csv", "text/csv", sample_grid()).unwrap();

        // Renaming to its own current name must not suffix
        let resolved = catalog.rename(&record.id, "a.csv").unwrap();
        assert_eq!(resolved.as_deref(), Some("a.csv"));
    }

    #[test]
    fn test_rename_resolves_against_other_names() {
        let catalog = Catalog::new(MemoryStore::new());
        catalog.create("taken.csv", "text/csv", sample_grid()).unwrap();
        let record = catalog.create("b.csv", "text/csv", sample_grid()).unwrap();

        let resolved = catalog.rename(&record.id, "taken.csv").unwrap();
        assert_eq!(resolved.as_deref(), Some("taken_1.csv"));
    }

    #[test]
    fn test_rename_missing_id_returns_none() {
        let catalog = Catalog::new(MemoryStore::new());
        assert_eq!(catalog.rename("ds_missing", "x.csv").unwrap(), None);
    }
}
