//! Persisted dataset records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::new_dataset_id;

/// A persisted dataset: the full grid snapshot plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Opaque unique identifier, assigned once at creation.
    pub id: String,

    /// Display name, unique within the catalog at any point in time.
    pub display_name: String,

    /// Origin hint, e.g. "text/csv". Not authoritative.
    pub media_type: String,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,

    /// Human-readable source size, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_hint: Option<String>,

    /// Full grid snapshot, row 0 being the header.
    pub data: Vec<Vec<String>>,
}

impl DatasetRecord {
    /// Create a record with a fresh id and both timestamps set to now.
    ///
    /// The display name is stored as given; collision resolution happens
    /// in the catalog, against the names currently stored.
    pub fn new(
        display_name: impl Into<String>,
        media_type: impl Into<String>,
        data: Vec<Vec<String>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: new_dataset_id(),
            display_name: display_name.into(),
            media_type: media_type.into(),
            created_at: now,
            updated_at: now,
            size_hint: None,
            data,
        }
    }

    /// Attach a size hint.
    pub fn with_size_hint(mut self, size_hint: impl Into<String>) -> Self {
        self.size_hint = Some(size_hint.into());
        self
    }

    /// Number of data rows in the snapshot (header excluded).
    pub fn row_count(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Number of columns in the snapshot.
    pub fn column_count(&self) -> usize {
        self.data.first().map(|h| h.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Vec<Vec<String>> {
        vec![
            vec!["h".to_string()],
            vec!["x".to_string()],
        ]
    }

    #[test]
    fn test_new_record_stamps_both_timestamps() {
        let record = DatasetRecord::new("a.csv", "text/csv", sample_grid());

        assert_eq!(record.created_at, record.updated_at);
        assert!(record.id.starts_with("ds_"));
    }

    #[test]
    fn test_counts_exclude_header() {
        let record = DatasetRecord::new("a.csv", "text/csv", sample_grid());

        assert_eq!(record.row_count(), 1);
        assert_eq!(record.column_count(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = DatasetRecord::new("a.csv", "text/csv", sample_grid())
            .with_size_hint("0.01KB");

        let json = serde_json::to_string(&record).unwrap();
        let parsed: DatasetRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }

    #[test]
    fn test_size_hint_is_omitted_when_absent() {
        let record = DatasetRecord::new("a.csv", "text/csv", sample_grid());
        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains("size_hint"));
    }
}
