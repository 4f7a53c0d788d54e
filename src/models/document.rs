use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A successfully uploaded document as shown in the documents view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadRecord {
    /// Original file name as selected by the user
    pub name: String,
    /// Human-readable size, kilobytes to one decimal place
    pub size: String,
    /// Local calendar date of the upload
    pub date: String,
}

/// Format a byte count as kilobytes with one decimal place.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// In-memory registry of uploaded documents.
///
/// Append-only: records are added when the backend confirms an upload and
/// never removed. Rendering code gets read-only access via [`records`].
///
/// [`records`]: DocumentRegistry::records
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    records: Vec<UploadRecord>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for a confirmed upload, stamped with the given time.
    pub fn add(&mut self, name: impl Into<String>, size_bytes: u64, at: DateTime<Local>) {
        self.records.push(UploadRecord {
            name: name.into(),
            size: format_size_kb(size_bytes),
            date: at.format("%Y-%m-%d").to_string(),
        });
    }

    pub fn records(&self) -> &[UploadRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_kb_one_decimal() {
        assert_eq!(format_size_kb(2048), "2.0KB");
        assert_eq!(format_size_kb(1536), "1.5KB");
        assert_eq!(format_size_kb(100), "0.1KB");
    }

    #[test]
    fn test_add_preserves_name_and_formats_size() {
        let mut registry = DocumentRegistry::new();
        registry.add("report.pdf", 2048, Local::now());

        assert_eq!(registry.len(), 1);
        let record = &registry.records()[0];
        assert_eq!(record.name, "report.pdf");
        assert_eq!(record.size, "2.0KB");
    }

    #[test]
    fn test_records_are_append_only_ordered() {
        let mut registry = DocumentRegistry::new();
        registry.add("a.txt", 100, Local::now());
        registry.add("b.txt", 200, Local::now());

        let names: Vec<_> = registry.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = DocumentRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
