use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::part::PartRecord;

/// Immutable view of the catalog for one matching or drawing pass.
///
/// Cloning is an `Arc` bump; a refresh swaps in a new snapshot rather than
/// mutating this one, so a pass never observes a half-updated catalog.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    parts: Arc<[PartRecord]>,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogSnapshot {
    /// Wrap rows as-is, in order, without validation.
    pub fn new(parts: Vec<PartRecord>) -> Self {
        Self {
            parts: Arc::from(parts),
        }
    }

    /// Build a snapshot from untrusted rows. Rows failing
    /// [`PartRecord::validate`] and repeated part numbers are dropped with a
    /// warning; catalog order of the survivors is preserved.
    pub fn from_rows(rows: Vec<PartRecord>) -> Self {
        let total = rows.len();
        let mut seen: HashSet<String> = HashSet::with_capacity(total);
        let mut kept = Vec::with_capacity(total);

        for row in rows {
            if let Err(err) = row.validate() {
                warn!(error = %err, "catalog_row_rejected");
                continue;
            }
            if !seen.insert(row.part_number.clone()) {
                warn!(part_number = %row.part_number, "catalog_row_duplicate");
                continue;
            }
            kept.push(row);
        }

        if kept.len() != total {
            warn!(total, kept = kept.len(), "catalog_rows_dropped");
        }
        Self::new(kept)
    }

    pub fn parts(&self) -> &[PartRecord] {
        &self.parts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartRecord> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Exact lookup by part number.
    pub fn find(&self, part_number: &str) -> Option<&PartRecord> {
        self.parts.iter().find(|part| part.part_number == part_number)
    }
}

impl<'a> IntoIterator for &'a CatalogSnapshot {
    type Item = &'a PartRecord;
    type IntoIter = std::slice::Iter<'a, PartRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Refreshable catalog holder shared between a data-access task and readers.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    current: RwLock<CatalogSnapshot>,
}

impl SharedCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: RwLock::new(snapshot),
        }
    }

    /// Copy-on-read: the returned snapshot stays valid across refreshes.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Atomically publish a new snapshot.
    pub fn replace(&self, snapshot: CatalogSnapshot) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_and_duplicate_rows_are_dropped_in_order() {
        let rows = vec![
            PartRecord::new("A", 4.0, 10.0, 4.5, 5.75),
            PartRecord::new("B", 4.0, 10.0, 6.0, 5.0),
            PartRecord::new("C", 6.0, 12.0, 6.5, 8.0),
            PartRecord::new("A", 8.0, 16.0, 8.5, 10.0),
        ];
        let snapshot = CatalogSnapshot::from_rows(rows);
        let numbers: Vec<&str> = snapshot.iter().map(|p| p.part_number.as_str()).collect();
        assert_eq!(numbers, vec!["A", "C"]);
        assert_eq!(snapshot.find("A").map(|p| p.pipe_size), Some(4.0));
    }

    #[test]
    fn earlier_snapshot_survives_refresh() {
        let shared = SharedCatalog::new(CatalogSnapshot::new(vec![PartRecord::new(
            "OLD", 4.0, 10.0, 4.5, 5.75,
        )]));
        let before = shared.snapshot();
        shared.replace(CatalogSnapshot::new(vec![
            PartRecord::new("NEW-1", 4.0, 10.0, 4.5, 5.75),
            PartRecord::new("NEW-2", 6.0, 12.0, 6.5, 8.0),
        ]));
        assert_eq!(before.len(), 1);
        assert!(before.find("OLD").is_some());
        assert_eq!(shared.snapshot().len(), 2);
    }
}
