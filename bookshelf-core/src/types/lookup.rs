//! Lookup endpoints (`/v1/file_types`, `/v1/publishers`) and the id -> name table built from them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `{id, name}` item returned by every lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupItem {
    pub id: i64,
    pub name: String,
}

pub type FileType = LookupItem;
pub type Publisher = LookupItem;

/// Id -> name table assembled from one or more lookup pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupTable {
    entries: BTreeMap<i64, String>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a page of items; later pages overwrite earlier names for the same id
    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = LookupItem>,
    {
        for item in items {
            self.entries.insert(item.id, item.name);
        }
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Names for `ids` in the given order. Unknown ids are skipped.
    pub fn resolve(&self, ids: &[i64]) -> Vec<String> {
        ids.iter()
            .filter_map(|id| self.get(*id))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name, then id
    pub fn sorted_by_name(&self) -> Vec<(i64, &str)> {
        let mut items: Vec<(i64, &str)> = self
            .entries
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        items.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));
        items
    }
}

impl FromIterator<LookupItem> for LookupTable {
    fn from_iter<I: IntoIterator<Item = LookupItem>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> LookupItem {
        LookupItem {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_resolve_skips_unknown_ids() {
        let table: LookupTable = [item(1, "pdf"), item(2, "epub")].into_iter().collect();
        assert_eq!(table.resolve(&[2, 9, 1]), vec!["epub", "pdf"]);
        assert!(table.resolve(&[]).is_empty());
    }

    #[test]
    fn test_extend_merges_pages() {
        let mut table = LookupTable::new();
        table.extend(vec![item(1, "Apress"), item(2, "Manning")]);
        table.extend(vec![item(3, "OReilly"), item(2, "Manning Publications")]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2), Some("Manning Publications"));
    }

    #[test]
    fn test_sorted_by_name() {
        let table: LookupTable = [item(5, "Packt"), item(1, "Apress"), item(3, "No Starch")]
            .into_iter()
            .collect();
        let names: Vec<&str> = table.sorted_by_name().into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Apress", "No Starch", "Packt"]);
    }
}
