//! Tag repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide tag persistence APIs plus the name-normalization helpers
//!   every case-insensitive call site shares.
//!
//! # Invariants
//! - `fold_name` is the single definition of case-insensitive equality;
//!   uniqueness checks and substring filters must not diverge from it.
//! - `list_sorted` orders ascending by `collation_key`.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::tag::Tag;
use crate::repo::{read_store, write_store, RepoResult};
use crate::store::SharedStore;

/// Normalizes a name for case-insensitive comparison: trim, then Unicode
/// lowercase.
pub fn fold_name(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Ascending sort key for tag listings: case-folded name first, original
/// spelling as tie-break so equal-folded names keep a stable order.
///
/// ASCII names sort exactly as the host collation; Japanese names order
/// by Unicode scalar value (hiragana before katakana before kanji).
pub fn collation_key(value: &str) -> (String, String) {
    (value.to_lowercase(), value.to_string())
}

/// Query options for tag list use-cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListQuery {
    /// Case-insensitive substring match on the tag name.
    pub name: Option<String>,
}

/// Repository interface for tag operations.
pub trait TagRepository {
    /// Inserts a new tag with a generated id, returning the stored record.
    fn insert(&self, name: String) -> RepoResult<Tag>;
    /// Gets one tag by id.
    fn get(&self, id: &str) -> RepoResult<Option<Tag>>;
    /// Case-insensitive exact name lookup.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Tag>>;
    /// Lists tags matching the filter, in insertion order.
    fn list(&self, query: &TagListQuery) -> RepoResult<Vec<Tag>>;
    /// Lists every tag ascending by collation key.
    fn list_sorted(&self) -> RepoResult<Vec<Tag>>;
    /// Removes one tag by id; returns whether a record existed.
    fn delete(&self, id: &str) -> RepoResult<bool>;
    /// Total tag count.
    fn count(&self) -> RepoResult<usize>;
    /// Empties the tag collection and resets the `tag-N` counter.
    fn clear_mock_data(&self) -> RepoResult<()>;
    /// Appends caller-supplied seed records, observing their ids.
    fn add_mock_data(&self, records: Vec<Tag>) -> RepoResult<()>;
    /// Restores the canonical tag fixture.
    fn reset_mock_data(&self) -> RepoResult<()>;
}

/// Tag repository over the shared in-memory mock store.
#[derive(Clone)]
pub struct MemoryTagRepository {
    store: SharedStore,
}

impl MemoryTagRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl TagRepository for MemoryTagRepository {
    fn insert(&self, name: String) -> RepoResult<Tag> {
        let mut store = write_store(&self.store, "tags.insert")?;
        let tag = Tag {
            id: store.tag_ids.generate(),
            name,
        };
        store.tags.push(tag.clone());
        Ok(tag)
    }

    fn get(&self, id: &str) -> RepoResult<Option<Tag>> {
        let store = read_store(&self.store, "tags.get")?;
        Ok(store.tags.iter().find(|tag| tag.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Tag>> {
        let needle = fold_name(name);
        let store = read_store(&self.store, "tags.find_by_name")?;
        Ok(store
            .tags
            .iter()
            .find(|tag| fold_name(&tag.name) == needle)
            .cloned())
    }

    fn list(&self, query: &TagListQuery) -> RepoResult<Vec<Tag>> {
        let store = read_store(&self.store, "tags.list")?;
        let needle = query.name.as_deref().map(fold_name);
        Ok(store
            .tags
            .iter()
            .filter(|tag| match needle.as_deref() {
                Some(needle) => fold_name(&tag.name).contains(needle),
                None => true,
            })
            .cloned()
            .collect())
    }

    fn list_sorted(&self) -> RepoResult<Vec<Tag>> {
        let store = read_store(&self.store, "tags.list_sorted")?;
        let mut tags = store.tags.clone();
        tags.sort_by(|a, b| collation_key(&a.name).cmp(&collation_key(&b.name)));
        Ok(tags)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let mut store = write_store(&self.store, "tags.delete")?;
        let before = store.tags.len();
        store.tags.retain(|tag| tag.id != id);
        Ok(store.tags.len() < before)
    }

    fn count(&self) -> RepoResult<usize> {
        let store = read_store(&self.store, "tags.count")?;
        Ok(store.tags.len())
    }

    fn clear_mock_data(&self) -> RepoResult<()> {
        write_store(&self.store, "tags.clear_mock_data")?.clear_tags();
        Ok(())
    }

    fn add_mock_data(&self, records: Vec<Tag>) -> RepoResult<()> {
        write_store(&self.store, "tags.add_mock_data")?.add_tags(records);
        Ok(())
    }

    fn reset_mock_data(&self) -> RepoResult<()> {
        write_store(&self.store, "tags.reset_mock_data")?.reset_tags();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{collation_key, fold_name};

    #[test]
    fn fold_name_trims_and_lowercases() {
        assert_eq!(fold_name("  React  "), "react");
        assert_eq!(fold_name("TypeScript"), "typescript");
        assert_eq!(fold_name("デザイン"), "デザイン");
    }

    #[test]
    fn collation_key_orders_case_insensitively_with_stable_tiebreak() {
        let mut names = vec!["flutter", "AWS", "react", "Flutter"];
        names.sort_by(|a, b| collation_key(a).cmp(&collation_key(b)));
        assert_eq!(names, vec!["AWS", "Flutter", "flutter", "react"]);
    }
}
