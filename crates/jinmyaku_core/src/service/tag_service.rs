//! Tag use-case service.
//!
//! # Responsibility
//! - Provide tag CRUD plus batch resolve-or-create for tag names.
//! - Enforce case-insensitive name uniqueness at creation time.
//!
//! # Invariants
//! - Names are stored trimmed; uniqueness and lookups share `fold_name`.
//! - Blank entries in a resolve-or-create batch are skipped, never an
//!   error.
//! - Deleting an absent id is a silent no-op.

use std::collections::{HashMap, HashSet};

use crate::model::tag::{Tag, TagId};
use crate::repo::tag_repo::{TagListQuery, TagRepository};
use crate::service::{ServiceError, ServiceResult};

/// Tag service facade over repository implementations.
#[derive(Clone)]
pub struct TagService<R: TagRepository> {
    repo: R,
}

impl<R: TagRepository> TagService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one tag from its display name.
    ///
    /// # Contract
    /// - Blank name fails with `タグ名は必須項目です`.
    /// - A case-insensitive duplicate fails with
    ///   `タグ「<trimmed input>」は既に存在します`.
    /// - The stored name is the trimmed input.
    pub fn create(&self, name: &str) -> ServiceResult<Tag> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::MissingTagName);
        }
        if self.repo.find_by_name(trimmed)?.is_some() {
            return Err(ServiceError::DuplicateTag(trimmed.to_string()));
        }
        Ok(self.repo.insert(trimmed.to_string())?)
    }

    /// Gets one tag by id, `None` when absent.
    pub fn find_by_id(&self, id: &str) -> ServiceResult<Option<Tag>> {
        Ok(self.repo.get(id)?)
    }

    /// Case-insensitive exact name lookup, `None` when absent.
    pub fn find_by_name(&self, name: &str) -> ServiceResult<Option<Tag>> {
        Ok(self.repo.find_by_name(name)?)
    }

    /// Lists tags matching the filter. Order is unspecified.
    pub fn find_many(&self, query: &TagListQuery) -> ServiceResult<Vec<Tag>> {
        Ok(self.repo.list(query)?)
    }

    /// Lists every tag ascending by name collation.
    pub fn find_all(&self) -> ServiceResult<Vec<Tag>> {
        Ok(self.repo.list_sorted()?)
    }

    /// Total tag count.
    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.repo.count()?)
    }

    /// Removes one tag; an absent id is a silent no-op.
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        self.repo.delete(id)?;
        Ok(())
    }

    /// Resolves each non-blank name to an existing tag (case-insensitive)
    /// or creates one, returning ids in filtered input order.
    ///
    /// A second occurrence of the same name resolves to the id created
    /// for the first occurrence.
    pub fn find_or_create_by_names(&self, names: &[String]) -> ServiceResult<Vec<TagId>> {
        let mut ids = Vec::new();
        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }
            let tag = match self.repo.find_by_name(trimmed)? {
                Some(existing) => existing,
                None => self.repo.insert(trimmed.to_string())?,
            };
            ids.push(tag.id);
        }
        Ok(ids)
    }

    /// Resolves tag ids to stored tags in one batched lookup, preserving
    /// input order, silently dropping unknown ids and duplicate
    /// occurrences.
    pub fn resolve_ids(&self, ids: &[TagId]) -> ServiceResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let known: HashMap<TagId, Tag> = self
            .repo
            .list(&TagListQuery::default())?
            .into_iter()
            .map(|tag| (tag.id.clone(), tag))
            .collect();
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        for id in ids {
            if !seen.insert(id.clone()) {
                continue;
            }
            if let Some(tag) = known.get(id) {
                resolved.push(tag.clone());
            }
        }
        Ok(resolved)
    }

    /// Empties the tag collection and resets the id counter.
    pub fn clear_mock_data(&self) -> ServiceResult<()> {
        Ok(self.repo.clear_mock_data()?)
    }

    /// Appends caller-supplied seed records.
    pub fn add_mock_data(&self, records: Vec<Tag>) -> ServiceResult<()> {
        Ok(self.repo.add_mock_data(records)?)
    }

    /// Restores the canonical tag fixture.
    pub fn reset_mock_data(&self) -> ServiceResult<()> {
        Ok(self.repo.reset_mock_data()?)
    }
}
