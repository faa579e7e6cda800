//! Person use-case service.
//!
//! # Responsibility
//! - Provide person CRUD with tag-id resolution through the tag service.
//! - Own the full-replace semantics for a person's tag set on update.
//!
//! # Invariants
//! - Update checks existence before name validation; both precede any
//!   mutation.
//! - Every optional scalar is overwritten with the supplied value on
//!   update; `None` clears the field.
//! - `events` and `relations` are carried over unchanged by updates.

use crate::model::person::{Person, PersonId};
use crate::model::tag::TagId;
use crate::repo::person_repo::{NewPersonRecord, PersonListQuery, PersonRepository};
use crate::repo::tag_repo::TagRepository;
use crate::repo::RepoError;
use crate::service::tag_service::TagService;
use crate::service::{ServiceError, ServiceResult};

/// Request model for person creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePersonRequest {
    pub name: String,
    pub handle: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub product_name: Option<String>,
    pub memo: Option<String>,
    pub github_id: Option<String>,
    /// Tag ids to resolve; unknown ids are silently dropped.
    pub tag_ids: Vec<TagId>,
}

/// Request model for person update.
///
/// Scalars are a full overwrite: an omitted field and an explicit null
/// are the same `None` and both clear the stored value. `tag_ids` is a
/// full replacement; leaving it empty clears the tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePersonRequest {
    pub id: PersonId,
    pub name: String,
    pub handle: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub product_name: Option<String>,
    pub memo: Option<String>,
    pub github_id: Option<String>,
    pub tag_ids: Vec<TagId>,
}

/// Person service facade over repository implementations.
#[derive(Clone)]
pub struct PersonService<P: PersonRepository, T: TagRepository> {
    repo: P,
    tags: TagService<T>,
}

impl<P: PersonRepository, T: TagRepository> PersonService<P, T> {
    /// Creates a service using the provided repository and tag service.
    pub fn new(repo: P, tags: TagService<T>) -> Self {
        Self { repo, tags }
    }

    /// Creates one person.
    ///
    /// # Contract
    /// - Blank name fails with `名前は必須項目です`.
    /// - `tag_ids` resolve to full tag records; unknown ids are dropped.
    /// - `events`/`relations` start empty; both timestamps are stamped
    ///   with the same creation instant.
    pub fn create(&self, request: CreatePersonRequest) -> ServiceResult<Person> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::MissingName);
        }
        let tags = self.tags.resolve_ids(&request.tag_ids)?;
        let record = NewPersonRecord {
            name: name.to_string(),
            handle: request.handle,
            company: request.company,
            position: request.position,
            description: request.description,
            product_name: request.product_name,
            memo: request.memo,
            github_id: request.github_id,
            tags,
        };
        Ok(self.repo.insert(record)?)
    }

    /// Updates one person.
    ///
    /// # Contract
    /// - Unknown id fails with `指定された人物が見つかりません` before the
    ///   name check.
    /// - Blank name fails with `名前は必須項目です`.
    /// - The tag set is fully replaced by the resolved `tag_ids`.
    /// - `events`, `relations` and `created_at` are carried unchanged;
    ///   `updated_at` is restamped strictly greater than before.
    pub fn update(&self, request: UpdatePersonRequest) -> ServiceResult<Person> {
        let existing = self
            .repo
            .get(&request.id)?
            .ok_or(ServiceError::PersonNotFound)?;
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::MissingName);
        }
        let tags = self.tags.resolve_ids(&request.tag_ids)?;
        let updated = Person {
            id: existing.id,
            name: name.to_string(),
            handle: request.handle,
            company: request.company,
            position: request.position,
            description: request.description,
            product_name: request.product_name,
            memo: request.memo,
            github_id: request.github_id,
            created_at: existing.created_at,
            // Restamped by the repository write path.
            updated_at: existing.updated_at,
            tags,
            events: existing.events,
            relations: existing.relations,
        };
        match self.repo.update(updated) {
            Ok(person) => Ok(person),
            Err(RepoError::NotFound(_)) => Err(ServiceError::PersonNotFound),
            Err(other) => Err(ServiceError::Repo(other)),
        }
    }

    /// Gets one person by id, `None` when absent.
    pub fn find_by_id(&self, id: &str) -> ServiceResult<Option<Person>> {
        Ok(self.repo.get(id)?)
    }

    /// Lists persons matching the filter, newest `created_at` first.
    pub fn find_many(&self, query: &PersonListQuery) -> ServiceResult<Vec<Person>> {
        Ok(self.repo.list(query)?)
    }

    /// Total person count.
    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.repo.count()?)
    }

    /// Removes one person; an absent id is a silent no-op.
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        self.repo.delete(id)?;
        Ok(())
    }

    /// Empties the person collection and resets the id counter.
    pub fn clear_mock_data(&self) -> ServiceResult<()> {
        Ok(self.repo.clear_mock_data()?)
    }

    /// Appends caller-supplied seed records.
    pub fn add_mock_data(&self, records: Vec<Person>) -> ServiceResult<()> {
        Ok(self.repo.add_mock_data(records)?)
    }
}
