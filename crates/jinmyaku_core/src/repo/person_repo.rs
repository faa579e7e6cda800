//! Person repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide person persistence APIs over the mock store.
//! - Own id/timestamp assignment so the write path is the single place
//!   stamps are issued.
//!
//! # Invariants
//! - `insert` assigns `person-N` ids and equal created/updated stamps.
//! - `update` replaces the stored record wholesale and restamps
//!   `updated_at` strictly monotonically.
//! - List order is `created_at` descending, id ascending as tie-break.
//!
//! # See also
//! - docs/architecture/mock-store.md

use crate::model::person::Person;
use crate::model::tag::Tag;
use crate::repo::tag_repo::fold_name;
use crate::repo::{read_store, write_store, RepoError, RepoResult};
use crate::store::SharedStore;

/// Write model for person creation; id, timestamps and the empty
/// association lists are store-assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPersonRecord {
    pub name: String,
    pub handle: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub product_name: Option<String>,
    pub memo: Option<String>,
    pub github_id: Option<String>,
    /// Resolved tag set in caller-supplied order.
    pub tags: Vec<Tag>,
}

/// Query options for person list use-cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonListQuery {
    /// Case-insensitive substring match on the person name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the company name.
    pub company: Option<String>,
}

/// Repository interface for person operations.
pub trait PersonRepository {
    /// Inserts a new person, assigning id and timestamps.
    fn insert(&self, record: NewPersonRecord) -> RepoResult<Person>;
    /// Gets one person by id.
    fn get(&self, id: &str) -> RepoResult<Option<Person>>;
    /// Lists persons matching the filter, newest `created_at` first.
    fn list(&self, query: &PersonListQuery) -> RepoResult<Vec<Person>>;
    /// Replaces the stored record matched by `person.id` and restamps
    /// `updated_at`. Fails with `RepoError::NotFound` when absent.
    fn update(&self, person: Person) -> RepoResult<Person>;
    /// Removes one person by id; returns whether a record existed.
    fn delete(&self, id: &str) -> RepoResult<bool>;
    /// Total person count.
    fn count(&self) -> RepoResult<usize>;
    /// Empties the person collection and resets the `person-N` counter.
    fn clear_mock_data(&self) -> RepoResult<()>;
    /// Appends caller-supplied seed records, observing their ids.
    fn add_mock_data(&self, records: Vec<Person>) -> RepoResult<()>;
}

/// Person repository over the shared in-memory mock store.
#[derive(Clone)]
pub struct MemoryPersonRepository {
    store: SharedStore,
}

impl MemoryPersonRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl PersonRepository for MemoryPersonRepository {
    fn insert(&self, record: NewPersonRecord) -> RepoResult<Person> {
        let mut store = write_store(&self.store, "persons.insert")?;
        let now = store.clock.now_ms();
        let person = Person {
            id: store.person_ids.generate(),
            name: record.name,
            handle: record.handle,
            company: record.company,
            position: record.position,
            description: record.description,
            product_name: record.product_name,
            memo: record.memo,
            github_id: record.github_id,
            created_at: now,
            updated_at: now,
            tags: record.tags,
            events: Vec::new(),
            relations: Vec::new(),
        };
        store.persons.push(person.clone());
        Ok(person)
    }

    fn get(&self, id: &str) -> RepoResult<Option<Person>> {
        let store = read_store(&self.store, "persons.get")?;
        Ok(store.persons.iter().find(|person| person.id == id).cloned())
    }

    fn list(&self, query: &PersonListQuery) -> RepoResult<Vec<Person>> {
        let store = read_store(&self.store, "persons.list")?;
        let name_needle = query.name.as_deref().map(fold_name);
        let company_needle = query.company.as_deref().map(fold_name);
        let mut persons: Vec<Person> = store
            .persons
            .iter()
            .filter(|person| {
                let name_hit = match name_needle.as_deref() {
                    Some(needle) => fold_name(&person.name).contains(needle),
                    None => true,
                };
                let company_hit = match company_needle.as_deref() {
                    Some(needle) => person
                        .company
                        .as_deref()
                        .is_some_and(|company| fold_name(company).contains(needle)),
                    None => true,
                };
                name_hit && company_hit
            })
            .cloned()
            .collect();
        persons.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(persons)
    }

    fn update(&self, mut person: Person) -> RepoResult<Person> {
        let mut store = write_store(&self.store, "persons.update")?;
        let Some(index) = store.persons.iter().position(|p| p.id == person.id) else {
            return Err(RepoError::NotFound(person.id));
        };
        person.updated_at = store.clock.now_ms();
        store.persons[index] = person.clone();
        Ok(person)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let mut store = write_store(&self.store, "persons.delete")?;
        let before = store.persons.len();
        store.persons.retain(|person| person.id != id);
        Ok(store.persons.len() < before)
    }

    fn count(&self) -> RepoResult<usize> {
        let store = read_store(&self.store, "persons.count")?;
        Ok(store.persons.len())
    }

    fn clear_mock_data(&self) -> RepoResult<()> {
        write_store(&self.store, "persons.clear_mock_data")?.clear_persons();
        Ok(())
    }

    fn add_mock_data(&self, records: Vec<Person>) -> RepoResult<()> {
        write_store(&self.store, "persons.add_mock_data")?.add_persons(records);
        Ok(())
    }
}
