//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts the services orchestrate.
//! - Keep collection/lock mechanics inside the storage boundary so a
//!   database-backed implementation can slot in behind the same traits.
//!
//! # Invariants
//! - Repositories take the store lock once per operation.
//! - Returned records are owned clones, never references into the
//!   backing collections.
//!
//! # See also
//! - docs/architecture/mock-store.md

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use crate::store::{MockStore, SharedStore};

pub mod event_repo;
pub mod person_repo;
pub mod tag_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-level error for repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// The store lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// A write targeted an id that is not present.
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned(context) => write!(f, "mock store lock poisoned in {context}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for RepoError {}

pub(crate) fn read_store<'a>(
    store: &'a SharedStore,
    context: &'static str,
) -> RepoResult<RwLockReadGuard<'a, MockStore>> {
    store.read().map_err(|_| RepoError::LockPoisoned(context))
}

pub(crate) fn write_store<'a>(
    store: &'a SharedStore,
    context: &'static str,
) -> RepoResult<RwLockWriteGuard<'a, MockStore>> {
    store.write().map_err(|_| RepoError::LockPoisoned(context))
}
