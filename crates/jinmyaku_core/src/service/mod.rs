//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operation set the UI consumes.
//! - Own every domain rule: validation, uniqueness, referential
//!   protection, full-replace association semantics.
//!
//! # Invariants
//! - Services validate before mutating; a failed operation leaves the
//!   store untouched.
//! - `ServiceError` `Display` output is the user-facing contract — the
//!   app matches on these exact strings.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::repo::event_repo::MemoryEventRepository;
use crate::repo::person_repo::MemoryPersonRepository;
use crate::repo::tag_repo::MemoryTagRepository;
use crate::repo::RepoError;
use crate::service::event_service::EventService;
use crate::service::person_service::PersonService;
use crate::service::tag_service::TagService;
use crate::store::SharedStore;

pub mod event_service;
pub mod person_service;
pub mod tag_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain error surfaced to UI callers.
#[derive(Debug)]
pub enum ServiceError {
    /// Person or event name is blank after trimming.
    MissingName,
    /// Tag name is blank after trimming.
    MissingTagName,
    /// Update targeted a person id that does not exist.
    PersonNotFound,
    /// Update targeted an event id that does not exist.
    EventNotFound,
    /// A tag with the same case-insensitive name already exists. Carries
    /// the trimmed input name, not the stored casing.
    DuplicateTag(String),
    /// An event with the same case-insensitive name and date already
    /// exists. Carries the trimmed input name.
    DuplicateEvent(String),
    /// The event still has join records and cannot be deleted. Carries
    /// the current participant count.
    EventHasParticipants(usize),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "名前は必須項目です"),
            Self::MissingTagName => write!(f, "タグ名は必須項目です"),
            Self::PersonNotFound => write!(f, "指定された人物が見つかりません"),
            Self::EventNotFound => write!(f, "指定されたイベントが見つかりません"),
            Self::DuplicateTag(name) => write!(f, "タグ「{name}」は既に存在します"),
            Self::DuplicateEvent(name) => write!(f, "イベント「{name}」は既に存在します"),
            Self::EventHasParticipants(count) => {
                write!(f, "このイベントには{count}人の参加者がいるため削除できません")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Bundle of memory-backed services sharing one mock store.
///
/// This is the assembly point where the in-memory implementation is
/// selected; a database-backed bundle would wire the same services over
/// different repositories.
pub struct MemoryServices {
    pub persons: PersonService<MemoryPersonRepository, MemoryTagRepository>,
    pub tags: TagService<MemoryTagRepository>,
    pub events: EventService<MemoryEventRepository>,
}

impl MemoryServices {
    pub fn new(store: SharedStore) -> Self {
        let tags = TagService::new(MemoryTagRepository::new(store.clone()));
        let persons = PersonService::new(MemoryPersonRepository::new(store.clone()), tags.clone());
        let events = EventService::new(MemoryEventRepository::new(store));
        Self {
            persons,
            tags,
            events,
        }
    }
}
