//! Core domain logic for Jinmyaku, a contact/networking management app.
//! This crate is the single source of truth for business invariants; the
//! in-memory mock store reproduces the relational schema's behavior for
//! development and tests.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId, EventParticipant};
pub use model::person::{Person, PersonId};
pub use model::relation::{Relation, RelationId};
pub use model::tag::{Tag, TagId};
pub use repo::event_repo::{EventListQuery, EventRepository, MemoryEventRepository, NewEventRecord};
pub use repo::person_repo::{
    MemoryPersonRepository, NewPersonRecord, PersonListQuery, PersonRepository,
};
pub use repo::tag_repo::{MemoryTagRepository, TagListQuery, TagRepository};
pub use repo::{RepoError, RepoResult};
pub use service::event_service::{CreateEventRequest, EventService, UpdateEventRequest};
pub use service::person_service::{CreatePersonRequest, PersonService, UpdatePersonRequest};
pub use service::tag_service::TagService;
pub use service::{MemoryServices, ServiceError, ServiceResult};
pub use store::{MockStore, SharedStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
