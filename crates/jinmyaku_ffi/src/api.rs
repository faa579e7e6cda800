//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for UI integration: envelopes carry the
//!   exact domain message strings the screens match on.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All calls operate on one process-global seeded mock store.
//!
//! # See also
//! - docs/architecture/mock-store.md

use std::sync::OnceLock;

use jinmyaku_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CreatePersonRequest, MemoryServices, MockStore, PersonListQuery, SharedStore,
};

static STORE: OnceLock<SharedStore> = OnceLock::new();

fn shared_store() -> SharedStore {
    STORE
        .get_or_init(|| MockStore::with_seed().into_shared())
        .clone()
}

fn services() -> MemoryServices {
    MemoryServices::new(shared_store())
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for contact command flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created/affected record id when one exists.
    pub id: Option<String>,
    /// Domain message; on failure this is the exact string the UI
    /// matches on.
    pub message: String,
}

impl ContactActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// List item projection for contact search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListItem {
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub tag_names: Vec<String>,
}

/// Search response envelope for contact list flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSearchResponse {
    /// Matching contacts, newest first.
    pub items: Vec<ContactListItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Searches contacts by optional name/company substring filters.
///
/// # FFI contract
/// - Sync call over the in-memory store.
/// - Never panics; storage errors produce an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_search(name: Option<String>, company: Option<String>) -> ContactSearchResponse {
    let query = PersonListQuery { name, company };
    match services().persons.find_many(&query) {
        Ok(persons) => {
            let items: Vec<ContactListItem> = persons
                .into_iter()
                .map(|person| ContactListItem {
                    id: person.id,
                    name: person.name,
                    company: person.company,
                    tag_names: person.tags.into_iter().map(|tag| tag.name).collect(),
                })
                .collect();
            let message = if items.is_empty() {
                "No results.".to_string()
            } else {
                format!("Found {} contact(s).", items.len())
            };
            ContactSearchResponse { items, message }
        }
        Err(err) => ContactSearchResponse {
            items: Vec::new(),
            message: err.to_string(),
        },
    }
}

/// Creates a contact, resolving or creating the supplied tag names.
///
/// # FFI contract
/// - Sync call over the in-memory store.
/// - Never panics; validation/conflict messages come back verbatim in
///   the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_create(
    name: String,
    company: Option<String>,
    tag_names: Vec<String>,
) -> ContactActionResponse {
    let services = services();
    let tag_ids = match services.tags.find_or_create_by_names(&tag_names) {
        Ok(ids) => ids,
        Err(err) => return ContactActionResponse::failure(err.to_string()),
    };
    let request = CreatePersonRequest {
        name,
        company,
        tag_ids,
        ..CreatePersonRequest::default()
    };
    match services.persons.create(request) {
        Ok(person) => ContactActionResponse::success("Contact created.", Some(person.id)),
        Err(err) => ContactActionResponse::failure(err.to_string()),
    }
}

/// Lists every tag name ascending by collation order.
///
/// # FFI contract
/// - Sync call over the in-memory store.
/// - Never panics; storage errors produce an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn tag_names_all() -> Vec<String> {
    match services().tags.find_all() {
        Ok(tags) => tags.into_iter().map(|tag| tag.name).collect(),
        Err(err) => {
            log::error!("event=tag_names_all module=ffi status=error detail={err}");
            Vec::new()
        }
    }
}

/// Adds a person to an event (idempotent).
///
/// # FFI contract
/// - Sync call over the in-memory store; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn event_join(person_id: String, event_id: String) -> ContactActionResponse {
    match services().events.add_person_to_event(&person_id, &event_id) {
        Ok(()) => ContactActionResponse::success("Joined event.", Some(event_id)),
        Err(err) => ContactActionResponse::failure(err.to_string()),
    }
}

/// Removes a person from an event (idempotent).
///
/// # FFI contract
/// - Sync call over the in-memory store; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn event_leave(person_id: String, event_id: String) -> ContactActionResponse {
    match services()
        .events
        .remove_person_from_event(&person_id, &event_id)
    {
        Ok(()) => ContactActionResponse::success("Left event.", Some(event_id)),
        Err(err) => ContactActionResponse::failure(err.to_string()),
    }
}

/// Deletes an event, surfacing the participant guard verbatim.
///
/// # FFI contract
/// - Sync call over the in-memory store; never panics.
/// - A guarded delete fails with the participant-count message the UI
///   shows directly.
#[flutter_rust_bridge::frb(sync)]
pub fn event_delete(event_id: String) -> ContactActionResponse {
    match services().events.delete(&event_id) {
        Ok(()) => ContactActionResponse::success("Event deleted.", Some(event_id)),
        Err(err) => ContactActionResponse::failure(err.to_string()),
    }
}

/// Restores the canonical mock fixture for the Dart test harness.
///
/// # FFI contract
/// - Sync call; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_mock_data() -> ContactActionResponse {
    match shared_store().write() {
        Ok(mut store) => {
            store.reset();
            ContactActionResponse::success("Mock data reset.", None)
        }
        Err(_) => ContactActionResponse::failure("mock store lock poisoned in ffi.reset"),
    }
}
