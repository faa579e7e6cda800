//! In-memory mock store emulating the app's relational schema.
//!
//! # Responsibility
//! - Own the backing collections for persons, tags, events and the
//!   Person↔Event join records.
//! - Generate synthetic per-namespace ids and strictly increasing
//!   update timestamps.
//! - Provide the clear/add/reset lifecycle the test harness relies on.
//!
//! # Invariants
//! - A store instance is explicit state passed by handle; there is no
//!   module-global collection.
//! - Generated ids never collide with seeded ids of the same namespace
//!   (`IdSequence::observe` advances past them).
//! - `MonotonicClock` never returns the same stamp twice per store.
//!
//! # See also
//! - docs/architecture/mock-store.md

use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::event::{Event, EventParticipant};
use crate::model::person::Person;
use crate::model::tag::Tag;

pub mod seed;

/// Shared store handle used by repositories, tests and the FFI layer.
pub type SharedStore = Arc<RwLock<MockStore>>;

static NUMBERED_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<ns>.+)-(?P<n>\d+)$").expect("valid numbered id regex"));

/// Synthetic id generator for one entity namespace (`person-1`, `person-2`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    namespace: &'static str,
    next: u64,
}

impl IdSequence {
    pub fn new(namespace: &'static str) -> Self {
        Self { namespace, next: 1 }
    }

    /// Returns the next id in this namespace and advances the counter.
    pub fn generate(&mut self) -> String {
        let id = format!("{}-{}", self.namespace, self.next);
        self.next += 1;
        id
    }

    /// Advances the counter past `id` when it belongs to this namespace.
    ///
    /// Ids whose prefix is a different namespace (`test-person-1` seen by
    /// the `person` sequence) are ignored, so caller-supplied seed records
    /// never make later generated ids collide.
    pub fn observe(&mut self, id: &str) {
        let Some(caps) = NUMBERED_ID_RE.captures(id) else {
            return;
        };
        if &caps["ns"] != self.namespace {
            return;
        }
        if let Ok(n) = caps["n"].parse::<u64>() {
            if n >= self.next {
                self.next = n + 1;
            }
        }
    }

    /// Restores the counter to its initial value.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

/// Epoch-millisecond clock that never repeats a stamp.
///
/// Two back-to-back updates within the same wall-clock millisecond still
/// get strictly increasing `updated_at` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonotonicClock {
    last_ms: i64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current stamp, strictly greater than every stamp this
    /// clock returned before.
    pub fn now_ms(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_ms = if now > self.last_ms {
            now
        } else {
            self.last_ms + 1
        };
        self.last_ms
    }
}

/// In-memory stand-in for the relational database.
///
/// Collections are plain vectors; relational behavior (uniqueness,
/// referential protection, join semantics) is enforced by the service
/// layer on top. Repositories lock the store once per operation.
#[derive(Debug)]
pub struct MockStore {
    pub(crate) persons: Vec<Person>,
    pub(crate) tags: Vec<Tag>,
    pub(crate) events: Vec<Event>,
    pub(crate) participants: Vec<EventParticipant>,
    pub(crate) person_ids: IdSequence,
    pub(crate) tag_ids: IdSequence,
    pub(crate) event_ids: IdSequence,
    pub(crate) clock: MonotonicClock,
}

impl MockStore {
    /// Creates an empty store with fresh id counters.
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
            tags: Vec::new(),
            events: Vec::new(),
            participants: Vec::new(),
            person_ids: IdSequence::new("person"),
            tag_ids: IdSequence::new("tag"),
            event_ids: IdSequence::new("event"),
            clock: MonotonicClock::new(),
        }
    }

    /// Creates a store pre-populated with the canonical fixture.
    pub fn with_seed() -> Self {
        let mut store = Self::new();
        seed::apply(&mut store);
        store
    }

    /// Wraps the store into the shared handle repositories expect.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Empties every collection and restores the canonical fixture.
    pub fn reset(&mut self) {
        *self = Self::with_seed();
        debug!("event=mock_store_reset module=store status=ok");
    }

    pub(crate) fn clear_tags(&mut self) {
        self.tags.clear();
        self.tag_ids.reset();
        debug!("event=mock_tags_cleared module=store status=ok");
    }

    pub(crate) fn add_tags(&mut self, records: Vec<Tag>) {
        for tag in &records {
            self.tag_ids.observe(&tag.id);
        }
        self.tags.extend(records);
    }

    pub(crate) fn reset_tags(&mut self) {
        self.clear_tags();
        seed::seed_tags(self);
    }

    pub(crate) fn clear_persons(&mut self) {
        self.persons.clear();
        self.person_ids.reset();
        debug!("event=mock_persons_cleared module=store status=ok");
    }

    pub(crate) fn add_persons(&mut self, records: Vec<Person>) {
        for person in &records {
            self.person_ids.observe(&person.id);
        }
        self.persons.extend(records);
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
        self.participants.clear();
        self.event_ids.reset();
        debug!("event=mock_events_cleared module=store status=ok");
    }

    pub(crate) fn add_events(&mut self, records: Vec<Event>) {
        for event in &records {
            self.event_ids.observe(&event.id);
        }
        self.events.extend(records);
    }

    pub(crate) fn add_participants(&mut self, records: Vec<EventParticipant>) {
        for record in records {
            let exists = self
                .participants
                .iter()
                .any(|p| p.person_id == record.person_id && p.event_id == record.event_id);
            if !exists {
                self.participants.push(record);
            }
        }
    }

    pub(crate) fn reset_events(&mut self) {
        self.clear_events();
        seed::seed_events(self);
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdSequence, MockStore, MonotonicClock};

    #[test]
    fn id_sequence_generates_monotonic_namespace_ids() {
        let mut seq = IdSequence::new("tag");
        assert_eq!(seq.generate(), "tag-1");
        assert_eq!(seq.generate(), "tag-2");
    }

    #[test]
    fn id_sequence_observe_skips_past_seeded_ids() {
        let mut seq = IdSequence::new("tag");
        seq.observe("tag-14");
        assert_eq!(seq.generate(), "tag-15");
    }

    #[test]
    fn id_sequence_observe_ignores_foreign_namespaces() {
        let mut seq = IdSequence::new("person");
        seq.observe("test-person-7");
        seq.observe("event-9");
        seq.observe("not-a-numbered-id");
        assert_eq!(seq.generate(), "person-1");
    }

    #[test]
    fn id_sequence_observe_keeps_highest_seen_value() {
        let mut seq = IdSequence::new("event");
        seq.observe("event-5");
        seq.observe("event-2");
        assert_eq!(seq.generate(), "event-6");
    }

    #[test]
    fn monotonic_clock_never_repeats_a_stamp() {
        let mut clock = MonotonicClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        let third = clock.now_ms();
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn seeded_store_continues_tag_counter_after_fixture() {
        let mut store = MockStore::with_seed();
        assert_eq!(store.tags.len(), 14);
        assert_eq!(store.tag_ids.generate(), "tag-15");
    }

    #[test]
    fn reset_restores_fixture_after_mutation() {
        let mut store = MockStore::with_seed();
        store.clear_tags();
        store.clear_persons();
        assert!(store.tags.is_empty());

        store.reset();
        assert_eq!(store.tags.len(), 14);
        assert!(store.persons.iter().any(|p| p.id == "test-person-1"));
        assert!(!store.participants.is_empty());
    }
}
