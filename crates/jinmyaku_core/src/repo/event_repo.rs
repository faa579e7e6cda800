//! Event repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide event persistence APIs plus Person↔Event join-record
//!   management.
//!
//! # Invariants
//! - Join mutations are idempotent: adding an existing pair and removing
//!   a missing pair are both no-ops.
//! - List order is `date` descending with undated events last.
//! - `events_for_person` drops join records whose event no longer exists.
//!
//! # See also
//! - docs/architecture/mock-store.md

use std::cmp::Ordering;

use crate::model::event::{Event, EventParticipant};
use crate::repo::tag_repo::fold_name;
use crate::repo::{read_store, write_store, RepoError, RepoResult};
use crate::store::SharedStore;

/// Write model for event creation; the id is store-assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEventRecord {
    pub name: String,
    pub date: Option<i64>,
    pub location: Option<String>,
}

/// Query options for event list use-cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventListQuery {
    /// Case-insensitive substring match on the event name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the location.
    pub location: Option<String>,
}

/// Repository interface for event and join-record operations.
pub trait EventRepository {
    /// Inserts a new event with a generated id.
    fn insert(&self, record: NewEventRecord) -> RepoResult<Event>;
    /// Gets one event by id.
    fn get(&self, id: &str) -> RepoResult<Option<Event>>;
    /// Uniqueness probe: case-insensitive name plus exact date.
    fn find_by_name_and_date(&self, name: &str, date: Option<i64>) -> RepoResult<Option<Event>>;
    /// Lists events matching the filter, newest date first, undated last.
    fn list(&self, query: &EventListQuery) -> RepoResult<Vec<Event>>;
    /// Replaces the stored record matched by `event.id`.
    fn update(&self, event: Event) -> RepoResult<Event>;
    /// Removes one event by id; returns whether a record existed.
    fn delete(&self, id: &str) -> RepoResult<bool>;
    /// Total event count.
    fn count(&self) -> RepoResult<usize>;
    /// Adds one join record; existing pairs are left untouched.
    fn add_participant(&self, person_id: &str, event_id: &str) -> RepoResult<()>;
    /// Removes one join record; missing pairs are a no-op.
    fn remove_participant(&self, person_id: &str, event_id: &str) -> RepoResult<()>;
    /// Number of join records referencing the event.
    fn participant_count(&self, event_id: &str) -> RepoResult<usize>;
    /// Resolves the person's join records to events, dropping dangling ones.
    fn events_for_person(&self, person_id: &str) -> RepoResult<Vec<Event>>;
    /// Empties events and join records, resetting the `event-N` counter.
    fn clear_mock_data(&self) -> RepoResult<()>;
    /// Appends caller-supplied seed events, observing their ids.
    fn add_mock_data(&self, records: Vec<Event>) -> RepoResult<()>;
    /// Appends caller-supplied join records, skipping existing pairs.
    fn add_participant_mock_data(&self, records: Vec<EventParticipant>) -> RepoResult<()>;
    /// Restores the canonical event fixture including join records.
    fn reset_mock_data(&self) -> RepoResult<()>;
}

/// Event repository over the shared in-memory mock store.
#[derive(Clone)]
pub struct MemoryEventRepository {
    store: SharedStore,
}

impl MemoryEventRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl EventRepository for MemoryEventRepository {
    fn insert(&self, record: NewEventRecord) -> RepoResult<Event> {
        let mut store = write_store(&self.store, "events.insert")?;
        let event = Event {
            id: store.event_ids.generate(),
            name: record.name,
            date: record.date,
            location: record.location,
        };
        store.events.push(event.clone());
        Ok(event)
    }

    fn get(&self, id: &str) -> RepoResult<Option<Event>> {
        let store = read_store(&self.store, "events.get")?;
        Ok(store.events.iter().find(|event| event.id == id).cloned())
    }

    fn find_by_name_and_date(&self, name: &str, date: Option<i64>) -> RepoResult<Option<Event>> {
        let needle = fold_name(name);
        let store = read_store(&self.store, "events.find_by_name_and_date")?;
        Ok(store
            .events
            .iter()
            .find(|event| fold_name(&event.name) == needle && event.date == date)
            .cloned())
    }

    fn list(&self, query: &EventListQuery) -> RepoResult<Vec<Event>> {
        let store = read_store(&self.store, "events.list")?;
        let name_needle = query.name.as_deref().map(fold_name);
        let location_needle = query.location.as_deref().map(fold_name);
        let mut events: Vec<Event> = store
            .events
            .iter()
            .filter(|event| {
                let name_hit = match name_needle.as_deref() {
                    Some(needle) => fold_name(&event.name).contains(needle),
                    None => true,
                };
                let location_hit = match location_needle.as_deref() {
                    Some(needle) => event
                        .location
                        .as_deref()
                        .is_some_and(|location| fold_name(location).contains(needle)),
                    None => true,
                };
                name_hit && location_hit
            })
            .cloned()
            .collect();
        events.sort_by(compare_by_date_desc_undated_last);
        Ok(events)
    }

    fn update(&self, event: Event) -> RepoResult<Event> {
        let mut store = write_store(&self.store, "events.update")?;
        let Some(index) = store.events.iter().position(|e| e.id == event.id) else {
            return Err(RepoError::NotFound(event.id));
        };
        store.events[index] = event.clone();
        Ok(event)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let mut store = write_store(&self.store, "events.delete")?;
        let before = store.events.len();
        store.events.retain(|event| event.id != id);
        Ok(store.events.len() < before)
    }

    fn count(&self) -> RepoResult<usize> {
        let store = read_store(&self.store, "events.count")?;
        Ok(store.events.len())
    }

    fn add_participant(&self, person_id: &str, event_id: &str) -> RepoResult<()> {
        let mut store = write_store(&self.store, "events.add_participant")?;
        let exists = store
            .participants
            .iter()
            .any(|p| p.person_id == person_id && p.event_id == event_id);
        if !exists {
            store
                .participants
                .push(EventParticipant::new(person_id, event_id));
        }
        Ok(())
    }

    fn remove_participant(&self, person_id: &str, event_id: &str) -> RepoResult<()> {
        let mut store = write_store(&self.store, "events.remove_participant")?;
        store
            .participants
            .retain(|p| !(p.person_id == person_id && p.event_id == event_id));
        Ok(())
    }

    fn participant_count(&self, event_id: &str) -> RepoResult<usize> {
        let store = read_store(&self.store, "events.participant_count")?;
        Ok(store
            .participants
            .iter()
            .filter(|p| p.event_id == event_id)
            .count())
    }

    fn events_for_person(&self, person_id: &str) -> RepoResult<Vec<Event>> {
        let store = read_store(&self.store, "events.events_for_person")?;
        Ok(store
            .participants
            .iter()
            .filter(|p| p.person_id == person_id)
            .filter_map(|p| store.events.iter().find(|event| event.id == p.event_id))
            .cloned()
            .collect())
    }

    fn clear_mock_data(&self) -> RepoResult<()> {
        write_store(&self.store, "events.clear_mock_data")?.clear_events();
        Ok(())
    }

    fn add_mock_data(&self, records: Vec<Event>) -> RepoResult<()> {
        write_store(&self.store, "events.add_mock_data")?.add_events(records);
        Ok(())
    }

    fn add_participant_mock_data(&self, records: Vec<EventParticipant>) -> RepoResult<()> {
        write_store(&self.store, "events.add_participant_mock_data")?.add_participants(records);
        Ok(())
    }

    fn reset_mock_data(&self) -> RepoResult<()> {
        write_store(&self.store, "events.reset_mock_data")?.reset_events();
        Ok(())
    }
}

fn compare_by_date_desc_undated_last(a: &Event, b: &Event) -> Ordering {
    match (a.date, b.date) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::compare_by_date_desc_undated_last;
    use crate::model::event::Event;

    fn event(id: &str, date: Option<i64>) -> Event {
        Event {
            id: id.to_string(),
            name: id.to_string(),
            date,
            location: None,
        }
    }

    #[test]
    fn ordering_puts_newest_date_first_and_undated_last() {
        let mut events = vec![
            event("undated", None),
            event("old", Some(1_000)),
            event("new", Some(2_000)),
        ];
        events.sort_by(compare_by_date_desc_undated_last);
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
    }
}
