//! Event use-case service.
//!
//! # Responsibility
//! - Provide event CRUD plus explicit Person↔Event join-record
//!   management.
//! - Guard event deletion while join records still reference the event.
//!
//! # Invariants
//! - (case-insensitive name, date) pairs are unique at creation; same
//!   name with a different date is allowed, and vice versa.
//! - Join mutations are idempotent in both directions.
//! - Deleting an absent id is a silent no-op; deleting a referenced
//!   event is a conflict carrying the participant count.

use crate::model::event::{Event, EventId, EventParticipant};
use crate::repo::event_repo::{EventListQuery, EventRepository, NewEventRecord};
use crate::repo::RepoError;
use crate::service::{ServiceError, ServiceResult};

/// Request model for event creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEventRequest {
    pub name: String,
    /// Unix epoch milliseconds, `None` for undated events.
    pub date: Option<i64>,
    pub location: Option<String>,
}

/// Request model for event update; name, date and location are fully
/// overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateEventRequest {
    pub id: EventId,
    pub name: String,
    pub date: Option<i64>,
    pub location: Option<String>,
}

/// Event service facade over repository implementations.
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one event.
    ///
    /// # Contract
    /// - Blank name fails with `名前は必須項目です`.
    /// - An existing event with the same case-insensitive name and the
    ///   same date fails with `イベント「<trimmed name>」は既に存在します`.
    /// - Location is trimmed; a blank location is stored as `None`.
    pub fn create(&self, request: CreateEventRequest) -> ServiceResult<Event> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::MissingName);
        }
        if self
            .repo
            .find_by_name_and_date(name, request.date)?
            .is_some()
        {
            return Err(ServiceError::DuplicateEvent(name.to_string()));
        }
        let record = NewEventRecord {
            name: name.to_string(),
            date: request.date,
            location: normalize_location(request.location),
        };
        Ok(self.repo.insert(record)?)
    }

    /// Updates one event, fully overwriting name, date and location.
    ///
    /// # Contract
    /// - Unknown id fails with `指定されたイベントが見つかりません` before
    ///   the name check.
    /// - Blank name fails with `名前は必須項目です`.
    pub fn update(&self, request: UpdateEventRequest) -> ServiceResult<Event> {
        let existing = self
            .repo
            .get(&request.id)?
            .ok_or(ServiceError::EventNotFound)?;
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::MissingName);
        }
        let updated = Event {
            id: existing.id,
            name: name.to_string(),
            date: request.date,
            location: normalize_location(request.location),
        };
        match self.repo.update(updated) {
            Ok(event) => Ok(event),
            Err(RepoError::NotFound(_)) => Err(ServiceError::EventNotFound),
            Err(other) => Err(ServiceError::Repo(other)),
        }
    }

    /// Gets one event by id, `None` when absent.
    pub fn find_by_id(&self, id: &str) -> ServiceResult<Option<Event>> {
        Ok(self.repo.get(id)?)
    }

    /// Lists events matching the filter, newest date first, undated last.
    pub fn find_many(&self, query: &EventListQuery) -> ServiceResult<Vec<Event>> {
        Ok(self.repo.list(query)?)
    }

    /// Lists every event, newest date first, undated last.
    pub fn find_all(&self) -> ServiceResult<Vec<Event>> {
        Ok(self.repo.list(&EventListQuery::default())?)
    }

    /// Total event count.
    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.repo.count()?)
    }

    /// Whether any join record references the event.
    pub fn has_participants(&self, event_id: &str) -> ServiceResult<bool> {
        Ok(self.repo.participant_count(event_id)? > 0)
    }

    /// Number of join records referencing the event.
    pub fn get_participant_count(&self, event_id: &str) -> ServiceResult<usize> {
        Ok(self.repo.participant_count(event_id)?)
    }

    /// Removes one event.
    ///
    /// # Contract
    /// - With N > 0 participants, fails with
    ///   `このイベントには<N>人の参加者がいるため削除できません`.
    /// - An absent id is a silent no-op.
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        let participant_count = self.repo.participant_count(id)?;
        if participant_count > 0 {
            return Err(ServiceError::EventHasParticipants(participant_count));
        }
        self.repo.delete(id)?;
        Ok(())
    }

    /// Adds one Person↔Event join record; an existing pair is a no-op.
    pub fn add_person_to_event(&self, person_id: &str, event_id: &str) -> ServiceResult<()> {
        Ok(self.repo.add_participant(person_id, event_id)?)
    }

    /// Removes one Person↔Event join record; a missing pair is a no-op.
    pub fn remove_person_from_event(&self, person_id: &str, event_id: &str) -> ServiceResult<()> {
        Ok(self.repo.remove_participant(person_id, event_id)?)
    }

    /// Resolves the person's join records to events, silently dropping
    /// records whose event no longer exists.
    pub fn find_events_by_person_id(&self, person_id: &str) -> ServiceResult<Vec<Event>> {
        Ok(self.repo.events_for_person(person_id)?)
    }

    /// Empties events and join records, resetting the id counter.
    pub fn clear_mock_data(&self) -> ServiceResult<()> {
        Ok(self.repo.clear_mock_data()?)
    }

    /// Appends caller-supplied seed events.
    pub fn add_mock_data(&self, records: Vec<Event>) -> ServiceResult<()> {
        Ok(self.repo.add_mock_data(records)?)
    }

    /// Appends caller-supplied join records.
    pub fn add_participant_mock_data(&self, records: Vec<EventParticipant>) -> ServiceResult<()> {
        Ok(self.repo.add_participant_mock_data(records)?)
    }

    /// Restores the canonical event fixture including join records.
    pub fn reset_mock_data(&self) -> ServiceResult<()> {
        Ok(self.repo.reset_mock_data()?)
    }
}

fn normalize_location(location: Option<String>) -> Option<String> {
    location
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::normalize_location;

    #[test]
    fn normalize_location_trims_and_drops_blank_values() {
        assert_eq!(
            normalize_location(Some("  東京・渋谷  ".to_string())),
            Some("東京・渋谷".to_string())
        );
        assert_eq!(normalize_location(Some("   ".to_string())), None);
        assert_eq!(normalize_location(None), None);
    }
}
