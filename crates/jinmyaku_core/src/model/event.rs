//! Event domain model and Person↔Event join record.

use serde::{Deserialize, Serialize};

use crate::model::person::PersonId;

/// Stable identifier for an event (`event-N` for generated records).
pub type EventId = String;

/// Networking event a person can participate in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable event id.
    pub id: EventId,
    /// Trimmed display name. (name, date) pairs are unique at creation.
    pub name: String,
    /// Unix epoch milliseconds. `None` for undated events.
    pub date: Option<i64>,
    /// Free-form venue text, trimmed, `None` when blank.
    pub location: Option<String>,
}

/// One Person↔Event association, the many-to-many join record a relational
/// schema would keep in its own table.
///
/// This list is the source of truth for participation queries and the
/// event delete guard; the `events` array embedded on a person is carried
/// result-of-join data and is never rewritten by join mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipant {
    pub person_id: PersonId,
    pub event_id: EventId,
}

impl EventParticipant {
    pub fn new(person_id: impl Into<PersonId>, event_id: impl Into<EventId>) -> Self {
        Self {
            person_id: person_id.into(),
            event_id: event_id.into(),
        }
    }
}
