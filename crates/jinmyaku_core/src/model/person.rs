//! Person domain model.
//!
//! # Responsibility
//! - Define the primary contact record with its embedded associations.
//!
//! # Invariants
//! - `tags` holds no duplicates and keeps the order of the most recent
//!   full replacement.
//! - `events` and `relations` are opaque carried data: person updates
//!   never rewrite them.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};

use crate::model::event::Event;
use crate::model::relation::Relation;
use crate::model::tag::Tag;

/// Stable identifier for a person (`person-N` for generated records).
pub type PersonId = String;

/// Primary contact record.
///
/// Optional scalar fields map the app schema's nullable columns; `None`
/// serializes as `null`. Serialized names are camelCase to match the
/// JSON shape the UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Stable person id.
    pub id: PersonId,
    /// Trimmed display name, never blank.
    pub name: String,
    pub handle: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub product_name: Option<String>,
    pub memo: Option<String>,
    pub github_id: Option<String>,
    /// Unix epoch milliseconds, assigned at creation and never changed.
    pub created_at: i64,
    /// Unix epoch milliseconds, strictly increasing across updates.
    pub updated_at: i64,
    /// Resolved tag set in full-replacement order, no duplicates.
    pub tags: Vec<Tag>,
    /// Result-of-join event view carried on the record.
    pub events: Vec<Event>,
    /// Directed person-to-person edges, read-only for core services.
    pub relations: Vec<Relation>,
}

#[cfg(test)]
mod tests {
    use super::Person;

    #[test]
    fn person_serializes_with_camel_case_schema_names() {
        let person = Person {
            id: "person-1".to_string(),
            name: "山田太郎".to_string(),
            handle: None,
            company: Some("テック株式会社".to_string()),
            position: None,
            description: None,
            product_name: Some("名刺管理アプリ".to_string()),
            memo: None,
            github_id: Some("taroyama".to_string()),
            created_at: 1_704_067_200_000,
            updated_at: 1_704_067_200_000,
            tags: Vec::new(),
            events: Vec::new(),
            relations: Vec::new(),
        };

        let json = serde_json::to_value(&person).expect("person should serialize");
        assert_eq!(json["productName"], "名刺管理アプリ");
        assert_eq!(json["githubId"], "taroyama");
        assert_eq!(json["createdAt"], 1_704_067_200_000_i64);
        assert!(json["handle"].is_null());
        assert!(json.get("product_name").is_none());
    }
}
