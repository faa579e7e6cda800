//! Person-to-person relation model.

use serde::{Deserialize, Serialize};

use crate::model::person::PersonId;

/// Stable identifier for a relation record.
pub type RelationId = String;

/// Directed edge between two persons (`source` knows `target` as ...).
///
/// Relations are read-only pass-through data for the core services:
/// person updates carry them unchanged and no service mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: RelationId,
    pub source_id: PersonId,
    pub target_id: PersonId,
    /// Free-form label, e.g. `同僚` or `紹介`.
    pub relation_type: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}
