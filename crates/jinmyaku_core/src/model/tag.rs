//! Tag domain model.

use serde::{Deserialize, Serialize};

/// Stable identifier for a tag (`tag-N` for generated records).
pub type TagId = String;

/// Label attached to persons, unique case-insensitively by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable tag id.
    pub id: TagId,
    /// Trimmed display name. Uniqueness is enforced at creation time.
    pub name: String,
}

impl Tag {
    /// Creates a tag record from known id and name.
    ///
    /// Used by seed fixtures and storage; service callers go through
    /// `TagService::create`, which owns trimming and uniqueness.
    pub fn new(id: impl Into<TagId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
