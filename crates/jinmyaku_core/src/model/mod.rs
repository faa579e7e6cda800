//! Domain model for contact/networking records.
//!
//! # Responsibility
//! - Define the canonical records shared by the service and FFI layers.
//! - Keep serialized field naming aligned with the app's JSON schema.
//!
//! # Invariants
//! - Every record is identified by a synthetic per-namespace string id.
//! - Timestamps are Unix epoch milliseconds.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod event;
pub mod person;
pub mod relation;
pub mod tag;
