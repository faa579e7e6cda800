//! Flutter-facing FFI crate for Jinmyaku.
//!
//! # Responsibility
//! - Re-export the use-case API surface consumed by Dart via FRB.
//!
//! # Invariants
//! - No business logic lives here; everything delegates to
//!   `jinmyaku_core`.

pub mod api;
