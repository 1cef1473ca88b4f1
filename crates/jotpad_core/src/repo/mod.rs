//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the note persistence contract used by the store/controller.
//! - Isolate the flat key/value layout and its SQL details from business
//!   orchestration.
//!
//! # Invariants
//! - Absent rows default silently on read; corrupt rows are rejected.
//! - Writes replace the whole persisted note image, never a single entry.

pub mod prefs_repo;
