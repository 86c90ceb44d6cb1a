//! Note store layer.
//!
//! # Responsibility
//! - Own the in-memory note sequence and mirror it to persisted storage.
//! - Keep serialization details away from form/gallery orchestration.
//!
//! # Invariants
//! - Storage is read once at load; afterwards memory is the source of truth.
//! - Every successful mutation re-serializes the full sequence.

pub mod note_store;
