//! Domain model for the task-list engine.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one task-centric shape for the active/completed UI projections.
//!
//! # Invariants
//! - Every domain object is identified by a store-issued `TaskId`.
//! - Active and completed lists are derived filters, never separate storage.

pub mod task;
