//! Canonical task store.
//!
//! # Responsibility
//! - Provide the only mutation surface over the ordered task sequence.
//! - Keep derived views and snapshot handoff consistent with every mutation.
//!
//! # Invariants
//! - One store owns one sequence and one ID counter; there is no process-wide
//!   store state inside the core crate.
//! - Store APIs return semantic errors (`TaskNotFound`) in addition to input
//!   validation errors.

pub mod task_store;
