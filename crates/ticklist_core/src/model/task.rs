//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record behind every rendered task row.
//! - Provide lifecycle helpers for the done/undone flip.
//!
//! # Invariants
//! - `id` is stable and never reassigned to another task in the same store.
//! - `label` is non-blank for every task created through validation; it is
//!   immutable after creation (there is no relabel operation).
//! - `is_done` is the only field that changes after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every task issued by one store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Validation errors for raw task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Input is empty or whitespace-only after trimming.
    EmptyLabel,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "task label cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Validates and normalizes raw label input.
///
/// Returns the trimmed label, or `EmptyLabel` when nothing remains after
/// trimming. Callers allocate an ID only after this succeeds, so rejected
/// input never consumes one.
pub fn normalize_label(raw_label: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw_label.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyLabel);
    }
    Ok(trimmed.to_string())
}

/// Canonical domain record for one to-do entry.
///
/// The store keeps tasks in a single ordered sequence; a task belongs to the
/// active or the completed view depending on `is_done` alone, so it can never
/// appear in both views or in neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-issued ID, strictly increasing over the store lifetime.
    pub id: TaskId,
    /// User-entered text, trimmed at creation.
    pub label: String,
    /// Done flag driving the active/completed split.
    pub is_done: bool,
}

impl Task {
    /// Creates a not-done task from raw user input.
    ///
    /// # Invariants
    /// - `raw_label` is trimmed before validation; blank input is rejected.
    /// - `is_done` starts as `false`.
    pub fn new(id: TaskId, raw_label: &str) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id,
            label: normalize_label(raw_label)?,
            is_done: false,
        })
    }

    /// Flips the done flag in place, preserving identity and position.
    pub fn toggle_done(&mut self) {
        self.is_done = !self.is_done;
    }

    /// Returns whether this task belongs to the active view.
    pub fn is_active(&self) -> bool {
        !self.is_done
    }
}
