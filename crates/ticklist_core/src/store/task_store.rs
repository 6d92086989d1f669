//! In-memory task store and its mutation surface.
//!
//! # Responsibility
//! - Own the canonical ordered task sequence and the ID generator.
//! - Provide add/toggle/delete mutations plus derived active/completed views.
//! - Snapshot/restore the sequence across host teardown/recreate cycles.
//!
//! # Invariants
//! - Views are computed from the canonical sequence on every read, never
//!   cached, so no read can observe a stale view after a mutation.
//! - A rejected `add` leaves both the sequence and the ID counter untouched.
//! - IDs are never reused within one store lifetime, even after deletion.

use crate::ids::TaskIdGenerator;
use crate::model::task::{normalize_label, Task, TaskId, TaskValidationError};
use crate::snapshot::codec;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Raw input failed task validation.
    Validation(TaskValidationError),
    /// No task with the requested ID exists in the sequence.
    TaskNotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Canonical task sequence plus ID source behind one mutation surface.
///
/// The store is deliberately single-threaded state. Hosts that may call in
/// from more than one thread must wrap the whole store in a single mutex so
/// sequence and counter stay atomic with respect to each other.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: TaskIdGenerator,
}

impl TaskStore {
    /// Creates an empty store with a fresh ID counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task built from raw user input at the front of the sequence.
    ///
    /// # Contract
    /// - Blank-after-trim input fails with `Validation` and consumes no ID.
    /// - The created task starts not-done and becomes the newest row.
    /// - Returns a clone of the created task.
    pub fn add(&mut self, raw_label: &str) -> StoreResult<Task> {
        // Validate before touching the counter: a rejected add must not
        // consume an ID.
        let label = normalize_label(raw_label)?;

        let task = Task {
            id: self.ids.next_id(),
            label,
            is_done: false,
        };
        debug!("event=task_add module=store status=ok id={}", task.id);

        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Flips the done flag of the task with `id`, preserving its position.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<()> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle_done();
                debug!(
                    "event=task_toggle module=store status=ok id={id} is_done={}",
                    task.is_done
                );
                Ok(())
            }
            None => {
                warn!("event=task_toggle module=store status=not_found id={id}");
                Err(StoreError::TaskNotFound(id))
            }
        }
    }

    /// Removes the task with `id` from the sequence, whatever its done state.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!("event=task_delete module=store status=ok id={id}");
                Ok(())
            }
            None => {
                warn!("event=task_delete module=store status=not_found id={id}");
                Err(StoreError::TaskNotFound(id))
            }
        }
    }

    /// Tasks not yet done, in store order (newest first).
    pub fn active_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_active())
            .cloned()
            .collect()
    }

    /// Tasks already done, in store order.
    pub fn completed_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| !task.is_active())
            .cloned()
            .collect()
    }

    /// The canonical sequence, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks in the sequence, whatever their done state.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the sequence holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Encodes the full sequence for transient handoff to the host.
    ///
    /// The host captures this right before teardown and feeds it back to
    /// [`TaskStore::restore`] after recreation.
    pub fn snapshot(&self) -> Vec<String> {
        let lines = codec::encode(&self.tasks);
        info!(
            "event=state_snapshot module=store status=ok tasks={}",
            lines.len()
        );
        lines
    }

    /// Rebuilds a store from a previously captured snapshot.
    ///
    /// Restore is total: malformed records degrade per codec rules instead
    /// of failing, and the ID counter is seeded above every restored ID so
    /// later adds stay unique and strictly increasing. A degraded record may
    /// carry an empty label; only the add path enforces non-blank labels.
    pub fn restore(lines: &[String]) -> Self {
        let decoded = codec::decode(lines);
        info!(
            "event=state_restore module=store status=ok tasks={}",
            decoded.tasks.len()
        );
        Self {
            tasks: decoded.tasks,
            ids: decoded.ids,
        }
    }
}
