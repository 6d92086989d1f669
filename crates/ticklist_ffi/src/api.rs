//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the single process-wide task store the UI talks to.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Store-backed calls funnel through one mutex so sequence and ID counter
//!   stay consistent regardless of which host thread calls in.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use ticklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Task, TaskStore,
};

static TASK_STORE: OnceLock<Mutex<TaskStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task row returned by list and mutation APIs.
///
/// Field names mirror the core `Task` so the host sees one vocabulary for
/// the same data on every surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Stable task ID issued by the core store.
    pub id: u64,
    /// Trimmed display label.
    pub label: String,
    /// Whether the task has been marked done.
    pub is_done: bool,
}

/// Generic action response envelope for task command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Row affected by the operation, when one exists.
    pub task: Option<TaskRow>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task: TaskRow) -> Self {
        Self {
            ok: true,
            task: Some(task),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        // Failure messages carry operation name and error detail but never
        // label text, so they are safe to log as-is.
        warn!("event=ffi_action module=ffi status=error detail={message}");
        Self {
            ok: false,
            task: None,
            message,
        }
    }
}

/// Restore response envelope for snapshot hand-back flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResponse {
    /// Number of task rows materialized from the snapshot lines.
    pub restored: u64,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Adds a task from raw label text.
///
/// # FFI contract
/// - Sync call against the process-wide store.
/// - Never panics.
/// - Blank labels are rejected with `ok = false` and no ID is consumed.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(label: String) -> TaskActionResponse {
    match lock_store().add(label.as_str()) {
        Ok(task) => TaskActionResponse::success("Task added.", to_task_row(&task)),
        Err(err) => TaskActionResponse::failure(format!("task_add failed: {err}")),
    }
}

/// Flips the done state of the task with `id`.
///
/// # FFI contract
/// - Sync call against the process-wide store.
/// - Never panics.
/// - Unknown IDs return `ok = false`; the store is left unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: u64) -> TaskActionResponse {
    let mut store = lock_store();
    match store.toggle(id) {
        Ok(()) => {
            let task = store.get(id).map(to_task_row);
            TaskActionResponse {
                ok: true,
                task,
                message: "Task updated.".to_string(),
            }
        }
        Err(err) => TaskActionResponse::failure(format!("task_toggle failed: {err}")),
    }
}

/// Deletes the task with `id` regardless of its done state.
///
/// # FFI contract
/// - Sync call against the process-wide store.
/// - Never panics.
/// - Unknown IDs return `ok = false`; the store is left unchanged.
/// - On success the removed row is echoed back for UI feedback.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: u64) -> TaskActionResponse {
    let mut store = lock_store();
    let removed = store.get(id).map(to_task_row);
    match store.delete(id) {
        Ok(()) => TaskActionResponse {
            ok: true,
            task: removed,
            message: "Task deleted.".to_string(),
        },
        Err(err) => TaskActionResponse::failure(format!("task_delete failed: {err}")),
    }
}

/// Lists tasks not yet marked done, newest first.
///
/// # FFI contract
/// - Sync call against the process-wide store.
/// - Never panics; returns an empty list when nothing matches.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_active() -> Vec<TaskRow> {
    lock_store().active_tasks().iter().map(to_task_row).collect()
}

/// Lists tasks marked done, newest first.
///
/// # FFI contract
/// - Sync call against the process-wide store.
/// - Never panics; returns an empty list when nothing matches.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_completed() -> Vec<TaskRow> {
    lock_store()
        .completed_tasks()
        .iter()
        .map(to_task_row)
        .collect()
}

/// Encodes the full store state into opaque snapshot lines.
///
/// The host stashes these lines across its own teardown/recreate cycle and
/// hands them back through [`state_restore`].
///
/// # FFI contract
/// - Sync call against the process-wide store.
/// - Never panics; an empty store yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn state_snapshot() -> Vec<String> {
    lock_store().snapshot()
}

/// Replaces the store with the state decoded from `lines`.
///
/// # FFI contract
/// - Sync call against the process-wide store.
/// - Never panics; malformed lines degrade per record instead of failing the
///   whole restore.
/// - An empty list resets the store to empty with a fresh ID sequence.
#[flutter_rust_bridge::frb(sync)]
pub fn state_restore(lines: Vec<String>) -> RestoreResponse {
    let restored = TaskStore::restore(&lines);
    let count = restored.len();
    *lock_store() = restored;
    RestoreResponse {
        restored: count as u64,
        message: format!("Restored {count} task(s)."),
    }
}

fn store_cell() -> &'static Mutex<TaskStore> {
    TASK_STORE.get_or_init(|| Mutex::new(TaskStore::new()))
}

fn lock_store() -> MutexGuard<'static, TaskStore> {
    // Why: a panicking host call must not wedge every later call; the plain
    // data inside stays usable, so recover the guard from poison.
    store_cell()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_task_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id,
        label: task.label.clone(),
        is_done: task.is_done,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, state_restore, state_snapshot, task_add, task_delete,
        task_toggle, tasks_active, tasks_completed, to_task_row,
    };
    use ticklist_core::Task;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn task_rows_mirror_core_task_fields() {
        let task = Task {
            id: 7,
            label: "row check".to_string(),
            is_done: true,
        };

        let row = to_task_row(&task);

        assert_eq!(row.id, task.id);
        assert_eq!(row.label, task.label);
        assert_eq!(row.is_done, task.is_done);
    }

    #[test]
    fn task_lifecycle_round_trips_through_ffi_surface() {
        // Every store-backed call below shares the one process-wide store, so
        // the whole flow runs in a single test instead of parallel tests that
        // would race on shared state.
        let reset = state_restore(Vec::new());
        assert_eq!(reset.restored, 0);
        assert!(tasks_active().is_empty());
        assert!(tasks_completed().is_empty());

        let added = task_add("  Buy milk  ".to_string());
        assert!(added.ok, "{}", added.message);
        let milk = added.task.expect("accepted add should echo the row");
        assert_eq!(milk.label, "Buy milk");
        assert!(!milk.is_done);

        let rejected = task_add("   ".to_string());
        assert!(!rejected.ok);
        assert!(rejected.task.is_none());
        assert!(rejected.message.contains("task_add failed"));

        let call = task_add("Call home".to_string())
            .task
            .expect("accepted add should echo the row");

        let active = tasks_active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, call.id);
        assert!(tasks_completed().is_empty());

        let toggled = task_toggle(milk.id);
        assert!(toggled.ok, "{}", toggled.message);
        assert_eq!(toggled.task.map(|row| row.is_done), Some(true));
        assert_eq!(tasks_active().len(), 1);
        assert_eq!(tasks_completed().len(), 1);

        let missing = task_toggle(milk.id + call.id + 100);
        assert!(!missing.ok);
        assert!(missing.message.contains("not found"));

        let lines = state_snapshot();
        assert_eq!(lines.len(), 2);

        let deleted = task_delete(call.id);
        assert!(deleted.ok, "{}", deleted.message);
        assert_eq!(deleted.task.map(|row| row.label), Some("Call home".to_string()));
        assert!(tasks_active().is_empty());
        assert_eq!(tasks_completed().len(), 1);

        let restored = state_restore(lines);
        assert_eq!(restored.restored, 2);
        assert_eq!(tasks_active().len(), 1);
        assert_eq!(tasks_completed().len(), 1);

        let after = task_add("Water plants".to_string());
        assert!(after.ok, "{}", after.message);
        let fresh = after.task.expect("accepted add should echo the row");
        assert!(fresh.id > milk.id && fresh.id > call.id);
    }
}
