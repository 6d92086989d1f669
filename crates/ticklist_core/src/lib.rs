//! Core task-list engine for Ticklist.
//! This crate is the single source of truth for business invariants.

pub mod ids;
pub mod logging;
pub mod model;
pub mod snapshot;
pub mod store;

pub use ids::TaskIdGenerator;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_label, Task, TaskId, TaskValidationError};
pub use snapshot::DecodedSnapshot;
pub use store::task_store::{StoreError, StoreResult, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
