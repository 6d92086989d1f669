//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ticklist_core::{StoreResult, TaskStore};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("ticklist_core ping={}", ticklist_core::ping());
    println!("ticklist_core version={}", ticklist_core::core_version());
    match store_smoke() {
        Ok(report) => println!("ticklist_core store {report}"),
        Err(err) => println!("ticklist_core store error={err}"),
    }
}

fn store_smoke() -> StoreResult<String> {
    let mut store = TaskStore::new();
    let first = store.add("probe the store")?;
    store.add("exercise both views")?;
    store.toggle(first.id)?;
    Ok(format!(
        "active={} completed={} snapshot_lines={}",
        store.active_tasks().len(),
        store.completed_tasks().len(),
        store.snapshot().len()
    ))
}
