//! Transient-state snapshot layer.
//!
//! # Responsibility
//! - Define the reversible mapping between the task sequence and the flat
//!   string records handed to the host for teardown/recreate survival.
//!
//! # Invariants
//! - Snapshots are transient handoff data, not durable storage: no file
//!   format, no crash-recovery guarantees.
//! - Decoding is total: malformed records degrade, the restore never fails.

pub mod codec;

pub use codec::{decode, encode, DecodedSnapshot};
