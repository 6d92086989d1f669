//! Flutter-facing binding crate for the Ticklist core.
//!
//! Keep this crate thin: translate between bridge-friendly envelope types
//! and `ticklist_core`, and never let core errors escape as panics.

pub mod api;
