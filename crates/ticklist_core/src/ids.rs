//! ID generation for store-issued task identifiers.
//!
//! # Responsibility
//! - Hand out strictly increasing `TaskId` values for one store instance.
//! - Track externally sourced IDs so snapshot restore keeps uniqueness.
//!
//! # Invariants
//! - The counter never decreases and never wraps; once the id space is
//!   exhausted it pins at the final value.
//! - Callers allocate only after validation succeeds, so a rejected add
//!   consumes no ID.

use crate::model::task::TaskId;

/// Monotonic ID source owned by one `TaskStore`.
///
/// IDs start at 0 and advance by one per allocation. The generator is part
/// of the store's constructed state rather than process-wide static data,
/// which keeps independent stores (and tests) isolated from each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIdGenerator {
    next: TaskId,
}

impl TaskIdGenerator {
    /// Creates a generator whose first allocation is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused ID and advances the counter.
    ///
    /// The counter saturates at `TaskId::MAX` instead of wrapping, so an
    /// allocation never panics and never wraps back over lower ids. Only a
    /// snapshot carrying the maximum id can reach that edge; past it, the
    /// final id repeats.
    pub fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// Advances the counter past an ID issued elsewhere.
    ///
    /// Used while decoding a snapshot: once every parsable record ID has
    /// been observed, later allocations sit strictly above all of them, so
    /// fallback IDs for corrupt records cannot collide no matter where the
    /// corrupt record appears in the snapshot.
    pub fn observe(&mut self, id: TaskId) {
        if id >= self.next {
            self.next = id.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskIdGenerator;

    #[test]
    fn next_id_starts_at_zero_and_increases_by_one() {
        let mut ids = TaskIdGenerator::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn observe_advances_past_external_ids() {
        let mut ids = TaskIdGenerator::new();
        ids.observe(7);
        assert_eq!(ids.next_id(), 8);
    }

    #[test]
    fn observe_ignores_ids_already_below_the_counter() {
        let mut ids = TaskIdGenerator::new();
        ids.observe(5);
        ids.observe(2);
        assert_eq!(ids.next_id(), 6);
    }

    #[test]
    fn observe_of_the_current_counter_value_still_advances() {
        let mut ids = TaskIdGenerator::new();
        ids.observe(0);
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn next_id_pins_at_the_ceiling_instead_of_wrapping() {
        let mut ids = TaskIdGenerator::new();
        ids.observe(u64::MAX);

        assert_eq!(ids.next_id(), u64::MAX);
        assert_eq!(ids.next_id(), u64::MAX);
    }
}
