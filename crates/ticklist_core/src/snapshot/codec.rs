//! Snapshot record codec.
//!
//! # Responsibility
//! - Encode tasks into flat `<id>|<doneFlag>|<escapedLabel>` record strings.
//! - Decode snapshot lines back into tasks without ever failing.
//!
//! # Invariants
//! - Literal `|` inside labels is replaced by the U+0001 sentinel before the
//!   delimiter is applied, so field splitting cannot be confused by label
//!   content.
//! - Records decode in their original order; a malformed record degrades to
//!   a best-effort task instead of aborting the whole restore.
//! - Fallback IDs drawn for unparsable record IDs never collide with parsed
//!   IDs from the same snapshot.

use crate::ids::TaskIdGenerator;
use crate::model::task::{Task, TaskId};

/// Field separator between id, done flag and label.
const FIELD_DELIMITER: char = '|';

/// Reserved code point standing in for a literal `|` inside label text.
const LABEL_SENTINEL: char = '\u{0001}';

const DONE_FLAG: &str = "1";
const NOT_DONE_FLAG: &str = "0";

/// Decoded snapshot contents plus the generator seeded to continue safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSnapshot {
    /// Restored tasks in original snapshot order.
    pub tasks: Vec<Task>,
    /// ID generator advanced past every ID present in the snapshot.
    pub ids: TaskIdGenerator,
}

/// Encodes tasks into one record string per task, in sequence order.
pub fn encode(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(encode_record).collect()
}

/// Decodes snapshot lines back into tasks, in original order.
///
/// Record IDs are scanned in a first pass so the generator starts strictly
/// above every parsable ID; records whose ID cannot be parsed then draw a
/// fresh fallback value from the generator (which still advances, once per
/// corrupt record). This keeps IDs unique regardless of where a corrupt
/// record sits relative to valid ones.
pub fn decode(lines: &[String]) -> DecodedSnapshot {
    let mut ids = TaskIdGenerator::new();
    for line in lines {
        if let Some(id) = parse_record_id(line) {
            ids.observe(id);
        }
    }

    let tasks = lines
        .iter()
        .map(|line| decode_record(line, &mut ids))
        .collect();

    DecodedSnapshot { tasks, ids }
}

fn encode_record(task: &Task) -> String {
    let done_flag = if task.is_done { DONE_FLAG } else { NOT_DONE_FLAG };
    format!(
        "{id}{sep}{done_flag}{sep}{label}",
        id = task.id,
        sep = FIELD_DELIMITER,
        label = escape_label(&task.label),
    )
}

/// Rebuilds one task from one record line.
///
/// Degradation rules for malformed records:
/// - unparsable id: next generator value (the generator still advances);
/// - done flag anything other than `"1"`: not done;
/// - missing label segment: empty label.
fn decode_record(line: &str, ids: &mut TaskIdGenerator) -> Task {
    let mut parts = line.splitn(3, FIELD_DELIMITER);

    let id = parts
        .next()
        .and_then(|raw| raw.parse::<TaskId>().ok())
        .unwrap_or_else(|| ids.next_id());
    let is_done = parts.next() == Some(DONE_FLAG);
    let label = parts.next().map(unescape_label).unwrap_or_default();

    Task { id, label, is_done }
}

fn parse_record_id(line: &str) -> Option<TaskId> {
    line.split(FIELD_DELIMITER).next()?.parse().ok()
}

fn escape_label(label: &str) -> String {
    label
        .chars()
        .map(|ch| if ch == FIELD_DELIMITER { LABEL_SENTINEL } else { ch })
        .collect()
}

fn unescape_label(escaped: &str) -> String {
    escaped
        .chars()
        .map(|ch| if ch == LABEL_SENTINEL { FIELD_DELIMITER } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_record, encode_record, escape_label, unescape_label};
    use crate::ids::TaskIdGenerator;
    use crate::model::task::Task;

    #[test]
    fn encode_record_joins_id_flag_and_label_with_pipes() {
        let task = Task {
            id: 4,
            label: "call home".to_string(),
            is_done: true,
        };
        assert_eq!(encode_record(&task), "4|1|call home");
    }

    #[test]
    fn escape_label_swaps_delimiters_for_sentinels_and_back() {
        let escaped = escape_label("milk|eggs|butter");
        assert_eq!(escaped, "milk\u{1}eggs\u{1}butter");
        assert_eq!(unescape_label(&escaped), "milk|eggs|butter");
    }

    #[test]
    fn decode_record_reads_well_formed_lines() {
        let mut ids = TaskIdGenerator::new();
        let task = decode_record("12|0|water plants", &mut ids);
        assert_eq!(task.id, 12);
        assert!(!task.is_done);
        assert_eq!(task.label, "water plants");
    }

    #[test]
    fn decode_record_draws_a_fallback_id_for_unparsable_ids() {
        let mut ids = TaskIdGenerator::new();
        ids.observe(12);

        let task = decode_record("not-a-number|1|kept", &mut ids);
        assert_eq!(task.id, 13);
        assert!(task.is_done);
        assert_eq!(task.label, "kept");
    }

    #[test]
    fn decode_record_defaults_missing_segments() {
        let mut ids = TaskIdGenerator::new();

        let id_only = decode_record("7", &mut ids);
        assert_eq!(id_only.id, 7);
        assert!(!id_only.is_done);
        assert_eq!(id_only.label, "");

        let no_label = decode_record("8|1", &mut ids);
        assert!(no_label.is_done);
        assert_eq!(no_label.label, "");
    }

    #[test]
    fn decode_record_treats_unknown_done_flags_as_not_done() {
        let mut ids = TaskIdGenerator::new();
        let task = decode_record("3|yes|ambiguous", &mut ids);
        assert_eq!(task.id, 3);
        assert!(!task.is_done);
    }
}
