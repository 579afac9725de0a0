//! Import result rendering

use crate::core::{Destination, TestRecord};
use crate::store::InsertOutcome;

/// What happened to the record; `None` outcome means a dry run
fn status_label(outcome: Option<InsertOutcome>) -> &'static str {
    outcome.map_or("dry-run", InsertOutcome::status)
}

pub(crate) fn output_import_json(
    record: &TestRecord,
    destination: Destination,
    outcome: Option<InsertOutcome>,
) -> String {
    let value = serde_json::json!({
        "destination": destination.key(),
        "collection": destination.collection(),
        "status": status_label(outcome),
        "record": record,
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Record followed by the status line
pub(crate) fn output_import_text(
    record: &TestRecord,
    destination: Destination,
    outcome: Option<InsertOutcome>,
) -> String {
    let mut out = serde_json::to_string_pretty(record).unwrap_or_default();
    out.push('\n');
    match outcome {
        Some(outcome) => out.push_str(outcome.message()),
        None => {
            out.push_str("dry run: would insert into ");
            out.push_str(destination.collection());
        }
    }
    out
}
