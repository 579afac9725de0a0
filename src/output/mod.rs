mod format;
mod json;
mod record;
mod table;

pub(crate) use json::{output_list_json, output_record_json};
pub(crate) use record::{output_import_json, output_import_text};
pub(crate) use table::{ListTableOptions, render_list_table};

/// Columns shown when listing a destination
pub(crate) const SUMMARY_FIELDS: [&str; 12] = [
    "timeStamp",
    "time",
    "library",
    "packetStyle",
    "upstreamLoss",
    "upstreamLatency",
    "upstreamDeviation",
    "downstreamLoss",
    "downstreamLatency",
    "downstreamDeviation",
    "sendSlap",
    "averageRtt",
];
