use serde_json::{Map, Value};

use crate::cli::SortOrder;
use crate::core::TestRecord;
use crate::output::format::sort_by_time_stamp;
use crate::output::SUMMARY_FIELDS;

fn summary_value(record: &TestRecord) -> Value {
    let mut map = Map::new();
    for field in SUMMARY_FIELDS {
        let value = record
            .get(field)
            .map_or(Value::Null, |v| Value::String(v.to_string()));
        map.insert(field.to_string(), value);
    }
    Value::Object(map)
}

pub(crate) fn output_list_json(records: &[TestRecord], order: SortOrder) -> String {
    let mut sorted = records.to_vec();
    sort_by_time_stamp(&mut sorted, order);
    let output: Vec<Value> = sorted.iter().map(summary_value).collect();
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

pub(crate) fn output_record_json(record: &TestRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_default()
}
