//! Test run record assembled from one CSV file

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::consts::{
    DATE_FORMAT, FIELD_LIBRARY, FIELD_PACKET_STYLE, FIELD_RTT_DATA, FIELD_TIME, FIELD_TIME_STAMP,
};
use crate::error::AppError;

/// One network library test run.
///
/// `rttData` holds the numbered RTT samples in file order; every other
/// column pair lands in `fields`. Serializes flat, as it is stored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TestRecord {
    #[serde(rename = "rttData")]
    pub(crate) rtt_data: Vec<String>,
    #[serde(flatten)]
    pub(crate) fields: BTreeMap<String, String>,
}

impl TestRecord {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Set a named field, replacing any earlier value
    pub(crate) fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub(crate) fn push_sample(&mut self, value: impl Into<String>) {
        self.rtt_data.push(value.into());
    }

    /// Tag the record with the import date
    pub(crate) fn stamp_date(&mut self, date: NaiveDate) {
        self.set(FIELD_TIME, date.format(DATE_FORMAT).to_string());
    }

    pub(crate) fn require(&self, field: &'static str) -> Result<&str, AppError> {
        self.get(field).ok_or(AppError::MissingField { field })
    }

    pub(crate) fn library(&self) -> Result<&str, AppError> {
        self.require(FIELD_LIBRARY)
    }

    pub(crate) fn packet_style(&self) -> Result<&str, AppError> {
        self.require(FIELD_PACKET_STYLE)
    }

    pub(crate) fn time_stamp(&self) -> Result<&str, AppError> {
        self.require(FIELD_TIME_STAMP)
    }

    pub(crate) fn is_reserved(name: &str) -> bool {
        name == FIELD_RTT_DATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_value() {
        let mut record = TestRecord::default();
        record.set("library", "tcp");
        record.set("library", "kcp");
        assert_eq!(record.get("library"), Some("kcp"));
        assert_eq!(record.fields.len(), 1);
    }

    #[test]
    fn stamp_date_uses_iso_format() {
        let mut record = TestRecord::default();
        record.set("time", "from-csv");
        record.stamp_date(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
        assert_eq!(record.get("time"), Some("2026-03-07"));
    }

    #[test]
    fn require_reports_missing_field() {
        let record = TestRecord::default();
        let err = record.time_stamp().unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "timeStamp" }));
    }

    #[test]
    fn serializes_flat_with_rtt_array() {
        let mut record = TestRecord::default();
        record.push_sample("12");
        record.push_sample("15");
        record.set("library", "mrtp");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rttData"], serde_json::json!(["12", "15"]));
        assert_eq!(json["library"], "mrtp");
    }
}
