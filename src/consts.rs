/// Standard date format used for the `time` stamp: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV file read when no input is given
pub(crate) const DEFAULT_INPUT: &str = "mrtp.csv";

pub(crate) const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub(crate) const DEFAULT_DATABASE: &str = "NetworkLibraryTest";

/// Record field names with special meaning
pub(crate) const FIELD_RTT_DATA: &str = "rttData";
pub(crate) const FIELD_TIME: &str = "time";
pub(crate) const FIELD_LIBRARY: &str = "library";
pub(crate) const FIELD_PACKET_STYLE: &str = "packetStyle";
pub(crate) const FIELD_TIME_STAMP: &str = "timeStamp";

/// MongoDB server error code for a unique index violation
pub(crate) const DUPLICATE_KEY_CODE: i32 = 11000;

/// Placeholder for absent summary values in tables
pub(crate) const MISSING: &str = "-";
