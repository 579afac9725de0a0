//! Record storage abstraction
//!
//! The importer talks to a `RecordStore`; MongoDB is the real backend and
//! tests run against an in-memory one.

mod mongo;
#[cfg(test)]
pub(crate) mod memory;

pub(crate) use mongo::MongoStore;

use crate::core::{Destination, TestRecord};
use crate::error::StoreError;

/// Result of an insert attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertOutcome {
    Inserted,
    /// A record with the same timeStamp already exists; nothing was written
    Duplicate,
}

impl InsertOutcome {
    pub(crate) fn status(self) -> &'static str {
        match self {
            InsertOutcome::Inserted => "inserted",
            InsertOutcome::Duplicate => "duplicate",
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            InsertOutcome::Inserted => "insert successfully",
            InsertOutcome::Duplicate => "timeStamp is duplicated",
        }
    }
}

pub(crate) trait RecordStore {
    /// Store `record` unless its destination already holds the same timeStamp.
    /// Must be atomic with respect to concurrent writers.
    fn insert_if_absent(
        &self,
        destination: Destination,
        record: &TestRecord,
    ) -> Result<InsertOutcome, StoreError>;

    /// All records in a destination, in storage order
    fn list(&self, destination: Destination) -> Result<Vec<TestRecord>, StoreError>;

    fn find(
        &self,
        destination: Destination,
        time_stamp: &str,
    ) -> Result<Option<TestRecord>, StoreError>;
}
