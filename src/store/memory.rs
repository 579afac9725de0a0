use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::FIELD_TIME_STAMP;
use crate::core::{Destination, TestRecord};
use crate::error::StoreError;

use super::{InsertOutcome, RecordStore};

/// In-process store with the same uniqueness rule as the MongoDB index
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    collections: RefCell<HashMap<Destination, Vec<TestRecord>>>,
}

impl MemoryStore {
    pub(crate) fn count(&self, destination: Destination) -> usize {
        self.collections
            .borrow()
            .get(&destination)
            .map_or(0, Vec::len)
    }
}

impl RecordStore for MemoryStore {
    fn insert_if_absent(
        &self,
        destination: Destination,
        record: &TestRecord,
    ) -> Result<InsertOutcome, StoreError> {
        let mut collections = self.collections.borrow_mut();
        let records = collections.entry(destination).or_default();
        let time_stamp = record.get(FIELD_TIME_STAMP);
        if records.iter().any(|r| r.get(FIELD_TIME_STAMP) == time_stamp) {
            return Ok(InsertOutcome::Duplicate);
        }
        records.push(record.clone());
        Ok(InsertOutcome::Inserted)
    }

    fn list(&self, destination: Destination) -> Result<Vec<TestRecord>, StoreError> {
        Ok(self
            .collections
            .borrow()
            .get(&destination)
            .cloned()
            .unwrap_or_default())
    }

    fn find(
        &self,
        destination: Destination,
        time_stamp: &str,
    ) -> Result<Option<TestRecord>, StoreError> {
        Ok(self.collections.borrow().get(&destination).and_then(|records| {
            records
                .iter()
                .find(|r| r.get(FIELD_TIME_STAMP) == Some(time_stamp))
                .cloned()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time_stamp: &str) -> TestRecord {
        let mut record = TestRecord::default();
        record.set("timeStamp", time_stamp);
        record
    }

    #[test]
    fn same_time_stamp_is_stored_once() {
        let store = MemoryStore::default();
        assert_eq!(
            store.insert_if_absent(Destination::Kcp, &record("T1")).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            store.insert_if_absent(Destination::Kcp, &record("T1")).unwrap(),
            InsertOutcome::Duplicate
        );
        assert_eq!(store.count(Destination::Kcp), 1);
    }

    #[test]
    fn uniqueness_is_per_destination() {
        let store = MemoryStore::default();
        store.insert_if_absent(Destination::Kcp, &record("T1")).unwrap();
        assert_eq!(
            store.insert_if_absent(Destination::Tcp, &record("T1")).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(store.count(Destination::Kcp), 1);
        assert_eq!(store.count(Destination::Tcp), 1);
    }

    #[test]
    fn find_by_time_stamp() {
        let store = MemoryStore::default();
        store.insert_if_absent(Destination::Enet, &record("T1")).unwrap();
        store.insert_if_absent(Destination::Enet, &record("T2")).unwrap();
        let found = store.find(Destination::Enet, "T2").unwrap().unwrap();
        assert_eq!(found.get("timeStamp"), Some("T2"));
        assert!(store.find(Destination::Enet, "T3").unwrap().is_none());
        assert!(store.find(Destination::Other, "T1").unwrap().is_none());
    }
}
