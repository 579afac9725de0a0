use std::cell::RefCell;
use std::collections::HashSet;

use mongodb::IndexModel;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::sync::{Client, Collection, Database};

use crate::consts::{DUPLICATE_KEY_CODE, FIELD_RTT_DATA, FIELD_TIME_STAMP};
use crate::core::{Destination, TestRecord};
use crate::error::StoreError;
use crate::utils::debug_enabled;

use super::{InsertOutcome, RecordStore};

/// MongoDB-backed store; one database, one collection per destination
pub(crate) struct MongoStore {
    database: Database,
    /// Collections whose unique timeStamp index exists this run
    indexed: RefCell<HashSet<Destination>>,
}

fn connect_error(uri: &str, source: mongodb::error::Error) -> StoreError {
    StoreError::Connect {
        uri: uri.to_string(),
        source,
    }
}

fn command_error(
    operation: &'static str,
    destination: Destination,
    source: mongodb::error::Error,
) -> StoreError {
    StoreError::Command {
        operation,
        collection: destination.collection(),
        source,
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE
    )
}

fn to_document(record: &TestRecord) -> Document {
    let mut document = Document::new();
    let samples: Vec<Bson> = record.rtt_data.iter().cloned().map(Bson::String).collect();
    document.insert(FIELD_RTT_DATA, samples);
    for (name, value) in &record.fields {
        document.insert(name.clone(), value.clone());
    }
    document
}

fn bson_to_string(value: Bson) -> String {
    match value {
        Bson::String(s) => s,
        Bson::ObjectId(id) => id.to_hex(),
        other => other.to_string(),
    }
}

fn from_document(document: Document) -> TestRecord {
    let mut record = TestRecord::default();
    for (name, value) in document {
        match value {
            Bson::Array(items) if name == FIELD_RTT_DATA => {
                record.rtt_data = items.into_iter().map(bson_to_string).collect();
            }
            value => record.set(name, bson_to_string(value)),
        }
    }
    record
}

impl MongoStore {
    /// Connect and verify the server answers a ping
    pub(crate) fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        if debug_enabled() {
            eprintln!("[DEBUG] Connecting to {uri} (database {database})");
        }
        let client = Client::with_uri_str(uri).map_err(|e| connect_error(uri, e))?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(|e| connect_error(uri, e))?;

        Ok(Self {
            database: client.database(database),
            indexed: RefCell::new(HashSet::new()),
        })
    }

    fn collection(&self, destination: Destination) -> Collection<Document> {
        self.database.collection(destination.collection())
    }

    /// Make timeStamp unique so the insert itself rejects duplicates
    fn ensure_time_stamp_index(&self, destination: Destination) -> Result<(), StoreError> {
        if self.indexed.borrow().contains(&destination) {
            return Ok(());
        }
        let index = IndexModel::builder()
            .keys(doc! { FIELD_TIME_STAMP: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection(destination)
            .create_index(index)
            .run()
            .map_err(|e| command_error("create_index", destination, e))?;
        if debug_enabled() {
            eprintln!(
                "[DEBUG] Unique {} index ready on {}",
                FIELD_TIME_STAMP,
                destination.collection()
            );
        }
        self.indexed.borrow_mut().insert(destination);
        Ok(())
    }
}

impl RecordStore for MongoStore {
    fn insert_if_absent(
        &self,
        destination: Destination,
        record: &TestRecord,
    ) -> Result<InsertOutcome, StoreError> {
        self.ensure_time_stamp_index(destination)?;

        match self.collection(destination).insert_one(to_document(record)).run() {
            Ok(result) => {
                if debug_enabled() {
                    eprintln!(
                        "[DEBUG] Inserted {} into {}",
                        result.inserted_id,
                        destination.collection()
                    );
                }
                Ok(InsertOutcome::Inserted)
            }
            Err(e) if is_duplicate_key(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(command_error("insert", destination, e)),
        }
    }

    fn list(&self, destination: Destination) -> Result<Vec<TestRecord>, StoreError> {
        let cursor = self
            .collection(destination)
            .find(doc! {})
            .run()
            .map_err(|e| command_error("find", destination, e))?;

        let mut records = Vec::new();
        for document in cursor {
            let document = document.map_err(|e| command_error("find", destination, e))?;
            records.push(from_document(document));
        }
        Ok(records)
    }

    fn find(
        &self,
        destination: Destination,
        time_stamp: &str,
    ) -> Result<Option<TestRecord>, StoreError> {
        let document = self
            .collection(destination)
            .find_one(doc! { FIELD_TIME_STAMP: time_stamp })
            .run()
            .map_err(|e| command_error("find_one", destination, e))?;
        Ok(document.map(from_document))
    }
}
