use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed line {line}: \"{content}\" (expected name,value)")]
    MalformedLine { line: usize, content: String },

    #[error("Line {line}: \"rttData\" is reserved for numbered samples")]
    ReservedField { line: usize },

    #[error("Missing required field \"{field}\"")]
    MissingField { field: &'static str },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("No record with timeStamp {time_stamp} in {collection}.")]
    RecordNotFound {
        time_stamp: String,
        collection: &'static str,
    },

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to connect to MongoDB at {uri}: {source}")]
    Connect {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("MongoDB {operation} on {collection} failed: {source}")]
    Command {
        operation: &'static str,
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
}
