//! Core module - test run records and where they are stored

mod destination;
mod parser;
mod record;

pub(crate) use destination::Destination;
pub(crate) use parser::load_record;
pub(crate) use record::TestRecord;
