use std::path::Path;

use crate::cli::{Cli, Commands, SortOrder};
use crate::core::{Destination, TestRecord, load_record};
use crate::error::AppError;
use crate::output::{
    ListTableOptions, output_import_json, output_import_text, output_list_json,
    output_record_json, render_list_table,
};
use crate::store::{InsertOutcome, MongoStore, RecordStore};
use crate::utils::{Timezone, debug_enabled};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) timezone: Timezone,
}

/// A parsed record, stamped with today's date and routed
#[derive(Debug)]
pub(crate) struct PreparedImport {
    pub(crate) record: TestRecord,
    pub(crate) destination: Destination,
}

pub(crate) fn prepare_import(path: &Path, timezone: Timezone) -> Result<PreparedImport, AppError> {
    let mut record = load_record(path)?;
    record.stamp_date(timezone.today());
    let destination = Destination::for_record(&record)?;
    record.time_stamp()?;

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Routing library={} packetStyle={} to {}",
            record.library()?,
            record.packet_style()?,
            destination.collection()
        );
    }
    Ok(PreparedImport {
        record,
        destination,
    })
}

pub(crate) fn import_prepared(
    store: &dyn RecordStore,
    prepared: &PreparedImport,
) -> Result<InsertOutcome, AppError> {
    Ok(store.insert_if_absent(prepared.destination, &prepared.record)?)
}

fn print_import(ctx: &CommandContext<'_>, prepared: &PreparedImport, outcome: Option<InsertOutcome>) {
    let out = if ctx.cli.json {
        output_import_json(&prepared.record, prepared.destination, outcome)
    } else {
        output_import_text(&prepared.record, prepared.destination, outcome)
    };
    println!("{out}");
}

fn handle_import(
    ctx: &CommandContext<'_>,
    file: Option<&Path>,
    dry_run: bool,
) -> Result<(), AppError> {
    let prepared = prepare_import(ctx.cli.input_path(file), ctx.timezone)?;
    if dry_run {
        print_import(ctx, &prepared, None);
        return Ok(());
    }

    let store = MongoStore::connect(ctx.cli.uri(), ctx.cli.database())?;
    let outcome = import_prepared(&store, &prepared)?;
    print_import(ctx, &prepared, Some(outcome));
    Ok(())
}

pub(crate) fn list_records(
    store: &dyn RecordStore,
    destination: Destination,
    order: SortOrder,
    json: bool,
    use_color: bool,
) -> Result<String, AppError> {
    let records = store.list(destination)?;
    if json {
        return Ok(output_list_json(&records, order));
    }
    if records.is_empty() {
        return Ok(format!("No records found in {}.", destination.collection()));
    }
    Ok(render_list_table(
        &records,
        destination,
        ListTableOptions { order, use_color },
    ))
}

pub(crate) fn show_record(
    store: &dyn RecordStore,
    destination: Destination,
    time_stamp: &str,
) -> Result<String, AppError> {
    match store.find(destination, time_stamp)? {
        Some(record) => Ok(output_record_json(&record)),
        None => Err(AppError::RecordNotFound {
            time_stamp: time_stamp.to_string(),
            collection: destination.collection(),
        }),
    }
}

/// Run one resolved command to completion
pub(crate) fn run(command: Commands, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match command {
        Commands::Import { file, dry_run } => handle_import(ctx, file.as_deref(), dry_run),
        Commands::List { destination, order } => {
            let store = MongoStore::connect(ctx.cli.uri(), ctx.cli.database())?;
            let out = list_records(
                &store,
                destination,
                order,
                ctx.cli.json,
                ctx.cli.use_color(),
            )?;
            println!("{out}");
            Ok(())
        }
        Commands::Show {
            destination,
            time_stamp,
        } => {
            let store = MongoStore::connect(ctx.cli.uri(), ctx.cli.database())?;
            println!("{}", show_record(&store, destination, &time_stamp)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use std::fs;

    const RELIABLE_RUN: &str = "0,12\n1,15\nlibrary,mrtp\npacketStyle,reliable\ntimeStamp,T1\n";

    fn write_csv(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("mrtp.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn prepare_import_builds_stamped_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, RELIABLE_RUN);
        let tz = Timezone::Named(chrono_tz::UTC);
        let prepared = prepare_import(&path, tz).unwrap();

        assert_eq!(prepared.record.rtt_data, vec!["12", "15"]);
        assert_eq!(prepared.record.get("library"), Some("mrtp"));
        assert_eq!(prepared.record.get("packetStyle"), Some("reliable"));
        assert_eq!(prepared.record.get("timeStamp"), Some("T1"));
        let today = tz.today().format("%Y-%m-%d").to_string();
        assert_eq!(prepared.record.get("time"), Some(today.as_str()));
        assert_eq!(prepared.destination, Destination::MrtpReliable);
    }

    #[test]
    fn prepare_import_requires_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "packetStyle,reliable\ntimeStamp,T1\n");
        let err = prepare_import(&path, Timezone::Local).unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "library" }));
    }

    #[test]
    fn prepare_import_requires_time_stamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "library,tcp\npacketStyle,reliable\n");
        let err = prepare_import(&path, Timezone::Local).unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "timeStamp" }));
    }

    #[test]
    fn second_import_with_same_time_stamp_is_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, RELIABLE_RUN);
        let store = MemoryStore::default();

        let prepared = prepare_import(&path, Timezone::Local).unwrap();
        assert_eq!(
            import_prepared(&store, &prepared).unwrap(),
            InsertOutcome::Inserted
        );
        let again = prepare_import(&path, Timezone::Local).unwrap();
        assert_eq!(
            import_prepared(&store, &again).unwrap(),
            InsertOutcome::Duplicate
        );
        assert_eq!(store.count(Destination::MrtpReliable), 1);
    }

    #[test]
    fn rerunning_is_idempotent_for_document_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "library,kcp\npacketStyle,x\ntimeStamp,42\n");
        let store = MemoryStore::default();
        for _ in 0..5 {
            let prepared = prepare_import(&path, Timezone::Local).unwrap();
            import_prepared(&store, &prepared).unwrap();
        }
        assert_eq!(store.count(Destination::Kcp), 1);
    }

    #[test]
    fn list_and_show_read_back_imports() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::default();
        for ts in ["300", "100"] {
            let path = write_csv(
                &dir,
                &format!("0,5\nlibrary,enet\npacketStyle,reliable\ntimeStamp,{ts}\naverageRtt,5\n"),
            );
            let prepared = prepare_import(&path, Timezone::Local).unwrap();
            import_prepared(&store, &prepared).unwrap();
        }

        let json = list_records(&store, Destination::Enet, SortOrder::Asc, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["timeStamp"], "100");
        assert_eq!(value[1]["timeStamp"], "300");

        let shown = show_record(&store, Destination::Enet, "300").unwrap();
        let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(value["rttData"][0], "5");
        assert_eq!(value["library"], "enet");
    }

    #[test]
    fn list_empty_destination_reports_no_records() {
        let store = MemoryStore::default();
        let out = list_records(&store, Destination::Tcp, SortOrder::Asc, false, false).unwrap();
        assert_eq!(out, "No records found in tcp_test.");
    }

    #[test]
    fn show_missing_time_stamp_is_not_found() {
        let store = MemoryStore::default();
        let err = show_record(&store, Destination::Other, "nope").unwrap_err();
        assert_eq!(err.to_string(), "No record with timeStamp nope in other.");
    }
}
