//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

use crate::core::Destination;

use super::args::SortOrder;

#[derive(Debug, Clone, Subcommand, PartialEq)]
pub(crate) enum Commands {
    /// Import a test run CSV into its destination collection (default)
    Import {
        /// CSV file to read [default: mrtp.csv]
        file: Option<PathBuf>,

        /// Parse and route only; do not contact the database
        #[arg(long)]
        dry_run: bool,
    },
    /// List stored test runs in a destination
    List {
        #[arg(value_enum)]
        destination: Destination,

        /// Sort order by timeStamp
        #[arg(short, long, value_enum, default_value = "asc")]
        order: SortOrder,
    },
    /// Show one stored test run by timeStamp
    Show {
        #[arg(value_enum)]
        destination: Destination,

        time_stamp: String,
    },
}

/// Resolve the subcommand; no subcommand means a plain import
pub(crate) fn parse_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Import {
        file: None,
        dry_run: false,
    })
}
