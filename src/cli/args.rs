//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{DEFAULT_DATABASE, DEFAULT_INPUT, DEFAULT_URI};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest timeStamp first (default)
    #[default]
    Asc,
    /// Newest timeStamp first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "mrtp-import")]
#[command(about = "Import network library test runs from CSV into MongoDB", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// MongoDB connection string [default: mongodb://localhost:27017]
    #[arg(long, global = true, value_name = "URI")]
    pub(crate) uri: Option<String>,

    /// Database holding the test collections [default: NetworkLibraryTest]
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) database: Option<String>,

    /// Timezone used for the record date (e.g., "UTC", "Asia/Shanghai")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Input file from the config file, used when no FILE is given
    #[arg(skip)]
    pub(crate) default_input: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.uri.is_none() {
            self.uri = config.uri.clone();
        }
        if self.database.is_none() {
            self.database = config.database.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.default_input.is_none() {
            self.default_input = config.input.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn uri(&self) -> &str {
        self.uri.as_deref().unwrap_or(DEFAULT_URI)
    }

    pub(crate) fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Pick the CSV to import: explicit FILE, then config, then `mrtp.csv`
    pub(crate) fn input_path<'a>(&'a self, file: Option<&'a Path>) -> &'a Path {
        file.or(self.default_input.as_deref())
            .unwrap_or_else(|| Path::new(DEFAULT_INPUT))
    }
}
