mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod store;
mod utils;

use clap::Parser;

use app::CommandContext;
use cli::{Cli, parse_command};
use config::Config;
use error::AppError;
use utils::{Timezone, set_debug};

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    // JSON output keeps stderr quiet about config loading
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let mut cli = cli.with_config(&config);
    set_debug(cli.debug);

    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let command = parse_command(cli.command.take());
    let ctx = CommandContext {
        cli: &cli,
        timezone,
    };
    app::run(command, &ctx)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
