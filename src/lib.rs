//! arcwiki - wiki markup rendering with a self-healing category graph

pub mod cli;
pub mod domain;
pub mod infra;
pub mod render;
pub mod store;
pub mod sync;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_canon, handle_category, handle_completions, handle_page, handle_search,
        handle_sync,
    },
};
use infra::init_logging;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_logging(&config.log_settings(cli.verbose));
    let db_path = config.database_path(cli.db.as_ref());

    match &cli.command {
        Command::Canon(args) => handle_canon(args),
        Command::Page(command) => handle_page(command, &db_path, &config),
        Command::Category(command) => handle_category(command, &db_path, &config),
        Command::Search(args) => handle_search(args, &db_path),
        Command::Sync(args) => handle_sync(args, &db_path, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
