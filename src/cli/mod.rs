//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// arcwiki - wiki pages with a category graph
#[derive(Parser, Debug)]
#[command(name = "arcwiki", version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical form of a title
    Canon(CanonArgs),

    /// Create, render, and remove pages
    #[command(subcommand)]
    Page(PageCommand),

    /// Create, render, and remove categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Find pages by title
    Search(SearchArgs),

    /// Rebuild category membership from page and category bodies
    Sync(SyncArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `canon` command
#[derive(Parser, Debug)]
pub struct CanonArgs {
    /// Title text; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum PageCommand {
    /// Create a page or replace its body
    Save(SaveArgs),

    /// Render a page
    Show(ShowArgs),

    /// Delete a page
    Delete(DeleteArgs),

    /// List all pages
    #[command(name = "ls", alias = "list")]
    List(ListArgs),
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// Create an empty category
    Add(AddArgs),

    /// Create a category or replace its body
    Save(SaveArgs),

    /// Render a category with its members
    Show(ShowArgs),

    /// Delete a category
    Delete(DeleteArgs),

    /// List all categories
    #[command(name = "ls", alias = "list")]
    List(ListArgs),
}

/// Arguments for `save` commands
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Title (canonicalized before storage)
    pub title: String,

    /// Read the body from this file instead of stdin
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `show` commands
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Title (canonicalized before lookup)
    pub title: String,

    /// Print a complete HTML document instead of the body fragment
    #[arg(long)]
    pub standalone: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `add` commands
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Title (canonicalized before storage)
    pub title: String,
}

/// Arguments for `delete` commands
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Title (canonicalized before lookup)
    pub title: String,
}

/// Arguments for `ls` commands
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in page titles
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `sync` command
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Keep running a pass every interval
    #[arg(short, long)]
    pub watch: bool,

    /// Seconds between passes (overrides config file)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Stop after this many passes
    #[arg(long, requires = "watch")]
    pub ticks: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
