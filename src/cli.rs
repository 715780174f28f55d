use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{add, export, filter, import, next, watch};

#[derive(Debug, Parser)]
#[command(name = "quotebook")]
#[command(about = "Quote book with category filter and server sync", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 全コマンド共通のオプション
#[derive(Debug, Clone, ClapArgs)]
pub struct GlobalArgs {
    /// Directory for durable data (quotes, selected category, config.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for session data (last shown quote)
    #[arg(long, global = true, value_name = "DIR")]
    pub session_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current quote (the last shown one, or a random pick)
    Show,

    /// Show a new random quote
    Next(next::Args),

    /// Add a quote
    Add(add::Args),

    /// List categories
    Categories,

    /// Select the category filter ("all" for no filter)
    Filter(filter::Args),

    /// Export all quotes as JSON
    Export(export::Args),

    /// Import quotes from a JSON file
    Import(import::Args),

    /// Run one sync cycle with the server
    Sync,

    /// Sync with the server periodically until interrupted
    Watch(watch::Args),

    /// Open the interactive quote widget
    Ui,

    /// Forget the last shown quote
    EndSession,
}
