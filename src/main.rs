mod category;
mod cli;
mod commands;
mod config;
mod display;
mod env;
mod error;
mod fs;
mod logging;
mod notify;
mod output;
mod quote;
mod remote;
mod report;
mod storage;
mod store;
mod sync;
mod transfer;
mod tui;
mod widget;

use clap::Parser;
use cli::{Cli, Command};
use config::AppPaths;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // TUI は画面を占有するのでログはファイルへ
    match (&cli.command, AppPaths::resolve(cli.global.data_dir.clone(), None)) {
        (Command::Ui, Ok(paths)) => logging::init_file(cli.global.verbose, &paths.log_file()),
        _ => logging::init_stderr(cli.global.verbose),
    }

    if let Err(err) = commands::dispatch(cli.command, cli.global).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
