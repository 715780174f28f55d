//! quotebook import コマンド

use super::Context;
use crate::notify::ConsoleNotifier;
use crate::output::print_state;
use crate::transfer::{import_error_message, import_file};
use crate::widget::lock;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// JSON file containing an array of quotes
    pub path: PathBuf,
}

pub async fn run(ctx: &Context, args: Args) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;
    let mut widget = lock(&widget);

    import_file(&mut widget, ctx.fs.as_ref(), &args.path, &ConsoleNotifier)
        .map_err(|e| import_error_message(&e))?;

    print_state(widget.state());
    Ok(())
}
