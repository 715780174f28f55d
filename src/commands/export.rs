//! quotebook export コマンド

use super::Context;
use crate::output::success;
use crate::transfer::{export_to_file, EXPORT_FILE_NAME};
use crate::widget::lock;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output file
    #[arg(long, short, default_value = EXPORT_FILE_NAME)]
    pub output: PathBuf,
}

pub async fn run(ctx: &Context, args: Args) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;
    let widget = lock(&widget);

    export_to_file(ctx.fs.as_ref(), &args.output, widget.quotes())
        .map_err(|e| format!("Error exporting JSON: {}", e))?;

    println!(
        "{}",
        success(&format!(
            "Exported {} quote(s) to {}",
            widget.quotes().len(),
            args.output.display()
        ))
    );
    Ok(())
}
