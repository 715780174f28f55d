//! quotebook filter コマンド

use super::Context;
use crate::output::{format_filter, print_state};
use crate::widget::lock;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Category name, or "all" for no filter
    pub value: String,
}

pub async fn run(ctx: &Context, args: Args) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;
    let mut widget = lock(&widget);

    if !widget.has_option(&args.value) {
        return Err(format!(
            "Unknown category: {} (available: {})",
            args.value,
            widget.options().join(", ")
        ));
    }

    widget
        .select_category(&args.value)
        .map_err(|e| e.to_string())?;

    println!("{}", format_filter(widget.selected()));
    print_state(widget.state());
    Ok(())
}
