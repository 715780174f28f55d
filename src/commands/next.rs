//! quotebook next コマンド

use super::Context;
use crate::output::print_state;
use crate::widget::lock;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Switch the category filter before picking ("all" for no filter)
    #[arg(long, short)]
    pub category: Option<String>,
}

pub async fn run(ctx: &Context, args: Args) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;
    let mut widget = lock(&widget);

    let state = match args.category {
        Some(category) => {
            if !widget.has_option(&category) {
                return Err(format!("Unknown category: {}", category));
            }
            widget.select_category(&category)
        }
        None => widget.show_next(),
    }
    .map_err(|e| e.to_string())?;

    print_state(state);
    Ok(())
}
