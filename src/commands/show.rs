//! quotebook show コマンド

use super::Context;
use crate::output::{format_filter, print_state};
use crate::widget::lock;

pub async fn run(ctx: &Context) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;
    let widget = lock(&widget);

    print_state(widget.state());
    println!("{}", format_filter(widget.selected()));

    Ok(())
}
