//! quotebook end-session コマンド

use super::Context;
use crate::output::success;
use crate::widget::lock;

pub async fn run(ctx: &Context) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;
    lock(&widget).end_session().map_err(|e| e.to_string())?;

    println!("{}", success("Session cleared"));
    Ok(())
}
