//! quotebook add コマンド

use super::Context;
use crate::notify::ConsoleNotifier;
use crate::output::{print_state, success};
use crate::widget::lock;
use clap::Parser;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    /// Quote text
    pub text: String,

    /// Quote category
    #[arg(long, short)]
    pub category: String,

    /// Do not post the new quote to the server
    #[arg(long)]
    pub no_push: bool,
}

pub async fn run(ctx: &Context, args: Args) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;

    let quote = if args.no_push {
        lock(&widget)
            .add_quote(&args.text, &args.category)
            .map_err(|e| e.to_string())?
    } else {
        let service = ctx.sync_service(Arc::new(ConsoleNotifier));
        let (quote, push) = service
            .add_quote(&widget, &args.text, &args.category)
            .map_err(|e| e.to_string())?;
        // 送信失敗はログのみ。プロセス終了前に完了だけ待つ
        let _ = push.await;
        quote
    };

    println!(
        "{}",
        success(&format!("Added quote to \"{}\"", quote.category))
    );
    print_state(lock(&widget).state());

    Ok(())
}
