//! quotebook sync コマンド

use super::Context;
use crate::notify::{ConsoleNotifier, ProgressNotifier};
use crate::output::success;
use crate::widget::lock;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

pub async fn run(ctx: &Context) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    let service = ctx.sync_service(Arc::new(ProgressNotifier::new(
        Arc::new(ConsoleNotifier),
        pb.clone(),
    )));
    pb.set_message(format!("Syncing with {}", service.config().endpoint));
    pb.enable_steady_tick(Duration::from_millis(100));

    let pushes = service.sync_cycle(&widget).await;
    let pushed = pushes.len();
    // 送信は切り離したタスクだが、ワンショット実行では終了前に完了を待つ
    for push in pushes {
        let _ = push.await;
    }

    pb.finish_and_clear();

    println!(
        "{}",
        success(&format!(
            "Sync complete: {} quote(s) in store, {} sent",
            lock(&widget).quotes().len(),
            pushed
        ))
    );
    Ok(())
}
