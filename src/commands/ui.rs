//! quotebook ui コマンド

use super::Context;
use crate::notify::{ChannelNotifier, Notifier};
use crate::transfer::EXPORT_FILE_NAME;
use crate::tui;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::unbounded_channel;

pub async fn run(ctx: &Context) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;

    let (tx, rx) = unbounded_channel();
    let notifier: Arc<dyn Notifier> = Arc::new(ChannelNotifier::new(tx));
    let service = ctx.sync_service(Arc::clone(&notifier));

    // ページの寿命と同じく、タイマーは停止しない
    service.spawn_periodic(Arc::clone(&widget));

    let session = tui::Session {
        widget,
        fs: Arc::clone(&ctx.fs),
        notifier,
        notifications: rx,
        service,
        export_path: PathBuf::from(EXPORT_FILE_NAME),
    };

    let handle = Handle::current();
    tokio::task::spawn_blocking(move || tui::run(session, handle))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}
