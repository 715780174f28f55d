//! TUI (Terminal User Interface)
//!
//! ratatui/crossterm を使用した名言ウィジェット。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update
//! - `view`: 画面描画

mod app;
mod view;

use crate::fs::FileSystem;
use crate::notify::Notifier;
use crate::sync::SyncService;
use crate::widget::SharedWidget;
use app::{update, Model, Msg, UpdateEffect};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

/// キー入力待ちの間隔（通知の期限切れ判定もこの周期で行う）
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// TUI の実行に必要なもの
pub struct Session {
    pub widget: SharedWidget,
    pub fs: Arc<dyn FileSystem>,
    pub notifier: Arc<dyn Notifier>,
    pub notifications: UnboundedReceiver<String>,
    pub service: SyncService,
    pub export_path: PathBuf,
}

/// TUI を実行（ブロッキング）
///
/// 送信や同期は `handle` のランタイムに切り離して起動する。
pub fn run(session: Session, handle: Handle) -> io::Result<()> {
    let _guard = handle.enter();
    let Session {
        widget,
        fs,
        notifier,
        mut notifications,
        service,
        export_path,
    } = session;

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(widget, fs, notifier, export_path);

    // メインループ
    let result = loop {
        if model.should_quit {
            break Ok(());
        }

        while let Ok(message) = notifications.try_recv() {
            update(&mut model, Msg::Notify(message), Instant::now());
        }
        update(&mut model, Msg::Tick, Instant::now());

        if let Err(e) = terminal.draw(|f| view::view(f, &model)) {
            break Err(e);
        }

        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => break Err(e),
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(msg) = model.key_to_msg(key.code) {
                    let effect = update(&mut model, msg, Instant::now());
                    apply_effect(effect, &service, &model.widget);
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// update の副作用を実行
fn apply_effect(effect: UpdateEffect, service: &SyncService, widget: &SharedWidget) {
    if let Some(quote) = effect.push {
        service.push_local(quote);
    }
    if effect.sync_now {
        let service = service.clone();
        let widget = Arc::clone(widget);
        tokio::spawn(async move {
            service.sync_cycle(&widget).await;
        });
    }
}
