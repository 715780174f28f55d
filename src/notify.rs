//! ユーザー向けの一時通知
//!
//! 同期・インポートから描画先を切り離すための `Notifier`。

use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

/// 同期で新しい名言が追加されたときの通知
pub const SYNC_MESSAGE: &str = "Quotes synced with server!";
/// インポート成功時の通知
pub const IMPORT_MESSAGE: &str = "Quotes imported successfully!";

/// 通知の表示先
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str);
}

/// 標準出力へ通知（ワンショットコマンド用）
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, message: &str) {
        println!("{} {}", "!".yellow().bold(), message.yellow());
    }
}

/// スピナー表示中の通知
///
/// スピナーの再描画と混ざらないよう、一時的にスピナーを消して内側の通知先へ渡す。
pub struct ProgressNotifier {
    inner: Arc<dyn Notifier>,
    pb: ProgressBar,
}

impl ProgressNotifier {
    pub fn new(inner: Arc<dyn Notifier>, pb: ProgressBar) -> Self {
        Self { inner, pb }
    }
}

impl Notifier for ProgressNotifier {
    fn show(&self, message: &str) {
        self.pb.suspend(|| self.inner.show(message));
    }
}

/// チャネル経由で通知（TUI がイベントループで受け取る）
pub struct ChannelNotifier {
    tx: UnboundedSender<String>,
}

impl ChannelNotifier {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn show(&self, message: &str) {
        // 受信側が終了済みなら捨てる
        let _ = self.tx.send(message.to_string());
    }
}

/// 通知を記録するだけの実装
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn show(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
