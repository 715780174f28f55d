//! リモート同期
//!
//! 一定間隔でリモートの投稿を取得して未登録の本文だけをマージし、
//! 続けてローカルの全名言を送信する（送信済みかどうかは追跡しない）。
//!
//! ## 使い方
//!
//! ```ignore
//! let service = SyncService::new(remote, notifier, Arc::new(TracingReporter), config.sync);
//! let widget = Widget::init(durable, session)?.into_shared();
//!
//! // 1サイクルだけ実行し、送信の完了を待つ
//! for push in service.sync_cycle(&widget).await {
//!     let _ = push.await;
//! }
//!
//! // 以降は interval ごとに実行（停止しない）
//! service.spawn_periodic(widget.clone());
//! ```

use crate::config::SyncConfig;
use crate::error::Result;
use crate::notify::{Notifier, SYNC_MESSAGE};
use crate::quote::Quote;
use crate::remote::RemoteClient;
use crate::report::ErrorReporter;
use crate::widget::{lock, SharedWidget};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// 同期サービス
#[derive(Clone)]
pub struct SyncService {
    remote: Arc<dyn RemoteClient>,
    notifier: Arc<dyn Notifier>,
    reporter: Arc<dyn ErrorReporter>,
    config: SyncConfig,
}

impl SyncService {
    pub fn new(
        remote: Arc<dyn RemoteClient>,
        notifier: Arc<dyn Notifier>,
        reporter: Arc<dyn ErrorReporter>,
        config: SyncConfig,
    ) -> Self {
        Self {
            remote,
            notifier,
            reporter,
            config,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// 設定を差し替える（watch の --interval など）
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// リモートから取得してマージし、追加件数を返す
    ///
    /// 通信・デコードの失敗は報告のみで 0 を返す。
    /// 1件以上追加された場合だけ通知を1回出す。
    pub async fn fetch_remote(&self, widget: &SharedWidget) -> usize {
        let posts = match self.remote.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                self.reporter.report("Error fetching server data", &e);
                return 0;
            }
        };

        let incoming: Vec<Quote> = posts
            .into_iter()
            .take(self.config.fetch_limit)
            .map(|post| Quote::new(post.title, self.config.server_category.as_str()))
            .collect();

        let merged = lock(widget).merge_remote(incoming);

        match merged {
            Ok(0) => {
                tracing::debug!("no new quotes from server");
                0
            }
            Ok(added) => {
                tracing::info!(added, "merged quotes from server");
                self.notifier.show(SYNC_MESSAGE);
                added
            }
            Err(e) => {
                self.reporter.report("Error saving server quotes", &e);
                0
            }
        }
    }

    /// 名言を1件送信（切り離したタスクで実行）
    ///
    /// 失敗は報告のみでリトライしない。待つ必要がある呼び出し側のために
    /// `JoinHandle` を返す。
    pub fn push_local(&self, quote: Quote) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        let reporter = Arc::clone(&self.reporter);

        tokio::spawn(async move {
            match remote.post_quote(&quote).await {
                Ok(body) => tracing::debug!(response = %body, "quote posted to server"),
                Err(e) => reporter.report("Error posting quote to server", &e),
            }
        })
    }

    /// 取得・マージを完了させてから、全名言を送信
    pub async fn sync_cycle(&self, widget: &SharedWidget) -> Vec<JoinHandle<()>> {
        self.fetch_remote(widget).await;

        let quotes = lock(widget).quotes().to_vec();
        tracing::debug!(count = quotes.len(), "pushing local quotes");
        quotes
            .into_iter()
            .map(|quote| self.push_local(quote))
            .collect()
    }

    /// 名言を追加し、追加した名言を送信
    pub fn add_quote(
        &self,
        widget: &SharedWidget,
        text: &str,
        category: &str,
    ) -> Result<(Quote, JoinHandle<()>)> {
        let quote = lock(widget).add_quote(text, category)?;
        let push = self.push_local(quote.clone());
        Ok((quote, push))
    }

    /// interval ごとに同期サイクルを起動
    ///
    /// 最初の実行は1 interval 後。前のサイクルが終わっていなくても
    /// 新しいサイクルを起動する（相互排他なし）。タイマーは停止しない。
    pub fn spawn_periodic(&self, widget: SharedWidget) -> JoinHandle<()> {
        let service = self.clone();
        let period = self.config.interval;

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let service = service.clone();
                let widget = Arc::clone(&widget);
                tokio::spawn(async move {
                    service.sync_cycle(&widget).await;
                });
            }
        })
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
