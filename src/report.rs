//! バックグラウンド処理のエラー報告
//!
//! 同期や送信の失敗はユーザーに見せず、ここへ報告するだけにする。

use crate::error::QbError;
#[cfg(test)]
use std::sync::Mutex;

/// エラー報告先
pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &str, error: &QbError);
}

/// tracing へ報告
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, context: &str, error: &QbError) {
        // 通信以外（保存失敗など）はローカルの問題なので error で残す
        if error.is_user_facing() {
            tracing::error!(%error, "{}", context);
        } else {
            tracing::warn!(%error, "{}", context);
        }
    }
}

/// 報告を記録する実装
#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// (context, error message) の一覧
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl ErrorReporter for RecordingReporter {
    fn report(&self, context: &str, error: &QbError) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push((context.to_string(), error.to_string()));
        }
    }
}
