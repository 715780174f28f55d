//! テスト用モックリモート

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// 応答を差し替えられるモックリモート
pub struct MockRemote {
    titles: Mutex<Option<Vec<String>>>,
    fail_posts: bool,
    posted: Mutex<Vec<Quote>>,
    fetch_delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl MockRemote {
    /// 指定タイトルの投稿を返す
    pub fn with_titles(titles: &[&str]) -> Self {
        Self {
            titles: Mutex::new(Some(titles.iter().map(|t| t.to_string()).collect())),
            fail_posts: false,
            posted: Mutex::new(Vec::new()),
            fetch_delay: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// 取得が常に失敗する
    pub fn failing() -> Self {
        Self {
            titles: Mutex::new(None),
            fail_posts: true,
            posted: Mutex::new(Vec::new()),
            fetch_delay: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// 送信だけ失敗させる
    pub fn with_failing_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    /// 取得の応答を遅らせる
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// 開始された取得の回数
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// 送信された名言
    pub fn posted(&self) -> Vec<Quote> {
        self.posted.lock().unwrap().clone()
    }
}

impl RemoteClient for MockRemote {
    fn fetch_posts<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RemotePost>>> + Send + 'a>> {
        let titles = self.titles.lock().unwrap().clone();
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let delay = self.fetch_delay;
        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match titles {
                Some(titles) => Ok(titles
                    .into_iter()
                    .map(|title| RemotePost { title })
                    .collect()),
                None => Err(QbError::RemoteApi {
                    status: 503,
                    message: "Service Unavailable".to_string(),
                }),
            }
        })
    }

    fn post_quote<'a>(
        &'a self,
        quote: &'a Quote,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_posts {
                return Err(QbError::RemoteApi {
                    status: 500,
                    message: "Failed to post quote".to_string(),
                });
            }
            self.posted.lock().unwrap().push(quote.clone());
            Ok(serde_json::json!({ "id": 101, "text": quote.text, "category": quote.category }))
        })
    }
}
